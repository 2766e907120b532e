//! Sort state machine and the non-destructive sort engine.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::cell::{compare_cells, CellValue, TableRecord};
use crate::error::TableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Active sort direction.
pub enum SortDirection {
    /// Ascending order.
    Ascending,
    /// Descending order (the reversed ascending sequence).
    Descending,
}

impl SortDirection {
    /// `aria-sort` / `data-ui-sort` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Table sort state.
///
/// The `{column, direction}` pair is either fully set or fully empty by construction.
pub enum SortState {
    /// Rows keep their input order.
    #[default]
    Unsorted,
    /// Sorted ascending by the named column.
    Ascending(String),
    /// Sorted descending by the named column.
    Descending(String),
}

impl SortState {
    /// Builds a state from a separate column and direction.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidSortState`] when exactly one of the two is present.
    pub fn from_parts(
        column: Option<String>,
        direction: Option<SortDirection>,
    ) -> Result<Self, TableError> {
        match (column, direction) {
            (None, None) => Ok(Self::Unsorted),
            (Some(column), Some(SortDirection::Ascending)) => Ok(Self::Ascending(column)),
            (Some(column), Some(SortDirection::Descending)) => Ok(Self::Descending(column)),
            _ => Err(TableError::InvalidSortState),
        }
    }

    /// Sorted column key.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Unsorted => None,
            Self::Ascending(column) | Self::Descending(column) => Some(column),
        }
    }

    /// Sort direction.
    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            Self::Unsorted => None,
            Self::Ascending(_) => Some(SortDirection::Ascending),
            Self::Descending(_) => Some(SortDirection::Descending),
        }
    }

    /// Direction applied to `column`, if it is the sorted column.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        (self.column() == Some(column))
            .then(|| self.direction())
            .flatten()
    }

    /// State after the header of `column` is clicked.
    ///
    /// The same column cycles ascending → descending → unsorted; any other column starts
    /// ascending.
    pub fn next_for(&self, column: &str) -> Self {
        match self {
            Self::Ascending(current) if current == column => Self::Descending(column.to_string()),
            Self::Descending(current) if current == column => Self::Unsorted,
            _ => Self::Ascending(column.to_string()),
        }
    }
}

/// Custom row comparator.
pub type SortFn<R> = Rc<dyn Fn(&R, &R) -> Ordering>;

/// Reads the sort/render value of one column from a row.
pub type CellAccessor<R> = Rc<dyn Fn(&R) -> CellValue>;

/// Sorting-relevant part of a column descriptor.
pub struct ColumnSpec<R> {
    key: String,
    sortable: bool,
    sort_fn: Option<SortFn<R>>,
    accessor: CellAccessor<R>,
}

impl<R: TableRecord + 'static> ColumnSpec<R> {
    /// Column reading `key` through [`TableRecord::cell`].
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let field = key.clone();
        Self::with_accessor(key, move |row: &R| row.cell(&field))
    }
}

impl<R: 'static> ColumnSpec<R> {
    /// Column reading its value through `accessor`.
    pub fn with_accessor(key: impl Into<String>, accessor: impl Fn(&R) -> CellValue + 'static) -> Self {
        Self {
            key: key.into(),
            sortable: false,
            sort_fn: None,
            accessor: Rc::new(accessor),
        }
    }

    /// Marks the column sortable with the default comparator.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Marks the column sortable with a custom ascending comparator.
    pub fn sort_by(mut self, compare: impl Fn(&R, &R) -> Ordering + 'static) -> Self {
        self.sortable = true;
        self.sort_fn = Some(Rc::new(compare));
        self
    }

    /// Column key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether clicking the header changes the sort.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Whether a custom comparator replaces the default one.
    pub fn has_custom_sort(&self) -> bool {
        self.sort_fn.is_some()
    }

    /// Value of this column in `row`.
    pub fn cell(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }
}

impl<R> Clone for ColumnSpec<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            sortable: self.sortable,
            sort_fn: self.sort_fn.clone(),
            accessor: Rc::clone(&self.accessor),
        }
    }
}

impl<R> fmt::Debug for ColumnSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("sortable", &self.sortable)
            .field("custom_sort", &self.sort_fn.is_some())
            .finish()
    }
}

/// Row order for `sort`, as indices into `rows`.
///
/// `Unsorted` (or a sort column that no descriptor names) yields the identity order. A custom
/// comparator sorts every row stably; descending reverses that sequence. The default
/// comparator sorts the non-null rows stably, reverses them for descending, and appends the
/// null rows in input order so nulls stay last in both directions.
pub fn sorted_order<R: 'static>(rows: &[R], columns: &[ColumnSpec<R>], sort: &SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    let (Some(key), Some(direction)) = (sort.column(), sort.direction()) else {
        return order;
    };
    let Some(column) = columns.iter().find(|column| column.key == key) else {
        return order;
    };

    if let Some(sort_fn) = column.sort_fn.as_ref() {
        order.sort_by(|a, b| sort_fn(&rows[*a], &rows[*b]));
        if direction == SortDirection::Descending {
            order.reverse();
        }
        return order;
    }

    let cells: Vec<CellValue> = rows.iter().map(|row| column.cell(row)).collect();
    let (mut present, nulls): (Vec<usize>, Vec<usize>) =
        order.into_iter().partition(|index| !cells[*index].is_null());
    present.sort_by(|a, b| compare_cells(&cells[*a], &cells[*b]));
    if direction == SortDirection::Descending {
        present.reverse();
    }
    present.extend(nulls);
    present
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    fn names(rows: &[Value], order: &[usize]) -> Vec<Value> {
        order.iter().map(|index| rows[*index]["n"].clone()).collect()
    }

    #[test]
    fn header_clicks_cycle_three_states() {
        let unsorted = SortState::Unsorted;
        let asc = unsorted.next_for("name");
        let desc = asc.next_for("name");
        let back = desc.next_for("name");

        assert_eq!(asc, SortState::Ascending("name".to_string()));
        assert_eq!(desc, SortState::Descending("name".to_string()));
        assert_eq!(back, SortState::Unsorted);
    }

    #[test]
    fn other_column_always_starts_ascending() {
        for state in [
            SortState::Unsorted,
            SortState::Ascending("name".to_string()),
            SortState::Descending("name".to_string()),
        ] {
            assert_eq!(
                state.next_for("age"),
                SortState::Ascending("age".to_string())
            );
        }
    }

    #[test]
    fn parts_must_agree() {
        assert_eq!(SortState::from_parts(None, None), Ok(SortState::Unsorted));
        assert_eq!(
            SortState::from_parts(Some("age".to_string()), Some(SortDirection::Descending)),
            Ok(SortState::Descending("age".to_string()))
        );
        assert_eq!(
            SortState::from_parts(Some("age".to_string()), None),
            Err(TableError::InvalidSortState)
        );
        assert_eq!(
            SortState::from_parts(None, Some(SortDirection::Ascending)),
            Err(TableError::InvalidSortState)
        );
    }

    #[test]
    fn default_comparator_keeps_nulls_last_in_both_directions() {
        let rows = vec![
            json!({ "id": 1, "n": "b" }),
            json!({ "id": 2, "n": "a" }),
            json!({ "id": 3, "n": null }),
        ];
        let columns = vec![ColumnSpec::<Value>::new("n").sortable()];

        let asc = sorted_order(&rows, &columns, &SortState::Ascending("n".to_string()));
        assert_eq!(names(&rows, &asc), vec![json!("a"), json!("b"), Value::Null]);

        let desc = sorted_order(&rows, &columns, &SortState::Descending("n".to_string()));
        assert_eq!(names(&rows, &desc), vec![json!("b"), json!("a"), Value::Null]);
    }

    #[test]
    fn custom_comparator_is_reversed_for_descending() {
        let rows = vec![
            json!({ "n": "bb" }),
            json!({ "n": "a" }),
            json!({ "n": "ccc" }),
            json!({ "n": "d" }),
        ];
        let columns = vec![ColumnSpec::<Value>::new("n").sort_by(|a: &Value, b: &Value| {
            let len = |row: &Value| row["n"].as_str().map(str::len).unwrap_or(0);
            len(a).cmp(&len(b))
        })];

        let asc = sorted_order(&rows, &columns, &SortState::Ascending("n".to_string()));
        assert_eq!(asc, vec![1, 3, 0, 2]);
        let desc = sorted_order(&rows, &columns, &SortState::Descending("n".to_string()));
        assert_eq!(desc, vec![2, 0, 3, 1]);
    }

    #[test]
    fn unknown_sort_column_passes_rows_through() {
        let rows = vec![json!({ "n": "b" }), json!({ "n": "a" })];
        let columns = vec![ColumnSpec::<Value>::new("n").sortable()];
        assert_eq!(
            sorted_order(&rows, &columns, &SortState::Ascending("missing".to_string())),
            vec![0, 1]
        );
    }
}
