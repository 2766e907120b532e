//! Headless data-table driver.
//!
//! [`TableState`] owns the four controlled slots of a table (sort, page, page size, expanded
//! keys) and derives the visible rows from them. The Leptos `DataTable` runs the same
//! transitions over reactive slots; this driver serves non-reactive hosts and tests.

use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use crate::error::{StateError, TableError};
use crate::expansion::{check_unique_keys, ExpandedKeys};
use crate::pagination::PageWindow;
use crate::slot::ControlledSlot;
use crate::sort::{sorted_order, ColumnSpec, SortState};

/// Page size used when the caller supplies neither a value nor a default.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Construction-time table options and first external values.
///
/// A `Some` value makes the matching axis controlled for the table's lifetime.
pub struct TableInit<K: Eq + Hash> {
    /// Whether rows are split into pages.
    pub pagination: bool,
    /// Initial page size for an uncontrolled page-size axis.
    pub default_page_size: usize,
    /// Controlled sort state.
    pub sort_state: Option<SortState>,
    /// Controlled current page.
    pub current_page: Option<usize>,
    /// Controlled page size.
    pub page_size: Option<usize>,
    /// Controlled expanded keys.
    pub expanded_keys: Option<HashSet<K>>,
}

impl<K: Eq + Hash> Default for TableInit<K> {
    fn default() -> Self {
        Self {
            pagination: false,
            default_page_size: DEFAULT_PAGE_SIZE,
            sort_state: None,
            current_page: None,
            page_size: None,
            expanded_keys: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// One rendered row.
pub struct VisibleRow<'a, R, K> {
    /// Absolute index within the sorted data set.
    pub index: usize,
    /// Row record.
    pub row: &'a R,
    /// Row key.
    pub key: K,
    /// Whether the row's detail panel is open.
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// Derived table view for the current state.
pub struct TableView<'a, R, K> {
    /// Rows on the current page, in display order.
    pub rows: Vec<VisibleRow<'a, R, K>>,
    /// Page window the rows were cut from.
    pub window: PageWindow,
}

/// Sortable, paginated, expandable table state.
pub struct TableState<R, K: Eq + Hash> {
    rows: Vec<R>,
    columns: Vec<ColumnSpec<R>>,
    key_of: Rc<dyn Fn(&R) -> K>,
    pagination: bool,
    sort: ControlledSlot<SortState>,
    page: ControlledSlot<usize>,
    page_size: ControlledSlot<usize>,
    expanded: ControlledSlot<ExpandedKeys<K>>,
}

impl<R: 'static, K: Eq + Hash + Clone + 'static> TableState<R, K> {
    /// Creates a table over `rows`. `key_of` must give every row a unique, stable key.
    pub fn new(
        rows: Vec<R>,
        columns: Vec<ColumnSpec<R>>,
        key_of: impl Fn(&R) -> K + 'static,
        init: TableInit<K>,
    ) -> Self {
        Self {
            rows,
            columns,
            key_of: Rc::new(key_of),
            pagination: init.pagination,
            sort: ControlledSlot::new(init.sort_state, SortState::Unsorted),
            page: ControlledSlot::new(init.current_page, 1),
            page_size: ControlledSlot::new(init.page_size, init.default_page_size),
            expanded: ControlledSlot::new(
                init.expanded_keys.map(ExpandedKeys::from),
                ExpandedKeys::new(),
            ),
        }
    }

    /// Notifies `on_sort_change` after every sort transition.
    pub fn on_sort_change(mut self, on_sort_change: impl FnMut(SortState) + 'static) -> Self {
        self.sort.set_on_change(on_sort_change);
        self
    }

    /// Notifies `on_page_change` after every page transition.
    pub fn on_page_change(mut self, on_page_change: impl FnMut(usize) + 'static) -> Self {
        self.page.set_on_change(on_page_change);
        self
    }

    /// Notifies `on_page_size_change` after every page-size transition.
    pub fn on_page_size_change(
        mut self,
        on_page_size_change: impl FnMut(usize) + 'static,
    ) -> Self {
        self.page_size.set_on_change(on_page_size_change);
        self
    }

    /// Notifies `on_expanded_change` with the full new key set after every toggle.
    pub fn on_expanded_change(
        mut self,
        mut on_expanded_change: impl FnMut(HashSet<K>) + 'static,
    ) -> Self {
        self.expanded
            .set_on_change(move |keys: ExpandedKeys<K>| on_expanded_change(keys.into_set()));
        self
    }

    /// Replaces the row data.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Row data in input order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Checks that every row key is unique.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateRowKey`] for the first collision.
    pub fn check_keys(&self) -> Result<(), TableError> {
        check_unique_keys(&self.rows, |row| (self.key_of)(row))
    }

    /// Receives the caller's controlled sort value for a new render.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OwnershipConflict`] when the sort axis changes ownership; the
    /// update is ignored.
    pub fn sync_sort_state(&mut self, sort_state: Option<SortState>) -> Result<(), StateError> {
        self.sort.sync_external(sort_state)
    }

    /// Receives the caller's controlled page for a new render.
    ///
    /// # Errors
    ///
    /// See [`TableState::sync_sort_state`].
    pub fn sync_current_page(&mut self, page: Option<usize>) -> Result<(), StateError> {
        self.page.sync_external(page)
    }

    /// Receives the caller's controlled page size for a new render.
    ///
    /// # Errors
    ///
    /// See [`TableState::sync_sort_state`].
    pub fn sync_page_size(&mut self, page_size: Option<usize>) -> Result<(), StateError> {
        self.page_size.sync_external(page_size)
    }

    /// Receives the caller's controlled expanded keys for a new render.
    ///
    /// # Errors
    ///
    /// See [`TableState::sync_sort_state`].
    pub fn sync_expanded_keys(&mut self, keys: Option<HashSet<K>>) -> Result<(), StateError> {
        self.expanded.sync_external(keys.map(ExpandedKeys::from))
    }

    /// Effective sort state.
    pub fn sort_state(&self) -> &SortState {
        self.sort.value()
    }

    /// Effective current page as stored (unclamped).
    pub fn current_page(&self) -> usize {
        *self.page.value()
    }

    /// Effective page size.
    pub fn page_size(&self) -> usize {
        *self.page_size.value()
    }

    /// Effective expanded keys.
    pub fn expanded_keys(&self) -> &ExpandedKeys<K> {
        self.expanded.value()
    }

    /// Header click on `column`. Non-sortable or unknown columns are ignored.
    pub fn click_header(&mut self, column: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|spec| spec.key() == column && spec.is_sortable());
        if sortable {
            let next = self.sort.value().next_for(column);
            self.sort.set(next);
        }
    }

    /// Moves to `page`.
    pub fn set_page(&mut self, page: usize) {
        self.page.set(page);
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size.set(page_size);
        self.page.set(1);
    }

    /// Flips the expansion of the row with `key`.
    pub fn toggle_expanded(&mut self, key: &K) {
        let next = self.expanded.value().toggled(key);
        self.expanded.set(next);
    }

    /// Sorted row order as indices into [`TableState::rows`].
    pub fn sorted_order(&self) -> Vec<usize> {
        sorted_order(&self.rows, &self.columns, self.sort.value())
    }

    /// Page window for the current state.
    pub fn window(&self) -> PageWindow {
        PageWindow::resolve(
            self.rows.len(),
            self.current_page(),
            self.page_size(),
            self.pagination,
        )
    }

    /// Visible rows for the current state.
    pub fn view(&self) -> TableView<'_, R, K> {
        let order = self.sorted_order();
        let window = self.window();
        let expanded = self.expanded.value();
        let rows = window
            .slice(&order)
            .iter()
            .enumerate()
            .map(|(local, row_index)| {
                let row = &self.rows[*row_index];
                let key = (self.key_of)(row);
                VisibleRow {
                    index: window.absolute_index(local),
                    row,
                    expanded: expanded.contains(&key),
                    key,
                }
            })
            .collect();
        TableView { rows, window }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    fn rows(count: usize) -> Vec<Value> {
        (0..count)
            .map(|id| json!({ "id": id, "name": format!("row-{id:02}") }))
            .collect()
    }

    fn table(count: usize, init: TableInit<u64>) -> TableState<Value, u64> {
        TableState::new(
            rows(count),
            vec![
                ColumnSpec::new("id").sortable(),
                ColumnSpec::new("name"),
            ],
            |row: &Value| row["id"].as_u64().unwrap_or_default(),
            init,
        )
    }

    #[test]
    fn non_sortable_header_is_ignored() {
        let mut state = table(3, TableInit::default());
        state.click_header("name");
        state.click_header("missing");
        assert_eq!(state.sort_state(), &SortState::Unsorted);
    }

    #[test]
    fn unpaginated_view_lists_every_row() {
        let state = table(25, TableInit::default());
        let view = state.view();
        assert_eq!(view.rows.len(), 25);
        assert_eq!(view.window.total_pages, 1);
        assert_eq!(view.rows[24].index, 24);
    }

    #[test]
    fn duplicate_keys_are_detected() {
        let state = TableState::new(
            vec![json!({ "id": 1 }), json!({ "id": 1 })],
            vec![ColumnSpec::new("id")],
            |row: &Value| row["id"].as_u64().unwrap_or_default(),
            TableInit::default(),
        );
        assert_eq!(
            state.check_keys(),
            Err(TableError::DuplicateRowKey {
                first: 0,
                second: 1
            })
        );
    }

    #[test]
    fn controlled_page_ignores_ownership_flip() {
        let mut state = table(
            30,
            TableInit {
                pagination: true,
                current_page: Some(2),
                ..TableInit::default()
            },
        );
        assert!(state.sync_current_page(None).is_err());
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.view().rows[0].index, 10);
    }
}
