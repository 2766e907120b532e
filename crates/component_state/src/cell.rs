//! Cell values and the default table comparator.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
/// Value a column reads out of a row for default sorting and rendering.
pub enum CellValue {
    /// Missing or null value. Always sorts last.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value, compared numerically against other numbers.
    Number(f64),
    /// Text value.
    Text(String),
}

impl CellValue {
    /// Whether the value is [`CellValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(*value),
            Value::Number(number) => number
                .as_f64()
                .map(Self::Number)
                .unwrap_or_else(|| Self::Text(number.to_string())),
            Value::String(text) => Self::Text(text.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// Row types whose cells can be read by column key.
///
/// This is the default accessor a column uses when no explicit accessor is supplied.
pub trait TableRecord {
    /// Value stored under `key`, [`CellValue::Null`] when absent.
    fn cell(&self, key: &str) -> CellValue;
}

impl TableRecord for Value {
    fn cell(&self, key: &str) -> CellValue {
        self.get(key).map(CellValue::from).unwrap_or(CellValue::Null)
    }
}

impl TableRecord for Map<String, Value> {
    fn cell(&self, key: &str) -> CellValue {
        self.get(key).map(CellValue::from).unwrap_or(CellValue::Null)
    }
}

impl TableRecord for BTreeMap<String, CellValue> {
    fn cell(&self, key: &str) -> CellValue {
        self.get(key).cloned().unwrap_or(CellValue::Null)
    }
}

/// Locale-style string ordering.
///
/// Strings compare case-insensitively first; strings equal after case folding put lowercase
/// before uppercase at the first differing position, then fall back to code-point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Default ascending comparator for two cells.
///
/// Nulls sort after every other value, two numbers compare numerically (NaN ties), and any
/// other pair compares the stringified values with [`locale_compare`].
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Null, CellValue::Null) => Ordering::Equal,
        (CellValue::Null, _) => Ordering::Greater,
        (_, CellValue::Null) => Ordering::Less,
        (CellValue::Number(a), CellValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (a, b) => locale_compare(&a.to_string(), &b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_rows_expose_cells_by_key() {
        let row = json!({ "id": 7, "name": "Ada", "score": 91.5, "active": true, "note": null });
        assert_eq!(row.cell("id"), CellValue::Number(7.0));
        assert_eq!(row.cell("name"), CellValue::Text("Ada".to_string()));
        assert_eq!(row.cell("active"), CellValue::Bool(true));
        assert_eq!(row.cell("note"), CellValue::Null);
        assert_eq!(row.cell("missing"), CellValue::Null);
    }

    #[test]
    fn display_matches_plain_text_rendering() {
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn numbers_compare_numerically_and_mixed_values_as_text() {
        let nine = CellValue::Number(9.0);
        let ten = CellValue::Number(10.0);
        assert_eq!(compare_cells(&nine, &ten), Ordering::Less);

        let ten_text = CellValue::from("10");
        assert_eq!(compare_cells(&nine, &ten_text), Ordering::Greater);
    }

    #[test]
    fn nulls_sort_after_everything() {
        assert_eq!(
            compare_cells(&CellValue::Null, &CellValue::from("a")),
            Ordering::Greater
        );
        assert_eq!(
            compare_cells(&CellValue::Number(-1.0), &CellValue::Null),
            Ordering::Less
        );
    }

    #[test]
    fn locale_ordering_folds_case_before_code_points() {
        let mut words = vec!["banana", "Apple", "apple", "Cherry"];
        words.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(words, vec!["apple", "Apple", "banana", "Cherry"]);
    }
}
