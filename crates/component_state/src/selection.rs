//! Value-set selection shared by accordions, toggle groups and comboboxes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// How many values a group may hold at once.
pub enum SelectionMode {
    /// At most one value.
    Single {
        /// Whether activating the selected value clears it.
        allow_empty: bool,
    },
    /// Any number of values.
    Multiple,
}

impl Default for SelectionMode {
    fn default() -> Self {
        Self::Single { allow_empty: true }
    }
}

/// Selection after `value` is activated.
///
/// Multiple mode flips membership and keeps the order values were first selected in. Single
/// mode replaces the selection, or clears it when the selected value is activated again and
/// clearing is allowed.
pub fn toggle_value(current: &[String], value: &str, mode: SelectionMode) -> Vec<String> {
    let selected = current.iter().any(|existing| existing == value);
    match mode {
        SelectionMode::Single { allow_empty } => match (selected, allow_empty) {
            (true, true) => Vec::new(),
            (true, false) => current.to_vec(),
            (false, _) => vec![value.to_string()],
        },
        SelectionMode::Multiple if selected => current
            .iter()
            .filter(|existing| existing.as_str() != value)
            .cloned()
            .collect(),
        SelectionMode::Multiple => {
            let mut next = current.to_vec();
            next.push(value.to_string());
            next
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Selectable option with a stable value and a display label.
pub struct SelectOption {
    /// Stable value reported to callbacks.
    pub value: String,
    /// Label shown and matched against filter queries.
    pub label: String,
    /// Whether the option can be chosen.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

/// Options whose label contains `query`, ignoring case. An empty query keeps every option.
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
        .collect()
}

/// Label of the option whose value is `value`.
pub fn label_for<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.as_str())
}
