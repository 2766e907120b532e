//! Component defaults loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::table::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Library-wide defaults for stateful components.
///
/// Every field is optional in the JSON payload; omitted fields keep [`Default`] values.
pub struct ComponentDefaults {
    /// Choices offered by the table page-size selector.
    pub page_size_options: Vec<usize>,
    /// Initial page size of an uncontrolled paginated table.
    pub default_page_size: usize,
    /// Pages shown on each side of the current page in numbered pagination.
    pub sibling_count: usize,
    /// Message shown by an empty table.
    pub empty_message: String,
    /// Message shown while a table is loading.
    pub loading_message: String,
    /// Toasts visible at once.
    pub toast_limit: usize,
    /// Auto-dismiss delay for toasts without their own duration. `0` disables auto-dismiss.
    pub toast_duration_ms: u64,
    /// `chrono` format used by date inputs.
    pub date_format: String,
    /// Decimal places shown by amount inputs.
    pub amount_decimals: usize,
    /// Currency symbol prefixed by amount inputs.
    pub currency_symbol: String,
}

impl Default for ComponentDefaults {
    fn default() -> Self {
        Self {
            page_size_options: vec![10, 20, 30, 50],
            default_page_size: DEFAULT_PAGE_SIZE,
            sibling_count: 1,
            empty_message: "No results.".to_string(),
            loading_message: "Loading...".to_string(),
            toast_limit: 3,
            toast_duration_ms: 5_000,
            date_format: "%Y-%m-%d".to_string(),
            amount_decimals: 2,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ComponentDefaults {
    /// Parses and validates defaults from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`] when a
    /// field fails [`ComponentDefaults::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let defaults: Self = serde_json::from_str(raw)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Checks values the components cannot render with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::Invalid {
                field: "page_size_options",
                reason: "must list at least one size",
            });
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::Invalid {
                field: "page_size_options",
                reason: "sizes must be positive",
            });
        }
        if self.default_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "default_page_size",
                reason: "must be positive",
            });
        }
        if self.toast_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "toast_limit",
                reason: "must be positive",
            });
        }
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "date_format",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let defaults =
            ComponentDefaults::from_json(r#"{ "sibling_count": 2, "date_format": "%d.%m.%Y" }"#)
                .expect("valid defaults");
        assert_eq!(defaults.sibling_count, 2);
        assert_eq!(defaults.date_format, "%d.%m.%Y");
        assert_eq!(defaults.page_size_options, vec![10, 20, 30, 50]);
        assert_eq!(defaults.default_page_size, 10);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ComponentDefaults::from_json(r#"{ "page_size_options": [10, 0] }"#)
            .expect_err("zero page size");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "page_size_options",
                ..
            }
        ));
        assert!(matches!(
            ComponentDefaults::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
