//! Error types for headless component state.

use thiserror::Error;

use crate::slot::Ownership;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Controlled-slot contract violations.
pub enum StateError {
    /// A slot observed an external value that contradicts the ownership fixed at construction.
    ///
    /// The slot keeps its original ownership; the observation is ignored.
    #[error("slot resolved as {expected:?} but caller now {observed}")]
    OwnershipConflict {
        /// Ownership decided at construction.
        expected: Ownership,
        /// What the caller did on this update.
        observed: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Table configuration and data errors.
pub enum TableError {
    /// A sort column was given without a direction or the other way round.
    #[error("sort column and direction must both be set or both be empty")]
    InvalidSortState,
    /// Two rows produced the same key.
    #[error("rows {first} and {second} share the same row key")]
    DuplicateRowKey {
        /// Index of the first row with the key.
        first: usize,
        /// Index of the later row with the key.
        second: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Free-text input parse failures. Callers keep their last valid value.
pub enum ParseError {
    /// Input was empty after trimming.
    #[error("input is empty")]
    Empty,
    /// Amount text is not a finite decimal number.
    #[error("`{0}` is not a valid amount")]
    InvalidAmount(String),
    /// Date text does not match the expected format.
    #[error("`{input}` does not match date format `{format}`")]
    InvalidDate {
        /// Rejected input.
        input: String,
        /// Expected `chrono` format string.
        format: String,
    },
}

#[derive(Debug, Error)]
/// Component default configuration errors.
pub enum ConfigError {
    /// The payload is not valid JSON for [`crate::ComponentDefaults`].
    #[error("invalid component defaults: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the components cannot use.
    #[error("invalid component defaults field `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}
