//! Model-level error types.

use thiserror::Error;

/// Errors raised while constructing or validating domain models.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A string value fell outside the allow-list of an enumerated field.
    #[error("'{value}' is not a valid {field}")]
    InvalidEnumValue {
        /// The field the value was rejected for, e.g. `"RouteNode type"`.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl ModelError {
    pub(crate) fn invalid_enum(field: &'static str, value: &str) -> Self {
        ModelError::InvalidEnumValue {
            field,
            value: value.to_string(),
        }
    }
}
