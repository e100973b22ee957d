//! The mapping error model.
//!
//! A single error kind crosses the public boundary: [`MappingError::InvalidInput`],
//! signaling a structural mismatch between the expected and the actual data
//! shape. Failures are detected locally at the point of mismatch and
//! propagated upward unchanged; there are no retries and no aggregation of
//! multiple field errors.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Error domain identifying this module's failures.
pub const ERROR_DOMAIN: &str = "refract.json";

/// Error code for [`MappingError::InvalidInput`].
pub const CODE_INVALID_INPUT: u16 = 1;

/// The variant of a JSON value, used in expected-vs-actual descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// `Value::Null`
    Null,
    /// `Value::Bool`
    Bool,
    /// `Value::Number`
    Number,
    /// `Value::String`
    String,
    /// `Value::Array`
    Array,
    /// `Value::Object`
    Object,
}

impl JsonKind {
    /// Returns the variant of the given JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "a JSON null",
            Self::Bool => "a JSON boolean",
            Self::Number => "a JSON number",
            Self::String => "a JSON string",
            Self::Array => "a JSON array",
            Self::Object => "a JSON object",
        };
        formatter.write_str(name)
    }
}

/// The failure type of every transformer and adapter operation.
///
/// Each error carries a machine-distinguishable domain/code pair
/// ([`domain`](Self::domain), [`code`](Self::code)) plus a human-readable
/// description of what was expected and what was actually encountered.
///
/// # Example
///
/// ```
/// use refract::json::{JsonKind, MappingError};
/// use serde_json::Value;
///
/// let error = MappingError::mismatch(JsonKind::Number, &Value::String("3".to_string()));
/// assert_eq!(
///     error.to_string(),
///     "invalid input: expected a JSON number, got a JSON string"
/// );
/// assert_eq!(error.domain(), "refract.json");
/// assert_eq!(error.code(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The input's shape did not match the expected one.
    #[error("invalid input: expected {expected}, got {actual}")]
    InvalidInput {
        /// Description of the expected shape.
        expected: String,
        /// Description of the actually encountered shape.
        actual: String,
    },
}

impl MappingError {
    /// An `InvalidInput` for a JSON value of the wrong variant.
    #[must_use]
    pub fn mismatch(expected: JsonKind, actual: &Value) -> Self {
        Self::InvalidInput {
            expected: expected.to_string(),
            actual: JsonKind::of(actual).to_string(),
        }
    }

    /// An `InvalidInput` for a value outside the expected representation,
    /// such as an out-of-range integer or a non-finite float.
    #[must_use]
    pub fn unrepresentable(expected: impl Into<String>, actual: impl fmt::Display) -> Self {
        Self::InvalidInput {
            expected: expected.into(),
            actual: actual.to_string(),
        }
    }

    /// An `InvalidInput` for a required key absent from a JSON object.
    #[must_use]
    pub fn missing_key(key: &str) -> Self {
        Self::InvalidInput {
            expected: format!("a value for key \"{key}\""),
            actual: "nothing".to_string(),
        }
    }

    /// The error domain of this failure.
    #[must_use]
    pub const fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }

    /// The error code of this failure.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => CODE_INVALID_INPUT,
        }
    }
}
