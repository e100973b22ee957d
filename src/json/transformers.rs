//! The leaf transformer catalog.
//!
//! One reversible transformer per primitive model type, converting to and
//! from the JSON leaf representation, plus the object and array container
//! transformers. Forward conversion succeeds for any in-range input; the
//! reverse direction fails with [`MappingError::InvalidInput`] whenever the
//! JSON value's variant does not match the expected one, naming both
//! variants in the failure.
//!
//! # Example
//!
//! ```
//! use refract::json::transformers;
//! use serde_json::Value;
//!
//! let string = transformers::string();
//! assert_eq!(
//!     string.transform("foo".to_string()),
//!     Ok(Value::String("foo".to_string()))
//! );
//! assert!(string.reverse_transform(Value::Array(vec![])).is_err());
//! ```

use serde_json::{Map, Number, Value};

use super::error::{JsonKind, MappingError};
use super::number::NumberRepr;
use crate::transform::ValueTransformer;

/// A reversible transformer between a model-side type and the JSON tree.
pub type JsonTransformer<A> = ValueTransformer<A, Value, MappingError>;

/// Boxed number to and from JSON number.
///
/// The boxed-number side is the external [`serde_json::Number`]; reverse
/// fails on any non-number variant.
#[must_use]
pub fn number_value() -> JsonTransformer<Number> {
    ValueTransformer::new(
        |number: Number| Ok(Value::Number(number)),
        |value: Value| match value {
            Value::Number(number) => Ok(number),
            other => Err(MappingError::mismatch(JsonKind::Number, &other)),
        },
    )
}

/// Primitive numeric type to and from boxed number.
///
/// The boxing step of the catalog; sequenced with [`number_value`] it forms
/// the per-width leaf transformer.
#[must_use]
pub fn boxing<T>() -> ValueTransformer<T, Number, MappingError>
where
    T: NumberRepr + 'static,
{
    ValueTransformer::new(
        |value: T| value.into_number(),
        |number: Number| T::from_number(&number),
    )
}

/// Primitive numeric type to and from JSON number.
///
/// Composes the boxing step with the boxed-number transformer. The width
/// is selected at build time through [`NumberRepr`].
///
/// # Example
///
/// ```
/// use refract::json::transformers;
/// use serde_json::json;
///
/// let number = transformers::number::<u8>();
/// assert_eq!(number.transform(7), Ok(json!(7)));
/// assert!(number.reverse_transform(json!(300)).is_err());
/// assert!(number.reverse_transform(json!("3")).is_err());
/// ```
#[must_use]
pub fn number<T>() -> JsonTransformer<T>
where
    T: NumberRepr + 'static,
{
    boxing::<T>().and_then(number_value())
}

/// `bool` to and from JSON number (0/1).
///
/// Booleans are modeled as JSON numbers, not as the JSON boolean variant:
/// `true` encodes to `1`, `false` to `0`, and decoding follows the
/// boxed-number convention (any nonzero number is `true`). Decoding a
/// non-number variant fails, including the JSON boolean variant.
#[must_use]
pub fn boolean() -> JsonTransformer<bool> {
    number::<bool>()
}

/// `String` to and from JSON string.
#[must_use]
pub fn string() -> JsonTransformer<String> {
    ValueTransformer::new(
        |value: String| Ok(Value::String(value)),
        |value: Value| match value {
            Value::String(string) => Ok(string),
            other => Err(MappingError::mismatch(JsonKind::String, &other)),
        },
    )
}

/// Key-to-value map to and from JSON object.
///
/// The adapter uses this pair to wrap an encoded field map into a JSON
/// object and to unwrap a JSON object into a field map before decoding.
#[must_use]
pub fn dictionary() -> JsonTransformer<Map<String, Value>> {
    ValueTransformer::new(
        |value: Map<String, Value>| Ok(Value::Object(value)),
        |value: Value| match value {
            Value::Object(object) => Ok(object),
            other => Err(MappingError::mismatch(JsonKind::Object, &other)),
        },
    )
}

/// Value sequence to and from JSON array.
#[must_use]
pub fn array() -> JsonTransformer<Vec<Value>> {
    ValueTransformer::new(
        |value: Vec<Value>| Ok(Value::Array(value)),
        |value: Value| match value {
            Value::Array(array) => Ok(array),
            other => Err(MappingError::mismatch(JsonKind::Array, &other)),
        },
    )
}

static_assertions::assert_impl_all!(JsonTransformer<String>: Send, Sync, Clone);
