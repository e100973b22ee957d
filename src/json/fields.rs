//! Field-glue constructors: from a model lens to a specification-ready
//! field.
//!
//! Each constructor pairs a [`Lens`] with the matching leaf transformer and
//! maps the lens through it, yielding a [`FieldLens`] to place in a
//! [`Specification`](crate::adapter::Specification). Every shape comes in a
//! required and an optional (`_opt`, default-bearing) variant; the optional
//! variants take the *transformed* default: the JSON value an absent model
//! field encodes to (typically `json!(0)`, `json!("")`, or `Value::Null`
//! for nested objects and arrays).

use serde_json::Value;

use super::number::NumberRepr;
use super::transformers;
use crate::adapter::{FieldLens, JsonAdapter};
use crate::optics::Lens;
use crate::transform::{lift_vec, transform_lens, transform_lens_optional};

/// A required numeric field of any [`NumberRepr`] width.
pub fn json_number<M, T, L>(lens: L) -> FieldLens<M>
where
    M: 'static,
    T: NumberRepr + Clone + 'static,
    L: Lens<M, T> + Clone + Send + Sync + 'static,
{
    transform_lens(lens, transformers::number::<T>())
}

/// An optional numeric field; an absent value encodes to `default`.
pub fn json_number_opt<M, T, L>(lens: L, default: Value) -> FieldLens<M>
where
    M: 'static,
    T: NumberRepr + Clone + 'static,
    L: Lens<M, Option<T>> + Clone + Send + Sync + 'static,
{
    transform_lens_optional(lens, transformers::number::<T>(), default)
}

/// A required string field.
pub fn json_string<M, L>(lens: L) -> FieldLens<M>
where
    M: 'static,
    L: Lens<M, String> + Clone + Send + Sync + 'static,
{
    transform_lens(lens, transformers::string())
}

/// An optional string field; an absent value encodes to `default`.
pub fn json_string_opt<M, L>(lens: L, default: Value) -> FieldLens<M>
where
    M: 'static,
    L: Lens<M, Option<String>> + Clone + Send + Sync + 'static,
{
    transform_lens_optional(lens, transformers::string(), default)
}

/// A required boolean field, modeled as a JSON number (0/1).
pub fn json_bool<M, L>(lens: L) -> FieldLens<M>
where
    M: 'static,
    L: Lens<M, bool> + Clone + Send + Sync + 'static,
{
    transform_lens(lens, transformers::boolean())
}

/// An optional boolean field; an absent value encodes to `default`.
pub fn json_bool_opt<M, L>(lens: L, default: Value) -> FieldLens<M>
where
    M: 'static,
    L: Lens<M, Option<bool>> + Clone + Send + Sync + 'static,
{
    transform_lens_optional(lens, transformers::boolean(), default)
}

/// A required nested-object field, mapped through another model's adapter.
pub fn json_object<M, B, L>(lens: L, adapter: &JsonAdapter<B>) -> FieldLens<M>
where
    M: 'static,
    B: Clone + 'static,
    L: Lens<M, B> + Clone + Send + Sync + 'static,
{
    transform_lens(lens, adapter.as_transformer())
}

/// An optional nested-object field; an absent value encodes to `default`
/// (typically `Value::Null`).
///
/// Note the decode asymmetry: a missing key decodes the field to `None`,
/// but an explicitly present `Value::Null` is a variant mismatch for the
/// nested adapter and fails.
pub fn json_object_opt<M, B, L>(lens: L, adapter: &JsonAdapter<B>, default: Value) -> FieldLens<M>
where
    M: 'static,
    B: Clone + 'static,
    L: Lens<M, Option<B>> + Clone + Send + Sync + 'static,
{
    transform_lens_optional(lens, adapter.as_transformer(), default)
}

/// A required array-of-models field, mapped element-wise through another
/// model's adapter.
pub fn json_array<M, B, L>(lens: L, adapter: &JsonAdapter<B>) -> FieldLens<M>
where
    M: 'static,
    B: Clone + 'static,
    L: Lens<M, Vec<B>> + Clone + Send + Sync + 'static,
{
    transform_lens(
        lens,
        lift_vec(adapter.as_transformer()).and_then(transformers::array()),
    )
}

/// An optional array-of-models field; an absent value encodes to `default`
/// (typically `Value::Null`). Shares the decode asymmetry of
/// [`json_object_opt`].
pub fn json_array_opt<M, B, L>(lens: L, adapter: &JsonAdapter<B>, default: Value) -> FieldLens<M>
where
    M: 'static,
    B: Clone + 'static,
    L: Lens<M, Option<Vec<B>>> + Clone + Send + Sync + 'static,
{
    transform_lens_optional(
        lens,
        lift_vec(adapter.as_transformer()).and_then(transformers::array()),
        default,
    )
}
