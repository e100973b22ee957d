//! Object-level adapters: whole-model to and from JSON object converters.
//!
//! A [`JsonAdapter`] aggregates an ordered [`Specification`] (a mapping
//! from field name to per-field transformer) plus a seed constructor for
//! the model into a single bidirectional converter:
//!
//! - [`transform`](JsonAdapter::transform) encodes a model into a JSON
//!   object by running every field's forward transformer and inserting the
//!   results under their keys.
//! - [`reverse_transform`](JsonAdapter::reverse_transform) decodes a JSON
//!   object by starting from the seed model and repeatedly applying each
//!   field's reverse transformer to update the corresponding field through
//!   its lens.
//!
//! Both directions abort on the first failing field; callers never observe
//! a partial object or a partially-updated model. Adapters hold no mutable
//! state (the one exception is the one-time memoization cell behind
//! [`fix`]), so a single adapter is safely shared across threads for the
//! program's lifetime.

mod fix;
mod specification;

pub use fix::fix;
pub use specification::FieldLens;
pub use specification::Specification;

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::json::MappingError;
use crate::json::transformers;
use crate::transform::ValueTransformer;

/// A bidirectional converter between a model type and a JSON object.
///
/// Constructed once per model type from a [`Specification`] and a seed
/// closure (the decode starting point), then reused for the program's
/// lifetime; cloning shares the underlying specification. Recursive model
/// shapes are constructed through [`fix`].
///
/// # Example
///
/// ```
/// use refract::adapter::JsonAdapter;
/// use refract::json::{json_bool, json_string};
/// use refract::{lens, specification};
/// use serde_json::json;
///
/// #[derive(Clone, Debug, PartialEq, Default)]
/// struct Account {
///     name: String,
///     active: bool,
/// }
///
/// let adapter = JsonAdapter::new(
///     specification! {
///         "name" => json_string(lens!(Account, name)),
///         "active" => json_bool(lens!(Account, active)),
///     },
///     Account::default,
/// );
///
/// let account = Account { name: "felix".to_string(), active: true };
/// let encoded = adapter.transform(&account).unwrap();
/// assert_eq!(encoded, json!({ "name": "felix", "active": 1 }));
/// assert_eq!(adapter.reverse_transform(&encoded).unwrap(), account);
/// ```
pub struct JsonAdapter<M> {
    inner: Arc<Inner<M>>,
}

enum Inner<M> {
    Ready {
        specification: Specification<M>,
        seed: Arc<dyn Fn() -> M + Send + Sync>,
    },
    Deferred(fix::DeferredCell<M>),
}

impl<M> JsonAdapter<M>
where
    M: Clone + 'static,
{
    /// Creates an adapter from a specification and a seed constructor.
    ///
    /// The seed produces the model value decoding starts from; every
    /// specified field is then updated in order from the input object.
    pub fn new(specification: Specification<M>, seed: impl Fn() -> M + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(Inner::Ready {
                specification,
                seed: Arc::new(seed),
            }),
        }
    }

    /// Encodes a model into a JSON object.
    ///
    /// Runs each field's forward transformer in specification order and
    /// inserts the result under the field's key.
    ///
    /// # Errors
    ///
    /// Returns the first field failure, in specification order; no partial
    /// object is observable.
    pub fn transform(&self, model: &M) -> Result<Value, MappingError> {
        match self.inner.as_ref() {
            Inner::Ready { specification, .. } => {
                let current: Result<M, MappingError> = Ok(model.clone());
                let mut object = Map::new();
                for (key, field) in specification.entries() {
                    object.insert(key.clone(), field.get(&current)?);
                }
                transformers::dictionary().transform(object)
            }
            Inner::Deferred(cell) => cell.resolve(self).transform(model),
        }
    }

    /// Decodes a model from a JSON value.
    ///
    /// Requires the value to be a JSON object, seeds an in-progress model,
    /// and threads it through each field's reverse transformer in
    /// specification order. A key absent from the object triggers the
    /// field's missing-key policy: optional fields decode to their absent
    /// state, required fields fail.
    ///
    /// # Errors
    ///
    /// Fails with [`MappingError::InvalidInput`] when the value is not an
    /// object, a required key is missing, or any field's reverse
    /// transformation fails, whichever comes first in specification
    /// order. No partially-updated model is observable.
    pub fn reverse_transform(&self, value: &Value) -> Result<M, MappingError> {
        match self.inner.as_ref() {
            Inner::Ready {
                specification,
                seed,
            } => {
                let object = transformers::dictionary().reverse_transform(value.clone())?;
                let mut current: Result<M, MappingError> = Ok(seed());
                for (key, field) in specification.entries() {
                    if current.is_err() {
                        break;
                    }
                    current = match object.get(key) {
                        Some(field_value) => field.set(current, Ok(field_value.clone())),
                        None => field.set_absent(current, || MappingError::missing_key(key)),
                    };
                }
                current
            }
            Inner::Deferred(cell) => cell.resolve(self).reverse_transform(value),
        }
    }

    /// Lifts this adapter into the transformer algebra.
    ///
    /// The resulting transformer encodes with [`transform`](Self::transform)
    /// and decodes with [`reverse_transform`](Self::reverse_transform),
    /// which is how nested objects and arrays of models compose into a
    /// parent specification.
    #[must_use]
    pub fn as_transformer(&self) -> ValueTransformer<M, Value, MappingError> {
        let encoder = self.clone();
        let decoder = self.clone();
        ValueTransformer::new(
            move |model: M| encoder.transform(&model),
            move |value: Value| decoder.reverse_transform(&value),
        )
    }
}

impl<M> Clone for JsonAdapter<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M> std::fmt::Debug for JsonAdapter<M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.as_ref() {
            Inner::Ready { specification, .. } => formatter
                .debug_struct("JsonAdapter")
                .field("specification", specification)
                .finish_non_exhaustive(),
            Inner::Deferred(cell) => formatter
                .debug_struct("JsonAdapter")
                .field("deferred", cell)
                .finish_non_exhaustive(),
        }
    }
}

static_assertions::assert_impl_all!(JsonAdapter<()>: Send, Sync);
