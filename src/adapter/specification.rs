//! Ordered field specifications.

use serde_json::Value;

use crate::json::MappingError;
use crate::transform::ResultLens;

/// A per-field building block specialized to the JSON tree: a
/// [`ResultLens`] between the whole model and a JSON value.
pub type FieldLens<M> = ResultLens<M, Value, MappingError>;

/// An ordered mapping from field name to [`FieldLens`].
///
/// A specification is built once, stays immutable, and is owned by exactly
/// one [`JsonAdapter`](super::JsonAdapter). Fields are encoded and decoded
/// in insertion order, which makes the "first failure wins" contract
/// deterministic.
///
/// Use the [`specification!`](crate::specification) macro or chain
/// [`field`](Self::field) calls:
///
/// ```
/// use refract::json::json_string;
/// use refract::adapter::Specification;
/// use refract::lens;
///
/// #[derive(Clone)]
/// struct Person { name: String }
///
/// let specification: Specification<Person> =
///     Specification::new().field("name", json_string(lens!(Person, name)));
/// assert_eq!(specification.len(), 1);
/// ```
pub struct Specification<M> {
    entries: Vec<(String, FieldLens<M>)>,
}

impl<M> Specification<M> {
    /// Creates an empty specification.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a field mapping, preserving insertion order.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: FieldLens<M>) -> Self {
        self.entries.push((name.into(), field));
        self
    }

    /// The number of field mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the specification has no field mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(super) fn entries(&self) -> impl Iterator<Item = &(String, FieldLens<M>)> {
        self.entries.iter()
    }
}

impl<M> Default for Specification<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for Specification<M> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<M> std::fmt::Debug for Specification<M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.entries.iter().map(|(key, _)| key.as_str()).collect();
        formatter
            .debug_struct("Specification")
            .field("fields", &keys)
            .finish()
    }
}

/// Builds a [`Specification`] from `"key" => field` pairs, preserving
/// order.
///
/// # Example
///
/// ```
/// use refract::json::{json_number, json_string};
/// use refract::adapter::Specification;
/// use refract::{lens, specification};
///
/// #[derive(Clone)]
/// struct Person { name: String, age: u32 }
///
/// let specification: Specification<Person> = specification! {
///     "name" => json_string(lens!(Person, name)),
///     "age" => json_number(lens!(Person, age)),
/// };
/// assert_eq!(specification.len(), 2);
/// ```
#[macro_export]
macro_rules! specification {
    ($($key:expr => $field:expr),* $(,)?) => {
        $crate::adapter::Specification::new()$(.field($key, $field))*
    };
}
