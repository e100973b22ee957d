//! # refract
//!
//! A bidirectional JSON mapping library built from lenses, reversible
//! value transformers, and composable object adapters.
//!
//! ## Overview
//!
//! refract converts between strongly-typed domain models and an in-memory
//! JSON tree ([`serde_json::Value`]) in both directions, without reflection:
//! every field mapping is spelled out explicitly from small, composable
//! pieces.
//!
//! - **Lenses** ([`optics`]): pure get/set pairs describing focused,
//!   functional access to one field of a structure.
//! - **Value transformers** ([`transform`]): reversible conversions between
//!   two value types, reporting failure through `Result` rather than panics,
//!   with combinators for sequencing, optionals, and collections.
//! - **Leaf catalog** ([`json`]): reversible transformers between each
//!   primitive model type and its JSON representation, plus the structured
//!   [`MappingError`](json::MappingError) they fail with.
//! - **Adapters** ([`adapter`]): aggregate an ordered field-name to
//!   transformer specification into a whole-model to and from JSON object converter,
//!   with a fixed-point combinator ([`adapter::fix`]) for recursive model
//!   shapes.
//!
//! ## Example
//!
//! ```rust
//! use refract::adapter::JsonAdapter;
//! use refract::json::{json_number, json_string};
//! use refract::{lens, specification};
//! use serde_json::json;
//!
//! #[derive(Clone, Debug, PartialEq, Default)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let adapter = JsonAdapter::new(
//!     specification! {
//!         "name" => json_string(lens!(Person, name)),
//!         "age" => json_number(lens!(Person, age)),
//!     },
//!     Person::default,
//! );
//!
//! let person = Person { name: "Felix".to_string(), age: 30 };
//!
//! let encoded = adapter.transform(&person).unwrap();
//! assert_eq!(encoded, json!({ "name": "Felix", "age": 30 }));
//!
//! let decoded = adapter.reverse_transform(&encoded).unwrap();
//! assert_eq!(decoded, person);
//! ```
//!
//! Recursive models tie the knot through [`adapter::fix`], which defers the
//! self-reference until first use instead of recursing at construction time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use refract::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::*;
    pub use crate::json::*;
    pub use crate::optics::*;
    pub use crate::transform::*;
}

pub mod adapter;
pub mod json;
pub mod optics;
pub mod transform;
