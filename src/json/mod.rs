//! JSON leaf transformers, field glue, and the mapping error model.
//!
//! The JSON tree itself is external: this crate consumes an already-parsed
//! [`serde_json::Value`] and never touches raw text. This module supplies
//! everything between that tree and the generic algebra in
//! [`transform`](crate::transform):
//!
//! - [`MappingError`]: the single `InvalidInput` error kind, carrying a
//!   domain/code pair plus an expected-vs-actual description.
//! - [`NumberRepr`]: the per-width boxing step against the external boxed
//!   number type ([`serde_json::Number`]).
//! - [`transformers`]: the leaf catalog, one reversible transformer per
//!   primitive type, plus the object and array container transformers.
//! - Field-glue constructors ([`json_number`], [`json_string`],
//!   [`json_bool`], [`json_object`], [`json_array`] and their `_opt`
//!   variants): map a model lens straight to a specification-ready
//!   [`FieldLens`](crate::adapter::FieldLens).

mod error;
mod fields;
mod number;
pub mod transformers;

pub use error::CODE_INVALID_INPUT;
pub use error::ERROR_DOMAIN;
pub use error::JsonKind;
pub use error::MappingError;
pub use fields::json_array;
pub use fields::json_array_opt;
pub use fields::json_bool;
pub use fields::json_bool_opt;
pub use fields::json_number;
pub use fields::json_number_opt;
pub use fields::json_object;
pub use fields::json_object_opt;
pub use fields::json_string;
pub use fields::json_string_opt;
pub use number::NumberRepr;
pub use transformers::JsonTransformer;
