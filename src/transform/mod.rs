//! Reversible value transformers and their combinator algebra.
//!
//! A [`ValueTransformer`] is an immutable pair of pure functions
//! `A -> Result<B, E>` and `B -> Result<A, E>`. Transformers are the
//! conversion side of every field mapping: the leaf catalog in
//! [`json`](crate::json) provides one per primitive type, and the
//! combinators here build transformers for bigger shapes out of smaller
//! ones:
//!
//! - [`ValueTransformer::and_then`] sequences two transformers (`>>>`),
//!   reversing the order on the way back.
//! - [`lift_optional`] lifts a transformer through `Option` with a supplied
//!   default for the transformed side.
//! - [`lift_vec`] lifts a transformer element-wise through `Vec`,
//!   short-circuiting on the first failure.
//! - [`transform_lens`] maps a [`Lens`](crate::optics::Lens) through a
//!   transformer, producing a [`ResultLens`], the per-field building block
//!   an [`adapter`](crate::adapter) specification is made of.
//!
//! All operations are pure and side-effect free: the same inputs always
//! produce the same outputs, and a failure anywhere propagates unchanged
//! without partial results leaking through.

mod combinators;
mod transformer;

pub use combinators::ResultLens;
pub use combinators::lift_optional;
pub use combinators::lift_vec;
pub use combinators::transform_lens;
pub use combinators::transform_lens_optional;
pub use transformer::ValueTransformer;
