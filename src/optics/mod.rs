//! Optics for immutable data manipulation.
//!
//! This module provides the lens optic: a composable, pure accessor that
//! focuses on a single field of a larger structure. Lenses are the model
//! side of every field mapping in this crate: the
//! [`transform`](crate::transform) combinators pull a field out of a model
//! (or push a decoded value back in) exclusively through a lens.
//!
//! # Example
//!
//! ```
//! use refract::lens;
//! use refract::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let address_lens = lens!(Person, address);
//! let street_lens = lens!(Address, street);
//!
//! // Compose lenses to focus on nested fields
//! let person_street = address_lens.compose(street_lens);
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(*person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // Other fields unchanged
//! ```
//!
//! # Lens Laws
//!
//! Every lens must satisfy:
//!
//! 1. **GetPut Law** (identity): `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet Law** (retention): `lens.get(&lens.set(source, value)) == &value`
//!
//! Composition of two lawful lenses is itself lawful.

mod lens;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
