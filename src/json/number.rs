//! The numeric boxing step against the external boxed-number type.
//!
//! JSON carries one number shape; models carry many. [`NumberRepr`] is the
//! bidirectional bridge between a primitive model type and
//! [`serde_json::Number`], implemented for every fixed-width integer, both
//! float widths, and `bool`. The leaf catalog in
//! [`transformers`](super::transformers) composes this step with the boxed
//! number to and from JSON number transformer; which implementation runs is selected
//! at specification-build time through generics, never at call time.

use serde_json::Number;

use super::error::MappingError;

/// A primitive model type with a bidirectional boxed-number representation.
///
/// `into_number` is the encode-side boxing step; for in-range inputs it
/// always succeeds (the only representable failure is a non-finite float,
/// which the boxed number cannot carry). `from_number` is the decode-side
/// unboxing step and fails with [`MappingError::InvalidInput`] when the
/// boxed number does not fit the width.
pub trait NumberRepr: Sized {
    /// Boxes this value into a generic JSON number.
    ///
    /// # Errors
    ///
    /// Fails only for values the boxed number cannot represent
    /// (non-finite floats).
    fn into_number(self) -> Result<Number, MappingError>;

    /// Unboxes a generic JSON number into this type.
    ///
    /// # Errors
    ///
    /// Fails when the number does not fit this type's width or shape.
    fn from_number(number: &Number) -> Result<Self, MappingError>;
}

macro_rules! signed_number_repr {
    ($($int:ident),* $(,)?) => {$(
        impl NumberRepr for $int {
            fn into_number(self) -> Result<Number, MappingError> {
                Ok(Number::from(i64::from(self)))
            }

            fn from_number(number: &Number) -> Result<Self, MappingError> {
                number
                    .as_i64()
                    .and_then(|value| Self::try_from(value).ok())
                    .ok_or_else(|| {
                        MappingError::unrepresentable(
                            concat!("a JSON number representable as ", stringify!($int)),
                            number,
                        )
                    })
            }
        }
    )*};
}

macro_rules! unsigned_number_repr {
    ($($int:ident),* $(,)?) => {$(
        impl NumberRepr for $int {
            fn into_number(self) -> Result<Number, MappingError> {
                Ok(Number::from(u64::from(self)))
            }

            fn from_number(number: &Number) -> Result<Self, MappingError> {
                number
                    .as_u64()
                    .and_then(|value| Self::try_from(value).ok())
                    .ok_or_else(|| {
                        MappingError::unrepresentable(
                            concat!("a JSON number representable as ", stringify!($int)),
                            number,
                        )
                    })
            }
        }
    )*};
}

signed_number_repr!(i8, i16, i32, i64);
unsigned_number_repr!(u8, u16, u32, u64);

impl NumberRepr for f64 {
    fn into_number(self) -> Result<Number, MappingError> {
        Number::from_f64(self)
            .ok_or_else(|| MappingError::unrepresentable("a finite JSON number", self))
    }

    fn from_number(number: &Number) -> Result<Self, MappingError> {
        number.as_f64().ok_or_else(|| {
            MappingError::unrepresentable("a JSON number representable as f64", number)
        })
    }
}

impl NumberRepr for f32 {
    fn into_number(self) -> Result<Number, MappingError> {
        Number::from_f64(f64::from(self))
            .ok_or_else(|| MappingError::unrepresentable("a finite JSON number", self))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_number(number: &Number) -> Result<Self, MappingError> {
        number.as_f64().map(|value| value as Self).ok_or_else(|| {
            MappingError::unrepresentable("a JSON number representable as f32", number)
        })
    }
}

// Booleans are modeled as JSON numbers (0/1), matching the boxed-number
// convention: decoding yields true for any nonzero number.
impl NumberRepr for bool {
    fn into_number(self) -> Result<Number, MappingError> {
        Ok(Number::from(u8::from(self)))
    }

    fn from_number(number: &Number) -> Result<Self, MappingError> {
        number.as_f64().map(|value| value != 0.0).ok_or_else(|| {
            MappingError::unrepresentable("a JSON number representable as a boolean", number)
        })
    }
}
