//! The reversible value transformer type.

use std::sync::Arc;

/// A reversible conversion between two value types.
///
/// A `ValueTransformer<A, B, E>` holds a pure forward function
/// `A -> Result<B, E>` and a pure reverse function `B -> Result<A, E>`.
/// Both closures are shared behind [`Arc`], so transformers clone cheaply
/// and are safe to use from multiple threads at once; every call is a pure
/// function of its input.
///
/// # Type Parameters
///
/// - `A`: The model-side value type
/// - `B`: The transformed value type
/// - `E`: The failure type carried by both directions
///
/// # Example
///
/// ```
/// use refract::transform::ValueTransformer;
///
/// let digits: ValueTransformer<u32, String, String> = ValueTransformer::new(
///     |value: u32| Ok(value.to_string()),
///     |text: String| text.parse().map_err(|_| format!("not a number: {text}")),
/// );
///
/// assert_eq!(digits.transform(42), Ok("42".to_string()));
/// assert_eq!(digits.reverse_transform("42".to_string()), Ok(42));
/// assert!(digits.reverse_transform("nope".to_string()).is_err());
/// ```
pub struct ValueTransformer<A, B, E> {
    forward: Arc<dyn Fn(A) -> Result<B, E> + Send + Sync>,
    reverse: Arc<dyn Fn(B) -> Result<A, E> + Send + Sync>,
}

impl<A, B, E> ValueTransformer<A, B, E> {
    /// Creates a new transformer from a forward and a reverse closure.
    ///
    /// Both closures must be pure: no shared mutable state, equal outputs
    /// for equal inputs.
    pub fn new<F, G>(forward: F, reverse: G) -> Self
    where
        F: Fn(A) -> Result<B, E> + Send + Sync + 'static,
        G: Fn(B) -> Result<A, E> + Send + Sync + 'static,
    {
        Self {
            forward: Arc::new(forward),
            reverse: Arc::new(reverse),
        }
    }

    /// Transforms a model-side value into its transformed representation.
    ///
    /// # Errors
    ///
    /// Returns the forward closure's failure unchanged.
    pub fn transform(&self, value: A) -> Result<B, E> {
        (self.forward)(value)
    }

    /// Transforms a transformed value back into its model-side
    /// representation.
    ///
    /// # Errors
    ///
    /// Returns the reverse closure's failure unchanged.
    pub fn reverse_transform(&self, value: B) -> Result<A, E> {
        (self.reverse)(value)
    }

    /// Swaps the two directions of this transformer.
    ///
    /// The result's `transform` is this transformer's `reverse_transform`
    /// and vice versa.
    #[must_use]
    pub fn flip(self) -> ValueTransformer<B, A, E> {
        ValueTransformer {
            forward: self.reverse,
            reverse: self.forward,
        }
    }

    /// Sequences this transformer with a second one (`>>>`).
    ///
    /// Forward runs this transformer first and `next` second; reverse runs
    /// `next`'s reverse first and this transformer's reverse second. The
    /// first failing stage wins and no partial result leaks through.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::transform::ValueTransformer;
    ///
    /// let double: ValueTransformer<i64, i64, String> =
    ///     ValueTransformer::new(|v| Ok(v * 2), |v: i64| Ok(v / 2));
    /// let text: ValueTransformer<i64, String, String> = ValueTransformer::new(
    ///     |v: i64| Ok(v.to_string()),
    ///     |s: String| s.parse().map_err(|_| "not a number".to_string()),
    /// );
    ///
    /// let doubled_text = double.and_then(text);
    /// assert_eq!(doubled_text.transform(21), Ok("42".to_string()));
    /// assert_eq!(doubled_text.reverse_transform("42".to_string()), Ok(21));
    /// ```
    #[must_use]
    pub fn and_then<C>(self, next: ValueTransformer<B, C, E>) -> ValueTransformer<A, C, E>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        E: 'static,
    {
        let Self { forward, reverse } = self;
        let ValueTransformer {
            forward: next_forward,
            reverse: next_reverse,
        } = next;

        ValueTransformer::new(
            move |value: A| next_forward(forward(value)?),
            move |value: C| reverse(next_reverse(value)?),
        )
    }
}

impl<A, B, E> Clone for ValueTransformer<A, B, E> {
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            reverse: Arc::clone(&self.reverse),
        }
    }
}

impl<A, B, E> std::fmt::Debug for ValueTransformer<A, B, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ValueTransformer")
            .finish_non_exhaustive()
    }
}
