//! Combinators that build transformers for bigger shapes out of smaller
//! ones.

use std::sync::Arc;

use super::transformer::ValueTransformer;
use crate::optics::Lens;

/// Lifts a transformer through `Option`, with a supplied default for the
/// transformed side.
///
/// Forward: `None` transforms to `default` (always succeeds); `Some(a)`
/// transforms through the underlying transformer. Reverse: always decodes
/// to `Some(decoded)`; the reverse direction never reports the optional as
/// absent from value identity alone. Absence is structural (a missing key),
/// decided by the enclosing adapter, not by this combinator.
///
/// # Example
///
/// ```
/// use refract::transform::{ValueTransformer, lift_optional};
///
/// let text: ValueTransformer<i64, String, String> = ValueTransformer::new(
///     |v: i64| Ok(v.to_string()),
///     |s: String| s.parse().map_err(|_| "not a number".to_string()),
/// );
///
/// let lifted = lift_optional(text, "0".to_string());
/// assert_eq!(lifted.transform(None), Ok("0".to_string()));
/// assert_eq!(lifted.transform(Some(7)), Ok("7".to_string()));
/// assert_eq!(lifted.reverse_transform("0".to_string()), Ok(Some(0)));
/// ```
pub fn lift_optional<A, B, E>(
    transformer: ValueTransformer<A, B, E>,
    default: B,
) -> ValueTransformer<Option<A>, B, E>
where
    A: 'static,
    B: Clone + Send + Sync + 'static,
    E: 'static,
{
    let forward = transformer.clone();
    ValueTransformer::new(
        move |value: Option<A>| match value {
            Some(inner) => forward.transform(inner),
            None => Ok(default.clone()),
        },
        move |value: B| transformer.reverse_transform(value).map(Some),
    )
}

/// Lifts a transformer element-wise through `Vec`.
///
/// Both directions map elements in order and short-circuit on the first
/// failing element; no partial collection is observable.
pub fn lift_vec<A, B, E>(transformer: ValueTransformer<A, B, E>) -> ValueTransformer<Vec<A>, Vec<B>, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
{
    let forward = transformer.clone();
    ValueTransformer::new(
        move |values: Vec<A>| values.into_iter().map(|value| forward.transform(value)).collect(),
        move |values: Vec<B>| {
            values
                .into_iter()
                .map(|value| transformer.reverse_transform(value))
                .collect()
        },
    )
}

/// A lens between `Result`-carried wholes and transformed parts.
///
/// Produced by mapping a [`Lens`] through a [`ValueTransformer`] (see
/// [`transform_lens`]), this is the per-field building block an adapter
/// specification is made of:
///
/// - [`get`](Self::get) pulls the focused part out of the whole carried in
///   the input `Result` and transforms it; any failure surfaces in the
///   returned `Result`.
/// - [`set`](Self::set) decodes the transformed value and pushes it back
///   into the *current* whole via the lens, which lets a field operate over
///   "the model so far" during progressive decode.
/// - [`set_absent`](Self::set_absent) applies the field's missing-key
///   policy: optional-lifted fields fall back to an absent part, required
///   fields fail with the error supplied by the caller.
pub struct ResultLens<S, B, E> {
    get: Arc<dyn Fn(&Result<S, E>) -> Result<B, E> + Send + Sync>,
    set: Arc<dyn Fn(Result<S, E>, Result<B, E>) -> Result<S, E> + Send + Sync>,
    missing: Option<Arc<dyn Fn(Result<S, E>) -> Result<S, E> + Send + Sync>>,
}

impl<S, B, E> ResultLens<S, B, E> {
    /// Pulls the focused part out of the carried whole and transforms it.
    ///
    /// # Errors
    ///
    /// Propagates the carried failure, or the transformer's failure for the
    /// focused part.
    pub fn get(&self, whole: &Result<S, E>) -> Result<B, E> {
        (self.get)(whole)
    }

    /// Decodes the transformed part and pushes it into the carried whole.
    ///
    /// # Errors
    ///
    /// Propagates the first failure among the carried whole, the carried
    /// part, and the reverse transformation.
    pub fn set(&self, whole: Result<S, E>, part: Result<B, E>) -> Result<S, E> {
        (self.set)(whole, part)
    }

    /// Applies this field's missing-key policy to the carried whole.
    ///
    /// Optional-lifted fields leave the whole intact with an absent part;
    /// required fields fail with `on_required()`.
    ///
    /// # Errors
    ///
    /// Propagates the carried failure, or fails with `on_required()` for a
    /// required field.
    pub fn set_absent(&self, whole: Result<S, E>, on_required: impl FnOnce() -> E) -> Result<S, E> {
        match &self.missing {
            Some(handler) => handler(whole),
            None => whole.and_then(|_| Err(on_required())),
        }
    }
}

impl<S, B, E> Clone for ResultLens<S, B, E> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
            missing: self.missing.as_ref().map(Arc::clone),
        }
    }
}

impl<S, B, E> std::fmt::Debug for ResultLens<S, B, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ResultLens")
            .field("optional", &self.missing.is_some())
            .finish_non_exhaustive()
    }
}

/// Maps a lens through a transformer, producing a [`ResultLens`] for a
/// required field.
///
/// The forward direction pulls the focused part via the lens and transforms
/// it; the reverse direction decodes the transformed value and sets it into
/// the current whole. A missing key is a failure for fields built this way.
pub fn transform_lens<S, A, B, E, L>(
    lens: L,
    transformer: ValueTransformer<A, B, E>,
) -> ResultLens<S, B, E>
where
    S: 'static,
    A: Clone + 'static,
    B: 'static,
    E: Clone + 'static,
    L: Lens<S, A> + Clone + Send + Sync + 'static,
{
    let get_lens = lens.clone();
    let get_transformer = transformer.clone();

    ResultLens {
        get: Arc::new(move |whole: &Result<S, E>| match whole {
            Ok(model) => get_transformer.transform(get_lens.get(model).clone()),
            Err(error) => Err(error.clone()),
        }),
        set: Arc::new(move |whole: Result<S, E>, part: Result<B, E>| {
            let model = whole?;
            let decoded = transformer.reverse_transform(part?)?;
            Ok(lens.set(model, decoded))
        }),
        missing: None,
    }
}

/// Maps a lens onto an optional field through a transformer, producing a
/// [`ResultLens`] with a default-bearing missing-key policy.
///
/// The underlying transformer is lifted through `Option` with the supplied
/// transformed-side `default`: an absent model value encodes to `default`,
/// and a missing key decodes the field to `None` without error. A present
/// value, even one equal to `default`, always decodes through the underlying
/// transformer to `Some` and still fails on a variant mismatch.
pub fn transform_lens_optional<S, A, B, E, L>(
    lens: L,
    transformer: ValueTransformer<A, B, E>,
    default: B,
) -> ResultLens<S, B, E>
where
    S: 'static,
    A: Clone + 'static,
    B: Clone + Send + Sync + 'static,
    E: Clone + 'static,
    L: Lens<S, Option<A>> + Clone + Send + Sync + 'static,
{
    let absent_lens = lens.clone();
    let mut field = transform_lens(lens, lift_optional(transformer, default));
    field.missing = Some(Arc::new(move |whole: Result<S, E>| {
        whole.map(|model| absent_lens.set(model, None))
    }));
    field
}
