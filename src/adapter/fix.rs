//! The fixed-point combinator for self-referential adapters.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use super::{Inner, JsonAdapter};

type Builder<M> = Box<dyn FnOnce(JsonAdapter<M>) -> JsonAdapter<M> + Send>;

/// The one-time memoization cell behind a deferred adapter.
///
/// The builder closure runs at most once, on first resolution; all callers
/// then observe the same fully-constructed adapter. `OnceLock` makes
/// concurrent first access safe: one caller runs the builder, the rest
/// block until it completes, and nobody sees a partially-initialized
/// adapter.
pub(super) struct DeferredCell<M> {
    cell: OnceLock<JsonAdapter<M>>,
    builder: Mutex<Option<Builder<M>>>,
}

impl<M> DeferredCell<M> {
    pub(super) fn resolve(&self, handle: &JsonAdapter<M>) -> &JsonAdapter<M> {
        self.cell.get_or_init(|| {
            let builder = self
                .builder
                .lock()
                .take()
                .expect("recursive adapter: builder already consumed");
            builder(handle.clone())
        })
    }
}

impl<M> std::fmt::Debug for DeferredCell<M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell.get() {
            Some(_) => formatter.write_str("<resolved>"),
            None => formatter.write_str("<deferred>"),
        }
    }
}

/// Ties the knot for a self-referential adapter.
///
/// `builder` receives a handle to the not-yet-constructed adapter and
/// returns the fully specified one; field mappings close over the handle
/// wherever they need "the adapter for this same model type". The builder
/// does not run here: it runs exactly once, lazily, on the adapter's
/// first use, and the result is memoized for every later call, including
/// concurrent first access from multiple threads.
///
/// Invoking the handle's operations from *inside* the builder itself is a
/// usage error and will deadlock the initialization; the handle is meant
/// to be captured by field closures, which only run after construction
/// completes.
///
/// # Example
///
/// ```
/// use refract::adapter::{JsonAdapter, fix};
/// use refract::json::json_array;
/// use refract::{lens, specification};
/// use serde_json::json;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Node { children: Vec<Node> }
///
/// let adapter = fix(|adapter| {
///     JsonAdapter::new(
///         specification! {
///             "children" => json_array(lens!(Node, children), &adapter),
///         },
///         || Node { children: Vec::new() },
///     )
/// });
///
/// let node = Node { children: vec![Node { children: vec![] }] };
/// let encoded = adapter.transform(&node).unwrap();
/// assert_eq!(encoded, json!({ "children": [{ "children": [] }] }));
/// assert_eq!(adapter.reverse_transform(&encoded).unwrap(), node);
/// ```
pub fn fix<M, F>(builder: F) -> JsonAdapter<M>
where
    M: 'static,
    F: FnOnce(JsonAdapter<M>) -> JsonAdapter<M> + Send + 'static,
{
    JsonAdapter {
        inner: Arc::new(Inner::Deferred(DeferredCell {
            cell: OnceLock::new(),
            builder: Mutex::new(Some(Box::new(builder))),
        })),
    }
}
