//! Lens optics for focusing on struct fields.
//!
//! A lens is a pure get/set pair over one field of a structure. `get` reads
//! the field; `set` returns a new structure with only that field replaced,
//! never mutating shared state. Lenses compose, allowing access to deeply
//! nested fields.
//!
//! # Laws
//!
//! 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`

use std::marker::PhantomData;

/// A lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
/// 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
pub trait Lens<S, A> {
    /// Gets a reference to the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Sets the focused field to a new value, returning a new source.
    ///
    /// The input source is consumed; callers never observe a half-updated
    /// structure.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// Equivalent to getting the current value, applying the function, and
    /// setting the result.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::lens;
    /// use refract::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.modify(point, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Modifies the focused field by applying a function to a reference.
    ///
    /// Useful when the transformation only needs a reference to compute the
    /// new value.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::lens;
    /// use refract::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Inner { value: i32 }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Outer { inner: Inner }
    ///
    /// let inner_lens = lens!(Outer, inner);
    /// let value_lens = lens!(Inner, value);
    /// let outer_value = inner_lens.compose(value_lens);
    ///
    /// let data = Outer { inner: Inner { value: 42 } };
    /// assert_eq!(*outer_value.get(&data), 42);
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens implemented using getter and setter functions.
///
/// This is the most common way to create a lens. The [`lens!`](crate::lens)
/// macro generates a `FunctionLens` internally.
///
/// # Example
///
/// ```
/// use refract::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// Focuses on a nested field by chaining a lens onto an intermediate
/// structure with a lens into that structure. If both components satisfy
/// the lens laws, so does the composition.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        let intermediate = self.first.get(source);
        self.second.get(intermediate)
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// Generates a [`FunctionLens`] that focuses on the specified field of the
/// given struct type. The struct must allow its fields to be moved and
/// reassigned (plain data structs).
///
/// # Example
///
/// ```
/// use refract::lens;
/// use refract::optics::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*x_lens.get(&point), 10);
///
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Node {
        label: String,
        weight: i32,
    }

    #[rstest]
    fn test_function_lens_get() {
        let label_lens = FunctionLens::new(
            |node: &Node| &node.label,
            |node: Node, label: String| Node { label, ..node },
        );

        let node = Node {
            label: "root".to_string(),
            weight: 7,
        };
        assert_eq!(*label_lens.get(&node), "root");
    }

    #[rstest]
    fn test_function_lens_set_replaces_only_target() {
        let weight_lens = lens!(Node, weight);

        let node = Node {
            label: "root".to_string(),
            weight: 7,
        };
        let updated = weight_lens.set(node, 11);
        assert_eq!(updated.weight, 11);
        assert_eq!(updated.label, "root");
    }

    #[rstest]
    fn test_lens_modify() {
        let weight_lens = lens!(Node, weight);
        let node = Node {
            label: "root".to_string(),
            weight: 7,
        };
        let doubled = weight_lens.modify(node, |weight| weight * 2);
        assert_eq!(doubled.weight, 14);
    }

    #[rstest]
    fn test_lens_modify_ref() {
        let label_lens = lens!(Node, label);
        let node = Node {
            label: "root".to_string(),
            weight: 7,
        };
        let upper = label_lens.modify_ref(node, |label| label.to_uppercase());
        assert_eq!(upper.label, "ROOT");
    }

    #[rstest]
    fn test_lens_compose() {
        #[derive(Clone, PartialEq, Debug)]
        struct Tree {
            root: Node,
        }

        let root_lens = lens!(Tree, root);
        let weight_lens = lens!(Node, weight);
        let composed = root_lens.compose(weight_lens);

        let tree = Tree {
            root: Node {
                label: "root".to_string(),
                weight: 42,
            },
        };

        assert_eq!(*composed.get(&tree), 42);

        let updated = composed.set(tree, 100);
        assert_eq!(updated.root.weight, 100);
        assert_eq!(updated.root.label, "root");
    }

    #[rstest]
    fn test_get_put_law() {
        let weight_lens = lens!(Node, weight);
        let node = Node {
            label: "root".to_string(),
            weight: 7,
        };
        let value = *weight_lens.get(&node);
        assert_eq!(weight_lens.set(node.clone(), value), node);
    }

    #[rstest]
    fn test_put_get_law() {
        let weight_lens = lens!(Node, weight);
        let node = Node {
            label: "root".to_string(),
            weight: 7,
        };
        let updated = weight_lens.set(node, 99);
        assert_eq!(*weight_lens.get(&updated), 99);
    }
}
