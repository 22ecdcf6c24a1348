//! Routing between immediate and deferred element access.
//!
//! [`View::call()`] takes one argument per axis. If every argument is a
//! concrete index it computes the element straight away. If any argument is
//! a [`Placeholder`] it returns a [`LazyCall`] that remembers the `View` and
//! the concrete arguments, and can be bound to values for the placeholders
//! later. This is the hook on which a symbolic call language can be built;
//! this crate goes no further than the hook.

use std::fmt::{self, Debug, Display};
use std::marker::{PhantomData};

use super::{Index, View};

/// A named, not yet known `usize` index.
///
/// ```
/// use arrayexpr::{Placeholder};
/// assert_eq!(Placeholder(3).to_string(), "_3");
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Placeholder(pub usize);

impl Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "_{}", self.0) }
}

/// One argument of [`View::call()`] standing for an `I`: either an `I`, or a
/// [`Placeholder`] if `I` is `usize`.
pub trait Arg<I>: Copy {
    /// The placeholder, if `self` is one.
    fn placeholder(self) -> Option<Placeholder>;

    /// Returns `self`, with placeholder `_n` replaced by `values[n]`.
    ///
    /// Panics if there is no `values[n]`.
    fn bind(self, values: &[usize]) -> I;

    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

impl<I: Index> Arg<I> for I {
    fn placeholder(self) -> Option<Placeholder> { None }

    fn bind(self, _: &[usize]) -> I { self }

    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:?}", self) }
}

impl Arg<usize> for Placeholder {
    fn placeholder(self) -> Option<Placeholder> { Some(self) }

    fn bind(self, values: &[usize]) -> usize {
        match values.get(self.0) {
            Some(&value) => value,
            None => panic!("No value for {} among {} values", self, values.len()),
        }
    }

    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self) }
}

/// The arguments of [`View::call()`] for a `View` indexed by `I`.
///
/// A `usize`, `bool` or `()` index, or a `Placeholder`, is a single argument.
/// A tuple index is called with a tuple of arguments, one per component,
/// each of which may be a `Placeholder` independently of the others.
pub trait Args<I: Index>: Copy {
    /// Appends the placeholders among `self` to `out`, in argument order.
    fn placeholders(self, out: &mut Vec<Placeholder>);

    /// Returns the index, with placeholder `_n` replaced by `values[n]`.
    ///
    /// Panics if there is no `values[n]`.
    fn bind(self, values: &[usize]) -> I;

    /// Renders the arguments separated by `", "`.
    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result;

    /// The index, if no argument is a placeholder.
    fn index(self) -> Option<I> {
        let mut placeholders = Vec::new();
        self.placeholders(&mut placeholders);
        if placeholders.is_empty() { Some(self.bind(&[])) } else { None }
    }
}

macro_rules! impl_args_for_single {
    ($($i:ty),*) => {
        $(
            impl<A: Arg<$i>> Args<$i> for A {
                fn placeholders(self, out: &mut Vec<Placeholder>) { out.extend(self.placeholder()); }

                fn bind(self, values: &[usize]) -> $i { Arg::bind(self, values) }

                fn render(&self, f: &mut fmt::Formatter) -> fmt::Result { Arg::render(self, f) }
            }
        )*
    };
}

impl_args_for_single!(usize, bool, ());

impl<I: Index, A: Arg<I>> Args<(I,)> for (A,) {
    fn placeholders(self, out: &mut Vec<Placeholder>) { out.extend(Arg::placeholder(self.0)); }

    fn bind(self, values: &[usize]) -> (I,) { (Arg::bind(self.0, values),) }

    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result { Arg::render(&self.0, f) }
}

impl<I: Index, J: Index, A: Arg<I>, B: Arg<J>> Args<(I, J)> for (A, B) {
    fn placeholders(self, out: &mut Vec<Placeholder>) {
        out.extend(Arg::placeholder(self.0));
        out.extend(Arg::placeholder(self.1));
    }

    fn bind(self, values: &[usize]) -> (I, J) { (Arg::bind(self.0, values), Arg::bind(self.1, values)) }

    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Arg::render(&self.0, f)?;
        write!(f, ", ")?;
        Arg::render(&self.1, f)
    }
}

impl<I: Index, J: Index, K: Index, A: Arg<I>, B: Arg<J>, C: Arg<K>> Args<(I, J, K)> for (A, B, C) {
    fn placeholders(self, out: &mut Vec<Placeholder>) {
        out.extend(Arg::placeholder(self.0));
        out.extend(Arg::placeholder(self.1));
        out.extend(Arg::placeholder(self.2));
    }

    fn bind(self, values: &[usize]) -> (I, J, K) {
        (Arg::bind(self.0, values), Arg::bind(self.1, values), Arg::bind(self.2, values))
    }

    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Arg::render(&self.0, f)?;
        write!(f, ", ")?;
        Arg::render(&self.1, f)?;
        write!(f, ", ")?;
        Arg::render(&self.2, f)
    }
}

/// Displays [`Args`] without the parentheses.
struct ArgList<'a, I, A>(&'a A, PhantomData<I>);

impl<'a, I: Index, A: Args<I>> Display for ArgList<'a, I, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { Args::render(self.0, f) }
}

// ----------------------------------------------------------------------------

/// The result of [`View::call()`].
pub enum Call<'a, V: View, A> {
    /// The element at a concrete index.
    Value(V::T),

    /// A call that waits for values for its placeholders.
    Deferred(LazyCall<'a, V, A>),
}

impl<'a, V: View, A> Call<'a, V, A> {
    /// The computed element, if the call was not deferred.
    pub fn value(self) -> Option<V::T> {
        match self {
            Call::Value(t) => Some(t),
            Call::Deferred(_) => None,
        }
    }

    pub fn is_deferred(&self) -> bool { matches!(self, Call::Deferred(_)) }
}

impl<'a, V: View + Debug, A: Args<V::I>> Debug for Call<'a, V, A> where V::T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Call::Value(t) => f.debug_tuple("Value").field(t).finish(),
            Call::Deferred(lazy) => f.debug_tuple("Deferred").field(lazy).finish(),
        }
    }
}

/// A [`View`] waiting for values for some of its index components.
///
/// Borrows the `View`, so it cannot outlive it.
pub struct LazyCall<'a, V, A> {
    view: &'a V,
    args: A,
}

impl<'a, V: View, A: Args<V::I>> LazyCall<'a, V, A> {
    pub fn new(view: &'a V, args: A) -> Self {
        Self {view, args}
    }

    pub fn view(&self) -> &'a V { self.view }

    /// The arguments of the call, concrete and placeholder alike.
    pub fn args(&self) -> A { self.args }

    /// The placeholders among the arguments, in argument order.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        let mut out = Vec::new();
        Args::placeholders(self.args, &mut out);
        out
    }

    /// Compute the element with placeholder `_n` standing for `values[n]`.
    /// The concrete arguments keep the values they were given.
    ///
    /// Panics if a placeholder has no value.
    pub fn bind(&self, values: &[usize]) -> V::T { self.view.at(Args::bind(self.args, values)) }
}

impl<'a, V, A: Copy> Clone for LazyCall<'a, V, A> {
    fn clone(&self) -> Self { *self }
}

impl<'a, V, A: Copy> Copy for LazyCall<'a, V, A> {}

impl<'a, V: View + Debug, A: Args<V::I>> Debug for LazyCall<'a, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LazyCall")
            .field("view", self.view)
            .field("args", &format_args!("({})", ArgList::<V::I, A>(&self.args, PhantomData)))
            .finish()
    }
}

/// Renders as `view(1, _0)`.
impl<'a, V: View + Display, A: Args<V::I>> Display for LazyCall<'a, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.view, ArgList::<V::I, A>(&self.args, PhantomData))
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Array};

    #[test]
    fn concrete_index_is_evaluated() {
        let a: Array<(usize, usize), i32> = Array::new((2, 2), [1, 2, 3, 4]);
        let e = &a * 2;
        let c = e.call((1, 0));
        assert!(!c.is_deferred());
        assert_eq!(c.value(), Some(6));
    }

    #[test]
    fn placeholder_is_deferred() {
        let a: Array<usize, i32> = Array::new(3, [1, 2, 3]);
        let e = -&a;
        match e.call(Placeholder(1)) {
            Call::Deferred(lazy) => {
                assert_eq!(lazy.placeholders(), [Placeholder(1)]);
                assert_eq!(lazy.to_string(), "-[1, 2, 3](_1)");
                assert_eq!(lazy.bind(&[9, 0]), -1);
                assert_eq!(lazy.bind(&[9, 2]), -3);
            },
            Call::Value(_) => panic!("placeholder was evaluated"),
        }
    }

    #[test]
    fn one_placeholder_among_concrete_indices() {
        let a: Array<(usize, usize), i32> = Array::from_fn((2, 3), |(i, j)| (10 * i + j) as i32);
        let e = &a + 100;
        let lazy = match e.call((1, Placeholder(0))) {
            Call::Deferred(lazy) => lazy,
            Call::Value(_) => panic!("placeholder was evaluated"),
        };
        assert_eq!(lazy.placeholders(), [Placeholder(0)]);
        assert_eq!(lazy.to_string(), "([0, 1, 2, 10, 11, 12] + 100)(1, _0)");
        assert_eq!(lazy.bind(&[0]), 110);
        assert_eq!(lazy.bind(&[2]), 112);

        let swapped = match e.call((Placeholder(1), Placeholder(0))) {
            Call::Deferred(lazy) => lazy,
            Call::Value(_) => panic!("placeholder was evaluated"),
        };
        assert_eq!(swapped.placeholders(), [Placeholder(1), Placeholder(0)]);
        assert_eq!(swapped.bind(&[2, 1]), 112);
    }

    #[test]
    fn mixed_index_types() {
        let a: Array<(usize, bool, usize), u8> = Array::from_fn((2, (), 2), |(i, b, j)| (4 * i + 2 * b as usize + j) as u8);
        assert_eq!(a.call((1, true, 0)).value(), Some(6));
        let lazy = match a.call((Placeholder(0), false, 1)) {
            Call::Deferred(lazy) => lazy,
            Call::Value(_) => panic!("placeholder was evaluated"),
        };
        assert_eq!(lazy.bind(&[1]), 5);
    }

    #[test]
    #[should_panic(expected = "No value for _1")]
    fn bind_needs_every_placeholder() {
        let a: Array<usize, i32> = Array::new(2, [1, 2]);
        if let Call::Deferred(lazy) = a.call(Placeholder(1)) {
            lazy.bind(&[0]);
        }
    }

    #[test]
    fn args_index() {
        assert_eq!(Args::<(usize, usize)>::index((1usize, 2usize)), Some((1, 2)));
        assert_eq!(Args::<(usize, usize)>::index((1usize, Placeholder(0))), None);
        assert_eq!(Args::<usize>::index(4usize), Some(4));
        assert_eq!(Args::<usize>::index(Placeholder(0)), None);
    }
}
