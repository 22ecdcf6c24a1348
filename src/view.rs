use std::fmt::{self, Display};
use std::rc::{Rc};

use super::{Index, Domain, Broadcast, Array, BinaryExpr, Map, Result};
use super::lazy::{Args, Call, LazyCall};
use super::ops::{Binary, Unary, impl_ops_for_expr};

/// Somewhere to put the elements of a `View` while it is materialised.
pub trait Push<T> {
    fn push(&mut self, t: T);
}

impl<T> Push<T> for Vec<T> {
    fn push(&mut self, t: T) { Vec::push(self, t); }
}

// ----------------------------------------------------------------------------

/// A storage type that [`View::collect()`] can fill, such as [`Array`].
///
/// Its index and element types are those of the `View` being collected.
pub trait NewView: View {
    /// Where the elements go before `Self` exists.
    type Buffer: Push<Self::T>;

    /// Make a `Self` of size `size`. `callback` is called exactly once with
    /// an empty buffer, and pushes every element in the order of
    /// [`Index::each()`].
    ///
    /// Panics if `callback` does, or if the buffer ends up with the wrong
    /// number of elements.
    fn new_view(
        size: <Self::I as Index>::Size,
        callback: impl FnOnce(&mut Self::Buffer),
    ) -> Self;
}

// ----------------------------------------------------------------------------

/// Something that looks like an array of `Self::T` indexed by `Self::I`,
/// but that computes each element only when asked for it.
///
/// Every expression in this crate is a `View`: an [`Array`] is a `View` that
/// reads memory, while [`BinaryExpr`], [`NegExpr`], [`Map`] and [`Map2`]
/// compute their elements from other `View`s only when [`View::at()`] is
/// called. Building an expression never reads an element, and reading the
/// same element twice gives the same answer.
///
/// ### Arithmetic
///
/// The arithmetic operators mean element-wise arithmetic. For example,
/// `(v + w).at(i)` gives the same answer as `v.at(i) + w.at(i)`. Scalars
/// broadcast: `(v + 5.0).at(i)` gives the same answer as `v.at(i) + 5.0`.
///
/// ```
/// use arrayexpr::{View, Array};
/// let a: Array<usize, f64> = Array::new(3, [1.0, 2.0, 3.0]);
/// let b: Array<usize, f64> = Array::new(3, [10.0, 20.0, 30.0]);
/// let c = (&a + &b) * 2.0 - 1.0;
/// assert_eq!(c.at(1), 43.0);
/// assert_eq!(c.to_array().as_ref(), [21.0, 43.0, 65.0]);
/// ```
///
/// Expressions are not storage, so they cannot be assigned to:
///
/// ```compile_fail
/// use arrayexpr::{Array};
/// let a: Array<usize, f64> = Array::new(2, [1.0, 2.0]);
/// let mut e = &a + 1.0;
/// e += 1.0;
/// ```
///
/// You are encouraged to define operators for your own `View`s with the
/// macro [`impl_ops_for_view`].
///
/// ### Ownership
///
/// If `V` implements `View`, then so do `&V` and `Rc<V>`. Whether an
/// expression owns or borrows an operand is therefore decided where the
/// expression is built: `a + b` consumes `a` and `b`, while `&a + &b` borrows
/// them and cannot outlive them.
///
/// ```
/// use arrayexpr::{View, Array};
/// let a: Array<usize, i64> = Array::new(2, [1, 2]);
/// let borrowed = &a + 1;
/// let owned = a.clone() + 1;
/// assert_eq!(borrowed.to_array(), owned.to_array());
/// ```
///
/// [`NegExpr`]: super::NegExpr
/// [`Map2`]: super::Map2
/// [`impl_ops_for_view`]: crate::impl_ops_for_view
pub trait View: Sized {
    /// The index type.
    type I: Index;

    /// The element type.
    type T: Clone;

    /// The size of the array.
    fn size(&self) -> <Self::I as Index>::Size;

    /// The shape of the array.
    fn domain(&self) -> Domain<Self::I> { Domain::new(self.size()) }

    /// The number of axes.
    fn rank(&self) -> usize { <Self::I as Index>::RANK }

    /// The number of elements in `Self`.
    fn len(&self) -> usize { <Self::I as Index>::length(self.size()) }

    /// Compute the element at `index`.
    fn at(&self, index: Self::I) -> Self::T;

    /// Compute the element at `args` if every argument is a concrete index,
    /// or defer the call if any argument is a [`Placeholder`].
    ///
    /// A tuple index takes one argument per component, so some axes can be
    /// fixed while others wait.
    ///
    /// ```
    /// use arrayexpr::{View, Array, Call, Placeholder};
    /// let a: Array<(usize, usize), f64> = Array::new((2, 2), [1.0, 2.0, 3.0, 4.0]);
    /// let e = &a * 2.0;
    /// assert!(matches!(e.call((1, 0)), Call::Value(x) if x == 6.0));
    /// match e.call((1, Placeholder(0))) {
    ///     Call::Deferred(lazy) => assert_eq!(lazy.bind(&[1]), 8.0),
    ///     Call::Value(_) => unreachable!(),
    /// }
    /// ```
    ///
    /// [`Placeholder`]: super::Placeholder
    fn call<A: Args<Self::I>>(&self, args: A) -> Call<'_, Self, A> {
        match Args::index(args) {
            Some(index) => Call::Value(self.at(index)),
            None => Call::Deferred(LazyCall::new(self, args)),
        }
    }

    /// Materialises this `View` into a collection of type `A`, e.g. an
    /// [`Array`].
    ///
    /// This method guarantees to call [`self.at()`] exactly once for each
    /// index, in the order defined by [`Index::each()`].
    ///
    /// ```
    /// use arrayexpr::{Index, View, Array};
    /// let a: Array<_, _> = usize::all(5).collect();
    /// assert_eq!(a.as_ref(), [0, 1, 2, 3, 4]);
    /// ```
    ///
    /// [`self.at()`]: Self::at()
    fn collect<A>(&self) -> A where
        A: NewView<I=Self::I, T=Self::T>,
    {
        tracing::trace!(domain = %self.domain(), "materialising view");
        A::new_view(self.size(), |buffer| { self.each(|t| buffer.push(t)); })
    }

    /// Materialises this `View` into an [`Array`] of the same index and
    /// element type.
    fn to_array(&self) -> Array<Self::I, Self::T> { self.collect() }

    /// Apply `f` to every element of this `View` in turn, in the order
    /// defined by [`Index::each()`].
    ///
    /// ```
    /// use arrayexpr::{Index, View, Array};
    /// let a: Array<_, _> = usize::all(5).collect();
    /// let mut total = 0;
    /// a.each(|x| { total += x; });
    /// assert_eq!(total, 10);
    /// ```
    fn each(self, mut f: impl FnMut(Self::T)) {
        Self::I::each(self.size(), |i| f(self.at(i)));
    }

    /// Left-fold every element of this `View` into `init`, in the order
    /// defined by [`Index::each()`].
    ///
    /// See also the free function [`fold()`](super::fold()).
    fn fold<R>(self, init: R, mut f: impl FnMut(R, Self::T) -> R) -> R {
        let mut r = Some(init);
        self.each(|t| { r = r.take().map(|r| f(r, t)); });
        match r {
            Some(r) => r,
            None => unreachable!("accumulator is restored after every element"),
        }
    }

    /// Creates a `View` that applies `f` to the elements of `Self`.
    ///
    /// There is no guarantee that the elements will be passed to `f` in a
    /// particular order, only once, or at all.
    ///
    /// ```
    /// use arrayexpr::{Index, View, Array};
    /// let a: Array<_, _> = usize::all(5).map(|x| x*x).collect();
    /// assert_eq!(a.as_ref(), [0, 1, 4, 9, 16]);
    /// ```
    fn map<F: Unary<Self::T>>(self, f: F) -> Map<Self, F> {
        Map::named(self, f, "map")
    }

    /// Creates a `View` that applies binary operator `B` to an element of
    /// `self` and an element of `other`.
    ///
    /// Two `View`s can be combined only if they have compatible indices. See
    /// trait [`Broadcast`] for more details. Fails if the two `View`s have
    /// the same index type but different sizes.
    ///
    /// ```
    /// use arrayexpr::{Index, View, Array, ops::Add};
    /// let a: Array<usize, usize> = Array::new(3, [9, 8, 7]);
    /// let b: Array<usize, usize> = Array::new(3, [10, 20, 30]);
    /// // Equivalent to `(a + b).collect()`.
    /// let ab: Array<usize, usize> = a.binary::<_, Add>(b).unwrap().collect();
    /// assert_eq!(ab.as_ref(), [19, 28, 37]);
    /// ```
    fn binary<V: IntoView, B>(self, other: V) -> Result<BinaryExpr<Self, V::IntoView, B>> where
        Self::I: Broadcast<<V::IntoView as View>::I>,
        B: Binary<Self::T, <V::IntoView as View>::T>,
    {
        BinaryExpr::new(self, other.into_view())
    }
}

impl<'a, V: View> View for &'a V {
    type I = V::I;
    type T = V::T;
    #[inline(always)]
    fn size(&self) -> <Self::I as Index>::Size { V::size(self) }
    #[inline(always)]
    fn at(&self, index: Self::I) -> Self::T { V::at(self, index) }
}

impl<V: View> View for Rc<V> {
    type I = V::I;
    type T = V::T;
    #[inline(always)]
    fn size(&self) -> <Self::I as Index>::Size { V::size(self) }
    #[inline(always)]
    fn at(&self, index: Self::I) -> Self::T { V::at(self, index) }
}

// ----------------------------------------------------------------------------

/// Conversion into a [`View`], used for the operands of expressions.
///
/// Every `View` converts to itself. The built-in numeric types and
/// [`Complex`] numbers convert to a [`Scalar`], which is how `a + 5.0`
/// broadcasts the `5.0`.
///
/// [`Complex`]: num_complex::Complex
pub trait IntoView {
    /// The `View` that `Self` becomes.
    type IntoView: View;

    fn into_view(self) -> Self::IntoView;
}

impl<V: View> IntoView for V {
    type IntoView = V;
    #[inline(always)]
    fn into_view(self) -> V { self }
}

macro_rules! impl_into_view_for_scalar {
    ($($s:ty),*) => {
        $(
            impl IntoView for $s {
                type IntoView = Scalar<$s>;
                #[inline(always)]
                fn into_view(self) -> Scalar<$s> { Scalar(self) }
            }
        )*
    };
}

impl_into_view_for_scalar!(
    i32, i64, u32, u64, usize, f32, f64,
    num_complex::Complex<f32>, num_complex::Complex<f64>
);

/// The `View` that `A` converts to.
pub type ViewOf<A> = <A as IntoView>::IntoView;

/// The element type of the `View` that `A` converts to.
pub type Elem<A> = <ViewOf<A> as View>::T;

// ----------------------------------------------------------------------------

/// A 0-dimensional [`View`].
///
/// A `Scalar` broadcasts against a `View` of any shape.
#[derive(Default, Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Scalar<T: Clone>(pub T);

impl<T: Clone> View for Scalar<T> {
    type I = ();
    type T = T;
    #[inline(always)]
    fn size(&self) -> () { () }
    #[inline(always)]
    fn at(&self, _: ()) -> T { self.0.clone() }
}

impl<T: Clone + Display> Display for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { Display::fmt(&self.0, f) }
}

impl_ops_for_expr!([T: Clone] Scalar<T>);

// ----------------------------------------------------------------------------

/// Construct a `View` of size `size` from a function.
///
/// Consider also [`Array::from_fn()`].
///
/// ```
/// use arrayexpr::{Index, View, fn_view, Array};
/// let a: Array<usize, _> = fn_view(10, |x: usize| x % 3 == 0).collect();
/// assert_eq!(a.as_ref(), [true, false, false, true, false, false, true, false, false, true]);
/// ```
pub fn fn_view<I: Index, T: Clone, F>(size: I::Size, f: F) -> FnView<I, F> where
    F: Fn(I) -> T,
{
    I::all(size).map(f)
}

/// The return type of [`fn_view()`].
pub type FnView<I, F> = Map<super::All<I>, F>;

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_and_shared_views() {
        let a: Array<usize, i32> = Array::new(3, [1, 2, 3]);
        let r = &a;
        assert_eq!(r.at(1), 2);
        let rc = Rc::new(a);
        let e = crate::mul_expr(Rc::clone(&rc), 10).unwrap();
        assert_eq!(e.to_array().as_ref(), [10, 20, 30]);
        assert_eq!(rc.at(2), 3);
    }

    #[test]
    fn scalar_is_rank_zero() {
        let s = Scalar(2.5);
        assert_eq!(s.rank(), 0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.at(()), 2.5);
        assert_eq!(5.0_f64.into_view(), Scalar(5.0));
    }

    #[test]
    fn fold_visits_in_canonical_order() {
        let v = fn_view((2, 3), |(i, j): (usize, usize)| i * 10 + j);
        let seen = v.fold(Vec::new(), |mut acc, x| { acc.push(x); acc });
        assert_eq!(seen, [0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn collect_calls_at_once_per_index() {
        let calls = std::cell::Cell::new(0);
        let v = fn_view(4, |i: usize| { calls.set(calls.get() + 1); i });
        let a: Array<usize, usize> = v.collect();
        assert_eq!(a.as_ref(), [0, 1, 2, 3]);
        assert_eq!(calls.get(), 4);
    }
}
