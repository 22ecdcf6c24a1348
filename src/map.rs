//! Lifting element functions to element-wise lazy operations.
//!
//! [`Map`] applies a one-argument function and [`Map2`] a two-argument one.
//! [`Lift`] packages a function with a name so that it can be applied to any
//! operand, which is how the table in [`math`] is built.
//!
//! [`math`]: super::math

use std::fmt::{self, Debug, Display};

use super::{Index, Broadcast, View, IntoView, ViewOf, Elem, Error, Result};
use super::ops::{Unary, impl_ops_for_expr};

/// The return type of [`View::map()`] and [`Lift::apply()`].
#[derive(Clone)]
pub struct Map<V, F> {
    view: V,
    f: F,
    name: &'static str,
}

impl<V: View, F: Unary<V::T>> Map<V, F> {
    /// Map `f` over `view`. `name` is used only to render the expression.
    pub fn named(view: V, f: F, name: &'static str) -> Self {
        Self {view, f, name}
    }
}

impl<V, F> Map<V, F> {
    pub fn name(&self) -> &'static str { self.name }

    pub fn inner(&self) -> &V { &self.view }
}

impl<V: View, F: Unary<V::T>> View for Map<V, F> where F::Output: Clone {
    type I = V::I;
    type T = F::Output;

    fn size(&self) -> <Self::I as Index>::Size { self.view.size() }

    #[inline(always)]
    fn at(&self, index: Self::I) -> Self::T { self.f.call(self.view.at(index)) }
}

impl<V: Debug, F> Debug for Map<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Map")
            .field("name", &self.name)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

/// Renders as `name(view)`.
impl<V: Display, F> Display for Map<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name, self.view)
    }
}

impl_ops_for_expr!([V, F] Map<V, F>);

// ----------------------------------------------------------------------------

/// A `View` that applies a two-argument function to an element of `A` and
/// an element of `B`.
///
/// `A` and `B` must be compatible in exactly the way the operands of a
/// [`BinaryExpr`] must be.
///
/// [`BinaryExpr`]: super::BinaryExpr
#[derive(Clone)]
pub struct Map2<A, B, F> {
    a: A,
    b: B,
    f: F,
    name: &'static str,
}

impl<A: View, B: View, F, U> Map2<A, B, F> where
    A::I: Broadcast<B::I>,
    F: Fn(A::T, B::T) -> U,
{
    /// Fails if `a` and `b` have the same index type but different sizes.
    pub fn new(a: A, b: B, f: F, name: &'static str) -> Result<Self> {
        match <A::I as Broadcast<B::I>>::combine(a.size(), b.size()) {
            Some(_) => Ok(Self {a, b, f, name}),
            None => Err(Error::domain_mismatch(name, a.domain(), b.domain())),
        }
    }
}

impl<A, B, F> Map2<A, B, F> {
    pub fn name(&self) -> &'static str { self.name }
}

impl<A: View, B: View, F, U: Clone> View for Map2<A, B, F> where
    A::I: Broadcast<B::I>,
    F: Fn(A::T, B::T) -> U,
{
    type I = <A::I as Broadcast<B::I>>::Result;
    type T = U;

    fn size(&self) -> <Self::I as Index>::Size {
        <A::I as Broadcast<B::I>>::size(self.a.size(), self.b.size())
    }

    fn at(&self, index: Self::I) -> U {
        let (i, j) = <A::I as Broadcast<B::I>>::index(index);
        (self.f)(self.a.at(i), self.b.at(j))
    }
}

impl<A: Debug, B: Debug, F> Debug for Map2<A, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Map2")
            .field("name", &self.name)
            .field("a", &self.a)
            .field("b", &self.b)
            .finish_non_exhaustive()
    }
}

/// Renders as `name(a, b)`.
impl<A: Display, B: Display, F> Display for Map2<A, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({}, {})", self.name, self.a, self.b)
    }
}

impl_ops_for_expr!([A, B, F] Map2<A, B, F>);

// ----------------------------------------------------------------------------

/// An element function that can be applied to whole arrays.
///
/// ```
/// use arrayexpr::{View, Array, map};
/// let a: Array<usize, i32> = Array::new(3, [1, -2, 3]);
/// let square = map(|x: i32| x * x);
/// let e = square.apply(&a);
/// assert_eq!(e.to_array().as_ref(), [1, 4, 9]);
/// assert_eq!(e.to_string(), "map([1, -2, 3])");
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Lift<F> {
    f: F,
    name: &'static str,
}

/// Lift `f` to an element-wise operation. See [`Lift`].
pub fn map<F>(f: F) -> Lift<F> { Lift::named("map", f) }

impl<F> Lift<F> {
    /// Like [`map()`], but with a name for rendering expressions.
    pub const fn named(name: &'static str, f: F) -> Self { Self {f, name} }

    pub fn name(&self) -> &'static str { self.name }

    /// A lazy `View` of `f(a(i))` for every index `i` of `a`.
    pub fn apply<A: IntoView>(&self, a: A) -> Map<ViewOf<A>, F> where
        F: Unary<Elem<A>> + Clone,
    {
        Map::named(a.into_view(), self.f.clone(), self.name)
    }

    /// A lazy `View` of `f(a(i), b(i))` for every index `i`, or an error if
    /// the extents of `a` and `b` differ.
    ///
    /// ```
    /// use arrayexpr::{View, Array, Lift};
    /// let a: Array<usize, f64> = Array::new(2, [3.0, 5.0]);
    /// let min = Lift::named("min", |x: f64, y: f64| x.min(y));
    /// let e = min.apply2(&a, 4.0).unwrap();
    /// assert_eq!(e.to_array().as_ref(), [3.0, 4.0]);
    /// assert_eq!(e.to_string(), "min([3, 5], 4)");
    /// ```
    pub fn apply2<A: IntoView, B: IntoView, U>(&self, a: A, b: B) -> Result<Map2<ViewOf<A>, ViewOf<B>, F>> where
        <ViewOf<A> as View>::I: Broadcast<<ViewOf<B> as View>::I>,
        F: Fn(Elem<A>, Elem<B>) -> U + Clone,
    {
        Map2::new(a.into_view(), b.into_view(), self.f.clone(), self.name)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Array, fn_view};

    #[test]
    fn map_is_lazy() {
        let calls = std::cell::Cell::new(0);
        let a: Array<usize, i32> = Array::new(4, [1, 2, 3, 4]);
        let e = (&a).map(|x: i32| { calls.set(calls.get() + 1); x + 1 });
        assert_eq!(calls.get(), 0);
        assert_eq!(e.at(2), 4);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn mapped_nodes_compose_with_operators() {
        let a: Array<usize, f64> = Array::new(3, [1.0, 2.0, 3.0]);
        let double = map(|x: f64| 2.0 * x);
        let e = double.apply(&a) + &a;
        assert_eq!(e.to_array().as_ref(), [3.0, 6.0, 9.0]);
        assert_eq!(e.to_string(), "(map([1, 2, 3]) + [1, 2, 3])");
    }

    #[test]
    fn map2_broadcasts_and_validates() {
        let a = fn_view((2, 2), |(i, j): (usize, usize)| (i * 2 + j) as i64);
        let max = Lift::named("max", |x: i64, y: i64| x.max(y));
        assert_eq!(max.apply2(&a, 1i64).unwrap().to_array().as_ref(), [1, 1, 2, 3]);
        let b: Array<(usize, usize), i64> = Array::new((2, 3), [0; 6]);
        let error = max.apply2(&a, &b).unwrap_err();
        assert!(matches!(error, Error::DomainMismatch {op: "max", ..}));
    }
}
