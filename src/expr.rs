//! Expression nodes for the arithmetic operators.
//!
//! A node holds its operands and computes its elements from theirs on
//! demand. Whether an operand is owned or borrowed is decided by the type of
//! the operand: `&a + &b` borrows, `a + b` moves.

use std::fmt::{self, Debug, Display};
use std::marker::{PhantomData};
use std::ops::{Neg};

use num_traits::{One};

use super::{Index, NonScalar, Broadcast, View, IntoView, ViewOf, Elem, Scalar, Error, Result};
use super::ops::{self, Binary, Operator, impl_ops_for_expr};

/// The return type of [`View::binary()`] and of the binary operators.
///
/// `B` is one of the tags in [`ops`], and says what to do with a pair of
/// elements. The domains of `L` and `R` are checked once, by
/// [`BinaryExpr::new()`], before any element is read.
pub struct BinaryExpr<L, R, B> {
    l: L,
    r: R,
    tag: PhantomData<B>,
}

impl<L: View, R: View, B> BinaryExpr<L, R, B> where
    L::I: Broadcast<R::I>,
    B: Binary<L::T, R::T>,
{
    /// Fails if `l` and `r` have the same index type but different sizes.
    pub fn new(l: L, r: R) -> Result<Self> {
        match <L::I as Broadcast<R::I>>::combine(l.size(), r.size()) {
            Some(_) => Ok(Self {l, r, tag: PhantomData}),
            None => Err(Error::domain_mismatch(B::SYMBOL, l.domain(), r.domain())),
        }
    }
}

impl<L, R, B> BinaryExpr<L, R, B> {
    pub fn left(&self) -> &L { &self.l }

    pub fn right(&self) -> &R { &self.r }
}

impl<L: View, R: View, B> View for BinaryExpr<L, R, B> where
    L::I: Broadcast<R::I>,
    B: Binary<L::T, R::T>,
    B::Output: Clone,
{
    type I = <L::I as Broadcast<R::I>>::Result;
    type T = B::Output;

    fn size(&self) -> <Self::I as Index>::Size {
        <L::I as Broadcast<R::I>>::size(self.l.size(), self.r.size())
    }

    #[inline(always)]
    fn at(&self, index: Self::I) -> Self::T {
        let (i, j) = <L::I as Broadcast<R::I>>::index(index);
        B::call(self.l.at(i), self.r.at(j))
    }
}

impl<L: Clone, R: Clone, B> Clone for BinaryExpr<L, R, B> {
    fn clone(&self) -> Self {
        Self {l: self.l.clone(), r: self.r.clone(), tag: PhantomData}
    }
}

impl<L: Debug, R: Debug, B: Operator> Debug for BinaryExpr<L, R, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BinaryExpr")
            .field("op", &B::SYMBOL)
            .field("l", &self.l)
            .field("r", &self.r)
            .finish()
    }
}

/// Renders as `(l op r)`.
impl<L: Display, R: Display, B: Operator> Display for BinaryExpr<L, R, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.l, B::SYMBOL, self.r)
    }
}

impl_ops_for_expr!([L, R, B] BinaryExpr<L, R, B>);

// ----------------------------------------------------------------------------

/// The return type of unary `-`.
#[derive(Debug, Copy, Clone)]
pub struct NegExpr<V>(V);

impl<V: View> NegExpr<V> where V::T: Neg {
    /// Never fails: negation keeps the domain of `v`.
    pub fn new(v: V) -> Self { Self(v) }
}

impl<V> NegExpr<V> {
    pub fn operand(&self) -> &V { &self.0 }
}

impl<V: View> View for NegExpr<V> where
    V::T: Neg,
    <V::T as Neg>::Output: Clone,
{
    type I = V::I;
    type T = <V::T as Neg>::Output;

    fn size(&self) -> <Self::I as Index>::Size { self.0.size() }

    #[inline(always)]
    fn at(&self, index: Self::I) -> Self::T { -self.0.at(index) }
}

impl<V: Display> Display for NegExpr<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "-{}", self.0) }
}

impl_ops_for_expr!([V] NegExpr<V>);

// ----------------------------------------------------------------------------

macro_rules! named_constructor {
    ($(#[$attr:meta])* $name:ident, $op:ident) => {
        $(#[$attr])*
        pub fn $name<A: IntoView, B: IntoView>(a: A, b: B) -> Result<BinaryExpr<ViewOf<A>, ViewOf<B>, ops::$op>> where
            <ViewOf<A> as View>::I: Broadcast<<ViewOf<B> as View>::I>,
            ops::$op: Binary<Elem<A>, Elem<B>>,
        {
            BinaryExpr::new(a.into_view(), b.into_view())
        }
    };
}

named_constructor! {
    /// Element-wise `a + b`, or an [`Error::DomainMismatch`] if the extents
    /// of `a` and `b` differ.
    ///
    /// ```
    /// use arrayexpr::{View, Array, Error, add_expr};
    /// let a: Array<usize, i32> = Array::new(3, [1, 2, 3]);
    /// let b: Array<usize, i32> = Array::new(2, [1, 2]);
    /// assert_eq!(add_expr(&a, 10).unwrap().to_array().as_ref(), [11, 12, 13]);
    /// assert!(matches!(add_expr(&a, &b), Err(Error::DomainMismatch {..})));
    /// ```
    add_expr, Add
}

named_constructor! {
    /// Element-wise `a - b`. See [`add_expr()`].
    sub_expr, Sub
}

named_constructor! {
    /// Element-wise `a * b`. See [`add_expr()`].
    mul_expr, Mul
}

named_constructor! {
    /// Element-wise `a / b`. See [`add_expr()`].
    div_expr, Div
}

/// Element-wise `-a`.
pub fn neg_expr<A: IntoView>(a: A) -> NegExpr<ViewOf<A>> where Elem<A>: Neg {
    NegExpr::new(a.into_view())
}

/// Element-wise `1 / a`.
///
/// Only defined for operands of rank at least one.
///
/// ```
/// use arrayexpr::{View, Array, inverse};
/// let a: Array<usize, f64> = Array::new(3, [1.0, 2.0, 4.0]);
/// let i = inverse(&a);
/// assert_eq!(i.to_array().as_ref(), [1.0, 0.5, 0.25]);
/// assert_eq!(i.to_string(), "(1 / [1, 2, 4])");
/// ```
pub fn inverse<A: IntoView>(a: A) -> BinaryExpr<Scalar<Elem<A>>, ViewOf<A>, ops::Div> where
    <ViewOf<A> as View>::I: NonScalar,
    Elem<A>: One,
    ops::Div: Binary<Elem<A>, Elem<A>>,
{
    // A `Scalar` broadcasts against every domain.
    BinaryExpr {l: Scalar(<Elem<A> as One>::one()), r: a.into_view(), tag: PhantomData}
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Array, Complex};

    fn v(items: &[f64]) -> Array<usize, f64> { Array::new(items.len(), items.to_vec()) }

    #[test]
    fn elementwise() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);
        assert_eq!((&a + &b).to_array().as_ref(), [5.0, 7.0, 9.0]);
        assert_eq!((&a - &b).to_array().as_ref(), [-3.0, -3.0, -3.0]);
        assert_eq!((&a * &b).to_array().as_ref(), [4.0, 10.0, 18.0]);
        assert_eq!((&b / &a).to_array().as_ref(), [4.0, 2.5, 2.0]);
        assert_eq!((-&a).to_array().as_ref(), [-1.0, -2.0, -3.0]);
    }

    #[test]
    fn scalar_on_either_side() {
        let a = v(&[1.0, 2.0]);
        assert_eq!((&a - 5.0).to_array().as_ref(), [-4.0, -3.0]);
        assert_eq!((5.0 - &a).to_array().as_ref(), [4.0, 3.0]);
        assert_eq!((2.0 * &a).to_array(), (&a * 2.0).to_array());
    }

    #[test]
    fn mixed_element_types() {
        let a = v(&[1.0, 2.0]);
        let z = &a * Complex::new(0.0, 1.0);
        assert_eq!(z.at(1), Complex::new(0.0, 2.0));
    }

    #[test]
    fn rank_two() {
        let a: Array<(usize, usize), i64> = Array::from_fn((2, 2), |(i, j)| (i * 2 + j) as i64);
        let e = (&a + &a) * 3 - 1;
        assert_eq!(e.rank(), 2);
        assert_eq!(e.at((1, 0)), 11);
        assert_eq!(e.to_array().as_ref(), [-1, 5, 11, 17]);
    }

    #[test]
    fn mismatch_is_rejected_before_evaluation() {
        let evaluated = std::cell::Cell::new(false);
        let a = crate::fn_view(3, |i: usize| { evaluated.set(true); i as f64 });
        let b = v(&[1.0, 2.0]);
        let error = add_expr(&a, &b).unwrap_err();
        assert_eq!(error, Error::DomainMismatch {op: "+", left: "3".into(), right: "2".into()});
        assert!(!evaluated.get());
    }

    #[test]
    #[should_panic(expected = "domain mismatch in `*`")]
    fn operator_panics_on_mismatch() {
        let _ = v(&[1.0]) * v(&[1.0, 2.0]);
    }

    #[test]
    fn display() {
        let a = v(&[1.0, 2.0]);
        assert_eq!((&a + 1.0).to_string(), "([1, 2] + 1)");
        assert_eq!((-(&a * &a)).to_string(), "-([1, 2] * [1, 2])");
        assert_eq!(sub_expr(2.0, &a).unwrap().to_string(), "(2 - [1, 2])");
    }

    #[test]
    fn named_constructors_agree_with_operators() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[0.5, 0.25, 2.0]);
        assert_eq!(add_expr(&a, &b).unwrap().to_array(), (&a + &b).to_array());
        assert_eq!(sub_expr(&a, &b).unwrap().to_array(), (&a - &b).to_array());
        assert_eq!(mul_expr(&a, &b).unwrap().to_array(), (&a * &b).to_array());
        assert_eq!(div_expr(&a, &b).unwrap().to_array(), (&a / &b).to_array());
        assert_eq!(neg_expr(&a).to_array(), (-&a).to_array());
        assert_eq!(inverse(&b).to_array().as_ref(), [2.0, 4.0, 0.5]);
    }

    #[test]
    fn owned_operands_outlive_their_source() {
        let e = {
            let a = v(&[1.0, 2.0]);
            a + 1.0
        };
        assert_eq!(e.left().as_ref(), [1.0, 2.0]);
        assert_eq!(e.to_array().as_ref(), [2.0, 3.0]);
    }
}
