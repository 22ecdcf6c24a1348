//! Generic programming over element-wise operations.
//!
//! For each of the four arithmetic operators in [`std::ops`] this module
//! contains a type of the same name that cannot be instantiated and that
//! implements [`Binary`]. For example, [`Add`] corresponds to
//! [`std::ops::Add`]. These are the tags of [`BinaryExpr`], and can be passed
//! as a type parameter to generic code, e.g. [`View::binary()`].
//!
//! [`Unary`] is the single-argument counterpart, used by [`Map`]. Unlike
//! `Binary` it takes `&self`, because a mapped function may carry state such
//! as the exponent of [`Pow`].
//!
//! [`BinaryExpr`]: super::BinaryExpr
//! [`View::binary()`]: super::View::binary()
//! [`Map`]: super::Map
//! [`Pow`]: super::math::Pow

/// Names an operation for rendering expressions.
pub trait Operator {
    /// The infix symbol, e.g. `"+"`.
    const SYMBOL: &'static str;
}

/// A function that combines `T` with `U`.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
pub trait Binary<T, U>: Operator {
    type Output;

    fn call(t: T, u: U) -> Self::Output;
}

/// A function that transforms a `T`.
///
/// Every `Fn(T) -> U` implements `Unary<T>`.
pub trait Unary<T> {
    type Output;

    fn call(&self, t: T) -> Self::Output;
}

impl<T, U, F: Fn(T) -> U> Unary<T> for F {
    type Output = U;
    #[inline(always)]
    fn call(&self, t: T) -> U { self(t) }
}

// ----------------------------------------------------------------------------

pub enum Add {}

impl Operator for Add { const SYMBOL: &'static str = "+"; }

impl<T, U> Binary<T, U> for Add where T: std::ops::Add<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.add(u) }
}

// ----------------------------------------------------------------------------

pub enum Sub {}

impl Operator for Sub { const SYMBOL: &'static str = "-"; }

impl<T, U> Binary<T, U> for Sub where T: std::ops::Sub<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.sub(u) }
}

// ----------------------------------------------------------------------------

pub enum Mul {}

impl Operator for Mul { const SYMBOL: &'static str = "*"; }

impl<T, U> Binary<T, U> for Mul where T: std::ops::Mul<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.mul(u) }
}

// ----------------------------------------------------------------------------

pub enum Div {}

impl Operator for Div { const SYMBOL: &'static str = "/"; }

impl<T, U> Binary<T, U> for Div where T: std::ops::Div<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.div(u) }
}

// ----------------------------------------------------------------------------

/// Implement one of the binary [`std::ops`] traits for a type that implements
/// [`View`], with any other `View` on the right.
///
/// The generic parameters of the type go in square brackets, followed by the
/// type itself. You perhaps want to use [`impl_ops_for_view`] instead, which
/// calls this.
///
/// [`View`]: super::View
/// [`impl_ops_for_view`]: crate::impl_ops_for_view
#[macro_export]
macro_rules! impl_op_for_view {
    ($op:ident::$method:ident for [$($gen:tt)*] $t:ty) => {
        impl<$($gen)*, RHS: $crate::View> std::ops::$op<RHS> for $t where
            $t: $crate::View,
            <$t as $crate::View>::I: $crate::Broadcast<RHS::I>,
            $crate::ops::$op: $crate::ops::Binary<<$t as $crate::View>::T, RHS::T>,
        {
            type Output = $crate::BinaryExpr<$t, RHS, $crate::ops::$op>;

            fn $method(self, rhs: RHS) -> Self::Output {
                $crate::View::binary(self, rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

/// Implement one of the binary [`std::ops`] traits with the scalar type `$s`
/// on the left and a type that implements [`View`] on the right.
///
/// [`View`]: super::View
#[macro_export]
macro_rules! impl_op_for_scalar {
    ($op:ident::$method:ident for $s:ty, [$($gen:tt)*] $t:ty) => {
        impl<$($gen)*> std::ops::$op<$t> for $s where
            $t: $crate::View,
            (): $crate::Broadcast<<$t as $crate::View>::I>,
            $crate::ops::$op: $crate::ops::Binary<$s, <$t as $crate::View>::T>,
        {
            type Output = $crate::BinaryExpr<$crate::Scalar<$s>, $t, $crate::ops::$op>;

            fn $method(self, rhs: $t) -> Self::Output {
                $crate::View::binary($crate::Scalar(self), rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

/// Implement the four arithmetic operators with the scalar type `$s` on the
/// left and a `View` on the right.
#[macro_export]
macro_rules! impl_ops_for_scalar {
    ($s:ty, [$($gen:tt)*] $t:ty) => {
        $crate::impl_op_for_scalar! { Add::add for $s, [$($gen)*] $t }
        $crate::impl_op_for_scalar! { Sub::sub for $s, [$($gen)*] $t }
        $crate::impl_op_for_scalar! { Mul::mul for $s, [$($gen)*] $t }
        $crate::impl_op_for_scalar! { Div::div for $s, [$($gen)*] $t }
    };
}

/// Implement the arithmetic operators of [`std::ops`] for a type that
/// implements [`View`]: `+`, `-`, `*` and `/` with another `View` on the
/// right or a built-in scalar on the left, and unary `-`.
///
/// The binary operators call [`View::binary()`] and panic if the domains of
/// the operands differ. Compound assignment operators are deliberately not
/// implemented: an expression is not storage.
///
/// The built-in scalars are `i32`, `i64`, `u32`, `u64`, `usize`, `f32`,
/// `f64`, `Complex<f32>` and `Complex<f64>`. A scalar on the right is just
/// another `View`, so wrap it in a [`Scalar`]. The expressions of this crate
/// also accept bare built-in scalars on the right.
///
/// There is no numeric promotion: a scalar must have a type that the element
/// type can be combined with, so an array of `f64` is offset by `5.0`, not
/// by `5`.
///
/// ```
/// use arrayexpr::{Index, View, Array, Scalar, impl_ops_for_view};
///
/// pub struct VecView<T: Clone>(Vec<T>);
///
/// impl<T: Clone> View for VecView<T> {
///     type I = usize;
///     type T = T;
///     fn size(&self) -> usize { self.0.len() }
///     fn at(&self, index: usize) -> T { self.0[index].clone() }
/// }
///
/// impl_ops_for_view!([T: Clone] VecView<T>);
///
/// let v: VecView<f64> = VecView(vec![1.0, 2.0]);
/// let a: Array<usize, f64> = (2.0_f64 * v + Scalar(1.0)).to_array();
/// assert_eq!(a.as_ref(), [3.0, 5.0]);
/// ```
///
/// [`View`]: super::View
/// [`Scalar`]: super::Scalar
/// [`View::binary()`]: super::View::binary()
#[macro_export]
macro_rules! impl_ops_for_view {
    ([$($gen:tt)*] $t:ty) => {
        $crate::impl_op_for_view! { Add::add for [$($gen)*] $t }
        $crate::impl_op_for_view! { Sub::sub for [$($gen)*] $t }
        $crate::impl_op_for_view! { Mul::mul for [$($gen)*] $t }
        $crate::impl_op_for_view! { Div::div for [$($gen)*] $t }

        impl<$($gen)*> std::ops::Neg for $t where
            $t: $crate::View,
            <$t as $crate::View>::T: std::ops::Neg,
            <<$t as $crate::View>::T as std::ops::Neg>::Output: Clone,
        {
            type Output = $crate::NegExpr<$t>;

            fn neg(self) -> Self::Output { $crate::NegExpr::new(self) }
        }

        $crate::impl_ops_for_scalar! { i32, [$($gen)*] $t }
        $crate::impl_ops_for_scalar! { i64, [$($gen)*] $t }
        $crate::impl_ops_for_scalar! { u32, [$($gen)*] $t }
        $crate::impl_ops_for_scalar! { u64, [$($gen)*] $t }
        $crate::impl_ops_for_scalar! { usize, [$($gen)*] $t }
        $crate::impl_ops_for_scalar! { f32, [$($gen)*] $t }
        $crate::impl_ops_for_scalar! { f64, [$($gen)*] $t }
        $crate::impl_ops_for_scalar! { $crate::Complex<f32>, [$($gen)*] $t }
        $crate::impl_ops_for_scalar! { $crate::Complex<f64>, [$($gen)*] $t }
    };
}

// ----------------------------------------------------------------------------

// A bare scalar on the right overlaps with `impl<RHS: View>` unless the
// scalar provably does not implement `View`. That is only provable inside
// this crate, so these macros are not exported.

macro_rules! impl_op_with_scalar {
    ($op:ident::$method:ident for $s:ty, [$($gen:tt)*] $t:ty) => {
        impl<$($gen)*> std::ops::$op<$s> for $t where
            $t: $crate::View,
            <$t as $crate::View>::I: $crate::Broadcast<()>,
            $crate::ops::$op: $crate::ops::Binary<<$t as $crate::View>::T, $s>,
        {
            type Output = $crate::BinaryExpr<$t, $crate::Scalar<$s>, $crate::ops::$op>;

            fn $method(self, rhs: $s) -> Self::Output {
                $crate::View::binary(self, $crate::Scalar(rhs)).unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

macro_rules! impl_ops_with_scalar {
    ($s:ty, [$($gen:tt)*] $t:ty) => {
        $crate::ops::impl_op_with_scalar! { Add::add for $s, [$($gen)*] $t }
        $crate::ops::impl_op_with_scalar! { Sub::sub for $s, [$($gen)*] $t }
        $crate::ops::impl_op_with_scalar! { Mul::mul for $s, [$($gen)*] $t }
        $crate::ops::impl_op_with_scalar! { Div::div for $s, [$($gen)*] $t }
    };
}

// `impl_ops_for_view!` plus the built-in scalars on the right.
macro_rules! impl_ops_for_expr {
    ([$($gen:tt)*] $t:ty) => {
        $crate::impl_ops_for_view! { [$($gen)*] $t }

        $crate::ops::impl_ops_with_scalar! { i32, [$($gen)*] $t }
        $crate::ops::impl_ops_with_scalar! { i64, [$($gen)*] $t }
        $crate::ops::impl_ops_with_scalar! { u32, [$($gen)*] $t }
        $crate::ops::impl_ops_with_scalar! { u64, [$($gen)*] $t }
        $crate::ops::impl_ops_with_scalar! { usize, [$($gen)*] $t }
        $crate::ops::impl_ops_with_scalar! { f32, [$($gen)*] $t }
        $crate::ops::impl_ops_with_scalar! { f64, [$($gen)*] $t }
        $crate::ops::impl_ops_with_scalar! { $crate::Complex<f32>, [$($gen)*] $t }
        $crate::ops::impl_ops_with_scalar! { $crate::Complex<f64>, [$($gen)*] $t }
    };
}

pub(crate) use impl_op_with_scalar;
pub(crate) use impl_ops_with_scalar;
pub(crate) use impl_ops_for_expr;
