//! Element-wise mathematical functions, and the reductions built on [`fold`].
//!
//! Every function in the table below is a one-line application of
//! [`Lift`]: it takes any operand (an [`Array`], an expression, a reference
//! to either, or a number) and returns a lazy [`Map`] that renders as
//! `name(operand)`.
//!
//! | Function | Element type | Result |
//! |---|---|---|
//! | [`abs`] | signed integer, real or complex | integer or real |
//! | [`abs2`], [`real`], [`imag`] | real or complex | real |
//! | [`conj`] | integer, real or complex | complex |
//! | [`conj_r`] | real or complex | same as input |
//! | [`floor`] | real | real |
//! | [`isnan`] | real or complex | `bool` |
//! | [`exp`], [`log`], [`sqrt`], trigonometric | real or complex | same as input |
//! | [`pow`] | anything with `*` and `1` | same as input |
//!
//! ```
//! use arrayexpr::{View, Array, Complex, math};
//! let z: Array<usize, Complex<f64>> = Array::new(2, [Complex::new(3.0, 4.0), Complex::new(0.0, -1.0)]);
//! assert_eq!(math::abs(&z).to_array().as_ref(), [5.0, 1.0]);
//! assert_eq!(math::imag(&z).to_string(), "imag([3+4i, 0-1i])");
//! ```
//!
//! [`fold`]: super::fold()
//! [`Array`]: super::Array

use std::ops::{Mul};

use num_complex::{Complex, ComplexFloat};
use num_traits::{AsPrimitive, Float, Num, One, Signed, Zero};

use super::{IntoView, ViewOf, Elem, Lift, Map, fold};
use super::ops::{Unary};

/// The return type of the lifted functions in this module: `A` mapped
/// through a function returning `U`.
pub type Lifted<A, U> = Map<ViewOf<A>, fn(Elem<A>) -> U>;

/// The real type underlying the (possibly complex) elements of `A`.
pub type RealOf<A> = <Elem<A> as ComplexFloat>::Real;

fn lift<A: IntoView, U>(a: A, name: &'static str, f: fn(Elem<A>) -> U) -> Lifted<A, U> {
    Lift::named(name, f).apply(a)
}

/// Element-wise modulus.
///
/// ```
/// use arrayexpr::{View, Array, math::abs};
/// let a: Array<usize, i32> = Array::new(3, [-3, 0, 4]);
/// assert_eq!(abs(&a).to_array().as_ref(), [3, 0, 4]);
/// ```
pub fn abs<A: IntoView>(a: A) -> Lifted<A, <Elem<A> as Abs>::Output> where Elem<A>: Abs {
    lift(a, "abs", <Elem<A> as Abs>::abs)
}

/// Element-wise squared modulus. Cheaper than squaring [`abs()`].
pub fn abs2<A: IntoView>(a: A) -> Lifted<A, RealOf<A>> where Elem<A>: ComplexFloat {
    lift(a, "abs2", scalar::abs2)
}

pub fn real<A: IntoView>(a: A) -> Lifted<A, RealOf<A>> where Elem<A>: ComplexFloat {
    lift(a, "real", ComplexFloat::re)
}

pub fn imag<A: IntoView>(a: A) -> Lifted<A, RealOf<A>> where Elem<A>: ComplexFloat {
    lift(a, "imag", ComplexFloat::im)
}

/// Element-wise complex conjugate. Always has complex elements; see also
/// [`conj_r()`]. Integers become `Complex<f64>`.
pub fn conj<A: IntoView>(a: A) -> Lifted<A, Complex<<Elem<A> as Conj>::Real>> where Elem<A>: Conj {
    lift(a, "conj", <Elem<A> as Conj>::conj)
}

/// Element-wise complex conjugate, keeping real elements real.
pub fn conj_r<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "conj_r", scalar::conj_r)
}

pub fn floor<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: Float {
    lift(a, "floor", Float::floor)
}

/// Element-wise NaN test. NaN is a value, not an error.
pub fn isnan<A: IntoView>(a: A) -> Lifted<A, bool> where Elem<A>: ComplexFloat {
    lift(a, "isnan", ComplexFloat::is_nan)
}

pub fn exp<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "exp", ComplexFloat::exp)
}

pub fn cos<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "cos", ComplexFloat::cos)
}

pub fn sin<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "sin", ComplexFloat::sin)
}

pub fn tan<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "tan", ComplexFloat::tan)
}

pub fn cosh<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "cosh", ComplexFloat::cosh)
}

pub fn sinh<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "sinh", ComplexFloat::sinh)
}

pub fn tanh<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "tanh", ComplexFloat::tanh)
}

pub fn acos<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "acos", ComplexFloat::acos)
}

pub fn asin<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "asin", ComplexFloat::asin)
}

pub fn atan<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "atan", ComplexFloat::atan)
}

/// Element-wise natural logarithm.
pub fn log<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "log", ComplexFloat::ln)
}

pub fn sqrt<A: IntoView>(a: A) -> Lifted<A, Elem<A>> where Elem<A>: ComplexFloat {
    lift(a, "sqrt", ComplexFloat::sqrt)
}

// ----------------------------------------------------------------------------

/// Element types with a modulus, for [`abs()`].
pub trait Abs {
    type Output;

    fn abs(self) -> Self::Output;
}

macro_rules! impl_abs_for_signed {
    ($($t:ty),*) => {
        $(
            impl Abs for $t {
                type Output = $t;
                fn abs(self) -> $t { Signed::abs(&self) }
            }
        )*
    };
}

impl_abs_for_signed!(i8, i16, i32, i64, isize, f32, f64);

impl<T: Float> Abs for Complex<T> {
    type Output = T;
    fn abs(self) -> T { self.norm() }
}

/// Element types with a complex conjugate, for [`conj()`].
pub trait Conj {
    /// The type of the real and imaginary parts of the conjugate.
    type Real;

    fn conj(self) -> Complex<Self::Real>;
}

macro_rules! impl_conj {
    (int: $($t:ty),*) => {
        $(
            impl Conj for $t {
                type Real = f64;
                fn conj(self) -> Complex<f64> { Complex::new(AsPrimitive::<f64>::as_(self), 0.0) }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl Conj for $t {
                type Real = $t;
                fn conj(self) -> Complex<$t> { Complex::new(self, 0.0) }
            }
        )*
    };
}

impl_conj!(int: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_conj!(float: f32, f64);

impl<T: Clone + Num + std::ops::Neg<Output=T>> Conj for Complex<T> {
    type Real = T;
    fn conj(self) -> Complex<T> { Complex::conj(&self) }
}

// ----------------------------------------------------------------------------

/// Raises its argument to a fixed non-negative integer power.
///
/// `pow(x, 0)` is `1` and `pow(x, n)` is `pow(x, n - 1) * x`, so this works
/// for integers as well as for real and complex numbers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pow(pub u32);

impl<T: Clone + One + Mul<Output=T>> Unary<T> for Pow {
    type Output = T;

    fn call(&self, t: T) -> T {
        (0..self.0).fold(T::one(), |r, _| r * t.clone())
    }
}

/// Element-wise `x` to the power `n`.
///
/// ```
/// use arrayexpr::{View, Array, math::pow};
/// let a: Array<usize, i64> = Array::new(3, [2, -3, 5]);
/// assert_eq!(pow(&a, 3).to_array().as_ref(), [8, -27, 125]);
/// assert_eq!(pow(&a, 0).to_array().as_ref(), [1, 1, 1]);
/// ```
pub fn pow<A: IntoView>(a: A, n: u32) -> Map<ViewOf<A>, Pow> where
    Elem<A>: One + Mul<Output=Elem<A>>,
{
    Lift::named("pow", Pow(n)).apply(a)
}

// ----------------------------------------------------------------------------

/// The element functions behind some of the lifted functions.
pub mod scalar {
    use num_complex::{ComplexFloat};

    /// `|x|²`, without a square root.
    pub fn abs2<T: ComplexFloat>(x: T) -> T::Real {
        let (re, im) = (x.re(), x.im());
        re * re + im * im
    }

    pub fn conj_r<T: ComplexFloat>(x: T) -> T { x.conj() }
}

// ----------------------------------------------------------------------------

/// Numbers that can be read as a truth value: zero is false and everything
/// else, including NaN, is true.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool { *self }
}

macro_rules! impl_truthy_for_number {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn truthy(&self) -> bool { !self.is_zero() }
            }
        )*
    };
}

impl_truthy_for_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Clone + num_traits::Num> Truthy for Complex<T> {
    fn truthy(&self) -> bool { !self.is_zero() }
}

/// Whether any element of `a` is [`Truthy`].
///
/// Every element is visited, even after a true one is found.
///
/// ```
/// use arrayexpr::{Array, math::{any, all}};
/// let a: Array<usize, f64> = Array::new(3, [0.0, 0.0, f64::NAN]);
/// assert!(any(&a));
/// assert!(!all(&a));
/// ```
pub fn any<A: IntoView>(a: A) -> bool where Elem<A>: Truthy {
    fold(|r: bool, x: Elem<A>| r | x.truthy(), a, false)
}

/// Whether every element of `a` is [`Truthy`].
///
/// Every element is visited, even after a false one is found.
pub fn all<A: IntoView>(a: A) -> bool where Elem<A>: Truthy {
    fold(|r: bool, x: Elem<A>| r & x.truthy(), a, true)
}

/// The square root of the sum of the squared moduli of the elements of `a`.
///
/// ```
/// use arrayexpr::{Array, Complex, math::frobenius_norm};
/// let a: Array<(usize, usize), f64> = Array::new((2, 2), [1.0, -1.0, 1.0, -1.0]);
/// assert_eq!(frobenius_norm(&a), 2.0);
/// let z: Array<usize, Complex<f64>> = Array::new(2, [Complex::new(1.0, 2.0), Complex::new(2.0, 0.0)]);
/// assert_eq!(frobenius_norm(&z), 3.0);
/// ```
pub fn frobenius_norm<A: IntoView>(a: A) -> RealOf<A> where Elem<A>: ComplexFloat {
    let sum = fold(|r: RealOf<A>, x: Elem<A>| r + scalar::abs2(x), a, <RealOf<A> as Zero>::zero());
    Float::sqrt(sum)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{View, Array};

    fn z(items: &[(f64, f64)]) -> Array<usize, Complex<f64>> {
        Array::from_fn(items.len(), |i: usize| Complex::new(items[i].0, items[i].1))
    }

    #[test]
    fn real_functions() {
        let a: Array<usize, f64> = Array::new(3, [-1.5, 0.0, 4.0]);
        assert_eq!(abs(&a).to_array().as_ref(), [1.5, 0.0, 4.0]);
        assert_eq!(abs2(&a).to_array().as_ref(), [2.25, 0.0, 16.0]);
        assert_eq!(floor(&a).to_array().as_ref(), [-2.0, 0.0, 4.0]);
        assert_eq!(sqrt(abs(&a)).at(2), 2.0);
        assert_eq!(exp(&a).at(1), 1.0);
        assert_eq!(log(exp(&a)).at(1), 0.0);
        assert_eq!(cos(&a).at(1), 1.0);
        assert_eq!(conj_r(&a).to_array(), a);
        assert_eq!(imag(&a).to_array().as_ref(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn complex_functions() {
        let a = z(&[(3.0, 4.0), (0.0, -2.0)]);
        assert_eq!(abs(&a).to_array().as_ref(), [5.0, 2.0]);
        assert_eq!(abs2(&a).to_array().as_ref(), [25.0, 4.0]);
        assert_eq!(real(&a).to_array().as_ref(), [3.0, 0.0]);
        assert_eq!(imag(&a).to_array().as_ref(), [4.0, -2.0]);
        assert_eq!(conj(&a).to_array(), z(&[(3.0, -4.0), (0.0, 2.0)]));
        assert_eq!(conj_r(&a).to_array(), conj(&a).to_array());
    }

    #[test]
    fn conj_of_real_is_complex() {
        let a: Array<usize, f64> = Array::new(2, [1.0, -2.0]);
        let c: Array<usize, Complex<f64>> = conj(&a).to_array();
        assert_eq!(c.as_ref().iter().map(|c| c.re).collect::<Vec<_>>(), [1.0, -2.0]);
    }

    #[test]
    fn integer_abs_and_conj() {
        let a: Array<usize, i32> = Array::new(3, [-3, 0, 7]);
        let m: Array<usize, i32> = abs(&a).to_array();
        assert_eq!(m.as_ref(), [3, 0, 7]);
        let c: Array<usize, Complex<f64>> = conj(&a).to_array();
        assert_eq!(c.as_ref(), [Complex::new(-3.0, 0.0), Complex::new(0.0, 0.0), Complex::new(7.0, 0.0)]);
        assert_eq!(conj(&a - 1).to_string(), "conj(([-3, 0, 7] - 1))");
        let u: Array<usize, u8> = Array::new(1, [200]);
        assert_eq!(conj(&u).at(0), Complex::new(200.0, 0.0));
    }

    #[test]
    fn isnan_is_a_value() {
        let a: Array<usize, f64> = Array::new(3, [1.0, f64::NAN, 0.0]);
        assert_eq!(isnan(&a).to_array().as_ref(), [false, true, false]);
        assert_eq!(isnan(&a / 0.0).to_array().as_ref(), [false, true, true]);
    }

    #[test]
    fn pow_is_repeated_multiplication() {
        let a = z(&[(0.0, 1.0), (2.0, 0.0)]);
        assert_eq!(pow(&a, 2).to_array(), z(&[(-1.0, 0.0), (4.0, 0.0)]));
        assert_eq!(pow(&a, 0).to_array(), z(&[(1.0, 0.0), (1.0, 0.0)]));
        assert_eq!(Pow(4).call(3u8), 81);
    }

    #[test]
    fn lifted_functions_render_their_name() {
        let a: Array<usize, f64> = Array::new(2, [1.0, 2.0]);
        assert_eq!(sin(&a).to_string(), "sin([1, 2])");
        assert_eq!(pow(&a + 1.0, 2).to_string(), "pow(([1, 2] + 1))");
        assert_eq!((2.0 * tanh(&a)).to_string(), "(2 * tanh([1, 2]))");
    }

    #[test]
    fn any_and_all() {
        let zeros: Array<(usize, usize), i32> = Array::new((2, 2), [0; 4]);
        let ones = &zeros + 1;
        assert!(!any(&zeros));
        assert!(!all(&zeros));
        assert!(any(&ones));
        assert!(all(&ones));
        let mixed: Array<usize, bool> = Array::new(3, [false, true, false]);
        assert!(any(&mixed));
        assert!(!all(&mixed));
        let c = z(&[(0.0, 1.0), (0.0, 0.0)]);
        assert!(any(&c) && !all(&c));
    }

    #[test]
    fn any_visits_every_element() {
        let visits = std::cell::Cell::new(0);
        let a = crate::fn_view(5, |_: usize| { visits.set(visits.get() + 1); true });
        assert!(any(&a));
        assert_eq!(visits.get(), 5);
    }
}
