//! Eager reductions.
//!
//! A fold visits every element of a `View` exactly once, in the order
//! defined by [`Index::each()`]: the first axis varies slowest and the last
//! axis fastest. Floating-point sums depend on that order, so it never
//! changes.
//!
//! [`Index::each()`]: super::Index::each()

use super::{View, IntoView, Elem};

/// Left-fold every element of `a` into `init` using `f`.
///
/// The accumulator type `R` is the type that `f` returns, and `init` need
/// only convert into it. For example an integer `0` can start a sum of
/// `f64`s without losing the fractional parts:
///
/// ```
/// use arrayexpr::{Array, fold};
/// let a: Array<usize, f64> = Array::new(3, [0.5, 0.25, 0.125]);
/// let sum = fold(|r: f64, x: f64| r + x, &a, 0);
/// assert_eq!(sum, 0.875);
/// ```
pub fn fold<A: IntoView, R>(f: impl FnMut(R, Elem<A>) -> R, a: A, init: impl Into<R>) -> R {
    let a = a.into_view();
    tracing::trace!(domain = %a.domain(), "folding view");
    a.fold(init.into(), f)
}

/// Like [`fold()`], starting from the default value of the element type.
///
/// ```
/// use arrayexpr::{Array, fold_default};
/// let a: Array<(usize, usize), i32> = Array::new((2, 2), [1, 2, 3, 4]);
/// assert_eq!(fold_default(|r, x| r + x, &a), 10);
/// ```
pub fn fold_default<A: IntoView>(f: impl FnMut(Elem<A>, Elem<A>) -> Elem<A>, a: A) -> Elem<A> where
    Elem<A>: Default,
{
    fold(f, a, <Elem<A> as Default>::default())
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Array, fn_view};

    #[test]
    fn sum_in_canonical_order() {
        let a: Array<(usize, usize), i64> = Array::from_fn((3, 4), |(i, j)| (i * 4 + j) as i64);
        assert_eq!(fold(|r: i64, x| r + x, &a, 0i64), 66);
        let order = fold(|mut r: Vec<i64>, x| { r.push(x); r }, &a, Vec::new());
        assert_eq!(order, (0..12).collect::<Vec<i64>>());
    }

    #[test]
    fn order_matters_for_floats() {
        // Summed left to right this is `(1e16 + 1) + 1 == 1e16`, whereas
        // `1e16 + (1 + 1) == 1e16 + 2`.
        let a: Array<usize, f64> = Array::new(3, [1e16, 1.0, 1.0]);
        assert_eq!(fold(|r: f64, x| r + x, &a, 0.0), 1e16);
        let b: Array<usize, f64> = Array::new(3, [1.0, 1.0, 1e16]);
        assert_eq!(fold(|r: f64, x| r + x, &b, 0.0), 1e16 + 2.0);
    }

    #[test]
    fn integer_init_promotes() {
        let a = fn_view(4, |i: usize| i as f64 * 0.5);
        let r = fold(|r: f64, x: f64| r + x, &a, 1u8);
        assert_eq!(r, 4.0);
    }

    #[test]
    fn fold_of_expression() {
        let a: Array<usize, i32> = Array::new(3, [1, 2, 3]);
        assert_eq!(fold(|r: i32, x| r.max(x), -&a, i32::MIN), -1);
        assert_eq!(fold_default(|r, x| r + x, &a * 2), 12);
        assert_eq!(fold(|r: u32, _| r + 1, 7i32, 0u32), 1);
    }
}
