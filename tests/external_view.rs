//! Operators for a `View` defined outside the crate.

use arrayexpr::{Array, Complex, Scalar, View, impl_ops_for_view};

/// Reads a `Vec` as a rank-1 array.
struct VecView<T: Clone>(Vec<T>);

impl<T: Clone> View for VecView<T> {
    type I = usize;
    type T = T;
    fn size(&self) -> usize { self.0.len() }
    fn at(&self, index: usize) -> T { self.0[index].clone() }
}

impl_ops_for_view!([T: Clone] VecView<T>);

#[test]
fn view_on_either_side() {
    let a: Array<usize, f64> = Array::new(2, [10.0, 20.0]);
    let sum = VecView(vec![1.0, 2.0]) + &a;
    assert_eq!(sum.to_array().as_ref(), [11.0, 22.0]);
    let difference = &a - VecView(vec![1.0, 2.0]);
    assert_eq!(difference.to_array().as_ref(), [9.0, 18.0]);
}

#[test]
fn scalars() {
    let v = VecView(vec![1.0_f64, 2.0]);
    let e = 2.0_f64 * v + Scalar(1.0);
    assert_eq!(e.to_array().as_ref(), [3.0, 5.0]);
    assert_eq!((e - 1.0).to_array().as_ref(), [2.0, 4.0]);
    let n = 10_i64 - VecView(vec![1_i64, 2]);
    assert_eq!(n.to_array().as_ref(), [9, 8]);
    let z = Complex::new(0.0_f64, 1.0) * VecView(vec![Complex::new(1.0_f64, 0.0)]);
    assert_eq!(z.at(0), Complex::new(0.0, 1.0));
}

#[test]
fn negation() {
    let n = -VecView(vec![1, -2, 3]);
    assert_eq!(n.to_array().as_ref(), [-1, 2, -3]);
}

#[test]
#[should_panic(expected = "domain mismatch in `*`")]
fn mismatch_panics() {
    let _ = VecView(vec![1, 2]) * VecView(vec![1, 2, 3]);
}
