//! Lazy element-wise expressions over multi-dimensional arrays.
//!
//! [`Array<I, T>`] represents an array of `T` indexed by `I`. The `T` values
//! are internally stored in a [`Box<[T]>`], which is a dense 1-dimensional
//! representation. The index type `I` can be any type that implements
//! [`Index`]. This includes `usize` and `bool`, but also tuples of other
//! types that implement `Index`. The rank of an array is a property of `I`,
//! so it is known to the compiler.
//!
//! Trait [`View`] is the main way to compute with `Array`s. Unlike `Array`,
//! a `View` doesn't store anything, but instead computes values on demand.
//! Arithmetic on `View`s builds expressions: `&a + &b * 2.0` is a
//! [`BinaryExpr`] that reads `a` and `b` only when one of its elements is
//! asked for. You are encouraged to use `View`s compositionally, and to
//! materialise the result into an `Array` with [`View::to_array()`] only at
//! the end.
//!
//! ```
//! use arrayexpr::{View, Array, inverse, math};
//! let a: Array<usize, f64> = Array::new(3, [1.0, 2.0, 4.0]);
//! let b: Array<usize, f64> = Array::new(3, [3.0, 2.0, 0.0]);
//! let e = (&a + &b) * 2.0 - inverse(&a);
//! assert_eq!(e.to_string(), "((([1, 2, 4] + [3, 2, 0]) * 2) - (1 / [1, 2, 4]))");
//! assert_eq!(e.to_array().as_ref(), [7.0, 7.5, 7.75]);
//! assert_eq!(math::frobenius_norm(&a), 21f64.sqrt());
//! ```
//!
//! Operands of an expression must have the same index type and size, except
//! that a rank-0 operand (a number, or a [`Scalar`]) combines with anything.
//! Differing index types are a compile-time error (see [`Broadcast`]).
//! Differing sizes are detected when the expression is built, before any
//! element is computed: the operators panic, and the named constructors such
//! as [`add_expr()`] return an [`Error`].
//!
//! Numbers are not promoted. A number combines with an array only if the
//! element type has the operator for it, so an array of `f64` is offset by
//! `5.0`, and offsetting it by `5` does not compile:
//!
//! ```compile_fail
//! use arrayexpr::{View, Array};
//! let a: Array<usize, f64> = Array::new(2, [1.0, 2.0]);
//! let _ = (&a + 5).to_array();
//! ```

mod error;
pub use error::{Error, Result};

mod index;
pub use index::{Index, NonScalar, StaticIndex, All};

mod domain;
pub use domain::{Domain};

mod broadcast;
pub use broadcast::{Broadcast};

pub mod ops;

mod lazy;
pub use lazy::{Placeholder, Arg, Args, Call, LazyCall};

mod view;
pub use view::{View, NewView, Push, IntoView, ViewOf, Elem, Scalar, fn_view, FnView};

mod expr;
pub use expr::{BinaryExpr, NegExpr, add_expr, sub_expr, mul_expr, div_expr, neg_expr, inverse};

mod map;
pub use map::{Map, Map2, Lift, map};

mod fold;
pub use fold::{fold, fold_default};

pub mod math;
pub use math::{frobenius_norm, any, all};

mod array;
pub use array::{Array};

pub use num_complex::{Complex};
