use std::fmt::{self, Display};

use super::{Index, Domain, Broadcast, View, NewView, IntoView, Elem, Error, Result};
use super::ops::{self, Binary, impl_ops_for_expr};

/// A dense array of `T`s indexed by `I`.
///
/// Unlike an expression, an `Array` is storage: it is the only type in this
/// crate that supports assignment and compound assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<I: Index, T> {
    size: I::Size,
    items: Box<[T]>,
}

impl<I: Index, T> Array<I, T> {
    /// Constructs an `Array` of size `size` given its elements, or fails if
    /// there are the wrong number of elements.
    pub fn try_new(size: I::Size, items: impl Into<Box<[T]>>) -> Result<Self> {
        let items = items.into();
        let expected = I::length(size);
        if items.len() != expected {
            return Err(Error::LengthMismatch {expected, actual: items.len()});
        }
        Ok(Self {size, items})
    }

    /// Constructs an `Array` of size `size` given its elements.
    ///
    /// Panics if there are the wrong number of elements.
    ///
    /// ```
    /// use arrayexpr::{Array};
    /// let a: Array<(usize, bool), f32> = Array::new((3, ()), [0.0, 1.0, -1.0, 2.0, 3.0, -2.0]);
    /// assert_eq!(a[(0, false)], 0.0);
    /// assert_eq!(a[(0, true)], 1.0);
    /// assert_eq!(a[(1, false)], -1.0);
    /// assert_eq!(a[(2, true)], -2.0);
    /// ```
    pub fn new(size: I::Size, items: impl Into<Box<[T]>>) -> Self {
        match Self::try_new(size, items) {
            Ok(a) => a,
            Err(e) => panic!("{}", e),
        }
    }

    /// Construct an `Array` of size `size` from a function.
    ///
    /// Consider also [`fn_view()`].
    ///
    /// [`fn_view()`]: super::fn_view
    ///
    /// ```
    /// use arrayexpr::{Array};
    /// let a: Array<usize, _> = Array::from_fn(10, |x| x % 3 == 0);
    /// assert_eq!(a.as_ref(), [true, false, false, true, false, false, true, false, false, true]);
    /// ```
    pub fn from_fn(size: I::Size, mut f: impl FnMut(I) -> T) -> Self {
        let mut items = Vec::with_capacity(I::length(size));
        I::each(size, |i| items.push(f(i)));
        Self {size, items: items.into()}
    }

    /// Returns the raw array elements, in the order defined by
    /// [`Index::each()`].
    pub fn to_raw(self) -> Box<[T]> { self.items }
}

impl<I: Index, T: Clone> Array<I, T> {
    /// Overwrite every element of `self` with the corresponding element of
    /// `other`, which may be a scalar.
    ///
    /// `other` cannot borrow `self`. To use the old contents, clone them
    /// first.
    ///
    /// ```
    /// use arrayexpr::{View, Array};
    /// let mut a: Array<usize, f64> = Array::new(3, [1.0, 2.0, 3.0]);
    /// let b = a.clone();
    /// a.assign(&b * &b).unwrap();
    /// assert_eq!(a.as_ref(), [1.0, 4.0, 9.0]);
    /// a.assign(0.0).unwrap();
    /// assert_eq!(a.as_ref(), [0.0, 0.0, 0.0]);
    /// ```
    pub fn assign<V: IntoView>(&mut self, other: V) -> Result<()> where
        I: Broadcast<<V::IntoView as View>::I, Result=I>,
        Elem<V>: Into<T>,
    {
        let other = other.into_view();
        if <I as Broadcast<<V::IntoView as View>::I>>::combine(self.size, other.size()).is_none() {
            return Err(Error::domain_mismatch("=", Domain::<I>::new(self.size), other.domain()));
        }
        let size = self.size;
        let mut n = 0;
        I::each(size, |index| {
            let (_, j) = <I as Broadcast<<V::IntoView as View>::I>>::index(index);
            self.items[n] = other.at(j).into();
            n += 1;
        });
        Ok(())
    }

    /// Apply `B` to every element of `self` and the corresponding element
    /// of `other`, in place.
    pub fn update<B, V: IntoView>(&mut self, other: V) -> Result<()> where
        I: Broadcast<<V::IntoView as View>::I, Result=I>,
        B: Binary<T, Elem<V>, Output=T>,
    {
        let other = other.into_view();
        if <I as Broadcast<<V::IntoView as View>::I>>::combine(self.size, other.size()).is_none() {
            return Err(Error::domain_mismatch(B::SYMBOL, Domain::<I>::new(self.size), other.domain()));
        }
        let size = self.size;
        let mut n = 0;
        I::each(size, |index| {
            let (_, j) = <I as Broadcast<<V::IntoView as View>::I>>::index(index);
            self.items[n] = B::call(self.items[n].clone(), other.at(j));
            n += 1;
        });
        Ok(())
    }
}

impl<I: Index, T> AsRef<[T]> for Array<I, T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<I: Index, T> AsMut<[T]> for Array<I, T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<I: Index, T> std::ops::Index<I> for Array<I, T> {
    type Output = T;

    fn index(&self, index: I) -> &T { &self.items[index.to_usize(self.size)] }
}

impl<I: Index, T> std::ops::IndexMut<I> for Array<I, T> {
    fn index_mut(&mut self, index: I) -> &mut T { &mut self.items[index.to_usize(self.size)] }
}

impl<I: Index, T: Clone> View for Array<I, T> {
    type I = I;
    type T = T;
    #[inline(always)]
    fn size(&self) -> I::Size { self.size }
    #[inline(always)]
    fn len(&self) -> usize { self.items.len() }
    #[inline(always)]
    fn at(&self, index: I) -> T { self[index].clone() }
}

impl<I: Index, T: Clone> NewView for Array<I, T> {
    type Buffer = Vec<T>;

    fn new_view(
        size: I::Size,
        callback: impl FnOnce(&mut Self::Buffer),
    ) -> Self {
        let mut buffer = Vec::with_capacity(I::length(size));
        callback(&mut buffer);
        Self::new(size, buffer)
    }
}

/// Renders the elements in order, ignoring the shape: `[a, b, c]`.
impl<I: Index, T: Display> Display for Array<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (n, t) in self.items.iter().enumerate() {
            if n > 0 { write!(f, ", ")?; }
            write!(f, "{}", t)?;
        }
        write!(f, "]")
    }
}

impl_ops_for_expr!([I: Index, T: Clone] Array<I, T>);
impl_ops_for_expr!(['a, I: Index, T: Clone] &'a Array<I, T>);

// ----------------------------------------------------------------------------

/// Implement a compound assignment operator for `Array`, with any `View` or
/// built-in scalar on the right.
macro_rules! impl_op_assign_for_array {
    ($op:ident::$method:ident, $tag:ident) => {
        impl<I: Index, T: Clone, V: View> std::ops::$op<V> for Array<I, T> where
            I: Broadcast<V::I, Result=I>,
            ops::$tag: Binary<T, V::T, Output=T>,
        {
            fn $method(&mut self, other: V) {
                self.update::<ops::$tag, V>(other).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl_op_assign_for_array!(@scalars $op::$method, $tag,
            i32, i64, u32, u64, usize, f32, f64,
            num_complex::Complex<f32>, num_complex::Complex<f64>);
    };

    (@scalars $op:ident::$method:ident, $tag:ident, $($s:ty),*) => {
        $(
            impl<I: Index, T: Clone> std::ops::$op<$s> for Array<I, T> where
                I: Broadcast<(), Result=I>,
                ops::$tag: Binary<T, $s, Output=T>,
            {
                fn $method(&mut self, other: $s) {
                    self.update::<ops::$tag, $s>(other).unwrap_or_else(|e| panic!("{}", e))
                }
            }
        )*
    };
}

impl_op_assign_for_array!(AddAssign::add_assign, Add);
impl_op_assign_for_array!(SubAssign::sub_assign, Sub);
impl_op_assign_for_array!(MulAssign::mul_assign, Mul);
impl_op_assign_for_array!(DivAssign::div_assign, Div);

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fn_view, Complex};

    #[test]
    fn try_new_checks_length() {
        let a = Array::<(usize, usize), u8>::try_new((2, 3), vec![0; 5]);
        assert_eq!(a, Err(Error::LengthMismatch {expected: 6, actual: 5}));
        assert!(Array::<(usize, usize), u8>::try_new((2, 3), vec![0; 6]).is_ok());
    }

    #[test]
    #[should_panic(expected = "domain needs 2 elements but 3 were supplied")]
    fn new_panics_on_wrong_length() {
        let _ = Array::<usize, u8>::new(2, [1, 2, 3]);
    }

    #[test]
    fn indexing_is_row_major() {
        let mut a: Array<(usize, usize), u32> = Array::from_fn((2, 3), |(i, j)| (10 * i + j) as u32);
        assert_eq!(a.as_ref(), [0, 1, 2, 10, 11, 12]);
        assert_eq!(a[(1, 2)], 12);
        a[(0, 1)] = 7;
        assert_eq!(a.at((0, 1)), 7);
        assert_eq!(a.to_raw().len(), 6);
    }

    #[test]
    fn compound_assignment() {
        let mut a: Array<usize, f64> = Array::new(3, [1.0, 2.0, 3.0]);
        let b: Array<usize, f64> = Array::new(3, [1.0, 1.0, 2.0]);
        a += &b;
        assert_eq!(a.as_ref(), [2.0, 3.0, 5.0]);
        a -= 1.0;
        assert_eq!(a.as_ref(), [1.0, 2.0, 4.0]);
        a *= &b * 2.0;
        assert_eq!(a.as_ref(), [2.0, 4.0, 16.0]);
        a /= 2.0;
        assert_eq!(a.as_ref(), [1.0, 2.0, 8.0]);
    }

    #[test]
    fn compound_assignment_complex() {
        let mut z: Array<usize, Complex<f64>> = Array::new(2, [Complex::new(1.0, 1.0), Complex::new(0.0, 2.0)]);
        z *= Complex::new(0.0, 1.0);
        assert_eq!(z.as_ref(), [Complex::new(-1.0, 1.0), Complex::new(-2.0, 0.0)]);
        z += fn_view(2, |i: usize| Complex::new(i as f64, 0.0));
        assert_eq!(z.as_ref(), [Complex::new(-1.0, 1.0), Complex::new(-1.0, 0.0)]);
    }

    #[test]
    #[should_panic(expected = "domain mismatch in `+`")]
    fn compound_assignment_checks_domain() {
        let mut a: Array<usize, i32> = Array::new(2, [1, 2]);
        a += Array::<usize, i32>::new(3, [1, 2, 3]);
    }

    #[test]
    fn assign_converts_elements() {
        let mut a: Array<usize, f64> = Array::new(2, [0.0, 0.0]);
        let b: Array<usize, i32> = Array::new(2, [3, -4]);
        a.assign(&b).unwrap();
        assert_eq!(a.as_ref(), [3.0, -4.0]);
        let c: Array<usize, f64> = Array::new(3, [0.0; 3]);
        assert!(matches!(a.assign(&c), Err(Error::DomainMismatch {op: "=", ..})));
        assert_eq!(a.as_ref(), [3.0, -4.0]);
    }

    #[test]
    fn display() {
        let a: Array<(usize, usize), i32> = Array::new((2, 2), [1, 2, 3, 4]);
        assert_eq!(a.to_string(), "[1, 2, 3, 4]");
    }
}
