use std::fmt::{Debug};

/// Implemented by types that can be used as a multi-index into an [`Array`]
/// or any other [`View`].
///
/// The rank of an array is a property of its index type: `()` has rank `0`,
/// `usize` and `bool` have rank `1`, and a tuple has the sum of the ranks of
/// its components. Two operands can only be combined if their index types
/// agree (see [`Broadcast`]), so rank errors are caught by the compiler.
///
/// If [`Index::Size`] is a compile-time constant, you can save some effort by
/// implementing [`StaticIndex`] instead.
///
/// [`Array`]: super::Array
/// [`View`]: super::View
/// [`Broadcast`]: super::Broadcast
pub trait Index: Copy + Debug + PartialEq {
    /// The run-time representation of the extents of an `Array<Self, T>`.
    type Size: Copy + Debug + PartialEq;

    /// The number of axes.
    const RANK: usize;

    /// Returns the number of `T`s in an `Array<Self, T>`.
    fn length(size: Self::Size) -> usize;

    /// Returns the position (in `0..length()`) of `Self` in row-major order.
    ///
    /// Panics if `Self` is not a valid index into an `Array` of size `size`.
    fn to_usize(self, size: Self::Size) -> usize;

    /// Returns `index / Self::length(size)` and the `Self` for which
    /// `to_usize()` returns `index % Self::length(size)`.
    ///
    /// Panics if `size` is empty, because then there is no such `Self`.
    fn from_usize(size: Self::Size, index: usize) -> (usize, Self);

    /// Calls `f` on every `Self` in canonical order: the first axis varies
    /// slowest and the last axis varies fastest.
    ///
    /// Equivalent to, but often more efficient than,
    /// ```text
    /// for i in 0..Self::length(size) { f(Self::from_usize(size, i).1); }
    /// ```
    fn each(size: Self::Size, mut f: impl FnMut(Self)) {
        for i in 0..Self::length(size) { f(Self::from_usize(size, i).1); }
    }

    /// Returns a View of the specified size that maps every `Self` to itself.
    fn all(size: Self::Size) -> All<Self> { All(size) }
}

impl Index for usize {
    type Size = usize;

    const RANK: usize = 1;

    fn length(size: usize) -> usize { size }

    fn to_usize(self, size: usize) -> usize {
        assert!(self < size, "Index {:?} is out of bounds for size {:?}", self, size);
        self
    }

    fn from_usize(size: usize, index: usize) -> (usize, Self) {
        assert!(size > 0, "Index {:?} is out of bounds for size 0", index);
        (index / size, index % size)
    }

    fn each(size: usize, f: impl FnMut(Self)) { (0..size).for_each(f) }
}

// `impl Index for ()` and `impl Index for bool` come from `StaticIndex`.

impl<I: Index> Index for (I,) {
    type Size = (I::Size,);

    const RANK: usize = I::RANK;

    fn length((i,): Self::Size) -> usize { I::length(i) }

    fn to_usize(self, (i,): Self::Size) -> usize { self.0.to_usize(i) }

    fn from_usize((i,): Self::Size, index: usize) -> (usize, Self) {
        let (index, a) = I::from_usize(i, index);
        (index, (a,))
    }

    fn each((i,): Self::Size, mut f: impl FnMut(Self)) { I::each(i, |a| f((a,))) }
}

impl<I: Index, J: Index> Index for (I, J) {
    type Size = (I::Size, J::Size);

    const RANK: usize = I::RANK + J::RANK;

    fn length((i, j): Self::Size) -> usize { I::length(i) * J::length(j) }

    fn to_usize(self, (i, j): Self::Size) -> usize {
        self.0.to_usize(i) * J::length(j) + self.1.to_usize(j)
    }

    fn from_usize((i, j): Self::Size, index: usize) -> (usize, Self) {
        // The last axis varies fastest, so it is peeled off first.
        let (index, b) = J::from_usize(j, index);
        let (index, a) = I::from_usize(i, index);
        (index, (a, b))
    }

    fn each((i, j): Self::Size, mut f: impl FnMut(Self)) {
        I::each(i, |a| J::each(j, |b| f((a, b))));
    }
}

/// Delegates to `((I, J), K)`, which has the same row-major layout.
impl<I: Index, J: Index, K: Index> Index for (I, J, K) {
    type Size = (I::Size, J::Size, K::Size);

    const RANK: usize = <((I, J), K) as Index>::RANK;

    fn length((i, j, k): Self::Size) -> usize { <((I, J), K) as Index>::length(((i, j), k)) }

    fn to_usize(self, (i, j, k): Self::Size) -> usize {
        Index::to_usize(((self.0, self.1), self.2), ((i, j), k))
    }

    fn from_usize((i, j, k): Self::Size, index: usize) -> (usize, Self) {
        let (index, ((a, b), c)) = <((I, J), K) as Index>::from_usize(((i, j), k), index);
        (index, (a, b, c))
    }

    fn each((i, j, k): Self::Size, mut f: impl FnMut(Self)) {
        <((I, J), K) as Index>::each(((i, j), k), |((a, b), c)| f((a, b, c)));
    }
}

// ----------------------------------------------------------------------------

/// Marks every [`Index`] type except `()`.
///
/// A [`View`] indexed by `()` is a scalar and broadcasts against anything.
/// Any other `View` can only be combined with a `View` of exactly the same
/// index type. If you write your own `Index` type, implement this too.
///
/// [`View`]: super::View
pub trait NonScalar: Index {}

impl NonScalar for usize {}
impl NonScalar for bool {}
impl<I: Index> NonScalar for (I,) {}
impl<I: Index, J: Index> NonScalar for (I, J) {}
impl<I: Index, J: Index, K: Index> NonScalar for (I, J, K) {}

// ----------------------------------------------------------------------------

/// The return type of [`Index::all()`].
#[derive(Debug, Copy, Clone)]
pub struct All<I: Index>(I::Size);

impl<I: Index> super::View for All<I> {
    type I = I;
    type T = I;
    fn size(&self) -> <Self::I as Index>::Size { self.0 }
    fn at(&self, index: Self::I) -> Self::T { index }
}

// ----------------------------------------------------------------------------

/// An [`Index`] with a fixed, finite set of values, so that every [`Array`]
/// indexed by it has the same size. Implementing this is less work than
/// implementing `Index`.
///
/// [`Array`]: super::Array
pub trait StaticIndex: 'static + Debug + Copy + PartialEq {
    /// Every value of `Self`, in order.
    const ALL: &'static [Self];

    /// The number of axes. Most static indices are one axis.
    const RANK: usize = 1;

    /// The position of `self` in `ALL`.
    fn to_usize(self) -> usize;

    /// Equivalent to, but often more efficient than, `ALL[index]`.
    fn from_usize(index: usize) -> Self { Self::ALL[index] }
}

impl<I: StaticIndex> Index for I {
    type Size = ();

    const RANK: usize = <I as StaticIndex>::RANK;

    #[inline(always)] // Want the caller to see this as constant.
    fn length((): Self::Size) -> usize { Self::ALL.len() }

    fn to_usize(self, (): Self::Size) -> usize {
        let index = StaticIndex::to_usize(self);
        assert_eq!(self, Self::ALL[index]);
        index
    }

    #[inline(always)] // Want the caller to optimise if `index < length()`.
    fn from_usize(_: Self::Size, index: usize) -> (usize, Self) {
        let length = Self::length(());
        (index / length, StaticIndex::from_usize(index % length))
    }

    fn each(_: Self::Size, mut f: impl FnMut(Self)) {
        for i in 0..Self::length(()) { f(StaticIndex::from_usize(i)); }
    }
}

impl StaticIndex for () {
    const ALL: &'static [Self] = &[()];
    const RANK: usize = 0;
    fn to_usize(self) -> usize { 0 }
    fn from_usize(_: usize) -> Self { () }
}

impl StaticIndex for bool {
    const ALL: &'static [Self] = &[false, true];
    fn to_usize(self) -> usize { self as usize }
    fn from_usize(index: usize) -> Self { index != 0 }
}

// ----------------------------------------------------------------------------
