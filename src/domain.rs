use std::fmt::{self, Debug, Display};

use super::{Index};

/// The shape of a [`View`]: its rank and the extent of each axis.
///
/// A `Domain<I>` is a thin wrapper around `I::Size`, which is all the
/// information needed to enumerate every `I` in the `View`.
///
/// ```
/// use arrayexpr::{View, Array};
/// let a: Array<(usize, usize), f64> = Array::from_fn((2, 3), |(i, j)| (i * 3 + j) as f64);
/// let d = a.domain();
/// assert_eq!(d.rank(), 2);
/// assert_eq!(d.len(), 6);
/// assert_eq!(d.to_string(), "(2, 3)");
/// ```
///
/// [`View`]: super::View
pub struct Domain<I: Index>(I::Size);

impl<I: Index> Domain<I> {
    pub fn new(size: I::Size) -> Self { Self(size) }

    /// The extents, in the representation chosen by `I`.
    pub fn size(&self) -> I::Size { self.0 }

    /// The number of axes.
    pub fn rank(&self) -> usize { I::RANK }

    /// The number of elements.
    pub fn len(&self) -> usize { I::length(self.0) }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Calls `f` on every index of the domain in canonical order.
    pub fn each(&self, f: impl FnMut(I)) { I::each(self.0, f) }
}

impl<I: Index> Clone for Domain<I> {
    fn clone(&self) -> Self { *self }
}

impl<I: Index> Copy for Domain<I> {}

impl<I: Index> PartialEq for Domain<I> {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl<I: Index> Debug for Domain<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Domain").field(&self.0).finish()
    }
}

impl<I: Index> Display for Domain<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
