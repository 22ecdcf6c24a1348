use super::{Index, NonScalar};

/// `Self` implements `Broadcast<Other>` to say what happens when you combine
/// a `View` indexed by `Self` with one indexed by `Other`.
///
/// Either both index types are the same, in which case the two `View`s must
/// also have the same size, or one of them is `()`. In the latter case, the
/// sole element of the scalar `View` is replicated to fill out the size of
/// the other `View`. This is called "broadcasting".
///
/// There are no other implementations. In particular, combining two
/// non-scalar `View`s of different rank does not compile:
///
/// ```compile_fail
/// use arrayexpr::{Array};
/// let a: Array<usize, f64> = Array::new(2, [1.0, 2.0]);
/// let b: Array<(usize, usize), f64> = Array::new((1, 2), [1.0, 2.0]);
/// let _ = a + b;
/// ```
pub trait Broadcast<Other: Index>: Index {
    /// The resulting `Index` type.
    type Result: Index;

    /// The size of `Self::Result`, or `None` if the sizes are incompatible.
    fn combine(self_size: Self::Size, other_size: Other::Size) -> Option<<Self::Result as Index>::Size>;

    /// The size of `Self::Result`, given sizes already accepted by
    /// [`Broadcast::combine()`].
    fn size(self_size: Self::Size, other_size: Other::Size) -> <Self::Result as Index>::Size;

    /// Where each `Self::Result` maps from in `Self` and in `Other`.
    fn index(index: Self::Result) -> (Self, Other);
}

impl<I: NonScalar> Broadcast<I> for I {
    type Result = I;

    fn combine(self_size: I::Size, other_size: I::Size) -> Option<I::Size> {
        if self_size == other_size { Some(self_size) } else { None }
    }

    fn size(self_size: I::Size, _: I::Size) -> I::Size { self_size }

    fn index(index: I) -> (I, I) { (index, index) }
}

impl<J: NonScalar> Broadcast<J> for () {
    type Result = J;
    fn combine(_: (), other_size: J::Size) -> Option<J::Size> { Some(other_size) }
    fn size(_: (), other_size: J::Size) -> J::Size { other_size }
    fn index(index: J) -> ((), J) { ((), index) }
}

impl<I: NonScalar> Broadcast<()> for I {
    type Result = I;
    fn combine(self_size: I::Size, _: ()) -> Option<I::Size> { Some(self_size) }
    fn size(self_size: I::Size, _: ()) -> I::Size { self_size }
    fn index(index: I) -> (I, ()) { (index, ()) }
}

impl Broadcast<()> for () {
    type Result = ();
    fn combine(_: (), _: ()) -> Option<()> { Some(()) }
    fn size(_: (), _: ()) -> () { () }
    fn index(_: ()) -> ((), ()) { ((), ()) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_shape() {
        assert_eq!(<(usize, usize) as Broadcast<(usize, usize)>>::combine((2, 3), (2, 3)), Some((2, 3)));
        assert_eq!(<(usize, usize) as Broadcast<(usize, usize)>>::combine((2, 3), (3, 2)), None);
        assert_eq!(<usize as Broadcast<usize>>::index(4), (4, 4));
    }

    #[test]
    fn scalar_broadcasts() {
        assert_eq!(<() as Broadcast<(usize, bool)>>::combine((), (5, ())), Some((5, ())));
        assert_eq!(<(usize, bool) as Broadcast<()>>::combine((5, ()), ()), Some((5, ())));
        assert_eq!(<usize as Broadcast<()>>::index(2), (2, ()));
        assert_eq!(<() as Broadcast<usize>>::index(2), ((), 2));
        assert_eq!(<() as Broadcast<()>>::combine((), ()), Some(()));
    }
}
