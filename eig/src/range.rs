//! Range descriptors selecting a contiguous sub-range of one matrix or vector axis.
//!
//! Every descriptor resolves, against the extent of the axis it indexes, to an
//! [`IndexSpan`]. The `static_*` variants additionally carry their length as a
//! const generic, which lets views built from them keep a fixed-size dimension type.
//!
//! ```
//! use eig::{first, last, range, static_first, IndexSpan};
//!
//! assert_eq!(IndexSpan::resolve(range(2, 5), 10), IndexSpan::new(2, 4));
//! assert_eq!(IndexSpan::resolve(first(3), 10), IndexSpan::new(0, 3));
//! assert_eq!(IndexSpan::resolve(last(3), 10), IndexSpan::new(7, 3));
//! assert_eq!(IndexSpan::resolve(static_first::<2>(), 10), IndexSpan::new(0, 2));
//! assert_eq!(IndexSpan::resolve(4, 10), IndexSpan::new(4, 1));
//! ```

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::index_span::IndexSpan;

/// Anything that selects along a single axis: one of the range descriptors, or a bare
/// `usize` selecting a single element.
///
/// The associated constants are the compile-time facts consumed when typing views:
/// whether the index is a range at all, whether it spans the whole axis, and its
/// length if that is known statically.
pub trait AxisIndex {
    const IS_RANGE: bool;
    const IS_ALL: bool = false;
    const STATIC_SIZE: Option<usize> = None;

    /// Resolve against an axis of extent `size`. Never fails; see [`IndexSpan::check`].
    fn to_index_span(self, size: usize) -> IndexSpan;
}

/// Marker for range descriptors proper. Bare integers are [`AxisIndex`] but not
/// `RangeDescriptor`, so APIs bounded on this trait reject them at compile time.
pub trait RangeDescriptor: AxisIndex {}

/// The whole axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct All;

/// The first `n` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct First(pub usize);

/// The last `n` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Last(pub usize);

/// `len` elements starting at `start`. Built by [`range`] from inclusive bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Inclusive {
    pub start: usize,
    pub len: usize,
}

/// The first `N` elements, `N` known at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StaticFirst<const N: usize>;

/// The last `N` elements, `N` known at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StaticLast<const N: usize>;

/// Elements `START..=FINISH`, both bounds known at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StaticInclusive<const START: usize, const FINISH: usize>;

impl<const START: usize, const FINISH: usize> StaticInclusive<START, FINISH> {
    /// Fails const evaluation when `FINISH + 1 < START`.
    pub const LEN: usize = FINISH + 1 - START;
}

/// `N` elements from a run-time `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StaticSized<const N: usize> {
    pub start: usize,
}

pub const fn all() -> All {
    All
}

pub const fn first(n: usize) -> First {
    First(n)
}

pub const fn last(n: usize) -> Last {
    Last(n)
}

/// Inclusive range `start..=finish`. `range(s, s - 1)` is empty; `finish + 1 < start`
/// yields a span that [`IndexSpan::check`] rejects.
pub const fn range(start: usize, finish: usize) -> Inclusive {
    Inclusive {
        start,
        len: finish.wrapping_add(1).wrapping_sub(start),
    }
}

pub const fn static_first<const N: usize>() -> StaticFirst<N> {
    StaticFirst
}

pub const fn static_last<const N: usize>() -> StaticLast<N> {
    StaticLast
}

pub const fn static_range<const START: usize, const FINISH: usize>(
) -> StaticInclusive<START, FINISH> {
    StaticInclusive
}

pub const fn static_sized_range<const N: usize>(start: usize) -> StaticSized<N> {
    StaticSized { start }
}

/// Whether `T` is a range descriptor (as opposed to a bare integer).
pub const fn is_range<T: AxisIndex>() -> bool {
    T::IS_RANGE
}

/// Whether `T` is the whole-axis descriptor.
pub const fn is_all<T: AxisIndex>() -> bool {
    T::IS_ALL
}

/// Whether `T` carries a compile-time length.
pub const fn has_static_size<T: AxisIndex>() -> bool {
    T::STATIC_SIZE.is_some()
}

/// The compile-time length of `T`, or `default` when it is only known at run time.
pub const fn static_size_or<T: AxisIndex>(default: usize) -> usize {
    match T::STATIC_SIZE {
        Some(n) => n,
        None => default,
    }
}

impl AxisIndex for All {
    const IS_RANGE: bool = true;
    const IS_ALL: bool = true;

    #[inline]
    fn to_index_span(self, size: usize) -> IndexSpan {
        IndexSpan::new(0, size)
    }
}

impl AxisIndex for First {
    const IS_RANGE: bool = true;

    #[inline]
    fn to_index_span(self, _size: usize) -> IndexSpan {
        IndexSpan::new(0, self.0)
    }
}

impl AxisIndex for Last {
    const IS_RANGE: bool = true;

    #[inline]
    fn to_index_span(self, size: usize) -> IndexSpan {
        IndexSpan::new(size.wrapping_sub(self.0), self.0)
    }
}

impl AxisIndex for Inclusive {
    const IS_RANGE: bool = true;

    #[inline]
    fn to_index_span(self, _size: usize) -> IndexSpan {
        IndexSpan::new(self.start, self.len)
    }
}

impl<const N: usize> AxisIndex for StaticFirst<N> {
    const IS_RANGE: bool = true;
    const STATIC_SIZE: Option<usize> = Some(N);

    #[inline]
    fn to_index_span(self, _size: usize) -> IndexSpan {
        IndexSpan::new(0, N)
    }
}

impl<const N: usize> AxisIndex for StaticLast<N> {
    const IS_RANGE: bool = true;
    const STATIC_SIZE: Option<usize> = Some(N);

    #[inline]
    fn to_index_span(self, size: usize) -> IndexSpan {
        IndexSpan::new(size.wrapping_sub(N), N)
    }
}

impl<const START: usize, const FINISH: usize> AxisIndex for StaticInclusive<START, FINISH> {
    const IS_RANGE: bool = true;
    const STATIC_SIZE: Option<usize> = Some(Self::LEN);

    #[inline]
    fn to_index_span(self, _size: usize) -> IndexSpan {
        IndexSpan::new(START, Self::LEN)
    }
}

impl<const N: usize> AxisIndex for StaticSized<N> {
    const IS_RANGE: bool = true;
    const STATIC_SIZE: Option<usize> = Some(N);

    #[inline]
    fn to_index_span(self, _size: usize) -> IndexSpan {
        IndexSpan::new(self.start, N)
    }
}

impl AxisIndex for usize {
    const IS_RANGE: bool = false;

    #[inline]
    fn to_index_span(self, _size: usize) -> IndexSpan {
        IndexSpan::new(self, 1)
    }
}

// Standard library ranges. `..` behaves exactly like `all()`.

impl AxisIndex for RangeFull {
    const IS_RANGE: bool = true;
    const IS_ALL: bool = true;

    #[inline]
    fn to_index_span(self, size: usize) -> IndexSpan {
        IndexSpan::new(0, size)
    }
}

impl AxisIndex for Range<usize> {
    const IS_RANGE: bool = true;

    #[inline]
    fn to_index_span(self, _size: usize) -> IndexSpan {
        IndexSpan::new(self.start, self.end.wrapping_sub(self.start))
    }
}

impl AxisIndex for RangeInclusive<usize> {
    const IS_RANGE: bool = true;

    #[inline]
    fn to_index_span(self, size: usize) -> IndexSpan {
        let (start, finish) = self.into_inner();
        range(start, finish).to_index_span(size)
    }
}

impl AxisIndex for RangeTo<usize> {
    const IS_RANGE: bool = true;

    #[inline]
    fn to_index_span(self, _size: usize) -> IndexSpan {
        IndexSpan::new(0, self.end)
    }
}

impl AxisIndex for RangeFrom<usize> {
    const IS_RANGE: bool = true;

    #[inline]
    fn to_index_span(self, size: usize) -> IndexSpan {
        IndexSpan::new(self.start, size.wrapping_sub(self.start))
    }
}

macro_rules! impl_range_descriptor {
    ($($ty:ty),* $(,)?) => {
        $(impl RangeDescriptor for $ty {})*
    };
}

impl_range_descriptor!(
    All,
    First,
    Last,
    Inclusive,
    RangeFull,
    Range<usize>,
    RangeInclusive<usize>,
    RangeTo<usize>,
    RangeFrom<usize>,
);
impl<const N: usize> RangeDescriptor for StaticFirst<N> {}
impl<const N: usize> RangeDescriptor for StaticLast<N> {}
impl<const START: usize, const FINISH: usize> RangeDescriptor for StaticInclusive<START, FINISH> {}
impl<const N: usize> RangeDescriptor for StaticSized<N> {}

#[cfg(test)]
mod tests {
    use ark_std::rand::Rng;
    use ark_std::test_rng;

    use super::*;

    fn resolve<A: AxisIndex>(index: A, size: usize) -> (usize, usize) {
        IndexSpan::resolve(index, size).into()
    }

    #[test]
    fn test_axis_of_ten() {
        assert_eq!(resolve(range(2, 5), 10), (2, 4));
        assert_eq!(resolve(first(3), 10), (0, 3));
        assert_eq!(resolve(last(3), 10), (7, 3));
        assert_eq!(resolve(4, 10), (4, 1));
        assert_eq!(resolve(all(), 10), (0, 10));
    }

    #[test]
    fn test_last_depends_on_extent() {
        assert_eq!(resolve(last(2), 10), (8, 2));
        assert_eq!(resolve(last(2), 5), (3, 2));
        assert_eq!(resolve(static_last::<2>(), 10), (8, 2));
        assert_eq!(resolve(static_last::<2>(), 5), (3, 2));
    }

    #[test]
    fn test_static_variants() {
        assert_eq!(resolve(static_first::<3>(), 10), (0, 3));
        assert_eq!(resolve(static_range::<2, 5>(), 10), (2, 4));
        assert_eq!(resolve(static_sized_range::<3>(6), 10), (6, 3));
        assert_eq!(StaticInclusive::<4, 4>::LEN, 1);
        assert_eq!(StaticInclusive::<4, 3>::LEN, 0);
    }

    #[test]
    fn test_formulas_hold_for_random_extents() {
        let rng = &mut test_rng();
        for _ in 0..200 {
            let size = rng.gen_range(0..64usize);
            let n = rng.gen_range(0..=size);
            assert_eq!(resolve(all(), size), (0, size));
            assert_eq!(resolve(first(n), size), (0, n));
            assert_eq!(resolve(last(n), size), (size - n, n));

            if size > 0 {
                let start = rng.gen_range(0..size);
                let finish = rng.gen_range(start..size);
                assert_eq!(resolve(range(start, finish), size), (start, finish - start + 1));
                assert_eq!(resolve(start..=finish, size), (start, finish - start + 1));
                assert_eq!(resolve(start..finish + 1, size), (start, finish - start + 1));
            }
            if size >= 4 {
                let start = rng.gen_range(0..=size - 4);
                assert_eq!(resolve(static_sized_range::<4>(start), size), (start, 4));
            }
        }
    }

    #[test]
    fn test_empty_and_inverted_ranges() {
        assert_eq!(resolve(range(3, 2), 10), (3, 0));
        assert!(IndexSpan::resolve(range(5, 2), 10).check(10).is_err());
        assert!(IndexSpan::resolve(last(11), 10).check(10).is_err());
    }

    #[test]
    fn test_std_ranges() {
        assert_eq!(resolve(.., 7), (0, 7));
        assert_eq!(resolve(..3, 7), (0, 3));
        assert_eq!(resolve(2.., 7), (2, 5));
        assert_eq!(resolve(2..5, 7), (2, 3));
    }

    #[test]
    fn test_predicates() {
        assert!(is_range::<All>());
        assert!(is_range::<First>());
        assert!(is_range::<Last>());
        assert!(is_range::<Inclusive>());
        assert!(is_range::<StaticFirst<2>>());
        assert!(is_range::<StaticLast<2>>());
        assert!(is_range::<StaticInclusive<1, 2>>());
        assert!(is_range::<StaticSized<2>>());
        assert!(!is_range::<usize>());

        assert!(has_static_size::<StaticFirst<2>>());
        assert!(has_static_size::<StaticLast<2>>());
        assert!(has_static_size::<StaticInclusive<1, 2>>());
        assert!(has_static_size::<StaticSized<2>>());
        assert!(!has_static_size::<All>());
        assert!(!has_static_size::<First>());
        assert!(!has_static_size::<Last>());
        assert!(!has_static_size::<Inclusive>());
        assert!(!has_static_size::<usize>());
        assert!(!has_static_size::<RangeFull>());

        assert!(is_all::<All>());
        assert!(is_all::<RangeFull>());
        assert!(!is_all::<First>());
        assert!(!is_all::<usize>());
    }

    #[test]
    fn test_static_size_or() {
        const DYNAMIC: usize = usize::MAX;
        assert_eq!(static_size_or::<StaticFirst<3>>(DYNAMIC), 3);
        assert_eq!(static_size_or::<StaticLast<5>>(DYNAMIC), 5);
        assert_eq!(static_size_or::<StaticInclusive<2, 5>>(DYNAMIC), 4);
        assert_eq!(static_size_or::<StaticSized<7>>(DYNAMIC), 7);
        assert_eq!(static_size_or::<All>(DYNAMIC), DYNAMIC);
        assert_eq!(static_size_or::<First>(DYNAMIC), DYNAMIC);
        assert_eq!(static_size_or::<Last>(DYNAMIC), DYNAMIC);
        assert_eq!(static_size_or::<Inclusive>(DYNAMIC), DYNAMIC);
        assert_eq!(static_size_or::<usize>(0), 0);
    }

    #[test]
    fn test_static_size_is_extent_independent() {
        fn check<A: AxisIndex + Copy>(index: A) {
            let n = A::STATIC_SIZE.unwrap();
            for size in [8, 9, 20, 100] {
                assert_eq!(IndexSpan::resolve(index, size).len, n);
            }
        }
        check(static_first::<3>());
        check(static_last::<3>());
        check(static_range::<1, 6>());
        check(static_sized_range::<2>(5));
    }
}
