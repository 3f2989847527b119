use derive_more::{Display, From, Into};

use crate::error::RangeError;
use crate::range::AxisIndex;

/// A resolved `(start, len)` sub-range of one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, From, Into)]
#[display("({start}, {len})")]
pub struct IndexSpan {
    pub start: usize,
    pub len: usize,
}

impl IndexSpan {
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Resolve `index` against an axis of extent `size`.
    ///
    /// Pure and infallible: out-of-range results are passed through unchanged, and
    /// only [`IndexSpan::check`] (or [`IndexSpan::try_resolve`]) reports them.
    #[inline]
    pub fn resolve<A: AxisIndex>(index: A, size: usize) -> Self {
        index.to_index_span(size)
    }

    /// Resolve `index` and verify that the span fits in `size`.
    pub fn try_resolve<A: AxisIndex>(index: A, size: usize) -> Result<Self, RangeError> {
        let span = Self::resolve(index, size);
        span.check(size)?;
        Ok(span)
    }

    /// One past the last index, or `None` if that overflows.
    #[inline]
    pub const fn end(&self) -> Option<usize> {
        self.start.checked_add(self.len)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `Ok` iff `start + len <= size`.
    pub fn check(&self, size: usize) -> Result<(), RangeError> {
        match self.end() {
            Some(end) if end <= size => Ok(()),
            _ => Err(RangeError::OutOfRange { span: *self, size }),
        }
    }

    /// The indices covered by this span.
    ///
    /// # Panics
    /// If `start + len` overflows.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{all, first, last, range, static_first, static_sized_range};

    #[test]
    fn test_try_resolve_valid_matches_resolve() {
        for size in [0usize, 1, 5, 10] {
            let spans = [
                IndexSpan::resolve(all(), size),
                IndexSpan::resolve(first(size), size),
                IndexSpan::resolve(last(size / 2), size),
            ];
            for span in spans {
                assert_eq!(span.check(size), Ok(()));
            }
            assert_eq!(
                IndexSpan::try_resolve(last(size / 2), size),
                Ok(IndexSpan::resolve(last(size / 2), size))
            );
        }
        assert_eq!(
            IndexSpan::try_resolve(range(2, 5), 10),
            Ok(IndexSpan::new(2, 4))
        );
        assert_eq!(
            IndexSpan::try_resolve(static_sized_range::<3>(7), 10),
            Ok(IndexSpan::new(7, 3))
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            IndexSpan::try_resolve(first(11), 10),
            Err(RangeError::OutOfRange {
                span: IndexSpan::new(0, 11),
                size: 10
            })
        );
        assert!(IndexSpan::try_resolve(static_first::<4>(), 3).is_err());
        assert!(IndexSpan::try_resolve(static_sized_range::<3>(8), 10).is_err());
        assert!(IndexSpan::try_resolve(10usize, 10).is_err());
        assert!(IndexSpan::new(usize::MAX, 2).check(usize::MAX).is_err());
    }

    #[test]
    fn test_display_and_conversions() {
        let span = IndexSpan::from((2, 4));
        assert_eq!(span.to_string(), "(2, 4)");
        assert_eq!(<(usize, usize)>::from(span), (2, 4));
        assert_eq!(span.indices(), 2..6);
        assert!(!span.is_empty());
        assert!(IndexSpan::resolve(range(3, 2), 5).is_empty());
    }
}
