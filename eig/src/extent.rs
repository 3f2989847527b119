//! Compile-time extents of views built from range descriptors.
//!
//! Per axis the extent of a view is decided in this order:
//! 1. a bare integer collapses the axis to exactly one element;
//! 2. `all` keeps the enclosing container's own extent (which may be dynamic);
//! 3. a descriptor with a static length uses that length;
//! 4. anything else is dynamic.
//!
//! [`AxisExtent`] encodes this as a nalgebra dimension type, [`block_extent`] as a
//! `const fn` over `Option<usize>` (with `None` meaning dynamic).

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use nalgebra::{Const, Dim, DimAdd, DimDiff, DimSub, DimSum, Dyn, U1};

use crate::range::{
    All, AxisIndex, First, Inclusive, Last, StaticFirst, StaticInclusive, StaticLast,
    StaticSized,
};

/// Storage order of a dense container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    ColumnMajor,
    RowMajor,
}

/// Dimension type of the view obtained by indexing an axis of dimension `D` with `Self`.
pub trait AxisExtent<D: Dim>: AxisIndex {
    type Extent: Dim;
}

impl<D: Dim> AxisExtent<D> for usize {
    type Extent = U1;
}

impl<D: Dim> AxisExtent<D> for All {
    type Extent = D;
}

impl<D: Dim> AxisExtent<D> for RangeFull {
    type Extent = D;
}

macro_rules! impl_dynamic_extent {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<D: Dim> AxisExtent<D> for $ty {
                type Extent = Dyn;
            }
        )*
    };
}

impl_dynamic_extent!(
    First,
    Last,
    Inclusive,
    Range<usize>,
    RangeInclusive<usize>,
    RangeTo<usize>,
    RangeFrom<usize>,
);

impl<D: Dim, const N: usize> AxisExtent<D> for StaticFirst<N> {
    type Extent = Const<N>;
}

impl<D: Dim, const N: usize> AxisExtent<D> for StaticLast<N> {
    type Extent = Const<N>;
}

impl<D: Dim, const N: usize> AxisExtent<D> for StaticSized<N> {
    type Extent = Const<N>;
}

/// `FINISH + 1 - START`, computed on nalgebra's type-level dimensions.
impl<D: Dim, const START: usize, const FINISH: usize> AxisExtent<D>
    for StaticInclusive<START, FINISH>
where
    Const<FINISH>: DimAdd<U1>,
    DimSum<Const<FINISH>, U1>: DimSub<Const<START>>,
{
    type Extent = DimDiff<DimSum<Const<FINISH>, U1>, Const<START>>;
}

/// Extent of the view along an axis indexed by `T`, given the container's own
/// compile-time extent along that axis. `None` means dynamic.
pub const fn block_extent<T: AxisIndex>(container_extent: Option<usize>) -> Option<usize> {
    if !T::IS_RANGE {
        Some(1)
    } else if T::IS_ALL {
        container_extent
    } else {
        T::STATIC_SIZE
    }
}

/// A block is an inner panel (its storage-contiguous axis is taken whole) iff all rows
/// are selected from a column-major container, or all columns from a row-major one.
pub const fn is_inner_contiguous(row_is_all: bool, col_is_all: bool, layout: Layout) -> bool {
    (row_is_all && matches!(layout, Layout::ColumnMajor))
        || (col_is_all && matches!(layout, Layout::RowMajor))
}

pub const fn is_block_inner_panel<RowRange: AxisIndex, ColRange: AxisIndex>(
    layout: Layout,
) -> bool {
    is_inner_contiguous(RowRange::IS_ALL, ColRange::IS_ALL, layout)
}
