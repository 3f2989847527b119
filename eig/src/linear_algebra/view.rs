//! Range-indexed views into [`GenericMatrix`].
//!
//! Every axis takes any [`AxisIndex`]; the dimension type of the resulting view is
//! [`AxisExtent::Extent`], so static descriptors give fixed-size views and `all`
//! keeps the container's own dimension.

use log::debug;
use nalgebra::base::storage::IsContiguous;
use nalgebra::{Dim, RawStorage, RawStorageMut, Scalar, ViewStorage, ViewStorageMut, U1};

use crate::error::RangeError;
use crate::extent::{is_block_inner_panel, AxisExtent};
use crate::index_span::IndexSpan;
use crate::linear_algebra::generic_matrix::GenericMatrix;
use crate::linear_algebra::vector::{GenericRowVector, GenericVector};
use crate::range::{all, AxisIndex, RangeDescriptor};

pub type RangeView<'a, T, R, C, S, RowRange, ColRange> = GenericMatrix<
    T,
    <RowRange as AxisExtent<R>>::Extent,
    <ColRange as AxisExtent<C>>::Extent,
    ViewStorage<
        'a,
        T,
        <RowRange as AxisExtent<R>>::Extent,
        <ColRange as AxisExtent<C>>::Extent,
        <S as RawStorage<T, R, C>>::RStride,
        <S as RawStorage<T, R, C>>::CStride,
    >,
>;

pub type RangeViewMut<'a, T, R, C, S, RowRange, ColRange> = GenericMatrix<
    T,
    <RowRange as AxisExtent<R>>::Extent,
    <ColRange as AxisExtent<C>>::Extent,
    ViewStorageMut<
        'a,
        T,
        <RowRange as AxisExtent<R>>::Extent,
        <ColRange as AxisExtent<C>>::Extent,
        <S as RawStorage<T, R, C>>::RStride,
        <S as RawStorage<T, R, C>>::CStride,
    >,
>;

/// Column panel of a contiguous column-major matrix: all rows of a run of columns.
pub type PanelView<'a, T, R, C, ColRange> = GenericMatrix<
    T,
    R,
    <ColRange as AxisExtent<C>>::Extent,
    ViewStorage<'a, T, R, <ColRange as AxisExtent<C>>::Extent, U1, R>,
>;

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> GenericMatrix<T, R, C, S> {
    fn view_from_spans<RV: Dim, CV: Dim>(
        &self,
        rows: IndexSpan,
        cols: IndexSpan,
    ) -> GenericMatrix<T, RV, CV, ViewStorage<'_, T, RV, CV, S::RStride, S::CStride>> {
        self.0
            .generic_view(
                (rows.start, cols.start),
                (RV::from_usize(rows.len), CV::from_usize(cols.len)),
            )
            .into()
    }

    /// View of the block selected by `rows` and `cols`.
    ///
    /// Panics if the block does not fit in the matrix; see [`Self::try_range_view`].
    pub fn range_view<RowRange, ColRange>(
        &self,
        rows: RowRange,
        cols: ColRange,
    ) -> RangeView<'_, T, R, C, S, RowRange, ColRange>
    where
        RowRange: AxisExtent<R>,
        ColRange: AxisExtent<C>,
    {
        let r = IndexSpan::resolve(rows, self.nrows());
        let c = IndexSpan::resolve(cols, self.ncols());
        self.view_from_spans(r, c)
    }

    pub fn try_range_view<RowRange, ColRange>(
        &self,
        rows: RowRange,
        cols: ColRange,
    ) -> Result<RangeView<'_, T, R, C, S, RowRange, ColRange>, RangeError>
    where
        RowRange: AxisExtent<R>,
        ColRange: AxisExtent<C>,
    {
        let spans = IndexSpan::try_resolve(rows, self.nrows())
            .and_then(|r| Ok((r, IndexSpan::try_resolve(cols, self.ncols())?)));
        match spans {
            Ok((r, c)) => Ok(self.view_from_spans(r, c)),
            Err(e) => {
                debug!("rejected view of {}x{} matrix: {e}", self.nrows(), self.ncols());
                Err(e)
            }
        }
    }

    /// The column panel `(all, cols)` built directly on the backing slice.
    pub fn panel_view<ColRange: AxisExtent<C>>(
        &self,
        cols: ColRange,
    ) -> PanelView<'_, T, R, C, ColRange>
    where
        S: IsContiguous,
    {
        let (nrows, _) = self.0.shape_generic();
        let c = IndexSpan::resolve(cols, self.ncols());
        let data = &self.as_slice()[c.start * nrows.value()..];
        nalgebra::MatrixView::<T, R, ColRange::Extent, U1, R>::from_slice_with_strides_generic(
            data,
            nrows,
            ColRange::Extent::from_usize(c.len),
            U1,
            nrows,
        )
        .into()
    }

    /// The entries of the block as one slice, if the block is an inner panel of this
    /// matrix's layout and lies inside it.
    pub fn panel_slice<RowRange: AxisIndex, ColRange: AxisIndex>(
        &self,
        _rows: RowRange,
        cols: ColRange,
    ) -> Option<&[T]>
    where
        S: IsContiguous,
    {
        if !is_block_inner_panel::<RowRange, ColRange>(Self::LAYOUT) {
            return None;
        }
        let nrows = self.nrows();
        let c = IndexSpan::try_resolve(cols, self.ncols()).ok()?;
        let start = c.start.checked_mul(nrows)?;
        let end = c.end()?.checked_mul(nrows)?;
        self.as_slice().get(start..end)
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorageMut<T, R, C>> GenericMatrix<T, R, C, S> {
    pub fn range_view_mut<RowRange, ColRange>(
        &mut self,
        rows: RowRange,
        cols: ColRange,
    ) -> RangeViewMut<'_, T, R, C, S, RowRange, ColRange>
    where
        RowRange: AxisExtent<R>,
        ColRange: AxisExtent<C>,
    {
        let r = IndexSpan::resolve(rows, self.nrows());
        let c = IndexSpan::resolve(cols, self.ncols());
        self.0
            .generic_view_mut(
                (r.start, c.start),
                (
                    RowRange::Extent::from_usize(r.len),
                    ColRange::Extent::from_usize(c.len),
                ),
            )
            .into()
    }
}

impl<T: Scalar, R: Dim, S: RawStorage<T, R, U1>> GenericVector<T, R, S> {
    pub fn segment<Rg: RangeDescriptor + AxisExtent<R>>(
        &self,
        range: Rg,
    ) -> GenericVector<T, Rg::Extent, ViewStorage<'_, T, Rg::Extent, U1, S::RStride, S::CStride>>
    {
        self.range_view(range, all())
    }
}

impl<T: Scalar, R: Dim, S: RawStorageMut<T, R, U1>> GenericVector<T, R, S> {
    pub fn segment_mut<Rg: RangeDescriptor + AxisExtent<R>>(
        &mut self,
        range: Rg,
    ) -> GenericVector<T, Rg::Extent, ViewStorageMut<'_, T, Rg::Extent, U1, S::RStride, S::CStride>>
    {
        self.range_view_mut(range, all())
    }
}

impl<T: Scalar, C: Dim, S: RawStorage<T, U1, C>> GenericRowVector<T, C, S> {
    pub fn row_segment<Rg: RangeDescriptor + AxisExtent<C>>(
        &self,
        range: Rg,
    ) -> GenericRowVector<T, Rg::Extent, ViewStorage<'_, T, U1, Rg::Extent, S::RStride, S::CStride>>
    {
        self.range_view(all(), range)
    }
}
