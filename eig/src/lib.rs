//! Range-based indexing for dense matrices and vectors.
//!
//! A [`range`] descriptor selects a contiguous run of one axis. It resolves against
//! the extent of that axis to an [`IndexSpan`], and, through [`extent::AxisExtent`],
//! determines the dimension type of the view it produces: static descriptors yield
//! fixed-size views, [`all`] keeps the container's dimension, and bare `usize`
//! indices collapse the axis to one element.
//!
//! ```
//! use eig::{last, matrix, static_first, all};
//!
//! let m = matrix![1, 2, 3; 4, 5, 6; 7, 8, 9];
//! let block = m.range_view(static_first::<2>(), last(2));
//! assert_eq!(block.sum(), 2 + 3 + 5 + 6);
//! assert_eq!(m.range_view(all(), 0).sum(), 12);
//! ```

pub mod error;
pub mod extent;
pub mod index_span;
pub mod linear_algebra;
mod macros;
pub mod range;

pub use error::RangeError;
pub use extent::{block_extent, is_block_inner_panel, is_inner_contiguous, AxisExtent, Layout};
pub use index_span::IndexSpan;
pub use linear_algebra::{
    GenericMatrix, GenericRowVector, GenericVector, Matrix, RowVector, SMatrix, SVector, Vector,
};
pub use range::{
    all, first, has_static_size, is_all, is_range, last, range, static_first, static_last,
    static_range, static_size_or, static_sized_range, All, AxisIndex, First, Inclusive, Last,
    RangeDescriptor, StaticFirst, StaticInclusive, StaticLast, StaticSized,
};
