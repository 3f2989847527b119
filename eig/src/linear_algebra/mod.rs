mod generic_matrix;
mod matrix;
pub mod ops;
mod vector;
mod view;

pub use nalgebra::Scalar;

pub use generic_matrix::{ColumnViewStorage, GenericMatrix, RowViewStorage};
pub use vector::{GenericRowVector, GenericVector};
pub use view::{PanelView, RangeView, RangeViewMut};

pub type Vector<T> = vector::Vector<T>;
pub type RowVector<T> = vector::RowVector<T>;
pub type SVector<T, const N: usize> = vector::SVector<T, N>;
pub type Matrix<T> = matrix::Matrix<T>;
pub type SMatrix<T, const R: usize, const C: usize> = matrix::SMatrix<T, R, C>;
