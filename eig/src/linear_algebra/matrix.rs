#![allow(non_snake_case)]

use nalgebra::{self, ArrayStorage, Const, Dyn, VecStorage};
use num_traits::{One, Zero};

use crate::linear_algebra::generic_matrix::GenericMatrix;
use crate::linear_algebra::{RowVector, Scalar, Vector};

pub type Matrix<T> = GenericMatrix<T, Dyn, Dyn, VecStorage<T, Dyn, Dyn>>;
pub type SMatrix<T, const R: usize, const C: usize> =
    GenericMatrix<T, Const<R>, Const<C>, ArrayStorage<T, R, C>>;

impl<T: Scalar> Matrix<T> {
    /// `data` is read column by column.
    pub fn from_vec(m: usize, n: usize, data: Vec<T>) -> Self {
        nalgebra::DMatrix::from_vec(m, n, data).into()
    }

    /// `data` is read row by row.
    pub fn from_row_slice(m: usize, n: usize, data: &[T]) -> Self {
        nalgebra::DMatrix::from_row_slice(m, n, data).into()
    }

    pub fn from_fn(m: usize, n: usize, f: impl FnMut(usize, usize) -> T) -> Self {
        nalgebra::DMatrix::from_fn(m, n, f).into()
    }

    pub fn from_element(m: usize, n: usize, element: T) -> Self {
        nalgebra::DMatrix::from_element(m, n, element).into()
    }

    /// An `m x n` matrix with every entry equal to `value`.
    pub fn constant(m: usize, n: usize, value: T) -> Self {
        Self::from_element(m, n, value)
    }

    pub fn from_rows(rows: &[RowVector<T>]) -> Self {
        nalgebra::DMatrix::from_rows(
            rows.iter()
                .cloned()
                .map(|row| row.0)
                .collect::<Vec<_>>()
                .as_slice(),
        )
        .into()
    }

    pub fn from_columns(columns: &[Vector<T>]) -> Self {
        nalgebra::DMatrix::from_columns(
            columns
                .iter()
                .cloned()
                .map(|column| column.0)
                .collect::<Vec<_>>()
                .as_slice(),
        )
        .into()
    }
}

impl<T: Scalar + Zero> Matrix<T> {
    pub fn zeros(m: usize, n: usize) -> Self {
        nalgebra::DMatrix::zeros(m, n).into()
    }

    /// A zero-filled `rows x cols` matrix.
    pub fn from_size(rows: usize, cols: usize) -> Self {
        Self::zeros(rows, cols)
    }

    pub fn identity(m: usize, n: usize) -> Self
    where
        T: One,
    {
        nalgebra::DMatrix::identity(m, n).into()
    }

    pub fn ones(m: usize, n: usize) -> Self
    where
        T: One,
    {
        Self::from_element(m, n, T::one())
    }
}

/// Row-list construction. Every row must have the same length.
impl<T: Scalar> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        let m = rows.len();
        let n = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == n),
            "cannot convert rows: Vec<Vec<T>> to Matrix<T>, rows have different lengths"
        );
        let data = rows.into_iter().flatten().collect::<Vec<_>>();
        Self::from_row_slice(m, n, &data)
    }
}

impl<T: Scalar> IntoIterator for Matrix<T>
where
    nalgebra::DMatrix<T>: IntoIterator,
{
    type Item = <nalgebra::DMatrix<T> as IntoIterator>::Item;
    type IntoIter = <nalgebra::DMatrix<T> as IntoIterator>::IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Scalar, const R: usize, const C: usize> SMatrix<T, R, C> {
    pub fn from_fn(f: impl FnMut(usize, usize) -> T) -> Self {
        nalgebra::SMatrix::<T, R, C>::from_fn(f).into()
    }

    /// Fixed-size matrix from `R` rows of `C` values each.
    pub fn from_rows_array(rows: [[T; C]; R]) -> Self {
        Self::from_fn(|i, j| rows[i][j].clone())
    }

    pub fn constant(value: T) -> Self {
        nalgebra::SMatrix::<T, R, C>::from_element(value).into()
    }
}

impl<T: Scalar + Zero, const R: usize, const C: usize> SMatrix<T, R, C> {
    pub fn zeros() -> Self {
        nalgebra::SMatrix::<T, R, C>::zeros().into()
    }

    pub fn ones() -> Self
    where
        T: One,
    {
        Self::constant(T::one())
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for SMatrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows_array(rows)
    }
}
