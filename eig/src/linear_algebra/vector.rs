use std::ops::{Mul, Sub};

use nalgebra::{self, ArrayStorage, Const, Dim, Dyn, RawStorage, VecStorage, U1};
use num_traits::{Float, One, Zero};

use crate::linear_algebra::generic_matrix::GenericMatrix;
use crate::linear_algebra::Scalar;

pub type GenericVector<T, R, S> = GenericMatrix<T, R, Const<1>, S>;
pub type Vector<T> = GenericVector<T, Dyn, VecStorage<T, Dyn, Const<1>>>;
pub type SVector<T, const N: usize> = GenericVector<T, Const<N>, ArrayStorage<T, N, 1>>;

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(v: Vec<T>) -> Self {
        nalgebra::DVector::from(v).into()
    }
}

impl<T: Scalar> Vector<T> {
    pub fn from_fn(n: usize, mut f: impl FnMut(usize) -> T) -> Self {
        nalgebra::DVector::from_fn(n, |i, _| f(i)).into()
    }

    pub fn from_vec(v: Vec<T>) -> Self {
        nalgebra::DVector::from_vec(v).into()
    }

    pub fn from_element(n: usize, element: T) -> Self {
        nalgebra::DVector::from_element(n, element).into()
    }

    pub fn from_slice(data: &[T]) -> Self {
        nalgebra::DVector::from_column_slice(data).into()
    }
}

impl<T: Scalar + Zero> Vector<T> {
    pub fn zeros(n: usize) -> Self {
        nalgebra::DVector::zeros(n).into()
    }

    /// A zero-filled vector of length `len`.
    pub fn from_size(len: usize) -> Self {
        Self::zeros(len)
    }

    pub fn ones(n: usize) -> Self
    where
        T: One,
    {
        Self::from_element(n, T::one())
    }
}

impl<T: Scalar + Float> Vector<T> {
    /// `n` evenly spaced values from `low` to `high`, both included.
    pub fn linspace(n: usize, low: T, high: T) -> Self {
        match n {
            0 => Self::from_vec(vec![]),
            1 => Self::from_element(1, high),
            _ => {
                let step = (high - low) / T::from(n - 1).unwrap_or_else(T::nan);
                Self::from_fn(n, |i| {
                    if i + 1 == n {
                        high
                    } else {
                        low + step * T::from(i).unwrap_or_else(T::nan)
                    }
                })
            }
        }
    }
}

impl<T: Scalar, const N: usize> SVector<T, N> {
    /// Fixed-size vector from exactly `N` values.
    pub fn from_list(values: [T; N]) -> Self {
        nalgebra::SVector::<T, N>::from(values).into()
    }
}

impl<T: Scalar + Zero + One, const N: usize> SVector<T, N> {
    /// The `i`-th canonical basis vector.
    ///
    /// # Panics
    /// If `i >= N`.
    pub fn unit(i: usize) -> Self {
        assert!(i < N, "basis index {i} out of range for dimension {N}");
        nalgebra::SVector::<T, N>::from_fn(|k, _| if k == i { T::one() } else { T::zero() })
            .into()
    }

    pub fn unit_x() -> Self {
        Self::unit(0)
    }

    pub fn unit_y() -> Self {
        Self::unit(1)
    }

    pub fn unit_z() -> Self {
        Self::unit(2)
    }
}

impl<T: Scalar, S: RawStorage<T, Const<3>, U1>> GenericVector<T, Const<3>, S> {
    /// Cross product of two 3-vectors.
    pub fn cross<S2: RawStorage<T, Const<3>, U1>>(
        &self,
        rhs: &GenericVector<T, Const<3>, S2>,
    ) -> SVector<T, 3>
    where
        T: Mul<Output = T> + Sub<Output = T>,
    {
        let (a, b) = (&self.0, &rhs.0);
        let c = |i: usize, j: usize| a[i].clone() * b[j].clone() - a[j].clone() * b[i].clone();
        SVector::from_list([c(1, 2), c(2, 0), c(0, 1)])
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for SVector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_list(values)
    }
}

pub type GenericRowVector<T, C, S> = GenericMatrix<T, Const<1>, C, S>;
pub type RowVector<T> = GenericRowVector<T, Dyn, VecStorage<T, Const<1>, Dyn>>;

impl<T: Scalar> From<Vec<T>> for RowVector<T> {
    fn from(v: Vec<T>) -> Self {
        nalgebra::RowDVector::from(v).into()
    }
}

impl<T: Scalar + Zero> RowVector<T> {
    pub fn from_size(len: usize) -> Self {
        nalgebra::RowDVector::zeros(len).into()
    }
}

impl<T: Scalar, R: Dim, S: nalgebra::RawStorage<T, R, Const<1>>> GenericVector<T, R, S> {
    /// Entry `i` of a column vector.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.0.get(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let v = Vector::<i64>::from(vec![1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v, Vector::from_slice(&[1, 2, 3]));
        assert_eq!(v, Vector::from_fn(3, |i| i as i64 + 1));
        assert_eq!(Vector::<i64>::from_size(4), Vector::zeros(4));
        assert_eq!(Vector::<i64>::ones(3), Vector::from(vec![1, 1, 1]));
        assert_eq!(Vector::from_element(2, 7), Vector::from_vec(vec![7, 7]));
        assert_eq!(v.get(2), Some(&3));
        assert_eq!(v.get(3), None);

        let r = RowVector::<i64>::from(vec![1, 2, 3]);
        assert_eq!(r.shape(), (1, 3));
        assert_eq!(RowVector::<i64>::from_size(2).shape(), (1, 2));
    }

    #[test]
    fn test_static_list() {
        let v = SVector::<i64, 5>::from_list([1, 2, 3, 4, 5]);
        assert_eq!(v.sum(), 15);
        assert_eq!(SVector::<i64, 5>::static_size(), Some(5));
        let w: SVector<i64, 1> = [9].into();
        assert_eq!(w[0], 9);
    }

    #[test]
    fn test_linspace() {
        let v = Vector::<f64>::linspace(5, 0.0, 1.0);
        assert_eq!(v, Vector::from(vec![0.0, 0.25, 0.5, 0.75, 1.0]));
        assert_eq!(Vector::<f64>::linspace(1, 0.0, 1.0), Vector::from(vec![1.0]));
        assert!(Vector::<f64>::linspace(0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(SVector::<i64, 3>::unit_x(), SVector::from_list([1, 0, 0]));
        assert_eq!(SVector::<i64, 3>::unit_y(), SVector::from_list([0, 1, 0]));
        assert_eq!(SVector::<i64, 3>::unit_z(), SVector::from_list([0, 0, 1]));
        assert_eq!(
            SVector::<f64, 4>::unit(3),
            GenericMatrix::from(nalgebra::SVector::<f64, 4>::ith(3, 1.0))
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_unit_out_of_range() {
        let _ = SVector::<i64, 2>::unit_z();
    }

    #[test]
    fn test_cross() {
        let u = SVector::<f64, 3>::from_list([1.0, 2.0, 3.0]);
        let v = SVector::<f64, 3>::from_list([4.0, 5.0, 6.0]);
        assert_eq!(u.cross(&v), GenericMatrix::from(u.0.cross(&v.0)));
        assert_eq!(u.cross(&v), SVector::from_list([-3.0, 6.0, -3.0]));
        assert_eq!(SVector::<i64, 3>::unit_x().cross(&SVector::unit_y()), SVector::unit_z());
    }
}
