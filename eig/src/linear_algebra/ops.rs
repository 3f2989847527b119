//! Free-function forms of the common matrix operations. Each forwards to the
//! method of the same name on [`GenericMatrix`].

use std::ops::{Add, Div, Mul, Sub};

use nalgebra::allocator::Allocator;
use nalgebra::{
    ComplexField, Const, DefaultAllocator, Dim, Owned, RawStorage, RealField, Scalar,
    SimdComplexField, Storage, U1,
};
use num_traits::{Float, One, Signed, Zero};

use crate::linear_algebra::generic_matrix::GenericMatrix;
use crate::linear_algebra::vector::{GenericVector, SVector};

type OwnedMatrix<T, R, C> = GenericMatrix<T, R, C, Owned<T, R, C>>;

pub fn is_approx<T, R, C, S1, S2>(
    lhs: &GenericMatrix<T, R, C, S1>,
    rhs: &GenericMatrix<T, R, C, S2>,
) -> bool
where
    T: Scalar + RealField,
    R: Dim,
    C: Dim,
    S1: Storage<T, R, C>,
    S2: Storage<T, R, C>,
{
    lhs.is_approx(rhs)
}

pub fn is_constant<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> bool {
    m.is_constant()
}

pub fn is_ones<T: Scalar + One + Mul<Output = T>, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> bool {
    m.is_ones()
}

pub fn is_zero<T: Scalar + Zero + Add<Output = T>, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> bool {
    m.is_zero()
}

pub fn prod<T: Scalar + One + Mul<Output = T>, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> T {
    m.prod()
}

pub fn sum<T: Scalar + Zero + Add<Output = T>, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> T {
    m.sum()
}

pub fn reverse<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> OwnedMatrix<T, R, C>
where
    DefaultAllocator: Allocator<R, C>,
{
    m.reverse()
}

pub fn transpose<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> OwnedMatrix<T, C, R>
where
    DefaultAllocator: Allocator<C, R>,
{
    m.transpose()
}

pub fn cwise_abs<T: Scalar + Signed, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> OwnedMatrix<T, R, C>
where
    DefaultAllocator: Allocator<R, C>,
{
    m.cwise_abs()
}

pub fn cwise_squared_abs<T: Scalar + Signed, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> OwnedMatrix<T, R, C>
where
    DefaultAllocator: Allocator<R, C>,
{
    m.cwise_squared_abs()
}

pub fn cwise_sqrt<T: Scalar + Float, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> OwnedMatrix<T, R, C>
where
    DefaultAllocator: Allocator<R, C>,
{
    m.cwise_sqrt()
}

pub fn cwise_inverse<T, R, C, S>(m: &GenericMatrix<T, R, C, S>) -> OwnedMatrix<T, R, C>
where
    T: Scalar + One + Div<Output = T>,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    m.cwise_inverse()
}

pub fn cwise_eq<T, R, C, S1, S2>(
    lhs: &GenericMatrix<T, R, C, S1>,
    rhs: &GenericMatrix<T, R, C, S2>,
) -> OwnedMatrix<bool, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S1: RawStorage<T, R, C>,
    S2: RawStorage<T, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    lhs.cwise_eq(rhs)
}

pub fn cwise_neq<T, R, C, S1, S2>(
    lhs: &GenericMatrix<T, R, C, S1>,
    rhs: &GenericMatrix<T, R, C, S2>,
) -> OwnedMatrix<bool, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S1: RawStorage<T, R, C>,
    S2: RawStorage<T, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    lhs.cwise_neq(rhs)
}

pub fn cwise_min<T, R, C, S1, S2>(
    lhs: &GenericMatrix<T, R, C, S1>,
    rhs: &GenericMatrix<T, R, C, S2>,
) -> OwnedMatrix<T, R, C>
where
    T: Scalar + PartialOrd,
    R: Dim,
    C: Dim,
    S1: RawStorage<T, R, C>,
    S2: RawStorage<T, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    lhs.cwise_min(rhs)
}

pub fn cwise_max<T, R, C, S1, S2>(
    lhs: &GenericMatrix<T, R, C, S1>,
    rhs: &GenericMatrix<T, R, C, S2>,
) -> OwnedMatrix<T, R, C>
where
    T: Scalar + PartialOrd,
    R: Dim,
    C: Dim,
    S1: RawStorage<T, R, C>,
    S2: RawStorage<T, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    lhs.cwise_max(rhs)
}

pub fn cwise_product<T, R, C, S1, S2>(
    lhs: &GenericMatrix<T, R, C, S1>,
    rhs: &GenericMatrix<T, R, C, S2>,
) -> OwnedMatrix<T, R, C>
where
    T: Scalar + Mul<Output = T>,
    R: Dim,
    C: Dim,
    S1: RawStorage<T, R, C>,
    S2: RawStorage<T, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    lhs.cwise_product(rhs)
}

pub fn cwise_quotient<T, R, C, S1, S2>(
    lhs: &GenericMatrix<T, R, C, S1>,
    rhs: &GenericMatrix<T, R, C, S2>,
) -> OwnedMatrix<T, R, C>
where
    T: Scalar + Div<Output = T>,
    R: Dim,
    C: Dim,
    S1: RawStorage<T, R, C>,
    S2: RawStorage<T, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    lhs.cwise_quotient(rhs)
}

pub fn normalized<T: Scalar + SimdComplexField, R: Dim, C: Dim, S: Storage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> OwnedMatrix<T, R, C>
where
    DefaultAllocator: Allocator<R, C>,
{
    m.normalized()
}

/// Euclidean (Frobenius) norm.
pub fn norm<T: Scalar + SimdComplexField, R: Dim, C: Dim, S: Storage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> T::SimdRealField {
    m.norm()
}

pub fn inverse<T: Scalar + ComplexField, D: Dim, S: Storage<T, D, D>>(
    m: &GenericMatrix<T, D, D, S>,
) -> Option<OwnedMatrix<T, D, D>>
where
    DefaultAllocator: Allocator<D, D>,
{
    m.inverse()
}

pub fn conjugate<T: Scalar + SimdComplexField, R: Dim, C: Dim, S: Storage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> OwnedMatrix<T, R, C>
where
    DefaultAllocator: Allocator<R, C>,
{
    m.conjugate()
}

pub fn adjoint<T: Scalar + SimdComplexField, R: Dim, C: Dim, S: Storage<T, R, C>>(
    m: &GenericMatrix<T, R, C, S>,
) -> OwnedMatrix<T, C, R>
where
    DefaultAllocator: Allocator<C, R>,
{
    m.adjoint()
}

pub fn dot<T, R1, C1, S1, R2, C2, S2>(
    lhs: &GenericMatrix<T, R1, C1, S1>,
    rhs: &GenericMatrix<T, R2, C2, S2>,
) -> T
where
    T: Scalar + Zero + Add<Output = T> + Mul<Output = T>,
    R1: Dim,
    C1: Dim,
    S1: RawStorage<T, R1, C1>,
    R2: Dim,
    C2: Dim,
    S2: RawStorage<T, R2, C2>,
{
    lhs.dot(rhs)
}

pub fn cross<T, S1, S2>(
    lhs: &GenericVector<T, Const<3>, S1>,
    rhs: &GenericVector<T, Const<3>, S2>,
) -> SVector<T, 3>
where
    T: Scalar + Mul<Output = T> + Sub<Output = T>,
    S1: RawStorage<T, Const<3>, U1>,
    S2: RawStorage<T, Const<3>, U1>,
{
    lhs.cross(rhs)
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_algebra::{Matrix, Vector};
    use crate::range::{all, first};

    #[test]
    #[rustfmt::skip]
    fn test_transpose() {
        let A = Matrix::<i64>::from(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
        ]);

        let At = Matrix::<i64>::from(vec![
            vec![1, 4],
            vec![2, 5],
            vec![3, 6],
        ]);

        assert_eq!(transpose(&A), At);
        assert_eq!(transpose(&transpose(&A)), A);
        assert_eq!(reverse(&A), A.reverse());
    }

    #[test]
    fn test_products_and_reductions() {
        let u = Vector::<i64>::from(vec![1, 2, 3]);
        let v = Vector::<i64>::from(vec![4, 5, 6]);
        assert_eq!(dot(&u, &v), 32);
        assert_eq!(cwise_product(&u, &v), Vector::from(vec![4, 10, 18]));
        assert_eq!(sum(&u), 6);
        assert_eq!(prod(&v), 120);

        let A = Matrix::<i64>::from_fn(3, 3, |i, j| (i * 3 + j) as i64);
        assert_eq!(sum(&A.range_view(first(2), all())), 15);
        assert_eq!(norm(&Vector::<f64>::from(vec![3.0, 4.0])), 5.0);
    }

    #[test]
    fn test_predicates() {
        assert!(is_zero(&Matrix::<i64>::zeros(2, 2)));
        assert!(is_ones(&Matrix::<i64>::ones(2, 2)));
        assert!(is_constant(&Matrix::<i64>::constant(2, 2, 5)));
        assert!(!is_constant(&Vector::<i64>::from(vec![1, 2])));
        let a = Vector::<f64>::from(vec![0.1 + 0.2]);
        assert!(is_approx(&a, &Vector::from(vec![0.3])));
    }

    #[test]
    fn test_elementwise() {
        let a = Vector::<i64>::from(vec![-3, 2, 5]);
        let b = Vector::<i64>::from(vec![1, 2, 3]);
        assert_eq!(cwise_abs(&a), Vector::from(vec![3, 2, 5]));
        assert_eq!(cwise_squared_abs(&a), Vector::from(vec![9, 4, 25]));
        assert_eq!(cwise_min(&a, &b), a.cwise_min(&b));
        assert_eq!(cwise_max(&a, &b), Vector::from(vec![1, 2, 5]));
        assert_eq!(cwise_quotient(&a, &b), Vector::from(vec![-3, 1, 1]));
        assert_eq!(cwise_eq(&a, &b), Vector::from(vec![false, true, false]));
        assert_eq!(cwise_neq(&a, &b), Vector::from(vec![true, false, true]));

        let x = Vector::<f64>::from(vec![4.0, 0.25]);
        assert_eq!(cwise_sqrt(&x), Vector::from(vec![2.0, 0.5]));
        assert_eq!(cwise_inverse(&x), Vector::from(vec![0.25, 4.0]));
    }

    #[test]
    fn test_linear_algebra_forms() {
        let v = Vector::<f64>::from(vec![0.0, 2.0]);
        assert_eq!(normalized(&v), Vector::from(vec![0.0, 1.0]));

        let A = Matrix::<f64>::from(vec![vec![1.0, 2.0], vec![0.0, 1.0]]);
        assert_eq!(
            inverse(&A),
            Some(Matrix::from(vec![vec![1.0, -2.0], vec![0.0, 1.0]]))
        );
        assert_eq!(adjoint(&A), transpose(&A));
        assert_eq!(conjugate(&A), A);

        let x = SVector::<i64, 3>::unit_x();
        let y = SVector::<i64, 3>::unit_y();
        assert_eq!(cross(&x, &y), SVector::unit_z());
        assert_eq!(cross(&y, &x), -SVector::<i64, 3>::unit_z());
    }
}
