#![allow(non_snake_case)]

use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use delegate::delegate;
use derive_more::{Display, From, Index, IndexMut, Into};
use nalgebra::allocator::Allocator;
use nalgebra::base::storage::IsContiguous;
use nalgebra::{
    self, ComplexField, Const, DefaultAllocator, Dim, Owned, RawStorage, RawStorageMut,
    RealField, Scalar, SimdComplexField, SimdPartialOrd, Storage, ViewStorage,
};
use num_traits::{Float, One, Signed, Zero};
use rayon::prelude::*;

use crate::extent::Layout;
use crate::linear_algebra::vector::{GenericRowVector, GenericVector};

/// Newtype over `nalgebra::Matrix` exposing this crate's naming convention and
/// range-based indexing. Storage, arithmetic and views are nalgebra's.
#[derive(Clone, Copy, Debug, Display, From, Into, Index, IndexMut)]
pub struct GenericMatrix<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    pub(crate) nalgebra::Matrix<T, R, C, S>,
);

pub type RowViewStorage<'a, T, R, C, S> = ViewStorage<
    'a,
    T,
    Const<1>,
    C,
    <S as RawStorage<T, R, C>>::RStride,
    <S as RawStorage<T, R, C>>::CStride,
>;

pub type ColumnViewStorage<'a, T, R, C, S> = ViewStorage<
    'a,
    T,
    R,
    Const<1>,
    <S as RawStorage<T, R, C>>::RStride,
    <S as RawStorage<T, R, C>>::CStride,
>;

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> GenericMatrix<T, R, C, S> {
    /// nalgebra stores every dense matrix column by column.
    pub const LAYOUT: Layout = Layout::ColumnMajor;

    delegate! {
        to self.0 {
            pub fn nrows(&self) -> usize;
            pub fn ncols(&self) -> usize;
            pub fn shape(&self) -> (usize, usize);
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> impl Iterator<Item=&'_ T>;
        }
    }

    /// Number of rows if fixed at compile time.
    pub fn static_rows() -> Option<usize> {
        R::try_to_usize()
    }

    /// Number of columns if fixed at compile time.
    pub fn static_cols() -> Option<usize> {
        C::try_to_usize()
    }

    /// Number of entries if both dimensions are fixed at compile time.
    pub fn static_size() -> Option<usize> {
        Some(R::try_to_usize()? * C::try_to_usize()?)
    }

    /// True for column and row vectors with a compile-time unit dimension.
    pub fn is_static_1d() -> bool {
        R::try_to_usize() == Some(1) || C::try_to_usize() == Some(1)
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> GenericMatrix<T, R, C, S> {
    delegate! {
        to self.0 {
            #[into]
            pub fn map<O: Scalar, F: FnMut(T) -> O>(&self, f: F) -> GenericMatrix<O, R, C, Owned<O, R, C>>
            where DefaultAllocator: Allocator<R, C>;
        }
    }

    pub fn row(&self, i: usize) -> GenericRowVector<T, C, RowViewStorage<'_, T, R, C, S>> {
        self.0.row(i).into()
    }

    pub fn column(&self, i: usize) -> GenericVector<T, R, ColumnViewStorage<'_, T, R, C, S>> {
        self.0.column(i).into()
    }

    pub fn transpose(&self) -> GenericMatrix<T, C, R, Owned<T, C, R>>
    where
        DefaultAllocator: Allocator<C, R>,
    {
        self.0.transpose().into()
    }

    pub fn clone_owned(&self) -> GenericMatrix<T, R, C, Owned<T, R, C>>
    where
        S: Storage<T, R, C>,
        DefaultAllocator: Allocator<R, C>,
    {
        self.0.clone_owned().into()
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C> + IsContiguous> GenericMatrix<T, R, C, S> {
    /// All entries in column-major order.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> GenericMatrix<T, R, C, S> {
    pub fn row_iter(
        &self,
    ) -> impl Iterator<Item = GenericRowVector<T, C, RowViewStorage<'_, T, R, C, S>>> {
        self.0.row_iter().map(|r| r.into())
    }

    pub fn par_row_iter(
        &self,
    ) -> impl IndexedParallelIterator<Item = GenericRowVector<T, C, RowViewStorage<'_, T, R, C, S>>>
    where
        T: Send + Sync,
        S: Sync,
    {
        (0..self.nrows()).into_par_iter().map(move |i| self.row(i))
    }

    pub fn column_iter(
        &self,
    ) -> impl Iterator<Item = GenericVector<T, R, ColumnViewStorage<'_, T, R, C, S>>> {
        self.0.column_iter().map(|c| c.into())
    }

    pub fn par_column_iter(
        &self,
    ) -> impl ParallelIterator<Item = GenericVector<T, R, ColumnViewStorage<'_, T, R, C, S>>>
    where
        T: Send + Sync,
        S: Sync,
    {
        self.0.par_column_iter().map(GenericMatrix::from)
    }
}

// Aliases following the crate's naming convention. Where nalgebra has a direct
// counterpart the call is forwarded; otherwise it is expressed with `map`/`zip_map`.

impl<T: Scalar + SimdComplexField, R: Dim, C: Dim, S: Storage<T, R, C>> GenericMatrix<T, R, C, S> {
    delegate! {
        to self.0 {
            #[call(norm_squared)]
            pub fn squared_norm(&self) -> T::SimdRealField;
            pub fn norm(&self) -> T::SimdRealField;
            /// `(sum |x|^p)^(1/p)` over all entries.
            pub fn lp_norm(&self, p: i32) -> T::SimdRealField;
        }
    }

    delegate! {
        to self.0 {
            #[into]
            #[call(normalize)]
            pub fn normalized(&self) -> GenericMatrix<T, R, C, Owned<T, R, C>>
            where DefaultAllocator: Allocator<R, C>;
            #[into]
            pub fn conjugate(&self) -> GenericMatrix<T, R, C, Owned<T, R, C>>
            where DefaultAllocator: Allocator<R, C>;
            /// Conjugate transpose.
            #[into]
            pub fn adjoint(&self) -> GenericMatrix<T, C, R, Owned<T, C, R>>
            where DefaultAllocator: Allocator<C, R>;
        }
    }
}

impl<T: Scalar + RealField, R: Dim, C: Dim, S: Storage<T, R, C>> GenericMatrix<T, R, C, S> {
    /// Entrywise equality up to `T`'s default absolute and relative tolerances.
    pub fn is_approx<S2: Storage<T, R, C>>(&self, other: &GenericMatrix<T, R, C, S2>) -> bool {
        self.0
            .relative_eq(&other.0, T::default_epsilon(), T::default_max_relative())
    }
}

impl<T: Scalar + Float, R: Dim, C: Dim, S: RawStorage<T, R, C>> GenericMatrix<T, R, C, S> {
    pub fn has_nan(&self) -> bool {
        self.iter().any(|&x| x.is_nan())
    }

    pub fn all_finite(&self) -> bool {
        self.iter().all(|&x| x.is_finite())
    }
}

impl<T: Scalar + ComplexField, D: Dim, S: Storage<T, D, D>> GenericMatrix<T, D, D, S> {
    /// `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<GenericMatrix<T, D, D, Owned<T, D, D>>>
    where
        DefaultAllocator: Allocator<D, D>,
    {
        self.0.clone_owned().try_inverse().map(GenericMatrix::from)
    }
}

impl<T: Scalar + SimdPartialOrd + Zero, R: Dim, C: Dim, S: RawStorage<T, R, C>>
    GenericMatrix<T, R, C, S>
{
    delegate! {
        to self.0 {
            /// Smallest entry; zero for an empty matrix.
            #[call(min)]
            pub fn min_coeff(&self) -> T;
            /// Largest entry; zero for an empty matrix.
            #[call(max)]
            pub fn max_coeff(&self) -> T;
        }
    }
}

impl<T: Scalar + Zero + Add<Output = T>, R: Dim, C: Dim, S: RawStorage<T, R, C>>
    GenericMatrix<T, R, C, S>
{
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, x| acc + x.clone())
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|x| x.is_zero())
    }

    pub fn dot<R2: Dim, C2: Dim, S2: RawStorage<T, R2, C2>>(
        &self,
        rhs: &GenericMatrix<T, R2, C2, S2>,
    ) -> T
    where
        T: Mul<Output = T>,
    {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "dot product requires operands of the same shape"
        );
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
    }
}

impl<T: Scalar + One + Mul<Output = T>, R: Dim, C: Dim, S: RawStorage<T, R, C>>
    GenericMatrix<T, R, C, S>
{
    pub fn prod(&self) -> T {
        self.iter().fold(T::one(), |acc, x| acc * x.clone())
    }

    pub fn is_ones(&self) -> bool {
        self.iter().all(|x| *x == T::one())
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> GenericMatrix<T, R, C, S> {
    /// True when every entry equals the first one (vacuously for empty matrices).
    pub fn is_constant(&self) -> bool {
        let mut it = self.iter();
        match it.next() {
            Some(first) => it.all(|x| x == first),
            None => true,
        }
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> GenericMatrix<T, R, C, S>
where
    DefaultAllocator: Allocator<R, C>,
{
    fn zip_with<S2: RawStorage<T, R, C>>(
        &self,
        rhs: &GenericMatrix<T, R, C, S2>,
        f: impl FnMut(T, T) -> T,
    ) -> GenericMatrix<T, R, C, Owned<T, R, C>> {
        self.0.zip_map(&rhs.0, f).into()
    }

    pub fn cwise_product<S2: RawStorage<T, R, C>>(
        &self,
        rhs: &GenericMatrix<T, R, C, S2>,
    ) -> GenericMatrix<T, R, C, Owned<T, R, C>>
    where
        T: Mul<Output = T>,
    {
        self.zip_with(rhs, |a, b| a * b)
    }

    pub fn cwise_quotient<S2: RawStorage<T, R, C>>(
        &self,
        rhs: &GenericMatrix<T, R, C, S2>,
    ) -> GenericMatrix<T, R, C, Owned<T, R, C>>
    where
        T: Div<Output = T>,
    {
        self.zip_with(rhs, |a, b| a / b)
    }

    pub fn cwise_min<S2: RawStorage<T, R, C>>(
        &self,
        rhs: &GenericMatrix<T, R, C, S2>,
    ) -> GenericMatrix<T, R, C, Owned<T, R, C>>
    where
        T: PartialOrd,
    {
        self.zip_with(rhs, |a, b| if b < a { b } else { a })
    }

    pub fn cwise_max<S2: RawStorage<T, R, C>>(
        &self,
        rhs: &GenericMatrix<T, R, C, S2>,
    ) -> GenericMatrix<T, R, C, Owned<T, R, C>>
    where
        T: PartialOrd,
    {
        self.zip_with(rhs, |a, b| if b > a { b } else { a })
    }

    pub fn cwise_abs(&self) -> GenericMatrix<T, R, C, Owned<T, R, C>>
    where
        T: Signed,
    {
        self.map(|x| x.abs())
    }

    pub fn cwise_squared_abs(&self) -> GenericMatrix<T, R, C, Owned<T, R, C>>
    where
        T: Signed,
    {
        self.map(|x| {
            let a = x.abs();
            a.clone() * a
        })
    }

    pub fn cwise_sqrt(&self) -> GenericMatrix<T, R, C, Owned<T, R, C>>
    where
        T: Float,
    {
        self.map(|x| x.sqrt())
    }

    /// `1 / x` for every entry.
    pub fn cwise_inverse(&self) -> GenericMatrix<T, R, C, Owned<T, R, C>>
    where
        T: One + Div<Output = T>,
    {
        self.map(|x| T::one() / x)
    }

    pub fn cwise_eq<S2: RawStorage<T, R, C>>(
        &self,
        rhs: &GenericMatrix<T, R, C, S2>,
    ) -> GenericMatrix<bool, R, C, Owned<bool, R, C>> {
        self.0.zip_map(&rhs.0, |a, b| a == b).into()
    }

    pub fn cwise_neq<S2: RawStorage<T, R, C>>(
        &self,
        rhs: &GenericMatrix<T, R, C, S2>,
    ) -> GenericMatrix<bool, R, C, Owned<bool, R, C>> {
        self.0.zip_map(&rhs.0, |a, b| a != b).into()
    }

    /// Entries in reverse order along both axes.
    pub fn reverse(&self) -> GenericMatrix<T, R, C, Owned<T, R, C>> {
        let (nrows, ncols) = self.0.shape_generic();
        let (m, n) = (nrows.value(), ncols.value());
        nalgebra::OMatrix::<T, R, C>::from_fn_generic(nrows, ncols, |i, j| {
            self.0[(m - 1 - i, n - 1 - j)].clone()
        })
        .into()
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorageMut<T, R, C>> GenericMatrix<T, R, C, S> {
    delegate! {
        to self.0 {
            #[call(fill)]
            pub fn set_constant(&mut self, value: T);
        }
    }

    pub fn set_zero(&mut self)
    where
        T: Zero,
    {
        self.set_constant(T::zero())
    }

    pub fn set_ones(&mut self)
    where
        T: One,
    {
        self.set_constant(T::one())
    }

    pub fn reverse_in_place(&mut self) {
        let (m, n) = self.shape();
        let len = m * n;
        for k in 0..len / 2 {
            let l = len - 1 - k;
            self.0.swap((k % m, k / m), (l % m, l / m));
        }
    }
}

impl<T: Scalar, D: Dim, S: RawStorageMut<T, D, D>> GenericMatrix<T, D, D, S> {
    delegate! {
        to self.0 {
            /// Transpose a square matrix without allocating.
            #[call(transpose_mut)]
            pub fn transpose_in_place(&mut self);
        }
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> PartialEq for GenericMatrix<T, R, C, S>
where
    nalgebra::Matrix<T, R, C, S>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> Eq for GenericMatrix<T, R, C, S> where
    nalgebra::Matrix<T, R, C, S>: Eq
{
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> Hash for GenericMatrix<T, R, C, S>
where
    nalgebra::Matrix<T, R, C, S>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

/// Implement unary operation `GenericMatrix<T>` -> `GenericMatrix<TO>`
macro_rules! impl_unop {
    ($op:ident, $OpTrait:ident) => {
        impl<
                T: Scalar,
                R: Dim,
                C: Dim,
                S: RawStorage<T, R, C>,
                TO: Scalar,
                RO: Dim,
                CO: Dim,
                SO: RawStorage<TO, RO, CO>,
            > $OpTrait for GenericMatrix<T, R, C, S>
        where
            nalgebra::Matrix<T, R, C, S>: $OpTrait<Output = nalgebra::Matrix<TO, RO, CO, SO>>,
        {
            type Output = GenericMatrix<TO, RO, CO, SO>;

            fn $op(self) -> Self::Output {
                self.0.$op().into()
            }
        }
    };
}

/// Implement binary operation `GenericMatrix<T>` x `GenericMatrix<TRhs>` -> `GenericMatrix<TO>`
macro_rules! impl_binop_matrix {
    ($op:ident, $OpTrait:ident) => {
        impl<
                T: Scalar,
                R: Dim,
                C: Dim,
                S: RawStorage<T, R, C>,
                TRhs: Scalar,
                RRhs: Dim,
                CRhs: Dim,
                SRhs: RawStorage<TRhs, RRhs, CRhs>,
                TO: Scalar,
                RO: Dim,
                CO: Dim,
                SO: RawStorage<TO, RO, CO>,
            > $OpTrait<GenericMatrix<TRhs, RRhs, CRhs, SRhs>> for GenericMatrix<T, R, C, S>
        where
            nalgebra::Matrix<T, R, C, S>: $OpTrait<
                nalgebra::Matrix<TRhs, RRhs, CRhs, SRhs>,
                Output = nalgebra::Matrix<TO, RO, CO, SO>,
            >,
        {
            type Output = GenericMatrix<TO, RO, CO, SO>;

            fn $op(self, rhs: GenericMatrix<TRhs, RRhs, CRhs, SRhs>) -> Self::Output {
                self.0.$op(rhs.0).into()
            }
        }

        impl<
                'a,
                'b,
                T: Scalar,
                R: Dim,
                C: Dim,
                S: RawStorage<T, R, C>,
                TRhs: Scalar,
                RRhs: Dim,
                CRhs: Dim,
                SRhs: RawStorage<TRhs, RRhs, CRhs>,
                TO: Scalar,
                RO: Dim,
                CO: Dim,
                SO: RawStorage<TO, RO, CO>,
            > $OpTrait<&'b GenericMatrix<TRhs, RRhs, CRhs, SRhs>> for &'a GenericMatrix<T, R, C, S>
        where
            &'a nalgebra::Matrix<T, R, C, S>: $OpTrait<
                &'b nalgebra::Matrix<TRhs, RRhs, CRhs, SRhs>,
                Output = nalgebra::Matrix<TO, RO, CO, SO>,
            >,
        {
            type Output = GenericMatrix<TO, RO, CO, SO>;

            fn $op(self, rhs: &'b GenericMatrix<TRhs, RRhs, CRhs, SRhs>) -> Self::Output {
                self.0.$op(&rhs.0).into()
            }
        }
    };
}

/// Implement binary assignment operation `GenericMatrix<T>` x `GenericMatrix<TRhs>` -> `GenericMatrix<T>`
macro_rules! impl_binop_assign_matrix {
    ($op:ident, $OpTrait:ident) => {
        impl<
                T: Scalar,
                R: Dim,
                C: Dim,
                S: RawStorage<T, R, C>,
                TRhs: Scalar,
                RRhs: Dim,
                CRhs: Dim,
                SRhs: RawStorage<TRhs, RRhs, CRhs>,
            > $OpTrait<GenericMatrix<TRhs, RRhs, CRhs, SRhs>> for GenericMatrix<T, R, C, S>
        where
            nalgebra::Matrix<T, R, C, S>: $OpTrait<nalgebra::Matrix<TRhs, RRhs, CRhs, SRhs>>,
        {
            fn $op(&mut self, rhs: GenericMatrix<TRhs, RRhs, CRhs, SRhs>) {
                self.0.$op(rhs.0)
            }
        }
    };
}

impl_unop!(neg, Neg);
impl_binop_matrix!(add, Add);
impl_binop_assign_matrix!(add_assign, AddAssign);
impl_binop_matrix!(sub, Sub);
impl_binop_assign_matrix!(sub_assign, SubAssign);
impl_binop_matrix!(mul, Mul);

/// Implement `GenericMatrix<$t> op $t` and `$t op GenericMatrix<$t>` entrywise for a
/// primitive scalar, treating the scalar as a constant matrix of matching shape.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl<R: Dim, C: Dim, S: RawStorage<$t, R, C>> Add<$t> for GenericMatrix<$t, R, C, S>
        where
            DefaultAllocator: Allocator<R, C>,
        {
            type Output = GenericMatrix<$t, R, C, Owned<$t, R, C>>;

            fn add(self, rhs: $t) -> Self::Output {
                self.map(|x| x + rhs)
            }
        }

        impl<R: Dim, C: Dim, S: RawStorage<$t, R, C>> Add<GenericMatrix<$t, R, C, S>> for $t
        where
            DefaultAllocator: Allocator<R, C>,
        {
            type Output = GenericMatrix<$t, R, C, Owned<$t, R, C>>;

            fn add(self, rhs: GenericMatrix<$t, R, C, S>) -> Self::Output {
                rhs.map(|x| self + x)
            }
        }

        impl<R: Dim, C: Dim, S: RawStorage<$t, R, C>> Sub<$t> for GenericMatrix<$t, R, C, S>
        where
            DefaultAllocator: Allocator<R, C>,
        {
            type Output = GenericMatrix<$t, R, C, Owned<$t, R, C>>;

            fn sub(self, rhs: $t) -> Self::Output {
                self.map(|x| x - rhs)
            }
        }

        impl<R: Dim, C: Dim, S: RawStorage<$t, R, C>> Sub<GenericMatrix<$t, R, C, S>> for $t
        where
            DefaultAllocator: Allocator<R, C>,
        {
            type Output = GenericMatrix<$t, R, C, Owned<$t, R, C>>;

            fn sub(self, rhs: GenericMatrix<$t, R, C, S>) -> Self::Output {
                rhs.map(|x| self - x)
            }
        }

        impl<R: Dim, C: Dim, S: RawStorage<$t, R, C>> Mul<$t> for GenericMatrix<$t, R, C, S>
        where
            DefaultAllocator: Allocator<R, C>,
        {
            type Output = GenericMatrix<$t, R, C, Owned<$t, R, C>>;

            fn mul(self, rhs: $t) -> Self::Output {
                self.map(|x| x * rhs)
            }
        }

        impl<R: Dim, C: Dim, S: RawStorage<$t, R, C>> Mul<GenericMatrix<$t, R, C, S>> for $t
        where
            DefaultAllocator: Allocator<R, C>,
        {
            type Output = GenericMatrix<$t, R, C, Owned<$t, R, C>>;

            fn mul(self, rhs: GenericMatrix<$t, R, C, S>) -> Self::Output {
                rhs.map(|x| self * x)
            }
        }

        impl<R: Dim, C: Dim, S: RawStorageMut<$t, R, C>> MulAssign<$t> for GenericMatrix<$t, R, C, S> {
            fn mul_assign(&mut self, rhs: $t) {
                for x in self.0.iter_mut() {
                    *x = *x * rhs;
                }
            }
        }
    )*};
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> Sum for GenericMatrix<T, R, C, S>
where
    nalgebra::Matrix<T, R, C, S>: Sum,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.map(|m| m.0).sum::<nalgebra::Matrix<T, R, C, S>>().into()
    }
}

impl<'a, T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> IntoIterator
    for &'a GenericMatrix<T, R, C, S>
where
    &'a nalgebra::Matrix<T, R, C, S>: IntoIterator,
{
    type Item = <&'a nalgebra::Matrix<T, R, C, S> as IntoIterator>::Item;
    type IntoIter = <&'a nalgebra::Matrix<T, R, C, S> as IntoIterator>::IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
