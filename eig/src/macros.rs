/// Dynamic column vector from a list of entries: `vector![1, 2, 3]`.
#[macro_export]
macro_rules! vector {
    ($($x:expr),* $(,)?) => {
        $crate::Vector::from(vec![$($x),*])
    };
}

/// Dynamic row vector from a list of entries: `row_vector![1, 2, 3]`.
#[macro_export]
macro_rules! row_vector {
    ($($x:expr),* $(,)?) => {
        $crate::RowVector::from(vec![$($x),*])
    };
}

/// Dynamic matrix from rows separated by `;`: `matrix![1, 2; 3, 4]`.
///
/// Panics if the rows have different lengths.
#[macro_export]
macro_rules! matrix {
    ($($($x:expr),+);* $(;)?) => {
        $crate::Matrix::from(vec![$(vec![$($x),+]),*])
    };
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use crate::{Matrix, RowVector, Vector};

    #[test]
    #[rustfmt::skip]
    fn test_list_macros() {
        let v: Vector<i64> = vector![1, 2, 3];
        assert_eq!(v, Vector::from_slice(&[1, 2, 3]));

        let r: RowVector<i64> = row_vector![1, 2, 3,];
        assert_eq!(r.shape(), (1, 3));

        let A: Matrix<i64> = matrix![
            1, 2, 3;
            4, 5, 6
        ];
        assert_eq!(A, Matrix::from_row_slice(2, 3, &[1, 2, 3, 4, 5, 6]));

        let B: Matrix<f64> = matrix![1.0; 2.0;];
        assert_eq!(B.shape(), (2, 1));
    }

    #[test]
    #[should_panic(expected = "rows have different lengths")]
    fn test_ragged_matrix_macro() {
        let _: Matrix<i64> = matrix![1, 2; 3];
    }
}
