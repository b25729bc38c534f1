//! Elementwise addition and subtraction.

use ::std::ops::{Add, Sub};

use ::symmat_dense::{DenseMatrix, Matrix};

use super::{check_same_order, check_square_dense, DimensionMismatchError};
use crate::mat::SymMat;

/// Add two packed matrices, staying packed.
///
/// Elementwise linear combinations of symmetric matrices are symmetric,
/// so the two packed storages combine slot-by-slot; nothing is expanded.
pub fn sym_sym_add<T>(
    a: &SymMat<T>,
    b: &SymMat<T>,
) -> Result<SymMat<T>, DimensionMismatchError>
where
    T: Clone + Add<Output = T>,
{
    let order = check_same_order(a, b)?;
    let val = a
        .as_flat()
        .iter()
        .zip(b.as_flat())
        .map(|(x, y)| x.clone() + y.clone())
        .collect();
    Ok(SymMat::from_parts(order, val))
}

/// Subtract two packed matrices, staying packed.
pub fn sym_sym_sub<T>(
    a: &SymMat<T>,
    b: &SymMat<T>,
) -> Result<SymMat<T>, DimensionMismatchError>
where
    T: Clone + Sub<Output = T>,
{
    let order = check_same_order(a, b)?;
    let val = a
        .as_flat()
        .iter()
        .zip(b.as_flat())
        .map(|(x, y)| x.clone() - y.clone())
        .collect();
    Ok(SymMat::from_parts(order, val))
}

/// Add a packed matrix and a square dense matrix; the result is dense.
pub fn sym_dense_add<T, D>(
    a: &SymMat<T>,
    dense: &D,
) -> Result<Matrix<T>, DimensionMismatchError>
where
    T: Clone + Add<Output = T>,
    D: DenseMatrix<T>,
{
    let n = check_square_dense(a, dense)?;
    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            data.push(a.get(i, j) + dense.get(i, j));
        }
    }
    Ok(Matrix::from_row_major_data((n, n), data))
}

/// Add a square dense matrix and a packed matrix; the result is dense.
///
/// Addition commutes, so this is [`sym_dense_add`] with the roles swapped.
#[inline]
pub fn dense_sym_add<T, D>(
    dense: &D,
    a: &SymMat<T>,
) -> Result<Matrix<T>, DimensionMismatchError>
where
    T: Clone + Add<Output = T>,
    D: DenseMatrix<T>,
{
    sym_dense_add(a, dense)
}

/// Subtract a square dense matrix from a packed matrix: `A(i,j) - D[i,j]`.
pub fn sym_dense_sub<T, D>(
    a: &SymMat<T>,
    dense: &D,
) -> Result<Matrix<T>, DimensionMismatchError>
where
    T: Clone + Sub<Output = T>,
    D: DenseMatrix<T>,
{
    let n = check_square_dense(a, dense)?;
    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            data.push(a.get(i, j) - dense.get(i, j));
        }
    }
    Ok(Matrix::from_row_major_data((n, n), data))
}

/// Subtract a packed matrix from a square dense matrix: `D[i,j] - A(i,j)`.
///
/// Not interchangeable with [`sym_dense_sub`]; direction follows argument
/// order.
pub fn dense_sym_sub<T, D>(
    dense: &D,
    a: &SymMat<T>,
) -> Result<Matrix<T>, DimensionMismatchError>
where
    T: Clone + Sub<Output = T>,
    D: DenseMatrix<T>,
{
    let n = check_square_dense(a, dense)?;
    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            data.push(dense.get(i, j) - a.get(i, j));
        }
    }
    Ok(Matrix::from_row_major_data((n, n), data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym() -> SymMat<i64> {
        // [ 1 2 ]
        // [ 2 5 ]
        SymMat::from_flat(vec![1, 2, 5]).unwrap()
    }

    fn dense() -> Matrix<i64> {
        Matrix::from_row_major_data((2, 2), vec![10, 20, 30, 40])
    }

    #[test]
    fn test_sym_sym_add_sub() {
        let a = sym();
        let doubled = sym_sym_add(&a, &a).unwrap();
        assert_eq!(doubled.as_flat(), &[2, 4, 10]);

        let diff = sym_sym_sub(&doubled, &a).unwrap();
        assert_eq!(diff, a);
    }

    #[test]
    fn test_sym_sym_order_mismatch() {
        let err = sym_sym_add(&sym(), &SymMat::<i64>::zero(3)).unwrap_err();
        assert_eq!(
            err,
            DimensionMismatchError { lhs: (2, 2), rhs: (3, 3) },
        );
        assert!(sym_sym_sub(&sym(), &SymMat::<i64>::zero(3)).is_err());
    }

    #[test]
    fn test_mixed_add_commutes() {
        let a = sym();
        let d = dense();
        let lhs = sym_dense_add(&a, &d).unwrap();
        let rhs = dense_sym_add(&d, &a).unwrap();
        assert_eq!(lhs, rhs);
        assert_eq!(lhs.row_major_data(), &[11, 22, 32, 45]);
    }

    #[test]
    fn test_mixed_sub_directions() {
        let a = sym();
        let d = dense();
        assert_eq!(
            sym_dense_sub(&a, &d).unwrap().row_major_data(),
            &[-9, -18, -28, -35],
        );
        assert_eq!(
            dense_sym_sub(&d, &a).unwrap().row_major_data(),
            &[9, 18, 28, 35],
        );
    }

    #[test]
    fn test_mixed_shape_mismatch() {
        let a = SymMat::<i64>::zero(3);
        let d = Matrix::<i64>::zero((2, 2));
        let err = sym_dense_add(&a, &d).unwrap_err();
        assert_eq!(
            err,
            DimensionMismatchError { lhs: (3, 3), rhs: (2, 2) },
        );

        // rectangular dense operands are rejected even when one side fits
        let d = Matrix::<i64>::zero((3, 2));
        assert!(dense_sym_sub(&d, &a).is_err());
    }
}
