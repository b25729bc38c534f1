//! Matrix-matrix products.
//!
//! Products of symmetric matrices need not be symmetric, so every product
//! here returns a dense result.  The loops read logical positions through
//! the packed index; no symmetry-based shortcut is taken on the
//! multiplication itself.

use ::std::ops::Mul;

use ::num_traits::Zero;
use ::symmat_dense::{DenseMatrix, Matrix};

use super::DimensionMismatchError;
use crate::mat::SymMat;

#[inline]
fn multiplied_dim(
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(usize, usize), DimensionMismatchError> {
    let (m, n1) = lhs;
    let (n2, p) = rhs;
    if n1 == n2 {
        Ok((m, p))
    } else {
        Err(DimensionMismatchError { lhs, rhs })
    }
}

/// Multiply two packed matrices of the same order.
///
/// Standard O(order³) triple loop; the result is an `order × order` dense
/// matrix.
pub fn sym_sym_mul<T>(
    a: &SymMat<T>,
    b: &SymMat<T>,
) -> Result<Matrix<T>, DimensionMismatchError>
where
    T: Clone + Zero + Mul<Output = T>,
{
    let (m, p) = multiplied_dim(
        (a.order(), a.order()),
        (b.order(), b.order()),
    )?;
    let n = a.order();

    let mut data = Vec::with_capacity(m * p);
    for i in 0..m {
        for j in 0..p {
            let mut acc = T::zero();
            for k in 0..n {
                acc = acc + a.get(i, k) * b.get(k, j);
            }
            data.push(acc);
        }
    }
    Ok(Matrix::from_row_major_data((m, p), data))
}

/// Multiply a packed matrix of order n by a dense `n × m` matrix.
///
/// The result is dense, `n × m`.
pub fn sym_dense_mul<T, D>(
    a: &SymMat<T>,
    dense: &D,
) -> Result<Matrix<T>, DimensionMismatchError>
where
    T: Clone + Zero + Mul<Output = T>,
    D: DenseMatrix<T>,
{
    let (m, p) = multiplied_dim(
        (a.order(), a.order()),
        (dense.rows(), dense.cols()),
    )?;
    let n = a.order();

    let mut data = Vec::with_capacity(m * p);
    for i in 0..m {
        for j in 0..p {
            let mut acc = T::zero();
            for k in 0..n {
                acc = acc + a.get(i, k) * dense.get(k, j);
            }
            data.push(acc);
        }
    }
    Ok(Matrix::from_row_major_data((m, p), data))
}

/// Multiply a dense `p × n` matrix by a packed matrix of order n.
///
/// The result is dense, `p × n`.
pub fn dense_sym_mul<T, D>(
    dense: &D,
    a: &SymMat<T>,
) -> Result<Matrix<T>, DimensionMismatchError>
where
    T: Clone + Zero + Mul<Output = T>,
    D: DenseMatrix<T>,
{
    let (m, p) = multiplied_dim(
        (dense.rows(), dense.cols()),
        (a.order(), a.order()),
    )?;
    let n = a.order();

    let mut data = Vec::with_capacity(m * p);
    for i in 0..m {
        for j in 0..p {
            let mut acc = T::zero();
            for k in 0..n {
                acc = acc + dense.get(i, k) * a.get(k, j);
            }
            data.push(acc);
        }
    }
    Ok(Matrix::from_row_major_data((m, p), data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sym_sym_mul() {
        // [ 1 2 ]   [ 0 1 ]   [  2  5 ]
        // [ 2 3 ] * [ 1 2 ] = [  3  8 ]
        let a = SymMat::from_flat(vec![1, 2, 3]).unwrap();
        let b = SymMat::from_flat(vec![0, 1, 2]).unwrap();
        let r = sym_sym_mul(&a, &b).unwrap();
        assert_eq!(r.row_major_data(), &[2, 5, 3, 8]);

        // the product of two symmetric matrices is generally not symmetric
        assert_ne!(r[(0, 1)], r[(1, 0)]);
    }

    #[test]
    fn test_multiply_by_identity() {
        let a = SymMat::from_flat(vec![2, 1, 3]).unwrap();
        let eye = Matrix::<i64>::eye(2);
        let r = sym_dense_mul(&a, &eye).unwrap();
        assert_eq!(r.row_major_data(), &[2, 1, 1, 3]);

        let r = dense_sym_mul(&eye, &a).unwrap();
        assert_eq!(r.row_major_data(), &[2, 1, 1, 3]);
    }

    #[test]
    fn test_rectangular_dense() {
        // [ 1 2 ]   [ 1 0 1 ]   [  1  2  3 ]
        // [ 2 3 ] * [ 0 1 1 ] = [  2  3  5 ]
        let a = SymMat::from_flat(vec![1, 2, 3]).unwrap();
        let d = Matrix::from_row_major_data((2, 3), vec![1, 0, 1, 0, 1, 1]);
        let r = sym_dense_mul(&a, &d).unwrap();
        assert_eq!(r.dim(), (2, 3));
        assert_eq!(r.row_major_data(), &[1, 2, 3, 2, 3, 5]);

        // 3x2 on the left of an order-2 packed matrix gives 3x2
        let d = Matrix::from_row_major_data((3, 2), vec![1, 0, 0, 1, 1, 1]);
        let r = dense_sym_mul(&d, &a).unwrap();
        assert_eq!(r.dim(), (3, 2));
        assert_eq!(r.row_major_data(), &[1, 2, 2, 3, 3, 5]);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = SymMat::<i64>::zero(2);
        let b = SymMat::<i64>::zero(3);
        assert_eq!(
            sym_sym_mul(&a, &b).unwrap_err(),
            DimensionMismatchError { lhs: (2, 2), rhs: (3, 3) },
        );

        // inner dimensions must agree
        let d = Matrix::<i64>::zero((3, 2));
        assert!(sym_dense_mul(&a, &d).is_err());
        assert!(dense_sym_mul(&d, &SymMat::<i64>::zero(3)).is_err());
    }

    #[test]
    fn test_size_zero() {
        let a = SymMat::<i64>::zero(0);
        let r = sym_sym_mul(&a, &a).unwrap();
        assert_eq!(r.dim(), (0, 0));
    }
}
