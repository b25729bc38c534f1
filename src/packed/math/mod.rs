//! Arithmetic between packed matrices and dense operands.
//!
//! Each operand order gets its own named operation (`sym_dense_sub` and
//! `dense_sym_sub` are different subtractions), rather than overloading on
//! which argument happens to be the packed one.

pub use self::mat_mul::{dense_sym_mul, sym_dense_mul, sym_sym_mul};
pub use self::ops::{dense_sym_add, dense_sym_sub, sym_dense_add, sym_dense_sub};
pub use self::ops::{sym_sym_add, sym_sym_sub};
mod mat_mul;
mod ops;

use ::symmat_dense::DenseMatrix;
use ::thiserror::Error;

use crate::mat::SymMat;

/// Error from combining two matrices whose shapes are incompatible for
/// the requested operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dimension mismatch: {lhs:?} vs {rhs:?}")]
pub struct DimensionMismatchError {
    /// Shape of the left operand, as `(rows, cols)`.
    pub lhs: (usize, usize),
    /// Shape of the right operand, as `(rows, cols)`.
    pub rhs: (usize, usize),
}

fn check_same_order<T>(
    a: &SymMat<T>,
    b: &SymMat<T>,
) -> Result<usize, DimensionMismatchError> {
    if a.order() == b.order() {
        Ok(a.order())
    } else {
        Err(DimensionMismatchError {
            lhs: (a.order(), a.order()),
            rhs: (b.order(), b.order()),
        })
    }
}

fn check_square_dense<T, D>(
    a: &SymMat<T>,
    dense: &D,
) -> Result<usize, DimensionMismatchError>
where
    D: DenseMatrix<T>,
{
    if a.order() == dense.rows() && a.order() == dense.cols() {
        Ok(a.order())
    } else {
        Err(DimensionMismatchError {
            lhs: (a.order(), a.order()),
            rhs: (dense.rows(), dense.cols()),
        })
    }
}
