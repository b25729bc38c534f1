//! Symmetric matrices in classical packed storage, with dense interop.
//!
//! This crate re-exports the public API of the workspace members:
//!
//! * `symmat-packed` — the [`SymMat`] container, its packed index
//!   function, and the reduction/arithmetic operations;
//! * `symmat-dense` — the [`DenseMatrix`] boundary trait and the owned
//!   row-major [`Matrix`] implementation.

pub use ::symmat_dense::{DenseMatrix, Matrix};

pub use ::symmat_packed::{packed_index, InvalidShapeError, SymMat};
pub use ::symmat_packed::{DimensionMismatchError, DivisionByZeroError};
pub use ::symmat_packed::{dense_sym_add, dense_sym_sub, sym_dense_add, sym_dense_sub};
pub use ::symmat_packed::{dense_sym_mul, sym_dense_mul, sym_sym_mul};
pub use ::symmat_packed::{sym_sym_add, sym_sym_sub};

pub use ::symmat_packed::math;
