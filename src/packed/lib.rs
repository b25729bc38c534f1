//! Symmetric matrices in classical packed storage.
//!
//! A symmetric matrix of order `n` is fully determined by its upper
//! triangle, so only those `n*(n+1)/2` elements are stored, in row-major
//! order.  Element access resolves logical `(row, col)` positions through
//! [`packed_index`], which makes the symmetry structural: a write through
//! either `(i, j)` or `(j, i)` lands in the same slot.
//!
//! Aggregates (`sum`, `product`, `mean`, extrema) are computed over the
//! packed slots only, exploiting the fact that every off-diagonal slot
//! stands for two logical cells.  Arithmetic against dense operands goes
//! through the `DenseMatrix` trait of `symmat-dense`, keeping this crate
//! independent of any concrete dense layout.

#[macro_use]
extern crate log;

pub use crate::index::packed_index;
pub use crate::mat::{InvalidShapeError, SymMat};
pub use crate::reduce::DivisionByZeroError;
pub use crate::traits::PartialMinMax;

pub use crate::math::DimensionMismatchError;
pub use crate::math::{dense_sym_add, dense_sym_sub, sym_dense_add, sym_dense_sub};
pub use crate::math::{dense_sym_mul, sym_dense_mul, sym_sym_mul};
pub use crate::math::{sym_sym_add, sym_sym_sub};

mod index;
mod mat;
mod reduce;
mod traits;
pub mod math;
