//! Full-matrix aggregates computed from the packed slots alone.
//!
//! Every off-diagonal slot stands for two logical cells, so full-matrix
//! sums and products follow from the packed fold plus a correction for
//! the diagonal; nothing here ever expands to the `order²` grid.

use ::std::ops::{Div, Sub};

use ::num_traits::{FromPrimitive, One, Zero};
use ::thiserror::Error;

use crate::mat::SymMat;
use crate::traits::PartialMinMax;

/// Error from taking the mean of an order-0 matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mean of an order-0 matrix divides by zero")]
pub struct DivisionByZeroError;

impl<T: Clone> SymMat<T> {
    /// Sum of the diagonal.
    pub fn trace(&self) -> T
    where
        T: Zero,
    {
        (0..self.order()).fold(T::zero(), |acc, k| acc + self.get(k, k))
    }

    /// Product of the diagonal; 1 for order 0.
    pub fn diag_product(&self) -> T
    where
        T: One,
    {
        (0..self.order()).fold(T::one(), |acc, k| acc * self.get(k, k))
    }

    /// Sum over the full logical matrix.
    ///
    /// Off-diagonal slots count twice, so this is `2P - T` with `P` the
    /// packed-slot sum and `T` the trace.  Matches a naive full-expansion
    /// sum exactly for exact scalars.
    pub fn sum(&self) -> T
    where
        T: Zero + Sub<Output = T>,
    {
        let trace = self.trace();
        let packed = self
            .as_flat()
            .iter()
            .cloned()
            .fold(T::zero(), |acc, x| acc + x);
        let off_diagonal = packed - trace.clone();
        off_diagonal.clone() + off_diagonal + trace
    }

    /// Product over the full logical matrix.
    ///
    /// Off-diagonal slots count twice, so this is `(FP/DP)² · DP` with
    /// `FP` the packed-slot product and `DP` the diagonal product.  When
    /// `DP` is zero that formula would divide by zero; the packed slots
    /// are folded directly instead, squaring each off-diagonal factor,
    /// which yields the exact full-matrix product (zero, whenever a
    /// diagonal entry is zero).
    pub fn product(&self) -> T
    where
        T: Zero + One + Div<Output = T>,
    {
        let diag = self.diag_product();
        if diag.is_zero() {
            trace!("zero diagonal product; taking the division-free path");
            return self.indexed_iter().fold(T::one(), |acc, ((i, j), x)| {
                if i == j {
                    acc * x.clone()
                } else {
                    acc * x.clone() * x.clone()
                }
            });
        }

        let packed = self
            .as_flat()
            .iter()
            .cloned()
            .fold(T::one(), |acc, x| acc * x);
        let off_diagonal = packed / diag.clone();
        off_diagonal.clone() * off_diagonal * diag
    }

    /// Mean over the full logical matrix, `sum() / order²`.
    ///
    /// Fails for order 0, where the divisor would be zero.
    pub fn mean(&self) -> Result<T, DivisionByZeroError>
    where
        T: Zero + Sub<Output = T> + Div<Output = T> + FromPrimitive,
    {
        if self.order() == 0 {
            return Err(DivisionByZeroError);
        }
        let count = T::from_usize(self.order() * self.order())
            .expect("element count not representable in the scalar type");
        Ok(self.sum() / count)
    }

    /// Smallest coefficient of the matrix.
    ///
    /// Duplication never removes an extremum, so scanning the packed
    /// slots suffices.  Returns `None` for order 0, or when the scan
    /// runs into values that do not compare (such as `NaN`).
    pub fn min_coeff(&self) -> Option<T>
    where
        T: PartialOrd,
    {
        let mut it = self.as_flat().iter().cloned();
        let first = it.next()?;
        it.try_fold(first, PartialMinMax::partial_min)
    }

    /// Largest coefficient of the matrix.
    ///
    /// See [`SymMat::min_coeff`] for the `None` cases.
    pub fn max_coeff(&self) -> Option<T>
    where
        T: PartialOrd,
    {
        let mut it = self.as_flat().iter().cloned();
        let first = it.next()?;
        it.try_fold(first, PartialMinMax::partial_max)
    }
}
