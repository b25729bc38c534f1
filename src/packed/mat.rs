use ::std::fmt;
use ::std::ops::{Index, IndexMut};

use ::num_traits::{One, Zero};
use ::symmat_dense::Matrix;
use ::thiserror::Error;

use crate::index::packed_index;

/// Error from constructing a [`SymMat`] out of a flat sequence whose
/// length is not a triangular number (1, 3, 6, 10, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("flat length {len} is not a triangular number; no square order fits it")]
pub struct InvalidShapeError {
    pub len: usize,
}

/// A square symmetric matrix in classical packed storage.
///
/// Only the upper triangle is stored, as a flat sequence in row-major
/// order: row 0's entries from the diagonal onward, then row 1's, and so
/// on.  That is `order*(order+1)/2` slots instead of `order²`, and it
/// enforces symmetry structurally: reads and writes at `(i, j)` and
/// `(j, i)` resolve to the identical slot.
///
/// Matrices are plain owned values.  Copies are independent; there is no
/// shared backing storage between distinct instances.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SymMat<T> {
    order: usize,
    // invariant: val.len() == order * (order + 1) / 2
    val: Vec<T>,
}

#[inline]
fn triangle_len(order: usize) -> usize {
    order * (order + 1) / 2
}

impl<T> SymMat<T> {
    /// Build a packed matrix from its components.
    ///
    /// `val` holds the upper triangle in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `val.len()` is not `order * (order + 1) / 2`.
    pub fn from_parts(order: usize, val: Vec<T>) -> Self {
        assert_eq!(
            val.len(),
            triangle_len(order),
            "{} elements cannot fill the upper triangle of an order-{} matrix",
            val.len(),
            order,
        );
        SymMat { order, val }
    }

    /// Build a packed matrix from the flat upper triangle alone, deriving
    /// the order from the sequence length.
    ///
    /// The length must be a triangular number `n*(n+1)/2`; any other
    /// length cannot be the upper triangle of a square matrix and is
    /// rejected with [`InvalidShapeError`].
    pub fn from_flat(val: Vec<T>) -> Result<Self, InvalidShapeError> {
        let len = val.len();

        // Invert len = n(n+1)/2.  Float sqrt can land one off for very
        // large lengths, so nudge the candidate until it brackets len.
        let mut order = ((2 * len) as f64).sqrt() as usize;
        while triangle_len(order) > len {
            order -= 1;
        }
        while triangle_len(order + 1) <= len {
            order += 1;
        }

        if triangle_len(order) != len {
            debug!("rejecting flat sequence of length {}", len);
            return Err(InvalidShapeError { len });
        }
        Ok(SymMat { order, val })
    }

    /// Side length of the logical square matrix.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of slots the packed representation holds, `order*(order+1)/2`.
    #[inline]
    pub fn element_count(&self) -> usize {
        triangle_len(self.order)
    }

    /// Length of the backing storage (equivalent to `element_count`).
    #[inline]
    pub fn elements_stored(&self) -> usize {
        self.val.len()
    }

    /// How many slots the packing spares relative to a dense `order²` grid.
    #[inline]
    pub fn elements_saved(&self) -> usize {
        self.order * self.order - self.element_count()
    }

    /// View the packed upper triangle, in row-major order.
    #[inline]
    pub fn as_flat(&self) -> &[T] {
        &self.val
    }

    /// Recover the packed upper triangle, in row-major order.
    #[inline]
    pub fn into_flat(self) -> Vec<T> {
        self.val
    }

    /// Overwrite the element at a logical position.
    ///
    /// Writes through `(i, j)` and `(j, i)` mutate the identical slot.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.val[packed_index(self.order, row, col)] = value;
    }

    /// Iterate over the stored slots as `((row, col), &value)`, in
    /// row-major upper-triangle order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let order = self.order;
        (0..order)
            .flat_map(move |i| (i..order).map(move |j| (i, j)))
            .zip(&self.val)
    }
}

impl<T: Clone> SymMat<T> {
    /// Get the element at a logical position.
    ///
    /// Reads through `(i, j)` and `(j, i)` see the identical slot.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.val[packed_index(self.order, row, col)].clone()
    }

    /// Expand into a dense `order × order` matrix.
    pub fn to_dense(&self) -> Matrix<T> {
        let n = self.order;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(self.get(i, j));
            }
        }
        Matrix::from_row_major_data((n, n), data)
    }
}

impl<T: Zero + Clone> SymMat<T> {
    /// Constructs a zero matrix of the given order.
    pub fn zero(order: usize) -> Self {
        SymMat {
            order,
            val: vec![Zero::zero(); triangle_len(order)],
        }
    }

    /// Constructs a diagonal matrix.
    pub fn from_diagonal<I>(diag: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let diag = diag.into_iter().collect::<Vec<_>>();
        let mut out = SymMat::zero(diag.len());
        for (k, x) in diag.into_iter().enumerate() {
            out.set(k, k, x);
        }
        out
    }
}

impl<T: Zero + One + Clone> SymMat<T> {
    /// Constructs an identity matrix.
    #[inline]
    pub fn eye(order: usize) -> Self {
        SymMat::from_diagonal(vec![One::one(); order])
    }
}

/// The default matrix is order 3, zero-filled.
impl<T: Zero + Clone> Default for SymMat<T> {
    fn default() -> Self {
        SymMat::zero(3)
    }
}

impl<T> Index<(usize, usize)> for SymMat<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.val[packed_index(self.order, r, c)]
    }
}

impl<T> IndexMut<(usize, usize)> for SymMat<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        &mut self.val[packed_index(self.order, r, c)]
    }
}

/// Renders the full logical grid, one row per line, in fixed-width
/// columns sized to the widest element.  Diagnostic output only; the
/// format is not stable.
impl<T: fmt::Display> fmt::Display for SymMat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .val
            .iter()
            .map(|x| x.to_string().len())
            .max()
            .unwrap_or(0);
        for i in 0..self.order {
            for j in 0..self.order {
                let x = &self.val[packed_index(self.order, i, j)];
                write!(f, "{:>1$} ", x, width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
