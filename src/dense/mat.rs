use ::std::ops::{Index, IndexMut};

use ::num_traits::{One, Zero};

use crate::DenseMatrix;

/// Owned matrix type with C layout.
// please resist the urge to go n-dimensional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    // c-contiguous, row-contiguous data
    data: Vec<T>,
    // invariant: height * width == data.len()
    height: usize,
    width: usize,
}

impl<T> Matrix<T> {
    /// Construct from row-major data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != height * width`.
    pub fn from_row_major_data((height, width): (usize, usize), data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            height * width,
            "{} elements cannot fill a {}x{} matrix",
            data.len(),
            height,
            width,
        );
        Matrix { data, height, width }
    }

    /// Get the shape tuple `(height, width)`.
    #[inline(always)]
    pub fn dim(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline(always)]
    pub fn num_rows(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn num_cols(&self) -> usize {
        self.width
    }

    /// Returns true if the two dimensions of the matrix are equal.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// View the backing storage in row-major order.
    pub fn row_major_data(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the rows as contiguous slices.
    pub fn rows(&self) -> ::std::slice::Chunks<'_, T> {
        self.data.chunks(self.width.max(1))
    }
}

impl<T: Clone> Matrix<T> {
    /// Construct a matrix with every element set to a copy of `fill`.
    pub fn new_filled((height, width): (usize, usize), fill: &T) -> Self {
        Matrix {
            data: vec![fill.clone(); height * width],
            height,
            width,
        }
    }
}

impl<T: Zero + Clone> Matrix<T> {
    /// Constructs a zero matrix.
    #[inline]
    pub fn zero(dim: (usize, usize)) -> Self {
        Matrix::new_filled(dim, &Zero::zero())
    }
}

impl<T: Zero + One + Clone> Matrix<T> {
    /// Constructs an identity matrix.
    pub fn eye(n: usize) -> Self {
        let mut out = Matrix::zero((n, n));
        for k in 0..n {
            out[(k, k)] = One::one();
        }
        out
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(
            r < self.height && c < self.width,
            "position ({}, {}) out of bounds for {}x{} matrix",
            r, c, self.height, self.width,
        );
        &self.data[r * self.width + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(
            r < self.height && c < self.width,
            "position ({}, {}) out of bounds for {}x{} matrix",
            r, c, self.height, self.width,
        );
        &mut self.data[r * self.width + c]
    }
}

impl<T: Clone> DenseMatrix<T> for Matrix<T> {
    #[inline(always)]
    fn rows(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn cols(&self) -> usize {
        self.width
    }

    #[inline(always)]
    fn get(&self, row: usize, col: usize) -> T {
        self[(row, col)].clone()
    }

    #[inline(always)]
    fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_major_data() {
        let m = Matrix::from_row_major_data((2, 3), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(m.dim(), (2, 3));
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.row_major_data(), &[1, 2, 3, 4, 5, 6]);

        // ALWAYS. TEST. SIZE. ZERO.
        let m = Matrix::<i32>::from_row_major_data((0, 0), vec![]);
        assert_eq!(m.dim(), (0, 0));
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    #[should_panic(expected = "cannot fill")]
    fn test_bad_data_length() {
        Matrix::from_row_major_data((2, 3), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rows() {
        let m = Matrix::from_row_major_data((2, 2), vec![7, 8, 9, 10]);
        let rows = m.rows().collect::<Vec<_>>();
        assert_eq!(rows, vec![&[7, 8][..], &[9, 10][..]]);
    }

    #[test]
    fn test_eye() {
        assert_eq!(
            Matrix::<i64>::eye(3).row_major_data(),
            &[1, 0, 0, 0, 1, 0, 0, 0, 1],
        );
        assert_eq!(Matrix::<i64>::eye(0).dim(), (0, 0));
    }

    #[test]
    fn test_dense_matrix_impl() {
        let mut m = Matrix::zero((2, 2));
        assert_eq!(DenseMatrix::rows(&m), 2);
        assert_eq!(DenseMatrix::cols(&m), 2);
        m.set(0, 1, 5i64);
        assert_eq!(m.get(0, 1), 5);
        assert_eq!(m.get(1, 0), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let m = Matrix::from_row_major_data((2, 2), vec![1, 2, 3, 4]);
        let _ = m[(0, 2)];
    }
}
