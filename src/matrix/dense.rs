//! Dense row-major matrix storage.

use std::ops::{Index, IndexMut};

use rand::Rng;

/// Dense matrix of `i32` with shape fixed at construction.
///
/// Storage is a single row-major `Vec`, so the multiplication kernels can
/// work on flat slices with explicit index arithmetic instead of nested
/// vectors. Rectangularity is enforced when the matrix is built; element
/// access assumes in-range indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// All-zeros matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build a matrix from nested rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged - every row must have the same length.
    ///
    /// # Example
    ///
    /// ```
    /// use parmul::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    ///
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.cols(), 3);
    /// assert_eq!(m[(1, 2)], 6);
    /// ```
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Matrix {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                n_cols,
                "row {} has length {}, expected {}",
                i,
                row.len(),
                n_cols
            );
            data.extend_from_slice(row);
        }

        Matrix {
            rows: n_rows,
            cols: n_cols,
            data,
        }
    }

    /// Matrix filled with uniform random integers in `[1, 100]`.
    ///
    /// The generator is passed in by the caller, so runs are reproducible
    /// with a seeded RNG and nothing touches process-global state.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..rows * cols).map(|_| rng.random_range(1..=100)).collect();
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat row-major view of the elements.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Mutable flat row-major view of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Coordinates of the first cell where `self` and `other` differ,
    /// scanning in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the two matrices have different shapes.
    pub fn first_mismatch(&self, other: &Matrix) -> Option<(usize, usize)> {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "compared matrices must have the same shape"
        );
        self.data
            .iter()
            .zip(&other.data)
            .position(|(x, y)| x != y)
            .map(|idx| (idx / self.cols, idx % self.cols))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (r, c): (usize, usize)) -> &i32 {
        debug_assert!(r < self.rows && c < self.cols);
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut i32 {
        debug_assert!(r < self.rows && c < self.cols);
        &mut self.data[r * self.cols + c]
    }
}
