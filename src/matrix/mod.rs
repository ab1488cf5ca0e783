mod mixed;
mod ops;
mod square;

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::traits::Scalar;
use crate::vector::Vector;

/// Dense two-dimensional matrix over any [`Scalar`].
///
/// Wraps a [`Grid`] and tracks squareness, computed once per
/// construction. All arithmetic is by value: operands are never
/// mutated, and every result owns freshly allocated storage.
///
/// Checked operations return [`Result`]; the operator impls (`+`, `-`,
/// `*`, `/`) delegate to them and panic on misuse with the error
/// message.
///
/// # Examples
///
/// ```
/// use matra::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert!(a.is_square());
/// assert_eq!(a.det().unwrap(), -2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) grid: Grid<T>,
    square: bool,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Wrap a grid, deriving squareness for its shape.
    pub(crate) fn wrap(grid: Grid<T>) -> Self {
        let square = grid.nrows() == grid.ncols();
        Self { grid, square }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix filled with zeros.
    ///
    /// ```
    /// use matra::Matrix;
    /// let m = Matrix::<f64>::new(2, 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// assert!(!m.is_square());
    /// ```
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self::wrap(Grid::new(nrows, ncols))
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use matra::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        Self::wrap(Grid::from_rows(nrows, ncols, row_major))
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        Self::wrap(Grid::from_fn(nrows, ncols, f))
    }

    /// Create a matrix from rows of possibly differing lengths.
    ///
    /// The row count is the outer length; the column count is the
    /// *minimum* inner length, and longer rows are truncated to it
    /// (never padded). Fails with [`Error::InvalidShape`] when the
    /// outer sequence is empty or the shortest row has no elements.
    ///
    /// ```
    /// use matra::Matrix;
    /// let m = Matrix::from_jagged(&[
    ///     vec![1, 2, 3, 4],
    ///     vec![5, 6, 7],
    /// ]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(0, 2)], 3);
    /// ```
    pub fn from_jagged<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidShape {
                reason: "jagged construction needs at least one row",
            });
        }
        let ncols = rows.iter().map(|r| r.as_ref().len()).min().unwrap_or(0);
        if ncols == 0 {
            return Err(Error::InvalidShape {
                reason: "jagged construction needs non-empty rows",
            });
        }
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            data.extend_from_slice(&row.as_ref()[..ncols]);
        }
        Ok(Self::wrap(Grid {
            data,
            nrows: rows.len(),
            ncols,
        }))
    }

    /// Create the `n x n` identity matrix.
    ///
    /// ```
    /// use matra::Matrix;
    /// let id = Matrix::<i32>::identity(3);
    /// assert_eq!(id[(1, 1)], 1);
    /// assert_eq!(id[(0, 1)], 0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut grid = Grid::new(n, n);
        for i in 0..n {
            grid[(i, i)] = T::one();
        }
        Self::wrap(grid)
    }

    /// Deep copy of the first row as a [`Vector`].
    ///
    /// Fails with [`Error::IndexOutOfRange`] on a matrix with zero rows.
    ///
    /// ```
    /// use matra::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// let v = m.to_vector().unwrap();
    /// assert_eq!(v.len(), 3);
    /// assert_eq!(v[2], 3);
    /// ```
    pub fn to_vector(&self) -> Result<Vector<T>> {
        if self.nrows() == 0 {
            return Err(Error::IndexOutOfRange {
                index: (0, 0),
                shape: self.shape(),
            });
        }
        Ok(Vector::from_slice(self.grid.row_slice(0)))
    }
}

// ── Shape and element access ────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.grid.nrows()
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.grid.ncols()
    }

    /// Dimensions as a `(rows, cols)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.grid.shape()
    }

    /// Whether the matrix is square. Computed at construction.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.square
    }

    /// Borrow the underlying grid.
    #[inline]
    pub fn as_grid(&self) -> &Grid<T> {
        &self.grid
    }
}

impl<T: Copy> Matrix<T> {
    /// Bounds-checked element read.
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        self.grid.at(row, col)
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.grid.set(row, col, value)
    }

    /// Extract row `i` as a fresh `Vec`.
    pub fn row(&self, i: usize) -> Result<Vec<T>> {
        self.grid.row(i)
    }

    /// Extract column `j` as a fresh `Vec`.
    pub fn col(&self, j: usize) -> Result<Vec<T>> {
        self.grid.col(j)
    }

    /// All rows as fresh `Vec`s, top to bottom.
    pub fn rows(&self) -> Vec<Vec<T>> {
        (0..self.nrows())
            .map(|i| self.grid.row_slice(i).to_vec())
            .collect()
    }

    /// All columns as fresh `Vec`s, left to right.
    pub fn cols(&self) -> Vec<Vec<T>> {
        let mut out = Vec::with_capacity(self.ncols());
        for j in 0..self.ncols() {
            let mut col = Vec::with_capacity(self.nrows());
            for i in 0..self.nrows() {
                col.push(self.grid[(i, j)]);
            }
            out.push(col);
        }
        out
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &T {
        &self.grid[index]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        &mut self.grid[index]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T> From<Grid<T>> for Matrix<T> {
    fn from(grid: Grid<T>) -> Self {
        Self::wrap(grid)
    }
}

impl<T> From<Matrix<T>> for Grid<T> {
    fn from(m: Matrix<T>) -> Self {
        m.grid
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
