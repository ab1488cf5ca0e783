mod mixed;
mod ops;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::traits::Scalar;

/// Rectangular heap-allocated container of scalars.
///
/// Row-major `Vec<T>` storage plus runtime dimensions; the buffer length
/// always equals `nrows * ncols` and the shape never changes after
/// construction. This is the shared base layer under [`Matrix`] and
/// [`Vector`]: it owns equality, elementwise arithmetic, scalar
/// multiply/divide, and row/column extraction, while the wrappers add
/// the linear-algebra semantics.
///
/// `Clone` performs a deep copy; two live grids never share storage.
///
/// # Examples
///
/// ```
/// use matra::Grid;
///
/// let g = Grid::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(g[(0, 2)], 3.0);
/// assert_eq!(g.nrows(), 2);
/// assert_eq!(g.ncols(), 3);
/// ```
///
/// [`Matrix`]: crate::Matrix
/// [`Vector`]: crate::Vector
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    pub(crate) data: Vec<T>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Grid<T> {
    /// Create an `nrows x ncols` grid filled with zeros.
    ///
    /// Zero-sized grids are allowed at this layer; the `Matrix` and
    /// `Vector` constructors impose their own minimums.
    ///
    /// ```
    /// use matra::Grid;
    /// let g = Grid::<f64>::new(2, 3);
    /// assert_eq!(g[(1, 2)], 0.0);
    /// ```
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a grid from a flat slice in row-major order.
    ///
    /// The slice is copied into fresh storage. Panics if
    /// `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use matra::Grid;
    /// let g = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
    /// assert_eq!(g[(1, 0)], 3);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} grid",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }
}

impl<T> Grid<T> {
    /// Create a grid by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use matra::Grid;
    /// let g = Grid::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
    /// assert_eq!(g[(1, 1)], 1.0);
    /// assert_eq!(g[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Dimensions as a `(rows, cols)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

// ── Checked element access ──────────────────────────────────────────

impl<T: Copy> Grid<T> {
    /// Element at `(row, col)`.
    ///
    /// ```
    /// use matra::{Error, Grid};
    /// let g = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
    /// assert_eq!(g.at(1, 1), Ok(4));
    /// assert_eq!(
    ///     g.at(2, 0),
    ///     Err(Error::IndexOutOfRange { index: (2, 0), shape: (2, 2) })
    /// );
    /// ```
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.ncols + col])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        self.data[row * self.ncols + col] = value;
        Ok(())
    }

    /// Extract row `i` as a fresh `Vec`, independent of this grid.
    ///
    /// ```
    /// use matra::Grid;
    /// let g = Grid::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(g.row(1).unwrap(), vec![4, 5, 6]);
    /// ```
    pub fn row(&self, i: usize) -> Result<Vec<T>> {
        if i >= self.nrows {
            return Err(Error::IndexOutOfRange {
                index: (i, 0),
                shape: self.shape(),
            });
        }
        Ok(self.row_slice(i).to_vec())
    }

    /// Extract column `j` as a fresh `Vec`, independent of this grid.
    ///
    /// ```
    /// use matra::Grid;
    /// let g = Grid::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(g.col(2).unwrap(), vec![3, 6]);
    /// ```
    pub fn col(&self, j: usize) -> Result<Vec<T>> {
        if j >= self.ncols {
            return Err(Error::IndexOutOfRange {
                index: (0, j),
                shape: self.shape(),
            });
        }
        let mut out = Vec::with_capacity(self.nrows);
        for i in 0..self.nrows {
            out.push(self.data[i * self.ncols + j]);
        }
        Ok(out)
    }
}

impl<T> Grid<T> {
    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(Error::IndexOutOfRange {
                index: (row, col),
                shape: self.shape(),
            });
        }
        Ok(())
    }

    /// View the entire grid as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.nrows()`. For a checked copy use
    /// [`row`](Grid::row).
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Apply a function to every element, producing a new grid.
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Grid<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Grid {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// Tab-delimited rendering, one line per row. Diagnostics only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                write!(f, "{}\t", self.data[i * self.ncols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn new_zero_filled() {
        let g = Grid::<f64>::new(3, 4);
        assert_eq!(g.shape(), (3, 4));
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(g[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn zero_sized_allowed() {
        let g = Grid::<i32>::new(0, 5);
        assert_eq!(g.shape(), (0, 5));
        assert!(g.as_slice().is_empty());
    }

    #[test]
    fn from_rows_layout() {
        let g = Grid::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(g[(0, 0)], 1);
        assert_eq!(g[(0, 2)], 3);
        assert_eq!(g[(1, 0)], 4);
        assert_eq!(g[(1, 2)], 6);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = Grid::from_rows(2, 2, &[1, 2, 3]);
    }

    #[test]
    fn at_and_set() {
        let mut g = Grid::<i32>::new(2, 2);
        g.set(0, 1, 7).unwrap();
        assert_eq!(g.at(0, 1), Ok(7));

        let err = g.at(0, 2).unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfRange {
                index: (0, 2),
                shape: (2, 2)
            }
        );
        assert!(g.set(2, 0, 1).is_err());
    }

    #[test]
    fn equality_requires_shape_and_elements() {
        let a = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
        let b = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
        let c = Grid::from_rows(1, 4, &[1, 2, 3, 4]);
        let d = Grid::from_rows(2, 2, &[1, 2, 3, 5]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn row_col_are_independent_copies() {
        let mut g = Grid::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
        let r = g.row(0).unwrap();
        let c = g.col(1).unwrap();
        g.set(0, 1, 99).unwrap();
        assert_eq!(r, vec![1, 2, 3]);
        assert_eq!(c, vec![2, 5]);
    }

    #[test]
    fn row_col_out_of_range() {
        let g = Grid::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert!(g.row(2).is_err());
        assert!(g.col(3).is_err());
    }

    #[test]
    fn clone_is_deep() {
        let a = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
        let mut b = a.clone();
        b.set(0, 0, 42).unwrap();
        assert_eq!(a[(0, 0)], 1);
        assert_eq!(b[(0, 0)], 42);
    }

    #[test]
    fn display_tab_delimited() {
        let g = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
        let s = format!("{}", g);
        assert_eq!(s, "1\t2\t\n3\t4\t\n");
    }

    #[test]
    fn map_type_change() {
        let g = Grid::from_rows(2, 2, &[1.0_f64, 2.5, 3.0, 4.5]);
        let r = g.map(|x| x as i32);
        assert_eq!(r[(0, 1)], 2);
        assert_eq!(r[(1, 1)], 4);
    }
}
