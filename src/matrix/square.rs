//! Square-matrix operations: trace, power, determinant, adjugate,
//! inverse.
//!
//! The determinant is the classical cofactor expansion along row 0,
//! recursing over minors. It is exponential in the matrix size and is
//! kept that way on purpose: the library pins the exact algorithm and
//! its cost profile rather than substituting Gaussian elimination,
//! which would change observable behavior for exact scalar types.
//! Recursion depth equals the matrix size.
//!
//! Cofactor signs are produced by subtracting below zero, so [`det`],
//! [`adjugate`], and [`invert`] expect signed or float scalars:
//! unsigned scalars wrap in release builds and panic in debug builds,
//! like any other unsigned subtraction.
//!
//! [`det`]: Matrix::det
//! [`adjugate`]: Matrix::adjugate
//! [`invert`]: Matrix::invert

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::traits::Scalar;

use super::Matrix;

/// Sub-grid with `row` and `col` removed.
fn minor<T: Scalar>(g: &Grid<T>, row: usize, col: usize) -> Grid<T> {
    Grid::from_fn(g.nrows() - 1, g.ncols() - 1, |i, j| {
        let si = if i < row { i } else { i + 1 };
        let sj = if j < col { j } else { j + 1 };
        g[(si, sj)]
    })
}

/// `+1` for even `k`, `-1` for odd `k`.
#[inline]
fn sign<T: Scalar>(k: usize) -> T {
    if k % 2 == 0 {
        T::one()
    } else {
        T::zero() - T::one()
    }
}

/// Cofactor expansion along row 0.
///
/// Base case is the 2x2 formula; the empty 0x0 grid has determinant
/// one, which makes the 1x1 case come out to its single element.
fn det_rec<T: Scalar>(g: &Grid<T>) -> T {
    let n = g.nrows();
    if n == 0 {
        return T::one();
    }
    if n == 2 {
        return g[(0, 0)] * g[(1, 1)] - g[(0, 1)] * g[(1, 0)];
    }

    let mut det = T::zero();
    for col in 0..n {
        det = det + sign::<T>(col) * g[(0, col)] * det_rec(&minor(g, 0, col));
    }
    det
}

impl<T: Scalar> Matrix<T> {
    fn require_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                nrows: self.nrows(),
                ncols: self.ncols(),
            });
        }
        Ok(())
    }

    /// Sum of the diagonal, accumulated from zero.
    ///
    /// Fails with [`Error::NotSquare`] on a rectangular matrix.
    ///
    /// ```
    /// use matra::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
    /// assert_eq!(m.trace().unwrap(), 5);
    /// ```
    pub fn trace(&self) -> Result<T> {
        self.require_square()?;
        let mut sum = T::zero();
        for i in 0..self.nrows() {
            sum = sum + self.grid[(i, i)];
        }
        Ok(sum)
    }

    /// Non-negative integer matrix power.
    ///
    /// `pow(0)` is the identity; `pow(n)` multiplies the identity by
    /// `self` exactly `n` times in sequence. The linear-in-`n` cost is
    /// part of the contract, so this does not use repeated squaring.
    /// Fails with [`Error::NotSquare`] or, for negative exponents,
    /// [`Error::InvalidExponent`].
    ///
    /// ```
    /// use matra::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1, 1, 0, 1]);
    /// let m3 = m.pow(3).unwrap();
    /// assert_eq!(m3[(0, 1)], 3);
    /// ```
    pub fn pow(&self, power: i32) -> Result<Self> {
        self.require_square()?;
        if power < 0 {
            return Err(Error::InvalidExponent { power });
        }
        let mut result = Self::identity(self.nrows());
        for _ in 0..power {
            result = result.checked_mul(self)?;
        }
        Ok(result)
    }

    /// Determinant by recursive cofactor expansion.
    ///
    /// Fails with [`Error::NotSquare`] on a rectangular matrix.
    /// Exponential time in the matrix size.
    ///
    /// ```
    /// use matra::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
    /// assert_eq!(m.det().unwrap(), -2);
    /// ```
    pub fn det(&self) -> Result<T> {
        self.require_square()?;
        Ok(det_rec(&self.grid))
    }

    /// Adjugate (transpose of the cofactor matrix).
    ///
    /// Writes each signed minor determinant to the transposed position:
    /// `out[(col, row)] = (-1)^(row + col) * det(minor(row, col))`.
    /// Fails with [`Error::NotSquare`] on a rectangular matrix.
    ///
    /// ```
    /// use matra::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
    /// let adj = m.adjugate().unwrap();
    /// assert_eq!(adj, Matrix::from_rows(2, 2, &[4, -2, -3, 1]));
    /// ```
    pub fn adjugate(&self) -> Result<Self> {
        self.require_square()?;
        let n = self.nrows();
        let mut grid = Grid::new(n, n);
        for row in 0..n {
            for col in 0..n {
                grid[(col, row)] = sign::<T>(row + col) * det_rec(&minor(&self.grid, row, col));
            }
        }
        Ok(Self::wrap(grid))
    }

    /// Inverse via the adjugate, or `None` for a singular matrix.
    ///
    /// Singularity (zero determinant) is a normal empty outcome, not an
    /// error; only non-squareness fails.
    ///
    /// ```
    /// use matra::Matrix;
    ///
    /// let m = Matrix::from_rows(2, 2, &[2.0, 1.0, 1.0, 1.0]);
    /// let inv = m.invert().unwrap().unwrap();
    /// assert_eq!(&m * &inv, Matrix::identity(2));
    ///
    /// // Proportional rows: no inverse exists.
    /// let s = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    /// assert!(s.invert().unwrap().is_none());
    /// ```
    pub fn invert(&self) -> Result<Option<Self>> {
        self.require_square()?;
        let det = det_rec(&self.grid);
        if det == T::zero() {
            return Ok(None);
        }
        Ok(Some(self.adjugate()?.scalar_div(det)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace() {
        let m = Matrix::from_rows(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m.trace().unwrap(), 15);
    }

    #[test]
    fn trace_not_square() {
        let m = Matrix::<i32>::new(2, 3);
        assert_eq!(
            m.trace(),
            Err(Error::NotSquare { nrows: 2, ncols: 3 })
        );
    }

    #[test]
    fn det_2x2() {
        let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
        assert_eq!(m.det().unwrap(), -2);
    }

    #[test]
    fn det_3x3() {
        let m = Matrix::from_rows(3, 3, &[6, 1, 1, 4, -2, 5, 2, 8, 7]);
        assert_eq!(m.det().unwrap(), -306);
    }

    #[test]
    fn det_unsigned_nonnegative_base_case() {
        // Unsigned scalars are fine as long as no cofactor subtraction
        // dips below zero; see the module docs for the boundary.
        let m = Matrix::from_rows(2, 2, &[3_u32, 1, 1, 2]);
        assert_eq!(m.det().unwrap(), 5);
    }

    #[test]
    fn det_4x4_identity() {
        let id = Matrix::<i64>::identity(4);
        assert_eq!(id.det().unwrap(), 1);
    }

    #[test]
    fn det_1x1_is_the_element() {
        let m = Matrix::from_rows(1, 1, &[7]);
        assert_eq!(m.det().unwrap(), 7);
    }

    #[test]
    fn det_transpose_invariant() {
        let m = Matrix::from_rows(3, 3, &[2, -1, 0, 3, 5, 1, 0, 4, 2]);
        assert_eq!(m.det().unwrap(), m.transpose().det().unwrap());
    }

    #[test]
    fn det_not_square() {
        let m = Matrix::<f64>::new(2, 3);
        assert!(m.det().is_err());
    }

    #[test]
    fn adjugate_transposes_cofactors() {
        let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
        // Cofactor matrix is [[4, -3], [-2, 1]]; the adjugate is its
        // transpose.
        assert_eq!(
            m.adjugate().unwrap(),
            Matrix::from_rows(2, 2, &[4, -2, -3, 1])
        );
    }

    #[test]
    fn adjugate_3x3() {
        let m = Matrix::from_rows(3, 3, &[1, 0, 2, 0, 1, 0, 3, 0, 4]);
        let adj = m.adjugate().unwrap();
        // A * adj(A) == det(A) * I
        let det = m.det().unwrap();
        let scaled_id = Matrix::identity(3).scalar_mul(det);
        assert_eq!(m.checked_mul(&adj).unwrap(), scaled_id);
    }

    #[test]
    fn invert_round_trip() {
        let m = Matrix::<f64>::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
        let inv = m.invert().unwrap().unwrap();
        let prod = &m * &inv;
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((prod[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn invert_singular_is_none() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(m.invert(), Ok(None));
    }

    #[test]
    fn invert_not_square_is_error() {
        let m = Matrix::<f64>::new(2, 3);
        assert!(m.invert().is_err());
    }

    #[test]
    fn invert_1x1() {
        let m = Matrix::from_rows(1, 1, &[4.0]);
        let inv = m.invert().unwrap().unwrap();
        assert_eq!(inv[(0, 0)], 0.25);
    }

    #[test]
    fn pow_zero_is_identity() {
        let m = Matrix::from_rows(2, 2, &[2, 0, 0, 2]);
        assert_eq!(m.pow(0).unwrap(), Matrix::identity(2));
    }

    #[test]
    fn pow_repeated_multiplication() {
        let m = Matrix::from_rows(2, 2, &[1, 1, 0, 1]);
        let m5 = m.pow(5).unwrap();
        assert_eq!(m5[(0, 1)], 5);
    }

    #[test]
    fn pow_negative_rejected() {
        let m = Matrix::<i32>::identity(2);
        assert_eq!(m.pow(-1), Err(Error::InvalidExponent { power: -1 }));
    }

    #[test]
    fn pow_not_square() {
        let m = Matrix::<i32>::new(2, 3);
        assert!(m.pow(2).is_err());
    }
}
