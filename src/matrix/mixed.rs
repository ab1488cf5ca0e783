//! Mixed-scalar matrix arithmetic.
//!
//! Products and sums between a matrix of any [`Scalar`] and a matrix of
//! `f64` promote the non-floating operand elementwise (checked) and
//! then run the standard operation in the written operand order. For
//! the `f64`-first product use promotion directly:
//! `a.checked_mul(&b.to_f64()?)`.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::traits::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Promote every element to `f64` with a checked conversion.
    ///
    /// Fails with [`Error::CastOverflow`] when an element cannot be
    /// represented.
    pub fn to_f64(&self) -> Result<Matrix<f64>> {
        Ok(Matrix::wrap(self.grid.to_f64()?))
    }

    /// Promoting product: `self * rhs` with `self` promoted to `f64`.
    ///
    /// The dimension rule matches [`checked_mul`](Matrix::checked_mul):
    /// fails with [`Error::DimensionMismatch`] when
    /// `self.ncols() != rhs.nrows()`.
    ///
    /// ```
    /// use matra::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
    /// let b = Matrix::from_rows(2, 2, &[0.5, 0.0, 0.0, 0.5]);
    /// let c = a.mul_f64(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 0.5);
    /// assert_eq!(c[(1, 1)], 2.0);
    /// ```
    pub fn mul_f64(&self, rhs: &Matrix<f64>) -> Result<Matrix<f64>> {
        if self.ncols() != rhs.nrows() {
            return Err(Error::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        self.to_f64()?.checked_mul(rhs)
    }

    /// Promoting sum: `self + rhs` with `self` promoted to `f64`.
    pub fn add_f64(&self, rhs: &Matrix<f64>) -> Result<Matrix<f64>> {
        Ok(Matrix::wrap(self.grid.add_f64(&rhs.grid)?))
    }

    /// Promoting difference: `self - rhs` with `self` promoted to `f64`.
    pub fn sub_f64(&self, rhs: &Matrix<f64>) -> Result<Matrix<f64>> {
        Ok(Matrix::wrap(self.grid.sub_f64(&rhs.grid)?))
    }
}
