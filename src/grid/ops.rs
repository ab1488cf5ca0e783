use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::Grid;

// ── Elementwise addition / subtraction ──────────────────────────────

impl<T: Scalar> Grid<T> {
    fn check_shape(&self, rhs: &Self) -> Result<()> {
        if self.shape() != rhs.shape() {
            return Err(Error::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(())
    }

    /// Elementwise sum. Fails with [`Error::ShapeMismatch`] when the
    /// shapes differ.
    ///
    /// ```
    /// use matra::Grid;
    /// let a = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
    /// let b = Grid::from_rows(2, 2, &[5, 6, 7, 8]);
    /// let c = a.checked_add(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 6);
    /// assert_eq!(c[(1, 1)], 12);
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.check_shape(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Grid {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Elementwise difference. Fails with [`Error::ShapeMismatch`] when
    /// the shapes differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.check_shape(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Grid {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Multiply every element by `scalar`.
    ///
    /// ```
    /// use matra::Grid;
    /// let g = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
    /// let h = g.scalar_mul(3);
    /// assert_eq!(h[(1, 1)], 12);
    /// ```
    pub fn scalar_mul(&self, scalar: T) -> Self {
        let data = self.data.iter().map(|&x| x * scalar).collect();
        Grid {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Divide every element by `scalar`. Fails with
    /// [`Error::DivisionByZero`] when `scalar` is the additive identity.
    ///
    /// ```
    /// use matra::{Error, Grid};
    /// let g = Grid::from_rows(2, 2, &[2.0, 4.0, 6.0, 8.0]);
    /// let h = g.scalar_div(2.0).unwrap();
    /// assert_eq!(h[(1, 1)], 4.0);
    /// assert_eq!(g.scalar_div(0.0), Err(Error::DivisionByZero));
    /// ```
    pub fn scalar_div(&self, scalar: T) -> Result<Self> {
        if scalar == T::zero() {
            return Err(Error::DivisionByZero);
        }
        let data = self.data.iter().map(|&x| x / scalar).collect();
        Ok(Grid {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Grid::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Grid::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let c = a.checked_add(&b).unwrap();
        assert_eq!(c[(0, 1)], 8.0);

        let d = b.checked_sub(&a).unwrap();
        assert_eq!(d, Grid::from_rows(2, 2, &[4.0, 4.0, 4.0, 4.0]));
    }

    #[test]
    fn add_shape_mismatch() {
        let a = Grid::<i32>::new(2, 3);
        let b = Grid::<i32>::new(3, 2);
        assert_eq!(
            a.checked_add(&b),
            Err(Error::ShapeMismatch {
                left: (2, 3),
                right: (3, 2)
            })
        );
        assert!(a.checked_sub(&b).is_err());
    }

    #[test]
    fn operands_unchanged_on_failure() {
        let a = Grid::from_rows(1, 2, &[1, 2]);
        let b = Grid::from_rows(2, 1, &[3, 4]);
        let _ = a.checked_add(&b);
        assert_eq!(a, Grid::from_rows(1, 2, &[1, 2]));
        assert_eq!(b, Grid::from_rows(2, 1, &[3, 4]));
    }

    #[test]
    fn scalar_mul() {
        let g = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
        let h = g.scalar_mul(2);
        assert_eq!(h, Grid::from_rows(2, 2, &[2, 4, 6, 8]));
    }

    #[test]
    fn scalar_div() {
        let g = Grid::from_rows(2, 2, &[2.0, 4.0, 6.0, 8.0]);
        let h = g.scalar_div(2.0).unwrap();
        assert_eq!(h, Grid::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn scalar_div_by_zero() {
        let g = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
        assert_eq!(g.scalar_div(0), Err(Error::DivisionByZero));
    }

    #[test]
    fn integer_division_truncates_like_the_scalar() {
        let g = Grid::from_rows(1, 3, &[7, 8, 9]);
        let h = g.scalar_div(2).unwrap();
        assert_eq!(h, Grid::from_rows(1, 3, &[3, 4, 4]));
    }
}
