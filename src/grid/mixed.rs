//! Cross-scalar-type arithmetic.
//!
//! A grid of any [`Scalar`] can be combined with a grid of `f64`: the
//! narrower operand is promoted elementwise with a checked conversion
//! and the usual same-shape operation runs on the promoted values. For
//! the `f64`-first operand order, promote explicitly and use the
//! same-type checked op: `a.checked_sub(&b.to_f64()?)`.

use num_traits::NumCast;

use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::Grid;

impl<T: Scalar> Grid<T> {
    /// Promote every element to `f64` with a checked conversion.
    ///
    /// Fails with [`Error::CastOverflow`] when the scalar type reports
    /// no `f64` image for an element. All primitive scalars convert
    /// (widening is lossy but total); the failure path exists for
    /// third-party [`Scalar`] types whose `to_f64` can decline.
    ///
    /// ```
    /// use matra::Grid;
    /// let g = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
    /// let f = g.to_f64().unwrap();
    /// assert_eq!(f[(1, 1)], 4.0);
    /// ```
    pub fn to_f64(&self) -> Result<Grid<f64>> {
        let mut data = alloc::vec::Vec::with_capacity(self.data.len());
        for &x in &self.data {
            match <f64 as NumCast>::from(x) {
                Some(v) => data.push(v),
                None => return Err(Error::CastOverflow),
            }
        }
        Ok(Grid {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Promoting sum: `self` (any scalar) plus an `f64` grid.
    ///
    /// Shape rules match [`checked_add`](Grid::checked_add).
    ///
    /// ```
    /// use matra::Grid;
    /// let a = Grid::from_rows(1, 2, &[1, 2]);
    /// let b = Grid::from_rows(1, 2, &[0.5, 0.25]);
    /// let c = a.add_f64(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 1.5);
    /// ```
    pub fn add_f64(&self, rhs: &Grid<f64>) -> Result<Grid<f64>> {
        if self.shape() != rhs.shape() {
            return Err(Error::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        self.to_f64()?.checked_add(rhs)
    }

    /// Promoting difference: `self` (any scalar) minus an `f64` grid.
    pub fn sub_f64(&self, rhs: &Grid<f64>) -> Result<Grid<f64>> {
        if self.shape() != rhs.shape() {
            return Err(Error::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        self.to_f64()?.checked_sub(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_f64() {
        let g = Grid::from_rows(2, 2, &[1i64, 2, 3, 4]);
        let f = g.to_f64().unwrap();
        assert_eq!(f, Grid::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn add_f64() {
        let a = Grid::from_rows(2, 2, &[1, 2, 3, 4]);
        let b = Grid::from_rows(2, 2, &[0.5, 0.5, 0.5, 0.5]);
        let c = a.add_f64(&b).unwrap();
        assert_eq!(c, Grid::from_rows(2, 2, &[1.5, 2.5, 3.5, 4.5]));
    }

    #[test]
    fn sub_f64_keeps_written_order() {
        let a = Grid::from_rows(1, 2, &[10, 20]);
        let b = Grid::from_rows(1, 2, &[1.0, 2.0]);
        let c = a.sub_f64(&b).unwrap();
        assert_eq!(c, Grid::from_rows(1, 2, &[9.0, 18.0]));
    }

    #[test]
    fn f64_first_order_via_promotion() {
        let a = Grid::from_rows(1, 2, &[1.0, 2.0]);
        let b = Grid::from_rows(1, 2, &[10, 20]);
        let c = a.checked_sub(&b.to_f64().unwrap()).unwrap();
        assert_eq!(c, Grid::from_rows(1, 2, &[-9.0, -18.0]));
    }

    #[test]
    fn mixed_shape_mismatch() {
        let a = Grid::from_rows(1, 2, &[1, 2]);
        let b = Grid::<f64>::new(2, 1);
        assert_eq!(
            a.add_f64(&b),
            Err(Error::ShapeMismatch {
                left: (1, 2),
                right: (2, 1)
            })
        );
    }
}
