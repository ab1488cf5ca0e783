use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::traits::Scalar;

use super::Matrix;

// ── Checked arithmetic ──────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Elementwise sum. Fails with [`Error::ShapeMismatch`] when the
    /// shapes differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::wrap(self.grid.checked_add(&rhs.grid)?))
    }

    /// Elementwise difference. Fails with [`Error::ShapeMismatch`] when
    /// the shapes differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(Self::wrap(self.grid.checked_sub(&rhs.grid)?))
    }

    /// Multiply every element by `scalar`.
    pub fn scalar_mul(&self, scalar: T) -> Self {
        Self::wrap(self.grid.scalar_mul(scalar))
    }

    /// Divide every element by `scalar`. Fails with
    /// [`Error::DivisionByZero`] on a zero scalar.
    pub fn scalar_div(&self, scalar: T) -> Result<Self> {
        Ok(Self::wrap(self.grid.scalar_div(scalar)?))
    }

    /// Matrix product: `(M x N) * (N x P) -> (M x P)`.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the inner
    /// dimensions disagree. The canonical triple loop, each element
    /// accumulated left to right from `T::zero()`; no blocking, no
    /// parallelism.
    ///
    /// ```
    /// use matra::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
    /// let b = Matrix::from_rows(2, 2, &[5, 6, 7, 8]);
    /// let c = a.checked_mul(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 19);
    /// assert_eq!(c[(1, 1)], 50);
    /// ```
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        if self.ncols() != rhs.nrows() {
            return Err(Error::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let m = self.nrows();
        let n = self.ncols();
        let p = rhs.ncols();
        let mut grid = Grid::new(m, p);
        for i in 0..m {
            for j in 0..p {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = acc + self.grid[(i, k)] * rhs.grid[(k, j)];
                }
                grid[(i, j)] = acc;
            }
        }
        Ok(Self::wrap(grid))
    }

    /// Transpose: `(M x N) -> (N x M)` with `out[j][i] = self[i][j]`.
    ///
    /// ```
    /// use matra::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 0)], 3);
    /// assert_eq!(t[(0, 1)], 4);
    /// ```
    pub fn transpose(&self) -> Self {
        let g = &self.grid;
        Self::wrap(Grid::from_fn(self.ncols(), self.nrows(), |i, j| g[(j, i)]))
    }
}

// ── Operator impls (panic on misuse, like slice indexing) ───────────

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.checked_add(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.checked_sub(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.checked_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scalar_mul(rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.scalar_mul(rhs)
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        match self.scalar_div(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        &self / rhs
    }
}

/// Additive inverse of every element. Meaningful for signed and float
/// scalars; for unsigned scalars the subtraction below zero wraps in
/// release builds and panics in debug builds.
impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix::wrap(self.grid.map(|x| T::zero() - x))
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        -&self
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.scalar_mul(self)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.scalar_mul(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply() {
        let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = Matrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let c = &a * &b;
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c[(0, 0)], 58.0);
        assert_eq!(c[(0, 1)], 64.0);
        assert_eq!(c[(1, 0)], 139.0);
        assert_eq!(c[(1, 1)], 154.0);
    }

    #[test]
    fn multiply_dimension_mismatch() {
        let a = Matrix::<i32>::new(2, 3);
        let b = Matrix::<i32>::new(2, 2);
        assert_eq!(
            a.checked_mul(&b),
            Err(Error::DimensionMismatch {
                left: (2, 3),
                right: (2, 2)
            })
        );
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn multiply_operator_panics() {
        let a = Matrix::<i32>::new(2, 3);
        let b = Matrix::<i32>::new(2, 2);
        let _ = &a * &b;
    }

    #[test]
    fn identity_laws() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let id = Matrix::identity(2);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    #[test]
    fn add_sub_operators() {
        let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
        let b = Matrix::from_rows(2, 2, &[5, 6, 7, 8]);
        assert_eq!(&a + &b, Matrix::from_rows(2, 2, &[6, 8, 10, 12]));
        assert_eq!(&b - &a, Matrix::from_rows(2, 2, &[4, 4, 4, 4]));
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn add_operator_panics_on_shape() {
        let a = Matrix::<i32>::new(2, 3);
        let b = Matrix::<i32>::new(3, 2);
        let _ = &a + &b;
    }

    #[test]
    fn scalar_operators() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(&a * 2.0, Matrix::from_rows(2, 2, &[2.0, 4.0, 6.0, 8.0]));
        assert_eq!(2.0 * &a, &a * 2.0);
        assert_eq!(&a / 2.0, Matrix::from_rows(2, 2, &[0.5, 1.0, 1.5, 2.0]));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_operator_panics_on_zero() {
        let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
        let _ = &a / 0;
    }

    #[test]
    fn neg() {
        let a = Matrix::from_rows(1, 3, &[1, -2, 3]);
        assert_eq!(-&a, Matrix::from_rows(1, 3, &[-1, 2, -3]));
    }

    #[test]
    fn transpose_involution() {
        let a = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn pure_value_semantics() {
        let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
        let b = Matrix::from_rows(2, 2, &[5, 6, 7, 8]);
        let _ = &a + &b;
        let _ = &a * &b;
        assert_eq!(a, Matrix::from_rows(2, 2, &[1, 2, 3, 4]));
        assert_eq!(b, Matrix::from_rows(2, 2, &[5, 6, 7, 8]));
    }
}
