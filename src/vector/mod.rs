mod norm;

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::traits::Scalar;

/// Single-column vector over any [`Scalar`].
///
/// Wraps an `n x 1` [`Matrix`] by composition rather than inheritance,
/// so the one-column invariant is checked on every construction path
/// and can never be violated by a shape-changing operation. Elements
/// are indexed by a single 0-based component index.
///
/// # Examples
///
/// ```
/// use matra::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert_eq!(v[1], 4.0);
/// assert_eq!(v.norm().unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    pub(crate) inner: Matrix<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Create a zero vector with `n` components.
    ///
    /// ```
    /// use matra::Vector;
    /// let v = Vector::<f64>::new(4);
    /// assert_eq!(v.len(), 4);
    /// assert_eq!(v[3], 0.0);
    /// ```
    pub fn new(n: usize) -> Self {
        Self {
            inner: Matrix::new(n, 1),
        }
    }

    /// Create a vector from a slice, copying the data.
    ///
    /// ```
    /// use matra::Vector;
    /// let v = Vector::from_slice(&[1, 2, 3]);
    /// assert_eq!(v[0], 1);
    /// assert_eq!(v.len(), 3);
    /// ```
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            inner: Matrix::from_rows(data.len(), 1, data),
        }
    }

    /// Create a vector from an owned `Vec`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_slice(&data)
    }

    /// Reinterpret a single-column matrix as a vector.
    ///
    /// Fails with [`Error::InvalidShape`] unless the matrix has exactly
    /// one column.
    ///
    /// ```
    /// use matra::{Matrix, Vector};
    /// let m = Matrix::from_rows(3, 1, &[1, 2, 3]);
    /// let v = Vector::from_matrix(m).unwrap();
    /// assert_eq!(v[2], 3);
    ///
    /// let wide = Matrix::<i32>::new(2, 2);
    /// assert!(Vector::from_matrix(wide).is_err());
    /// ```
    pub fn from_matrix(m: Matrix<T>) -> Result<Self> {
        if m.ncols() != 1 {
            return Err(Error::InvalidShape {
                reason: "a vector must have exactly one column",
            });
        }
        Ok(Self { inner: m })
    }

    /// Independent single-column [`Matrix`] copy of this vector.
    pub fn as_matrix(&self) -> Matrix<T> {
        self.inner.clone()
    }
}

// ── Shape and element access ────────────────────────────────────────

impl<T> Vector<T> {
    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.nrows()
    }

    /// Whether the vector has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.grid.as_slice()
    }

    /// Iterate over the components in order. The iterator is finite and
    /// a fresh call restarts from component 0.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Copy> Vector<T> {
    /// Bounds-checked component read.
    ///
    /// ```
    /// use matra::{Error, Vector};
    /// let v = Vector::from_slice(&[1, 2]);
    /// assert_eq!(v.get(1), Ok(2));
    /// assert_eq!(
    ///     v.get(2),
    ///     Err(Error::IndexOutOfRange { index: (2, 0), shape: (2, 1) })
    /// );
    /// ```
    pub fn get(&self, i: usize) -> Result<T> {
        self.inner.at(i, 0)
    }

    /// Bounds-checked component write.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        self.inner.set(i, 0, value)
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[(i, 0)]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(i, 0)]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Elementwise arithmetic ──────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Componentwise sum. Fails with [`Error::ShapeMismatch`] when the
    /// lengths differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self {
            inner: self.inner.checked_add(&rhs.inner)?,
        })
    }

    /// Componentwise difference. Fails with [`Error::ShapeMismatch`]
    /// when the lengths differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(Self {
            inner: self.inner.checked_sub(&rhs.inner)?,
        })
    }

    /// Multiply every component by `scalar`.
    pub fn scalar_mul(&self, scalar: T) -> Self {
        Self {
            inner: self.inner.scalar_mul(scalar),
        }
    }

    /// Divide every component by `scalar`. Fails with
    /// [`Error::DivisionByZero`] on a zero scalar.
    pub fn scalar_div(&self, scalar: T) -> Result<Self> {
        Ok(Self {
            inner: self.inner.scalar_div(scalar)?,
        })
    }
}

// ── Matrix-vector product ───────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Matrix-vector product: `(M x N) * (N) -> (M)`.
    ///
    /// Fails with [`Error::DimensionMismatch`] when
    /// `self.ncols() != v.len()`. The result length equals the number of
    /// matrix rows.
    ///
    /// ```
    /// use matra::{Matrix, Vector};
    /// let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// let v = Vector::from_slice(&[1, 0, 1]);
    /// let r = m.mul_vector(&v).unwrap();
    /// assert_eq!(r.len(), 2);
    /// assert_eq!(r[0], 4);
    /// assert_eq!(r[1], 10);
    /// ```
    pub fn mul_vector(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if self.ncols() != v.len() {
            return Err(Error::DimensionMismatch {
                left: self.shape(),
                right: (v.len(), 1),
            });
        }
        let mut out = Vector::new(self.nrows());
        for i in 0..self.nrows() {
            let mut acc = T::zero();
            for k in 0..self.ncols() {
                acc = acc + self.grid[(i, k)] * v[k];
            }
            out[i] = acc;
        }
        Ok(out)
    }
}

// ── Operator impls ──────────────────────────────────────────────────

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        match self.mul_vector(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Mul<Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        self * &rhs
    }
}

impl<T: Scalar> Add for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        match self.checked_add(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: Vector<T>) -> Vector<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: Vector<T>) -> Vector<T> {
        self + &rhs
    }
}

impl<T: Scalar> Sub for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        match self.checked_sub(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        self - &rhs
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.scalar_mul(rhs)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: T) -> Vector<T> {
        self.scalar_mul(rhs)
    }
}

impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Vector<T> {
        match self.scalar_div(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Vector<T>;
    fn div(self, rhs: T) -> Vector<T> {
        &self / rhs
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        Vector {
            inner: -&self.inner,
        }
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;
    fn neg(self) -> Vector<T> {
        -&self
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
