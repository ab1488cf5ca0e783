use num_traits::{Float, NumCast};

use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::Vector;

impl<T: Scalar> Vector<T> {
    /// Euclidean norm.
    ///
    /// The squares are summed in the scalar type, the sum is converted
    /// to `f64` for the square root, and the result is converted back
    /// into the scalar type. The two-step path is deliberate: for
    /// integer scalars the sum stays exact and only the root rounds,
    /// which is observable (`[3, 4]` has norm exactly `5`). Either
    /// conversion failing yields [`Error::CastOverflow`].
    ///
    /// ```
    /// use matra::Vector;
    /// let v = Vector::from_slice(&[3, 4]);
    /// assert_eq!(v.norm().unwrap(), 5);
    /// ```
    pub fn norm(&self) -> Result<T> {
        let mut sum = T::zero();
        for i in 0..self.len() {
            sum = sum + self[i] * self[i];
        }
        let sum_f = <f64 as NumCast>::from(sum).ok_or(Error::CastOverflow)?;
        let root = Float::sqrt(sum_f);
        <T as NumCast>::from(root).ok_or(Error::CastOverflow)
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`Error::DivisionByZero`] when the norm is the
    /// additive identity (the zero vector has no direction).
    ///
    /// ```
    /// use matra::Vector;
    /// let v = Vector::from_slice(&[3.0, 4.0]);
    /// let u = v.normalize().unwrap();
    /// assert_eq!(u[0], 0.6);
    /// assert_eq!(u[1], 0.8);
    /// ```
    pub fn normalize(&self) -> Result<Self> {
        self.scalar_div(self.norm()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_float() {
        let v = Vector::from_slice(&[3.0_f64, 4.0]);
        assert!((v.norm().unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn norm_reference_values() {
        let v = Vector::from_slice(&[1.5_f64, 100.0, 83.5, 10.0]);
        let expected = (1.5_f64 * 1.5 + 100.0 * 100.0 + 83.5 * 83.5 + 10.0 * 10.0).sqrt();
        let n = v.norm().unwrap();
        assert!((n - expected).abs() < 1e-12);
        assert!((n - 131.27).abs() < 0.01);
    }

    #[test]
    fn norm_integer_sums_exactly_then_rounds() {
        // 3-4-5 triangle: exact in integers.
        let v = Vector::from_slice(&[3_i64, 4]);
        assert_eq!(v.norm().unwrap(), 5);

        // Non-perfect square: sqrt(1 + 1) truncates back into i64.
        let w = Vector::from_slice(&[1_i64, 1]);
        assert_eq!(w.norm().unwrap(), 1);
    }

    #[test]
    fn normalize_unit_length() {
        let v = Vector::from_slice(&[1.5_f64, 100.0, 83.5, 10.0]);
        let u = v.normalize().unwrap();
        assert!((u.norm().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_vector_fails() {
        let v = Vector::<f64>::new(3);
        assert_eq!(v.normalize(), Err(Error::DivisionByZero));
    }

    #[test]
    fn normalize_direction() {
        let v = Vector::from_slice(&[3.0_f64, 4.0]);
        let u = v.normalize().unwrap();
        assert!((u[0] - 0.6).abs() < 1e-12);
        assert!((u[1] - 0.8).abs() < 1e-12);
    }
}
