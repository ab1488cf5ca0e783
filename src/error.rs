//! Error type shared by all fallible operations.

use core::fmt;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure conditions for matrix and vector operations.
///
/// Every check runs before the operation allocates its result, so a
/// failing call leaves its operands untouched. Singularity is *not* an
/// error: [`Matrix::invert`](crate::Matrix::invert) reports it as
/// `Ok(None)`.
///
/// # Example
///
/// ```
/// use matra::{Error, Matrix};
///
/// let a = Matrix::<f64>::new(2, 3);
/// let b = Matrix::<f64>::new(2, 3);
/// let err = a.checked_mul(&b).unwrap_err();
/// assert_eq!(
///     err,
///     Error::DimensionMismatch { left: (2, 3), right: (2, 3) }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Elementwise operation on containers of differing shapes.
    ShapeMismatch {
        /// Shape `(rows, cols)` of the left operand.
        left: (usize, usize),
        /// Shape `(rows, cols)` of the right operand.
        right: (usize, usize),
    },
    /// Product whose inner dimensions disagree.
    DimensionMismatch {
        /// Shape of the left operand.
        left: (usize, usize),
        /// Shape of the right operand.
        right: (usize, usize),
    },
    /// Square-only operation requested on a rectangular matrix.
    NotSquare {
        /// Rows of the offending matrix.
        nrows: usize,
        /// Columns of the offending matrix.
        ncols: usize,
    },
    /// Negative matrix exponent.
    InvalidExponent {
        /// The rejected exponent.
        power: i32,
    },
    /// Scalar division by the additive identity, or normalization of a
    /// zero vector.
    DivisionByZero,
    /// Element, row, or column access outside the container bounds.
    IndexOutOfRange {
        /// Requested `(row, col)` position.
        index: (usize, usize),
        /// Shape of the container.
        shape: (usize, usize),
    },
    /// Construction that cannot yield a well-formed container, e.g. a
    /// vector with more than one column or a jagged constructor with no
    /// usable rows.
    InvalidShape {
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },
    /// Checked numeric conversion failed (promotion to `f64` or the
    /// norm's round trip back into the scalar type).
    CastOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::ShapeMismatch { left, right } => write!(
                f,
                "shape mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Error::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} * {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Error::NotSquare { nrows, ncols } => {
                write!(f, "operation requires a square matrix, got {}x{}", nrows, ncols)
            }
            Error::InvalidExponent { power } => {
                write!(f, "matrix exponent must be non-negative, got {}", power)
            }
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::IndexOutOfRange { index, shape } => write!(
                f,
                "index ({}, {}) out of range for {}x{}",
                index.0, index.1, shape.0, shape.1
            ),
            Error::InvalidShape { reason } => write!(f, "invalid shape: {}", reason),
            Error::CastOverflow => write!(f, "numeric conversion overflowed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shape_mismatch() {
        let e = Error::ShapeMismatch {
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(format!("{}", e), "shape mismatch: 2x3 vs 3x2");
    }

    #[test]
    fn display_not_square() {
        let e = Error::NotSquare { nrows: 2, ncols: 3 };
        assert_eq!(
            format!("{}", e),
            "operation requires a square matrix, got 2x3"
        );
    }

    #[test]
    fn display_index_out_of_range() {
        let e = Error::IndexOutOfRange {
            index: (4, 0),
            shape: (3, 1),
        };
        assert_eq!(format!("{}", e), "index (4, 0) out of range for 3x1");
    }
}
