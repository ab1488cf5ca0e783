//! Pre-defined type aliases for common `Matrix` and `Vector` element types.
//!
//! The unsigned aliases cover construction, products, and elementwise
//! arithmetic; negation and the cofactor routines (`det`, `adjugate`,
//! `invert`) subtract below zero and expect signed or float elements.

use crate::{Matrix, Vector};

// ── Matrix scalar aliases ───────────────────────────────────────────

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// Matrix with `i32` elements.
pub type Matrixi32 = Matrix<i32>;
/// Matrix with `i64` elements.
pub type Matrixi64 = Matrix<i64>;
/// Matrix with `i128` elements.
pub type Matrixi128 = Matrix<i128>;
/// Matrix with `u32` elements.
pub type Matrixu32 = Matrix<u32>;
/// Matrix with `u64` elements.
pub type Matrixu64 = Matrix<u64>;

// ── Vector scalar aliases ───────────────────────────────────────────

/// Vector with `f32` elements.
pub type Vectorf32 = Vector<f32>;
/// Vector with `f64` elements.
pub type Vectorf64 = Vector<f64>;
/// Vector with `i32` elements.
pub type Vectori32 = Vector<i32>;
/// Vector with `i64` elements.
pub type Vectori64 = Vector<i64>;
/// Vector with `i128` elements.
pub type Vectori128 = Vector<i128>;
/// Vector with `u32` elements.
pub type Vectoru32 = Vector<u32>;
/// Vector with `u64` elements.
pub type Vectoru64 = Vector<u64>;
