//! # matra
//!
//! Generic dense matrix and vector arithmetic over any numeric scalar,
//! no-std compatible (requires `alloc`). Determinants, adjugates, and
//! inverses use exact cofactor expansion, so integer matrices stay in
//! integer arithmetic end to end.
//!
//! ## Quick start
//!
//! ```
//! use matra::{Matrix, Vector};
//!
//! // Fibonacci companion matrix: powers generate the sequence.
//! let f = Matrix::from_rows(2, 2, &[0_i64, 1, 1, 1]);
//! let start = Vector::from_slice(&[0_i64, 1]);
//! let fib10 = f.pow(9).unwrap().mul_vector(&start).unwrap();
//! assert_eq!(fib10[0], 34);
//!
//! // Exact inverse of a float matrix.
//! let a = Matrix::from_rows(2, 2, &[2.0, 1.0, 1.0, 1.0]);
//! let inv = a.invert().unwrap().expect("not singular");
//! assert_eq!(&a * &inv, Matrix::identity(2));
//! ```
//!
//! ## Modules
//!
//! - [`grid`] — [`Grid<T>`]: the shared rectangular container. Heap
//!   `Vec<T>` row-major storage with runtime dimensions, equality,
//!   elementwise add/subtract, scalar multiply/divide, `f64` promotion,
//!   and row/column extraction.
//!
//! - [`matrix`] — [`Matrix<T>`]: a `Grid` plus squareness tracking.
//!   Matrix product, integer power, transpose, trace, determinant,
//!   adjugate, inverse (singularity reported as `Ok(None)`), identity
//!   factory, and mixed-scalar products against `Matrix<f64>`.
//!
//! - [`vector`] — [`Vector<T>`]: a single-column matrix by composition.
//!   Component indexing, matrix-vector product, Euclidean norm with the
//!   sum-exact/sqrt-in-`f64` precision path, and normalization.
//!
//! - [`error`] — the [`Error`] taxonomy and the crate [`Result`] alias.
//!   Checked methods return `Result`; operator impls delegate to them
//!   and panic on misuse.
//!
//! - [`traits`] — the [`Scalar`] element bound
//!   (`num-traits`: `Zero + One + Num + NumCast`).
//!
//! All operations are pure: operands are never mutated and every result
//! owns freshly allocated storage, so independent calls are safe to run
//! from multiple threads without locking.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm; `std::error::Error` impl |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod aliases;
pub mod error;
pub mod grid;
pub mod matrix;
pub mod traits;
pub mod vector;

pub use aliases::*;
pub use error::{Error, Result};
pub use grid::Grid;
pub use matrix::Matrix;
pub use traits::Scalar;
pub use vector::Vector;
