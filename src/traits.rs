use core::fmt::Debug;
use num_traits::{Num, NumCast, One, Zero};

/// Trait for types that can be used as matrix and vector elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all fixed-width integer types.
///
/// The [`NumCast`] bound supplies the checked conversions to and from
/// `f64` needed by [`Vector::norm`](crate::Vector::norm) and by the
/// mixed-scalar promotion operations; everything else only uses the
/// ring operations plus the `zero`/`one` identities.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num + NumCast {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num + NumCast> Scalar for T {}
