//! Numeric abstraction over edge weights.

use std::fmt::Debug;
use std::ops::Add;

use num_traits::{ToPrimitive, Zero};

/// Scalar type usable as an edge weight: non-negative, totally ordered, additive.
///
/// Implemented for the usual unsigned integers and for `f32`/`f64`. Overlap
/// ratios are always compared in `f64`, so the type must expose a lossy float
/// view through [ToPrimitive].
pub trait Weight:
    Copy + Debug + Default + PartialOrd + Add<Output = Self> + Zero + ToPrimitive + 'static
{
    /// Lossy `f64` view of the weight, used when comparing overlap ratios.
    fn to_ratio(self) -> f64 {
        self.to_f64().unwrap_or(f64::INFINITY)
    }
}

impl<T> Weight for T where
    T: Copy + Debug + Default + PartialOrd + Add<Output = Self> + Zero + ToPrimitive + 'static
{
}
