use crate::core::data::point::Point;
use std::error::Error;

/// A per-pixel computation with no shared mutable state, safe to evaluate
/// for many pixels concurrently.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
