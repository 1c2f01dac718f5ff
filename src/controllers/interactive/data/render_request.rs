use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::pixel_size::PixelSize;

/// Snapshot of everything one render needs.
///
/// `PartialEq` lets the shell skip submitting a request identical to the
/// previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub region: ComplexRegion,
    pub size: PixelSize,
    pub max_cycles: u32,
}
