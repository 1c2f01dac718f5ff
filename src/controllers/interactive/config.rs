use crate::core::data::complex::Complex;
use crate::core::data::complex_region::ComplexRegion;

pub const DEFAULT_MAX_CYCLES: u32 = 255;
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

pub(crate) fn default_region() -> ComplexRegion {
    ComplexRegion::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0))
        .expect("default viewer region is valid")
}

/// Start-up settings of the interactive viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub initial_region: ComplexRegion,
    pub max_cycles: u32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_region: default_region(),
            max_cycles: DEFAULT_MAX_CYCLES,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}
