use std::path::PathBuf;

use crate::core::data::complex::Complex;
use crate::core::data::complex_region::ComplexRegion;

pub const DEFAULT_WIDTH: u32 = 20_000;
pub const DEFAULT_HEIGHT: u32 = 16_000;
pub const DEFAULT_MAX_CYCLES: u32 = 1000;
pub const DEFAULT_OUTPUT_PATH: &str = "output.bmp";
pub const DEFAULT_BOTTOM_LEFT: Complex = Complex::new(-2.0, -1.0);
pub const DEFAULT_TOP_RIGHT: Complex = Complex::new(0.5, 1.0);

pub(crate) fn default_region() -> ComplexRegion {
    ComplexRegion::new(DEFAULT_BOTTOM_LEFT, DEFAULT_TOP_RIGHT)
        .expect("default batch region is valid")
}

/// Parameters of a one-shot render to an image file.
///
/// The defaults reproduce the classic poster render: 20000x16000 pixels of
/// the region (-2, -1)..(0.5, 1) at 1000 cycles, saved as `output.bmp`.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    pub width: u32,
    pub height: u32,
    pub region: ComplexRegion,
    pub max_cycles: u32,
    pub output_path: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            region: default_region(),
            max_cycles: DEFAULT_MAX_CYCLES,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_poster_render() {
        let config = BatchConfig::default();

        assert_eq!(config.width, 20_000);
        assert_eq!(config.height, 16_000);
        assert_eq!(config.max_cycles, 1000);
        assert_eq!(config.region.bottom_left(), Complex::new(-2.0, -1.0));
        assert_eq!(config.region.top_right(), Complex::new(0.5, 1.0));
        assert_eq!(config.output_path, PathBuf::from("output.bmp"));
    }
}
