use std::convert::Infallible;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::EscapeEngineError;

/// Escape bound compared against `|z|` (the modulus itself, not its square).
pub const ESCAPE_RADIUS: f64 = 4.0;

/// Number of iterations of `z <- z² + c`, starting from `z = 0`, before the
/// freshly computed `z` reaches [`ESCAPE_RADIUS`].
///
/// The count is zero-based on the iteration that produced the escaping value.
/// Returns `max_cycles` when no escape happens within `max_cycles` iterations.
#[must_use]
pub fn escape_time(c: Complex, max_cycles: u32) -> u32 {
    let mut last = Complex::ZERO;

    for cycle in 0..max_cycles {
        let z = last * last + c;
        if z.magnitude() >= ESCAPE_RADIUS {
            return cycle;
        }
        last = z;
    }

    max_cycles
}

/// Maps a pixel onto the complex plane by per-axis linear interpolation.
///
/// Coordinates are divided by `width`/`height`, not `width - 1`/`height - 1`:
/// pixel `(0, 0)` lands exactly on `bottom_left`, while the last column and row
/// stop one pixel short of `top_right`.
#[must_use]
pub fn sample_point(pixel: Point, region: ComplexRegion, size: PixelSize) -> Complex {
    let bottom_left = region.bottom_left();
    let top_right = region.top_right();

    let real = (top_right.real - bottom_left.real) * (f64::from(pixel.x) / f64::from(size.width()))
        + bottom_left.real;
    let imag = (top_right.imag - bottom_left.imag)
        * (f64::from(pixel.y) / f64::from(size.height()))
        + bottom_left.imag;

    Complex { real, imag }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    region: ComplexRegion,
    size: PixelSize,
    max_cycles: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(
        region: ComplexRegion,
        size: PixelSize,
        max_cycles: u32,
    ) -> Result<Self, EscapeEngineError> {
        if max_cycles == 0 {
            return Err(EscapeEngineError::ZeroMaxCycles);
        }

        Ok(Self {
            region,
            size,
            max_cycles,
        })
    }

    #[must_use]
    pub fn region(&self) -> ComplexRegion {
        self.region
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn max_cycles(&self) -> u32 {
        self.max_cycles
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = sample_point(pixel, self.region, self.size);
        Ok(escape_time(c, self.max_cycles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_region() -> ComplexRegion {
        ComplexRegion::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap()
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO, 1000), 1000);
    }

    #[test]
    fn test_minus_two_stays_bounded() {
        // z settles at 2, which never reaches |z| >= 4
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 255), 255);
    }

    #[test]
    fn test_two_escapes_on_second_iteration() {
        // z1 = 2 (|z| < 4), z2 = 6
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 255), 1);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        assert_eq!(escape_time(Complex::new(4.0, 0.0), 255), 0);
        assert_eq!(escape_time(Complex::new(0.0, -5.0), 255), 0);
    }

    #[test]
    fn test_escape_threshold_is_inclusive() {
        // z1 = 4 exactly
        assert_eq!(escape_time(Complex::new(4.0, 0.0), 1), 0);
        assert_eq!(escape_time(Complex::new(3.9, 0.0), 1), 1);
    }

    #[test]
    fn test_one_escapes_after_three_iterations() {
        // z: 1, 2, 5
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 50), 2);
    }

    #[test]
    fn test_escape_time_never_exceeds_max_cycles() {
        for max_cycles in [1, 2, 10] {
            assert!(escape_time(Complex::new(-0.5, 0.1), max_cycles) <= max_cycles);
        }
    }

    #[test]
    fn test_sample_point_first_pixel_is_bottom_left() {
        let size = PixelSize::new(100, 50).unwrap();

        let c = sample_point(Point { x: 0, y: 0 }, default_region(), size);

        assert_eq!(c, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_sample_point_one_past_last_pixel_is_top_right() {
        let size = PixelSize::new(100, 50).unwrap();

        let c = sample_point(Point { x: 100, y: 50 }, default_region(), size);

        assert_eq!(c, Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_sample_point_last_pixel_stays_inside_region() {
        let size = PixelSize::new(100, 50).unwrap();

        let c = sample_point(Point { x: 99, y: 49 }, default_region(), size);

        assert!(c.real < 1.0);
        assert!(c.imag < 1.0);
        assert!((c.real - 0.97).abs() < 1e-12);
        assert!((c.imag - 0.96).abs() < 1e-12);
    }

    #[test]
    fn test_algorithm_rejects_zero_max_cycles() {
        let size = PixelSize::new(10, 10).unwrap();

        let result = MandelbrotAlgorithm::new(default_region(), size, 0);

        assert_eq!(result, Err(EscapeEngineError::ZeroMaxCycles));
    }

    #[test]
    fn test_algorithm_computes_escape_time_of_sample() {
        let size = PixelSize::new(3, 2).unwrap();
        let algorithm = MandelbrotAlgorithm::new(default_region(), size, 20).unwrap();

        // pixel (1, 1) samples -1 + 0i, inside the period-2 bulb
        assert_eq!(algorithm.compute(Point { x: 1, y: 1 }), Ok(20));
    }
}
