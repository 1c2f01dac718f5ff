use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRegionError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex region size must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRegionError {}

/// Axis-aligned rectangle of the complex plane.
///
/// Always non-degenerate: `top_right` lies strictly above and to the right of
/// `bottom_left`, and both extents are finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRegion {
    bottom_left: Complex,
    top_right: Complex,
}

impl ComplexRegion {
    pub fn new(bottom_left: Complex, top_right: Complex) -> Result<Self, ComplexRegionError> {
        let width = top_right.real - bottom_left.real;
        let height = top_right.imag - bottom_left.imag;

        // written so NaN extents are rejected too
        let positive = width > 0.0 && height > 0.0;

        if !positive || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRegionError::InvalidSize { width, height });
        }

        Ok(Self {
            bottom_left,
            top_right,
        })
    }

    #[must_use]
    pub fn bottom_left(&self) -> Complex {
        self.bottom_left
    }

    #[must_use]
    pub fn top_right(&self) -> Complex {
        self.top_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.top_right.real - self.bottom_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top_right.imag - self.bottom_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.top_right.real + self.bottom_left.real) / 2.0,
            imag: (self.top_right.imag + self.bottom_left.imag) / 2.0,
        }
    }
}
