use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelSizeError {}

/// Dimensions of a pixel grid, both at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSize {
    width: u32,
    height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelSizeError> {
        if width == 0 || height == 0 {
            return Err(PixelSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The corner one past the last pixel, i.e. `(width, height)`.
    #[must_use]
    pub fn far_corner(&self) -> Point {
        Point {
            x: self.width as i32,
            y: self.height as i32,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Row-major index of `point`, if it lies inside the grid.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }
}
