use crate::core::data::pixel_size::PixelSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch { pixel_count: usize, buffer_size: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_count,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel count {} does not match buffer size {}",
                    pixel_count, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Dense row-major 8-bit grayscale image, one byte per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: PixelSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(size: PixelSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        if size.pixel_count() != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_count: size.pixel_count(),
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }
}
