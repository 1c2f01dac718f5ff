use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

/// Grayscale level for an escape-time count: white for points that escape
/// immediately, black for points assumed to be in the set.
#[must_use]
pub fn grayscale_intensity(count: u32, max_cycles: u32) -> u8 {
    if max_cycles == 0 {
        return 0;
    }

    let darkness = (255.0 * f64::from(count) / f64::from(max_cycles)).round();

    (255.0 - darkness).clamp(0.0, 255.0) as u8
}

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    Cancelled(Cancelled),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Converts an iteration grid into a grayscale pixel buffer of the same size.
pub fn generate_pixel_buffer(grid: &IterationGrid) -> Result<PixelBuffer, PixelBufferError> {
    generate_pixel_buffer_cancelable(grid, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferError::PixelBuffer(err) => err,
        GeneratePixelBufferError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_pixel_buffer`], polling `cancel` once per chunk of
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<C: CancelToken>(
    grid: &IterationGrid,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let max_cycles = grid.max_cycles();
    let mut data = vec![0u8; grid.counts().len()];

    data.par_chunks_mut(CANCEL_CHECK_INTERVAL_PIXELS)
        .zip(grid.counts().par_chunks(CANCEL_CHECK_INTERVAL_PIXELS))
        .try_for_each(|(dest, counts)| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            for (pixel, &count) in dest.iter_mut().zip(counts) {
                *pixel = grayscale_intensity(count, max_cycles);
            }

            Ok(())
        })
        .map_err(GeneratePixelBufferError::Cancelled)?;

    Ok(PixelBuffer::from_data(grid.size(), data)?)
}
