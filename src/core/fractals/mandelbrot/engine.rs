//! Escape-time rendering of a complex region onto a pixel grid.

use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_size::PixelSize;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::EscapeEngineError;

/// Computes the escape-time count of every pixel of a `width` x `height` grid
/// laid over `region`.
///
/// Pixels are evaluated in parallel across rayon's thread pool; the result is
/// identical for identical inputs regardless of scheduling. Zero dimensions or
/// a zero `max_cycles` are rejected before any work starts.
pub fn render(
    region: ComplexRegion,
    width: u32,
    height: u32,
    max_cycles: u32,
) -> Result<IterationGrid, EscapeEngineError> {
    let size = PixelSize::new(width, height)?;

    match render_cancelable(region, size, max_cycles, &NeverCancel) {
        Ok(grid) => Ok(grid),
        Err(RenderError::Invalid(err)) => Err(err),
        Err(RenderError::Cancelled) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Cancelled,
    Invalid(EscapeEngineError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "render cancelled"),
            Self::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cancelled => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<EscapeEngineError> for RenderError {
    fn from(err: EscapeEngineError) -> Self {
        Self::Invalid(err)
    }
}

/// Like [`render`], but gives up with [`RenderError::Cancelled`] once `cancel`
/// reports true.
pub fn render_cancelable<C: CancelToken>(
    region: ComplexRegion,
    size: PixelSize,
    max_cycles: u32,
    cancel: &C,
) -> Result<IterationGrid, RenderError> {
    let algorithm = MandelbrotAlgorithm::new(region, size, max_cycles)?;

    let counts = generate_fractal_parallel_rayon_cancelable(size, &algorithm, cancel).map_err(
        |e| match e {
            GenerateFractalError::Cancelled(_) => RenderError::Cancelled,
            GenerateFractalError::Algorithm(never) => match never {},
        },
    )?;

    let grid = IterationGrid::new(size, max_cycles, counts).map_err(EscapeEngineError::from)?;

    Ok(grid)
}
