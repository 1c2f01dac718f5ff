use crate::core::data::iteration_grid::IterationGridError;
use crate::core::data::pixel_size::PixelSizeError;
use std::{error::Error, fmt};

/// Invalid-argument failures reported synchronously by the escape-time engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EscapeEngineError {
    ZeroMaxCycles,
    InvalidPixelSize(PixelSizeError),
    Grid(IterationGridError),
}

impl fmt::Display for EscapeEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxCycles => write!(f, "max cycles must be greater than zero"),
            Self::InvalidPixelSize(err) => write!(f, "invalid render size: {}", err),
            Self::Grid(err) => write!(f, "invalid iteration grid: {}", err),
        }
    }
}

impl Error for EscapeEngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroMaxCycles => None,
            Self::InvalidPixelSize(err) => Some(err),
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<PixelSizeError> for EscapeEngineError {
    fn from(err: PixelSizeError) -> Self {
        Self::InvalidPixelSize(err)
    }
}

impl From<IterationGridError> for EscapeEngineError {
    fn from(err: IterationGridError) -> Self {
        Self::Grid(err)
    }
}
