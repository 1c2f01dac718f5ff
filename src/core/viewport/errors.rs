use crate::core::data::complex_region::ComplexRegionError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// The zoom would produce an empty, inverted or non-finite region, usually
    /// because double precision has run out at deep zoom levels.
    DegenerateRegion(ComplexRegionError),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRegion(err) => write!(f, "zoom rejected: {}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DegenerateRegion(err) => Some(err),
        }
    }
}

impl From<ComplexRegionError> for ViewportError {
    fn from(err: ComplexRegionError) -> Self {
        Self::DegenerateRegion(err)
    }
}
