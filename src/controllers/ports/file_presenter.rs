use std::error::Error;
use std::fmt;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum PresentError {
    Io(std::io::Error),
    Encode(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to write image: {}", err),
            Self::Encode(err) => write!(f, "failed to encode image: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err.as_ref()),
        }
    }
}

impl From<std::io::Error> for PresentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Image sink persisting a grayscale buffer to a file.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError>;
}

impl<P: FilePresenterPort + ?Sized> FilePresenterPort for Box<P> {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        (**self).present(buffer, filepath)
    }
}
