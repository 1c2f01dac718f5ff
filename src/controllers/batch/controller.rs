use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::batch::config::BatchConfig;
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::fractals::mandelbrot::engine::render;
use crate::core::fractals::mandelbrot::errors::EscapeEngineError;

#[derive(Debug)]
pub enum BatchError {
    Render(EscapeEngineError),
    PixelBuffer(PixelBufferError),
    Present(PresentError),
    NothingGenerated,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "image conversion failed: {}", err),
            Self::Present(err) => write!(f, "{}", err),
            Self::NothingGenerated => write!(f, "no image has been generated yet"),
        }
    }
}

impl Error for BatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::NothingGenerated => None,
        }
    }
}

impl From<EscapeEngineError> for BatchError {
    fn from(err: EscapeEngineError) -> Self {
        Self::Render(err)
    }
}

impl From<PixelBufferError> for BatchError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<PresentError> for BatchError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}

/// One-shot render of a [`BatchConfig`] handed to a file presenter.
pub struct BatchController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> BatchController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &BatchConfig) -> Result<&PixelBuffer, BatchError> {
        info!("Rendering Mandelbrot set...");
        info!("Image size: {}x{}", config.width, config.height);
        info!(
            "Region: ({}, {}) to ({}, {})",
            config.region.bottom_left().real,
            config.region.bottom_left().imag,
            config.region.top_right().real,
            config.region.top_right().imag
        );
        info!("Max cycles: {}", config.max_cycles);
        info!("Threads: {}", rayon::current_num_threads());

        let start = Instant::now();
        let grid = render(config.region, config.width, config.height, config.max_cycles)?;
        info!("Escape times computed in {:?}", start.elapsed());

        let buffer = generate_pixel_buffer(&grid)?;
        info!("Generated in {:?}", start.elapsed());

        Ok(self.buffer.insert(buffer))
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), BatchError> {
        let buffer = self.buffer.as_ref().ok_or(BatchError::NothingGenerated)?;
        let filepath = filepath.as_ref();

        self.presenter.present(buffer, filepath)?;
        info!("Saved to {}", filepath.display());

        Ok(())
    }

    /// Renders `config` and writes it to `config.output_path`.
    pub fn run(&mut self, config: &BatchConfig) -> Result<(), BatchError> {
        self.generate(config)?;
        self.write(&config.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_region::ComplexRegion;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, PixelBuffer)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
            self.presented
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.clone()));
            Ok(())
        }
    }

    fn small_config() -> BatchConfig {
        BatchConfig {
            width: 30,
            height: 20,
            region: ComplexRegion::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap(),
            max_cycles: 40,
            output_path: PathBuf::from("small.bmp"),
        }
    }

    #[test]
    fn test_run_presents_rendered_buffer_at_output_path() {
        let presenter = RecordingPresenter::default();
        let mut controller = BatchController::new(&presenter);

        controller.run(&small_config()).unwrap();

        let presented = presenter.presented.borrow();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].0, PathBuf::from("small.bmp"));
        assert_eq!(presented[0].1.size().width(), 30);
        assert_eq!(presented[0].1.size().height(), 20);
    }

    #[test]
    fn test_write_before_generate_fails() {
        let presenter = RecordingPresenter::default();
        let controller = BatchController::new(&presenter);

        let result = controller.write("never.bmp");

        assert!(matches!(result, Err(BatchError::NothingGenerated)));
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_rejects_invalid_arguments() {
        let presenter = RecordingPresenter::default();
        let mut controller = BatchController::new(&presenter);
        let config = BatchConfig {
            max_cycles: 0,
            ..small_config()
        };

        let result = controller.generate(&config);

        assert!(matches!(
            result,
            Err(BatchError::Render(EscapeEngineError::ZeroMaxCycles))
        ));
    }
}
