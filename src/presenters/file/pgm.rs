use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes binary PGM (`P5`) files.
#[derive(Debug, Default)]
pub struct PgmFilePresenter {}

impl FilePresenterPort for PgmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        let width = buffer.size().width();
        let height = buffer.size().height();

        // PGM header: P5 means binary grayscale, then width, height and max value
        writeln!(file, "P5")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()?;

        Ok(())
    }
}

impl PgmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_size::PixelSize;

    #[test]
    fn test_present_writes_header_and_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pgm");
        let size = PixelSize::new(3, 2).unwrap();
        let buffer = PixelBuffer::from_data(size, vec![0, 50, 100, 150, 200, 255]).unwrap();

        PgmFilePresenter::new().present(&buffer, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header = b"P5\n3 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[0, 50, 100, 150, 200, 255]);
    }

    #[test]
    fn test_present_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pgm");
        let buffer = PixelBuffer::from_data(PixelSize::new(1, 1).unwrap(), vec![0]).unwrap();

        let result = PgmFilePresenter::new().present(&buffer, &path);

        assert!(matches!(result, Err(PresentError::Io(_))));
    }
}
