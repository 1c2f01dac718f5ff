use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ColorType, ImageError};
use std::path::Path;

/// Writes raster images through the `image` crate; the container format
/// (BMP or PNG) follows the file extension.
#[derive(Debug, Default)]
pub struct ImageFilePresenter {}

impl FilePresenterPort for ImageFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        image::save_buffer(
            filepath,
            buffer.buffer(),
            buffer.size().width(),
            buffer.size().height(),
            ColorType::L8,
        )
        .map_err(|err| match err {
            ImageError::IoError(io) => PresentError::Io(io),
            other => PresentError::Encode(Box::new(other)),
        })
    }
}

impl ImageFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_size::PixelSize;

    fn gradient() -> PixelBuffer {
        let size = PixelSize::new(4, 2).unwrap();
        PixelBuffer::from_data(size, vec![0, 36, 73, 109, 146, 182, 219, 255]).unwrap()
    }

    #[test]
    fn test_png_round_trips_grayscale_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let buffer = gradient();

        ImageFilePresenter::new().present(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().into_luma8();
        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(decoded.as_raw().as_slice(), buffer.buffer());
    }

    #[test]
    fn test_bmp_is_written_with_requested_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bmp");

        ImageFilePresenter::new().present(&gradient(), &path).unwrap();

        let decoded = image::open(&path).unwrap().into_luma8();
        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(decoded.get_pixel(3, 1).0, [255]);
    }

    #[test]
    fn test_unknown_extension_is_an_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.unknown");

        let result = ImageFilePresenter::new().present(&gradient(), &path);

        assert!(matches!(result, Err(PresentError::Encode(_))));
    }
}
