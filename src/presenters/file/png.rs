use std::path::Path;

use image::{ExtendedColorType, ImageFormat};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let dims = buffer.dims();

        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            dims.width(),
            dims.height(),
            ExtendedColorType::Rgba8,
            ImageFormat::Png,
        )?;

        Ok(())
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_dimensions::CanvasDimensions;

    #[test]
    fn test_present_round_trips_through_decoder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let dims = CanvasDimensions::new(2, 2).unwrap();
        let data = vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            10, 20, 30, 255,
        ];
        let buffer = PixelBuffer::from_data(dims, data.clone()).unwrap();

        PngFilePresenter::new().present(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.into_raw(), data);
    }

    #[test]
    fn test_present_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");
        let buffer = PixelBuffer::from_data(CanvasDimensions::new(1, 1).unwrap(), vec![0; 4]).unwrap();

        let result = PngFilePresenter::new().present(&buffer, &path);

        assert!(result.is_err());
    }
}
