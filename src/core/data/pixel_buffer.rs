use thiserror::Error;

use crate::core::data::canvas_dimensions::{BYTES_PER_PIXEL, CanvasDimensions};
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::errors::InvalidConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {}x{} canvas", .pixel.x, .pixel.y, .dims.width(), .dims.height())]
    PixelOutsideBounds {
        pixel: Point,
        dims: CanvasDimensions,
    },
    #[error("canvas size {canvas_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 image, origin top-left.
///
/// Mutation is crate-private: a buffer handed out by the renderer is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dims: CanvasDimensions,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Zero-filled buffer covering `dims`.
    pub(crate) fn new(dims: CanvasDimensions) -> Result<Self, InvalidConfigError> {
        Ok(Self {
            dims,
            buffer: vec![0; dims.byte_len()?],
        })
    }

    /// Wraps existing RGBA bytes. `dims` whose byte length overflows `usize`
    /// can never match a real buffer and are reported as a mismatch.
    pub fn from_data(
        dims: CanvasDimensions,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let canvas_size = dims.byte_len().unwrap_or(usize::MAX);

        if canvas_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { dims, buffer })
    }

    #[must_use]
    pub fn dims(&self) -> CanvasDimensions {
        self.dims
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.checked_offset(pixel)?;
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Ok(Colour {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn checked_offset(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.dims.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                dims: self.dims,
            });
        }

        Ok(self.dims.byte_offset(pixel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> CanvasDimensions {
        CanvasDimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(dims(10, 10)).unwrap();

        assert_eq!(buffer.dims(), dims(10, 10));
        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // pixel (0,0) - red
            0, 255, 0, 255, // pixel (1,0) - green
            0, 0, 255, 255, // pixel (0,1) - blue
            255, 255, 0, 128, // pixel (1,1) - translucent yellow
        ];

        let buffer = PixelBuffer::from_data(dims(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.buffer(), data.as_slice());
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Ok(Colour { r: 255, g: 255, b: 0, a: 128 }));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let too_small = PixelBuffer::from_data(dims(2, 2), vec![0; 12]);
        let too_large = PixelBuffer::from_data(dims(2, 2), vec![0; 24]);

        assert_eq!(
            too_small.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                canvas_size: 16,
                buffer_size: 12
            }
        );
        assert_eq!(
            too_large.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                canvas_size: 16,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_from_data_rejects_overflowing_dims() {
        let huge: CanvasDimensions =
            serde_json::from_str(&format!(r#"{{"width":{0},"height":{0}}}"#, u32::MAX)).unwrap();

        let result = PixelBuffer::from_data(huge, vec![0; 16]);

        assert!(matches!(
            result,
            Err(PixelBufferError::BoundsMismatch { buffer_size: 16, .. })
        ));
    }

    #[test]
    fn test_pixel_reads_rgba_at_row_major_offset() {
        let mut data = vec![0; 36];
        data[16..20].copy_from_slice(&[9, 8, 7, 255]);
        let buffer = PixelBuffer::from_data(dims(3, 3), data).unwrap();

        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Ok(Colour::opaque(9, 8, 7)));
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Ok(Colour { r: 0, g: 0, b: 0, a: 0 }));
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let buffer = PixelBuffer::new(dims(3, 3)).unwrap();
        let pixel = Point { x: 3, y: 1 };

        assert_eq!(
            buffer.pixel(pixel),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                dims: dims(3, 3)
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = PixelBufferError::PixelOutsideBounds {
            pixel: Point { x: 7, y: 1 },
            dims: dims(3, 3),
        };

        assert_eq!(err.to_string(), "pixel at x:7, y:1 outside of 3x3 canvas");
    }
}
