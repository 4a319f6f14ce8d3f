use serde::{Deserialize, Serialize};

use crate::core::data::point::Point;
use crate::core::errors::InvalidConfigError;

pub const BYTES_PER_PIXEL: usize = 4;
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Pixel size of the target canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasDimensions {
    width: u32,
    height: u32,
}

impl Default for CanvasDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, InvalidConfigError> {
        let dims = Self { width, height };
        dims.validate()?;

        Ok(dims)
    }

    /// Checks the invariants that `new` enforces. Deserialized values bypass
    /// `new`, so the renderer calls this again before every sweep.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(InvalidConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        self.byte_len().map(|_| ())
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn row_byte_len(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Size in bytes of an RGBA buffer covering the canvas.
    pub fn byte_len(&self) -> Result<usize, InvalidConfigError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(InvalidConfigError::CanvasTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Byte offset of a pixel in a row-major RGBA buffer.
    #[must_use]
    pub fn byte_offset(&self, point: Point) -> usize {
        (point.y as usize * self.width as usize + point.x as usize) * BYTES_PER_PIXEL
    }
}
