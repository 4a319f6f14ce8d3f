use serde::{Deserialize, Serialize};

use crate::core::data::canvas_dimensions::CanvasDimensions;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::errors::InvalidConfigError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

const ZOOM_STEP: f64 = 1.5;
const RECENTRE_ZOOM: f64 = 2.0;
const PAN_PLANE_UNITS_PER_HEIGHT: f64 = 2.0;

/// Zoom factor and centre of the visible region of the complex plane.
///
/// At zoom 1 the canvas spans 4 plane units vertically. Navigation methods
/// return a new snapshot rather than mutating, so a viewport handed to the
/// renderer never changes under it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ViewportState {
    zoom: f64,
    center_real: f64,
    center_imag: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            center_real: 0.0,
            center_imag: 0.0,
        }
    }
}

impl ViewportState {
    pub fn new(zoom: f64, center_real: f64, center_imag: f64) -> Result<Self, InvalidConfigError> {
        let viewport = Self {
            zoom,
            center_real,
            center_imag,
        };
        viewport.validate()?;

        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(InvalidConfigError::NonPositiveZoom(self.zoom));
        }

        for (name, value) in [
            ("center_real", self.center_real),
            ("center_imag", self.center_imag),
        ] {
            if !value.is_finite() {
                return Err(InvalidConfigError::NonFiniteParameter { name, value });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn center_real(&self) -> f64 {
        self.center_real
    }

    #[must_use]
    pub fn center_imag(&self) -> f64 {
        self.center_imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_real, self.center_imag)
    }

    #[must_use]
    pub fn zoomed_in(&self) -> Self {
        Self {
            zoom: self.zoom * ZOOM_STEP,
            ..*self
        }
    }

    #[must_use]
    pub fn zoomed_out(&self) -> Self {
        Self {
            zoom: self.zoom / ZOOM_STEP,
            ..*self
        }
    }

    /// Centres the view on the plane point under `pixel` and doubles the zoom.
    pub fn recentred_on(
        &self,
        pixel: Point,
        dims: CanvasDimensions,
    ) -> Result<Self, PixelToComplexCoordsError> {
        let target = pixel_to_complex_coords(pixel, dims, self)?;

        Ok(Self {
            zoom: self.zoom * RECENTRE_ZOOM,
            center_real: target.real,
            center_imag: target.imag,
        })
    }

    /// Moves the centre against a drag of `(dx, dy)` pixels.
    #[must_use]
    pub fn panned_by(&self, dx: f64, dy: f64, dims: CanvasDimensions) -> Self {
        let units_per_pixel = PAN_PLANE_UNITS_PER_HEIGHT / f64::from(dims.height()) / self.zoom;

        Self {
            center_real: self.center_real - dx * units_per_pixel,
            center_imag: self.center_imag - dy * units_per_pixel,
            ..*self
        }
    }
}
