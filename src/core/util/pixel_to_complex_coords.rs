use thiserror::Error;

use crate::core::data::canvas_dimensions::CanvasDimensions;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportState;

/// Height of the visible plane region at zoom 1.
pub const PLANE_HEIGHT_AT_UNIT_ZOOM: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error("point (x: {}, y: {}) is outside the {}x{} canvas", .point.x, .point.y, .dims.width(), .dims.height())]
    PointOutsideCanvas {
        point: Point,
        dims: CanvasDimensions,
    },
}

/// Maps a pixel to the complex plane, keeping shapes undistorted by stretching
/// the horizontal span with the aspect ratio.
pub fn pixel_to_complex_coords(
    pixel: Point,
    dims: CanvasDimensions,
    viewport: &ViewportState,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !dims.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideCanvas { point: pixel, dims });
    }

    Ok(map_pixel(pixel, dims, viewport))
}

/// Unchecked mapping used by the renderer, which only visits in-bounds pixels.
///
/// The operation order is fixed: reordering the multiplications changes the
/// low bits of the result and therefore the rendered image.
#[inline]
pub(crate) fn map_pixel(pixel: Point, dims: CanvasDimensions, viewport: &ViewportState) -> Complex {
    let width = f64::from(dims.width());
    let height = f64::from(dims.height());
    let aspect_ratio = dims.aspect_ratio();
    let scale = PLANE_HEIGHT_AT_UNIT_ZOOM / height;

    let real = (f64::from(pixel.x) - width / 2.0) * scale / viewport.zoom() * aspect_ratio
        + viewport.center_real();
    let imag = (f64::from(pixel.y) - height / 2.0) * scale / viewport.zoom() + viewport.center_imag();

    Complex { real, imag }
}
