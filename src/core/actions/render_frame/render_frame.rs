use std::time::Instant;

use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::colour_mapping::colour_for::colour_for;
use crate::core::data::canvas_dimensions::{BYTES_PER_PIXEL, CanvasDimensions};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::render_config::RenderConfig;
use crate::core::errors::{InvalidConfigError, RenderError};
use crate::core::fractals::kernel::FractalKernel;
use crate::core::util::pixel_to_complex_coords::map_pixel;

/// Renders one frame, spreading rows across rayon's thread pool.
///
/// The output depends only on `config` and `dims`; rows are independent, so
/// the parallel sweep is byte-identical to [`render_serial`].
/// For cancel-aware rendering, use [`render_cancelable`].
pub fn render(
    config: &RenderConfig,
    dims: CanvasDimensions,
) -> Result<PixelBuffer, InvalidConfigError> {
    // Delegate to the cancel-aware implementation with NeverCancel
    render_cancelable(config, dims, &NeverCancel).map_err(|e| match e {
        RenderError::InvalidConfig(err) => err,
        RenderError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Renders one frame, polling `cancel` at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// A cancelled sweep returns [`RenderError::Cancelled`] and drops the
/// partially written buffer.
pub fn render_cancelable<C>(
    config: &RenderConfig,
    dims: CanvasDimensions,
    cancel: &C,
) -> Result<PixelBuffer, RenderError>
where
    C: CancelToken,
{
    let frame = Frame::prepare(config, dims)?;
    let start = Instant::now();
    let mut buffer = PixelBuffer::new(dims)?;

    buffer
        .data_mut()
        .par_chunks_mut(dims.row_byte_len())
        .enumerate()
        .try_for_each(|(y, row)| frame.render_row(y as u32, row, cancel))?;

    tracing::debug!(
        variant = %config.variant,
        width = dims.width(),
        height = dims.height(),
        elapsed = ?start.elapsed(),
        "frame rendered"
    );

    Ok(buffer)
}

/// Single-threaded sweep, top row first.
pub fn render_serial(
    config: &RenderConfig,
    dims: CanvasDimensions,
) -> Result<PixelBuffer, InvalidConfigError> {
    let frame = Frame::prepare(config, dims)?;
    let mut buffer = PixelBuffer::new(dims)?;

    for (y, row) in buffer.data_mut().chunks_mut(dims.row_byte_len()).enumerate() {
        if let Err(Cancelled) = frame.render_row(y as u32, row, &NeverCancel) {
            unreachable!("NeverCancel token should never signal cancellation");
        }
    }

    Ok(buffer)
}

/// Validated inputs of one sweep, shared read-only by every row.
struct Frame<'a> {
    config: &'a RenderConfig,
    dims: CanvasDimensions,
    kernel: FractalKernel,
}

impl<'a> Frame<'a> {
    fn prepare(config: &'a RenderConfig, dims: CanvasDimensions) -> Result<Self, InvalidConfigError> {
        dims.validate()?;
        config.validate()?;

        Ok(Self {
            config,
            dims,
            kernel: FractalKernel::for_config(config),
        })
    }

    fn render_row<C: CancelToken>(&self, y: u32, row: &mut [u8], cancel: &C) -> Result<(), Cancelled> {
        for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }

            let colour = self.shade(Point { x: x as u32, y });
            pixel.copy_from_slice(&colour.to_bytes());
        }

        Ok(())
    }

    #[inline]
    fn shade(&self, pixel: Point) -> Colour {
        let point = map_pixel(pixel, self.dims, &self.config.viewport);
        let iterations = self.kernel.escape_time(point);

        colour_for(iterations, self.kernel.max_iterations(), self.config.colour_scheme)
    }
}
