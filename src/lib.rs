//! Escape-time fractal rendering: Mandelbrot, Julia, Burning Ship and
//! Mandelbox sets rendered to RGBA pixel buffers.
//!
//! The core entry point is [`render`], a pure function of a [`RenderConfig`]
//! and [`CanvasDimensions`].

mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::render_frame::{
    render, render_cancelable, render_serial,
};
pub use crate::core::colour_mapping::colour_for::colour_for;
pub use crate::core::colour_mapping::kinds::{ColourSchemeKinds, UnknownColourScheme};
pub use crate::core::data::canvas_dimensions::CanvasDimensions;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_config::{
    DEFAULT_MAX_ITERATIONS, MAX_ITERATIONS_LIMIT, RenderConfig,
};
pub use crate::core::data::viewport::ViewportState;
pub use crate::core::errors::{InvalidConfigError, RenderError};
pub use crate::core::fractals::burning_ship::algorithm::{
    BurningShipAlgorithm, burning_ship_escape_time,
};
pub use crate::core::fractals::fractal_kinds::{FractalKinds, UnknownFractalKind};
pub use crate::core::fractals::julia::algorithm::{JuliaAlgorithm, julia_escape_time};
pub use crate::core::fractals::julia::params::JuliaParams;
pub use crate::core::fractals::kernel::FractalKernel;
pub use crate::core::fractals::mandelbox::algorithm::{
    MandelboxAlgorithm, box_fold, mandelbox_escape_time,
};
pub use crate::core::fractals::mandelbrot::algorithm::{
    MandelbrotAlgorithm, mandelbrot_escape_time,
};
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use controllers::render_controller::RenderController;
pub use input::cli::args::CliArgs;
pub use input::cli::commands::run_cli::RunCliCommand;
pub use input::cli::job_file::{JobFileError, RenderJob};
pub use presenters::file::png::PngFilePresenter;
pub use presenters::file::ppm::PpmFilePresenter;
