use std::path::PathBuf;

use clap::Parser;

use crate::core::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::data::canvas_dimensions::{
    CanvasDimensions, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
};
use crate::core::data::render_config::{
    DEFAULT_MAX_ITERATIONS, MAX_ITERATIONS_LIMIT, RenderConfig,
};
use crate::core::data::viewport::ViewportState;
use crate::core::errors::InvalidConfigError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::params::JuliaParams;
use crate::input::cli::job_file::RenderJob;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "fractal_explorer",
    version,
    about = "Render Mandelbrot, Julia, Burning Ship and Mandelbox fractals to PNG or PPM"
)]
pub struct CliArgs {
    /// Fractal to render: mandelbrot, julia, burning-ship or mandelbox
    #[arg(short, long, default_value = "mandelbrot")]
    pub fractal: FractalKinds,

    /// Iteration cap per pixel
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_MAX_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ITERATIONS_LIMIT))
    )]
    pub iterations: u32,

    /// Colour scheme: default, rainbow, fire or electric
    #[arg(short, long, default_value = "default")]
    pub scheme: ColourSchemeKinds,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub zoom: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_real: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_imag: f64,

    /// Real part of the Julia constant
    #[arg(long, default_value_t = -0.7, allow_negative_numbers = true)]
    pub julia_real: f64,

    /// Imaginary part of the Julia constant
    #[arg(long, default_value_t = 0.27015, allow_negative_numbers = true)]
    pub julia_imag: f64,

    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// JSON job file; replaces every render flag above
    #[arg(long)]
    pub job: Option<PathBuf>,

    /// Output path. `.ppm` writes PPM, anything else PNG.
    /// Defaults to fractal-<variant>-<timestamp>.png
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Builds the frame request described by the render flags.
    pub fn to_job(&self) -> Result<RenderJob, InvalidConfigError> {
        let config = RenderConfig {
            variant: self.fractal,
            max_iterations: self.iterations,
            colour_scheme: self.scheme,
            viewport: ViewportState::new(self.zoom, self.center_real, self.center_imag)?,
            julia: JuliaParams::new(self.julia_real, self.julia_imag)?,
        };
        config.validate()?;

        Ok(RenderJob {
            config,
            dimensions: CanvasDimensions::new(self.width, self.height)?,
        })
    }
}
