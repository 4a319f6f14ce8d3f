use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::ESCAPE_RADIUS_SQUARED;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub const fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_time(&self, point: Complex) -> u32 {
        mandelbrot_escape_time(point, self.max_iterations)
    }
}

/// Iterates `z -> z² + c` from `z = 0`.
///
/// The squares are computed once per step and shared by the escape test and
/// the update, so the test sees the pre-update magnitude.
#[must_use]
pub fn mandelbrot_escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut x = 0.0;
    let mut y = 0.0;

    for iteration in 0..max_iterations {
        let x2 = x * x;
        let y2 = y * y;

        if x2 + y2 > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }

        y = 2.0 * x * y + c.imag;
        x = x2 - y2 + c.real;
    }

    max_iterations
}
