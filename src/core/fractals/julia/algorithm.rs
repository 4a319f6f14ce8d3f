use std::ops::ControlFlow;

use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::ESCAPE_RADIUS_SQUARED;
use crate::core::fractals::julia::params::JuliaParams;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    c: Complex,
    max_iterations: u32,
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(params: JuliaParams, max_iterations: u32) -> Self {
        Self {
            c: params.c(),
            max_iterations,
        }
    }
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_time(&self, point: Complex) -> u32 {
        julia_escape_time(point, self.c, self.max_iterations)
    }
}

/// Iterates `z -> z² + c` starting from the point itself, with `c` fixed for
/// the whole frame.
#[must_use]
pub fn julia_escape_time(z: Complex, c: Complex, max_iterations: u32) -> u32 {
    let outcome = (0..max_iterations).try_fold((z.real, z.imag), |(x, y), iteration| {
        let x2 = x * x;
        let y2 = y * y;

        if x2 + y2 > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue((x2 - y2 + c.real, 2.0 * x * y + c.imag))
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}
