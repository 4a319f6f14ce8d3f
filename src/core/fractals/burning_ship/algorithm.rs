use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::ESCAPE_RADIUS_SQUARED;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BurningShipAlgorithm {
    max_iterations: u32,
}

impl BurningShipAlgorithm {
    #[must_use]
    pub const fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl FractalAlgorithm for BurningShipAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_time(&self, point: Complex) -> u32 {
        burning_ship_escape_time(point, self.max_iterations)
    }
}

/// Mandelbrot recurrence with the absolute value of the cross term taken
/// before `c` is added.
#[must_use]
pub fn burning_ship_escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut x = 0.0;
    let mut y = 0.0;

    for iteration in 0..max_iterations {
        let x2 = x * x;
        let y2 = y * y;

        if x2 + y2 > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }

        y = f64::abs(2.0 * x * y) + c.imag;
        x = x2 - y2 + c.real;
    }

    max_iterations
}
