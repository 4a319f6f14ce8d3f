use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

const MANDELBOX_SCALE: f64 = 2.0;
const MANDELBOX_ESCAPE_RADIUS_SQUARED: f64 = 16.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelboxAlgorithm {
    max_iterations: u32,
}

impl MandelboxAlgorithm {
    #[must_use]
    pub const fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl FractalAlgorithm for MandelboxAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_time(&self, point: Complex) -> u32 {
        mandelbox_escape_time(point, self.max_iterations)
    }
}

/// Reflects values outside `[-1, 1]` back across the nearest bound.
#[inline]
#[must_use]
pub fn box_fold(value: f64) -> f64 {
    if value > 1.0 {
        2.0 - value
    } else if value < -1.0 {
        -2.0 - value
    } else {
        value
    }
}

/// Three-component box-fold recurrence seeded with `(re, im, 0)`.
///
/// Unlike the quadratic kernels, the escape test runs on the state after the
/// step's update. `z` has no additive offset.
#[must_use]
pub fn mandelbox_escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut x = c.real;
    let mut y = c.imag;
    let mut z = 0.0;

    for iteration in 0..max_iterations {
        x = box_fold(x) * MANDELBOX_SCALE + c.real;
        y = box_fold(y) * MANDELBOX_SCALE + c.imag;
        z = box_fold(z) * MANDELBOX_SCALE;

        if x * x + y * y + z * z > MANDELBOX_ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_fold_reflects_above_one() {
        assert_eq!(box_fold(1.5), 0.5);
        assert_eq!(box_fold(3.0), -1.0);
    }

    #[test]
    fn test_box_fold_reflects_below_minus_one() {
        assert_eq!(box_fold(-1.5), -0.5);
        assert_eq!(box_fold(-3.0), 1.0);
    }

    #[test]
    fn test_box_fold_leaves_unit_interval_unchanged() {
        for value in [-1.0, -0.25, 0.0, 0.75, 1.0] {
            assert_eq!(box_fold(value), value);
        }
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(mandelbox_escape_time(Complex::new(0.0, 0.0), 100), 100);
    }

    #[test]
    fn test_escape_is_tested_after_update() {
        // step 0: x = (2 - 3) * 2 + 3 = 1, step 1: x = 1 * 2 + 3 = 5
        assert_eq!(mandelbox_escape_time(Complex::new(3.0, 0.0), 100), 1);
        // step 0: x = (2 - 10) * 2 + 10 = -6
        assert_eq!(mandelbox_escape_time(Complex::new(10.0, 0.0), 100), 0);
    }

    #[test]
    fn test_zero_max_iterations_returns_zero() {
        assert_eq!(mandelbox_escape_time(Complex::new(10.0, 0.0), 0), 0);
    }

    #[test]
    fn test_algorithm_delegates_to_kernel() {
        let algorithm = MandelboxAlgorithm::new(30);

        assert_eq!(algorithm.max_iterations(), 30);
        assert_eq!(algorithm.escape_time(Complex::new(1.0, 1.0)), 0);
    }
}
