use crate::core::data::complex::Complex;

/// An escape-time recurrence evaluated at a single point of the plane.
pub trait FractalAlgorithm: Send + Sync {
    fn max_iterations(&self) -> u32;

    /// Number of steps taken before the orbit escaped, or `max_iterations`
    /// when it never did.
    fn escape_time(&self, point: Complex) -> u32;
}
