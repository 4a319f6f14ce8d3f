pub mod burning_ship;
pub mod fractal_kinds;
pub mod julia;
pub mod kernel;
pub mod mandelbox;
pub mod mandelbrot;

/// Squared magnitude past which a quadratic orbit is treated as divergent.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;
