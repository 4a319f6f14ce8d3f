use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::render_config::RenderConfig;
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbox::algorithm::MandelboxAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// The kernel selected for one render pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalKernel {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
    BurningShip(BurningShipAlgorithm),
    Mandelbox(MandelboxAlgorithm),
}

impl FractalKernel {
    #[must_use]
    pub fn for_config(config: &RenderConfig) -> Self {
        let max_iterations = config.max_iterations;

        match config.variant {
            FractalKinds::Mandelbrot => Self::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)),
            FractalKinds::Julia => Self::Julia(JuliaAlgorithm::new(config.julia, max_iterations)),
            FractalKinds::BurningShip => {
                Self::BurningShip(BurningShipAlgorithm::new(max_iterations))
            }
            FractalKinds::Mandelbox => Self::Mandelbox(MandelboxAlgorithm::new(max_iterations)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Julia(_) => FractalKinds::Julia,
            Self::BurningShip(_) => FractalKinds::BurningShip,
            Self::Mandelbox(_) => FractalKinds::Mandelbox,
        }
    }
}

impl FractalAlgorithm for FractalKernel {
    fn max_iterations(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.max_iterations(),
            Self::Julia(algorithm) => algorithm.max_iterations(),
            Self::BurningShip(algorithm) => algorithm.max_iterations(),
            Self::Mandelbox(algorithm) => algorithm.max_iterations(),
        }
    }

    #[inline]
    fn escape_time(&self, point: Complex) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.escape_time(point),
            Self::Julia(algorithm) => algorithm.escape_time(point),
            Self::BurningShip(algorithm) => algorithm.escape_time(point),
            Self::Mandelbox(algorithm) => algorithm.escape_time(point),
        }
    }
}
