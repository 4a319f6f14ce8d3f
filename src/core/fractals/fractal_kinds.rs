use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Mandelbox,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fractal kind '{0}', expected one of: mandelbrot, julia, burningShip, mandelbox")]
pub struct UnknownFractalKind(pub String);

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Mandelbox,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Set",
            Self::Julia => "Julia Set",
            Self::BurningShip => "Burning Ship",
            Self::Mandelbox => "Mandelbox",
        }
    }

    /// Identifier used in job files and output file names.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burningShip",
            Self::Mandelbox => "mandelbox",
        }
    }
}

impl fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKinds {
    type Err = UnknownFractalKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalised.as_str() {
            "mandelbrot" => Ok(Self::Mandelbrot),
            "julia" => Ok(Self::Julia),
            "burningship" => Ok(Self::BurningShip),
            "mandelbox" => Ok(Self::Mandelbox),
            _ => Err(UnknownFractalKind(s.to_owned())),
        }
    }
}
