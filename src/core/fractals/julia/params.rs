use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;
use crate::core::errors::InvalidConfigError;

/// The constant `c` added at every Julia step.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct JuliaParams {
    pub c_real: f64,
    pub c_imag: f64,
}

impl Default for JuliaParams {
    fn default() -> Self {
        Self {
            c_real: -0.7,
            c_imag: 0.27015,
        }
    }
}

impl JuliaParams {
    pub fn new(c_real: f64, c_imag: f64) -> Result<Self, InvalidConfigError> {
        let params = Self { c_real, c_imag };
        params.validate()?;

        Ok(params)
    }

    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        for (name, value) in [("c_real", self.c_real), ("c_imag", self.c_imag)] {
            if !value.is_finite() {
                return Err(InvalidConfigError::NonFiniteParameter { name, value });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        Complex::new(self.c_real, self.c_imag)
    }
}
