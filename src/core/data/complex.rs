use serde::{Deserialize, Serialize};

/// A point on the complex plane.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let c = Complex::new(3.0, -4.0);

        assert_eq!(c.real, 3.0);
        assert_eq!(c.imag, -4.0);
    }

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Complex::default(), Complex::new(0.0, 0.0));
    }
}
