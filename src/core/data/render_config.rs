use serde::{Deserialize, Serialize};

use crate::core::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::data::viewport::ViewportState;
use crate::core::errors::InvalidConfigError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::params::JuliaParams;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const MAX_ITERATIONS_LIMIT: u32 = 1000;

/// Everything one render pass depends on.
///
/// Built fresh by the caller for each frame; the renderer only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderConfig {
    pub variant: FractalKinds,
    pub max_iterations: u32,
    pub colour_scheme: ColourSchemeKinds,
    pub viewport: ViewportState,
    /// Only read when `variant` is Julia.
    pub julia: JuliaParams,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            variant: FractalKinds::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_scheme: ColourSchemeKinds::default(),
            viewport: ViewportState::default(),
            julia: JuliaParams::default(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.max_iterations == 0 {
            return Err(InvalidConfigError::ZeroMaxIterations);
        }

        if self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(InvalidConfigError::MaxIterationsTooLarge {
                max_iterations: self.max_iterations,
                limit: MAX_ITERATIONS_LIMIT,
            });
        }

        self.viewport.validate()?;
        self.julia.validate()
    }

    /// Restores the default view and Julia constant, keeping the variant,
    /// detail level and colour scheme.
    pub fn reset_view(&mut self) {
        self.viewport = ViewportState::default();
        self.julia = JuliaParams::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RenderConfig::default();

        assert_eq!(config.variant, FractalKinds::Mandelbrot);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.colour_scheme, ColourSchemeKinds::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        let config = RenderConfig {
            max_iterations: 0,
            ..RenderConfig::default()
        };

        assert_eq!(config.validate(), Err(InvalidConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_max_iterations_is_capped() {
        let at_limit = RenderConfig {
            max_iterations: 1000,
            ..RenderConfig::default()
        };
        let over_limit = RenderConfig {
            max_iterations: 1001,
            ..RenderConfig::default()
        };

        assert!(at_limit.validate().is_ok());
        assert_eq!(
            over_limit.validate(),
            Err(InvalidConfigError::MaxIterationsTooLarge {
                max_iterations: 1001,
                limit: 1000
            })
        );
    }

    #[test]
    fn test_deserialized_viewport_is_validated() {
        let config: RenderConfig = serde_json::from_str(
            r#"{"viewport": {"zoom": 0.0, "centerReal": 0.5}}"#,
        )
        .unwrap();

        assert_eq!(config.validate(), Err(InvalidConfigError::NonPositiveZoom(0.0)));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"variant": "burningShip", "colourScheme": "fire"}"#).unwrap();

        assert_eq!(config.variant, FractalKinds::BurningShip);
        assert_eq!(config.colour_scheme, ColourSchemeKinds::Fire);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_reset_view_keeps_variant_and_detail() {
        let mut config = RenderConfig {
            variant: FractalKinds::Julia,
            max_iterations: 400,
            viewport: ViewportState::new(8.0, 1.0, 1.0).unwrap(),
            julia: JuliaParams::new(0.3, 0.5).unwrap(),
            ..RenderConfig::default()
        };

        config.reset_view();

        assert_eq!(config.variant, FractalKinds::Julia);
        assert_eq!(config.max_iterations, 400);
        assert_eq!(config.viewport, ViewportState::default());
        assert_eq!(config.julia, JuliaParams::default());
    }
}
