use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::canvas_dimensions::CanvasDimensions;
use crate::core::data::render_config::RenderConfig;
use crate::core::errors::InvalidConfigError;

#[derive(Debug, Error)]
pub enum JobFileError {
    #[error("failed to read job file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse job file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] InvalidConfigError),
}

/// A frame request stored as JSON. Missing fields take their defaults;
/// unknown fields are rejected.
///
/// ```json
/// {
///   "config": { "variant": "julia", "maxIterations": 300, "julia": { "cReal": -0.8, "cImag": 0.156 } },
///   "dimensions": { "width": 1920, "height": 1080 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderJob {
    pub config: RenderConfig,
    pub dimensions: CanvasDimensions,
}

impl RenderJob {
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        self.dimensions.validate()?;
        self.config.validate()
    }

    pub fn from_json(json: &str) -> Result<Self, JobFileError> {
        let job: Self = serde_json::from_str(json)?;
        job.validate()?;

        Ok(job)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, JobFileError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| JobFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }
}
