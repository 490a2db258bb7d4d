//! Settings documents loaded from YAML.
//!
//! ```yaml
//! experiment:
//!   daily_traffic: 100000
//!   base_rate: 0.03
//!   alpha: 0.05
//!   power: 0.8
//!   allocation: 0.5
//! sweep:
//!   min_lift: 0.005
//!   max_lift: 0.2
//!   step_count: 20
//! ```
//!
//! Every field is optional; missing values fall back to the defaults.

use std::path::Path;

use abtest_core::{ExperimentConfig, LiftSweep};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub experiment: ExperimentConfig,
    pub sweep: LiftSweep,
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, ReportError> {
        serde_saphyr::to_string(self).map_err(|e| ReportError::Serialize(e.to_string()))
    }

    /// Load settings from `path`.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml(&content).map_err(|e| ReportError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ReportError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
