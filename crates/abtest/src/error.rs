use std::path::PathBuf;

use abtest_core::PowerError;

/// Errors raised while loading settings or producing a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Power(#[from] PowerError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize settings: {0}")]
    Serialize(String),

    #[error("failed to write chart to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
