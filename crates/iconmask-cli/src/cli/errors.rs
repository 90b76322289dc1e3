use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read parameters file {path}: {source}")]
    ParamsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid parameters file {path}: {source}")]
    ParamsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Icon(#[from] iconmask_core::IconError),
}
