//! Error types for the experiment runner.

use std::path::PathBuf;

use gridwalk_map::MapError;
use gridwalk_search::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid experiment file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("map error: {0}")]
    Map(#[from] MapError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
