pub mod project;
pub mod resolve;

pub use project::{Config, FoldersConfig};
pub use resolve::{load_config, resolve_config};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no depcheck.yaml found in the current directory or any ancestor")]
    ConfigNotFound,
    #[error("config file not found: {0}")]
    ConfigFileMissing(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
