use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DepcheckError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("package load error: {0}")]
    Load(#[source] anyhow::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DepcheckError>;
