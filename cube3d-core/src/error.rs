/// Error types for the core crate
use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::Vertex;

/// A frame's vertex set could not be transformed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("vertex {index} ({vertex:?}) transformed to a non-finite point")]
    NonFinite { index: usize, vertex: Vertex },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
