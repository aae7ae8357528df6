//! Error types for the cluster-env CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cluster-env operations.
#[derive(Error, Debug)]
pub enum ClusterEnvError {
    /// The config path does not exist.
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    /// The config path exists but could not be read (permissions, directory, ...).
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid YAML, or a known section has the wrong shape.
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The config parsed but is not a mapping at the top level.
    #[error("invalid cluster config: {0}")]
    InvalidDocument(String),
}

impl ClusterEnvError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClusterEnvError::NotFound { .. }
            | ClusterEnvError::Read { .. }
            | ClusterEnvError::Parse(_)
            | ClusterEnvError::InvalidDocument(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for cluster-env operations.
pub type Result<T> = std::result::Result<T, ClusterEnvError>;
