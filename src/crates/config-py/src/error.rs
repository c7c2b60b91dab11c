//! Error types for config-py.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Exit code for a target that already exists or a failed filesystem write.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for rejected arguments, matching clap's usage-error code.
pub const EXIT_USAGE: u8 = 2;

/// Errors that can occur while scaffolding a config package.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The config directory is already present at the target location.
    #[error("Config directory already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    /// The environment variable name cannot be embedded in generated source.
    #[error("Invalid environment variable name '{name}': {reason}")]
    InvalidEnvVar { name: String, reason: &'static str },

    /// The package path does not stay under the working directory.
    #[error("Invalid package path '{}': {reason}", path.display())]
    InvalidPackage { path: PathBuf, reason: &'static str },

    /// Filesystem failure on a specific path.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::AlreadyExists { .. } | Self::Io { .. } => EXIT_FAILURE,
            Self::InvalidEnvVar { .. } | Self::InvalidPackage { .. } => EXIT_USAGE,
        }
    }

    /// True when the failure was caused by bad user input rather than the filesystem.
    pub fn is_usage_error(&self) -> bool {
        self.exit_code() == EXIT_USAGE
    }
}
