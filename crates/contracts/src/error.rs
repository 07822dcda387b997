//! Layered error definitions
//!
//! Categorized by boundary: encode / filesystem / engine

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum PipelineError {
    // ===== Encoding Errors =====
    /// Pipeline JSON encoding error
    #[error("pipeline encode error: {0}")]
    Encode(#[from] serde_json::Error),

    // ===== Filesystem Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Temporary file could not be persisted past its guard
    #[error("temp file persist error at '{path}': {message}")]
    TempFilePersist { path: PathBuf, message: String },

    // ===== Engine Errors =====
    /// Engine executable could not be started
    #[error("failed to launch engine '{executable}': {source}")]
    EngineLaunch {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Engine run finished with a failure status
    #[error("engine failed ({status}): {stderr}")]
    EngineExit { status: ExitStatus, stderr: String },
}

impl PipelineError {
    /// Create temp file persist error
    pub fn temp_file_persist(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::TempFilePersist {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create engine launch error
    pub fn engine_launch(executable: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::EngineLaunch {
            executable: executable.into(),
            source,
        }
    }

    /// Create engine exit error
    pub fn engine_exit(status: ExitStatus, stderr: impl Into<String>) -> Self {
        Self::EngineExit {
            status,
            stderr: stderr.into(),
        }
    }
}

/// Result alias shared across the workspace
pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
