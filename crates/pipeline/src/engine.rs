//! External engine invocation
//!
//! Thin wrapper around the engine's command-line executable. The pipeline
//! JSON travels through a temporary file and the engine's `pipeline`
//! subcommand reads it; this layer never touches point data.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use contracts::{PipelineError, Result};
use tracing::{debug, info};

use crate::Pipeline;

/// Handle to the engine executable.
#[derive(Debug, Clone)]
pub struct Engine {
    executable: PathBuf,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("pdal"),
        }
    }
}

impl Engine {
    /// Use a specific executable instead of `pdal` from `PATH`.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run `<engine> pipeline <file>` and wait for completion.
    ///
    /// A non-success exit status is an error carrying the status and the
    /// captured stderr. Engine-side validation failures (missing required
    /// options, bad values) surface here, not earlier.
    pub fn execute(&self, pipeline: &Pipeline) -> Result<Execution> {
        let pipeline_file = pipeline.to_json_tempfile()?;
        info!(
            executable = %self.executable.display(),
            file = %pipeline_file.display(),
            stages = pipeline.len(),
            "running engine pipeline"
        );

        let output = Command::new(&self.executable)
            .arg("pipeline")
            .arg(&pipeline_file)
            .output()
            .map_err(|e| PipelineError::engine_launch(&self.executable, e))?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(PipelineError::engine_exit(output.status, stderr));
        }

        debug!(status = %output.status, "engine pipeline finished");
        Ok(Execution {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
            pipeline_file,
        })
    }

    /// Launch `<engine> pipeline <file>` without waiting.
    ///
    /// Returns the child handle; reaping it is the caller's decision, so
    /// the outcome is never silently discarded.
    pub fn spawn(&self, pipeline: &Pipeline) -> Result<Child> {
        let pipeline_file = pipeline.to_json_tempfile()?;
        info!(
            executable = %self.executable.display(),
            file = %pipeline_file.display(),
            "spawning engine pipeline"
        );

        Command::new(&self.executable)
            .arg("pipeline")
            .arg(&pipeline_file)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| PipelineError::engine_launch(&self.executable, e))
    }
}

/// Outcome of a completed engine run.
#[derive(Debug, Clone)]
pub struct Execution {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error; engine warnings land here even on success.
    pub stderr: String,
    /// The temporary pipeline file the engine consumed; caller owns cleanup.
    pub pipeline_file: PathBuf,
}
