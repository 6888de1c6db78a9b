//! Runs the startup script as a child process with inherited streams.
//!
//! The [`ScriptRunner`] trait decouples dispatch from the actual process
//! spawn. Tests use scripted runners that record invocations without forking.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, error, instrument};

/// Abstraction over startup-script execution backends.
pub trait ScriptRunner {
    /// Run the script at `path` to completion.
    ///
    /// Implementations must block until the script exits and fail on a
    /// non-zero exit status.
    fn run(&self, path: &Path) -> Result<()>;
}

/// Runner that spawns the script as a real child process.
pub struct ProcessRunner;

impl ScriptRunner for ProcessRunner {
    #[instrument(skip_all, fields(script = %path.display()))]
    fn run(&self, path: &Path) -> Result<()> {
        run_inherited(path)
    }
}

/// Spawn `path` with fully inherited stdio and block until it exits.
///
/// The child writes and reads the parent's own stdin/stdout/stderr handles;
/// nothing is captured or buffered in between. Environment and working
/// directory pass through unchanged, and no arguments are given to the
/// script. A spawn failure and a non-zero exit status are both errors.
pub fn run_inherited(path: &Path) -> Result<()> {
    let mut cmd = Command::new(path);
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!("spawning startup script");
    let mut child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            error!(err = %e, "failed to spawn startup script");
            return Err(e).with_context(|| format!("spawn {}", path.display()));
        }
    };

    let status = child
        .wait()
        .with_context(|| format!("wait for {}", path.display()))?;
    debug!(exit_code = ?status.code(), "startup script finished");

    if !status.success() {
        return Err(anyhow!(
            "{} failed with status {:?}",
            path.display(),
            status.code()
        ));
    }
    Ok(())
}
