//! Dispatch orchestration: apply the platform decision table.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::io::script::ScriptRunner;
use crate::platform::Platform;

/// Relative path of the startup script on supported platforms.
///
/// Hardcoded: there is no override mechanism, and the script is resolved
/// against the launcher's current working directory.
pub const STARTUP_SCRIPT: &str = "./run.sh";

/// Structured dispatch outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Windows host: reported, nothing launched.
    WindowsSkipped,
    /// macOS/Linux host: the startup script ran to completion.
    ScriptRan,
    /// Unrecognized host: reported, nothing launched.
    UnsupportedSkipped,
}

/// Print the platform banner, then hand off to the startup script on
/// supported hosts.
///
/// Spawns at most one child process per call, and none on the Windows or
/// fallback branches. A script failure propagates to the caller untouched;
/// there is no retry.
pub fn dispatch<R: ScriptRunner>(platform: &Platform, runner: &R) -> Result<LaunchOutcome> {
    println!("{}", platform.banner());
    match platform {
        Platform::Windows => {
            debug!("windows host, nothing to launch");
            Ok(LaunchOutcome::WindowsSkipped)
        }
        Platform::Unix => {
            info!(script = STARTUP_SCRIPT, "handing off to startup script");
            runner.run(Path::new(STARTUP_SCRIPT))?;
            Ok(LaunchOutcome::ScriptRan)
        }
        Platform::Other(name) => {
            debug!(os = %name, "unrecognized host, nothing to launch");
            Ok(LaunchOutcome::UnsupportedSkipped)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct RecordingRunner {
        calls: RefCell<Vec<PathBuf>>,
        fail: bool,
    }

    impl RecordingRunner {
        fn new(fail: bool) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl ScriptRunner for RecordingRunner {
        fn run(&self, path: &Path) -> Result<()> {
            self.calls.borrow_mut().push(path.to_path_buf());
            if self.fail {
                return Err(anyhow!("./run.sh failed with status Some(1)"));
            }
            Ok(())
        }
    }

    #[test]
    fn windows_never_spawns() {
        let runner = RecordingRunner::new(false);
        let outcome = dispatch(&Platform::Windows, &runner).expect("dispatch");
        assert_eq!(outcome, LaunchOutcome::WindowsSkipped);
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn unix_spawns_the_script_exactly_once() {
        let runner = RecordingRunner::new(false);
        let outcome = dispatch(&Platform::Unix, &runner).expect("dispatch");
        assert_eq!(outcome, LaunchOutcome::ScriptRan);
        assert_eq!(
            runner.calls.borrow().as_slice(),
            &[PathBuf::from(STARTUP_SCRIPT)]
        );
    }

    #[test]
    fn unknown_platform_never_spawns() {
        let runner = RecordingRunner::new(false);
        let platform = Platform::Other("freebsd".to_string());
        let outcome = dispatch(&platform, &runner).expect("dispatch");
        assert_eq!(outcome, LaunchOutcome::UnsupportedSkipped);
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn script_failure_propagates() {
        let runner = RecordingRunner::new(true);
        let err = dispatch(&Platform::Unix, &runner).unwrap_err();
        assert!(err.to_string().contains("status"));
        assert_eq!(runner.calls.borrow().len(), 1);
    }
}
