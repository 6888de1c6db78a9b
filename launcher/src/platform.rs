//! Host platform classification and the fixed branch messages.

use std::env;

/// Host operating system class, as seen by the launcher.
///
/// `macos` (and its `darwin` uname spelling) and `linux` collapse into
/// [`Platform::Unix`] because both launch the startup script the same way.
/// Anything else is carried verbatim in [`Platform::Other`] so it can be
/// reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Windows host. Reported, nothing launched.
    Windows,
    /// macOS or Linux host. Supported, hands off to the startup script.
    Unix,
    /// Unrecognized host (`freebsd`, `android`, ...). Reported, nothing launched.
    Other(String),
}

impl Platform {
    /// Classify the platform of the running process.
    pub fn detect() -> Self {
        Self::from_os_name(env::consts::OS)
    }

    /// Classify an OS identifier as reported by the runtime.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" | "darwin" | "linux" => Self::Unix,
            other => Self::Other(other.to_string()),
        }
    }

    /// Fixed message printed for this platform before the branch action.
    pub fn banner(&self) -> String {
        match self {
            Self::Windows => "Windows BUUUU".to_string(),
            Self::Unix => "MacOs :p y o Linux".to_string(),
            Self::Other(name) => format!("BRO QUE HACES USA ALGO NORMAL XD: {name}"),
        }
    }
}
