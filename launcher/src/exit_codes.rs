//! Stable exit codes for the launcher binary.

/// Dispatch finished: the startup script succeeded, or the platform branch
/// launches nothing.
pub const OK: i32 = 0;
/// The startup script could not be started or exited non-zero.
pub const FAILURE: i32 = 1;
