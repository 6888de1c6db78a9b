//! Side-effecting operations: startup script execution.

pub mod script;
