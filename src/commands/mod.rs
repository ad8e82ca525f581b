//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod say;

pub use say::run_say;
