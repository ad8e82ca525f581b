//! ttsay - command-line text-to-speech library
//!
//! This library provides the pipeline behind the `ttsay` binary: resolve the
//! arguments, make sure the output directory exists, then load a model from an
//! external speech engine and synthesize the text to a file.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration resolution
//! - [`domain`]: Domain value types
//! - [`engine`]: Speech engine abstraction layer
//! - [`error`]: Error types
//! - [`services`]: Synthesis pipeline

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod services;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
