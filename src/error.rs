//! Unified error types for ttsay
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed command-line arguments
    #[error("{0}")]
    Usage(String),

    /// The speech engine executable could not be found
    #[error("{engine} TTS engine not available ({program}): {reason}")]
    DependencyMissing {
        engine: String,
        program: String,
        reason: String,
    },

    /// The output file's parent directory could not be created
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested model could not be loaded
    #[error("Failed to load TTS model: {0}")]
    ModelLoad(String),

    /// Text-to-audio conversion or the file write failed
    #[error("Failed to generate speech: {0}")]
    Synthesis(String),

    /// IO error (terminal output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from speech engine backends
#[derive(Error, Debug)]
pub enum EngineError {
    /// Engine executable not found on PATH
    #[error("executable '{program}' not found: {reason}")]
    NotInstalled { program: String, reason: String },

    /// Engine has not been acquired yet
    #[error("engine used before it was acquired")]
    NotAcquired,

    /// Model file or identifier does not exist
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// Model exists but could not be downloaded or initialized
    #[error("model {model} failed to load: {reason}")]
    ModelLoadFailed { model: String, reason: String },

    /// Engine process could not be started
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Engine process exited unsuccessfully
    #[error("'{program}' exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Engine reported success but no audio file appeared
    #[error("engine reported success but wrote no file at {}", .0.display())]
    NoOutput(PathBuf),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
