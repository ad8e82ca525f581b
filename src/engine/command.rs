//! Helpers for driving engine executables

use crate::error::EngineError;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Resolve a program name or path to an executable
pub fn locate(program: &str) -> Result<PathBuf, EngineError> {
    which::which(program).map_err(|e| EngineError::NotInstalled {
        program: program.to_string(),
        reason: e.to_string(),
    })
}

/// Run a command to completion, optionally feeding `input` on stdin
///
/// A non-zero exit becomes [`EngineError::CommandFailed`] carrying the
/// trimmed stderr (or stdout when stderr is empty).
pub fn run(cmd: Command, input: Option<&str>) -> Result<Output, EngineError> {
    let (program, output) = capture(cmd, input)?;
    check(&program, output)
}

/// Run a command to completion without judging its exit status
///
/// Returns the program name alongside the captured output.
pub fn capture(mut cmd: Command, input: Option<&str>) -> Result<(String, Output), EngineError> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    log::debug!("Running {:?}", cmd);

    cmd.stdin(if input.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    })
    .stdout(Stdio::piped())
    .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| EngineError::Spawn {
        program: program.clone(),
        source,
    })?;

    if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
        stdin
            .write_all(text.as_bytes())
            .map_err(|source| EngineError::Spawn {
                program: program.clone(),
                source,
            })?;
        // stdin is closed here so the engine sees EOF
    }

    let output = child.wait_with_output().map_err(|source| EngineError::Spawn {
        program: program.clone(),
        source,
    })?;

    Ok((program, output))
}

/// Turn a non-zero exit into [`EngineError::CommandFailed`]
pub fn check(program: &str, output: Output) -> Result<Output, EngineError> {
    if !output.status.success() {
        return Err(EngineError::CommandFailed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: failure_text(&output),
        });
    }
    Ok(output)
}

/// Check the engine actually produced the file it claimed to write
pub fn verify_written(path: &Path) -> Result<(), EngineError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(EngineError::NoOutput(path.to_path_buf()))
    }
}

/// Last meaningful line of the engine's error output
pub fn failure_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout)
    } else {
        stderr
    };

    // Python tracebacks end with the actual exception line
    text.lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .map(|l| l.trim().to_string())
        .unwrap_or_else(|| "no error output".to_string())
}
