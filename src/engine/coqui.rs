//! Coqui TTS engine
//!
//! Drives the `tts` command shipped with the Coqui `TTS` Python package.

use crate::domain::{EngineKind, ModelName, SpeechText};
use crate::engine::command;
use crate::engine::traits::{SpeechEngine, Synthesizer};
use crate::error::EngineError;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Coqui prints this instead of failing when a model is unknown
const UNKNOWN_MODEL_MARKER: &str = "does not exist";

/// Coqui prints this once the model is built and inference starts
const INFERENCE_MARKER: &str = " > Text:";

/// Coqui engine backed by the `tts` executable
#[derive(Debug, Clone)]
pub struct CoquiEngine {
    program: String,
    executable: Option<PathBuf>,
}

impl CoquiEngine {
    /// Create an engine that will run `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            executable: None,
        }
    }

    fn executable(&self) -> Result<&Path, EngineError> {
        self.executable.as_deref().ok_or(EngineError::NotAcquired)
    }
}

impl Default for CoquiEngine {
    fn default() -> Self {
        Self::new(EngineKind::Coqui.default_program())
    }
}

impl SpeechEngine for CoquiEngine {
    type Synthesizer = CoquiSynthesizer;

    fn kind(&self) -> EngineKind {
        EngineKind::Coqui
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn acquire(&mut self) -> Result<(), EngineError> {
        let path = command::locate(&self.program)?;
        log::debug!("Using Coqui TTS at {}", path.display());
        self.executable = Some(path);
        Ok(())
    }

    fn load(&self, model: &ModelName) -> Result<Self::Synthesizer, EngineError> {
        let executable = self.executable()?;
        validate_model_name(model)?;

        let mut cmd = Command::new(executable);
        cmd.arg("--model_info_by_name").arg(model.as_str());
        let output = command::run(cmd, None)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if let Some(line) = stdout.lines().find(|l| l.contains(UNKNOWN_MODEL_MARKER)) {
            return Err(EngineError::ModelNotFound(format!(
                "{} ({})",
                model,
                line.trim().trim_start_matches('>').trim()
            )));
        }

        Ok(CoquiSynthesizer {
            executable: executable.to_path_buf(),
            model: model.clone(),
        })
    }
}

/// Coqui model names have the form `<type>/<language>/<dataset>/<model>`
fn validate_model_name(model: &ModelName) -> Result<(), EngineError> {
    let parts: Vec<&str> = model.as_str().split('/').collect();
    if parts.len() != 4 || parts.iter().any(|p| p.is_empty()) {
        return Err(EngineError::ModelNotFound(format!(
            "{} (expected <type>/<language>/<dataset>/<model>)",
            model
        )));
    }
    Ok(())
}

/// Loaded Coqui model
#[derive(Debug, Clone)]
pub struct CoquiSynthesizer {
    executable: PathBuf,
    model: ModelName,
}

impl Synthesizer for CoquiSynthesizer {
    fn model(&self) -> &ModelName {
        &self.model
    }

    /// Runs `tts`, which downloads and builds the model before inference.
    ///
    /// A failure before inference starts is a model load failure; the
    /// registry check in `load` cannot see a broken download or checkpoint.
    fn synthesize_to_file(&self, text: &SpeechText, path: &Path) -> Result<(), EngineError> {
        // Single `--text=` token so text starting with '-' is not read as a flag
        let mut text_arg = OsString::from("--text=");
        text_arg.push(text.as_str());

        let mut cmd = Command::new(&self.executable);
        cmd.arg(text_arg)
            .arg("--model_name")
            .arg(self.model.as_str())
            .arg("--out_path")
            .arg(path);

        let (program, output) = command::capture(cmd, None)?;
        if !output.status.success()
            && !String::from_utf8_lossy(&output.stdout).contains(INFERENCE_MARKER)
        {
            return Err(EngineError::ModelLoadFailed {
                model: self.model.to_string(),
                reason: command::failure_text(&output),
            });
        }

        command::check(&program, output)?;
        command::verify_written(path)
    }
}
