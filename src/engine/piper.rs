//! Piper engine
//!
//! Drives the `piper` command. Text is passed on stdin.

use crate::domain::{EngineKind, ModelName, SpeechText};
use crate::engine::command;
use crate::engine::traits::{SpeechEngine, Synthesizer};
use crate::error::EngineError;

use std::path::{Path, PathBuf};
use std::process::Command;

/// Piper engine backed by the `piper` executable
#[derive(Debug, Clone)]
pub struct PiperEngine {
    program: String,
    executable: Option<PathBuf>,
}

impl PiperEngine {
    /// Create an engine that will run `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            executable: None,
        }
    }
}

impl Default for PiperEngine {
    fn default() -> Self {
        Self::new(EngineKind::Piper.default_program())
    }
}

impl SpeechEngine for PiperEngine {
    type Synthesizer = PiperSynthesizer;

    fn kind(&self) -> EngineKind {
        EngineKind::Piper
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn acquire(&mut self) -> Result<(), EngineError> {
        let path = command::locate(&self.program)?;
        log::debug!("Using Piper at {}", path.display());
        self.executable = Some(path);
        Ok(())
    }

    fn load(&self, model: &ModelName) -> Result<Self::Synthesizer, EngineError> {
        let executable = self.executable.clone().ok_or(EngineError::NotAcquired)?;

        // Voice names are resolved (and downloaded) by piper itself
        if model.is_onnx_file() {
            let onnx = Path::new(model.as_str());
            if !onnx.is_file() {
                return Err(EngineError::ModelNotFound(format!(
                    "{} (no such file)",
                    model
                )));
            }
            let config = sidecar_config(onnx);
            if !config.is_file() {
                return Err(EngineError::ModelNotFound(format!(
                    "{} (missing voice config {})",
                    model,
                    config.display()
                )));
            }
        }

        Ok(PiperSynthesizer {
            executable,
            model: model.clone(),
        })
    }
}

/// `voice.onnx` is accompanied by `voice.onnx.json`
fn sidecar_config(onnx: &Path) -> PathBuf {
    let mut name = onnx.as_os_str().to_os_string();
    name.push(".json");
    PathBuf::from(name)
}

/// Loaded Piper voice
#[derive(Debug, Clone)]
pub struct PiperSynthesizer {
    executable: PathBuf,
    model: ModelName,
}

impl Synthesizer for PiperSynthesizer {
    fn model(&self) -> &ModelName {
        &self.model
    }

    fn synthesize_to_file(&self, text: &SpeechText, path: &Path) -> Result<(), EngineError> {
        let mut cmd = Command::new(&self.executable);
        cmd.arg("--model")
            .arg(self.model.as_str())
            .arg("--output_file")
            .arg(path);

        command::run(cmd, Some(text.as_str()))?;
        command::verify_written(path)
    }
}
