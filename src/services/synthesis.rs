//! Synthesis pipeline
//!
//! Runs the fixed sequence: output directory, engine, model, audio.
//! Each step fails fast; nothing is retried or rolled back.

use crate::domain::{EngineKind, ModelName, OutputPath, SpeechText};
use crate::engine::{SpeechEngine, Synthesizer};
use crate::error::{AppError, EngineError, Result};

use std::io::Write;

/// Input for one synthesis run
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: SpeechText,
    pub output: OutputPath,
    pub model: ModelName,
}

impl SynthesisRequest {
    /// Create a new request
    pub fn new(text: SpeechText, output: OutputPath, model: ModelName) -> Self {
        Self {
            text,
            output,
            model,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct SynthesisOutcome {
    pub engine: EngineKind,
    pub model: ModelName,
    pub output: OutputPath,
    pub characters: usize,
}

/// Service running the synthesis pipeline against an engine
pub struct SynthesisService<E: SpeechEngine> {
    engine: E,
}

impl<E: SpeechEngine> SynthesisService<E> {
    /// Create a new synthesis service
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Run the pipeline, writing progress lines to `progress`
    pub fn run<W: Write>(
        &mut self,
        request: &SynthesisRequest,
        progress: &mut W,
    ) -> Result<SynthesisOutcome> {
        if let Some(dir) = request
            .output
            .ensure_parent_dir()
            .map_err(|source| AppError::OutputDirectory {
                path: request
                    .output
                    .parent_dir()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_default(),
                source,
            })?
        {
            log::debug!("Output directory ready: {}", dir.display());
        }

        self.engine.acquire().map_err(|e| self.dependency_missing(e))?;

        writeln!(progress, "Loading TTS model: {}", request.model)?;
        let synthesizer = self
            .engine
            .load(&request.model)
            .map_err(|e| AppError::ModelLoad(e.to_string()))?;
        log::info!("Loaded {} model {}", self.engine.kind(), synthesizer.model());

        writeln!(progress, "Generating speech: '{}'", request.text.preview())?;
        synthesizer
            .synthesize_to_file(&request.text, request.output.as_path())
            .map_err(synthesis_failure)?;
        log::info!("Wrote {}", request.output);

        Ok(SynthesisOutcome {
            engine: self.engine.kind(),
            model: synthesizer.model().clone(),
            output: request.output.clone(),
            characters: request.text.char_count(),
        })
    }

    fn dependency_missing(&self, err: EngineError) -> AppError {
        let (program, reason) = match err {
            EngineError::NotInstalled { program, reason } => (program, reason),
            other => (self.engine.program().to_string(), other.to_string()),
        };
        AppError::DependencyMissing {
            engine: self.engine.kind().display_name().to_string(),
            program,
            reason,
        }
    }
}

/// Engines may only build the model when synthesis runs
fn synthesis_failure(err: EngineError) -> AppError {
    match err {
        EngineError::ModelNotFound(_) | EngineError::ModelLoadFailed { .. } => {
            AppError::ModelLoad(err.to_string())
        }
        other => AppError::Synthesis(other.to_string()),
    }
}
