//! Mock implementations for testing
//!
//! Provides a mock speech engine for unit testing without a TTS install.

use crate::domain::{EngineKind, ModelName, SpeechText};
use crate::engine::{SpeechEngine, Synthesizer};
use crate::error::EngineError;

use std::path::Path;
use std::sync::{Arc, Mutex};

/// Shared record of calls made against a mock engine
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Mock speech engine for testing
#[derive(Debug, Default)]
pub struct MockEngine {
    calls: CallLog,
    fail_acquire: Option<String>,
    fail_load: Option<String>,
    fail_synthesize: Option<String>,
    fail_model_late: Option<String>,
    acquired: bool,
}

impl MockEngine {
    /// Create a mock engine where every step succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: make `acquire` fail
    pub fn failing_acquire(mut self, reason: impl Into<String>) -> Self {
        self.fail_acquire = Some(reason.into());
        self
    }

    /// Builder: make `load` fail
    pub fn failing_load(mut self, reason: impl Into<String>) -> Self {
        self.fail_load = Some(reason.into());
        self
    }

    /// Builder: make synthesis fail
    pub fn failing_synthesize(mut self, reason: impl Into<String>) -> Self {
        self.fail_synthesize = Some(reason.into());
        self
    }

    /// Builder: make synthesis fail while building the model
    pub fn failing_model_at_synthesis(mut self, reason: impl Into<String>) -> Self {
        self.fail_model_late = Some(reason.into());
        self
    }

    /// Handle on the call log, usable after the engine is moved
    pub fn calls(&self) -> CallLog {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SpeechEngine for MockEngine {
    type Synthesizer = MockSynthesizer;

    fn kind(&self) -> EngineKind {
        EngineKind::Coqui
    }

    fn program(&self) -> &str {
        "mock-tts"
    }

    fn acquire(&mut self) -> Result<(), EngineError> {
        self.record("acquire".to_string());
        if let Some(reason) = &self.fail_acquire {
            return Err(EngineError::NotInstalled {
                program: self.program().to_string(),
                reason: reason.clone(),
            });
        }
        self.acquired = true;
        Ok(())
    }

    fn load(&self, model: &ModelName) -> Result<Self::Synthesizer, EngineError> {
        if !self.acquired {
            return Err(EngineError::NotAcquired);
        }
        self.record(format!("load {}", model));
        if let Some(reason) = &self.fail_load {
            return Err(EngineError::ModelNotFound(reason.clone()));
        }
        Ok(MockSynthesizer {
            model: model.clone(),
            calls: self.calls(),
            fail: self.fail_synthesize.clone(),
            fail_model: self.fail_model_late.clone(),
        })
    }
}

/// Synthesizer handle returned by [`MockEngine`]
#[derive(Debug)]
pub struct MockSynthesizer {
    model: ModelName,
    calls: CallLog,
    fail: Option<String>,
    fail_model: Option<String>,
}

impl Synthesizer for MockSynthesizer {
    fn model(&self) -> &ModelName {
        &self.model
    }

    fn synthesize_to_file(&self, text: &SpeechText, path: &Path) -> Result<(), EngineError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("synthesize {} -> {}", text, path.display()));
        if let Some(reason) = &self.fail_model {
            return Err(EngineError::ModelLoadFailed {
                model: self.model.to_string(),
                reason: reason.clone(),
            });
        }
        match &self.fail {
            Some(reason) => Err(EngineError::CommandFailed {
                program: "mock-tts".to_string(),
                status: "exit status: 1".to_string(),
                stderr: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}
