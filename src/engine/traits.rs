//! Trait definitions for speech synthesis
//!
//! These traits abstract over the external engine to enable testing with mocks.

use crate::domain::{EngineKind, ModelName, SpeechText};
use crate::error::EngineError;

use std::path::Path;

/// A loaded model, ready to turn text into audio
pub trait Synthesizer {
    /// Model this handle was loaded with
    fn model(&self) -> &ModelName;

    /// Synthesize `text` and write the audio to `path`
    ///
    /// The audio container is whatever the engine produces; the default
    /// models write WAV.
    fn synthesize_to_file(&self, text: &SpeechText, path: &Path) -> Result<(), EngineError>;
}

/// An external speech engine
///
/// Usage is strictly `acquire`, then `load`, then one synthesis call on the
/// returned handle.
pub trait SpeechEngine {
    /// The handle type returned by [`SpeechEngine::load`]
    type Synthesizer: Synthesizer;

    /// Which engine this is
    fn kind(&self) -> EngineKind;

    /// Program (name or path) the engine runs
    fn program(&self) -> &str;

    /// Make sure the engine is installed and usable
    fn acquire(&mut self) -> Result<(), EngineError>;

    /// Load a model by name
    ///
    /// Returns [`EngineError::NotAcquired`] if called before `acquire`.
    fn load(&self, model: &ModelName) -> Result<Self::Synthesizer, EngineError>;
}
