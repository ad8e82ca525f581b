//! Model identifiers and engine selection

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Default Coqui model (LJSpeech Tacotron2)
pub const DEFAULT_COQUI_MODEL: &str = "tts_models/en/ljspeech/tacotron2-DDC";

/// Default Piper voice
pub const DEFAULT_PIPER_MODEL: &str = "en_US-lessac-medium";

/// Supported speech engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Coqui TTS (`tts` command)
    #[default]
    Coqui,
    /// Piper (`piper` command)
    Piper,
}

impl EngineKind {
    /// Model used when none is given
    pub const fn default_model(&self) -> &'static str {
        match self {
            EngineKind::Coqui => DEFAULT_COQUI_MODEL,
            EngineKind::Piper => DEFAULT_PIPER_MODEL,
        }
    }

    /// Executable name looked up on PATH
    pub const fn default_program(&self) -> &'static str {
        match self {
            EngineKind::Coqui => "tts",
            EngineKind::Piper => "piper",
        }
    }

    /// Human-readable name
    pub const fn display_name(&self) -> &'static str {
        match self {
            EngineKind::Coqui => "Coqui",
            EngineKind::Piper => "Piper",
        }
    }

    /// Installation hint shown when the executable is missing
    pub const fn install_hint(&self) -> &'static str {
        match self {
            EngineKind::Coqui => "Install Coqui TTS with 'pip install TTS' and make sure 'tts' is on PATH.",
            EngineKind::Piper => "Install Piper with 'pip install piper-tts' and make sure 'piper' is on PATH.",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Name of a pretrained model or voice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModelName(String);

impl ModelName {
    /// Create a model name from an identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The default model for an engine
    pub fn default_for(engine: EngineKind) -> Self {
        Self::new(engine.default_model())
    }

    /// Use `name` if given, otherwise the engine default
    pub fn or_default(name: Option<String>, engine: EngineKind) -> Self {
        match name {
            Some(n) if !n.is_empty() => Self::new(n),
            _ => Self::default_for(engine),
        }
    }

    /// Identifier as passed to the engine
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier names a local ONNX model file
    pub fn is_onnx_file(&self) -> bool {
        Path::new(&self.0)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("onnx"))
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
