//! Configuration system
//!
//! Resolves CLI arguments and environment overrides into one `Config`.
//! Environment variables are read by clap (`TTSAY_*`); there is no config file.

pub mod builder;

pub use builder::ConfigBuilder;

use crate::domain::{EngineKind, ModelName};

/// Environment variable selecting the engine
pub const ENV_ENGINE: &str = "TTSAY_ENGINE";

/// Environment variable overriding the engine executable
pub const ENV_TTS_BIN: &str = "TTSAY_TTS_BIN";

/// Environment variable supplying the model when none is given positionally
pub const ENV_MODEL: &str = "TTSAY_MODEL";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Engine to run
    pub engine: EngineKind,
    /// Executable name or path for the engine
    pub program: String,
    /// Model to load
    pub model: ModelName,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        let engine = EngineKind::default();
        Self {
            engine,
            program: engine.default_program().to_string(),
            model: ModelName::default_for(engine),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.engine, EngineKind::Coqui);
        assert_eq!(config.program, "tts");
        assert_eq!(config.model.as_str(), "tts_models/en/ljspeech/tacotron2-DDC");
        assert!(!config.verbose);
    }
}
