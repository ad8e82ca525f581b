//! Configuration builder
//!
//! Merges CLI values over defaults. Engine-dependent defaults (program,
//! model) are resolved in `build`, after the engine is known.

use crate::config::Config;
use crate::domain::{EngineKind, ModelName};

/// Builder for merging configuration sources
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    engine: Option<EngineKind>,
    program: Option<String>,
    model: Option<String>,
    verbose: bool,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Override with CLI engine choice
    pub fn with_engine(mut self, engine: Option<EngineKind>) -> Self {
        if let Some(e) = engine {
            self.engine = Some(e);
        }
        self
    }

    /// Override with CLI executable path
    pub fn with_program(mut self, program: Option<String>) -> Self {
        if let Some(p) = program.filter(|p| !p.is_empty()) {
            self.program = Some(p);
        }
        self
    }

    /// Override with CLI model name
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(m) = model {
            self.model = Some(m);
        }
        self
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.verbose = v;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        let engine = self.engine.unwrap_or_default();
        Config {
            engine,
            program: self
                .program
                .unwrap_or_else(|| engine.default_program().to_string()),
            model: ModelName::or_default(self.model, engine),
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_builder_engine_drives_defaults() {
        let config = ConfigBuilder::new()
            .with_engine(Some(EngineKind::Piper))
            .build();
        assert_eq!(config.program, "piper");
        assert_eq!(config.model.as_str(), "en_US-lessac-medium");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_engine(Some(EngineKind::Coqui))
            .with_program(Some("/opt/coqui/bin/tts".to_string()))
            .with_model(Some("tts_models/en/vctk/vits".to_string()))
            .with_verbose(Some(true))
            .build();

        assert_eq!(config.program, "/opt/coqui/bin/tts");
        assert_eq!(config.model.as_str(), "tts_models/en/vctk/vits");
        assert!(config.verbose);
    }

    #[test]
    fn test_builder_ignores_empty_program() {
        let config = ConfigBuilder::new().with_program(Some(String::new())).build();
        assert_eq!(config.program, "tts");
    }
}
