//! Domain models for ttsay
//!
//! Value types passed through the synthesis pipeline.
//! Types are validated on construction (fail-fast pattern).

pub mod model;
pub mod output;
pub mod text;

pub use model::{EngineKind, ModelName};
pub use output::OutputPath;
pub use text::SpeechText;
