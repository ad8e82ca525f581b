//! Speech engine abstraction layer
//!
//! Provides trait-based abstractions over external TTS programs for testability.

pub mod command;
pub mod coqui;
pub mod piper;
pub mod traits;

pub use coqui::{CoquiEngine, CoquiSynthesizer};
pub use piper::{PiperEngine, PiperSynthesizer};
pub use traits::{SpeechEngine, Synthesizer};
