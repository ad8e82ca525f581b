//! Service layer for speech synthesis
//!
//! Services encapsulate the pipeline logic independent of the concrete engine.

pub mod synthesis;

pub use synthesis::{SynthesisOutcome, SynthesisRequest, SynthesisService};
