//! Output formatting utilities
//!
//! Provides table, JSON and compact output formatting for CLI results.

use crate::cli::args::OutputFormat;
use crate::domain::{EngineKind, ModelName, OutputPath};
use crate::services::SynthesisOutcome;
use serde::Serialize;
use std::io::{self, Write};

/// Format and write output to any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Report printed after a successful synthesis
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisReport {
    pub output_path: OutputPath,
    pub engine: EngineKind,
    pub model: ModelName,
    pub characters: usize,
}

impl From<&SynthesisOutcome> for SynthesisReport {
    fn from(outcome: &SynthesisOutcome) -> Self {
        Self {
            output_path: outcome.output.clone(),
            engine: outcome.engine,
            model: outcome.model.clone(),
            characters: outcome.characters,
        }
    }
}

impl TableDisplay for SynthesisReport {
    fn to_table(&self) -> String {
        format!("Speech saved to: {}", self.output_path)
    }

    fn to_compact(&self) -> String {
        format!(
            "{}:{}:{}",
            self.engine.display_name().to_lowercase(),
            self.model,
            self.output_path
        )
    }
}
