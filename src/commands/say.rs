//! Say command implementation
//!
//! Synthesizes the given text with the configured engine and reports where
//! the audio was saved.

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::output::{write_output, SynthesisReport};
use crate::config::{Config, ConfigBuilder};
use crate::domain::EngineKind;
use crate::engine::{CoquiEngine, PiperEngine, SpeechEngine};
use crate::error::Result;
use crate::services::{SynthesisRequest, SynthesisService};

use std::io::{self, Write};

/// Execute the say command with an already resolved configuration
pub fn run_say(cli: &Cli, config: &Config) -> Result<()> {
    let (text, output) = cli.positionals()?;

    let request = SynthesisRequest::new(text, output, config.model.clone());
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match config.engine {
        EngineKind::Coqui => say_with(
            CoquiEngine::new(config.program.clone()),
            &request,
            cli.format,
            &mut handle,
        ),
        EngineKind::Piper => say_with(
            PiperEngine::new(config.program.clone()),
            &request,
            cli.format,
            &mut handle,
        ),
    }
}

/// Run one synthesis against `engine`, writing progress and the report to `out`
///
/// Progress lines are only written for the table format so JSON output
/// stays parseable.
pub fn say_with<E: SpeechEngine, W: Write>(
    engine: E,
    request: &SynthesisRequest,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let mut service = SynthesisService::new(engine);

    let outcome = if format == OutputFormat::Table {
        service.run(request, out)?
    } else {
        service.run(request, &mut io::sink())?
    };

    write_output(out, &SynthesisReport::from(&outcome), format)?;
    Ok(())
}

/// Configuration the say command would use, without running anything
pub fn resolve_config(cli: &Cli) -> Config {
    ConfigBuilder::new()
        .with_engine(Some(cli.engine.into()))
        .with_program(cli.tts_bin.clone())
        .with_model(cli.model_name.clone())
        .with_verbose(Some(cli.verbose))
        .build()
}
