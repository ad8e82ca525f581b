//! CLI argument definitions using clap derive

use crate::config::{ENV_ENGINE, ENV_MODEL, ENV_TTS_BIN};
use crate::domain::{EngineKind, OutputPath, SpeechText};
use crate::error::AppError;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Usage line printed for missing arguments
pub const USAGE: &str = "Usage: ttsay <text> <output_path> [model_name]";

/// Text-to-speech from the command line
///
/// Synthesize TEXT with a pretrained model and save the audio to OUTPUT_PATH.
#[derive(Parser, Debug)]
#[command(name = "ttsay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text to synthesize (may start with '-')
    #[arg(allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Path to save the audio file (parent directories are created)
    pub output_path: Option<PathBuf>,

    /// TTS model name (defaults to the engine's standard model)
    #[arg(env = ENV_MODEL)]
    pub model_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Speech engine to use
    #[arg(long, value_enum, env = ENV_ENGINE, default_value = "coqui")]
    pub engine: EngineArg,

    /// Path to the engine executable
    #[arg(long, value_name = "PATH", env = ENV_TTS_BIN)]
    pub tts_bin: Option<String>,

    /// Output format for the result
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Required positional arguments, or a usage error
    pub fn positionals(&self) -> Result<(SpeechText, OutputPath), AppError> {
        match (&self.text, &self.output_path) {
            (Some(text), Some(path)) => {
                Ok((SpeechText::new(text.clone()), OutputPath::new(path.clone())))
            }
            _ => Err(AppError::Usage("Missing required arguments".to_string())),
        }
    }
}

/// Engine argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineArg {
    /// Coqui TTS (`tts` command)
    Coqui,
    /// Piper (`piper` command)
    Piper,
}

impl From<EngineArg> for EngineKind {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Coqui => EngineKind::Coqui,
            EngineArg::Piper => EngineKind::Piper,
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable progress and confirmation
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
