//! ttsay - command-line text-to-speech
//!
//! Synthesizes a line of text into an audio file using an external TTS engine.

use clap::error::ErrorKind;
use clap::Parser;
use ttsay::cli::args::{generate_completions, Cli, USAGE};
use ttsay::commands::say::{resolve_config, run_say};
use ttsay::config::Config;
use ttsay::domain::EngineKind;
use ttsay::error::AppError;

fn main() {
    // Parse CLI arguments; every parse failure exits with status 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(1),
            }
        }
    };

    let config = resolve_config(&cli);

    // Initialize logging; RUST_LOG still takes precedence
    let default_filter = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
    log::debug!("Resolved configuration: {:?}", config);

    let result = run(&cli, &config);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e, cli.engine.into());
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    run_say(cli, config)
}

fn print_error(err: &AppError, engine: EngineKind) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Usage(_) => {
            eprintln!("{}", USAGE);
        }
        AppError::DependencyMissing { .. } => {
            eprintln!();
            eprintln!("Hint: {}", engine.install_hint());
            eprintln!("      Or point --tts-bin (TTSAY_TTS_BIN) at the executable.");
        }
        AppError::ModelLoad(_) if engine == EngineKind::Coqui => {
            eprintln!();
            eprintln!("Hint: Run 'tts --list_models' to see available model names.");
        }
        _ => {}
    }
}
