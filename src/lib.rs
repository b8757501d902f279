pub mod chat;
pub mod config;
pub mod console;
pub mod core_state;
pub mod dashboard;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod records;
pub mod symptoms;

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::core_state::CoreState;
use crate::models::enums::Language;
use crate::navigation::Route;

/// Command-line options. Flags override settings file and environment.
#[derive(Parser, Debug)]
#[command(name = "chikitsa")]
#[command(version)]
#[command(about = "Multilingual symptom checker (not a substitute for medical advice)", long_about = None)]
pub struct Cli {
    /// Chat language: en, hi or pa
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Pause before each reply, in milliseconds
    #[arg(short, long)]
    pub delay_ms: Option<u64>,

    /// Settings file (defaults to ~/Chikitsa/settings.json)
    #[arg(short, long)]
    pub settings: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Core(#[from] core_state::CoreError),
    #[error(transparent)]
    Console(#[from] console::ConsoleError),
    #[error("Cannot start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Resolve settings: file, then `CHIKITSA_*` environment, then flags.
pub fn resolve_settings(cli: &Cli) -> Result<Settings, config::ConfigError> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let mut settings = Settings::load_from(path)?;
            settings.apply_overrides(|key| std::env::var(key).ok())?;
            settings
        }
        None => Settings::load()?,
    };

    if let Some(language) = cli.lang {
        settings.language = language;
    }
    if let Some(delay_ms) = cli.delay_ms {
        settings.thinking_delay_ms = delay_ms;
    }
    settings.validate()?;
    Ok(settings)
}

fn run_console(cli: &Cli) -> Result<(), AppError> {
    let settings = resolve_settings(cli)?;
    tracing::info!(
        language = %settings.language,
        thinking_delay_ms = settings.thinking_delay_ms,
        "Settings resolved"
    );

    let state = CoreState::new(settings);
    state.navigate(Route::SymptomChecker)?;
    let session = state.new_symptom_chat()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    runtime.block_on(console::run_console(&session, stdin.lock(), stdout.lock()))?;
    Ok(())
}

pub fn run() {
    // Logs go to stderr so they never interleave with the chat on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cli = Cli::parse();
    if let Err(e) = run_console(&cli) {
        tracing::error!(error = %e, "Exiting with error");
        eprintln!("chikitsa: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "language": "hi", "thinking_delay_ms": 500 }"#).unwrap();

        let cli = Cli::parse_from([
            "chikitsa",
            "--settings",
            path.to_str().unwrap(),
            "--lang",
            "pa",
        ]);
        let settings = resolve_settings(&cli).unwrap();
        assert_eq!(settings.language, Language::Punjabi);
        assert_eq!(settings.thinking_delay_ms, 500);
    }

    #[test]
    fn invalid_lang_flag_rejected() {
        assert!(Cli::try_parse_from(["chikitsa", "--lang", "fr"]).is_err());
    }

    #[test]
    fn delay_flag_parses() {
        let cli = Cli::try_parse_from(["chikitsa", "-d", "0"]).unwrap();
        assert_eq!(cli.delay_ms, Some(0));
        assert_eq!(cli.lang, None);
    }
}
