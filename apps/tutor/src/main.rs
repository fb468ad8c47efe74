mod commands;
mod config;
mod errors;
mod evaluation;
mod library;
mod models;
mod prompting;
mod selection;
mod state;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::commands::Command;
use crate::config::Config;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(
    name = "tutor",
    about = "Tutoring prompt generator with relevance-ranked multi-shot examples",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON example library; overrides TUTOR_LIBRARY_PATH
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    /// Debug logging for this crate; takes precedence over RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.library {
        config.library_path = Some(path);
    }

    // Structured logging on stderr; stdout carries prompts and JSON
    let directives = config.log_directives(cli.verbose);
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log directives '{directives}'"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting tutor v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &state, &mut out)
}
