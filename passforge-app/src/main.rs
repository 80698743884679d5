mod cli;
mod clipboard;
mod reveal;
pub mod tui;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::commands::run_cli;
use cli::opts::{Cli, Command};
use passforge_json::SettingsStore;

fn log_level(default: Level) -> Level {
    match std::env::var("LOG_LEVEL")
        .map(|v| v.to_lowercase())
        .as_deref()
    {
        Ok("trace") => Level::TRACE,
        Ok("debug") => Level::DEBUG,
        Ok("info") => Level::INFO,
        Ok("warn") => Level::WARN,
        Ok("error") => Level::ERROR,
        _ => default,
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // The TUI owns the terminal; keep stderr quiet unless asked.
    let default_level = match args.cmd {
        None | Some(Command::Tui) => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(default_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = SettingsStore::open_default();
    tracing::debug!(path = %store.path().display(), "settings file");
    run_cli(args, store)
}
