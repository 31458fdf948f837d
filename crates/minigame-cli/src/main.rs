mod cli;
mod commands;
mod keymap;
mod settings;
mod terminal;

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides; warn by default so the play screen stays clean
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("minigame_cli=warn,minigame=warn"));
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    let settings = settings::Settings::resolve(&args)?;

    match args.command {
        Some(Command::List) => {
            commands::list::run();
            Ok(())
        }
        Some(Command::Play { game }) => commands::play::run(game, &settings),
        Some(Command::Submit { game, score }) => commands::submit::run(game, score, &settings),
        Some(Command::Config { json }) => commands::config::run(&settings, json),
        None => commands::menu::run(&settings),
    }
}
