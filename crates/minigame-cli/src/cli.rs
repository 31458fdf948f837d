//! CLI argument definitions for minigame.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use minigame::GameKey;

#[derive(Parser)]
#[command(name = "minigame")]
#[command(about = "Casual mini-games with score submission", version)]
pub struct Args {
    /// Config file (default: <config dir>/minigame/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Server origin scores are posted to
    #[arg(long, env = "MINIGAME_BASE_URL")]
    pub base_url: Option<String>,

    /// Application the scores belong to
    #[arg(long, env = "MINIGAME_APP_ID")]
    pub app_id: Option<u64>,

    /// Anti-forgery token sent as X-CSRFToken
    #[arg(long, env = "MINIGAME_CSRF_TOKEN")]
    pub csrf_token: Option<String>,

    /// Session cookie for the logged-in user (e.g. "session=...")
    #[arg(long, env = "MINIGAME_SESSION_COOKIE")]
    pub session_cookie: Option<String>,

    /// Log submissions instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List available games
    List,
    /// Play a game in the terminal
    Play {
        /// Game alias or key (e.g. quiz, molayman_quiz)
        game: GameKey,
    },
    /// Submit a score directly
    Submit {
        /// Game alias or key
        game: GameKey,
        /// Score value
        score: u32,
    },
    /// Show the resolved configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
