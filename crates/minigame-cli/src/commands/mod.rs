pub mod config;
pub mod list;
pub mod menu;
pub mod play;
pub mod submit;

use minigame::{
    DryRunTransport, HttpTransport, Result as GameResult, ScoreReporter, Settlement, Submission,
    Transport,
};
use tracing::debug;

use crate::settings::Settings;

/// Live or dry-run sender, picked at startup.
pub enum CliTransport {
    Http(HttpTransport),
    DryRun(DryRunTransport),
}

impl Transport for CliTransport {
    fn submit(&self, submission: &Submission) -> GameResult<Settlement> {
        match self {
            Self::Http(transport) => transport.submit(submission),
            Self::DryRun(transport) => transport.submit(submission),
        }
    }
}

pub fn build_reporter(settings: &Settings) -> ScoreReporter<CliTransport> {
    let transport = if settings.dry_run {
        debug!("Dry run, submissions are only logged");
        CliTransport::DryRun(DryRunTransport)
    } else {
        CliTransport::Http(HttpTransport::from_config(&settings.reporter))
    };
    ScoreReporter::new(transport, settings.page_meta())
}
