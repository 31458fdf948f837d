//! Score submission.
//!
//! Reporting is two separable steps:
//! 1. [`ScoreReporter::submit`] sends the form and waits for it to settle
//! 2. [`Reload::reload`] resets the host, whatever the settlement was
//!
//! [`ScoreReporter::report`] runs both. There is no retry and nothing is
//! surfaced to the player; a failed submission is only logged.

mod mock;
mod transport;

pub use mock::RecordingTransport;
pub use transport::*;

use std::fmt;

use tracing::{info, warn};

use crate::catalogue::GameKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicationId(pub u64);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One final score, built once per completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub application_id: ApplicationId,
    pub game_key: GameKey,
    pub score: u32,
}

impl ScoreReport {
    pub fn new(application_id: ApplicationId, game_key: GameKey, score: u32) -> Self {
        Self {
            application_id,
            game_key,
            score,
        }
    }
}

/// Metadata the hosting page exposes to the reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// Anti-forgery token; sent as `X-CSRFToken` when present.
    pub csrf_token: Option<String>,
}

impl PageMeta {
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            csrf_token: (!token.is_empty()).then_some(token),
        }
    }
}

/// A ready-to-send form POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Path relative to the server origin
    pub path: String,
    pub game_key: String,
    pub score: String,
    pub csrf_token: Option<String>,
}

impl Submission {
    pub fn new(report: &ScoreReport, meta: &PageMeta) -> Self {
        Self {
            path: format!(
                "/client/application/{}/games/submit",
                report.application_id
            ),
            game_key: report.game_key.as_str().to_string(),
            score: report.score.to_string(),
            csrf_token: meta.csrf_token.clone(),
        }
    }

    /// Form fields in send order.
    pub fn form(&self) -> [(&'static str, &str); 2] {
        [("game_key", self.game_key.as_str()), ("score", self.score.as_str())]
    }
}

/// How a submission ended. Only ever logged; behaviour is identical for all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Accepted { status: u16 },
    Rejected { status: u16 },
    Failed { reason: String },
}

impl Settlement {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { status } => write!(f, "accepted (HTTP {})", status),
            Self::Rejected { status } => write!(f, "rejected (HTTP {})", status),
            Self::Failed { reason } => write!(f, "failed ({})", reason),
        }
    }
}

/// Full reset of the host after a report.
pub trait Reload {
    fn reload(&mut self);
}

pub struct ScoreReporter<T: Transport> {
    transport: T,
    meta: PageMeta,
}

impl<T: Transport> ScoreReporter<T> {
    pub fn new(transport: T, meta: PageMeta) -> Self {
        Self { transport, meta }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send the report and wait until the request settles.
    pub fn submit(&self, report: &ScoreReport) -> Settlement {
        let submission = Submission::new(report, &self.meta);
        let settlement = match self.transport.submit(&submission) {
            Ok(settlement) => settlement,
            Err(e) => Settlement::Failed {
                reason: e.to_string(),
            },
        };
        if settlement.is_accepted() {
            info!(
                "Submitted {} = {}: {}",
                report.game_key, report.score, settlement
            );
        } else {
            warn!(
                "Submission of {} = {} {}",
                report.game_key, report.score, settlement
            );
        }
        settlement
    }

    /// Submit, then reload unconditionally.
    pub fn report<L: Reload + ?Sized>(&self, report: &ScoreReport, host: &mut L) -> Settlement {
        let settlement = self.submit(report);
        host.reload();
        settlement
    }
}
