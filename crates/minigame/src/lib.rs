//! # minigame
//!
//! Casual mini-games as toolkit-independent state machines, plus the score
//! reporter that submits each finished session to the server.
//!
//! This crate provides:
//! - Twelve games behind the [`MiniGame`] trait (Idle -> Active -> Complete)
//! - [`Arcade`], which dispatches inputs, runs session-tagged timers, and
//!   builds [`ScoreReport`]s
//! - [`ScoreReporter`], a two-step submit-then-reload contract over a
//!   pluggable [`Transport`]
//!
//! ## Feature Flags
//!
//! - `http` (default): [`HttpTransport`] backed by `ureq`.

pub mod arcade;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod games;
pub mod report;
pub mod session;
pub mod timer;

pub use arcade::{Arcade, Dispatched, View};
pub use catalogue::{ColorName, GameKey};
pub use config::ReporterConfig;
pub use error::{Error, Result};
pub use games::MiniGame;
#[cfg(feature = "http")]
pub use report::HttpTransport;
pub use report::{
    ApplicationId, DryRunTransport, PageMeta, RecordingTransport, Reload, ScoreReport,
    ScoreReporter, Settlement, Submission, Transport,
};
pub use session::{
    Coin, Ctx, ElementId, Input, Phase, SessionToken, Step, TimerKind, TimerTag, Update,
};
pub use timer::TimerQueue;
