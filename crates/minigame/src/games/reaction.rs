use std::time::Duration;

use rand::Rng;
use tracing::debug;

use super::MiniGame;
use crate::catalogue::GameKey;
use crate::config::reaction::{DELAY_SPREAD_MS, MIN_DELAY_MS};
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step, TimerKind};

const BOX: ElementId = "reactionBox";
const STAT: ElementId = "reactionStat";
const START: ElementId = "reactionStart";

/// Measure the delay between a randomly timed signal and the player's click.
///
/// The score is the raw reaction time in milliseconds; no normalisation is
/// applied, so lower is better for the player.
pub struct Reaction {
    session: Session,
    signalled_at: Option<Duration>,
}

impl Reaction {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::Reaction),
            signalled_at: None,
        }
    }

    pub fn is_signalled(&self) -> bool {
        self.signalled_at.is_some()
    }
}

impl Default for Reaction {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for Reaction {
    fn key(&self) -> GameKey {
        GameKey::Reaction
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[BOX, STAT, START]
    }

    fn handle(&mut self, input: &Input, ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.signalled_at = None;
                let delay = MIN_DELAY_MS + ctx.rng.gen_range(0..DELAY_SPREAD_MS);
                debug!("Reaction signal in {}ms", delay);
                Step::none()
                    .show(STAT, "Wait for green…")
                    .show(BOX, "")
                    .after(
                        self.session.timer(TimerKind::Signal),
                        Duration::from_millis(delay),
                    )
            }
            Input::Timer(tag) if self.session.owns(tag, TimerKind::Signal) => {
                self.signalled_at = Some(ctx.now);
                Step::none()
                    .show_colored(BOX, "GO", "#34d399")
                    .show(STAT, "GO! Click the box!")
            }
            Input::Press => match self.signalled_at {
                Some(at) if self.session.is_active() => {
                    let ms = ctx.now.saturating_sub(at).as_millis();
                    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
                    self.signalled_at = None;
                    self.session.complete();
                    Step::none()
                        .show(BOX, "")
                        .show(STAT, format!("Reaction: {} ms", ms))
                        .finish(ms)
                }
                // Early click: warn only, the session keeps waiting for the signal
                _ => Step::none().show(STAT, "Too early. Try again."),
            },
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.signalled_at = None;
    }
}
