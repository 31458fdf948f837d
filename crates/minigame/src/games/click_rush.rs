use tracing::debug;

use super::MiniGame;
use crate::catalogue::GameKey;
use crate::config::click_rush::DURATION;
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step, TimerKind};

const BUTTON: ElementId = "clickRushBtn";
const STAT: ElementId = "clickRushStat";
const START: ElementId = "clickRushStart";

/// Count clicks until the fixed window closes.
pub struct ClickRush {
    session: Session,
    clicks: u32,
}

impl ClickRush {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::ClickRush),
            clicks: 0,
        }
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }
}

impl Default for ClickRush {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for ClickRush {
    fn key(&self) -> GameKey {
        GameKey::ClickRush
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[BUTTON, STAT, START]
    }

    fn handle(&mut self, input: &Input, _ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.clicks = 0;
                Step::none()
                    .show(STAT, "Clicks: 0 (10s)")
                    .after(self.session.timer(TimerKind::Deadline), DURATION)
            }
            Input::Press if self.session.is_active() => {
                self.clicks += 1;
                Step::none().show(STAT, format!("Clicks: {}", self.clicks))
            }
            Input::Timer(tag) if self.session.owns(tag, TimerKind::Deadline) => {
                self.session.complete();
                debug!("Click rush finished with {} clicks", self.clicks);
                Step::none()
                    .show(STAT, format!("Finished: {} clicks", self.clicks))
                    .finish(self.clicks)
            }
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.clicks = 0;
    }
}
