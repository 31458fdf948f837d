use rand::Rng;
use tracing::debug;

use super::MiniGame;
use crate::catalogue::GameKey;
use crate::config::keymaster::{COUNTDOWN_SECS, POINTS_PER_HIT, TICK};
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step, TimerKind};

const TARGET: ElementId = "keyTarget";
const STAT: ElementId = "keyStat";
const TIMER: ElementId = "keyTimer";
const START: ElementId = "keyStart";

/// Type the shown letter; every tick replaces it.
///
/// The countdown hits zero on the last tick, and the tick after that ends the
/// session. Keys pressed while `remaining == 0` don't count.
pub struct Keymaster {
    session: Session,
    score: u32,
    remaining: u32,
    target: Option<char>,
}

impl Keymaster {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::Keymaster),
            score: 0,
            remaining: 0,
            target: None,
        }
    }

    pub fn target(&self) -> Option<char> {
        self.target
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    fn tick(&mut self, ctx: &mut Ctx<'_>) -> Step {
        if self.remaining == 0 {
            self.session.complete();
            debug!("Keymaster finished with {}", self.score);
            return Step::none()
                .show(STAT, format!("Finished: {}", self.score))
                .finish(self.score);
        }

        self.remaining -= 1;
        let letter = char::from(b'A' + ctx.rng.gen_range(0..26u8));
        self.target = Some(letter);
        Step::none()
            .show(TARGET, format!("Type: {}", letter))
            .show(TIMER, format!("{}s", self.remaining))
            .after(self.session.timer(TimerKind::Tick), TICK)
    }
}

impl Default for Keymaster {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for Keymaster {
    fn key(&self) -> GameKey {
        GameKey::Keymaster
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[TARGET, STAT, TIMER, START]
    }

    fn handle(&mut self, input: &Input, ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.score = 0;
                self.remaining = COUNTDOWN_SECS;
                Step::none().show(STAT, "Go!").then(self.tick(ctx))
            }
            Input::Timer(tag) if self.session.owns(tag, TimerKind::Tick) => self.tick(ctx),
            Input::Key(c) if self.session.is_active() && self.remaining > 0 => {
                if Some(c.to_ascii_uppercase()) == self.target {
                    self.score += POINTS_PER_HIT;
                    Step::none().show(STAT, format!("Score: {}", self.score))
                } else {
                    Step::none()
                }
            }
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.score = 0;
        self.remaining = 0;
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::testing::Harness;

    #[test]
    fn test_correct_letter_scores_five() {
        let mut h = Harness::new(5);
        let mut game = Keymaster::new();
        let start = h.send(&mut game, Input::Start);
        assert_eq!(start.text_of(TIMER), Some("19s"));
        let letter = game.target().unwrap();
        assert!(letter.is_ascii_uppercase());

        let hit = h.send(&mut game, Input::Key(letter.to_ascii_lowercase()));
        assert_eq!(hit.text_of(STAT), Some("Score: 5"));

        let wrong = if letter == 'A' { 'B' } else { 'A' };
        assert!(h.send(&mut game, Input::Key(wrong)).is_empty());
    }

    #[test]
    fn test_countdown_runs_twenty_ticks_then_reports() {
        let mut h = Harness::new(5);
        let mut game = Keymaster::new();
        let mut step = h.send(&mut game, Input::Start);
        let mut ticks = 1;
        let mut score = None;

        while let Some(timer) = step.timers.first().copied() {
            assert_eq!(timer.delay, TICK);
            if let Some(letter) = game.target() {
                h.send(&mut game, Input::Key(letter));
            }
            step = h.send(&mut game, Input::Timer(timer.tag));
            if step.score.is_some() {
                score = step.score;
            } else {
                ticks += 1;
            }
        }

        assert_eq!(ticks, COUNTDOWN_SECS);
        // The final second (remaining == 0) accepts no keys
        assert_eq!(score, Some((COUNTDOWN_SECS - 1) * POINTS_PER_HIT));
        assert_eq!(game.phase(), Phase::Complete);
    }

    #[test]
    fn test_stale_tick_after_restart() {
        let mut h = Harness::new(8);
        let mut game = Keymaster::new();
        let first = h.send(&mut game, Input::Start);
        h.send(&mut game, Input::Start);
        assert!(h.send(&mut game, Input::Timer(first.timers[0].tag)).is_empty());
        assert_eq!(game.remaining(), COUNTDOWN_SECS - 1);
    }
}
