use tracing::debug;

use super::MiniGame;
use crate::catalogue::GameKey;
use crate::config::timing_tap::{FRAME_INTERVAL, HIT_PERCENT, STEP, TAPS};
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step, TimerKind};

const BAR: ElementId = "tapBar";
const STAT: ElementId = "tapStat";
const START: ElementId = "tapStart";
const BUTTON: ElementId = "tapBtn";

/// Tap while a bouncing bar is near full.
///
/// The bar position advances once per animation frame. Starting again cancels
/// the previous frame loop before arming a new one.
pub struct TimingTap {
    session: Session,
    position: f64,
    direction: f64,
    taps: u32,
    points: u32,
}

impl TimingTap {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::TimingTap),
            position: 0.0,
            direction: 1.0,
            taps: 0,
            points: 0,
        }
    }

    /// Current bar fill, `0..=100`.
    pub fn percent(&self) -> u32 {
        (self.position * 100.0).floor() as u32
    }

    fn advance(&mut self) {
        self.position += self.direction * STEP;
        if self.position >= 1.0 {
            self.position = 1.0;
            self.direction = -1.0;
        }
        if self.position <= 0.0 {
            self.position = 0.0;
            self.direction = 1.0;
        }
    }

    fn next_frame(&self) -> Step {
        Step::none().after(self.session.timer(TimerKind::Frame), FRAME_INTERVAL)
    }
}

impl Default for TimingTap {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for TimingTap {
    fn key(&self) -> GameKey {
        GameKey::TimingTap
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[BAR, STAT, START, BUTTON]
    }

    fn handle(&mut self, input: &Input, _ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.position = 0.0;
                self.direction = 1.0;
                self.taps = 0;
                self.points = 0;
                Step::none()
                    .cancel(TimerKind::Frame)
                    .show(BAR, "0%")
                    .show(STAT, "Tap when the bar is near 100% (10 taps).")
                    .then(self.next_frame())
            }
            Input::Timer(tag) if self.session.owns(tag, TimerKind::Frame) => {
                self.advance();
                Step::none()
                    .show(BAR, format!("{}%", self.percent()))
                    .then(self.next_frame())
            }
            Input::Press if self.session.is_active() => {
                self.taps += 1;
                let pct = self.percent();
                if pct >= HIT_PERCENT {
                    self.points += 1;
                }
                let step = Step::none().show(
                    STAT,
                    format!("Tap {}/{} • Hit: {}% • Points: {}", self.taps, TAPS, pct, self.points),
                );
                if self.taps >= TAPS {
                    self.session.complete();
                    debug!("Timing tap finished with {} points", self.points);
                    return step.cancel(TimerKind::Frame).finish(self.points);
                }
                step
            }
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.position = 0.0;
        self.direction = 1.0;
        self.taps = 0;
        self.points = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::testing::Harness;

    /// Fire `n` frames, following the re-armed frame timer each time.
    fn run_frames(h: &mut Harness, game: &mut TimingTap, mut step: Step, n: usize) -> Step {
        for _ in 0..n {
            let tag = step.timers[0].tag;
            step = h.send(game, Input::Timer(tag));
        }
        step
    }

    #[test]
    fn test_bar_bounces() {
        let mut h = Harness::new(0);
        let mut game = TimingTap::new();
        let start = h.send(&mut game, Input::Start);
        assert_eq!(start.cancels, vec![TimerKind::Frame]);

        // 0.018 per frame: full after 56 frames
        let step = run_frames(&mut h, &mut game, start, 56);
        assert_eq!(game.percent(), 100);
        run_frames(&mut h, &mut game, step, 1);
        assert!(game.percent() < 100);
    }

    #[test]
    fn test_points_only_near_full() {
        let mut h = Harness::new(0);
        let mut game = TimingTap::new();
        let start = h.send(&mut game, Input::Start);

        // Low bar: miss
        let miss = h.send(&mut game, Input::Press);
        assert!(miss.text_of(STAT).unwrap().ends_with("Points: 0"));

        run_frames(&mut h, &mut game, start, 55);
        assert!(game.percent() >= HIT_PERCENT);
        let mut last = Step::none();
        for _ in 1..TAPS {
            last = h.send(&mut game, Input::Press);
        }
        assert_eq!(last.score, Some(TAPS - 1));
        assert_eq!(last.cancels, vec![TimerKind::Frame]);
        assert!(h.send(&mut game, Input::Press).is_empty());
    }

    #[test]
    fn test_taps_before_start_ignored() {
        let mut h = Harness::new(0);
        let mut game = TimingTap::new();
        assert!(h.send(&mut game, Input::Press).is_empty());
    }

    #[test]
    fn test_restart_orphans_old_frames() {
        let mut h = Harness::new(0);
        let mut game = TimingTap::new();
        let first = h.send(&mut game, Input::Start);
        h.send(&mut game, Input::Start);
        assert!(h.send(&mut game, Input::Timer(first.timers[0].tag)).is_empty());
        assert_eq!(game.percent(), 0);
    }
}
