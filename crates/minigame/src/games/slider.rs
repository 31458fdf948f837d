use rand::Rng;

use super::MiniGame;
use crate::catalogue::GameKey;
use crate::config::slider::{DEFAULT_VALUE, MAX_SCORE, MAX_VALUE, TARGET_MAX, TARGET_MIN};
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step};

const STAT: ElementId = "sliderStat";
const INPUT: ElementId = "sliderInput";
const TARGET: ElementId = "sliderTarget";
const START: ElementId = "sliderStart";
const SUBMIT: ElementId = "sliderSubmit";

/// `max(0, 100 - |value - target|)`
pub fn precision_score(value: u8, target: u8) -> u32 {
    MAX_SCORE.saturating_sub(u32::from(value.abs_diff(target)))
}

/// Park the slider as close to a random target as possible, then submit once.
pub struct SliderPrecision {
    session: Session,
    target: u8,
    value: u8,
}

impl SliderPrecision {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::SliderPrecision),
            target: DEFAULT_VALUE,
            value: DEFAULT_VALUE,
        }
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

impl Default for SliderPrecision {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for SliderPrecision {
    fn key(&self) -> GameKey {
        GameKey::SliderPrecision
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[STAT, INPUT, TARGET, START, SUBMIT]
    }

    fn handle(&mut self, input: &Input, ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.target = ctx.rng.gen_range(TARGET_MIN..=TARGET_MAX);
                self.value = DEFAULT_VALUE;
                Step::none()
                    .show(TARGET, self.target.to_string())
                    .show(INPUT, self.value.to_string())
                    .show(STAT, "Move slider close to target and submit.")
            }
            Input::Slide(v) if self.session.is_active() => {
                self.value = (*v).min(MAX_VALUE);
                Step::none().show(INPUT, self.value.to_string())
            }
            Input::Submit if self.session.is_active() => {
                let error = self.value.abs_diff(self.target);
                self.session.complete();
                Step::none()
                    .show(
                        STAT,
                        format!("Your value: {} • Error: {}", self.value, error),
                    )
                    .finish(precision_score(self.value, self.target))
            }
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.target = DEFAULT_VALUE;
        self.value = DEFAULT_VALUE;
    }
}
