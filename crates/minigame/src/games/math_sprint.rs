use rand::Rng;
use tracing::debug;

use super::MiniGame;
use crate::catalogue::GameKey;
use crate::config::math_sprint::{DURATION, OPERAND_MAX, OPERAND_MIN};
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step, TimerKind};

const QUESTION: ElementId = "mathQ";
const ANSWER: ElementId = "mathA";
const STAT: ElementId = "mathStat";
const START: ElementId = "mathStart";
const SUBMIT: ElementId = "mathSubmit";

/// Answer random sums until time runs out.
pub struct MathSprint {
    session: Session,
    operands: (u32, u32),
    correct: u32,
    total: u32,
}

impl MathSprint {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::MathSprint),
            operands: (0, 0),
            correct: 0,
            total: 0,
        }
    }

    pub fn operands(&self) -> (u32, u32) {
        self.operands
    }

    /// Graded on the leading integer of the input; anything else is just wrong.
    fn is_correct(&self, text: &str) -> bool {
        let (a, b) = self.operands;
        leading_integer(text).is_some_and(|n| n == i64::from(a + b))
    }

    fn next_question(&mut self, ctx: &mut Ctx<'_>) -> Step {
        let a = ctx.rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        let b = ctx.rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        self.operands = (a, b);
        Step::none()
            .show(QUESTION, format!("{} + {} = ?", a, b))
            .show(ANSWER, "")
    }
}

/// Optional sign plus the longest run of ASCII digits after leading
/// whitespace: `"15abc"` and `"15.0"` read as 15, `"abc"` as nothing.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

impl Default for MathSprint {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for MathSprint {
    fn key(&self) -> GameKey {
        GameKey::MathSprint
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[QUESTION, ANSWER, STAT, START, SUBMIT]
    }

    fn handle(&mut self, input: &Input, ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.correct = 0;
                self.total = 0;
                Step::none()
                    .show(STAT, "15s… answer fast!")
                    .then(self.next_question(ctx))
                    .after(self.session.timer(TimerKind::Deadline), DURATION)
            }
            Input::Answer(text) if self.session.is_active() => {
                if self.is_correct(text) {
                    self.correct += 1;
                }
                self.total += 1;
                Step::none()
                    .show(STAT, format!("Correct: {} / {}", self.correct, self.total))
                    .then(self.next_question(ctx))
            }
            Input::Timer(tag) if self.session.owns(tag, TimerKind::Deadline) => {
                self.session.complete();
                debug!("Math sprint: {}/{} correct", self.correct, self.total);
                Step::none()
                    .show(STAT, format!("Finished: {} correct", self.correct))
                    .finish(self.correct)
            }
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.correct = 0;
        self.total = 0;
    }
}
