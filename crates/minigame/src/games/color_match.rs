use rand::seq::SliceRandom;

use super::MiniGame;
use crate::catalogue::{ColorName, GameKey};
use crate::config::color_match::ROUNDS;
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step};

const WORD: ElementId = "colorWord";
const STAT: ElementId = "colorStat";
const START: ElementId = "colorStart";
const RED: ElementId = "colorRed";
const GREEN: ElementId = "colorGreen";
const BLUE: ElementId = "colorBlue";
const PURPLE: ElementId = "colorPurple";

/// Stroop test: name the ink color of a color word.
///
/// Word and ink are drawn independently with replacement, so they can match.
pub struct ColorMatch {
    session: Session,
    rounds: u32,
    correct: u32,
    word: ColorName,
    ink: ColorName,
}

impl ColorMatch {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::ColorMatch),
            rounds: 0,
            correct: 0,
            word: ColorName::Red,
            ink: ColorName::Red,
        }
    }

    /// The color the current word is rendered in, i.e. the right answer.
    pub fn ink(&self) -> ColorName {
        self.ink
    }

    pub fn word(&self) -> ColorName {
        self.word
    }

    fn new_round(&mut self, ctx: &mut Ctx<'_>) -> Step {
        let rng = &mut *ctx.rng;
        self.word = *ColorName::ALL.choose(rng).unwrap_or(&ColorName::Red);
        self.ink = *ColorName::ALL.choose(rng).unwrap_or(&ColorName::Red);
        Step::none().show_colored(WORD, self.word.name(), self.ink.hex())
    }

    fn choose(&mut self, pick: ColorName, ctx: &mut Ctx<'_>) -> Step {
        if self.rounds >= ROUNDS {
            return Step::none();
        }
        self.rounds += 1;
        if pick == self.ink {
            self.correct += 1;
        }
        let step = Step::none().show(
            STAT,
            format!("Round {}/{} • Correct: {}", self.rounds, ROUNDS, self.correct),
        );
        if self.rounds >= ROUNDS {
            self.session.complete();
            return step.finish(self.correct);
        }
        step.then(self.new_round(ctx))
    }
}

impl Default for ColorMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for ColorMatch {
    fn key(&self) -> GameKey {
        GameKey::ColorMatch
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[WORD, STAT, START, RED, GREEN, BLUE, PURPLE]
    }

    fn handle(&mut self, input: &Input, ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.rounds = 0;
                self.correct = 0;
                Step::none()
                    .show(STAT, "Pick the COLOR of the text (not the word).")
                    .then(self.new_round(ctx))
            }
            Input::Pick(pick) if self.session.is_active() => self.choose(*pick, ctx),
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.rounds = 0;
        self.correct = 0;
    }
}
