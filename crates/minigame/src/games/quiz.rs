use tracing::debug;

use super::MiniGame;
use crate::catalogue::{GameKey, QUIZ};
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step};

const QUESTION: ElementId = "quizQ";
const ANSWER: ElementId = "quizA";
const STAT: ElementId = "quizStat";
const START: ElementId = "quizStart";
const SUBMIT: ElementId = "quizSubmit";

/// Walk the fixed question list in order; one point per matching answer.
pub struct Quiz {
    session: Session,
    index: usize,
    correct: u32,
}

impl Quiz {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::Quiz),
            index: 0,
            correct: 0,
        }
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Trimmed, case-insensitive exact match.
    fn is_correct(given: &str, expected: &str) -> bool {
        given.trim().to_lowercase() == expected.to_lowercase()
    }

    fn render(&mut self) -> Step {
        match QUIZ.get(self.index) {
            Some(question) => Step::none()
                .show(QUESTION, question.prompt)
                .show(ANSWER, ""),
            None => {
                self.session.complete();
                debug!("Quiz finished: {}/{}", self.correct, QUIZ.len());
                Step::none()
                    .show(STAT, format!("Score: {}/{}", self.correct, QUIZ.len()))
                    .finish(self.correct)
            }
        }
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for Quiz {
    fn key(&self) -> GameKey {
        GameKey::Quiz
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

    fn handle(&mut self, input: &Input, _ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.index = 0;
                self.correct = 0;
                Step::none()
                    .show(STAT, "Answer the questions…")
                    .then(self.render())
            }
            Input::Answer(text) if self.session.is_active() => {
                if Self::is_correct(text, QUIZ[self.index].answer) {
                    self.correct += 1;
                }
                self.index += 1;
                self.render()
            }
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.index = 0;
        self.correct = 0;
    }
}
