use super::MiniGame;
use crate::catalogue::{GameKey, SCRAMBLE};
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step};

const WORD: ElementId = "scrWord";
const ANSWER: ElementId = "scrA";
const STAT: ElementId = "scrStat";
const START: ElementId = "scrStart";
const SUBMIT: ElementId = "scrSubmit";

pub struct WordScramble {
    session: Session,
    index: usize,
    correct: u32,
}

impl WordScramble {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::WordScramble),
            index: 0,
            correct: 0,
        }
    }

    fn render(&mut self) -> Step {
        match SCRAMBLE.get(self.index) {
            Some(entry) => Step::none().show(WORD, entry.scrambled).show(ANSWER, ""),
            None => {
                self.session.complete();
                Step::none()
                    .show(STAT, format!("Finished: {}/{}", self.correct, SCRAMBLE.len()))
                    .finish(self.correct)
            }
        }
    }
}

impl Default for WordScramble {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for WordScramble {
    fn key(&self) -> GameKey {
        GameKey::WordScramble
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[WORD, ANSWER, STAT, START, SUBMIT]
    }

    fn handle(&mut self, input: &Input, _ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.index = 0;
                self.correct = 0;
                Step::none()
                    .show(STAT, "Unscramble the words…")
                    .then(self.render())
            }
            Input::Answer(text) if self.session.is_active() => {
                if text.trim().to_uppercase() == SCRAMBLE[self.index].word {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::testing::Harness;

    #[test]
    fn test_unscramble_in_order() {
        let mut h = Harness::new(0);
        let mut game = WordScramble::new();
        let start = h.send(&mut game, Input::Start);
        assert_eq!(start.text_of(WORD), Some("YAMMALON"));

        let answers = ["molayman", "LOTTERY", "admision", "Uttara", " college "];
        let scores: Vec<u32> = answers
            .iter()
            .filter_map(|a| h.send(&mut game, Input::Answer(a.to_string())).score)
            .collect();
        assert_eq!(scores, vec![4]);
        assert_eq!(game.phase(), Phase::Complete);
    }

    #[test]
    fn test_restart_midway_resets_progress() {
        let mut h = Harness::new(0);
        let mut game = WordScramble::new();
        h.send(&mut game, Input::Start);
        h.send(&mut game, Input::Answer("MOLAYMAN".into()));
        h.send(&mut game, Input::Answer("LOTTERY".into()));

        let restart = h.send(&mut game, Input::Start);
        assert_eq!(restart.text_of(WORD), Some("YAMMALON"));
        let mut last = Step::none();
        for _ in 0..SCRAMBLE.len() {
            last = h.send(&mut game, Input::Answer("nope".into()));
        }
        assert_eq!(last.score, Some(0));
    }
}
