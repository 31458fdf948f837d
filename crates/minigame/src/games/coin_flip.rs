use rand::Rng;

use super::MiniGame;
use crate::catalogue::GameKey;
use crate::config::coin_flip::ROUNDS;
use crate::session::{Coin, Ctx, ElementId, Input, Phase, Session, SessionToken, Step};

const STAT: ElementId = "coinStat";
const START: ElementId = "coinStart";
const HEADS: ElementId = "coinHeads";
const TAILS: ElementId = "coinTails";

/// Guess a fair coin for a fixed number of rounds.
pub struct CoinFlip {
    session: Session,
    rounds: u32,
    correct: u32,
}

impl CoinFlip {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::CoinFlip),
            rounds: 0,
            correct: 0,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    fn play(&mut self, guess: Coin, ctx: &mut Ctx<'_>) -> Step {
        if self.rounds >= ROUNDS {
            return Step::none();
        }
        let flip = if ctx.rng.gen_bool(0.5) {
            Coin::Heads
        } else {
            Coin::Tails
        };
        self.rounds += 1;
        if guess == flip {
            self.correct += 1;
        }
        let step = Step::none().show(
            STAT,
            format!(
                "Round {}/{} • Flip: {} • Correct: {}",
                self.rounds,
                ROUNDS,
                flip.name(),
                self.correct
            ),
        );
        if self.rounds >= ROUNDS {
            self.session.complete();
            return step.finish(self.correct);
        }
        step
    }
}

impl Default for CoinFlip {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for CoinFlip {
    fn key(&self) -> GameKey {
        GameKey::CoinFlip
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[STAT, START, HEADS, TAILS]
    }

    fn handle(&mut self, input: &Input, ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.rounds = 0;
                self.correct = 0;
                Step::none().show(
                    STAT,
                    format!("Round 0/{} • Choose heads or tails", ROUNDS),
                )
            }
            Input::Guess(guess) if self.session.is_active() => self.play(*guess, ctx),
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.rounds = 0;
        self.correct = 0;
    }
}
