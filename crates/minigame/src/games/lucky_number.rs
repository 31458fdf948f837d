use rand::Rng;

use super::MiniGame;
use crate::catalogue::GameKey;
use crate::config::lucky_number::{MAX, MIN};
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step};

const STAT: ElementId = "luckyStat";
const ROLL: ElementId = "luckyRoll";

/// Single uniform draw in `MIN..=MAX`; the roll control starts and ends the session.
pub struct LuckyNumber {
    session: Session,
}

impl LuckyNumber {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::LuckyNumber),
        }
    }
}

impl Default for LuckyNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for LuckyNumber {
    fn key(&self) -> GameKey {
        GameKey::LuckyNumber
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[STAT, ROLL]
    }

    fn handle(&mut self, input: &Input, ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start | Input::Press => {
                self.session.begin();
                let n = ctx.rng.gen_range(MIN..=MAX);
                self.session.complete();
                Step::none()
                    .show(STAT, format!("Molayman number: {}", n))
                    .finish(n)
            }
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::testing::Harness;

    #[test]
    fn test_draw_in_range_and_completes() {
        let mut h = Harness::new(11);
        for _ in 0..200 {
            let mut game = LuckyNumber::new();
            let step = h.send(&mut game, Input::Start);
            let n = step.score.unwrap();
            assert!((MIN..=MAX).contains(&n));
            assert_eq!(game.phase(), Phase::Complete);
        }
    }

    #[test]
    fn test_each_roll_is_its_own_session() {
        let mut h = Harness::new(11);
        let mut game = LuckyNumber::new();
        h.send(&mut game, Input::Start);
        let first = game.session();
        h.send(&mut game, Input::Press);
        assert!(game.session() > first);
    }
}
