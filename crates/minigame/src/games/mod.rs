//! The twelve mini-games.
//!
//! Every game is an explicit state machine behind [`MiniGame`]: the host feeds
//! it [`Input`]s and applies the returned [`Step`]s. Games never see each other.

mod click_rush;
mod coin_flip;
mod color_match;
mod keymaster;
mod lucky_number;
mod math_sprint;
mod memory;
mod quiz;
mod reaction;
mod slider;
mod timing_tap;
mod word_scramble;

pub use click_rush::ClickRush;
pub use coin_flip::CoinFlip;
pub use color_match::ColorMatch;
pub use keymaster::Keymaster;
pub use lucky_number::LuckyNumber;
pub use math_sprint::MathSprint;
pub use memory::{Card, Memory};
pub use quiz::Quiz;
pub use reaction::Reaction;
pub use slider::{SliderPrecision, precision_score};
pub use timing_tap::TimingTap;
pub use word_scramble::WordScramble;

use crate::catalogue::GameKey;
use crate::session::{Ctx, ElementId, Input, Phase, SessionToken, Step};

pub trait MiniGame {
    fn key(&self) -> GameKey;

    fn phase(&self) -> Phase;

    fn session(&self) -> SessionToken;

    /// Element ids the host view must provide before the game can be mounted.
    fn elements(&self) -> &'static [ElementId];

    /// Apply one input. Inputs that don't apply in the current phase yield an
    /// empty (or message-only) step.
    fn handle(&mut self, input: &Input, ctx: &mut Ctx<'_>) -> Step;

    /// Return to Idle, discarding the session and invalidating its timers.
    fn reset(&mut self);
}

/// Construct a fresh, idle instance of the game for `key`.
pub fn build(key: GameKey) -> Box<dyn MiniGame> {
    match key {
        GameKey::ClickRush => Box::new(ClickRush::new()),
        GameKey::Reaction => Box::new(Reaction::new()),
        GameKey::LuckyNumber => Box::new(LuckyNumber::new()),
        GameKey::Quiz => Box::new(Quiz::new()),
        GameKey::Keymaster => Box::new(Keymaster::new()),
        GameKey::Memory => Box::new(Memory::new()),
        GameKey::MathSprint => Box::new(MathSprint::new()),
        GameKey::CoinFlip => Box::new(CoinFlip::new()),
        GameKey::SliderPrecision => Box::new(SliderPrecision::new()),
        GameKey::WordScramble => Box::new(WordScramble::new()),
        GameKey::TimingTap => Box::new(TimingTap::new()),
        GameKey::ColorMatch => Box::new(ColorMatch::new()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_build_matches_key() {
        for key in GameKey::iter() {
            let game = build(key);
            assert_eq!(game.key(), key);
            assert_eq!(game.phase(), Phase::Idle);
            assert!(!game.elements().is_empty());
        }
    }

    #[test]
    fn test_element_ids_unique_across_games() {
        let mut all: Vec<ElementId> = GameKey::iter()
            .flat_map(|k| build(k).elements().iter().copied().collect::<Vec<_>>())
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
