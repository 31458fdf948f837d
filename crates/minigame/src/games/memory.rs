use rand::seq::SliceRandom;
use tracing::debug;

use super::MiniGame;
use crate::catalogue::{GameKey, HIDDEN_CARD, MEMORY_SYMBOLS};
use crate::config::memory::{MISMATCH_DELAY, PAIRS};
use crate::session::{Ctx, ElementId, Input, Phase, Session, SessionToken, Step, TimerKind};

const GRID: ElementId = "memGrid";
const STAT: ElementId = "memStat";
const START: ElementId = "memStart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub symbol: char,
    pub open: bool,
    pub done: bool,
}

impl Card {
    fn face(&self) -> char {
        if self.open { self.symbol } else { HIDDEN_CARD }
    }
}

/// Flip cards two at a time to find all symbol pairs.
///
/// While a mismatched pair is face up the board is locked; the pair is hidden
/// again by a `Hide` timer. Matched cards stay open for good.
pub struct Memory {
    session: Session,
    cards: Vec<Card>,
    first: Option<usize>,
    pending: Option<(usize, usize)>,
    matches: u32,
}

impl Memory {
    pub fn new() -> Self {
        Self {
            session: Session::new(GameKey::Memory),
            cards: Vec::new(),
            first: None,
            pending: None,
            matches: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    fn grid(&self) -> String {
        self.cards
            .iter()
            .map(|c| c.face().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn deal(&mut self, ctx: &mut Ctx<'_>) {
        let mut symbols: Vec<char> = MEMORY_SYMBOLS
            .iter()
            .chain(MEMORY_SYMBOLS.iter())
            .copied()
            .collect();
        symbols.shuffle(&mut *ctx.rng);
        self.cards = symbols
            .into_iter()
            .map(|symbol| Card {
                symbol,
                open: false,
                done: false,
            })
            .collect();
    }

    fn flip(&mut self, index: usize) -> Step {
        if self.is_locked() {
            return Step::none();
        }
        let Some(card) = self.cards.get_mut(index) else {
            return Step::none();
        };
        if card.done || card.open {
            return Step::none();
        }
        card.open = true;

        let Some(first) = self.first.take() else {
            self.first = Some(index);
            return Step::none().show(GRID, self.grid());
        };

        if self.cards[first].symbol == self.cards[index].symbol {
            self.cards[first].done = true;
            self.cards[index].done = true;
            self.matches += 1;
            let step = Step::none()
                .show(GRID, self.grid())
                .show(STAT, format!("Matches: {}/{}", self.matches, PAIRS));
            if self.matches as usize >= PAIRS {
                self.session.complete();
                debug!("Memory board cleared");
                return step.finish(self.matches);
            }
            return step;
        }

        self.pending = Some((first, index));
        Step::none()
            .show(GRID, self.grid())
            .after(self.session.timer(TimerKind::Hide), MISMATCH_DELAY)
    }

    fn hide_pending(&mut self) -> Step {
        if let Some((a, b)) = self.pending.take() {
            self.cards[a].open = false;
            self.cards[b].open = false;
        }
        Step::none().show(GRID, self.grid())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for Memory {
    fn key(&self) -> GameKey {
        GameKey::Memory
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn session(&self) -> SessionToken {
        self.session.token()
    }

    fn elements(&self) -> &'static [ElementId] {
        &[GRID, STAT, START]
    }

    fn handle(&mut self, input: &Input, ctx: &mut Ctx<'_>) -> Step {
        match input {
            Input::Start => {
                self.session.begin();
                self.matches = 0;
                self.first = None;
                self.pending = None;
                self.deal(ctx);
                Step::none()
                    .show(GRID, self.grid())
                    .show(STAT, format!("Matches: 0/{}", PAIRS))
            }
            Input::Flip(index) if self.session.is_active() => self.flip(*index),
            Input::Timer(tag) if self.session.owns(tag, TimerKind::Hide) => self.hide_pending(),
            _ => Step::none(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.cards.clear();
        self.first = None;
        self.pending = None;
        self.matches = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::testing::Harness;

    fn pair_of(game: &Memory, symbol: char) -> (usize, usize) {
        let idx: Vec<usize> = game
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.symbol == symbol)
            .map(|(i, _)| i)
            .collect();
        (idx[0], idx[1])
    }

    fn mismatch(game: &Memory) -> (usize, usize) {
        let a = game.cards().iter().position(|c| !c.done).unwrap();
        let b = game
            .cards()
            .iter()
            .position(|c| !c.done && c.symbol != game.cards()[a].symbol)
            .unwrap();
        (a, b)
    }

    #[test]
    fn test_deck_has_eight_pairs() {
        let mut h = Harness::new(2);
        let mut game = Memory::new();
        h.send(&mut game, Input::Start);
        assert_eq!(game.cards().len(), PAIRS * 2);
        for symbol in MEMORY_SYMBOLS {
            assert_eq!(game.cards().iter().filter(|c| c.symbol == symbol).count(), 2);
        }
    }

    #[test]
    fn test_mismatch_locks_then_hides() {
        let mut h = Harness::new(2);
        let mut game = Memory::new();
        h.send(&mut game, Input::Start);
        let (a, b) = mismatch(&game);

        h.send(&mut game, Input::Flip(a));
        let step = h.send(&mut game, Input::Flip(b));
        assert!(game.is_locked());
        assert_eq!(step.timers[0].delay, MISMATCH_DELAY);

        // Third card is refused while locked
        let c = (0..16).find(|i| *i != a && *i != b).unwrap();
        assert!(h.send(&mut game, Input::Flip(c)).is_empty());
        assert!(!game.cards()[c].open);

        h.send(&mut game, Input::Timer(step.timers[0].tag));
        assert!(!game.is_locked());
        assert!(!game.cards()[a].open && !game.cards()[b].open);
        assert_eq!(game.matches(), 0);
    }

    #[test]
    fn test_clearing_board_reports_once() {
        let mut h = Harness::new(4);
        let mut game = Memory::new();
        h.send(&mut game, Input::Start);

        // One mismatch first; it must not count
        let (x, y) = mismatch(&game);
        h.send(&mut game, Input::Flip(x));
        let step = h.send(&mut game, Input::Flip(y));
        h.send(&mut game, Input::Timer(step.timers[0].tag));

        let mut reports = Vec::new();
        for symbol in MEMORY_SYMBOLS {
            let (a, b) = pair_of(&game, symbol);
            for i in [a, b] {
                if let Some(score) = h.send(&mut game, Input::Flip(i)).score {
                    reports.push(score);
                }
            }
        }
        assert_eq!(reports, vec![8]);
        assert_eq!(game.phase(), Phase::Complete);

        // Matched cards are unclickable
        assert!(h.send(&mut game, Input::Flip(0)).is_empty());
    }

    #[test]
    fn test_same_card_twice_is_noop() {
        let mut h = Harness::new(4);
        let mut game = Memory::new();
        h.send(&mut game, Input::Start);
        h.send(&mut game, Input::Flip(3));
        assert!(h.send(&mut game, Input::Flip(3)).is_empty());
        assert!(h.send(&mut game, Input::Flip(99)).is_empty());
    }

    #[test]
    fn test_restart_drops_pending_hide() {
        let mut h = Harness::new(6);
        let mut game = Memory::new();
        h.send(&mut game, Input::Start);
        let (a, b) = mismatch(&game);
        h.send(&mut game, Input::Flip(a));
        let step = h.send(&mut game, Input::Flip(b));

        h.send(&mut game, Input::Start);
        assert!(!game.is_locked());
        h.send(&mut game, Input::Flip(0));
        assert!(h.send(&mut game, Input::Timer(step.timers[0].tag)).is_empty());
        assert!(game.cards()[0].open);
    }
}
