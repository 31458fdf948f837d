//! Host-side dispatch: routes inputs to games, owns the timer queue, and
//! turns final scores into [`ScoreReport`]s.

use std::time::Duration;

use rand::RngCore;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::catalogue::GameKey;
use crate::error::{Error, Result};
use crate::games::{self, MiniGame};
use crate::report::{ApplicationId, Reload, ScoreReport};
use crate::session::{Ctx, Input, Phase, Step};
use crate::timer::TimerQueue;

/// Anything that can host game elements (a page, a terminal layout, a test double).
pub trait View {
    fn has_element(&self, id: &str) -> bool;
}

impl View for [&str] {
    fn has_element(&self, id: &str) -> bool {
        self.iter().any(|e| *e == id)
    }
}

/// Outcome of routing one input to one game.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub game: GameKey,
    pub step: Step,
    pub report: Option<ScoreReport>,
}

pub struct Arcade<R: RngCore> {
    application_id: ApplicationId,
    /// Indexed by `GameKey` discriminant
    games: Vec<Box<dyn MiniGame>>,
    timers: TimerQueue,
    rng: R,
}

impl<R: RngCore> Arcade<R> {
    pub fn new(application_id: ApplicationId, rng: R) -> Self {
        let games = GameKey::iter().map(games::build).collect();
        Self {
            application_id,
            games,
            timers: TimerQueue::new(),
            rng,
        }
    }

    pub fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    pub fn game(&self, key: GameKey) -> &dyn MiniGame {
        self.games[key as usize].as_ref()
    }

    pub fn phase(&self, key: GameKey) -> Phase {
        self.game(key).phase()
    }

    /// Check that `view` provides every element the given game binds to.
    pub fn require(&self, key: GameKey, view: &(impl View + ?Sized)) -> Result<()> {
        for element in self.game(key).elements() {
            if !view.has_element(element) {
                return Err(Error::MissingElement {
                    game: key,
                    element,
                });
            }
        }
        Ok(())
    }

    /// Check every game against `view`.
    pub fn mount(&self, view: &(impl View + ?Sized)) -> Result<()> {
        for key in GameKey::iter() {
            self.require(key, view)?;
        }
        Ok(())
    }

    /// Route `input` to `key` at time `now`, arming or cancelling any timers it asks for.
    pub fn dispatch(&mut self, key: GameKey, input: Input, now: Duration) -> Dispatched {
        let game = &mut self.games[key as usize];
        let mut ctx = Ctx::new(now, &mut self.rng);
        let step = game.handle(&input, &mut ctx);

        for kind in &step.cancels {
            self.timers.cancel(key, *kind);
        }
        for request in &step.timers {
            self.timers.schedule(now, *request);
        }

        let report = step.score.map(|score| {
            info!("{} session complete: score {}", key, score);
            ScoreReport::new(self.application_id, key, score)
        });

        Dispatched {
            game: key,
            step,
            report,
        }
    }

    /// Fire every timer due at or before `now`, in deadline order.
    ///
    /// Each timer is delivered with its own deadline as the clock reading, so
    /// time-sensitive games see when the timer was due rather than when the
    /// host got around to it.
    pub fn advance(&mut self, now: Duration) -> Vec<Dispatched> {
        let mut fired = Vec::new();
        while let Some((deadline, tag)) = self.timers.pop_due(now) {
            debug!("Timer {:?} for {} fired at {:?}", tag.kind, tag.game, deadline);
            let dispatched = self.dispatch(tag.game, Input::Timer(tag), deadline);
            if !dispatched.step.is_empty() {
                fired.push(dispatched);
            }
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

impl<R: RngCore> Reload for Arcade<R> {
    /// Everything back to Idle; pending timers are dropped.
    fn reload(&mut self) {
        debug!("Reloading arcade");
        self.timers.clear();
        for game in &mut self.games {
            game.reset();
        }
    }
}
