//! Session lifecycle and the vocabulary shared by every game.
//!
//! A game only ever talks to its host through [`Input`] (what happened) and
//! [`Step`] (what to show, which timers to arm, whether a score is final).

use std::time::Duration;

use rand::RngCore;

use crate::catalogue::{ColorName, GameKey};

/// Host element identifier (button, text node, input field).
pub type ElementId = &'static str;

/// Lifecycle of one play session.
///
/// ## Transitions
///
/// - Idle -> Active (start control)
/// - Active -> Complete (game-specific termination condition)
/// - any -> Active (start again, discarding the current session)
/// - any -> Idle (reset / reload)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Complete,
}

/// Monotonic per-game session counter.
///
/// Timers carry the token of the session that armed them; a timer whose token
/// no longer matches is stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionToken(u64);

impl SessionToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Session time limit (Click Rush, Math Sprint)
    Deadline,
    /// Reaction "go" signal
    Signal,
    /// Keymaster countdown
    Tick,
    /// Memory mismatch resolution
    Hide,
    /// Timing Tap animation frame
    Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTag {
    pub game: GameKey,
    pub session: SessionToken,
    pub kind: TimerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub tag: TimerTag,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heads => "heads",
            Self::Tails => "tails",
        }
    }
}

/// Everything a game can be told.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// The game's start control
    Start,
    /// The game's main action button (click target, reaction box, tap button)
    Press,
    /// A key press
    Key(char),
    /// Text entered and submitted (quiz, math, scramble)
    Answer(String),
    /// Slider moved to a value
    Slide(u8),
    /// Slider submit button
    Submit,
    Guess(Coin),
    /// Memory card flip by index
    Flip(usize),
    /// Color Match answer button
    Pick(ColorName),
    /// A previously requested timer fired
    Timer(TimerTag),
}

/// Text (and optional render color) for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub element: ElementId,
    pub text: String,
    /// CSS hex color, e.g. `#ef4444`
    pub color: Option<&'static str>,
}

/// The result of handling one [`Input`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    pub updates: Vec<Update>,
    pub timers: Vec<TimerRequest>,
    /// Pending timers of these kinds (for this game) must be dropped.
    pub cancels: Vec<TimerKind>,
    /// Final score; set at most once per session.
    pub score: Option<u32>,
}

impl Step {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn show(mut self, element: ElementId, text: impl Into<String>) -> Self {
        self.updates.push(Update {
            element,
            text: text.into(),
            color: None,
        });
        self
    }

    pub fn show_colored(
        mut self,
        element: ElementId,
        text: impl Into<String>,
        color: &'static str,
    ) -> Self {
        self.updates.push(Update {
            element,
            text: text.into(),
            color: Some(color),
        });
        self
    }

    pub fn after(mut self, tag: TimerTag, delay: Duration) -> Self {
        self.timers.push(TimerRequest { tag, delay });
        self
    }

    pub fn cancel(mut self, kind: TimerKind) -> Self {
        self.cancels.push(kind);
        self
    }

    pub fn finish(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    /// Append `other` after this step.
    pub fn then(mut self, other: Step) -> Self {
        self.updates.extend(other.updates);
        self.timers.extend(other.timers);
        self.cancels.extend(other.cancels);
        self.score = other.score.or(self.score);
        self
    }

    /// Latest text shown for `element`, if this step touched it.
    pub fn text_of(&self, element: ElementId) -> Option<&str> {
        self.updates
            .iter()
            .rev()
            .find(|u| u.element == element)
            .map(|u| u.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
            && self.timers.is_empty()
            && self.cancels.is_empty()
            && self.score.is_none()
    }
}

/// Per-call environment handed to a game.
pub struct Ctx<'a> {
    /// Host clock reading (time since the host started)
    pub now: Duration,
    pub rng: &'a mut dyn RngCore,
}

impl<'a> Ctx<'a> {
    pub fn new(now: Duration, rng: &'a mut dyn RngCore) -> Self {
        Self { now, rng }
    }
}

/// Phase plus token bookkeeping every game embeds.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    game: GameKey,
    token: SessionToken,
    phase: Phase,
}

impl Session {
    pub fn new(game: GameKey) -> Self {
        Self {
            game,
            token: SessionToken::default(),
            phase: Phase::Idle,
        }
    }

    /// Start a fresh session, invalidating every timer armed by the previous one.
    pub fn begin(&mut self) -> SessionToken {
        self.token = self.token.next();
        self.phase = Phase::Active;
        self.token
    }

    /// Move to Complete. Returns `false` if the session was not active.
    pub fn complete(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = Phase::Complete;
        true
    }

    /// Back to Idle; the token still advances so stale timers stay dead.
    pub fn reset(&mut self) {
        self.token = self.token.next();
        self.phase = Phase::Idle;
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn token(&self) -> SessionToken {
        self.token
    }

    pub fn timer(&self, kind: TimerKind) -> TimerTag {
        TimerTag {
            game: self.game,
            session: self.token,
            kind,
        }
    }

    /// Whether a fired timer belongs to the running session.
    pub fn owns(&self, tag: &TimerTag, kind: TimerKind) -> bool {
        self.is_active() && tag.game == self.game && tag.session == self.token && tag.kind == kind
    }
}
