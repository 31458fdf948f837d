use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use minigame::{ApplicationId, Arcade, Dispatched, ElementId, GameKey, ScoreReporter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::commands::{CliTransport, build_reporter};
use crate::keymap::{KeyAction, KeyMap};
use crate::settings::Settings;
use crate::terminal::{self, Screen, TerminalGuard};

/// Poll interval when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

struct Table {
    game: GameKey,
    arcade: Arcade<StdRng>,
    reporter: ScoreReporter<CliTransport>,
    screen: Screen,
    keys: KeyMap,
}

impl Table {
    /// Returns true when the page was reloaded.
    fn absorb(&mut self, dispatched: Dispatched, term: &mut TerminalGuard) -> Result<bool> {
        self.screen.apply(&dispatched.step);
        let Some(report) = dispatched.report else {
            return Ok(false);
        };

        self.screen.set_status(format!("Submitting score {}...", report.score));
        self.screen.draw(term.stdout(), &self.keys)?;

        let settlement = self.reporter.report(&report, &mut self.arcade);
        self.screen.reload(&settlement);
        self.keys.reset();
        Ok(true)
    }
}

/// Build the arcade and a screen from `layout`; fails if the layout lacks an
/// element the game needs.
fn prepare(
    game: GameKey,
    application_id: ApplicationId,
    layout: &[ElementId],
) -> Result<(Arcade<StdRng>, Screen)> {
    let arcade = Arcade::new(application_id, StdRng::from_entropy());
    let screen = Screen::new(game, layout);
    arcade
        .require(game, &screen)
        .with_context(|| format!("Terminal layout for {} is incomplete", game))?;
    Ok((arcade, screen))
}

pub fn run(game: GameKey, settings: &Settings) -> Result<()> {
    let application_id = settings.application_id()?;
    let (arcade, screen) = prepare(game, application_id, terminal::layout(game))?;

    let mut table = Table {
        game,
        arcade,
        reporter: build_reporter(settings),
        screen,
        keys: KeyMap::new(game),
    };
    info!("Playing {} for application {}", game, application_id);

    let mut term = TerminalGuard::enter()?;
    let started = Instant::now();

    loop {
        table.screen.draw(term.stdout(), &table.keys)?;

        let timeout = table
            .arcade
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(started.elapsed()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match table.keys.translate(key_event) {
                    KeyAction::Quit => break,
                    KeyAction::Input(input) => {
                        let dispatched = table.arcade.dispatch(table.game, input, started.elapsed());
                        table.absorb(dispatched, &mut term)?;
                    }
                    KeyAction::Redraw | KeyAction::Ignore => {}
                }
            }
        }

        for dispatched in table.arcade.advance(started.elapsed()) {
            if table.absorb(dispatched, &mut term)? {
                // Anything after a reload belongs to the old page
                break;
            }
        }
    }

    debug!("Left {}", game);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minigame::Error;

    #[test]
    fn test_prepare_accepts_terminal_layout() {
        assert!(prepare(GameKey::Quiz, ApplicationId(3), terminal::layout(GameKey::Quiz)).is_ok());
    }

    #[test]
    fn test_prepare_rejects_layout_missing_an_element() {
        let partial: Vec<ElementId> = terminal::layout(GameKey::Memory)
            .iter()
            .copied()
            .filter(|id| *id != "memGrid")
            .collect();
        let err = match prepare(GameKey::Memory, ApplicationId(3), &partial) {
            Ok(_) => panic!("Expected a missing element error"),
            Err(e) => e,
        };
        match err.downcast_ref::<Error>() {
            Some(Error::MissingElement { game, element }) => {
                assert_eq!(*game, GameKey::Memory);
                assert_eq!(*element, "memGrid");
            }
            other => panic!("Expected MissingElement, got {:?}", other),
        }
    }
}
