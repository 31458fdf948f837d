//! Terminal host: raw-mode guard plus a text layout that stands in for the
//! page elements a game writes to.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::execute;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use minigame::{ElementId, GameKey, Settlement, Step, View};

use crate::keymap::KeyMap;

/// Raw-mode switch behind the guard.
pub trait RawMode {
    fn enable(&mut self) -> io::Result<()>;
    fn disable(&mut self) -> io::Result<()>;
}

pub struct CrosstermRawMode;

impl RawMode for CrosstermRawMode {
    fn enable(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Raw mode plus alternate screen, undone on Drop.
pub struct TerminalGuard<W: Write = Stdout, M: RawMode = CrosstermRawMode> {
    stdout: W,
    mode: M,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        Self::enter_with(io::stdout(), CrosstermRawMode)
    }
}

impl<W: Write, M: RawMode> TerminalGuard<W, M> {
    /// The guard exists as soon as raw mode is on, so a failed screen switch
    /// still restores the terminal.
    pub fn enter_with(stdout: W, mut mode: M) -> io::Result<Self> {
        mode.enable()?;
        let mut guard = Self { stdout, mode };
        execute!(guard.stdout, EnterAlternateScreen, Hide)?;
        Ok(guard)
    }

    pub fn stdout(&mut self) -> &mut W {
        &mut self.stdout
    }
}

impl<W: Write, M: RawMode> Drop for TerminalGuard<W, M> {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = self.mode.disable();
    }
}

/// Element ids the terminal lays out for each game, top to bottom.
pub fn layout(game: GameKey) -> &'static [ElementId] {
    match game {
        GameKey::ClickRush => &["clickRushStat", "clickRushBtn", "clickRushStart"],
        GameKey::Reaction => &["reactionBox", "reactionStat", "reactionStart"],
        GameKey::LuckyNumber => &["luckyStat", "luckyRoll"],
        GameKey::Quiz => &["quizQ", "quizA", "quizStat", "quizStart", "quizSubmit"],
        GameKey::Keymaster => &["keyTimer", "keyTarget", "keyStat", "keyStart"],
        GameKey::Memory => &["memGrid", "memStat", "memStart"],
        GameKey::MathSprint => &["mathQ", "mathA", "mathStat", "mathStart", "mathSubmit"],
        GameKey::CoinFlip => &["coinStat", "coinHeads", "coinTails", "coinStart"],
        GameKey::SliderPrecision => &[
            "sliderTarget",
            "sliderInput",
            "sliderStat",
            "sliderStart",
            "sliderSubmit",
        ],
        GameKey::WordScramble => &["scrWord", "scrA", "scrStat", "scrStart", "scrSubmit"],
        GameKey::TimingTap => &["tapBar", "tapStat", "tapBtn", "tapStart"],
        GameKey::ColorMatch => &[
            "colorWord",
            "colorStat",
            "colorRed",
            "colorGreen",
            "colorBlue",
            "colorPurple",
            "colorStart",
        ],
    }
}

struct Slot {
    id: ElementId,
    text: String,
    color: Option<Color>,
}

/// One game's elements, in layout order.
pub struct Screen {
    game: GameKey,
    slots: Vec<Slot>,
    status: String,
}

impl Screen {
    pub fn new(game: GameKey, elements: &[ElementId]) -> Self {
        Self {
            game,
            slots: elements
                .iter()
                .map(|&id| Slot {
                    id,
                    text: String::new(),
                    color: None,
                })
                .collect(),
            status: String::new(),
        }
    }

    pub fn apply(&mut self, step: &Step) {
        for update in &step.updates {
            if let Some(slot) = self.slots.iter_mut().find(|s| s.id == update.element) {
                slot.text.clone_from(&update.text);
                slot.color = update.color.and_then(parse_hex);
            }
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.text.as_str())
    }

    /// Back to a freshly loaded page, keeping the last submission result.
    pub fn reload(&mut self, settlement: &Settlement) {
        for slot in &mut self.slots {
            slot.text.clear();
            slot.color = None;
        }
        self.status = format!("Last score: {}", settlement);
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn draw(&self, stdout: &mut Stdout, keys: &KeyMap) -> io::Result<()> {
        queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        queue!(
            stdout,
            Print(format!("{}\r\n", self.game.title())),
            Print(format!("{}\r\n\r\n", self.game.instructions()))
        )?;

        for slot in self.slots.iter().filter(|s| !s.text.is_empty()) {
            if slot.id == "memGrid" {
                queue!(stdout, Print(format!("{}\r\n", card_labels(&slot.text))))?;
            }
            if let Some(color) = slot.color {
                queue!(stdout, SetForegroundColor(color))?;
            }
            queue!(stdout, Print(&slot.text), ResetColor)?;
            if slot.id == "tapBar" {
                queue!(stdout, Print(format!("  {}", bar(&slot.text))))?;
            }
            queue!(stdout, Print("\r\n"))?;
        }

        if keys.takes_text() {
            queue!(stdout, Print(format!("\r\n> {}_\r\n", keys.buffer())))?;
        }
        if self.game == GameKey::SliderPrecision {
            queue!(stdout, Print(format!("\r\nSlider: {}\r\n", keys.slider())))?;
        }

        queue!(
            stdout,
            Print(format!("\r\n{}\r\n", keys.help())),
            Print("Esc quit\r\n")
        )?;
        if !self.status.is_empty() {
            queue!(stdout, Print(format!("\r\n{}\r\n", self.status)))?;
        }
        stdout.flush()
    }
}

impl View for Screen {
    fn has_element(&self, id: &str) -> bool {
        self.slots.iter().any(|s| s.id == id)
    }
}

/// `#rrggbb` to a terminal color.
fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Letters under which each memory card can be flipped.
fn card_labels(grid: &str) -> String {
    grid.split(' ')
        .zip('a'..='z')
        .map(|(_, label)| label.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn bar(percent: &str) -> String {
    const WIDTH: usize = 40;
    let value: usize = percent.trim_end_matches('%').trim().parse().unwrap_or(0);
    let filled = value.min(100) * WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use minigame::{ApplicationId, Arcade};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    use super::*;

    #[derive(Clone, Default)]
    struct Switch(Rc<RefCell<Vec<&'static str>>>);

    impl RawMode for Switch {
        fn enable(&mut self) -> io::Result<()> {
            self.0.borrow_mut().push("enable");
            Ok(())
        }

        fn disable(&mut self) -> io::Result<()> {
            self.0.borrow_mut().push("disable");
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn test_failed_screen_switch_restores_raw_mode() {
        let switch = Switch::default();
        assert!(TerminalGuard::enter_with(Broken, switch.clone()).is_err());
        assert_eq!(*switch.0.borrow(), ["enable", "disable"]);
    }

    #[test]
    fn test_guard_leaves_alternate_screen_on_drop() {
        let switch = Switch::default();
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard::enter_with(&mut out, switch.clone());
        }
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049h"));
        assert!(written.contains("\x1b[?1049l"));
        assert_eq!(*switch.0.borrow(), ["enable", "disable"]);
    }

    #[test]
    fn test_every_layout_satisfies_its_game() {
        let arcade = Arcade::new(ApplicationId(1), StdRng::seed_from_u64(1));
        for game in GameKey::iter() {
            let screen = Screen::new(game, layout(game));
            assert!(arcade.require(game, &screen).is_ok(), "{} layout", game);
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            parse_hex("#34d399"),
            Some(Color::Rgb {
                r: 0x34,
                g: 0xd3,
                b: 0x99
            })
        );
        assert_eq!(parse_hex("34d399"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_screen_provides_declared_elements_only() {
        let screen = Screen::new(GameKey::Quiz, &["quizQ", "quizStat"]);
        assert!(screen.has_element("quizQ"));
        assert!(!screen.has_element("quizA"));
    }

    #[test]
    fn test_apply_ignores_unknown_elements() {
        let mut screen = Screen::new(GameKey::ClickRush, &["clickRushStat"]);
        let step = Step::none()
            .show("clickRushStat", "Clicks: 3")
            .show("elsewhere", "ignored");
        screen.apply(&step);
        assert_eq!(screen.text("clickRushStat"), Some("Clicks: 3"));
        assert_eq!(screen.text("elsewhere"), None);
    }

    #[test]
    fn test_reload_clears_text() {
        let mut screen = Screen::new(GameKey::ClickRush, &["clickRushStat"]);
        screen.apply(&Step::none().show("clickRushStat", "Clicks: 3"));
        screen.reload(&Settlement::Accepted { status: 200 });
        assert_eq!(screen.text("clickRushStat"), Some(""));
    }

    #[test]
    fn test_bar_and_labels() {
        assert_eq!(bar("50%").matches('#').count(), 20);
        assert_eq!(bar("bogus").matches('#').count(), 0);
        assert_eq!(card_labels("□ □ □"), "a b c");
    }
}
