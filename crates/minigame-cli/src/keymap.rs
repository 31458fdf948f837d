//! Keyboard bindings per game.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use minigame::config::{memory, slider};
use minigame::{Coin, ColorName, GameKey, Input};

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Input(Input),
    /// Local edit (answer buffer); nothing to dispatch
    Redraw,
    Ignore,
}

/// Translates key events into game inputs. Holds the local state a page
/// would keep in its widgets: the answer text box and the slider position.
pub struct KeyMap {
    game: GameKey,
    buffer: String,
    slider: u8,
}

impl KeyMap {
    pub fn new(game: GameKey) -> Self {
        Self {
            game,
            buffer: String::new(),
            slider: slider::DEFAULT_VALUE,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn slider(&self) -> u8 {
        self.slider
    }

    pub fn takes_text(&self) -> bool {
        matches!(
            self.game,
            GameKey::Quiz | GameKey::MathSprint | GameKey::WordScramble
        )
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.slider = slider::DEFAULT_VALUE;
    }

    pub fn help(&self) -> &'static str {
        match self.game {
            GameKey::ClickRush => "Tab start · Space click",
            GameKey::Reaction => "Tab start · Space when GO",
            GameKey::LuckyNumber => "Tab or Space roll",
            GameKey::Quiz | GameKey::MathSprint | GameKey::WordScramble => {
                "Tab start · type answer · Enter submit"
            }
            GameKey::Keymaster => "Tab start · press the shown letter",
            GameKey::Memory => "Tab start · a-p flip a card",
            GameKey::CoinFlip => "Tab start · h heads · t tails",
            GameKey::SliderPrecision => "Tab start · ←/→ move (Shift ×10) · Enter submit",
            GameKey::TimingTap => "Tab start · Space tap",
            GameKey::ColorMatch => "Tab start · r/g/b/p pick the ink color",
        }
    }

    pub fn translate(&mut self, event: KeyEvent) -> KeyAction {
        if event.code == KeyCode::Esc
            || (event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL))
        {
            return KeyAction::Quit;
        }
        if event.code == KeyCode::Tab {
            self.reset();
            return KeyAction::Input(Input::Start);
        }

        match self.game {
            GameKey::ClickRush | GameKey::Reaction | GameKey::TimingTap => match event.code {
                KeyCode::Char(' ') | KeyCode::Enter => KeyAction::Input(Input::Press),
                _ => KeyAction::Ignore,
            },
            GameKey::LuckyNumber => match event.code {
                KeyCode::Char(' ') | KeyCode::Enter => KeyAction::Input(Input::Start),
                _ => KeyAction::Ignore,
            },
            GameKey::Quiz | GameKey::MathSprint | GameKey::WordScramble => self.edit(event.code),
            GameKey::Keymaster => match event.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => KeyAction::Input(Input::Key(c)),
                _ => KeyAction::Ignore,
            },
            GameKey::Memory => match event.code {
                KeyCode::Char(c) => card_index(c)
                    .map(|i| KeyAction::Input(Input::Flip(i)))
                    .unwrap_or(KeyAction::Ignore),
                _ => KeyAction::Ignore,
            },
            GameKey::CoinFlip => match event.code {
                KeyCode::Char('h' | 'H') => KeyAction::Input(Input::Guess(Coin::Heads)),
                KeyCode::Char('t' | 'T') => KeyAction::Input(Input::Guess(Coin::Tails)),
                _ => KeyAction::Ignore,
            },
            GameKey::SliderPrecision => {
                let step = if event.modifiers.contains(KeyModifiers::SHIFT) {
                    10
                } else {
                    1
                };
                match event.code {
                    KeyCode::Left => self.slide(-step),
                    KeyCode::Right => self.slide(step),
                    KeyCode::Enter => KeyAction::Input(Input::Submit),
                    _ => KeyAction::Ignore,
                }
            }
            GameKey::ColorMatch => match event.code {
                KeyCode::Char(c) => color_for(c)
                    .map(|color| KeyAction::Input(Input::Pick(color)))
                    .unwrap_or(KeyAction::Ignore),
                _ => KeyAction::Ignore,
            },
        }
    }

    fn edit(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(c) => {
                self.buffer.push(c);
                KeyAction::Redraw
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                KeyAction::Redraw
            }
            KeyCode::Enter => KeyAction::Input(Input::Answer(std::mem::take(&mut self.buffer))),
            _ => KeyAction::Ignore,
        }
    }

    fn slide(&mut self, delta: i16) -> KeyAction {
        let value = (i16::from(self.slider) + delta).clamp(0, i16::from(slider::MAX_VALUE));
        // Clamped to 0..=MAX_VALUE above
        self.slider = value as u8;
        KeyAction::Input(Input::Slide(self.slider))
    }
}

/// `a` is the first card, left to right.
fn card_index(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    if !c.is_ascii_lowercase() {
        return None;
    }
    let index = (c as u8 - b'a') as usize;
    (index < memory::PAIRS * 2).then_some(index)
}

fn color_for(c: char) -> Option<ColorName> {
    match c.to_ascii_lowercase() {
        'r' => Some(ColorName::Red),
        'g' => Some(ColorName::Green),
        'b' => Some(ColorName::Blue),
        'p' => Some(ColorName::Purple),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_escape_quits_every_game() {
        for game in [GameKey::Quiz, GameKey::Memory, GameKey::SliderPrecision] {
            let mut keys = KeyMap::new(game);
            assert_eq!(keys.translate(press(KeyCode::Esc)), KeyAction::Quit);
        }
    }

    #[test]
    fn test_answer_buffer_submits_on_enter() {
        let mut keys = KeyMap::new(GameKey::MathSprint);
        assert_eq!(keys.translate(press(KeyCode::Char('1'))), KeyAction::Redraw);
        assert_eq!(keys.translate(press(KeyCode::Char('2'))), KeyAction::Redraw);
        assert_eq!(keys.translate(press(KeyCode::Char('3'))), KeyAction::Redraw);
        keys.translate(press(KeyCode::Backspace));
        assert_eq!(keys.buffer(), "12");
        assert_eq!(
            keys.translate(press(KeyCode::Enter)),
            KeyAction::Input(Input::Answer("12".to_string()))
        );
        assert_eq!(keys.buffer(), "");
    }

    #[test]
    fn test_slider_clamps_at_bounds() {
        let mut keys = KeyMap::new(GameKey::SliderPrecision);
        let shift_right = KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT);
        for _ in 0..10 {
            keys.translate(shift_right);
        }
        assert_eq!(keys.slider(), slider::MAX_VALUE);
        assert_eq!(
            keys.translate(press(KeyCode::Right)),
            KeyAction::Input(Input::Slide(slider::MAX_VALUE))
        );

        // Start puts the slider back at its default
        keys.translate(press(KeyCode::Tab));
        assert_eq!(keys.slider(), slider::DEFAULT_VALUE);
    }

    #[test]
    fn test_memory_cards_map_a_to_p() {
        let mut keys = KeyMap::new(GameKey::Memory);
        assert_eq!(
            keys.translate(press(KeyCode::Char('a'))),
            KeyAction::Input(Input::Flip(0))
        );
        assert_eq!(
            keys.translate(press(KeyCode::Char('p'))),
            KeyAction::Input(Input::Flip(15))
        );
        assert_eq!(keys.translate(press(KeyCode::Char('q'))), KeyAction::Ignore);
    }

    #[test]
    fn test_coin_and_color_keys() {
        let mut coin = KeyMap::new(GameKey::CoinFlip);
        assert_eq!(
            coin.translate(press(KeyCode::Char('t'))),
            KeyAction::Input(Input::Guess(Coin::Tails))
        );

        let mut color = KeyMap::new(GameKey::ColorMatch);
        assert_eq!(
            color.translate(press(KeyCode::Char('P'))),
            KeyAction::Input(Input::Pick(ColorName::Purple))
        );
        assert_eq!(color.translate(press(KeyCode::Char('x'))), KeyAction::Ignore);
    }
}
