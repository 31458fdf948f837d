//! Game keys, titles and the static content tables each game reads.

mod content;

pub use content::*;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identifier a score report is filed under.
///
/// `to_string()` yields the server key (`molayman_click_rush`); parsing also
/// accepts the short kebab-case alias (`click-rush`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum GameKey {
    #[strum(to_string = "molayman_click_rush", serialize = "click-rush")]
    ClickRush,
    #[strum(to_string = "molayman_reaction", serialize = "reaction")]
    Reaction,
    #[strum(to_string = "molayman_lucky_number", serialize = "lucky-number")]
    LuckyNumber,
    #[strum(to_string = "molayman_quiz", serialize = "quiz")]
    Quiz,
    #[strum(to_string = "molayman_keymaster", serialize = "keymaster")]
    Keymaster,
    #[strum(to_string = "molayman_memory", serialize = "memory")]
    Memory,
    #[strum(to_string = "molayman_math_sprint", serialize = "math-sprint")]
    MathSprint,
    #[strum(to_string = "molayman_coin_flip", serialize = "coin-flip")]
    CoinFlip,
    #[strum(to_string = "molayman_slider_precision", serialize = "slider")]
    SliderPrecision,
    #[strum(to_string = "molayman_word_scramble", serialize = "word-scramble")]
    WordScramble,
    #[strum(to_string = "molayman_timing_tap", serialize = "timing-tap")]
    TimingTap,
    #[strum(to_string = "molayman_color_match", serialize = "color-match")]
    ColorMatch,
}

impl GameKey {
    /// Server-side key, e.g. `molayman_quiz`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Short alias accepted on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::ClickRush => "click-rush",
            Self::Reaction => "reaction",
            Self::LuckyNumber => "lucky-number",
            Self::Quiz => "quiz",
            Self::Keymaster => "keymaster",
            Self::Memory => "memory",
            Self::MathSprint => "math-sprint",
            Self::CoinFlip => "coin-flip",
            Self::SliderPrecision => "slider",
            Self::WordScramble => "word-scramble",
            Self::TimingTap => "timing-tap",
            Self::ColorMatch => "color-match",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ClickRush => "Click Rush",
            Self::Reaction => "Reaction",
            Self::LuckyNumber => "Lucky Number",
            Self::Quiz => "Quiz",
            Self::Keymaster => "Keymaster",
            Self::Memory => "Memory",
            Self::MathSprint => "Math Sprint",
            Self::CoinFlip => "Coin Flip",
            Self::SliderPrecision => "Slider Precision",
            Self::WordScramble => "Word Scramble",
            Self::TimingTap => "Timing Tap",
            Self::ColorMatch => "Color Match",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Self::ClickRush => "Click as many times as you can in 10 seconds",
            Self::Reaction => "Wait for green, then click the box as fast as you can",
            Self::LuckyNumber => "Draw a number between 1 and 100",
            Self::Quiz => "Answer 5 questions",
            Self::Keymaster => "Type the shown letter before it changes (20s)",
            Self::Memory => "Match all 8 pairs of symbols",
            Self::MathSprint => "Solve as many sums as you can in 15 seconds",
            Self::CoinFlip => "Guess heads or tails for 10 rounds",
            Self::SliderPrecision => "Move the slider as close to the target as possible",
            Self::WordScramble => "Unscramble 5 words",
            Self::TimingTap => "Tap when the bar is near 100% (10 taps)",
            Self::ColorMatch => "Pick the COLOR of the text, not the word (8 rounds)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_twelve_keys() {
        assert_eq!(GameKey::iter().count(), 12);
    }

    #[test]
    fn test_discriminants_follow_iteration_order() {
        for (i, key) in GameKey::iter().enumerate() {
            assert_eq!(key as usize, i);
        }
    }

    #[test]
    fn test_server_key_display() {
        assert_eq!(GameKey::ClickRush.to_string(), "molayman_click_rush");
        assert_eq!(GameKey::SliderPrecision.as_str(), "molayman_slider_precision");
        assert_eq!(GameKey::ColorMatch.as_str(), "molayman_color_match");
    }

    #[test]
    fn test_parse_server_key_and_alias() {
        for key in GameKey::iter() {
            assert_eq!(GameKey::from_str(key.as_str()).unwrap(), key);
            assert_eq!(GameKey::from_str(key.alias()).unwrap(), key);
        }
        assert_eq!(GameKey::from_str("QUIZ").unwrap(), GameKey::Quiz);
        assert!(GameKey::from_str("spin_wheel").is_err());
    }
}
