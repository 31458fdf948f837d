//! Read-only content shown by the quiz, scramble, color and memory games.

/// A quiz prompt with its expected answer (compared case-insensitively).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub answer: &'static str,
}

pub const QUIZ: [Question; 5] = [
    Question {
        prompt: "Rajuk Uttara Model College is in…",
        answer: "Uttara",
    },
    Question {
        prompt: "Discount cap is…",
        answer: "70",
    },
    Question {
        prompt: "Spin wheel max discount is…",
        answer: "30",
    },
    Question {
        prompt: "Admin name in chat is…",
        answer: "I am Molay Man",
    },
    Question {
        prompt: "Website name starts with…",
        answer: "Molayman",
    },
];

/// A word and the scrambled form the player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scramble {
    pub word: &'static str,
    pub scrambled: &'static str,
}

pub const SCRAMBLE: [Scramble; 5] = [
    Scramble {
        word: "MOLAYMAN",
        scrambled: "YAMMALON",
    },
    Scramble {
        word: "LOTTERY",
        scrambled: "YRTTLOE",
    },
    Scramble {
        word: "ADMISSION",
        scrambled: "NOMISDASI",
    },
    Scramble {
        word: "UTTARA",
        scrambled: "TTAURA",
    },
    Scramble {
        word: "COLLEGE",
        scrambled: "LGELOEC",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Red,
    Green,
    Blue,
    Purple,
}

impl ColorName {
    pub const ALL: [ColorName; 4] = [Self::Red, Self::Green, Self::Blue, Self::Purple];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Purple => "PURPLE",
        }
    }

    /// Render color as a CSS hex string
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Green => "#22c55e",
            Self::Blue => "#3b82f6",
            Self::Purple => "#a855f7",
        }
    }
}

pub const MEMORY_SYMBOLS: [char; 8] = ['★', '◆', '●', '▲', '♥', '♣', '☀', '☾'];

pub const HIDDEN_CARD: char = '□';
