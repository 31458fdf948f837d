//! Configuration for the arcade.
//!
//! - `ReporterConfig` - where and how scores are submitted (TOML file)
//! - Per-game timing and scoring constants

mod reporter;

pub use reporter::*;

/// Click Rush: count clicks inside a fixed window.
pub mod click_rush {
    use std::time::Duration;

    pub const DURATION: Duration = Duration::from_secs(10);
}

/// Reaction: the signal appears after `MIN_DELAY_MS + rand(0..DELAY_SPREAD_MS)`.
pub mod reaction {
    pub const MIN_DELAY_MS: u64 = 700;
    pub const DELAY_SPREAD_MS: u64 = 1300;
}

pub mod lucky_number {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;
}

/// Keymaster: one new target letter per tick.
pub mod keymaster {
    use std::time::Duration;

    pub const COUNTDOWN_SECS: u32 = 20;
    pub const TICK: Duration = Duration::from_secs(1);
    pub const POINTS_PER_HIT: u32 = 5;
}

pub mod memory {
    use std::time::Duration;

    pub const PAIRS: usize = 8;

    /// How long a mismatched pair stays face up.
    pub const MISMATCH_DELAY: Duration = Duration::from_millis(650);
}

pub mod math_sprint {
    use std::time::Duration;

    pub const DURATION: Duration = Duration::from_secs(15);
    pub const OPERAND_MIN: u32 = 1;
    pub const OPERAND_MAX: u32 = 20;
}

pub mod coin_flip {
    pub const ROUNDS: u32 = 10;
}

pub mod slider {
    pub const DEFAULT_VALUE: u8 = 50;
    pub const MAX_VALUE: u8 = 100;
    pub const TARGET_MIN: u8 = 1;
    pub const TARGET_MAX: u8 = 100;
    pub const MAX_SCORE: u32 = 100;
}

/// Timing Tap: the bar moves `STEP` of full scale per animation frame.
pub mod timing_tap {
    use std::time::Duration;

    pub const STEP: f64 = 0.018;

    /// ~60 frames per second.
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
    pub const TAPS: u32 = 10;
    pub const HIT_PERCENT: u32 = 90;
}

pub mod color_match {
    pub const ROUNDS: u32 = 8;
}

/// Score submission defaults.
pub mod http {
    pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    pub const CSRF_HEADER: &str = "X-CSRFToken";
}
