//! Game configuration.
//!
//! All tunables live here rather than in the code paths that use them:
//! - `TimingConfig`: animation speed, mismatch delay, freeze length
//! - `ScoringConfig`: score formula constants
//! - `LayoutConfig` / `Viewport`: board geometry
//! - `Theme`: where face pictures come from
//!
//! `GameConfig` is serde-friendly so a front end can read it from a JSON
//! file; every field has a default.

use serde::{Deserialize, Serialize};

/// Animation and timer settings. All durations are in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Reveal/hide progress per second (6.0 = a flip takes 1/6 s).
    pub flip_speed: f32,

    /// How long a mismatched pair stays face up, measured from the moment
    /// the second card finished revealing.
    pub mismatch_delay: f32,

    /// How long the freeze power-up stops the clock.
    pub freeze_duration: f32,

    /// Target ticks per second for frame-driven front ends.
    pub tick_rate: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            flip_speed: 6.0,
            mismatch_delay: 0.6,
            freeze_duration: 10.0,
            tick_rate: 60,
        }
    }
}

impl TimingConfig {
    /// Seconds per tick at the target rate.
    #[must_use]
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}

/// Score formula constants.
///
/// `score = max(0, base - moves * move_penalty - secs * time_penalty
///              + remaining_secs * remaining_bonus - hints * hint_penalty)`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub base_score: u32,
    pub move_penalty: u32,
    pub time_penalty: u32,
    /// Only applies to rounds with a time limit.
    pub remaining_bonus: u32,
    pub hint_penalty: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 1000,
            move_penalty: 6,
            time_penalty: 3,
            remaining_bonus: 1,
            hint_penalty: 25,
        }
    }
}

/// Board geometry settings, in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Space kept free around the whole board.
    pub margin: f32,
    /// Space between neighbouring cards.
    pub gap: f32,
    /// Card width divided by card height (5:7 by default).
    pub aspect: f32,
    pub min_card: (f32, f32),
    pub max_card: (f32, f32),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 40.0,
            gap: 12.0,
            aspect: 5.0 / 7.0,
            min_card: (40.0, 56.0),
            max_card: (140.0, 196.0),
        }
    }
}

/// Drawable area the board is laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Rows at the top reserved for the HUD.
    pub reserved_top: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 640.0,
            reserved_top: 80.0,
        }
    }
}

impl Viewport {
    /// Create a viewport with no reserved HUD area.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            reserved_top: 0.0,
        }
    }
}

/// Where face pictures come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Pictures from the images directory, padded with generated faces.
    #[default]
    Image,
    /// Generated coloured faces only.
    Color,
}

impl Theme {
    /// The other theme (menu toggle).
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Image => Theme::Color,
            Theme::Color => Theme::Image,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub scoring: ScoringConfig,
    pub layout: LayoutConfig,
    pub viewport: Viewport,
    pub theme: Theme,
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mismatch display delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, seconds: f32) -> Self {
        self.timing.mismatch_delay = seconds.max(0.0);
        self
    }

    /// Set the flip animation speed.
    #[must_use]
    pub fn with_flip_speed(mut self, speed: f32) -> Self {
        self.timing.flip_speed = speed;
        self
    }

    /// Set the freeze power-up duration.
    #[must_use]
    pub fn with_freeze_duration(mut self, seconds: f32) -> Self {
        self.timing.freeze_duration = seconds.max(0.0);
        self
    }

    /// Replace the scoring constants.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the face theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
