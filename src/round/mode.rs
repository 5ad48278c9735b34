//! Round modes and the parameters a round starts from.

use serde::{Deserialize, Serialize};

use crate::cards::MAX_PAIRS;
use crate::rules::Level;

/// How a round is played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One player, level ladder.
    #[default]
    Single,
    /// One player, board seeded from the date.
    Daily,
    /// Two players alternating on a shared board.
    TwoPlayer,
}

impl Mode {
    #[must_use]
    pub const fn player_count(self) -> usize {
        match self {
            Mode::Single | Mode::Daily => 1,
            Mode::TwoPlayer => 2,
        }
    }

    /// Does this mode feed the profile (xp, streaks, collection)?
    #[must_use]
    pub const fn is_single_player(self) -> bool {
        matches!(self, Mode::Single | Mode::Daily)
    }
}

/// What a round is started with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSpec {
    pub pair_count: usize,
    pub time_limit: Option<f32>,
    pub mode: Mode,
    /// Ladder level, if the round came from one.
    pub level: Option<u32>,
}

impl RoundSpec {
    /// An untimed round with `pair_count` pairs, kept within
    /// `1..=MAX_PAIRS`.
    #[must_use]
    pub fn from_pairs(pair_count: usize, mode: Mode) -> Self {
        Self {
            pair_count: pair_count.clamp(1, MAX_PAIRS),
            time_limit: None,
            mode,
            level: None,
        }
    }

    /// A round for a ladder level. Two-player rounds drop the time limit.
    #[must_use]
    pub fn from_level(level: Level, mode: Mode) -> Self {
        let time_limit = if mode == Mode::TwoPlayer {
            None
        } else {
            level.time_limit
        };
        Self {
            pair_count: level.pair_count.clamp(1, MAX_PAIRS),
            time_limit,
            mode,
            level: Some(level.number),
        }
    }

    /// Override the time limit.
    #[must_use]
    pub fn with_time_limit(mut self, seconds: Option<f32>) -> Self {
        self.time_limit = seconds;
        self
    }
}
