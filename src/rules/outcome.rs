//! How rounds end.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Status returned by every `Round::tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Still playing (or paused).
    #[default]
    Ongoing,
    /// Every pair matched.
    Won,
    /// The player exited.
    Abandoned,
    /// The time limit ran out before the board was cleared.
    TimedOut,
}

impl RoundStatus {
    /// Has the round ended?
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, RoundStatus::Ongoing)
    }
}

/// Result of a completed two-player round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// One player found more pairs.
    Winner(PlayerId),
    /// Both found the same number.
    Draw,
}

impl MatchOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            MatchOutcome::Winner(p) => *p == player,
            MatchOutcome::Draw => false,
        }
    }

    /// Decide the outcome from the set of players tied for the lead.
    #[must_use]
    pub fn from_leaders(leaders: &[PlayerId]) -> Self {
        match leaders {
            [only] => MatchOutcome::Winner(*only),
            _ => MatchOutcome::Draw,
        }
    }
}
