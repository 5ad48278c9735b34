//! Summary of a finished round, handed to progression.

use serde::{Deserialize, Serialize};

use super::mode::Mode;
use crate::core::FaceId;
use crate::rules::{MatchOutcome, RoundStatus};

/// Everything progression needs to know about a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub mode: Mode,
    pub level: Option<u32>,
    pub pair_count: usize,
    pub status: RoundStatus,
    pub score: u32,
    /// Scored seconds.
    pub elapsed: f32,
    pub moves: u32,
    pub hints: u32,
    /// Faces of pairs the player revealed themselves (bomb matches excluded).
    pub matched_faces: Vec<FaceId>,
    /// Pairs found per player, indexed by player id.
    pub player_pairs: Vec<u32>,
    /// Two-player rounds that ended with a full board.
    pub outcome: Option<MatchOutcome>,
}

impl RoundReport {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status == RoundStatus::Won
    }

    /// Elapsed time in whole seconds, as stored in score files.
    #[must_use]
    pub fn whole_seconds(&self) -> u32 {
        self.elapsed.max(0.0).floor() as u32
    }

    /// Every pair found with no wasted move.
    #[must_use]
    pub fn is_flawless(&self) -> bool {
        self.is_win() && self.moves as usize == self.pair_count
    }
}
