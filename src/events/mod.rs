//! Events emitted by a round.
//!
//! The round never calls out to audio, persistence or effects directly.
//! It queues `GameEvent`s, and whoever drives it drains them with
//! `Round::take_events` after each tick:
//!
//! - the session plays sounds and persists power-up use
//! - the profile collects faces from `Matched` events
//! - front ends spawn their own visual flourishes
//!
//! Events are queued in the order things happened within the tick.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, FaceId, PairKey, PlayerId, PowerupKind};

/// What caused a pair to be matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchSource {
    /// The player revealed both cards.
    Flip,
    /// The bomb power-up matched a hidden pair.
    Bomb,
}

/// Something that happened during a tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card started turning face up.
    CardFlipped { card: CardId },

    /// Two cards were locked as a pair.
    Matched {
        first: CardId,
        second: CardId,
        identity: PairKey,
        face: FaceId,
        /// Whose turn it was.
        player: PlayerId,
        source: MatchSource,
    },

    /// Two revealed cards did not match and started turning back.
    Mismatched {
        first: CardId,
        second: CardId,
        player: PlayerId,
    },

    /// Two-player rounds: the other player is up.
    TurnPassed { to: PlayerId },

    /// A power-up was spent. `remaining` is the count left afterwards.
    PowerupUsed { kind: PowerupKind, remaining: u32 },

    /// A hint revealed `card`.
    HintUsed { card: CardId },

    /// Pause was toggled.
    Paused { paused: bool },

    /// Every pair is matched.
    Won { score: u32, elapsed: f32, moves: u32 },

    /// The time limit ran out first.
    TimedOut,

    /// The player left the round.
    Abandoned,
}

impl GameEvent {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            GameEvent::CardFlipped { .. } => "card_flipped",
            GameEvent::Matched { .. } => "matched",
            GameEvent::Mismatched { .. } => "mismatched",
            GameEvent::TurnPassed { .. } => "turn_passed",
            GameEvent::PowerupUsed { .. } => "powerup_used",
            GameEvent::HintUsed { .. } => "hint_used",
            GameEvent::Paused { .. } => "paused",
            GameEvent::Won { .. } => "won",
            GameEvent::TimedOut => "timed_out",
            GameEvent::Abandoned => "abandoned",
        }
    }

    /// Does this event end the round?
    #[must_use]
    pub const fn ends_round(&self) -> bool {
        matches!(self, GameEvent::Won { .. } | GameEvent::TimedOut | GameEvent::Abandoned)
    }
}
