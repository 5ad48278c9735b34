//! # mythic-match
//!
//! Core of a card-matching ("memory") game: a board of face-down pairs,
//! revealed two at a time, with scoring, levels, power-ups and persistent
//! player progress.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No window, no audio device, no wall clock. Front ends
//!    feed decoded `Action`s and a frame delta into `Round::tick` and draw
//!    from `render::board_view`.
//!
//! 2. **Deterministic**: All randomness comes from a seeded `GameRng`, and
//!    all timing from the deltas passed in. A seed plus an input log replays
//!    a round exactly.
//!
//! 3. **Fail Soft**: Missing images, sounds or save files degrade to
//!    placeholders and defaults; nothing here stops a game over I/O.
//!
//! ## Modules
//!
//! - `core`: IDs, players, RNG, configuration, actions
//! - `cards`: Card state machine and deck builder
//! - `layout`: Board geometry
//! - `events`: What a round announces each tick
//! - `rules`: Scoring, outcomes, level ladder
//! - `round`: Match resolver, power-ups, round controller
//! - `progression`: Profile, best times, daily scores, JSON store
//! - `assets`: Face pool, placeholders, sounds
//! - `render`: Stateless view for drawing
//! - `session`: Top-level controller

pub mod assets;
pub mod cards;
pub mod core;
pub mod events;
pub mod layout;
pub mod progression;
pub mod render;
pub mod round;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, CardId, FaceId, GameConfig, GameRng, PairKey, PlayerId, PlayerMap, PowerupKind, Theme,
};

pub use crate::cards::{build_deck, Card, CardState, Deck, DeckEntry};

pub use crate::layout::{layout, BoardLayout, Point, Rect};

pub use crate::events::{GameEvent, MatchSource};

pub use crate::rules::{Level, LevelLadder, MatchOutcome, RoundStatus, ScoringRules, StandardScoring};

pub use crate::round::{Mode, PowerupWallet, Round, RoundReport, RoundSpec};

pub use crate::progression::{JsonStore, Profile, Progression, StoreError};

pub use crate::assets::{AssetError, FaceAsset, FacePool, Sound, SoundBank};

pub use crate::render::{board_view, hud, CardView, Hud, Side};

pub use crate::session::Session;
