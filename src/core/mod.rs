//! Core game types: identifiers, players, RNG, configuration, player actions.
//!
//! Everything here is independent of any particular round; the `round`
//! module composes these into the match state machine.

pub mod action;
pub mod config;
pub mod ids;
pub mod player;
pub mod rng;

pub use action::{Action, PowerupKind};
pub use config::{GameConfig, LayoutConfig, ScoringConfig, Theme, TimingConfig, Viewport};
pub use ids::{CardId, FaceId, PairKey};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
