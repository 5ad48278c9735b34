//! Scoring rules, round outcomes and the level ladder.
//!
//! The round controller calls into `ScoringRules` for every score it
//! reports but never hardcodes the formula, so front ends can plug in a
//! different one without touching the state machine.

pub mod level;
pub mod outcome;
pub mod scoring;

pub use level::{Level, LevelLadder};
pub use outcome::{MatchOutcome, RoundStatus};
pub use scoring::{ScoreInput, ScoringRules, StandardScoring};
