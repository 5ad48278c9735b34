//! Cross-round progress and its JSON save files.
//!
//! | File                | Contents                                  |
//! |---------------------|-------------------------------------------|
//! | `profile.json`      | xp, level, streaks, power-ups, collection |
//! | `high_scores.json`  | best winning time per level               |
//! | `daily_scores.json` | best time and moves per challenge day     |
//!
//! Loading never fails and saving never interrupts play; see `JsonStore`.

pub mod daily;
pub mod error;
pub mod profile;
pub mod scores;
pub mod store;
pub mod tracker;

pub use daily::{DailyBest, DailyScores};
pub use error::StoreError;
pub use profile::{Achievement, Profile, ProfileUpdate, Settings};
pub use scores::HighScores;
pub use store::JsonStore;
pub use tracker::{Progression, RecordOutcome};
