//! Best time per level.
//!
//! Stored as `{"1": 42, "2": 97}`: level number (as a string) to the best
//! winning time in whole seconds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// File name inside the save directory.
pub const HIGH_SCORES_FILE: &str = "high_scores.json";

/// Best winning time per level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    best: BTreeMap<String, u32>,
}

impl HighScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best time for a level, if it was ever won.
    #[must_use]
    pub fn best_time(&self, level: u32) -> Option<u32> {
        self.best.get(&level.to_string()).copied()
    }

    /// Record a winning time. Returns `true` if it is a new best.
    ///
    /// ```
    /// use mythic_match::progression::HighScores;
    ///
    /// let mut scores = HighScores::new();
    /// assert!(scores.record(1, 50));
    /// assert!(!scores.record(1, 55));
    /// assert!(scores.record(1, 41));
    /// assert_eq!(scores.best_time(1), Some(41));
    /// ```
    pub fn record(&mut self, level: u32, seconds: u32) -> bool {
        let key = level.to_string();
        match self.best.get(&key) {
            Some(&best) if best <= seconds => false,
            _ => {
                self.best.insert(key, seconds);
                true
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.best.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
