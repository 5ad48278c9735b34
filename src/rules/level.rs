//! Difficulty levels.
//!
//! The ladder has three rungs, each a square board with a time limit:
//!
//! | Level | Grid | Pairs | Limit |
//! |-------|------|-------|-------|
//! | 1     | 4×4  | 8     | 60 s  |
//! | 2     | 6×6  | 18    | 100 s |
//! | 3     | 8×8  | 32    | 160 s |
//!
//! Winning moves one rung up; after the last rung the ladder starts over.

use serde::{Deserialize, Serialize};

/// One difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based number shown to the player and used as the score key.
    pub number: u32,
    pub pair_count: usize,
    /// Seconds, or `None` for an untimed round.
    pub time_limit: Option<f32>,
}

impl Level {
    #[must_use]
    pub const fn new(number: u32, pair_count: usize, time_limit: Option<f32>) -> Self {
        Self {
            number,
            pair_count,
            time_limit,
        }
    }

    /// Key used in the high-score file.
    #[must_use]
    pub fn key(&self) -> String {
        self.number.to_string()
    }
}

/// Ordered list of levels with wrap-around progression. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelLadder {
    levels: Vec<Level>,
}

impl Default for LevelLadder {
    fn default() -> Self {
        Self {
            levels: vec![
                Level::new(1, 8, Some(60.0)),
                Level::new(2, 18, Some(100.0)),
                Level::new(3, 32, Some(160.0)),
            ],
        }
    }
}

impl LevelLadder {
    /// Build a custom ladder. An empty list falls back to the default one.
    #[must_use]
    pub fn new(levels: Vec<Level>) -> Self {
        if levels.is_empty() {
            return Self::default();
        }
        Self { levels }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Level {
        self.levels[0]
    }

    /// Look up a level by its 1-based number.
    #[must_use]
    pub fn get(&self, number: u32) -> Option<Level> {
        self.levels.iter().copied().find(|l| l.number == number)
    }

    /// The level after `number`, wrapping to the first.
    ///
    /// ```
    /// use mythic_match::rules::LevelLadder;
    ///
    /// let ladder = LevelLadder::default();
    /// assert_eq!(ladder.next_after(1).number, 2);
    /// assert_eq!(ladder.next_after(3).number, 1);
    /// ```
    #[must_use]
    pub fn next_after(&self, number: u32) -> Level {
        match self.levels.iter().position(|l| l.number == number) {
            Some(i) => self.levels[(i + 1) % self.levels.len()],
            None => self.first(),
        }
    }

    /// Level a given day's challenge uses.
    #[must_use]
    pub fn for_day(&self, day_seed: u64) -> Level {
        self.levels[(day_seed % self.levels.len() as u64) as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
