//! Daily challenge results.
//!
//! Stored as `{"2026-10-16": {"best_time": 48, "best_moves": 12}}`. Time and
//! moves improve independently.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// File name inside the save directory.
pub const DAILY_SCORES_FILE: &str = "daily_scores.json";

/// Best results for one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBest {
    pub best_time: u32,
    pub best_moves: u32,
}

/// Best daily results keyed by ISO date.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyScores {
    days: BTreeMap<String, DailyBest>,
}

impl DailyScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<DailyBest> {
        self.days.get(&date.to_string()).copied()
    }

    /// Record a daily win. Returns `true` if either value improved.
    pub fn record(&mut self, date: NaiveDate, seconds: u32, moves: u32) -> bool {
        let entry = self.days.entry(date.to_string());
        match entry {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(DailyBest {
                    best_time: seconds,
                    best_moves: moves,
                });
                true
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                let best = slot.get_mut();
                let mut improved = false;
                if seconds < best.best_time {
                    best.best_time = seconds;
                    improved = true;
                }
                if moves < best.best_moves {
                    best.best_moves = moves;
                    improved = true;
                }
                improved
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_fields_improve_independently() {
        let mut daily = DailyScores::new();
        assert!(daily.record(day(), 60, 20));
        assert!(daily.record(day(), 70, 15));
        assert!(!daily.record(day(), 65, 18));

        assert_eq!(
            daily.get(day()),
            Some(DailyBest {
                best_time: 60,
                best_moves: 15
            })
        );
    }

    #[test]
    fn test_json_keyed_by_iso_date() {
        let mut daily = DailyScores::new();
        daily.record(day(), 48, 12);
        let json = serde_json::to_value(&daily).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"2026-10-16": {"best_time": 48, "best_moves": 12}})
        );
    }
}
