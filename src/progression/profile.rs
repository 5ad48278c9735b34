//! Player profile: experience, streaks, power-ups, achievements and the
//! collection of matched faces.
//!
//! ## Rewards for a single-player win
//!
//! - `xp += 10 * pairs + score / 10`, and `level = 1 + xp / 1000`
//! - streak +1 (best streak follows); every third win in a row grants one
//!   of each power-up
//! - faces the player matched join the collection
//! - achievements are unlocked once and never revoked
//!
//! A timed-out or abandoned single-player round resets the streak.
//! Two-player rounds leave the profile alone.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::round::{PowerupWallet, RoundReport};
use crate::rules::RoundStatus;

/// File name inside the save directory.
pub const PROFILE_FILE: &str = "profile.json";

const XP_PER_LEVEL: u32 = 1000;
const STREAK_REWARD_EVERY: u32 = 3;
const SPEED_DEMON_SECONDS: f32 = 30.0;
const COLLECTOR_FACES: usize = 32;

/// One-time accomplishments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Achievement {
    FirstWin,
    /// Won with no wasted move.
    Flawless,
    /// Won in under 30 seconds.
    SpeedDemon,
    /// Five wins in a row.
    Streak5,
    /// 32 faces collected.
    Collector,
}

impl Achievement {
    pub const ALL: [Achievement; 5] = [
        Achievement::FirstWin,
        Achievement::Flawless,
        Achievement::SpeedDemon,
        Achievement::Streak5,
        Achievement::Collector,
    ];

    /// Key in the profile's `achievements` object.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Achievement::FirstWin => "first_win",
            Achievement::Flawless => "flawless",
            Achievement::SpeedDemon => "speed_demon",
            Achievement::Streak5 => "streak_5",
            Achievement::Collector => "collector",
        }
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Menu toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub music: bool,
    pub sfx: bool,
    pub fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music: true,
            sfx: true,
            fullscreen: false,
        }
    }
}

/// Persisted player progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub xp: u32,
    pub level: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub powerups: PowerupWallet,
    /// Unknown keys from newer files are kept as-is.
    pub achievements: BTreeMap<String, bool>,
    /// Face ids ever matched.
    pub collection: BTreeSet<u32>,
    pub settings: Settings,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            streak: 0,
            best_streak: 0,
            powerups: PowerupWallet::default(),
            achievements: Achievement::ALL
                .iter()
                .map(|a| (a.key().to_string(), false))
                .collect(),
            collection: BTreeSet::new(),
            settings: Settings::default(),
        }
    }
}

/// What changed after a round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub xp_gained: u32,
    pub leveled_up: bool,
    pub streak_reward: bool,
    pub new_faces: usize,
    pub unlocked: Vec<Achievement>,
}

impl Profile {
    #[must_use]
    pub fn has(&self, achievement: Achievement) -> bool {
        self.achievements.get(achievement.key()).copied().unwrap_or(false)
    }

    fn unlock(&mut self, achievement: Achievement, update: &mut ProfileUpdate) {
        if !self.has(achievement) {
            self.achievements.insert(achievement.key().to_string(), true);
            update.unlocked.push(achievement);
        }
    }

    /// Apply a finished round. Only single-player rounds count.
    pub fn apply(&mut self, report: &RoundReport) -> ProfileUpdate {
        let mut update = ProfileUpdate::default();
        if !report.mode.is_single_player() {
            return update;
        }

        match report.status {
            RoundStatus::Won => self.apply_win(report, &mut update),
            RoundStatus::Abandoned | RoundStatus::TimedOut => {
                if self.streak > 0 {
                    info!(lost = self.streak, "streak reset");
                }
                self.streak = 0;
            }
            RoundStatus::Ongoing => {}
        }
        update
    }

    fn apply_win(&mut self, report: &RoundReport, update: &mut ProfileUpdate) {
        let gained = 10 * report.pair_count as u32 + report.score / 10;
        let old_level = self.level;
        self.xp = self.xp.saturating_add(gained);
        self.level = 1 + self.xp / XP_PER_LEVEL;
        update.xp_gained = gained;
        update.leveled_up = self.level > old_level;

        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
        if self.streak % STREAK_REWARD_EVERY == 0 {
            self.powerups.grant_all(1);
            update.streak_reward = true;
        }

        let before = self.collection.len();
        self.collection.extend(report.matched_faces.iter().map(|f| f.raw()));
        update.new_faces = self.collection.len() - before;

        self.unlock(Achievement::FirstWin, update);
        if report.is_flawless() {
            self.unlock(Achievement::Flawless, update);
        }
        if report.elapsed < SPEED_DEMON_SECONDS {
            self.unlock(Achievement::SpeedDemon, update);
        }
        if self.streak >= 5 {
            self.unlock(Achievement::Streak5, update);
        }
        if self.collection.len() >= COLLECTOR_FACES {
            self.unlock(Achievement::Collector, update);
        }

        info!(
            xp = self.xp,
            level = self.level,
            streak = self.streak,
            unlocked = update.unlocked.len(),
            "profile updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FaceId;
    use crate::round::Mode;

    fn report(status: RoundStatus, pairs: usize, moves: u32, elapsed: f32, score: u32) -> RoundReport {
        RoundReport {
            mode: Mode::Single,
            level: Some(1),
            pair_count: pairs,
            status,
            score,
            elapsed,
            moves,
            hints: 0,
            matched_faces: (0..pairs as u32).map(FaceId).collect(),
            player_pairs: vec![pairs as u32],
            outcome: None,
        }
    }

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.level, 1);
        assert_eq!(profile.powerups, PowerupWallet::uniform(1));
        assert!(profile.settings.music && profile.settings.sfx);
        assert!(!profile.settings.fullscreen);
        assert!(Achievement::ALL.iter().all(|a| !profile.has(*a)));
    }

    #[test]
    fn test_win_rewards() {
        let mut profile = Profile::default();
        let update = profile.apply(&report(RoundStatus::Won, 8, 12, 45.0, 900));

        assert_eq!(update.xp_gained, 80 + 90);
        assert_eq!(profile.xp, 170);
        assert_eq!(profile.streak, 1);
        assert_eq!(profile.collection.len(), 8);
        assert_eq!(update.unlocked, vec![Achievement::FirstWin]);
    }

    #[test]
    fn test_flawless_and_speed() {
        let mut profile = Profile::default();
        let update = profile.apply(&report(RoundStatus::Won, 2, 2, 12.0, 980));
        assert!(update.unlocked.contains(&Achievement::Flawless));
        assert!(update.unlocked.contains(&Achievement::SpeedDemon));
    }

    #[test]
    fn test_level_up_and_streak_reward() {
        let mut profile = Profile::default();
        profile.xp = 950;
        profile.streak = 2;

        let update = profile.apply(&report(RoundStatus::Won, 8, 20, 50.0, 500));
        assert!(update.leveled_up);
        assert_eq!(profile.level, 2);
        assert!(update.streak_reward);
        assert_eq!(profile.powerups, PowerupWallet::uniform(2));
    }

    #[test]
    fn test_loss_resets_streak() {
        let mut profile = Profile::default();
        profile.streak = 4;
        profile.best_streak = 4;

        profile.apply(&report(RoundStatus::TimedOut, 8, 20, 60.0, 0));
        assert_eq!(profile.streak, 0);
        assert_eq!(profile.best_streak, 4);
    }

    #[test]
    fn test_two_player_rounds_ignored() {
        let mut profile = Profile::default();
        let mut duel = report(RoundStatus::Won, 8, 20, 50.0, 500);
        duel.mode = Mode::TwoPlayer;

        assert_eq!(profile.apply(&duel), ProfileUpdate::default());
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_achievements_unlock_once() {
        let mut profile = Profile::default();
        profile.apply(&report(RoundStatus::Won, 8, 20, 50.0, 500));
        let second = profile.apply(&report(RoundStatus::Won, 8, 20, 50.0, 500));
        assert!(!second.unlocked.contains(&Achievement::FirstWin));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Profile::default()).unwrap();
        for key in ["xp", "level", "streak", "best_streak", "powerups", "achievements", "collection", "settings"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["powerups"]["bomb"], 1);
        assert_eq!(json["settings"]["fullscreen"], false);

        let partial: Profile = serde_json::from_str(r#"{"xp": 1500, "collection": [3, 1]}"#).unwrap();
        assert_eq!(partial.xp, 1500);
        assert_eq!(partial.collection.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(partial.powerups, PowerupWallet::default());
    }
}
