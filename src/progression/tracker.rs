//! Loaded progression state and the save files behind it.

use chrono::NaiveDate;
use tracing::info;

use super::daily::{DailyScores, DAILY_SCORES_FILE};
use super::profile::{Profile, ProfileUpdate, PROFILE_FILE};
use super::scores::{HighScores, HIGH_SCORES_FILE};
use super::store::JsonStore;
use crate::round::{Mode, PowerupWallet, RoundReport};

/// What `Progression::record` changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordOutcome {
    pub profile: ProfileUpdate,
    pub new_best_time: bool,
    pub new_daily_best: bool,
}

/// Profile, high scores and daily scores, loaded once and saved after
/// every change.
#[derive(Clone, Debug)]
pub struct Progression {
    store: JsonStore,
    profile: Profile,
    scores: HighScores,
    daily: DailyScores,
}

impl Progression {
    /// Load everything from `store`. Missing or corrupt files become
    /// defaults; this never fails.
    #[must_use]
    pub fn load(store: JsonStore) -> Self {
        let profile = store.load_or_default(PROFILE_FILE);
        let scores = store.load_or_default(HIGH_SCORES_FILE);
        let daily = store.load_or_default(DAILY_SCORES_FILE);
        info!(dir = %store.dir().display(), "progression loaded");
        Self {
            store,
            profile,
            scores,
            daily,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    #[must_use]
    pub fn daily(&self) -> &DailyScores {
        &self.daily
    }

    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Mirror the wallet of a running round into the profile and save it.
    pub fn sync_powerups(&mut self, wallet: PowerupWallet) {
        if self.profile.powerups != wallet {
            self.profile.powerups = wallet;
            self.store.save_best_effort(PROFILE_FILE, &self.profile);
        }
    }

    /// Apply a finished round and save whatever changed. `date` is the day
    /// a daily round belongs to.
    pub fn record(&mut self, report: &RoundReport, date: Option<NaiveDate>) -> RecordOutcome {
        let mut outcome = RecordOutcome {
            profile: self.profile.apply(report),
            ..RecordOutcome::default()
        };
        if report.mode.is_single_player() {
            self.store.save_best_effort(PROFILE_FILE, &self.profile);
        }

        if !report.is_win() {
            return outcome;
        }

        if let (Mode::Single, Some(level)) = (report.mode, report.level) {
            outcome.new_best_time = self.scores.record(level, report.whole_seconds());
            if outcome.new_best_time {
                info!(level, seconds = report.whole_seconds(), "new best time");
                self.store.save_best_effort(HIGH_SCORES_FILE, &self.scores);
            }
        }

        if let (Mode::Daily, Some(date)) = (report.mode, date) {
            outcome.new_daily_best = self.daily.record(date, report.whole_seconds(), report.moves);
            if outcome.new_daily_best {
                self.store.save_best_effort(DAILY_SCORES_FILE, &self.daily);
            }
        }

        outcome
    }
}
