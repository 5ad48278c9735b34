//! Score formula.
//!
//! ## Standard formula
//!
//! ```text
//! score = max(0, base
//!                - moves * move_penalty
//!                - whole_elapsed_secs * time_penalty
//!                + whole_remaining_secs * remaining_bonus   (timed rounds only)
//!                - hints * hint_penalty)
//! ```
//!
//! Seconds are truncated to whole seconds, so the score only changes once
//! per second on the HUD.

use crate::core::ScoringConfig;

/// Everything a score depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreInput {
    pub moves: u32,
    /// Scored seconds (excludes pauses and freezes).
    pub elapsed: f32,
    pub time_limit: Option<f32>,
    pub hints: u32,
}

impl ScoreInput {
    /// Seconds left before the limit, if the round has one.
    #[must_use]
    pub fn remaining(&self) -> Option<f32> {
        self.time_limit.map(|limit| (limit - self.elapsed).max(0.0))
    }
}

/// Scoring trait.
///
/// Implementations must be pure: the same input always gives the same
/// score, so the HUD and the final result agree.
pub trait ScoringRules: std::fmt::Debug {
    /// Current score for a single-player round.
    fn score(&self, input: &ScoreInput) -> u32;
}

/// The default formula, driven by `ScoringConfig`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StandardScoring {
    config: ScoringConfig,
}

impl StandardScoring {
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

impl ScoringRules for StandardScoring {
    fn score(&self, input: &ScoreInput) -> u32 {
        let c = &self.config;
        let elapsed = input.elapsed.max(0.0).floor() as i64;
        let remaining = input.remaining().map_or(0, |r| r.floor() as i64);

        let score = i64::from(c.base_score)
            - i64::from(input.moves) * i64::from(c.move_penalty)
            - elapsed * i64::from(c.time_penalty)
            + remaining * i64::from(c.remaining_bonus)
            - i64::from(input.hints) * i64::from(c.hint_penalty);

        score.clamp(0, i64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> StandardScoring {
        StandardScoring::new(ScoringConfig::default())
    }

    #[test]
    fn test_untimed_formula() {
        let input = ScoreInput {
            moves: 10,
            elapsed: 20.9,
            ..ScoreInput::default()
        };
        // 1000 - 60 - 60
        assert_eq!(rules().score(&input), 880);
    }

    #[test]
    fn test_remaining_bonus_and_hints() {
        let input = ScoreInput {
            moves: 4,
            elapsed: 10.0,
            time_limit: Some(60.0),
            hints: 2,
        };
        // 1000 - 24 - 30 + 50 - 50
        assert_eq!(rules().score(&input), 946);
    }

    #[test]
    fn test_never_negative() {
        let input = ScoreInput {
            moves: 10_000,
            elapsed: 5_000.0,
            ..ScoreInput::default()
        };
        assert_eq!(rules().score(&input), 0);
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        let input = ScoreInput {
            elapsed: 90.0,
            time_limit: Some(60.0),
            ..ScoreInput::default()
        };
        assert_eq!(input.remaining(), Some(0.0));
        assert_eq!(rules().score(&input), 1000 - 270);
    }
}
