//! Seeded randomness.
//!
//! Every random choice in a round (deal order, hint target, shuffle and
//! bomb picks) draws from a `GameRng`, so a seed plus the input log
//! replays a round exactly.
//!
//! ## Streams
//!
//! - `fork` hands each new round its own stream; how many rounds came
//!   before does not change the next deal.
//! - `for_context` derives a named stream from a seed; the deck is dealt
//!   from `"deck"` so power-up use can't disturb it.
//! - `for_date` seeds the daily challenge from the calendar date.
//!
//! ```
//! use mythic_match::core::GameRng;
//!
//! let mut session = GameRng::new(42);
//! let mut round = session.fork();
//!
//! let mut replay = GameRng::new(42).fork();
//! assert_eq!(round.gen_range_usize(0..100), replay.gen_range_usize(0..100));
//! ```

use std::hash::Hasher;
use std::ops::Range;

use chrono::{Datelike, NaiveDate};
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Golden-ratio step between forked seeds.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Random seed, for regular play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The daily challenge stream: seeded with the date as `YYYYMMDD`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use mythic_match::core::GameRng;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    /// assert_eq!(GameRng::for_date(date).seed(), 20261016);
    /// ```
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let year = u64::try_from(date.year()).unwrap_or(0);
        Self::new(year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day()))
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next child stream. Forking the same parent the same number of times
    /// always yields the same child.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    /// Named stream derived from this one's seed. Does not advance `self`.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        Self::new(hasher.finish())
    }

    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Up to `amount` distinct indices below `length`, in random order.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.inner, length, amount.min(length)).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(rng: &mut GameRng) -> Vec<usize> {
        (0..12).map(|_| rng.gen_range_usize(0..10_000)).collect()
    }

    #[test]
    fn test_same_seed_same_stream() {
        assert_eq!(draw(&mut GameRng::new(5)), draw(&mut GameRng::new(5)));
        assert_ne!(draw(&mut GameRng::new(5)), draw(&mut GameRng::new(6)));
    }

    #[test]
    fn test_forks_replay_in_order() {
        let mut session = GameRng::new(42);
        let first = session.fork();
        let second = session.fork();

        assert_eq!(first.seed(), GameRng::new(42).fork().seed());
        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_context_stream_is_stable_and_separate() {
        let rng = GameRng::new(42);
        assert_eq!(draw(&mut rng.for_context("deck")), draw(&mut rng.for_context("deck")));
        assert_ne!(draw(&mut rng.for_context("deck")), draw(&mut rng.for_context("bot")));
    }

    #[test]
    fn test_leap_day_seed() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let after = leap.succ_opt().unwrap();
        assert_eq!(GameRng::for_date(leap).seed(), 20_240_229);
        assert_eq!(GameRng::for_date(after).seed(), 20_240_301);
    }

    #[test]
    fn test_choose_from_empty() {
        let mut rng = GameRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn test_sample_is_distinct_and_capped() {
        let mut rng = GameRng::new(7);

        let mut picked = rng.sample_indices(20, 8);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 8);
        assert!(picked.iter().all(|&i| i < 20));

        assert_eq!(rng.sample_indices(3, 8).len(), 3);
    }
}
