//! Match resolution.
//!
//! The resolver owns the set of face-up cards waiting to be compared
//! (never more than two) and the counters that only it changes.
//!
//! A card joins the pending set when its reveal animation completes. When
//! the second one joins, a move is counted and the mismatch deadline is
//! fixed at `now + delay`, `now` being the round clock at that moment.
//! `resolve` is then called once per tick:
//!
//! - equal identities: both cards become `Matched` immediately
//! - different identities: nothing until the clock reaches the deadline,
//!   then both start hiding
//!
//! The deadline is a plain timestamp compared every tick, so input keeps
//! flowing while a mismatched pair is on display.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::CardId;

/// What `Resolver::resolve` did this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Fewer than two cards pending.
    Idle,
    /// The pending pair matched and is now locked.
    Matched { first: CardId, second: CardId },
    /// A mismatched pair is still on display.
    Waiting,
    /// The mismatch delay ran out and both cards started hiding.
    FlippedBack { first: CardId, second: CardId },
}

/// Pending-pair bookkeeping for one round.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    pending: SmallVec<[CardId; 2]>,
    deadline: Option<f32>,
    moves: u32,
    matched_pairs: u32,
}

impl Resolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards face up and waiting for comparison.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// Resolution attempts so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Round-clock time at which a mismatched pair flips back.
    #[must_use]
    pub fn deadline(&self) -> Option<f32> {
        self.deadline
    }

    /// A card finished revealing at round-clock time `now`.
    ///
    /// Ignored if two cards are already pending; the round's selection gate
    /// keeps that from happening.
    pub fn card_revealed(&mut self, card: CardId, now: f32, delay: f32) {
        if self.pending.len() >= 2 || self.pending.contains(&card) {
            return;
        }
        self.pending.push(card);
        if self.pending.len() == 2 {
            self.moves += 1;
            self.deadline = Some(now + delay);
        }
    }

    /// A pair was matched outside the normal flow (bomb).
    pub fn record_forced_match(&mut self) {
        self.matched_pairs += 1;
    }

    /// Compare the pending pair and apply the outcome to `cards`.
    pub fn resolve(&mut self, cards: &mut [Card], now: f32) -> Resolution {
        let (first, second) = match self.pending.as_slice() {
            [a, b] => (*a, *b),
            _ => return Resolution::Idle,
        };

        if cards[first.index()].identity() == cards[second.index()].identity() {
            cards[first.index()].mark_matched();
            cards[second.index()].mark_matched();
            self.matched_pairs += 1;
            self.clear();
            return Resolution::Matched { first, second };
        }

        match self.deadline {
            Some(deadline) if now < deadline => Resolution::Waiting,
            _ => {
                cards[first.index()].begin_hide();
                cards[second.index()].begin_hide();
                self.clear();
                Resolution::FlippedBack { first, second }
            }
        }
    }

    fn clear(&mut self) {
        self.pending.clear();
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardState;
    use crate::core::{FaceId, PairKey};
    use crate::layout::Rect;

    fn revealed_board(keys: &[u32]) -> Vec<Card> {
        keys.iter()
            .enumerate()
            .map(|(i, &k)| {
                let mut card = Card::new(CardId(i as u16), PairKey(k), FaceId(k), Rect::default());
                card.begin_reveal();
                card.advance(1.0);
                card
            })
            .collect()
    }

    #[test]
    fn test_single_pending_is_idle() {
        let mut cards = revealed_board(&[0, 0]);
        let mut resolver = Resolver::new();
        resolver.card_revealed(CardId(0), 0.0, 0.5);

        assert_eq!(resolver.resolve(&mut cards, 10.0), Resolution::Idle);
        assert_eq!(resolver.moves(), 0);
    }

    #[test]
    fn test_match_is_immediate() {
        let mut cards = revealed_board(&[0, 0]);
        let mut resolver = Resolver::new();
        resolver.card_revealed(CardId(0), 0.0, 0.5);
        resolver.card_revealed(CardId(1), 0.1, 0.5);

        let result = resolver.resolve(&mut cards, 0.1);
        assert_eq!(
            result,
            Resolution::Matched {
                first: CardId(0),
                second: CardId(1)
            }
        );
        assert_eq!(resolver.moves(), 1);
        assert_eq!(resolver.matched_pairs(), 1);
        assert!(resolver.pending().is_empty());
        assert!(cards.iter().all(Card::is_matched));
    }

    #[test]
    fn test_mismatch_waits_for_deadline() {
        let mut cards = revealed_board(&[0, 1]);
        let mut resolver = Resolver::new();
        resolver.card_revealed(CardId(0), 0.0, 0.5);
        resolver.card_revealed(CardId(1), 1.0, 0.5);
        assert_eq!(resolver.deadline(), Some(1.5));

        assert_eq!(resolver.resolve(&mut cards, 1.2), Resolution::Waiting);
        assert_eq!(cards[0].state(), CardState::Revealed);

        let result = resolver.resolve(&mut cards, 1.5);
        assert!(matches!(result, Resolution::FlippedBack { .. }));
        assert_eq!(cards[0].state(), CardState::Hiding);
        assert_eq!(cards[1].state(), CardState::Hiding);
        assert_eq!(resolver.moves(), 1);
        assert_eq!(resolver.matched_pairs(), 0);
    }

    #[test]
    fn test_third_card_rejected() {
        let mut resolver = Resolver::new();
        resolver.card_revealed(CardId(0), 0.0, 0.5);
        resolver.card_revealed(CardId(1), 0.0, 0.5);
        resolver.card_revealed(CardId(2), 0.0, 0.5);

        assert_eq!(resolver.pending(), &[CardId(0), CardId(1)]);
        assert_eq!(resolver.moves(), 1);
    }

    #[test]
    fn test_duplicate_reveal_ignored() {
        let mut resolver = Resolver::new();
        resolver.card_revealed(CardId(4), 0.0, 0.5);
        resolver.card_revealed(CardId(4), 0.0, 0.5);
        assert_eq!(resolver.pending(), &[CardId(4)]);
    }
}
