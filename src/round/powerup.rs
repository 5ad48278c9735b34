//! Power-up inventory and the board mutations behind shuffle and bomb.
//!
//! Freeze has no board effect; the round controller just stops the scored
//! clock while its timer runs.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardState};
use crate::core::{CardId, GameRng, PairKey, PowerupKind};

/// Remaining uses per power-up kind.
///
/// Serialises as `{"shuffle": n, "bomb": n, "freeze": n}`, which is the
/// shape stored in the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerupWallet {
    pub shuffle: u32,
    pub bomb: u32,
    pub freeze: u32,
}

impl Default for PowerupWallet {
    fn default() -> Self {
        Self::uniform(1)
    }
}

impl PowerupWallet {
    /// A wallet with `count` of every kind.
    #[must_use]
    pub const fn uniform(count: u32) -> Self {
        Self {
            shuffle: count,
            bomb: count,
            freeze: count,
        }
    }

    /// An empty wallet.
    #[must_use]
    pub const fn empty() -> Self {
        Self::uniform(0)
    }

    #[must_use]
    pub fn get(&self, kind: PowerupKind) -> u32 {
        match kind {
            PowerupKind::Shuffle => self.shuffle,
            PowerupKind::Bomb => self.bomb,
            PowerupKind::Freeze => self.freeze,
        }
    }

    fn slot(&mut self, kind: PowerupKind) -> &mut u32 {
        match kind {
            PowerupKind::Shuffle => &mut self.shuffle,
            PowerupKind::Bomb => &mut self.bomb,
            PowerupKind::Freeze => &mut self.freeze,
        }
    }

    /// Take one use. Returns the count left, or `None` if there was none.
    ///
    /// ```
    /// use mythic_match::core::PowerupKind;
    /// use mythic_match::round::PowerupWallet;
    ///
    /// let mut wallet = PowerupWallet::uniform(1);
    /// assert_eq!(wallet.try_spend(PowerupKind::Bomb), Some(0));
    /// assert_eq!(wallet.try_spend(PowerupKind::Bomb), None);
    /// ```
    pub fn try_spend(&mut self, kind: PowerupKind) -> Option<u32> {
        let slot = self.slot(kind);
        if *slot == 0 {
            return None;
        }
        *slot -= 1;
        Some(*slot)
    }

    /// Add `amount` uses of one kind.
    pub fn grant(&mut self, kind: PowerupKind, amount: u32) {
        let slot = self.slot(kind);
        *slot = slot.saturating_add(amount);
    }

    /// Add `amount` uses of every kind.
    pub fn grant_all(&mut self, amount: u32) {
        for kind in PowerupKind::ALL {
            self.grant(kind, amount);
        }
    }
}

/// Permute the screen rectangles of every unmatched card.
///
/// Card ids and identities stay put; only where each card is drawn changes.
/// Returns how many cards took part.
pub fn shuffle_positions(cards: &mut [Card], rng: &mut GameRng) -> usize {
    let movable: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_matched())
        .map(|(i, _)| i)
        .collect();

    let mut rects: Vec<_> = movable.iter().map(|&i| cards[i].rect()).collect();
    rng.shuffle(&mut rects);

    for (&i, rect) in movable.iter().zip(rects) {
        cards[i].set_rect(rect);
    }
    movable.len()
}

/// Pick a random pair whose two cards are both face down.
#[must_use]
pub fn pick_hidden_pair(cards: &[Card], rng: &mut GameRng) -> Option<(CardId, CardId)> {
    let mut halves: rustc_hash::FxHashMap<PairKey, Vec<CardId>> = rustc_hash::FxHashMap::default();
    for card in cards.iter().filter(|c| c.state() == CardState::Hidden) {
        halves.entry(card.identity()).or_default().push(card.id());
    }

    let mut pairs: Vec<(CardId, CardId)> = halves
        .into_values()
        .filter(|ids| ids.len() == 2)
        .map(|ids| (ids[0], ids[1]))
        .collect();
    // Map iteration order is not part of the seed; sort so picks replay.
    pairs.sort_unstable();

    rng.choose(&pairs).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FaceId;
    use crate::layout::Rect;

    fn board(keys: &[u32]) -> Vec<Card> {
        keys.iter()
            .enumerate()
            .map(|(i, &k)| {
                Card::new(
                    CardId(i as u16),
                    PairKey(k),
                    FaceId(k),
                    Rect::new(i as f32 * 10.0, 0.0, 8.0, 8.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_default_wallet_has_one_each() {
        let wallet = PowerupWallet::default();
        for kind in PowerupKind::ALL {
            assert_eq!(wallet.get(kind), 1);
        }
    }

    #[test]
    fn test_grant_and_spend() {
        let mut wallet = PowerupWallet::empty();
        assert_eq!(wallet.try_spend(PowerupKind::Freeze), None);

        wallet.grant(PowerupKind::Freeze, 2);
        wallet.grant_all(1);
        assert_eq!(wallet.get(PowerupKind::Freeze), 3);
        assert_eq!(wallet.get(PowerupKind::Shuffle), 1);
        assert_eq!(wallet.try_spend(PowerupKind::Freeze), Some(2));
    }

    #[test]
    fn test_wallet_json_shape() {
        let json = serde_json::to_value(PowerupWallet::uniform(2)).unwrap();
        assert_eq!(json, serde_json::json!({"shuffle": 2, "bomb": 2, "freeze": 2}));

        let partial: PowerupWallet = serde_json::from_str(r#"{"bomb": 5}"#).unwrap();
        assert_eq!(partial.bomb, 5);
        assert_eq!(partial.shuffle, 1);
    }

    #[test]
    fn test_shuffle_keeps_matched_cards_in_place() {
        let mut cards = board(&[0, 1, 1, 0, 2, 2]);
        cards[0].mark_matched();
        cards[3].mark_matched();
        let before: Vec<_> = cards.iter().map(|c| c.rect()).collect();

        let moved = shuffle_positions(&mut cards, &mut GameRng::new(5));
        assert_eq!(moved, 4);
        assert_eq!(cards[0].rect(), before[0]);
        assert_eq!(cards[3].rect(), before[3]);

        let mut after: Vec<_> = cards.iter().map(|c| c.rect().x as i32).collect();
        after.sort_unstable();
        assert_eq!(after, vec![0, 10, 20, 30, 40, 50]);

        let identities: Vec<_> = cards.iter().map(|c| c.identity().raw()).collect();
        assert_eq!(identities, vec![0, 1, 1, 0, 2, 2]);
    }

    #[test]
    fn test_pick_hidden_pair_skips_revealed() {
        let mut cards = board(&[0, 1, 1, 0]);
        cards[1].begin_reveal();

        let pair = pick_hidden_pair(&cards, &mut GameRng::new(1));
        assert_eq!(pair, Some((CardId(0), CardId(3))));
    }

    #[test]
    fn test_pick_hidden_pair_none_left() {
        let mut cards = board(&[0, 0]);
        cards[0].begin_reveal();
        assert_eq!(pick_hidden_pair(&cards, &mut GameRng::new(1)), None);
    }
}
