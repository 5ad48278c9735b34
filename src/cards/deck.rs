//! Deck construction.
//!
//! A deck is the dealing order of a round: `2 * pair_count` entries, each
//! pair key in `0..pair_count` appearing exactly twice.
//!
//! ## Face policy
//!
//! Every pair gets a distinct face, chosen as a random subset of the face
//! pool without repetition. When the pool holds fewer faces than pairs,
//! the missing faces get ids past the end of the pool (`pool_len`,
//! `pool_len + 1`, ...) which the asset layer renders as generated
//! placeholders. Faces are never repeated within a round.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{FaceId, GameRng, PairKey};

/// Most pairs a round can hold. Card ids are `u16`, so every card of the
/// largest deck still gets its own id.
pub const MAX_PAIRS: usize = u16::MAX as usize / 2;

/// One dealt card: which pair it belongs to and the face it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckEntry {
    pub identity: PairKey,
    pub face: FaceId,
}

/// Dealing order for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    entries: Vec<DeckEntry>,
}

impl Deck {
    /// Build a deck in a fixed order. Pair `k` shows face `k`.
    ///
    /// Mostly for tests and replays:
    ///
    /// ```
    /// use mythic_match::cards::Deck;
    ///
    /// let deck = Deck::from_identities(&[0, 1, 1, 0]);
    /// assert_eq!(deck.len(), 4);
    /// assert_eq!(deck.pair_count(), 2);
    /// ```
    #[must_use]
    pub fn from_identities(identities: &[u32]) -> Self {
        let entries = identities
            .iter()
            .map(|&key| DeckEntry {
                identity: PairKey(key),
                face: FaceId(key),
            })
            .collect();
        Self { entries }
    }

    /// Build a deck from explicit entries.
    #[must_use]
    pub fn from_entries(entries: Vec<DeckEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Pair keys in dealing order.
    pub fn identities(&self) -> impl Iterator<Item = PairKey> + '_ {
        self.entries.iter().map(|e| e.identity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.entries.len() / 2
    }

    /// Does every pair key occur exactly twice?
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut counts = rustc_hash::FxHashMap::default();
        for entry in &self.entries {
            *counts.entry(entry.identity).or_insert(0u32) += 1;
        }
        counts.values().all(|&c| c == 2)
    }
}

/// Deal a shuffled deck of `pair_count` pairs using faces from a pool of
/// `pool_len` pictures.
///
/// A `pair_count` of zero is raised to one, and one above [`MAX_PAIRS`] is
/// lowered to it.
///
/// ```
/// use mythic_match::cards::build_deck;
/// use mythic_match::core::GameRng;
///
/// let mut rng = GameRng::new(7);
/// let deck = build_deck(8, 20, &mut rng);
/// assert_eq!(deck.len(), 16);
/// assert!(deck.is_well_formed());
/// ```
pub fn build_deck(pair_count: usize, pool_len: usize, rng: &mut GameRng) -> Deck {
    let pair_count = if pair_count == 0 {
        warn!("pair count 0 requested, using 1");
        1
    } else if pair_count > MAX_PAIRS {
        warn!(requested = pair_count, max = MAX_PAIRS, "pair count too large, capping");
        MAX_PAIRS
    } else {
        pair_count
    };

    let mut faces: Vec<FaceId> = rng
        .sample_indices(pool_len, pair_count)
        .into_iter()
        .map(|i| FaceId(i as u32))
        .collect();

    if faces.len() < pair_count {
        warn!(
            pool = pool_len,
            pairs = pair_count,
            "face pool too small, padding with generated faces"
        );
        faces.extend((pool_len..pool_len + (pair_count - faces.len())).map(|i| FaceId(i as u32)));
    }

    let mut entries: Vec<DeckEntry> = faces
        .iter()
        .enumerate()
        .flat_map(|(key, &face)| {
            let entry = DeckEntry {
                identity: PairKey(key as u32),
                face,
            };
            [entry, entry]
        })
        .collect();

    rng.shuffle(&mut entries);
    debug!(pairs = pair_count, cards = entries.len(), "deck built");

    Deck { entries }
}
