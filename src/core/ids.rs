//! Identifier types.
//!
//! Three different numbers describe a card and they are easy to mix up, so
//! each gets its own newtype:
//!
//! - `CardId`: position of the card in the round's card list (stable for the
//!   whole round, even when a shuffle moves the card on screen)
//! - `PairKey`: the identity two cards must share to match, in `0..pair_count`
//! - `FaceId`: which face picture the pair shows (index into the face pool)
//!
//! ```
//! use mythic_match::core::{CardId, PairKey};
//!
//! let card = CardId::new(3);
//! assert_eq!(card.index(), 3);
//! assert_eq!(format!("{}", PairKey::new(7)), "Pair(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Index of a card within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Position in the round's card list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identity shared by exactly two cards of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey(pub u32);

impl PairKey {
    /// Create a pair key.
    #[must_use]
    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Face picture identifier.
///
/// Faces outside the loaded pool resolve to generated placeholders, so any
/// value is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_index() {
        assert_eq!(CardId::new(0).index(), 0);
        assert_eq!(CardId::new(63).index(), 63);
        assert!(CardId::new(1) < CardId::new(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(4)), "Card(4)");
        assert_eq!(format!("{}", PairKey(2)), "Pair(2)");
        assert_eq!(format!("{}", FaceId(9)), "Face(9)");
    }

    #[test]
    fn test_face_id_serializes_as_number() {
        let json = serde_json::to_string(&vec![FaceId(1), FaceId(12)]).unwrap();
        assert_eq!(json, "[1,12]");
        let back: Vec<FaceId> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![FaceId(1), FaceId(12)]);
    }
}
