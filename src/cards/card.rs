//! A card and its reveal lifecycle.
//!
//! ```text
//! Hidden --begin_reveal--> Revealing --progress hits 1--> Revealed
//! Revealed --mark_matched--> Matched (terminal)
//! Revealed --begin_hide--> Hiding --progress hits 0--> Hidden
//! ```
//!
//! Animations are plain state: `progress` moves between 0 and 1 as the
//! round calls `advance`. Requests that don't fit the current state are
//! refused and return `false`, which is how clicks on animating or matched
//! cards become no-ops.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, FaceId, PairKey};
use crate::layout::Rect;

/// Lifecycle state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down, can be selected.
    #[default]
    Hidden,
    /// Turning face up; progress rising from 0 to 1.
    Revealing,
    /// Face up, waiting for the resolver.
    Revealed,
    /// Part of a found pair. Never leaves this state.
    Matched,
    /// Turning face down after a mismatch; progress falling from 1 to 0.
    Hiding,
}

impl CardState {
    /// Is an animation running?
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Revealing | Self::Hiding)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    identity: PairKey,
    face: FaceId,
    rect: Rect,
    state: CardState,
    progress: f32,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, identity: PairKey, face: FaceId, rect: Rect) -> Self {
        Self {
            id,
            identity,
            face,
            rect,
            state: CardState::Hidden,
            progress: 0.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The key this card shares with its partner.
    #[must_use]
    pub fn identity(&self) -> PairKey {
        self.identity
    }

    #[must_use]
    pub fn face(&self) -> FaceId {
        self.face
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Reveal progress in `[0, 1]`: 0 is fully face down, 1 fully face up.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Start turning face up. Only a `Hidden` card can.
    pub fn begin_reveal(&mut self) -> bool {
        if self.state != CardState::Hidden {
            return false;
        }
        self.state = CardState::Revealing;
        self.progress = 0.0;
        true
    }

    /// Start turning face down. Only a `Revealed` card can.
    pub fn begin_hide(&mut self) -> bool {
        if self.state != CardState::Revealed {
            return false;
        }
        self.state = CardState::Hiding;
        self.progress = 1.0;
        true
    }

    /// Lock the card as part of a found pair.
    ///
    /// Allowed from `Revealed` (normal match) and `Hidden` (bomb power-up).
    pub fn mark_matched(&mut self) -> bool {
        if !matches!(self.state, CardState::Revealed | CardState::Hidden) {
            return false;
        }
        self.state = CardState::Matched;
        self.progress = 1.0;
        true
    }

    /// Move a running animation forward by `amount` progress units.
    ///
    /// Returns the state the card settled in when the animation finished
    /// during this call (`Revealed` or `Hidden`), `None` otherwise.
    pub fn advance(&mut self, amount: f32) -> Option<CardState> {
        match self.state {
            CardState::Revealing => {
                self.progress = (self.progress + amount).min(1.0);
                if self.progress >= 1.0 {
                    self.state = CardState::Revealed;
                    return Some(CardState::Revealed);
                }
                None
            }
            CardState::Hiding => {
                self.progress = (self.progress - amount).max(0.0);
                if self.progress <= 0.0 {
                    self.state = CardState::Hidden;
                    return Some(CardState::Hidden);
                }
                None
            }
            _ => None,
        }
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(CardId(0), PairKey(1), FaceId(5), Rect::new(0.0, 0.0, 50.0, 70.0))
    }

    #[test]
    fn test_new_card_is_hidden() {
        let c = card();
        assert_eq!(c.state(), CardState::Hidden);
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.identity(), PairKey(1));
        assert_eq!(c.face(), FaceId(5));
    }

    #[test]
    fn test_full_reveal_cycle() {
        let mut c = card();
        assert!(c.begin_reveal());
        assert_eq!(c.state(), CardState::Revealing);

        assert_eq!(c.advance(0.4), None);
        assert!((c.progress() - 0.4).abs() < 1e-6);
        assert_eq!(c.advance(0.7), Some(CardState::Revealed));
        assert_eq!(c.progress(), 1.0);

        assert!(c.begin_hide());
        assert_eq!(c.advance(0.5), None);
        assert_eq!(c.advance(0.5), Some(CardState::Hidden));
        assert!(c.is_hidden());
    }

    #[test]
    fn test_no_retrigger_mid_animation() {
        let mut c = card();
        c.begin_reveal();
        c.advance(0.3);

        assert!(!c.begin_reveal());
        assert!(!c.begin_hide());
        assert!(!c.mark_matched());
        assert_eq!(c.state(), CardState::Revealing);
    }

    #[test]
    fn test_matched_is_terminal() {
        let mut c = card();
        c.begin_reveal();
        c.advance(1.0);
        assert!(c.mark_matched());

        assert!(!c.begin_reveal());
        assert!(!c.begin_hide());
        assert_eq!(c.advance(1.0), None);
        assert_eq!(c.state(), CardState::Matched);
    }

    #[test]
    fn test_hidden_can_be_matched_directly() {
        let mut c = card();
        assert!(c.mark_matched());
        assert!(c.is_matched());
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn test_advance_idle_is_noop() {
        let mut c = card();
        assert_eq!(c.advance(1.0), None);
        assert_eq!(c.progress(), 0.0);
    }
}
