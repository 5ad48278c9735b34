//! Stateless view of a round for drawing.
//!
//! Nothing here mutates the round. A flip is drawn as a horizontal squash:
//! the visible side shrinks to zero width at progress 0.5, swaps, and grows
//! back.
//!
//! ```
//! use mythic_match::cards::Deck;
//! use mythic_match::core::{GameConfig, GameRng};
//! use mythic_match::render::{board_view, Side};
//! use mythic_match::round::{Mode, Round, RoundSpec};
//!
//! let round = Round::with_deck(
//!     RoundSpec::from_pairs(2, Mode::Single),
//!     &GameConfig::default(),
//!     Deck::from_identities(&[0, 1, 1, 0]),
//!     GameRng::new(1),
//! );
//! let view = board_view(&round);
//! assert_eq!(view.len(), 4);
//! assert!(view.iter().all(|c| c.side == Side::Back && c.scale_x == 1.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardState};
use crate::core::{CardId, FaceId, PlayerId};
use crate::layout::Rect;
use crate::round::{Mode, Round};

/// Which side of a card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Back,
    Front,
}

/// How to draw one card this frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub rect: Rect,
    pub side: Side,
    pub face: FaceId,
    /// Horizontal scale in `[0, 1]`, around the rect's centre.
    pub scale_x: f32,
    /// Hovered and selectable.
    pub highlighted: bool,
    pub matched: bool,
}

/// Side and horizontal scale for a reveal progress value.
///
/// ```
/// use mythic_match::render::{flip_transform, Side};
///
/// assert_eq!(flip_transform(0.0), (Side::Back, 1.0));
/// assert_eq!(flip_transform(0.25), (Side::Back, 0.5));
/// assert_eq!(flip_transform(0.75), (Side::Front, 0.5));
/// assert_eq!(flip_transform(1.0), (Side::Front, 1.0));
/// ```
#[must_use]
pub fn flip_transform(progress: f32) -> (Side, f32) {
    let p = progress.clamp(0.0, 1.0);
    if p < 0.5 {
        (Side::Back, 1.0 - 2.0 * p)
    } else {
        (Side::Front, 2.0 * p - 1.0)
    }
}

fn card_view(card: &Card, hovered: Option<CardId>) -> CardView {
    let (side, scale_x) = match card.state() {
        CardState::Hidden => (Side::Back, 1.0),
        CardState::Revealed | CardState::Matched => (Side::Front, 1.0),
        CardState::Revealing | CardState::Hiding => flip_transform(card.progress()),
    };
    CardView {
        id: card.id(),
        rect: card.rect(),
        side,
        face: card.face(),
        scale_x,
        highlighted: hovered == Some(card.id()) && card.is_hidden(),
        matched: card.is_matched(),
    }
}

/// One view per card, in card order.
#[must_use]
pub fn board_view(round: &Round) -> Vec<CardView> {
    round
        .cards()
        .iter()
        .map(|card| card_view(card, round.hovered()))
        .collect()
}

/// Numbers for the heads-up display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    /// Whole scored seconds.
    pub elapsed_secs: u32,
    /// Whole seconds left on a timed round.
    pub remaining_secs: Option<u32>,
    pub moves: u32,
    pub matched_pairs: u32,
    pub pair_count: usize,
    pub level: Option<u32>,
    pub paused: bool,
    pub frozen: bool,
    /// Two-player rounds only.
    pub turn: Option<PlayerId>,
    pub player_pairs: Vec<u32>,
}

/// HUD data for the current frame.
#[must_use]
pub fn hud(round: &Round) -> Hud {
    let two_player = round.mode() == Mode::TwoPlayer;
    Hud {
        score: round.score(),
        elapsed_secs: round.elapsed().floor() as u32,
        remaining_secs: round.remaining().map(|r| r.floor() as u32),
        moves: round.moves(),
        matched_pairs: round.matched_pairs(),
        pair_count: round.pair_count(),
        level: round.spec().level,
        paused: round.is_paused(),
        frozen: round.is_frozen(),
        turn: two_player.then(|| round.current_player()),
        player_pairs: round.player_pairs().iter().map(|(_, &n)| n).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::core::{Action, GameConfig, GameRng};
    use crate::round::RoundSpec;

    fn round(mode: Mode) -> Round {
        Round::with_deck(
            RoundSpec::from_pairs(2, mode),
            &GameConfig::default(),
            Deck::from_identities(&[0, 1, 1, 0]),
            GameRng::new(1),
        )
    }

    #[test]
    fn test_revealing_card_squashes() {
        let mut r = round(Mode::Single);
        r.tick(0.0, &[Action::Select(CardId(0))]);
        // flip_speed 6: 1/24 s is a quarter turn
        r.tick(1.0 / 24.0, &[]);

        let view = board_view(&r);
        assert_eq!(view[0].side, Side::Back);
        assert!((view[0].scale_x - 0.5).abs() < 1e-3);
        assert_eq!(view[1].scale_x, 1.0);
    }

    #[test]
    fn test_highlight_follows_hover() {
        let mut r = round(Mode::Single);
        let p = r.cards()[3].rect().center();
        r.tick(0.0, &[Action::PointerMoved(p)]);

        let view = board_view(&r);
        assert!(view[3].highlighted);
        assert_eq!(view.iter().filter(|c| c.highlighted).count(), 1);
    }

    #[test]
    fn test_hud_single_and_two_player() {
        let single = hud(&round(Mode::Single));
        assert_eq!(single.score, 1000);
        assert_eq!(single.turn, None);
        assert_eq!(single.remaining_secs, None);
        assert_eq!(single.pair_count, 2);

        let duel = hud(&round(Mode::TwoPlayer));
        assert_eq!(duel.turn, Some(PlayerId::new(0)));
        assert_eq!(duel.player_pairs, vec![0, 0]);
    }
}
