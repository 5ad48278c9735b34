//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Card`: one card on the board with its reveal state machine
//! - `CardState`: `Hidden -> Revealing -> Revealed -> (Matched | Hiding -> Hidden)`
//! - `Deck`: shuffled sequence of (pair key, face) entries, two per pair
//!
//! Cards own no rendering data beyond their rectangle and reveal progress;
//! front ends draw them from `render::board_view`.

pub mod card;
pub mod deck;

pub use card::{Card, CardState};
pub use deck::{build_deck, Deck, DeckEntry, MAX_PAIRS};
