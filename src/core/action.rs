//! Player actions fed into a round each tick.
//!
//! Front ends translate their raw input (mouse, keyboard) into `Action`s;
//! the round never sees device events. Actions are applied in order, before
//! the tick advances time.
//!
//! ```
//! use mythic_match::core::{Action, CardId, PowerupKind};
//! use mythic_match::layout::Point;
//!
//! let frame = vec![
//!     Action::Click(Point::new(120.0, 200.0)),
//!     Action::Select(CardId::new(3)),
//!     Action::UsePowerup(PowerupKind::Freeze),
//! ];
//! assert_eq!(frame.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use super::ids::CardId;
use crate::layout::Point;

/// Limited-use actions that change the board outside the normal flip rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerupKind {
    /// Permute the screen positions of every unmatched card.
    Shuffle,
    /// Match one random hidden pair outright.
    Bomb,
    /// Stop the round clock for a while.
    Freeze,
}

impl PowerupKind {
    /// All kinds, in display order.
    pub const ALL: [PowerupKind; 3] = [PowerupKind::Shuffle, PowerupKind::Bomb, PowerupKind::Freeze];

    /// Lowercase name used in saved files and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PowerupKind::Shuffle => "shuffle",
            PowerupKind::Bomb => "bomb",
            PowerupKind::Freeze => "freeze",
        }
    }
}

impl std::fmt::Display for PowerupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single player input, already decoded by the front end.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Pointer click at a board position; hit-tested against card rects.
    Click(Point),
    /// Select a card directly (keyboard cursor, bots, tests).
    Select(CardId),
    /// Pointer moved; drives hover highlighting.
    PointerMoved(Point),
    /// Reveal a random hidden card at a score cost.
    Hint,
    /// Spend one unit of a power-up.
    UsePowerup(PowerupKind),
    /// Pause or resume the round.
    TogglePause,
    /// Leave the round.
    Exit,
}
