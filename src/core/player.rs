//! Seats at the board.
//!
//! Single-player and daily rounds have one seat; two-player rounds have two
//! sharing one board. `PlayerId` is the 0-based seat, shown 1-based on the
//! HUD, and `PlayerMap` holds one value per seat (pairs found, mostly).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whose turn follows this seat's.
    ///
    /// ```
    /// use mythic_match::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, seats: usize) -> Self {
        Self(((self.index() + 1) % seats.max(1)) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", u16::from(self.0) + 1)
    }
}

/// One value per seat.
///
/// ```
/// use mythic_match::core::{PlayerId, PlayerMap};
///
/// let mut pairs: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// pairs[PlayerId::new(1)] += 1;
/// assert_eq!(pairs.leaders(), vec![PlayerId::new(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T: Clone> PlayerMap<T> {
    /// `seats` copies of `value`. The seat count is kept within 1..=255.
    #[must_use]
    pub fn with_value(seats: usize, value: T) -> Self {
        Self {
            seats: vec![value; seats.clamp(1, usize::from(u8::MAX))],
        }
    }
}

impl<T> PlayerMap<T> {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(seat, value)| (PlayerId(seat as u8), value))
    }
}

impl<T: Ord> PlayerMap<T> {
    /// Seats sharing the highest value. More than one means a tie.
    #[must_use]
    pub fn leaders(&self) -> Vec<PlayerId> {
        let Some(best) = self.seats.iter().max() else {
            return Vec::new();
        };
        self.iter()
            .filter(|(_, value)| *value == best)
            .map(|(player, _)| player)
            .collect()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(PlayerId::new(0).to_string(), "Player 1");
        assert_eq!(PlayerId::new(1).to_string(), "Player 2");
    }

    #[test]
    fn test_next_with_one_seat() {
        assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
        assert_eq!(PlayerId::new(0).next(0), PlayerId::new(0));
    }

    #[test]
    fn test_seat_count_clamped() {
        assert_eq!(PlayerMap::with_value(0, 0u32).player_count(), 1);
        assert_eq!(PlayerMap::with_value(1000, 0u32).player_count(), 255);
    }

    #[test]
    fn test_tie_has_every_leader() {
        let mut pairs: PlayerMap<u32> = PlayerMap::with_value(2, 0);
        assert_eq!(pairs.leaders(), vec![PlayerId::new(0), PlayerId::new(1)]);

        pairs[PlayerId::new(0)] = 3;
        pairs[PlayerId::new(1)] = 3;
        assert_eq!(pairs.leaders().len(), 2);
        assert_eq!(pairs.iter().map(|(_, &n)| n).sum::<u32>(), 6);
    }
}
