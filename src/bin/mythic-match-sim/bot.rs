//! A memory bot: remembers faces it has seen, with some forgetting.

use rustc_hash::FxHashMap;

use mythic_match::cards::CardState;
use mythic_match::core::{Action, CardId, GameRng, PairKey};
use mythic_match::round::Round;

/// Plays a round by remembering revealed cards.
///
/// `forgetfulness` is the chance, per remembered card and per decision,
/// that the bot loses track of it. 0 plays perfectly from memory, 1 plays
/// at random.
#[derive(Debug)]
pub struct MemoryBot {
    memory: FxHashMap<CardId, PairKey>,
    forgetfulness: f64,
    rng: GameRng,
}

impl MemoryBot {
    pub fn new(forgetfulness: f64, rng: GameRng) -> Self {
        Self {
            memory: FxHashMap::default(),
            forgetfulness: forgetfulness.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Forget everything, e.g. before a new round.
    pub fn reset(&mut self) {
        self.memory.clear();
    }

    fn observe(&mut self, round: &Round) {
        for card in round.cards() {
            match card.state() {
                CardState::Revealed => {
                    self.memory.insert(card.id(), card.identity());
                }
                CardState::Matched => {
                    self.memory.remove(&card.id());
                }
                _ => {}
            }
        }
    }

    fn forget_some(&mut self) {
        if self.forgetfulness <= 0.0 {
            return;
        }
        let threshold = (self.forgetfulness * 1000.0) as usize;
        let mut known: Vec<CardId> = self.memory.keys().copied().collect();
        known.sort_unstable();
        for id in known {
            if self.rng.gen_range_usize(0..1000) < threshold {
                self.memory.remove(&id);
            }
        }
    }

    fn is_hidden(round: &Round, id: CardId) -> bool {
        round.card(id).is_some_and(|c| c.state() == CardState::Hidden)
    }

    /// Next card to pick, if the bot wants to act this tick.
    pub fn decide(&mut self, round: &Round) -> Option<Action> {
        self.observe(round);

        let animating = round.cards().iter().any(|c| c.state() == CardState::Revealing);
        if animating || !round.can_select() {
            return None;
        }
        self.forget_some();

        // Partner of a card that is already face up.
        if let Some(&open) = round.pending().first() {
            let key = round.card(open).map(|c| c.identity());
            let partner = self
                .known_hidden(round)
                .into_iter()
                .find(|(id, k)| *id != open && Some(*k) == key);
            if let Some((id, _)) = partner {
                return Some(Action::Select(id));
            }
            return self.unexplored(round).map(Action::Select);
        }

        // A pair known in full.
        let known = self.known_hidden(round);
        for (i, (a, key)) in known.iter().enumerate() {
            if known[i + 1..].iter().any(|(_, k)| k == key) {
                return Some(Action::Select(*a));
            }
        }

        self.unexplored(round).map(Action::Select)
    }

    fn known_hidden(&self, round: &Round) -> Vec<(CardId, PairKey)> {
        let mut known: Vec<(CardId, PairKey)> = self
            .memory
            .iter()
            .filter(|(id, _)| Self::is_hidden(round, **id))
            .map(|(id, key)| (*id, *key))
            .collect();
        known.sort_unstable();
        known
    }

    /// A random hidden card, preferring ones never seen.
    fn unexplored(&mut self, round: &Round) -> Option<CardId> {
        let hidden: Vec<CardId> = round
            .cards()
            .iter()
            .filter(|c| c.state() == CardState::Hidden)
            .map(|c| c.id())
            .collect();
        let fresh: Vec<CardId> = hidden
            .iter()
            .copied()
            .filter(|id| !self.memory.contains_key(id))
            .collect();

        let pool = if fresh.is_empty() { &hidden } else { &fresh };
        self.rng.choose(pool).copied()
    }
}
