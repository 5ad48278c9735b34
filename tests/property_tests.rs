//! Property tests for deck building, board layout and round invariants.

use proptest::prelude::*;

use mythic_match::cards::{build_deck, CardState, Deck};
use mythic_match::core::{Action, CardId, GameConfig, GameRng, LayoutConfig, PowerupKind, Viewport};
use mythic_match::layout::grid::grid_shape;
use mythic_match::layout::layout;
use mythic_match::round::{Mode, Round, RoundSpec};

fn action_strategy(card_count: u16) -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (0..card_count + 2).prop_map(|i| Action::Select(CardId(i))),
        1 => Just(Action::Hint),
        1 => Just(Action::TogglePause),
        1 => prop::sample::select(PowerupKind::ALL.to_vec()).prop_map(Action::UsePowerup),
    ]
}

proptest! {
    /// Every identity appears exactly twice, whatever the pool size.
    #[test]
    fn prop_deck_is_pairs(pairs in 0usize..40, pool in 0usize..40, seed in any::<u64>()) {
        let deck = build_deck(pairs, pool, &mut GameRng::new(seed));
        let expected = pairs.max(1);

        prop_assert_eq!(deck.len(), expected * 2);
        prop_assert_eq!(deck.pair_count(), expected);
        prop_assert!(deck.is_well_formed());

        let mut faces: Vec<u32> = deck.entries().iter().map(|e| e.face.raw()).collect();
        faces.sort_unstable();
        faces.dedup();
        prop_assert_eq!(faces.len(), expected);
    }

    /// Same seed, same deck.
    #[test]
    fn prop_deck_is_deterministic(pairs in 1usize..33, seed in any::<u64>()) {
        let a = build_deck(pairs, 40, &mut GameRng::new(seed));
        let b = build_deck(pairs, 40, &mut GameRng::new(seed));
        prop_assert_eq!(a, b);
    }

    /// The grid is the smallest square-ish shape that fits every card.
    #[test]
    fn prop_grid_shape(n in 1usize..500) {
        let (columns, rows) = grid_shape(n);
        let root = (n as f64).sqrt().ceil() as usize;

        prop_assert_eq!(columns, root);
        prop_assert!(columns * rows >= n);
        prop_assert!(columns * (rows - 1) < n);
    }

    /// One rectangle per card, none overlapping.
    #[test]
    fn prop_layout_positions(pairs in 1usize..33) {
        let n = pairs * 2;
        let board = layout(n, &Viewport::default(), &LayoutConfig::default());
        prop_assert_eq!(board.positions.len(), n);

        for (i, a) in board.positions.iter().enumerate() {
            for b in &board.positions[i + 1..] {
                let overlap = a.x + 1e-3 < b.right()
                    && b.x + 1e-3 < a.right()
                    && a.y + 1e-3 < b.bottom()
                    && b.y + 1e-3 < a.bottom();
                prop_assert!(!overlap);
            }
        }
    }

    /// Under any input, at most two cards are ever selected, counters only
    /// grow, and matched cards stay matched.
    #[test]
    fn prop_round_invariants(
        seed in any::<u64>(),
        steps in prop::collection::vec((action_strategy(12), 0u8..4), 1..300),
    ) {
        let mut keys: Vec<u32> = (0..6).flat_map(|k| [k, k]).collect();
        GameRng::new(seed).shuffle(&mut keys);

        let spec = RoundSpec::from_pairs(6, Mode::Single);
        let mut round = Round::with_deck(spec, &GameConfig::default(), Deck::from_identities(&keys), GameRng::new(seed));
        let mut moves = 0;
        let mut matched = 0;
        let mut settled: Vec<CardId> = Vec::new();

        for (action, frames) in steps {
            round.tick(f32::from(frames) / 60.0, &[action]);

            prop_assert!(round.pending().len() <= 2);
            prop_assert!(round.selection_count() <= 2);
            prop_assert!(round.moves() >= moves);
            prop_assert!(round.matched_pairs() >= matched);
            prop_assert!(round.matched_pairs() as usize <= round.pair_count());
            for id in &settled {
                prop_assert_eq!(round.card(*id).map(|c| c.state()), Some(CardState::Matched));
            }

            moves = round.moves();
            matched = round.matched_pairs();
            settled = round
                .cards()
                .iter()
                .filter(|c| c.state() == CardState::Matched)
                .map(|c| c.id())
                .collect();
            prop_assert_eq!(settled.len(), matched as usize * 2);
        }
    }
}
