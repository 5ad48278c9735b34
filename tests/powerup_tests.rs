//! Power-up tests: shuffle, bomb and freeze inside a running round.

use mythic_match::cards::{CardState, Deck};
use mythic_match::core::{Action, CardId, GameConfig, GameRng, PowerupKind};
use mythic_match::events::{GameEvent, MatchSource};
use mythic_match::layout::Rect;
use mythic_match::round::{Mode, PowerupWallet, Round, RoundSpec};
use mythic_match::rules::RoundStatus;

const DT: f32 = 1.0 / 60.0;

fn round(keys: &[u32], wallet: PowerupWallet) -> Round {
    let spec = RoundSpec::from_pairs(keys.len() / 2, Mode::Single);
    Round::with_deck(spec, &GameConfig::default(), Deck::from_identities(keys), GameRng::new(77))
        .with_powerups(wallet)
}

fn run(round: &mut Round, seconds: f32) {
    let ticks = (seconds / DT).round() as usize;
    for _ in 0..ticks {
        round.tick(DT, &[]);
    }
}

fn sorted_rects(round: &Round) -> Vec<Rect> {
    let mut rects: Vec<Rect> = round.cards().iter().map(|c| c.rect()).collect();
    rects.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    rects
}

// === Bomb ===

/// With none left, a bomb changes nothing.
#[test]
fn test_bomb_with_empty_wallet() {
    let mut r = round(&[0, 1, 1, 0], PowerupWallet::empty());
    r.tick(DT, &[Action::UsePowerup(PowerupKind::Bomb)]);

    assert_eq!(r.matched_pairs(), 0);
    assert!(r.cards().iter().all(|c| c.state() == CardState::Hidden));
    assert!(r.take_events().is_empty());
}

/// A bomb matches one hidden pair and spends one charge.
#[test]
fn test_bomb_matches_a_pair() {
    let mut r = round(&[0, 1, 2, 2, 1, 0], PowerupWallet::uniform(1));
    r.tick(0.0, &[Action::UsePowerup(PowerupKind::Bomb)]);

    assert_eq!(r.matched_pairs(), 1);
    assert_eq!(r.moves(), 0);
    assert_eq!(r.powerups().get(PowerupKind::Bomb), 0);

    let matched: Vec<_> = r.cards().iter().filter(|c| c.state() == CardState::Matched).collect();
    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].identity(), matched[1].identity());

    let events = r.take_events();
    assert!(matches!(
        events.as_slice(),
        [
            GameEvent::Matched { source: MatchSource::Bomb, .. },
            GameEvent::PowerupUsed { kind: PowerupKind::Bomb, remaining: 0 },
        ]
    ));

    // Bombed faces stay out of the collection.
    assert!(r.report().matched_faces.is_empty());
}

/// A bomb on the last hidden pair wins the round.
#[test]
fn test_bomb_can_win() {
    let mut r = round(&[0, 0], PowerupWallet::uniform(1));
    assert_eq!(r.tick(0.0, &[Action::UsePowerup(PowerupKind::Bomb)]), RoundStatus::Won);
}

/// No hidden pair: the bomb is refused and kept.
#[test]
fn test_bomb_without_hidden_pair() {
    let mut r = round(&[0, 0, 1, 1], PowerupWallet::uniform(1));
    r.tick(0.0, &[
        Action::Select(CardId(0)),
        Action::Select(CardId(2)),
    ]);
    r.take_events();

    // Cards 1 and 3 are hidden but not a pair.
    r.tick(0.0, &[Action::UsePowerup(PowerupKind::Bomb)]);
    assert_eq!(r.powerups().get(PowerupKind::Bomb), 1);
    assert_eq!(r.matched_pairs(), 0);
    assert!(r.take_events().is_empty());
}

// === Shuffle ===

/// Shuffle moves cards between board slots but keeps every identity.
#[test]
fn test_shuffle_keeps_identities() {
    let keys: Vec<u32> = (0..8).flat_map(|k| [k, k]).collect();
    let mut r = round(&keys, PowerupWallet::uniform(1));
    let before_rects = sorted_rects(&r);
    let identities: Vec<_> = r.cards().iter().map(|c| (c.id(), c.identity())).collect();

    r.tick(0.0, &[Action::UsePowerup(PowerupKind::Shuffle)]);

    let after: Vec<_> = r.cards().iter().map(|c| (c.id(), c.identity())).collect();
    assert_eq!(identities, after);
    assert_eq!(before_rects, sorted_rects(&r));
    assert_eq!(r.powerups().get(PowerupKind::Shuffle), 0);
    assert_eq!(
        r.take_events(),
        vec![GameEvent::PowerupUsed {
            kind: PowerupKind::Shuffle,
            remaining: 0
        }]
    );
}

/// Matched cards stay where they are.
#[test]
fn test_shuffle_skips_matched_cards() {
    let keys: Vec<u32> = (0..6).flat_map(|k| [k, k]).collect();
    let mut r = round(&keys, PowerupWallet::uniform(1));
    r.tick(0.0, &[Action::UsePowerup(PowerupKind::Bomb)]);

    let pinned: Vec<_> = r
        .cards()
        .iter()
        .filter(|c| c.state() == CardState::Matched)
        .map(|c| (c.id(), c.rect()))
        .collect();
    assert_eq!(pinned.len(), 2);

    r.tick(0.0, &[Action::UsePowerup(PowerupKind::Shuffle)]);
    for (id, rect) in pinned {
        assert_eq!(r.card(id).map(|c| c.rect()), Some(rect));
    }
}

// === Freeze ===

/// Freeze stops the scored clock but not the round clock.
#[test]
fn test_freeze_stops_scored_time() {
    let mut r = round(&[0, 1, 1, 0], PowerupWallet::uniform(1));
    r.tick(0.0, &[Action::UsePowerup(PowerupKind::Freeze)]);
    assert!(r.is_frozen());

    run(&mut r, 2.0);
    assert!(r.elapsed() < 1e-3);
    assert!(r.clock() > 1.9);

    run(&mut r, 10.0);
    assert!(!r.is_frozen());
    assert!((r.elapsed() - 2.0).abs() < 0.1);
}

/// A frozen timed round does not run out.
#[test]
fn test_freeze_holds_off_timeout() {
    let spec = RoundSpec::from_pairs(2, Mode::Single).with_time_limit(Some(5.0));
    let mut r = Round::with_deck(spec, &GameConfig::default(), Deck::from_identities(&[0, 1, 1, 0]), GameRng::new(3));
    r.tick(0.0, &[Action::UsePowerup(PowerupKind::Freeze)]);

    run(&mut r, 8.0);
    assert_eq!(r.status(), RoundStatus::Ongoing);
    assert_eq!(r.remaining(), Some(5.0));
}

/// A second freeze restarts the timer rather than adding to it.
#[test]
fn test_freeze_refreshes() {
    let config = GameConfig::default().with_freeze_duration(10.0);
    let spec = RoundSpec::from_pairs(2, Mode::Single);
    let mut r = Round::with_deck(spec, &config, Deck::from_identities(&[0, 1, 1, 0]), GameRng::new(3))
        .with_powerups(PowerupWallet::uniform(2));

    r.tick(0.0, &[Action::UsePowerup(PowerupKind::Freeze)]);
    run(&mut r, 4.0);
    r.tick(0.0, &[Action::UsePowerup(PowerupKind::Freeze)]);

    assert_eq!(r.freeze_remaining(), 10.0);
    assert_eq!(r.powerups().get(PowerupKind::Freeze), 0);
}

/// Power-ups do nothing while paused.
#[test]
fn test_powerups_ignored_while_paused() {
    let mut r = round(&[0, 1, 1, 0], PowerupWallet::uniform(1));
    r.tick(0.0, &[Action::TogglePause]);
    for kind in PowerupKind::ALL {
        r.tick(DT, &[Action::UsePowerup(kind)]);
    }
    assert_eq!(*r.powerups(), PowerupWallet::uniform(1));
    assert!(!r.is_frozen());
}
