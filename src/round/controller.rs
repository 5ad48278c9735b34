//! The round controller.
//!
//! A `Round` owns everything about one board: the cards, the resolver, the
//! clocks, the power-up wallet it was started with and its own RNG stream.
//! Front ends drive it with one call per frame:
//!
//! ```
//! use mythic_match::cards::Deck;
//! use mythic_match::core::{Action, CardId, GameConfig, GameRng};
//! use mythic_match::round::{Mode, Round, RoundSpec};
//! use mythic_match::rules::RoundStatus;
//!
//! let config = GameConfig::default();
//! let spec = RoundSpec::from_pairs(1, Mode::Single);
//! let deck = Deck::from_identities(&[0, 0]);
//! let mut round = Round::with_deck(spec, &config, deck, GameRng::new(1));
//!
//! let mut status = round.tick(0.0, &[Action::Select(CardId(0)), Action::Select(CardId(1))]);
//! for _ in 0..60 {
//!     status = round.tick(1.0 / 60.0, &[]);
//! }
//! assert_eq!(status, RoundStatus::Won);
//! ```
//!
//! ## Tick order
//!
//! 1. Actions, in order. `Exit` ends the round at once; while paused only
//!    `TogglePause`, `Exit` and pointer moves do anything.
//! 2. Clocks. The round clock drives animations and the mismatch timer;
//!    the scored clock additionally stops while a freeze is active.
//! 3. Card animations. Cards that finish revealing join the resolver.
//! 4. Resolution of the pending pair.
//! 5. Win, then time limit.
//!
//! ## Clocks
//!
//! Both clocks only move by the `dt` passed to `tick`. Nothing here reads
//! wall time, so a round replays exactly from its seed and inputs.

use tracing::{debug, info, warn};

use super::mode::{Mode, RoundSpec};
use super::powerup::{pick_hidden_pair, shuffle_positions, PowerupWallet};
use super::report::RoundReport;
use super::resolver::{Resolution, Resolver};
use crate::cards::{build_deck, Card, CardState, Deck, MAX_PAIRS};
use crate::core::{Action, CardId, FaceId, GameConfig, GameRng, PlayerId, PlayerMap, PowerupKind, TimingConfig};
use crate::events::{GameEvent, MatchSource};
use crate::layout::{layout, BoardLayout, Point};
use crate::rules::{MatchOutcome, RoundStatus, ScoreInput, ScoringRules, StandardScoring};

/// One round of play.
#[derive(Debug)]
pub struct Round {
    spec: RoundSpec,
    timing: TimingConfig,
    board: BoardLayout,
    cards: Vec<Card>,
    resolver: Resolver,
    rng: GameRng,
    powerups: PowerupWallet,
    scoring: Box<dyn ScoringRules>,
    status: RoundStatus,
    /// Drives animations and the mismatch timer.
    clock: f32,
    /// Scored time; excludes freezes.
    elapsed: f32,
    freeze_remaining: f32,
    paused: bool,
    hints: u32,
    hovered: Option<CardId>,
    current_player: PlayerId,
    player_pairs: PlayerMap<u32>,
    matched_faces: Vec<FaceId>,
    final_score: Option<u32>,
    events: Vec<GameEvent>,
}

impl Round {
    /// Deal a fresh board for `spec`, drawing faces from a pool of
    /// `face_pool` pictures.
    #[must_use]
    pub fn start(spec: RoundSpec, config: &GameConfig, face_pool: usize, rng: GameRng) -> Self {
        let mut deck_rng = rng.for_context("deck");
        let deck = build_deck(spec.pair_count, face_pool, &mut deck_rng);
        Self::with_deck(spec, config, deck, rng)
    }

    /// Start a round from a prepared deck. The deck's pair count wins over
    /// the one in `spec`.
    ///
    /// An empty deck, one above `MAX_PAIRS`, or one where some key does not
    /// occur exactly twice is replaced by a freshly dealt deck of the same
    /// (capped) pair count.
    #[must_use]
    pub fn with_deck(mut spec: RoundSpec, config: &GameConfig, mut deck: Deck, rng: GameRng) -> Self {
        if deck.is_empty() || deck.pair_count() > MAX_PAIRS || !deck.is_well_formed() {
            warn!(cards = deck.len(), "unusable deck, dealing a fresh one");
            deck = build_deck(deck.pair_count(), 0, &mut rng.for_context("deck"));
        }
        spec.pair_count = deck.pair_count();
        let board = layout(deck.len(), &config.viewport, &config.layout);

        let cards = (0..=u16::MAX)
            .zip(deck.entries().iter().zip(&board.positions))
            .map(|(i, (entry, &rect))| Card::new(CardId(i), entry.identity, entry.face, rect))
            .collect();

        info!(
            mode = ?spec.mode,
            level = ?spec.level,
            pairs = spec.pair_count,
            seed = rng.seed(),
            "round started"
        );

        Self {
            spec,
            timing: config.timing.clone(),
            board,
            cards,
            resolver: Resolver::new(),
            rng,
            powerups: PowerupWallet::default(),
            scoring: Box::new(StandardScoring::new(config.scoring.clone())),
            status: RoundStatus::Ongoing,
            clock: 0.0,
            elapsed: 0.0,
            freeze_remaining: 0.0,
            paused: false,
            hints: 0,
            hovered: None,
            current_player: PlayerId::new(0),
            player_pairs: PlayerMap::with_value(spec.mode.player_count(), 0),
            matched_faces: Vec::new(),
            final_score: None,
            events: Vec::new(),
        }
    }

    /// Use this wallet for power-ups.
    #[must_use]
    pub fn with_powerups(mut self, wallet: PowerupWallet) -> Self {
        self.powerups = wallet;
        self
    }

    /// Replace the scoring rules.
    #[must_use]
    pub fn with_scoring(mut self, rules: impl ScoringRules + 'static) -> Self {
        self.scoring = Box::new(rules);
        self
    }

    // === Driving ===

    /// Apply `actions`, then advance the round by `dt` seconds.
    ///
    /// Once the round is over further ticks change nothing.
    pub fn tick(&mut self, dt: f32, actions: &[Action]) -> RoundStatus {
        if self.status.is_over() {
            return self.status;
        }

        for &action in actions {
            self.apply(action);
            if self.status.is_over() {
                return self.status;
            }
        }

        if self.paused {
            return self.status;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.advance_clocks(dt);
        self.advance_cards(dt);
        self.resolve();
        self.check_end();

        self.status
    }

    /// Drain the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Exit => {
                self.status = RoundStatus::Abandoned;
                self.events.push(GameEvent::Abandoned);
                info!(moves = self.moves(), "round abandoned");
            }
            Action::TogglePause => {
                self.paused = !self.paused;
                self.events.push(GameEvent::Paused { paused: self.paused });
                debug!(paused = self.paused, "pause toggled");
            }
            Action::PointerMoved(point) => {
                self.hovered = self.card_at(point).filter(|id| self.cards[id.index()].is_hidden());
            }
            _ if self.paused => {}
            Action::Click(point) => {
                if let Some(card) = self.card_at(point) {
                    self.try_reveal(card);
                }
            }
            Action::Select(card) => {
                self.try_reveal(card);
            }
            Action::Hint => self.hint(),
            Action::UsePowerup(kind) => self.use_powerup(kind),
        }
    }

    /// Start revealing `card` if the selection gate and its state allow.
    fn try_reveal(&mut self, card: CardId) -> bool {
        if !self.can_select() {
            return false;
        }
        let Some(target) = self.cards.get_mut(card.index()) else {
            return false;
        };
        if !target.begin_reveal() {
            return false;
        }
        if self.hovered == Some(card) {
            self.hovered = None;
        }
        self.events.push(GameEvent::CardFlipped { card });
        debug!(%card, "card flipped");
        true
    }

    fn hint(&mut self) {
        if !self.can_select() {
            return;
        }
        let hidden: Vec<CardId> = self.cards.iter().filter(|c| c.is_hidden()).map(Card::id).collect();
        let Some(&card) = self.rng.choose(&hidden) else {
            return;
        };
        if self.try_reveal(card) {
            self.hints += 1;
            self.events.push(GameEvent::HintUsed { card });
            debug!(%card, hints = self.hints, "hint used");
        }
    }

    fn use_powerup(&mut self, kind: PowerupKind) {
        if self.powerups.get(kind) == 0 {
            debug!(%kind, "power-up rejected: none left");
            return;
        }

        match kind {
            PowerupKind::Shuffle => {
                let moved = shuffle_positions(&mut self.cards, &mut self.rng);
                self.hovered = None;
                debug!(moved, "board shuffled");
            }
            PowerupKind::Bomb => {
                let Some((first, second)) = pick_hidden_pair(&self.cards, &mut self.rng) else {
                    debug!("bomb rejected: no hidden pair");
                    return;
                };
                self.cards[first.index()].mark_matched();
                self.cards[second.index()].mark_matched();
                self.resolver.record_forced_match();
                *self.player_pairs.get_mut(self.current_player) += 1;
                if self.hovered.is_some_and(|h| h == first || h == second) {
                    self.hovered = None;
                }

                let card = &self.cards[first.index()];
                self.events.push(GameEvent::Matched {
                    first,
                    second,
                    identity: card.identity(),
                    face: card.face(),
                    player: self.current_player,
                    source: MatchSource::Bomb,
                });
                debug!(%first, %second, "bomb matched a pair");
            }
            PowerupKind::Freeze => {
                self.freeze_remaining = self.timing.freeze_duration;
                debug!(seconds = self.freeze_remaining, "clock frozen");
            }
        }

        if let Some(remaining) = self.powerups.try_spend(kind) {
            self.events.push(GameEvent::PowerupUsed { kind, remaining });
        }
    }

    fn advance_clocks(&mut self, dt: f32) {
        self.clock += dt;
        let frozen = dt.min(self.freeze_remaining);
        self.freeze_remaining -= frozen;
        self.elapsed += dt - frozen;
    }

    /// Runs after `advance_clocks`, so `self.clock` is the end of the tick.
    fn advance_cards(&mut self, dt: f32) {
        let speed = self.timing.flip_speed;
        let amount = if speed > 0.0 { dt * speed } else { 1.0 };
        let tick_start = self.clock - dt;

        for card in &mut self.cards {
            let remaining = 1.0 - card.progress();
            if card.advance(amount) == Some(CardState::Revealed) {
                // The moment the flip finished, not the end of the tick.
                let settled_at = if speed > 0.0 {
                    (tick_start + remaining / speed).clamp(tick_start, self.clock)
                } else {
                    self.clock
                };
                self.resolver
                    .card_revealed(card.id(), settled_at, self.timing.mismatch_delay);
            }
        }
    }

    fn resolve(&mut self) {
        match self.resolver.resolve(&mut self.cards, self.clock) {
            Resolution::Matched { first, second } => {
                let card = &self.cards[first.index()];
                let (identity, face) = (card.identity(), card.face());
                *self.player_pairs.get_mut(self.current_player) += 1;
                self.matched_faces.push(face);
                self.events.push(GameEvent::Matched {
                    first,
                    second,
                    identity,
                    face,
                    player: self.current_player,
                    source: MatchSource::Flip,
                });
                debug!(%first, %second, %identity, player = %self.current_player, "pair matched");
            }
            Resolution::FlippedBack { first, second } => {
                self.events.push(GameEvent::Mismatched {
                    first,
                    second,
                    player: self.current_player,
                });
                debug!(%first, %second, "mismatch flipped back");

                if self.spec.mode == Mode::TwoPlayer {
                    self.current_player = self.current_player.next(self.player_pairs.player_count());
                    self.events.push(GameEvent::TurnPassed { to: self.current_player });
                }
            }
            Resolution::Idle | Resolution::Waiting => {}
        }
    }

    fn check_end(&mut self) {
        if self.resolver.matched_pairs() as usize == self.spec.pair_count {
            let score = self.live_score();
            self.final_score = Some(score);
            self.status = RoundStatus::Won;
            self.events.push(GameEvent::Won {
                score,
                elapsed: self.elapsed,
                moves: self.moves(),
            });
            info!(score, elapsed = self.elapsed, moves = self.moves(), "round won");
        } else if self.spec.time_limit.is_some_and(|limit| self.elapsed >= limit) {
            self.status = RoundStatus::TimedOut;
            self.events.push(GameEvent::TimedOut);
            info!(matched = self.matched_pairs(), pairs = self.spec.pair_count, "round timed out");
        }
    }

    // === Queries ===

    /// Card under a board position.
    #[must_use]
    pub fn card_at(&self, point: Point) -> Option<CardId> {
        self.cards.iter().find(|c| c.rect().contains(point)).map(Card::id)
    }

    /// Cards that are revealing or waiting for resolution. A new reveal is
    /// only allowed while this is below two.
    #[must_use]
    pub fn selection_count(&self) -> usize {
        let revealing = self
            .cards
            .iter()
            .filter(|c| c.state() == CardState::Revealing)
            .count();
        self.resolver.pending().len() + revealing
    }

    #[must_use]
    pub fn can_select(&self) -> bool {
        self.selection_count() < 2
    }

    fn live_score(&self) -> u32 {
        self.scoring.score(&ScoreInput {
            moves: self.moves(),
            elapsed: self.elapsed,
            time_limit: self.spec.time_limit,
            hints: self.hints,
        })
    }

    /// Current score; fixed once the round is won.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.final_score.unwrap_or_else(|| self.live_score())
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    #[must_use]
    pub fn board(&self) -> &BoardLayout {
        &self.board
    }

    #[must_use]
    pub fn spec(&self) -> &RoundSpec {
        &self.spec
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.spec.mode
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.spec.pair_count
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Cards face up and awaiting resolution.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        self.resolver.pending()
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.resolver.moves()
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.resolver.matched_pairs()
    }

    /// Scored seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Round clock; keeps running through freezes.
    #[must_use]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Seconds left on a timed round.
    #[must_use]
    pub fn remaining(&self) -> Option<f32> {
        self.spec.time_limit.map(|limit| (limit - self.elapsed).max(0.0))
    }

    #[must_use]
    pub fn freeze_remaining(&self) -> f32 {
        self.freeze_remaining
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.freeze_remaining > 0.0
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints
    }

    #[must_use]
    pub fn hovered(&self) -> Option<CardId> {
        self.hovered
    }

    #[must_use]
    pub fn powerups(&self) -> &PowerupWallet {
        &self.powerups
    }

    /// Whose turn it is. Always player 0 outside two-player rounds.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn player_pairs(&self) -> &PlayerMap<u32> {
        &self.player_pairs
    }

    /// Winner of a finished two-player round.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if self.spec.mode != Mode::TwoPlayer || self.status != RoundStatus::Won {
            return None;
        }
        Some(MatchOutcome::from_leaders(&self.player_pairs.leaders()))
    }

    /// Summary for progression.
    #[must_use]
    pub fn report(&self) -> RoundReport {
        RoundReport {
            mode: self.spec.mode,
            level: self.spec.level,
            pair_count: self.spec.pair_count,
            status: self.status,
            score: self.score(),
            elapsed: self.elapsed,
            moves: self.moves(),
            hints: self.hints,
            matched_faces: self.matched_faces.clone(),
            player_pairs: self.player_pairs.iter().map(|(_, &n)| n).collect(),
            outcome: self.outcome(),
        }
    }
}
