//! Top-level controller.
//!
//! A `Session` owns everything that outlives a single round: configuration,
//! the level ladder, the session RNG, faces, sounds and loaded progression.
//! It starts rounds, forwards ticks to the current one and takes care of
//! the side effects the round itself only announces through events:
//!
//! - sounds are played for every event that has one
//! - power-up use is written to the profile as soon as it happens
//! - a finished round is recorded (profile, best times, daily scores)
//!   exactly once
//! - starting over an unfinished round abandons it first
//!
//! ```
//! use mythic_match::core::{Action, GameConfig, GameRng};
//! use mythic_match::progression::{JsonStore, Progression};
//! use mythic_match::round::Mode;
//! use mythic_match::rules::RoundStatus;
//! use mythic_match::session::Session;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let progression = Progression::load(JsonStore::new(dir.path()));
//! let mut session = Session::new(GameConfig::default(), progression).with_rng(GameRng::new(5));
//!
//! session.start_pairs(3, Mode::Single);
//! assert_eq!(session.tick(1.0 / 60.0, &[Action::Exit]), Some(RoundStatus::Abandoned));
//! assert_eq!(session.last_report().map(|r| r.moves), Some(0));
//! ```

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::assets::{FacePool, SoundBank, SoundCue};
use crate::core::{Action, GameConfig, GameRng};
use crate::events::GameEvent;
use crate::progression::{Progression, RecordOutcome};
use crate::round::{Mode, Round, RoundReport, RoundSpec};
use crate::rules::{LevelLadder, RoundStatus};

/// Owns all game state for one player session.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    ladder: LevelLadder,
    rng: GameRng,
    faces: FacePool,
    sounds: SoundBank,
    progression: Progression,
    round: Option<Round>,
    spec: Option<RoundSpec>,
    daily_date: Option<NaiveDate>,
    recorded: bool,
    last_report: Option<RoundReport>,
    last_record: Option<RecordOutcome>,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session with generated faces, silent sounds and a random
    /// seed.
    #[must_use]
    pub fn new(config: GameConfig, progression: Progression) -> Self {
        Self {
            config,
            ladder: LevelLadder::default(),
            rng: GameRng::from_entropy(),
            faces: FacePool::generated(),
            sounds: SoundBank::silent(),
            progression,
            round: None,
            spec: None,
            daily_date: None,
            recorded: false,
            last_report: None,
            last_record: None,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn with_faces(mut self, faces: FacePool) -> Self {
        self.faces = faces;
        self
    }

    #[must_use]
    pub fn with_sounds(mut self, sounds: SoundBank) -> Self {
        self.sounds = sounds;
        self
    }

    #[must_use]
    pub fn with_ladder(mut self, ladder: LevelLadder) -> Self {
        self.ladder = ladder;
        self
    }

    // === Starting rounds ===

    /// Start ladder level `number` (the first level if unknown).
    pub fn start_level(&mut self, number: u32, mode: Mode) -> &Round {
        let level = self.ladder.get(number).unwrap_or_else(|| self.ladder.first());
        let rng = self.rng.fork();
        self.begin(RoundSpec::from_level(level, mode), rng, None)
    }

    /// Start an untimed round with `pairs` pairs.
    pub fn start_pairs(&mut self, pairs: usize, mode: Mode) -> &Round {
        let rng = self.rng.fork();
        self.begin(RoundSpec::from_pairs(pairs, mode), rng, None)
    }

    /// Start the challenge for `date`. Same date, same board.
    pub fn start_daily(&mut self, date: NaiveDate) -> &Round {
        let rng = GameRng::for_date(date);
        let level = self.ladder.for_day(rng.seed());
        self.begin(RoundSpec::from_level(level, Mode::Daily), rng, Some(date))
    }

    /// Start the level after the last one played, wrapping at the top.
    /// Without a previous ladder round, starts the first level.
    pub fn next_level(&mut self) -> &Round {
        let (number, mode) = match self.spec {
            Some(spec) => (
                spec.level.map_or(self.ladder.first().number, |n| self.ladder.next_after(n).number),
                match spec.mode {
                    Mode::Daily => Mode::Single,
                    other => other,
                },
            ),
            None => (self.ladder.first().number, Mode::Single),
        };
        self.start_level(number, mode)
    }

    /// Deal a new board with the same parameters as the last round.
    /// A daily round is dealt identically again.
    pub fn restart(&mut self) -> &Round {
        let spec = self
            .spec
            .unwrap_or_else(|| RoundSpec::from_level(self.ladder.first(), Mode::Single));
        let rng = match self.daily_date {
            Some(date) if spec.mode == Mode::Daily => GameRng::for_date(date),
            _ => self.rng.fork(),
        };
        let date = if spec.mode == Mode::Daily { self.daily_date } else { None };
        self.begin(spec, rng, date)
    }

    /// Replaces the current round. One still in progress is abandoned and
    /// recorded first, so a restart costs the same as an exit.
    fn begin(&mut self, spec: RoundSpec, rng: GameRng, date: Option<NaiveDate>) -> &Round {
        if self.round.as_ref().is_some_and(|r| !r.status().is_over()) {
            debug!("abandoning unfinished round");
            self.tick(0.0, &[Action::Exit]);
        }

        let wallet = self.progression.profile().powerups;
        let round = Round::start(spec, &self.config, self.faces.len(), rng).with_powerups(wallet);

        self.spec = Some(spec);
        self.daily_date = date;
        self.recorded = false;
        self.events.clear();
        self.round.insert(round)
    }

    // === Driving ===

    /// Tick the current round. `None` if no round was started.
    pub fn tick(&mut self, dt: f32, actions: &[Action]) -> Option<RoundStatus> {
        let round = self.round.as_mut()?;
        let status = round.tick(dt, actions);
        let events = round.take_events();
        let wallet = *round.powerups();

        for event in &events {
            self.sounds.dispatch(event);
            if let GameEvent::PowerupUsed { kind, remaining } = event {
                debug!(%kind, remaining, "saving power-up use");
                self.progression.sync_powerups(wallet);
            }
        }
        self.events.extend(events);

        if status.is_over() && !self.recorded {
            self.finish();
        }
        Some(status)
    }

    fn finish(&mut self) {
        let Some(round) = &self.round else {
            return;
        };
        let report = round.report();
        let record = self.progression.record(&report, self.daily_date);
        if record.profile.leveled_up {
            self.sounds.play(SoundCue::LevelUp);
        }

        info!(
            status = ?report.status,
            score = report.score,
            moves = report.moves,
            seconds = report.whole_seconds(),
            "round finished"
        );
        self.recorded = true;
        self.last_report = Some(report);
        self.last_record = Some(record);
    }

    /// Drain the round events collected since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn ladder(&self) -> &LevelLadder {
        &self.ladder
    }

    #[must_use]
    pub fn faces(&self) -> &FacePool {
        &self.faces
    }

    #[must_use]
    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// Report of the most recently finished round.
    #[must_use]
    pub fn last_report(&self) -> Option<&RoundReport> {
        self.last_report.as_ref()
    }

    /// What recording the most recently finished round changed.
    #[must_use]
    pub fn last_record(&self) -> Option<&RecordOutcome> {
        self.last_record.as_ref()
    }
}
