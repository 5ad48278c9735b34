//! Headless simulator: plays rounds with a memory bot and prints results.
//!
//! ```text
//! mythic-match-sim --level 2 --seed 7 -v
//! mythic-match-sim --daily --forgetfulness 0.5
//! mythic-match-sim --pairs 6 --two-player --rounds 3
//! ```
mod bot;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bot::MemoryBot;
use mythic_match::assets::{FacePool, FileProbe, SoundBank};
use mythic_match::core::{Action, GameConfig, GameRng};
use mythic_match::progression::{JsonStore, Progression};
use mythic_match::render::hud;
use mythic_match::round::{Mode, RoundReport};
use mythic_match::rules::{MatchOutcome, RoundStatus};
use mythic_match::session::Session;

/// Play memory rounds headlessly with a bot
#[derive(Parser, Debug)]
#[command(name = "mythic-match-sim", version)]
struct Cli {
    /// Ladder level to start at
    #[arg(long, value_name = "N", conflicts_with_all = ["pairs", "daily"])]
    level: Option<u32>,

    /// Untimed round with this many pairs instead of a ladder level
    #[arg(long, value_name = "N", conflicts_with = "daily")]
    pairs: Option<usize>,

    /// Seed for the session RNG (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Play today's daily challenge
    #[arg(long)]
    daily: bool,

    /// Two players alternate on one board
    #[arg(long, conflicts_with = "daily")]
    two_player: bool,

    /// Save directory (defaults to the platform data directory)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Chance per decision that the bot forgets a remembered card
    #[arg(long, default_value_t = 0.2)]
    forgetfulness: f64,

    /// Number of rounds to play
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Give up on a round after this many simulated seconds
    #[arg(long, default_value_t = 900.0)]
    max_seconds: f32,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir(),
    };
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    let progression = Progression::load(JsonStore::new(&data_dir));
    let faces = FacePool::load(&data_dir.join("images"), config.theme);
    let sounds = SoundBank::load(&data_dir.join("sounds"), &FileProbe);
    let seed = cli.seed.unwrap_or_else(rand::random);

    info!(seed, dir = %data_dir.display(), "starting simulator");

    let mut session = Session::new(config, progression)
        .with_rng(GameRng::new(seed))
        .with_faces(faces)
        .with_sounds(sounds);
    let mut bot = MemoryBot::new(cli.forgetfulness, GameRng::new(seed).for_context("bot"));
    let mode = if cli.two_player { Mode::TwoPlayer } else { Mode::Single };

    for index in 0..cli.rounds.max(1) {
        if index == 0 {
            start_first(&mut session, &cli, mode);
        } else if session.last_report().is_some_and(RoundReport::is_win) && cli.pairs.is_none() && !cli.daily {
            session.next_level();
        } else {
            session.restart();
        }
        bot.reset();

        let status = play_round(&mut session, &mut bot, cli.max_seconds);
        print_result(&session, index + 1, status);
    }

    let profile = session.progression().profile();
    println!(
        "profile: level {} | xp {} | streak {} (best {}) | collected {}",
        profile.level,
        profile.xp,
        profile.streak,
        profile.best_streak,
        profile.collection.len()
    );
    Ok(())
}

fn start_first(session: &mut Session, cli: &Cli, mode: Mode) {
    if cli.daily {
        session.start_daily(chrono::Local::now().date_naive());
    } else if let Some(pairs) = cli.pairs {
        session.start_pairs(pairs, mode);
    } else {
        session.start_level(cli.level.unwrap_or(1), mode);
    }
}

fn play_round(session: &mut Session, bot: &mut MemoryBot, max_seconds: f32) -> RoundStatus {
    let dt = session.config().timing.tick_seconds();
    let max_ticks = (max_seconds.max(0.0) / dt).ceil() as u64;

    for _ in 0..max_ticks {
        let actions: Vec<_> = session
            .round()
            .and_then(|round| bot.decide(round))
            .into_iter()
            .collect();

        match session.tick(dt, &actions) {
            Some(status) if status.is_over() => return status,
            Some(_) => {}
            None => return RoundStatus::Abandoned,
        }
        session.take_events();
    }

    warn!(max_seconds, "bot ran out of time, leaving the round");
    session
        .tick(dt, &[Action::Exit])
        .unwrap_or(RoundStatus::Abandoned)
}

fn print_result(session: &Session, number: u32, status: RoundStatus) {
    let Some(round) = session.round() else {
        return;
    };
    let view = hud(round);
    let label = match view.level {
        Some(level) => format!("level {level}"),
        None => format!("{} pairs", view.pair_count),
    };
    println!(
        "round {number} ({label}, {:?}): {status:?} | score {} | {}s | {} moves | {}/{} pairs",
        round.mode(),
        view.score,
        view.elapsed_secs,
        view.moves,
        view.matched_pairs,
        view.pair_count,
    );

    match round.outcome() {
        Some(MatchOutcome::Winner(player)) => println!("  {player} wins {:?}", view.player_pairs),
        Some(MatchOutcome::Draw) => println!("  draw {:?}", view.player_pairs),
        None => {}
    }
    if let Some(record) = session.last_record() {
        if record.new_best_time {
            println!("  new best time!");
        }
        for achievement in &record.profile.unlocked {
            println!("  achievement unlocked: {achievement}");
        }
    }
}

fn setup_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Platform data directory, or `./save_data` when none can be determined.
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "mythic-match")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Read a JSON config file, falling back to defaults with a warning.
fn load_config(path: Option<&Path>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    let parsed = fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from));
    match parsed {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config unusable, using defaults");
            GameConfig::default()
        }
    }
}
