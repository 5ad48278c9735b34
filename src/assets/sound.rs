//! Sound capability.
//!
//! Game code only ever sees `dyn Sound`. Whether a sound is backed by a
//! file or is silent is decided once, when the `SoundBank` is loaded;
//! call sites just call `play`.
//!
//! Audio output itself belongs to the front end: it implements
//! `SoundLoader` to turn a file into a playable handle. The headless
//! loader shipped here (`FileProbe`) checks that the file exists and logs
//! each play at trace level.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::error::AssetError;
use crate::events::GameEvent;

/// Something that can be played.
pub trait Sound: fmt::Debug {
    fn play(&self);
}

/// A sound that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSound;

impl Sound for NullSound {
    fn play(&self) {}
}

/// Turns a sound file into a playable handle.
pub trait SoundLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Sound>, AssetError>;
}

/// Headless loader: accepts existing files, plays by logging.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileProbe;

/// Handle produced by `FileProbe`.
#[derive(Clone, Debug)]
pub struct ProbedSound {
    path: PathBuf,
}

impl Sound for ProbedSound {
    fn play(&self) {
        trace!(path = %self.path.display(), "play sound");
    }
}

impl SoundLoader for FileProbe {
    fn load(&self, path: &Path) -> Result<Box<dyn Sound>, AssetError> {
        if path.is_file() {
            Ok(Box::new(ProbedSound {
                path: path.to_path_buf(),
            }))
        } else {
            Err(AssetError::Missing(path.to_path_buf()))
        }
    }
}

/// The fixed set of game sounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Flip,
    Match,
    Mismatch,
    Win,
    LevelUp,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::Flip,
        SoundCue::Match,
        SoundCue::Mismatch,
        SoundCue::Win,
        SoundCue::LevelUp,
    ];

    /// File stem in the sounds directory.
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            SoundCue::Flip => "flip",
            SoundCue::Match => "match",
            SoundCue::Mismatch => "mismatch",
            SoundCue::Win => "win",
            SoundCue::LevelUp => "levelup",
        }
    }

    /// The cue a round event plays, if any.
    #[must_use]
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::CardFlipped { .. } => Some(SoundCue::Flip),
            GameEvent::Matched { .. } => Some(SoundCue::Match),
            GameEvent::Mismatched { .. } => Some(SoundCue::Mismatch),
            GameEvent::Won { .. } => Some(SoundCue::Win),
            _ => None,
        }
    }
}

/// One handle per cue.
#[derive(Debug)]
pub struct SoundBank {
    sounds: [Box<dyn Sound>; 5],
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::silent()
    }
}

impl SoundBank {
    /// Every cue silent.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            sounds: std::array::from_fn(|_| Box::new(NullSound) as Box<dyn Sound>),
        }
    }

    /// Load each cue from `dir`, trying `<stem>.mp3` then `<stem>.wav`.
    /// Cues with neither file stay silent.
    pub fn load(dir: &Path, loader: &dyn SoundLoader) -> Self {
        let sounds = SoundCue::ALL.map(|cue| {
            ["mp3", "wav"]
                .iter()
                .find_map(|ext| loader.load(&dir.join(format!("{}.{ext}", cue.stem()))).ok())
                .unwrap_or_else(|| {
                    debug!(sound = cue.stem(), "sound unavailable, using silence");
                    Box::new(NullSound) as Box<dyn Sound>
                })
        });
        Self { sounds }
    }

    /// Build a bank from explicit handles, in `SoundCue::ALL` order.
    #[must_use]
    pub fn from_sounds(sounds: [Box<dyn Sound>; 5]) -> Self {
        Self { sounds }
    }

    fn index(cue: SoundCue) -> usize {
        match cue {
            SoundCue::Flip => 0,
            SoundCue::Match => 1,
            SoundCue::Mismatch => 2,
            SoundCue::Win => 3,
            SoundCue::LevelUp => 4,
        }
    }

    pub fn play(&self, cue: SoundCue) {
        self.sounds[Self::index(cue)].play();
    }

    /// Play whatever `event` calls for.
    pub fn dispatch(&self, event: &GameEvent) {
        if let Some(cue) = SoundCue::for_event(event) {
            self.play(cue);
        }
    }
}
