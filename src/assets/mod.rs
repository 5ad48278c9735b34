//! Face images, card backs and sounds.
//!
//! Everything here fails soft. A missing directory, an unreadable file or
//! an unsupported format turns into a generated placeholder or a silent
//! sound plus a log line; the game never stops over an asset.

pub mod catalog;
pub mod error;
pub mod face;
pub mod sound;

pub use error::AssetError;
pub use face::{placeholder_color, FaceAsset, FacePool, Rgb};
pub use sound::{FileProbe, NullSound, Sound, SoundBank, SoundCue, SoundLoader};
