//! Face pool: the pictures a round's pairs are drawn from.
//!
//! The pool is indexed by `FaceId`. Ids inside the pool resolve to image
//! files; ids past its end (and every id under the colour theme) resolve
//! to a generated placeholder whose colour depends only on the id, so a
//! face looks the same every time it comes up.

use std::hash::Hasher;
use std::path::{Path, PathBuf};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog::{find_back, scan_faces};
use crate::core::{FaceId, Theme};

/// An RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Neutral gray used for the placeholder back.
    pub const GRAY: Rgb = Rgb(120, 120, 128);
}

/// Visual content of one card side.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceAsset {
    /// An image file.
    Image(PathBuf),
    /// A generated solid rectangle, optionally crossed with an X.
    Placeholder { color: Rgb, crossed: bool },
}

impl FaceAsset {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, FaceAsset::Placeholder { .. })
    }
}

/// Deterministic placeholder colour for a face, each channel in `50..=255`.
///
/// ```
/// use mythic_match::assets::placeholder_color;
/// use mythic_match::core::FaceId;
///
/// assert_eq!(placeholder_color(FaceId(4)), placeholder_color(FaceId(4)));
/// assert_ne!(placeholder_color(FaceId(4)), placeholder_color(FaceId(5)));
/// ```
#[must_use]
pub fn placeholder_color(face: FaceId) -> Rgb {
    let mut hasher = FxHasher::default();
    hasher.write_u32(face.raw());
    let bits = hasher.finish();
    let channel = |shift: u32| 50 + ((bits >> shift) & 0xFF) as u8 % 206;
    Rgb(channel(8), channel(24), channel(40))
}

/// Faces available for dealing, plus the card back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacePool {
    images: Vec<PathBuf>,
    back: Option<PathBuf>,
}

impl FacePool {
    /// A pool with no images: every face is generated.
    #[must_use]
    pub fn generated() -> Self {
        Self::default()
    }

    /// A pool over explicit image paths.
    #[must_use]
    pub fn from_images(images: Vec<PathBuf>, back: Option<PathBuf>) -> Self {
        Self { images, back }
    }

    /// Scan `dir` for faces according to `theme`. Never fails: a missing
    /// or unreadable directory yields a generated pool.
    #[must_use]
    pub fn load(dir: &Path, theme: Theme) -> Self {
        let back = find_back(dir);
        if theme == Theme::Color {
            return Self { images: Vec::new(), back };
        }

        match scan_faces(dir) {
            Ok(images) => {
                info!(dir = %dir.display(), faces = images.len(), "face images found");
                Self { images, back }
            }
            Err(e) => {
                warn!(error = %e, "no face images, using generated faces");
                Self { images: Vec::new(), back }
            }
        }
    }

    /// Number of real images; the deck builder samples from `0..len`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Asset for a face id.
    #[must_use]
    pub fn face(&self, face: FaceId) -> FaceAsset {
        match self.images.get(face.raw() as usize) {
            Some(path) => FaceAsset::Image(path.clone()),
            None => FaceAsset::Placeholder {
                color: placeholder_color(face),
                crossed: false,
            },
        }
    }

    /// Asset for the card back: `back.*` or a gray crossed rectangle.
    #[must_use]
    pub fn back(&self) -> FaceAsset {
        match &self.back {
            Some(path) => FaceAsset::Image(path.clone()),
            None => FaceAsset::Placeholder {
                color: Rgb::GRAY,
                crossed: true,
            },
        }
    }
}
