//! Directory scans for face and back images.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::AssetError;

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

fn is_back_image(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.eq_ignore_ascii_case("back"))
}

/// Can `path` be used as a card face? Images only, `back.*` excluded.
#[must_use]
pub fn is_face_image(path: &Path) -> bool {
    has_image_extension(path) && !is_back_image(path)
}

/// Face images in `dir`, sorted by path.
pub fn scan_faces(dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    if !dir.is_dir() {
        return Err(AssetError::Missing(dir.to_path_buf()));
    }
    let entries = fs::read_dir(dir).map_err(|source| AssetError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut faces: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_face_image(path))
        .collect();
    faces.sort();
    Ok(faces)
}

/// The card back image in `dir`, if one exists.
#[must_use]
pub fn find_back(dir: &Path) -> Option<PathBuf> {
    let mut backs: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_image_extension(path) && is_back_image(path))
        .collect();
    backs.sort();
    backs.into_iter().next()
}
