//! Shared library for the albumrack catalog.
//!
//! The crate exposes the album shelf (store, service, record types) and the
//! table renderer used by the interactive binary. Public functions here form
//! the contract the binary depends on: albums-file resolution mirrors what
//! README.md documents, so the shelf is found the same way whether the tool
//! runs from a checkout or an installed location.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use std::{env, fs};

pub mod catalog;
pub mod render;

pub use catalog::{
    Album, AlbumId, CatalogError, CatalogService, CatalogStore, Genre, GenreId,
};
pub use render::render_album_table;

/// Environment variable that points directly at an albums file.
pub const ALBUMS_ENV: &str = "ALBUMRACK_ALBUMS";

const ALBUMS_RELATIVE_PATH: &str = "data/albums.json";

/// Verifies that a path hint points at a real albums file.
fn albums_file_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.is_file() {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        let candidate = dir.join(ALBUMS_RELATIVE_PATH);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the albums file backing the catalog.
///
/// Search order: an explicit path wins and must exist; otherwise honor
/// `ALBUMRACK_ALBUMS` if it points at a real file, climb up from the current
/// directory looking for `data/albums.json`, then fall back to the build-time
/// manifest directory. Callers can treat failure as fatal because the catalog
/// cannot start without its shelf.
pub fn resolve_albums_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("albums file {} does not exist", path.display());
        }
        return Ok(path.to_path_buf());
    }

    if let Ok(env_hint) = env::var(ALBUMS_ENV) {
        if let Some(path) = albums_file_from_hint(&env_hint) {
            return Ok(path);
        }
    }

    if let Ok(current_dir) = env::current_dir() {
        if let Some(path) = search_upwards(&current_dir) {
            return Ok(path);
        }
    }

    let manifest_candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(ALBUMS_RELATIVE_PATH);
    if manifest_candidate.is_file() {
        return Ok(manifest_candidate);
    }

    bail!(
        "Unable to locate an albums file. Pass --data <path> or set {ALBUMS_ENV} to a {ALBUMS_RELATIVE_PATH} snapshot."
    );
}
