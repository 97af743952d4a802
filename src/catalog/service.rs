//! Business rules over the album shelf.
//!
//! The service owns the [`CatalogStore`] outright and implements every
//! catalog operation as a linear scan over its list: lookup by id, append
//! with the duplicate-title gate, in-place update, removal, and the exact
//! case-insensitive searches the front end exposes. First match wins wherever
//! duplicates could exist.

use crate::catalog::error::CatalogError;
use crate::catalog::identity::{AlbumId, GenreId};
use crate::catalog::model::Album;
use crate::catalog::store::CatalogStore;

/// Catalog operations with their validation and matching semantics.
pub struct CatalogService {
    store: CatalogStore,
}

impl CatalogService {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    /// The full shelf, in store order.
    pub fn albums(&self) -> &[Album] {
        self.store.albums()
    }

    /// First album with the given id, if any.
    pub fn album(&self, id: AlbumId) -> Option<&Album> {
        self.store.albums().iter().find(|album| album.id == id)
    }

    /// Append `album` to the shelf.
    ///
    /// The gate is a title scan: the album is accepted only when some existing
    /// album already carries its title (case-insensitive); otherwise the call
    /// fails with [`CatalogError::DuplicateAlbum`]. Ids are not checked for
    /// uniqueness. See DESIGN.md for the history of this condition.
    pub fn add_album(&mut self, album: Album) -> Result<(), CatalogError> {
        let title_present = self
            .store
            .albums()
            .iter()
            .any(|existing| eq_ignore_case(&existing.title, &album.title));
        if title_present {
            self.store.albums_mut().push(album);
            Ok(())
        } else {
            Err(CatalogError::DuplicateAlbum { title: album.title })
        }
    }

    /// Overwrite the first album whose id matches `album.id`.
    ///
    /// Title, artist, release date, and genre are replaced in place; the id
    /// itself never changes. An unknown id is a silent no-op.
    pub fn update_album(&mut self, album: Album) {
        if let Some(existing) = self
            .store
            .albums_mut()
            .iter_mut()
            .find(|existing| existing.id == album.id)
        {
            existing.title = album.title;
            existing.artist = album.artist;
            existing.release_date = album.release_date;
            existing.genre = album.genre;
        }
    }

    /// Remove the first album with the given id. An unknown id is a silent
    /// no-op.
    pub fn delete_album(&mut self, id: AlbumId) {
        if let Some(position) = self.store.albums().iter().position(|album| album.id == id) {
            self.store.albums_mut().remove(position);
        }
    }

    /// All albums whose title equals `title`, ignoring case. Exact match, not
    /// substring.
    pub fn search_by_title(&self, title: &str) -> Vec<&Album> {
        self.store
            .albums()
            .iter()
            .filter(|album| eq_ignore_case(&album.title, title))
            .collect()
    }

    /// All albums whose artist equals `artist`, ignoring case.
    pub fn search_by_artist(&self, artist: &str) -> Vec<&Album> {
        self.store
            .albums()
            .iter()
            .filter(|album| eq_ignore_case(&album.artist, artist))
            .collect()
    }

    /// Genre id carried by the first album whose genre name matches, ignoring
    /// case.
    ///
    /// There is no standalone genre directory, so this observation is the only
    /// way a genre name resolves to an id. A name no album carries resolves to
    /// `None`, and genre search then finds nothing.
    pub fn genre_id_by_name(&self, name: &str) -> Option<GenreId> {
        self.store
            .albums()
            .iter()
            .find(|album| eq_ignore_case(&album.genre.name, name))
            .map(|album| album.genre.id)
    }

    /// All albums whose genre id equals the id resolved from `genre_name` via
    /// [`CatalogService::genre_id_by_name`]. Empty when the name resolves to
    /// nothing.
    pub fn search_by_genre(&self, genre_name: &str) -> Vec<&Album> {
        match self.genre_id_by_name(genre_name) {
            Some(genre_id) => self
                .store
                .albums()
                .iter()
                .filter(|album| album.genre.id == genre_id)
                .collect(),
            None => Vec::new(),
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
