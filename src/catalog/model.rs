//! Record types for the album shelf.
//!
//! The structs mirror the on-disk albums file (see `schema/albums.schema.json`)
//! so the store can round-trip JSON without ad-hoc maps. Genres are embedded
//! by value in each album; there is no separate genre listing anywhere in the
//! data.

use crate::catalog::identity::{AlbumId, GenreId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Musical category carried by an album.
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One release on the shelf.
///
/// `release_date` serializes as `YYYY-MM-DD`. The id is immutable once loaded;
/// update operations replace every other field in place.
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub release_date: NaiveDate,
    pub genre: Genre,
}
