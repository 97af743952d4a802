use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier for an album record.
///
/// Uniqueness among albums is expected from the data file but never enforced
/// by the service; lookups take the first match in shelf order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(pub u32);

/// Numeric identifier for a genre.
///
/// Genres travel embedded in albums rather than in a standalone directory, so
/// an id only becomes visible once some album on the shelf carries it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(pub u32);

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
