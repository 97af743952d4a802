use thiserror::Error;

/// Domain errors raised by catalog operations.
///
/// Only [`CatalogService::add_album`](crate::catalog::service::CatalogService::add_album)
/// fails with a typed error; missing ids on get/update/delete and empty search
/// results are absent values or empty sequences, never errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("album '{title}' already exists")]
    DuplicateAlbum { title: String },
}
