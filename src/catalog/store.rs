//! Owner of the in-memory album shelf.
//!
//! The store is deliberately dumb: it loads the shelf once from a JSON source,
//! validated against `schema/albums.schema.json` before deserialization, and
//! then hands the live list out for reading and in-place mutation. Every
//! business rule lives in [`crate::catalog::service::CatalogService`].

use crate::catalog::model::Album;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::Path;

const ALBUMS_SCHEMA: &str = include_str!("../../schema/albums.schema.json");

#[derive(Debug)]
/// In-memory collection of albums, populated once at construction.
pub struct CatalogStore {
    albums: Vec<Album>,
}

impl CatalogStore {
    /// Load the shelf from an albums file on disk.
    ///
    /// Missing files, invalid JSON, and schema violations all surface as
    /// errors carrying the file name; callers treat any of them as fatal.
    /// There is no recovery or partial load.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading albums file {}", path.display()))?;
        Self::from_json_str(&data).with_context(|| format!("loading {}", path.display()))
    }

    /// Same pipeline as [`CatalogStore::load`] over an in-memory buffer, so
    /// tests can exercise the loader without touching a filesystem.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(data).context("albums file is not valid JSON")?;
        validate_against_schema(&value)?;
        let albums: Vec<Album> =
            serde_json::from_value(value).context("deserializing albums")?;
        Ok(Self { albums })
    }

    /// Construct directly from records, bypassing the file format entirely.
    pub fn from_albums(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    /// The live shelf, in load order.
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Mutable access to the live shelf. The store performs no validation on
    /// mutation; callers own the rules.
    pub fn albums_mut(&mut self) -> &mut Vec<Album> {
        &mut self.albums
    }
}

fn validate_against_schema(value: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(ALBUMS_SCHEMA).context("parsing embedded albums schema")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("embedded albums schema does not compile: {err}"))?;
    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("albums file failed schema validation:\n{details}");
    }
    Ok(())
}
