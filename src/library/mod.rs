use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub mod dates;

/// One album as the library knows it 💿
///
/// Dates are kept as the raw tag strings because their precision varies
/// ("", "1997", "1997-06", "1997-06-16").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    pub artist: String,
    #[serde(alias = "album")]
    pub name: String,
    pub genre: String,
    pub label: String,
    pub original_date: String,
    pub release_date: String,
    pub added_at: DateTime<Utc>,
    pub track_count: u32,
}

impl Album {
    pub fn new(artist: &str, name: &str) -> Self {
        Self {
            artist: artist.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Original date when tagged, release date otherwise
    pub fn best_date(&self) -> &str {
        if self.original_date.trim().is_empty() {
            &self.release_date
        } else {
            &self.original_date
        }
    }

    /// Added-at timestamp on the local wall clock
    pub fn added_local(&self) -> NaiveDateTime {
        self.added_at.with_timezone(&Local).naive_local()
    }
}

impl AsRef<Album> for Album {
    fn as_ref(&self) -> &Album {
        self
    }
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read library {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse library {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can hand over the full album collection 📚
pub trait AlbumSource {
    fn all_albums(&self) -> Result<Vec<Album>, LibraryError>;
}

/// Albums stored as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonLibrary {
    path: PathBuf,
}

impl JsonLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlbumSource for JsonLibrary {
    fn all_albums(&self) -> Result<Vec<Album>, LibraryError> {
        let content = fs::read_to_string(&self.path).map_err(|source| LibraryError::Io {
            path: self.path.clone(),
            source,
        })?;
        let albums: Vec<Album> =
            serde_json::from_str(&content).map_err(|source| LibraryError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} albums from {}", albums.len(), self.path.display());
        Ok(albums)
    }
}

/// In-memory collection (tests, embedding)
#[derive(Debug, Clone, Default)]
pub struct MemoryLibrary {
    pub albums: Vec<Album>,
}

impl MemoryLibrary {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }
}

impl AlbumSource for MemoryLibrary {
    fn all_albums(&self) -> Result<Vec<Album>, LibraryError> {
        Ok(self.albums.clone())
    }
}
