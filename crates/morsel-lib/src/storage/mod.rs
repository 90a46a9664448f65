//! Persisted key→JSON state
//!
//! Every piece of application state lives under one of nine well-known
//! keys, each a human-inspectable JSON document. Malformed or absent
//! payloads are treated as absent and replaced with the type's default;
//! nothing in this layer is fatal.
//!
//! [`Storage`] is object-safe so sessions can swap the file-backed store
//! for an in-memory one in tests.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::warn;

/// The nine persisted state keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Measurement system: "metric" | "imperial"
    Units,
    /// Age gate answer: "yes" | "no" (absent until asked)
    AgeOk,
    /// Seeded catalogue records
    Recipes,
    /// User-authored recipes, newest first
    MyRecipes,
    /// Favourite recipe ids
    Favs,
    /// Recipe id → comment log
    Comments,
    /// Recipe id → star rating log
    Ratings,
    /// Shopping list items
    Shop,
    /// The pantry (finder have-set)
    Finder,
}

impl StoreKey {
    pub const ALL: [StoreKey; 9] = [
        StoreKey::Units,
        StoreKey::AgeOk,
        StoreKey::Recipes,
        StoreKey::MyRecipes,
        StoreKey::Favs,
        StoreKey::Comments,
        StoreKey::Ratings,
        StoreKey::Shop,
        StoreKey::Finder,
    ];

    /// File name backing this key in [`FileStorage`]
    pub fn file_name(self) -> &'static str {
        match self {
            StoreKey::Units => "units.json",
            StoreKey::AgeOk => "age_ok.json",
            StoreKey::Recipes => "recipes.json",
            StoreKey::MyRecipes => "my_recipes.json",
            StoreKey::Favs => "favs.json",
            StoreKey::Comments => "comments.json",
            StoreKey::Ratings => "ratings.json",
            StoreKey::Shop => "shop.json",
            StoreKey::Finder => "finder.json",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name().trim_end_matches(".json"))
    }
}

/// Storage access and serialization errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read '{key}': {source}")]
    Read {
        key: StoreKey,
        source: std::io::Error,
    },

    #[error("Failed to write '{key}': {source}")]
    Write {
        key: StoreKey,
        source: std::io::Error,
    },

    #[error("Failed to encode '{key}': {source}")]
    Encode {
        key: StoreKey,
        source: serde_json::Error,
    },

    #[error("Failed to create data directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No platform data directory available")]
    DataDirUnavailable,
}

/// Provider trait for persisted key→payload access
pub trait Storage {
    /// Raw payload for a key, None when absent
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError>;

    /// Persist a raw payload under a key
    fn write(&self, key: StoreKey, payload: &str) -> Result<(), StorageError>;
}

/// Deserialize a key's payload, substituting the default on absence or
/// malformed content
pub fn load_or_default<T>(storage: &dyn Storage, key: StoreKey) -> T
where
    T: DeserializeOwned + Default,
{
    let payload = match storage.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return T::default(),
        Err(err) => {
            warn!(key = %key, error = %err, "unreadable state, using default");
            return T::default();
        }
    };

    match serde_json::from_str(&payload) {
        Ok(value) => value,
        Err(err) => {
            warn!(key = %key, error = %err, "malformed state, using default");
            T::default()
        }
    }
}

/// Serialize and persist a value under a key
pub fn save<T: Serialize>(
    storage: &dyn Storage,
    key: StoreKey,
    value: &T,
) -> Result<(), StorageError> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|source| StorageError::Encode { key, source })?;
    storage.write(key, &payload)
}

/// File-backed storage: one JSON document per key under a root directory
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage root
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::CreateDir {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Platform-conventional data directory for morsel
    pub fn default_root() -> Result<PathBuf, StorageError> {
        directories::ProjectDirs::from("", "", "morsel")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StorageError::DataDirUnavailable)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.root.join(key.file_name())
    }
}

impl Storage for FileStorage {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { key, source }),
        }
    }

    fn write(&self, key: StoreKey, payload: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), payload).map_err(|source| StorageError::Write { key, source })
    }
}

/// In-memory storage for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    cells: Mutex<HashMap<StoreKey, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a payload, bypassing the Storage trait
    pub fn preload(&self, key: StoreKey, payload: &str) {
        self.cells
            .lock()
            .expect("storage mutex poisoned")
            .insert(key, payload.to_string());
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        Ok(self
            .cells
            .lock()
            .expect("storage mutex poisoned")
            .get(&key)
            .cloned())
    }

    fn write(&self, key: StoreKey, payload: &str) -> Result<(), StorageError> {
        self.cells
            .lock()
            .expect("storage mutex poisoned")
            .insert(key, payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
