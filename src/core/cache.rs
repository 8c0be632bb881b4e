//! # Conjugation Cache
//!
//! Persistent `verb → ConjugationTable` map at `data/conjugations`.
//!
//! The whole store is one JSON object, read on `open()` and rewritten on
//! `close()` with atomic rename (write `.tmp`, then `rename()`). A cache that
//! is dropped with unsaved inserts flushes itself, so an update that fails
//! halfway still keeps the verbs it already fetched.
//!
//! There is no locking: two processes writing the same store race and the
//! last `close()` wins.

use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::table::ConjugationTable;

#[derive(Debug)]
pub enum CacheError {
    Io(io::Error),
    /// The store exists but is not a valid conjugation map.
    Decode(serde_json::Error),
    /// The in-memory map could not be serialized for writing.
    Encode(serde_json::Error),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Io(e) => write!(f, "cache I/O error: {e}"),
            CacheError::Decode(e) => write!(f, "cache decode error: {e}"),
            CacheError::Encode(e) => write!(f, "cache encode error: {e}"),
        }
    }
}

impl std::error::Error for CacheError {}

impl From<io::Error> for CacheError {
    fn from(e: io::Error) -> Self {
        CacheError::Io(e)
    }
}

#[derive(Debug)]
pub struct ConjugationCache {
    path: PathBuf,
    entries: BTreeMap<String, ConjugationTable>,
    dirty: bool,
}

impl ConjugationCache {
    /// Open the store at `path`, creating its parent directory if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let entries: BTreeMap<String, ConjugationTable> = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json).map_err(CacheError::Decode)?
        } else {
            BTreeMap::new()
        };

        info!("Opened cache {} ({} verbs)", path.display(), entries.len());
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.entries.contains_key(verb)
    }

    pub fn get(&self, verb: &str) -> Option<&ConjugationTable> {
        self.entries.get(verb)
    }

    pub fn insert(&mut self, verb: &str, table: ConjugationTable) {
        self.entries.insert(verb.to_string(), table);
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flush pending writes and release the store.
    pub fn close(mut self) -> Result<(), CacheError> {
        self.flush()
    }

    fn flush(&mut self) -> Result<(), CacheError> {
        if !self.dirty {
            return Ok(());
        }
        let tmp_path = self.path.with_extension("tmp");
        let json = serde_json::to_string_pretty(&self.entries).map_err(CacheError::Encode)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        self.dirty = false;
        debug!("Flushed {} verbs to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

impl Drop for ConjugationCache {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!("Failed to flush cache {}: {}", self.path.display(), e);
        }
    }
}
