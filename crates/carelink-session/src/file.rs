//! File-backed implementation of `SessionStore`.
//!
//! The session is a flat JSON object of string entries:
//!
//! ```json
//! { "apiKeyConfigured": "true", "selectedLanguage": "hi" }
//! ```
//!
//! Every write goes to a temporary file in the same directory and is then
//! renamed over the target, so a reader sees either the old document or the
//! new one and never a torn write. Entries this crate does not know about are
//! preserved across updates, whatever their JSON type. A known key holding a
//! non-string value reads as unset without costing the other entries.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use carelink_contracts::{
    error::{CareLinkError, CareLinkResult},
    session::{Session, LANGUAGE_KEY, VERIFIED_KEY},
};
use carelink_core::traits::SessionStore;

/// A session store persisted as a JSON document on disk.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Use `path` as the session document. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw entries. A missing file is an empty session.
    fn read_entries(&self) -> CareLinkResult<BTreeMap<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(CareLinkError::StorageError {
                    reason: format!("failed to read session file '{}': {}", self.path.display(), e),
                })
            }
        };
        serde_json::from_str(&contents).map_err(|e| CareLinkError::StorageError {
            reason: format!("session file '{}' is corrupt: {}", self.path.display(), e),
        })
    }

    /// Apply `change` to the stored entries and write the result atomically.
    fn update(&self, change: impl FnOnce(&mut BTreeMap<String, Value>)) -> CareLinkResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut entries = self.read_entries().unwrap_or_else(|e| {
            warn!(error = %e, "discarding unreadable session file");
            BTreeMap::new()
        });
        change(&mut entries);
        self.write_atomic(&entries)
    }

    fn write_atomic(&self, entries: &BTreeMap<String, Value>) -> CareLinkResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| storage_error("failed to encode session for", &self.path, e))?;

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| storage_error("failed to stage session write for", &self.path, e))?;
        tmp.write_all(&json)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| storage_error("failed to write session for", &self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| storage_error("failed to replace session file", &self.path, e.error))?;

        debug!(path = %self.path.display(), entries = entries.len(), "session written");
        Ok(())
    }
}

/// The string-valued entries, which are the only ones a `Session` reads.
fn string_entries(entries: &BTreeMap<String, Value>) -> BTreeMap<String, String> {
    entries
        .iter()
        .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
        .collect()
}

fn storage_error(what: &str, path: &Path, e: impl std::fmt::Display) -> CareLinkError {
    CareLinkError::StorageError { reason: format!("{} '{}': {}", what, path.display(), e) }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Session {
        match self.read_entries() {
            Ok(entries) => Session::from_entries(&string_entries(&entries)),
            Err(e) => {
                warn!(error = %e, "session unreadable; starting fresh");
                Session::default()
            }
        }
    }

    fn save(&self, language_code: &str) -> CareLinkResult<()> {
        self.update(|entries| {
            entries.insert(LANGUAGE_KEY.to_string(), Value::from(language_code));
        })
    }

    fn mark_verified(&self) -> CareLinkResult<()> {
        self.update(|entries| {
            entries.insert(VERIFIED_KEY.to_string(), Value::from("true"));
        })
    }

    fn clear(&self) -> CareLinkResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CareLinkError::StorageError {
                reason: format!("failed to remove session file '{}': {}", self.path.display(), e),
            }),
        }
    }
}
