//! In-memory implementation of `SessionStore`.
//!
//! Holds the raw key-value entries behind a `Mutex`, mirroring the layout the
//! file store writes to disk. Useful for tests and for demo runs that should
//! not leave anything behind.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use carelink_contracts::{
    error::CareLinkResult,
    session::{Session, LANGUAGE_KEY, VERIFIED_KEY},
};
use carelink_core::traits::SessionStore;

/// A process-local session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    pub(crate) entries: Mutex<BTreeMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing session, as if it had been persisted earlier.
    pub fn seeded(session: &Session) -> Self {
        Self { entries: Mutex::new(session.to_entries()) }
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Session {
        Session::from_entries(&self.entries())
    }

    fn save(&self, language_code: &str) -> CareLinkResult<()> {
        debug!(language = language_code, "saving language (memory)");
        self.entries().insert(LANGUAGE_KEY.to_string(), language_code.to_string());
        Ok(())
    }

    fn mark_verified(&self) -> CareLinkResult<()> {
        debug!("marking credential verified (memory)");
        self.entries().insert(VERIFIED_KEY.to_string(), "true".to_string());
        Ok(())
    }

    fn clear(&self) -> CareLinkResult<()> {
        self.entries().clear();
        Ok(())
    }
}
