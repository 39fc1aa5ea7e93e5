//! Trait seams between the CareLink core and its collaborators.
//!
//! - `SessionStore`        — durable key-value session persistence
//! - `ExternalVerifier`    — remote confirmation of an access token (async)
//! - `TranslationProvider` — locale-aware user-facing strings
//! - `Clock`               — wall-clock source for scheduling
//!
//! The navigator and the credential gate only ever talk to these traits;
//! concrete implementations live in `carelink-session` and
//! `carelink-ref-companion`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use carelink_contracts::{
    error::CareLinkResult,
    language::Locale,
    session::Session,
    text::TextKey,
};

/// Durable storage for the two session flags.
///
/// Implementations must make every write atomic from the caller's point of
/// view: after a failed `save` or `mark_verified`, `load` returns exactly what
/// it returned before the call.
pub trait SessionStore: Send + Sync {
    /// Read the persisted session.
    ///
    /// Never fails. Missing or corrupt data yields `Session::default()`.
    fn load(&self) -> Session;

    /// Persist the chosen language code.
    fn save(&self, language_code: &str) -> CareLinkResult<()>;

    /// Persist the credential-verified flag.
    fn mark_verified(&self) -> CareLinkResult<()>;

    /// Remove both entries.
    fn clear(&self) -> CareLinkResult<()>;
}

/// Remote confirmation of an access token.
///
/// The credential gate treats any `Err` identically to `Ok(false)`.
#[async_trait]
pub trait ExternalVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> CareLinkResult<bool>;
}

/// Resolves user-facing strings for a locale.
pub trait TranslationProvider: Send + Sync {
    /// The string for `key` in `locale`, if the provider has one.
    fn lookup(&self, locale: Locale, key: TextKey) -> Option<&str>;

    /// The string for `key` in the language identified by `code`.
    ///
    /// Unknown codes and missing keys fall back to English; a key English
    /// does not define resolves to the empty string.
    fn text(&self, code: &str, key: TextKey) -> &str {
        let locale = Locale::from_code(code).unwrap_or_default();
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::En, key))
            .unwrap_or("")
    }
}

/// Wall-clock source. Injected so scheduling is testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
