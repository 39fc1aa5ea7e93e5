//! Persisted session state and its key-value layout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Storage key holding the selected language code.
pub const LANGUAGE_KEY: &str = "selectedLanguage";

/// Storage key holding the credential-verified flag.
pub const VERIFIED_KEY: &str = "apiKeyConfigured";

/// What survives a restart: the chosen language and whether a credential
/// was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub language_code: Option<String>,
    pub credential_verified: bool,
}

impl Session {
    /// Rebuild a session from raw key-value entries.
    ///
    /// Absent keys mean "not yet set". A language code outside the supported
    /// set is treated as absent, and the verified flag is only honoured when
    /// its value is exactly `"true"`.
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Self {
        let language_code = entries
            .get(LANGUAGE_KEY)
            .filter(|code| Language::from_code(code).is_some())
            .cloned();
        let credential_verified = entries.get(VERIFIED_KEY).map(String::as_str) == Some("true");
        Self { language_code, credential_verified }
    }

    /// The inverse of `from_entries`.
    pub fn to_entries(&self) -> BTreeMap<String, String> {
        let mut entries = BTreeMap::new();
        if let Some(code) = &self.language_code {
            entries.insert(LANGUAGE_KEY.to_string(), code.clone());
        }
        if self.credential_verified {
            entries.insert(VERIFIED_KEY.to_string(), "true".to_string());
        }
        entries
    }

    pub fn language(&self) -> Option<Language> {
        self.language_code.as_deref().and_then(Language::from_code)
    }
}
