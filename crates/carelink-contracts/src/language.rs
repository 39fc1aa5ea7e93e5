//! Supported interface languages.

use serde::{Deserialize, Serialize};

/// One of the fixed interface languages offered on the first screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Short code persisted in the session ("en", "hi", ...).
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Name in the language itself.
    pub native_name: &'static str,
}

/// Every language the companion ships with, in display order.
pub const SUPPORTED_LANGUAGES: [Language; 4] = [
    Language { code: "en", name: "English", native_name: "English" },
    Language { code: "hi", name: "Hindi", native_name: "हिन्दी" },
    Language { code: "te", name: "Telugu", native_name: "తెలుగు" },
    Language { code: "ta", name: "Tamil", native_name: "தமிழ்" },
];

impl Language {
    /// Find a supported language by its code (exact, case-sensitive).
    pub fn from_code(code: &str) -> Option<Language> {
        SUPPORTED_LANGUAGES.iter().copied().find(|l| l.code == code)
    }

    /// The translation locale for this language.
    pub fn locale(&self) -> Locale {
        Locale::from_code(self.code).unwrap_or_default()
    }
}

/// Translation locale. Translation providers are polymorphic over this set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Te,
    Ta,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Hi, Locale::Te, Locale::Ta];

    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "hi" => Some(Locale::Hi),
            "te" => Some(Locale::Te),
            "ta" => Some(Locale::Ta),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Te => "te",
            Locale::Ta => "ta",
        }
    }
}
