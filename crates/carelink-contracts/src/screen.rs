//! Navigational screens.

use serde::{Deserialize, Serialize};

use crate::text::TextKey;

/// One full-page navigational state. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Language,
    Credential,
    Dashboard,
    SymptomChecker,
    Chat,
    DoctorPortal,
    Resources,
    FollowUp,
}

impl Screen {
    /// All screens, in declaration order.
    pub const ALL: [Screen; 8] = [
        Screen::Language,
        Screen::Credential,
        Screen::Dashboard,
        Screen::SymptomChecker,
        Screen::Chat,
        Screen::DoctorPortal,
        Screen::Resources,
        Screen::FollowUp,
    ];

    /// Feature screens reachable from the dashboard, in display order.
    pub const DASHBOARD_DESTINATIONS: [Screen; 5] = [
        Screen::SymptomChecker,
        Screen::Chat,
        Screen::DoctorPortal,
        Screen::Resources,
        Screen::FollowUp,
    ];

    /// True for every screen except the two onboarding screens.
    pub fn requires_verification(self) -> bool {
        !matches!(self, Screen::Language | Screen::Credential)
    }

    /// True for the five screens that hang off the dashboard.
    pub fn is_feature(self) -> bool {
        Self::DASHBOARD_DESTINATIONS.contains(&self)
    }

    /// Translation key for the screen's title.
    pub fn title_key(self) -> TextKey {
        match self {
            Screen::Language => TextKey::LanguageTitle,
            Screen::Credential => TextKey::CredentialTitle,
            Screen::Dashboard => TextKey::DashboardTitle,
            Screen::SymptomChecker => TextKey::SymptomCheckerTitle,
            Screen::Chat => TextKey::ChatTitle,
            Screen::DoctorPortal => TextKey::DoctorPortalTitle,
            Screen::Resources => TextKey::ResourcesTitle,
            Screen::FollowUp => TextKey::FollowUpTitle,
        }
    }
}
