//! Translation keys.
//!
//! The core never embeds string tables. Components refer to user-facing text
//! through `TextKey` and a `TranslationProvider` resolves it for the active
//! locale.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKey {
    AppTitle,
    Back,

    LanguageTitle,
    LanguageSubtitle,

    CredentialTitle,
    CredentialSubtitle,
    CredentialSubmit,
    CredentialValidating,
    CredentialValid,
    CredentialInvalid,
    CredentialRequired,

    DashboardTitle,
    DashboardGreeting,
    Settings,

    SymptomCheckerTitle,
    SelectBodyPart,
    SelectSymptoms,
    PossibleConditions,
    Disclaimer,

    ChatTitle,
    ChatWelcome,

    DoctorPortalTitle,
    ResourcesTitle,

    FollowUpTitle,
    StatusImproved,
    StatusSame,
    StatusWorsened,
    SubmitUpdate,
}

impl TextKey {
    pub const ALL: [TextKey; 28] = [
        TextKey::AppTitle,
        TextKey::Back,
        TextKey::LanguageTitle,
        TextKey::LanguageSubtitle,
        TextKey::CredentialTitle,
        TextKey::CredentialSubtitle,
        TextKey::CredentialSubmit,
        TextKey::CredentialValidating,
        TextKey::CredentialValid,
        TextKey::CredentialInvalid,
        TextKey::CredentialRequired,
        TextKey::DashboardTitle,
        TextKey::DashboardGreeting,
        TextKey::Settings,
        TextKey::SymptomCheckerTitle,
        TextKey::SelectBodyPart,
        TextKey::SelectSymptoms,
        TextKey::PossibleConditions,
        TextKey::Disclaimer,
        TextKey::ChatTitle,
        TextKey::ChatWelcome,
        TextKey::DoctorPortalTitle,
        TextKey::ResourcesTitle,
        TextKey::FollowUpTitle,
        TextKey::StatusImproved,
        TextKey::StatusSame,
        TextKey::StatusWorsened,
        TextKey::SubmitUpdate,
    ];
}
