//! # carelink-ref-companion
//!
//! Reference multilingual healthcare companion built on the CareLink engines.
//!
//! Supplies the concrete pieces the core leaves abstract and a set of
//! runnable walkthroughs:
//!
//! 1. **Configuration**: `CompanionConfig`, read from TOML.
//! 2. **Translations**: `StaticTranslations` for English, Hindi, Telugu and Tamil.
//! 3. **Simulated verifier**: accepts well-formed tokens after a fixed latency.
//! 4. **Chat assistant**: canned replies delivered as cancellable delayed tasks.
//! 5. **Resources and doctor portal**: read-only views over mock catalogs.
//! 6. **Scenarios**: onboarding with resume, symptom check, follow-up
//!    tracking, chat, resources and the doctor portal.
//!
//! All data is hardcoded and fictional. No external API calls are made, and
//! nothing here is medical advice.

pub mod assistant;
pub mod config;
pub mod doctors;
pub mod i18n;
pub mod mock_data;
pub mod resources;
pub mod scenarios;
pub mod verifier;

pub use assistant::ChatAssistant;
pub use config::CompanionConfig;
pub use doctors::DoctorPortal;
pub use i18n::StaticTranslations;
pub use resources::ResourceLibrary;
pub use verifier::SimulatedVerifier;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn all_scenarios_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CompanionConfig::default();
        config.session.path = dir.path().join("session.json");
        config.credential.simulated_latency_ms = 0;
        config.assistant.reply_delay_ms = 5;

        scenarios::run_all(&config, "hi").await.unwrap();
        // A second pass resumes from the persisted session.
        scenarios::run_all(&config, "hi").await.unwrap();
    }
}
