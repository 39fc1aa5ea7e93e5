//! Companion walkthrough scenarios.
//!
//! Each scenario wires real CareLink components (navigator, credential gate,
//! session store, symptom engine, follow-up tracker, chat assistant) to the
//! mock data and prints what a user would see, screen by screen.

pub mod assistant;
pub mod doctors;
pub mod follow_up;
pub mod onboarding;
pub mod resources;
pub mod symptom_check;

use carelink_contracts::error::CareLinkResult;

use crate::config::CompanionConfig;

/// Query used by the resources scenario when run as part of `run_all`.
pub const DEFAULT_RESOURCE_QUERY: &str = "heart";

/// Run every scenario in order, stopping at the first failure.
pub async fn run_all(config: &CompanionConfig, language: &str) -> CareLinkResult<()> {
    onboarding::run_scenario(config, language).await?;
    symptom_check::run_scenario(config, language)?;
    follow_up::run_scenario(config, language)?;
    assistant::run_scenario(config, language).await?;
    resources::run_scenario(language, DEFAULT_RESOURCE_QUERY)?;
    doctors::run_scenario(language)?;
    Ok(())
}
