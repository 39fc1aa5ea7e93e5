//! Runtime configuration for the reference companion.
//!
//! Every section and field is optional; anything left out takes the default
//! shown in `config/companion.toml`.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use carelink_contracts::error::{CareLinkError, CareLinkResult};
use carelink_core::TokenPolicy;
use carelink_symptoms::{RegionCatalog, RuleTable, SymptomEngine};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub session: SessionConfig,
    pub credential: CredentialConfig,
    pub follow_up: FollowUpConfig,
    pub assistant: AssistantConfig,
    pub symptoms: SymptomsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Where the file-backed session document lives.
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("carelink-session.json") }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub min_length: usize,
    pub required_prefix: String,
    /// Upper bound on a single verifier round-trip.
    pub verify_timeout_ms: u64,
    /// How long the simulated verifier pretends to think.
    pub simulated_latency_ms: u64,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        let policy = TokenPolicy::default();
        Self {
            min_length: policy.min_length,
            required_prefix: policy.required_prefix,
            verify_timeout_ms: 5_000,
            simulated_latency_ms: 2_000,
        }
    }
}

impl CredentialConfig {
    pub fn policy(&self) -> TokenPolicy {
        TokenPolicy { min_length: self.min_length, required_prefix: self.required_prefix.clone() }
    }

    pub fn verify_timeout(&self) -> Duration {
        Duration::from_millis(self.verify_timeout_ms)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowUpConfig {
    pub check_in_interval_hours: u32,
}

impl Default for FollowUpConfig {
    fn default() -> Self {
        Self { check_in_interval_hours: 24 }
    }
}

impl FollowUpConfig {
    pub fn interval(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.check_in_interval_hours))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self { reply_delay_ms: 1_500 }
    }
}

impl AssistantConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomsConfig {
    /// Replaces the embedded condition rule table when set.
    pub rules_path: Option<PathBuf>,
}

impl SymptomsConfig {
    /// Build a symptom engine over the standard body diagram, using the rule
    /// file at `rules_path` if one is configured.
    pub fn engine(&self) -> CareLinkResult<SymptomEngine> {
        let rules = match &self.rules_path {
            Some(path) => RuleTable::from_file(path)?,
            None => RuleTable::embedded()?,
        };
        SymptomEngine::new(RegionCatalog::standard(), rules)
    }
}

impl CompanionConfig {
    /// Parse a TOML document. Returns `ConfigError` on malformed input or
    /// values that cannot work (zero interval, zero timeout).
    pub fn from_toml_str(s: &str) -> CareLinkResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| CareLinkError::ConfigError {
            reason: format!("failed to parse companion config TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> CareLinkResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CareLinkError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> CareLinkResult<()> {
        if self.follow_up.check_in_interval_hours == 0 {
            return Err(CareLinkError::ConfigError {
                reason: "follow_up.check_in_interval_hours must be at least 1".to_string(),
            });
        }
        if self.credential.verify_timeout_ms == 0 {
            return Err(CareLinkError::ConfigError {
                reason: "credential.verify_timeout_ms must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let config = CompanionConfig::from_toml_str("").unwrap();
        assert_eq!(config, CompanionConfig::default());
        assert_eq!(config.credential.policy(), TokenPolicy::default());
        assert_eq!(config.follow_up.interval(), chrono::Duration::hours(24));
        assert_eq!(config.assistant.reply_delay(), Duration::from_millis(1_500));
        assert_eq!(config.symptoms.rules_path, None);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = CompanionConfig::from_toml_str(
            r#"
            [credential]
            simulated_latency_ms = 0

            [follow_up]
            check_in_interval_hours = 48
            "#,
        )
        .unwrap();
        assert_eq!(config.credential.simulated_latency(), Duration::ZERO);
        assert_eq!(config.credential.required_prefix, "gsk_");
        assert_eq!(config.follow_up.interval(), chrono::Duration::hours(48));
        assert_eq!(config.session.path, PathBuf::from("carelink-session.json"));
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let shipped = include_str!("../config/companion.toml");
        let config = CompanionConfig::from_toml_str(shipped).unwrap();
        assert_eq!(config.credential, CredentialConfig::default());
        assert_eq!(config.follow_up, FollowUpConfig::default());
        assert_eq!(config.assistant, AssistantConfig::default());
    }

    #[test]
    fn symptom_rules_can_be_overridden_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"[[conditions]]\nid = \"cramp\"\nlabel = \"Night cramps\"\nsymptoms = [\"Cramps\"]\n",
        )
        .unwrap();

        let config = SymptomsConfig { rules_path: Some(file.path().to_path_buf()) };
        let mut engine = config.engine().unwrap();
        engine.select_region("leftLeg").unwrap();
        engine.toggle_symptom("Cramps").unwrap();
        let labels: Vec<String> = engine.infer_conditions().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Night cramps".to_string()]);

        assert!(SymptomsConfig::default().engine().is_ok());
    }

    #[test]
    fn malformed_or_unworkable_config_is_rejected() {
        assert!(matches!(
            CompanionConfig::from_toml_str("[session\npath = 1"),
            Err(CareLinkError::ConfigError { .. })
        ));
        assert!(matches!(
            CompanionConfig::from_toml_str("[follow_up]\ncheck_in_interval_hours = 0"),
            Err(CareLinkError::ConfigError { .. })
        ));
        assert!(matches!(
            CompanionConfig::from_file(Path::new("/nonexistent/companion.toml")),
            Err(CareLinkError::ConfigError { .. })
        ));
    }
}
