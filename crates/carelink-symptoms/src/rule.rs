//! Condition rule types and the TOML rule-table schema.
//!
//! A `RuleTable` is deserialized from TOML and holds an ordered list of
//! `ConditionRule`s. Declaration order is significant: it breaks ranking ties.
//!
//! Example:
//! ```toml
//! [[conditions]]
//! id = "bronchitis"
//! label = "Bronchitis"
//! symptoms = ["Cough", "Chest pain", "Shortness of breath"]
//! ```

use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use carelink_contracts::{
    error::{CareLinkError, CareLinkResult},
    symptom::ConditionCandidate,
};

use crate::catalog::RegionCatalog;

/// The rule table shipped with the crate.
pub const EMBEDDED_RULES: &str = include_str!("../rules/conditions.toml");

/// One condition and the symptoms that support it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRule {
    /// Stable identifier used in logs and validation errors.
    pub id: String,
    /// Label shown to the user.
    pub label: String,
    /// Supporting symptoms. Each must be offered by some body region.
    pub symptoms: Vec<String>,
}

impl ConditionRule {
    /// How many of this rule's symptoms are in `selection`.
    pub fn overlap(&self, selection: &BTreeSet<String>) -> usize {
        self.symptoms.iter().filter(|s| selection.contains(s.as_str())).count()
    }
}

/// The top-level structure deserialized from a TOML rule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTable {
    /// Ordered list of conditions. Earlier entries win ties.
    pub conditions: Vec<ConditionRule>,
}

impl RuleTable {
    /// Parse `s` as a TOML rule table.
    ///
    /// Returns `ConfigError` if the TOML is malformed or does not match the
    /// `RuleTable` schema. Call `validate` before use.
    pub fn from_toml_str(s: &str) -> CareLinkResult<Self> {
        toml::from_str(s).map_err(|e| CareLinkError::ConfigError {
            reason: format!("failed to parse condition rules TOML: {}", e),
        })
    }

    /// Read and parse the rule file at `path`.
    pub fn from_file(path: &Path) -> CareLinkResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CareLinkError::ConfigError {
            reason: format!("failed to read condition rules '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The rule table embedded in this crate.
    pub fn embedded() -> CareLinkResult<Self> {
        Self::from_toml_str(EMBEDDED_RULES)
    }

    /// Check the table against the region catalog.
    ///
    /// Rejects repeated condition ids, empty symptom lists, a symptom listed
    /// twice in one rule, and symptoms no region offers (such a symptom could
    /// never be selected, so the rule would be partly dead).
    pub fn validate(&self, catalog: &RegionCatalog) -> CareLinkResult<()> {
        let mut ids = HashSet::new();
        for rule in &self.conditions {
            if !ids.insert(rule.id.as_str()) {
                return Err(config_err(format!("duplicate condition id '{}'", rule.id)));
            }
            if rule.symptoms.is_empty() {
                return Err(config_err(format!("condition '{}' lists no symptoms", rule.id)));
            }
            let mut seen = HashSet::new();
            for symptom in &rule.symptoms {
                if !seen.insert(symptom.as_str()) {
                    return Err(config_err(format!(
                        "condition '{}' lists symptom '{}' twice",
                        rule.id, symptom
                    )));
                }
                if !catalog.offers_anywhere(symptom) {
                    return Err(config_err(format!(
                        "condition '{}' uses symptom '{}' that no body region offers",
                        rule.id, symptom
                    )));
                }
            }
        }
        Ok(())
    }

    /// Rank the conditions supported by `selection`.
    ///
    /// A condition qualifies when at least one of its symptoms is selected.
    /// Qualifying conditions are ordered by descending overlap; the sort is
    /// stable, so equal overlaps keep table order.
    pub fn rank(&self, selection: &BTreeSet<String>) -> Vec<ConditionCandidate> {
        let mut candidates: Vec<ConditionCandidate> = self
            .conditions
            .iter()
            .filter_map(|rule| {
                let overlap = rule.overlap(selection);
                (overlap > 0).then(|| ConditionCandidate {
                    label: rule.label.clone(),
                    supporting_symptom_count: overlap,
                })
            })
            .collect();

        candidates.sort_by(|a, b| b.supporting_symptom_count.cmp(&a.supporting_symptom_count));

        debug!(
            selected = selection.len(),
            candidates = candidates.len(),
            "ranked conditions"
        );
        candidates
    }
}

fn config_err(reason: String) -> CareLinkError {
    CareLinkError::ConfigError { reason }
}
