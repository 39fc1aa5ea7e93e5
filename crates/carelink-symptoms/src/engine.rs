//! The symptom checker state: one selected region and a symptom selection.

use std::collections::BTreeSet;

use tracing::{debug, info};

use carelink_contracts::{
    error::{CareLinkError, CareLinkResult},
    symptom::{BodyRegion, ConditionCandidate},
};

use crate::{catalog::RegionCatalog, rule::RuleTable};

/// Tracks the region the user is examining and which of its symptoms they
/// have ticked, and turns that selection into ranked condition suggestions.
///
/// The selection is always a subset of the current region's candidates.
/// Choosing a region, even the same one again, starts a fresh selection.
#[derive(Debug, Clone)]
pub struct SymptomEngine {
    catalog: RegionCatalog,
    rules: RuleTable,
    current: Option<usize>,
    selection: BTreeSet<String>,
}

impl SymptomEngine {
    /// Pair a region catalog with a rule table, validating one against the other.
    pub fn new(catalog: RegionCatalog, rules: RuleTable) -> CareLinkResult<Self> {
        rules.validate(&catalog)?;
        info!(
            regions = catalog.regions().len(),
            conditions = rules.conditions.len(),
            "symptom engine ready"
        );
        Ok(Self { catalog, rules, current: None, selection: BTreeSet::new() })
    }

    /// The standard body diagram with the embedded rule table.
    pub fn standard() -> CareLinkResult<Self> {
        Self::new(RegionCatalog::standard(), RuleTable::embedded()?)
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn current_region(&self) -> Option<&BodyRegion> {
        self.current.map(|i| &self.catalog.regions()[i])
    }

    /// Make `id` the current region and clear the selection.
    ///
    /// An unknown id returns `NotFound` and leaves the state untouched.
    pub fn select_region(&mut self, id: &str) -> CareLinkResult<&BodyRegion> {
        let index = self.catalog.position_of(id).ok_or_else(|| CareLinkError::NotFound {
            kind: "body region",
            id: id.to_string(),
        })?;

        self.current = Some(index);
        self.selection.clear();
        debug!(region = id, "body region selected");
        Ok(&self.catalog.regions()[index])
    }

    /// Flip `symptom` in or out of the selection. Returns whether it is now
    /// selected.
    ///
    /// Fails with `InvalidState` when no region is selected and with
    /// `InvalidSymptom` when the current region does not offer the symptom.
    pub fn toggle_symptom(&mut self, symptom: &str) -> CareLinkResult<bool> {
        let region = self.current_region().ok_or_else(|| CareLinkError::InvalidState {
            reason: "select a body region before choosing symptoms".to_string(),
        })?;
        if !region.offers(symptom) {
            return Err(CareLinkError::InvalidSymptom {
                symptom: symptom.to_string(),
                region: region.id.clone(),
            });
        }

        let selected = if self.selection.remove(symptom) {
            false
        } else {
            self.selection.insert(symptom.to_string());
            true
        };
        debug!(symptom, selected, "symptom toggled");
        Ok(selected)
    }

    pub fn is_selected(&self, symptom: &str) -> bool {
        self.selection.contains(symptom)
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    /// Candidates of the current region whose name contains `term`,
    /// ignoring case. An empty term matches everything.
    pub fn search_symptoms(&self, term: &str) -> Vec<&str> {
        let needle = term.trim().to_lowercase();
        self.current_region()
            .map(|region| {
                region
                    .candidate_symptoms
                    .iter()
                    .filter(|s| s.to_lowercase().contains(&needle))
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ranked conditions for the current selection. Empty selection, empty result.
    pub fn infer_conditions(&self) -> Vec<ConditionCandidate> {
        self.rules.rank(&self.selection)
    }
}
