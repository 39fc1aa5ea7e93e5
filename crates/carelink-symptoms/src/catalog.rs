//! The body-diagram region catalog.

use std::collections::HashSet;

use carelink_contracts::{
    error::{CareLinkError, CareLinkResult},
    symptom::{BodyRegion, Position},
};

/// Read-only set of selectable body regions, in diagram order.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: Vec<BodyRegion>,
}

impl RegionCatalog {
    /// Build a catalog from arbitrary regions.
    ///
    /// Returns `ConfigError` when an id repeats, a position leaves the
    /// `[0, 100]` diagram, or a region offers no symptoms.
    pub fn new(regions: Vec<BodyRegion>) -> CareLinkResult<Self> {
        let mut seen = HashSet::new();
        for region in &regions {
            if !seen.insert(region.id.as_str()) {
                return Err(CareLinkError::ConfigError {
                    reason: format!("duplicate body region id '{}'", region.id),
                });
            }
            if region.position.x > 100 || region.position.y > 100 {
                return Err(CareLinkError::ConfigError {
                    reason: format!("body region '{}' is positioned off the diagram", region.id),
                });
            }
            if region.candidate_symptoms.is_empty() {
                return Err(CareLinkError::ConfigError {
                    reason: format!("body region '{}' offers no symptoms", region.id),
                });
            }
        }
        Ok(Self { regions })
    }

    /// The seven-region adult body diagram.
    pub fn standard() -> Self {
        let region = |id: &str, name: &str, x: u8, y: u8, symptoms: &[&str]| BodyRegion {
            id: id.to_string(),
            display_name: name.to_string(),
            position: Position { x, y },
            candidate_symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            regions: vec![
                region("head", "Head", 50, 15, &[
                    "Headache", "Dizziness", "Fever", "Nausea", "Vision problems",
                ]),
                region("chest", "Chest", 50, 35, &[
                    "Chest pain", "Shortness of breath", "Cough", "Heart palpitations",
                ]),
                region("abdomen", "Abdomen", 50, 55, &[
                    "Stomach pain", "Nausea", "Vomiting", "Bloating", "Loss of appetite",
                ]),
                region("leftArm", "Left Arm", 25, 40, &["Arm pain", "Numbness", "Swelling", "Weakness"]),
                region("rightArm", "Right Arm", 75, 40, &["Arm pain", "Numbness", "Swelling", "Weakness"]),
                region("leftLeg", "Left Leg", 40, 80, &["Leg pain", "Swelling", "Numbness", "Cramps"]),
                region("rightLeg", "Right Leg", 60, 80, &["Leg pain", "Swelling", "Numbness", "Cramps"]),
            ],
        }
    }

    pub fn regions(&self) -> &[BodyRegion] {
        &self.regions
    }

    pub fn get(&self, id: &str) -> Option<&BodyRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.id == id)
    }

    /// True if any region offers `symptom`.
    pub fn offers_anywhere(&self, symptom: &str) -> bool {
        self.regions.iter().any(|r| r.offers(symptom))
    }
}
