//! Body-diagram and condition-inference types.

use serde::{Deserialize, Serialize};

/// Position of a region marker on the body diagram, both axes in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

/// A selectable zone of the body diagram and the symptoms offered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyRegion {
    /// Stable identifier, e.g. "head", "leftArm".
    pub id: String,
    /// English display name.
    pub display_name: String,
    pub position: Position,
    /// Ordered candidate symptoms. A symptom selection is always a subset.
    pub candidate_symptoms: Vec<String>,
}

impl BodyRegion {
    pub fn offers(&self, symptom: &str) -> bool {
        self.candidate_symptoms.iter().any(|s| s == symptom)
    }
}

/// A condition suggested by the inference engine. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionCandidate {
    pub label: String,
    /// How many selected symptoms appear in the condition's rule.
    pub supporting_symptom_count: usize,
}
