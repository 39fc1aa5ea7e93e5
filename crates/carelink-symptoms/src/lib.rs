//! # carelink-symptoms
//!
//! Body-region catalog and symptom-to-condition inference.
//!
//! The user picks a body region, ticks symptoms from that region's list, and
//! the engine suggests conditions. The suggestions come from a TOML rule
//! table (embedded by default, overridable from disk) that is checked against
//! the region catalog when the engine is built.
//!
//! Ranking is deterministic: conditions sharing at least one symptom with
//! the selection, ordered by overlap descending, ties in table order.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carelink_symptoms::SymptomEngine;
//!
//! let mut engine = SymptomEngine::standard()?;
//! engine.select_region("chest")?;
//! engine.toggle_symptom("Cough")?;
//! for c in engine.infer_conditions() {
//!     println!("{} ({})", c.label, c.supporting_symptom_count);
//! }
//! ```

pub mod catalog;
pub mod engine;
pub mod rule;

pub use catalog::RegionCatalog;
pub use engine::SymptomEngine;
pub use rule::{ConditionRule, RuleTable, EMBEDDED_RULES};

// ── Tests ─────────────────────────────────────────────────────────────────────
