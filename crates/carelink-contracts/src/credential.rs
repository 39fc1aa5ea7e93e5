//! Credential validation outcomes and gate states.

use serde::{Deserialize, Serialize};

/// What a call to the credential gate reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// Another validation is still in flight; this submission was not run.
    Pending,
    /// The token passed the syntax rule and the external verifier, and the
    /// session has been marked verified.
    Valid,
    /// The token was rejected, or the verifier failed.
    Invalid,
}

/// Lifecycle of the credential gate for one session.
///
/// ```text
/// Idle ──submit──▶ Validating ──▶ Valid (terminal)
///                      │
///                      └──────▶ Invalid ──input changed──▶ Idle
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    #[default]
    Idle,
    Validating,
    Valid,
    Invalid,
}
