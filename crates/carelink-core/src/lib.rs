//! # carelink-core
//!
//! The session hub of the CareLink companion.
//!
//! This crate provides:
//! - The collaborator traits (`SessionStore`, `ExternalVerifier`,
//!   `TranslationProvider`, `Clock`)
//! - The `Navigator`, a strict screen state machine resumed from the session
//! - The `CredentialGate`, a single-flight async token validator
//! - `DelayedTask`, cancellable simulated latency
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carelink_core::{CredentialGate, Navigator};
//!
//! let mut nav = Navigator::resume(store.clone());
//! nav.choose_language("hi")?;
//! let outcome = gate.submit(&token).await;
//! nav.accept_credential(outcome)?;
//! ```

pub mod clock;
pub mod gate;
pub mod navigator;
pub mod task;
pub mod traits;

pub use clock::{ManualClock, SystemClock};
pub use gate::{CredentialGate, TokenPolicy};
pub use navigator::Navigator;
pub use task::DelayedTask;
