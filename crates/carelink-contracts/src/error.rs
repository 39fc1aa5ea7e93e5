//! Error types shared by every CareLink crate.
//!
//! All fallible operations in the workspace return `CareLinkResult<T>`.
//! Engine errors are plain values handed back to the presentation layer;
//! nothing in the core panics on bad user input.

use thiserror::Error;

use crate::screen::Screen;

/// The unified error type for the CareLink companion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CareLinkError {
    /// An id (body region, follow-up record, resource) is not in its catalog.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// The symptom is not a candidate of the currently selected body region.
    #[error("symptom '{symptom}' is not a candidate for region '{region}'")]
    InvalidSymptom { symptom: String, region: String },

    /// The target screen requires a verified credential and the session has none.
    #[error("screen {screen:?} requires a verified credential")]
    Unauthorized { screen: Screen },

    /// The target screen exists but cannot be reached from the current one.
    #[error("no transition from {from:?} to {to:?}")]
    IllegalTransition { from: Screen, to: Screen },

    /// The language code is not one of the supported languages.
    #[error("unsupported language code '{code}'")]
    UnknownLanguage { code: String },

    /// The operation does not apply to the entity's current lifecycle phase.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    /// An external collaborator (credential verifier) failed or was unreachable.
    ///
    /// The credential gate never lets this escape; it becomes an `Invalid`
    /// validation outcome.
    #[error("external service failure: {reason}")]
    ExternalFailure { reason: String },

    /// A configuration document or data asset is missing or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A durable session write could not be completed.
    #[error("session storage error: {reason}")]
    StorageError { reason: String },
}

/// Convenience alias used throughout the CareLink crates.
pub type CareLinkResult<T> = Result<T, CareLinkError>;
