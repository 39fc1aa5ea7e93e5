//! # carelink-contracts
//!
//! Shared types and contracts for the CareLink companion.
//!
//! Every crate in the workspace imports from here. No business logic lives in
//! this crate, only data definitions, the screen set, and the error type.

pub mod chat;
pub mod credential;
pub mod error;
pub mod followup;
pub mod language;
pub mod screen;
pub mod session;
pub mod symptom;
pub mod text;
