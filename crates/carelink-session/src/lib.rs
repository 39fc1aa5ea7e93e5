//! # carelink-session
//!
//! `SessionStore` implementations for the CareLink companion.
//!
//! ## Overview
//!
//! The session is two string entries: the selected language code and the
//! credential-verified flag. [`InMemorySessionStore`] keeps them in a map;
//! [`FileSessionStore`] keeps them in a JSON document written atomically.
//! Both fail soft on load: anything unreadable is an empty session.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carelink_session::FileSessionStore;
//! use carelink_core::traits::SessionStore;
//!
//! let store = FileSessionStore::new("carelink-session.json");
//! store.save("hi")?;
//! assert_eq!(store.load().language_code.as_deref(), Some("hi"));
//! ```

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;

// ── Tests ─────────────────────────────────────────────────────────────────────
