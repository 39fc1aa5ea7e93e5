//! The navigation state machine.
//!
//! The navigator owns the current `Screen` and the `Session` it was resumed
//! from. Every transition goes through `check()`, which applies two gates in
//! order:
//!
//!   1. Verification: a screen other than Language/Credential is only
//!      reachable once the session holds a verified credential
//!      (`Unauthorized` otherwise).
//!   2. Adjacency: the pair (current, target) must be one of the edges below
//!      (`IllegalTransition` otherwise).
//!
//! ```text
//! Language ──▶ Credential ──▶ Dashboard ◀──▶ {SymptomChecker, Chat,
//!    ▲                           │            DoctorPortal, Resources,
//!    └──────── settings ─────────┘            FollowUp}
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use carelink_contracts::{
    credential::ValidationOutcome,
    error::{CareLinkError, CareLinkResult},
    language::Language,
    screen::Screen,
    session::Session,
};

use crate::traits::SessionStore;

/// Drives screen-to-screen navigation for one session.
pub struct Navigator {
    store: Arc<dyn SessionStore>,
    session: Session,
    current: Screen,
}

impl Navigator {
    /// Restore navigation from whatever the store holds.
    ///
    /// No language → Language; language but no credential → Credential;
    /// both → Dashboard.
    pub fn resume(store: Arc<dyn SessionStore>) -> Self {
        let session = store.load();
        let current = Self::initial_screen(&session);
        info!(
            screen = ?current,
            language = ?session.language_code,
            verified = session.credential_verified,
            "navigation resumed"
        );
        Self { store, session, current }
    }

    /// The screen a freshly started app shows for `session`.
    pub fn initial_screen(session: &Session) -> Screen {
        match (&session.language_code, session.credential_verified) {
            (None, _) => Screen::Language,
            (Some(_), false) => Screen::Credential,
            (Some(_), true) => Screen::Dashboard,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The selected language, if any.
    pub fn language(&self) -> Option<Language> {
        self.session.language()
    }

    /// Whether `target` is reachable right now, without moving.
    pub fn check(&self, target: Screen) -> CareLinkResult<()> {
        if target.requires_verification() && !self.session.credential_verified {
            return Err(CareLinkError::Unauthorized { screen: target });
        }
        if !is_edge(self.current, target) {
            return Err(CareLinkError::IllegalTransition { from: self.current, to: target });
        }
        if target == Screen::Credential && self.session.language_code.is_none() {
            return Err(CareLinkError::InvalidState {
                reason: "a language must be chosen before credential setup".to_string(),
            });
        }
        Ok(())
    }

    /// Move to `target` if the transition is legal; otherwise leave the
    /// current screen untouched and return why.
    pub fn go_to(&mut self, target: Screen) -> CareLinkResult<()> {
        if let Err(e) = self.check(target) {
            warn!(from = ?self.current, to = ?target, error = %e, "navigation refused");
            return Err(e);
        }
        debug!(from = ?self.current, to = ?target, "navigating");
        self.current = target;
        Ok(())
    }

    /// Language screen action: persist `code` and continue to Credential.
    ///
    /// The store write happens first; if it fails the session and screen are
    /// unchanged.
    pub fn choose_language(&mut self, code: &str) -> CareLinkResult<()> {
        if self.current != Screen::Language {
            return Err(CareLinkError::IllegalTransition {
                from: self.current,
                to: Screen::Credential,
            });
        }
        let language = Language::from_code(code)
            .ok_or_else(|| CareLinkError::UnknownLanguage { code: code.to_string() })?;

        self.store.save(language.code)?;
        self.session.language_code = Some(language.code.to_string());
        info!(language = language.code, "language selected");

        self.go_to(Screen::Credential)
    }

    /// Credential screen action: continue to the dashboard once the gate has
    /// reported `Valid`.
    ///
    /// The gate persists the verified flag itself. A `Valid` outcome is only
    /// honoured when the store agrees, so the navigator's session never runs
    /// ahead of what a restart would resume.
    pub fn accept_credential(&mut self, outcome: ValidationOutcome) -> CareLinkResult<()> {
        if self.current != Screen::Credential {
            return Err(CareLinkError::IllegalTransition {
                from: self.current,
                to: Screen::Dashboard,
            });
        }
        if outcome != ValidationOutcome::Valid {
            return Err(CareLinkError::Unauthorized { screen: Screen::Dashboard });
        }
        if !self.store.load().credential_verified {
            warn!("valid outcome reported but the stored session is unverified");
            return Err(CareLinkError::Unauthorized { screen: Screen::Dashboard });
        }
        self.session.credential_verified = true;
        self.go_to(Screen::Dashboard)
    }

    /// `onBack` from a feature screen.
    pub fn back(&mut self) -> CareLinkResult<()> {
        self.go_to(Screen::Dashboard)
    }

    /// Dashboard settings action: restart navigation at the Language screen.
    ///
    /// Nothing is cleared; the stored language and verified flag survive.
    pub fn open_settings(&mut self) -> CareLinkResult<()> {
        self.go_to(Screen::Language)
    }
}

/// The adjacency relation of the screen graph, ignoring verification.
fn is_edge(from: Screen, to: Screen) -> bool {
    match (from, to) {
        (Screen::Language, Screen::Credential) => true,
        (Screen::Credential, Screen::Dashboard) => true,
        (Screen::Dashboard, Screen::Language) => true,
        (Screen::Dashboard, target) => target.is_feature(),
        (origin, Screen::Dashboard) => origin.is_feature(),
        _ => false,
    }
}
