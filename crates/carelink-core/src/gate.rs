//! The credential gate.
//!
//! Validation pipeline per submission:
//!
//!   claim (single-flight) → syntax policy → external verifier (with timeout)
//!   → mark session verified → settle state
//!
//! Only one validation runs at a time. A submission that arrives while
//! another is in flight returns `ValidationOutcome::Pending` immediately and
//! never reaches the verifier. Verifier errors and timeouts are logged and
//! reported as `Invalid`; they never escape the gate.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use carelink_contracts::credential::{GateState, ValidationOutcome};

use crate::traits::{ExternalVerifier, SessionStore};

/// Syntax rule a token must satisfy before the verifier is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPolicy {
    /// The token must be strictly longer than this many bytes.
    pub min_length: usize,
    /// The token must start with this prefix.
    pub required_prefix: String,
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self { min_length: 10, required_prefix: "gsk_".to_string() }
    }
}

impl TokenPolicy {
    pub fn accepts(&self, token: &str) -> bool {
        token.len() > self.min_length && token.starts_with(&self.required_prefix)
    }
}

/// Gates access to the main application behind a validated access token.
pub struct CredentialGate {
    policy: TokenPolicy,
    verifier: Arc<dyn ExternalVerifier>,
    store: Arc<dyn SessionStore>,
    verify_timeout: Duration,
    state: Mutex<GateState>,
}

impl CredentialGate {
    pub fn new(
        policy: TokenPolicy,
        verifier: Arc<dyn ExternalVerifier>,
        store: Arc<dyn SessionStore>,
        verify_timeout: Duration,
    ) -> Self {
        Self { policy, verifier, store, verify_timeout, state: Mutex::new(GateState::Idle) }
    }

    /// Current gate state.
    pub fn state(&self) -> GateState {
        *self.lock_state()
    }

    /// The user edited the token field. Clears a previous `Invalid` result.
    pub fn input_changed(&self) {
        let mut state = self.lock_state();
        if *state == GateState::Invalid {
            *state = GateState::Idle;
        }
    }

    /// Validate `raw_token`.
    ///
    /// On `Valid` the session store has already been marked verified, exactly
    /// once for the lifetime of the gate. If the returned future is dropped
    /// before it resolves, the gate returns to `Idle`.
    pub async fn submit(&self, raw_token: &str) -> ValidationOutcome {
        let token = raw_token.trim();

        {
            let mut state = self.lock_state();
            match *state {
                GateState::Validating => {
                    debug!("validation already in flight; submission rejected");
                    return ValidationOutcome::Pending;
                }
                GateState::Valid => return ValidationOutcome::Valid,
                GateState::Idle | GateState::Invalid => {}
            }
            if token.is_empty() {
                *state = GateState::Invalid;
                return ValidationOutcome::Invalid;
            }
            *state = GateState::Validating;
        }

        let mut flight = InFlight { gate: self, settled: false };
        let outcome = self.validate(token).await;
        flight.settle(outcome);
        outcome
    }

    async fn validate(&self, token: &str) -> ValidationOutcome {
        let fingerprint = fingerprint(token);

        if !self.policy.accepts(token) {
            info!(token = %fingerprint, "token rejected by syntax policy");
            return ValidationOutcome::Invalid;
        }

        let confirmed =
            match tokio::time::timeout(self.verify_timeout, self.verifier.verify(token)).await {
                Ok(Ok(confirmed)) => confirmed,
                Ok(Err(e)) => {
                    warn!(token = %fingerprint, error = %e, "verifier failed; treating token as invalid");
                    false
                }
                Err(_) => {
                    warn!(
                        token = %fingerprint,
                        timeout_ms = self.verify_timeout.as_millis() as u64,
                        "verifier timed out; treating token as invalid"
                    );
                    false
                }
            };

        if !confirmed {
            info!(token = %fingerprint, "token rejected by verifier");
            return ValidationOutcome::Invalid;
        }

        if let Err(e) = self.store.mark_verified() {
            warn!(token = %fingerprint, error = %e, "could not persist verified flag");
            return ValidationOutcome::Invalid;
        }

        info!(token = %fingerprint, "credential verified");
        ValidationOutcome::Valid
    }

    fn lock_state(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks the gate as validating for the lifetime of one submission.
///
/// Dropped unsettled (the caller abandoned the future) → back to `Idle`.
struct InFlight<'a> {
    gate: &'a CredentialGate,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(&mut self, outcome: ValidationOutcome) {
        *self.gate.lock_state() = match outcome {
            ValidationOutcome::Valid => GateState::Valid,
            ValidationOutcome::Invalid => GateState::Invalid,
            ValidationOutcome::Pending => GateState::Idle,
        };
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("validation abandoned before completion");
            *self.gate.lock_state() = GateState::Idle;
        }
    }
}

/// Short, non-reversible token identifier for logs. Raw tokens are never logged.
fn fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex::encode(&digest[..4])
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use carelink_contracts::{
        error::{CareLinkError, CareLinkResult},
        session::Session,
    };

    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct CountingStore {
        marks: AtomicUsize,
        fail: bool,
    }

    impl SessionStore for CountingStore {
        fn load(&self) -> Session {
            Session {
                language_code: Some("en".into()),
                credential_verified: self.marks.load(Ordering::SeqCst) > 0,
            }
        }
        fn save(&self, _language_code: &str) -> CareLinkResult<()> {
            Ok(())
        }
        fn mark_verified(&self) -> CareLinkResult<()> {
            if self.fail {
                return Err(CareLinkError::StorageError { reason: "read-only".into() });
            }
            self.marks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn clear(&self) -> CareLinkResult<()> {
            Ok(())
        }
    }

    enum Behaviour {
        Accept,
        Reject,
        Fail,
        Hang,
        /// Wait for `release` before accepting.
        Gated,
    }

    struct ScriptedVerifier {
        behaviour: Behaviour,
        calls: AtomicUsize,
        release: Notify,
    }

    impl ScriptedVerifier {
        fn new(behaviour: Behaviour) -> Arc<Self> {
            Arc::new(Self { behaviour, calls: AtomicUsize::new(0), release: Notify::new() })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ExternalVerifier for ScriptedVerifier {
        async fn verify(&self, _token: &str) -> CareLinkResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behaviour {
                Behaviour::Accept => Ok(true),
                Behaviour::Reject => Ok(false),
                Behaviour::Fail => {
                    Err(CareLinkError::ExternalFailure { reason: "connection refused".into() })
                }
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Ok(true)
                }
                Behaviour::Gated => {
                    self.release.notified().await;
                    Ok(true)
                }
            }
        }
    }

    const GOOD_TOKEN: &str = "gsk_0123456789abcdef";

    fn gate(
        verifier: &Arc<ScriptedVerifier>,
        store: &Arc<CountingStore>,
        timeout: Duration,
    ) -> CredentialGate {
        CredentialGate::new(
            TokenPolicy::default(),
            verifier.clone(),
            store.clone(),
            timeout,
        )
    }

    // ── Syntax policy ─────────────────────────────────────────────────────────

    #[test]
    fn policy_requires_length_and_prefix() {
        let policy = TokenPolicy::default();
        assert!(policy.accepts(GOOD_TOKEN));
        assert!(!policy.accepts("gsk_123456"), "exactly min_length is too short");
        assert!(policy.accepts("gsk_1234567"));
        assert!(!policy.accepts("sk_0123456789abcdef"));
    }

    // ── Outcomes ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn valid_token_marks_session_verified() {
        let verifier = ScriptedVerifier::new(Behaviour::Accept);
        let store = Arc::new(CountingStore::default());
        let gate = gate(&verifier, &store, Duration::from_secs(1));

        assert_eq!(gate.submit(GOOD_TOKEN).await, ValidationOutcome::Valid);
        assert_eq!(gate.state(), GateState::Valid);
        assert_eq!(store.marks.load(Ordering::SeqCst), 1);
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test]
    async fn malformed_token_never_reaches_verifier() {
        let verifier = ScriptedVerifier::new(Behaviour::Accept);
        let store = Arc::new(CountingStore::default());
        let gate = gate(&verifier, &store, Duration::from_secs(1));

        assert_eq!(gate.submit("not-a-key-at-all").await, ValidationOutcome::Invalid);
        assert_eq!(gate.submit("   ").await, ValidationOutcome::Invalid);
        assert_eq!(verifier.calls(), 0);
        assert_eq!(store.marks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn verifier_rejection_is_invalid_and_resettable() {
        let verifier = ScriptedVerifier::new(Behaviour::Reject);
        let store = Arc::new(CountingStore::default());
        let gate = gate(&verifier, &store, Duration::from_secs(1));

        assert_eq!(gate.submit(GOOD_TOKEN).await, ValidationOutcome::Invalid);
        assert_eq!(gate.state(), GateState::Invalid);

        gate.input_changed();
        assert_eq!(gate.state(), GateState::Idle);
    }

    #[tokio::test]
    async fn verifier_error_is_downgraded_to_invalid() {
        let verifier = ScriptedVerifier::new(Behaviour::Fail);
        let store = Arc::new(CountingStore::default());
        let gate = gate(&verifier, &store, Duration::from_secs(1));

        assert_eq!(gate.submit(GOOD_TOKEN).await, ValidationOutcome::Invalid);
        assert_eq!(store.marks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn verifier_timeout_is_invalid() {
        let verifier = ScriptedVerifier::new(Behaviour::Hang);
        let store = Arc::new(CountingStore::default());
        let gate = gate(&verifier, &store, Duration::from_millis(20));

        assert_eq!(gate.submit(GOOD_TOKEN).await, ValidationOutcome::Invalid);
        assert_eq!(gate.state(), GateState::Invalid);
    }

    #[tokio::test]
    async fn failed_verified_write_is_invalid() {
        let verifier = ScriptedVerifier::new(Behaviour::Accept);
        let store = Arc::new(CountingStore { marks: AtomicUsize::new(0), fail: true });
        let gate = gate(&verifier, &store, Duration::from_secs(1));

        assert_eq!(gate.submit(GOOD_TOKEN).await, ValidationOutcome::Invalid);
        assert_eq!(gate.state(), GateState::Invalid);
    }

    #[tokio::test]
    async fn valid_is_terminal() {
        let verifier = ScriptedVerifier::new(Behaviour::Accept);
        let store = Arc::new(CountingStore::default());
        let gate = gate(&verifier, &store, Duration::from_secs(1));

        gate.submit(GOOD_TOKEN).await;
        assert_eq!(gate.submit("garbage").await, ValidationOutcome::Valid);
        gate.input_changed();

        assert_eq!(gate.state(), GateState::Valid);
        assert_eq!(verifier.calls(), 1);
        assert_eq!(store.marks.load(Ordering::SeqCst), 1, "mark_verified exactly once");
    }

    // ── Single-flight ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn second_submission_while_pending_fails_fast() {
        let verifier = ScriptedVerifier::new(Behaviour::Gated);
        let store = Arc::new(CountingStore::default());
        let gate = Arc::new(gate(&verifier, &store, Duration::from_secs(5)));

        let first = {
            let gate = Arc::clone(&gate);
            tokio::spawn(async move { gate.submit(GOOD_TOKEN).await })
        };

        // Let the first submission reach the verifier.
        while verifier.calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert_eq!(gate.state(), GateState::Validating);

        assert_eq!(gate.submit("gsk_another_token_value").await, ValidationOutcome::Pending);
        assert_eq!(verifier.calls(), 1, "no second in-flight verification");

        verifier.release.notify_one();
        assert_eq!(first.await.unwrap(), ValidationOutcome::Valid);
        assert_eq!(store.marks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn abandoned_submission_returns_gate_to_idle() {
        let verifier = ScriptedVerifier::new(Behaviour::Hang);
        let store = Arc::new(CountingStore::default());
        let gate = gate(&verifier, &store, Duration::from_secs(60));

        let abandoned =
            tokio::time::timeout(Duration::from_millis(20), gate.submit(GOOD_TOKEN)).await;
        assert!(abandoned.is_err());
        assert_eq!(gate.state(), GateState::Idle);
    }

    // ── Fingerprint ───────────────────────────────────────────────────────────

    #[test]
    fn fingerprint_is_short_and_stable() {
        let a = fingerprint(GOOD_TOKEN);
        assert_eq!(a.len(), 8);
        assert_eq!(a, fingerprint(GOOD_TOKEN));
        assert_ne!(a, fingerprint("gsk_other_value_here"));
        assert!(!a.contains("gsk_"));
    }
}
