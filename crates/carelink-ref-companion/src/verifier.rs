//! Stand-in for the remote token check.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use carelink_contracts::error::CareLinkResult;
use carelink_core::{traits::ExternalVerifier, TokenPolicy};

/// Waits out a fixed latency, then accepts any token that satisfies the
/// syntax policy. No network access.
#[derive(Debug, Clone)]
pub struct SimulatedVerifier {
    policy: TokenPolicy,
    latency: Duration,
}

impl SimulatedVerifier {
    pub fn new(policy: TokenPolicy, latency: Duration) -> Self {
        Self { policy, latency }
    }
}

#[async_trait]
impl ExternalVerifier for SimulatedVerifier {
    async fn verify(&self, token: &str) -> CareLinkResult<bool> {
        tokio::time::sleep(self.latency).await;
        let accepted = self.policy.accepts(token);
        debug!(accepted, latency_ms = self.latency.as_millis() as u64, "simulated verification");
        Ok(accepted)
    }
}
