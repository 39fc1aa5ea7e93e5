//! `FollowUpTracker`: recovery records, status updates and check-in scheduling.

use std::{collections::HashSet, sync::Arc};

use chrono::Duration;
use tracing::{debug, info};

use carelink_contracts::{
    error::{CareLinkError, CareLinkResult},
    followup::{FollowUpRecord, FollowUpStatus},
};
use carelink_core::traits::Clock;

/// Holds every follow-up record for the session.
///
/// Records are never removed. A record resolves (goes inactive) when the
/// user reports `Improved` on a record that was already `Improved`: two
/// consecutive improvements close it out. Any other update keeps it active
/// and schedules the next check-in one interval from now.
pub struct FollowUpTracker {
    records: Vec<FollowUpRecord>,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl FollowUpTracker {
    /// Take ownership of seeded records.
    ///
    /// Returns `ConfigError` when an id repeats or a record is active without
    /// a scheduled check-in (or resolved with one).
    pub fn new(
        records: Vec<FollowUpRecord>,
        clock: Arc<dyn Clock>,
        interval: Duration,
    ) -> CareLinkResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CareLinkError::ConfigError {
                    reason: format!("duplicate follow-up id '{}'", record.id),
                });
            }
            if record.active != record.next_check_in.is_some() {
                return Err(CareLinkError::ConfigError {
                    reason: format!(
                        "follow-up '{}' is {} but {} a next check-in",
                        record.id,
                        if record.active { "active" } else { "resolved" },
                        if record.active { "lacks" } else { "still has" },
                    ),
                });
            }
        }
        Ok(Self { records, clock, interval })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// All records in storage order.
    pub fn records(&self) -> &[FollowUpRecord] {
        &self.records
    }

    /// Active records soonest-due first, or completed records most recently
    /// updated first.
    pub fn list(&self, active: bool) -> Vec<&FollowUpRecord> {
        let mut out: Vec<&FollowUpRecord> =
            self.records.iter().filter(|r| r.active == active).collect();
        if active {
            out.sort_by_key(|r| r.next_check_in);
        } else {
            out.sort_by(|a, b| b.last_update_date.cmp(&a.last_update_date));
        }
        out
    }

    pub fn get(&self, id: &str) -> CareLinkResult<&FollowUpRecord> {
        self.records.iter().find(|r| r.id == id).ok_or_else(|| not_found(id))
    }

    /// Record a new status for `id`.
    ///
    /// `NotFound` for unknown ids, `InvalidState` for records that have
    /// already resolved. Nothing changes on failure.
    pub fn submit_update(&mut self, id: &str, status: FollowUpStatus) -> CareLinkResult<&FollowUpRecord> {
        let now = self.clock.now();
        let interval = self.interval;
        let record = self.records.iter_mut().find(|r| r.id == id).ok_or_else(|| not_found(id))?;

        if !record.active {
            return Err(CareLinkError::InvalidState {
                reason: format!("follow-up '{}' is already resolved", id),
            });
        }

        let resolved =
            status == FollowUpStatus::Improved && record.status == FollowUpStatus::Improved;

        record.status = status;
        record.last_update_date = now;
        if resolved {
            record.active = false;
            record.next_check_in = None;
            info!(id, condition = %record.condition_label, "follow-up resolved");
        } else {
            record.next_check_in = Some(now + interval);
            debug!(id, ?status, next = ?record.next_check_in, "follow-up updated");
        }
        Ok(&*record)
    }

    /// Signed time until the record's next check-in. Negative when overdue.
    pub fn time_until_next_check_in(&self, record: &FollowUpRecord) -> CareLinkResult<Duration> {
        match (record.active, record.next_check_in) {
            (true, Some(due)) => Ok(due - self.clock.now()),
            _ => Err(CareLinkError::InvalidState {
                reason: format!("follow-up '{}' has no upcoming check-in", record.id),
            }),
        }
    }

    /// Active records whose check-in time has arrived.
    pub fn due(&self) -> Vec<&FollowUpRecord> {
        let now = self.clock.now();
        self.list(true)
            .into_iter()
            .filter(|r| r.next_check_in.is_some_and(|due| due <= now))
            .collect()
    }
}

fn not_found(id: &str) -> CareLinkError {
    CareLinkError::NotFound { kind: "follow-up", id: id.to_string() }
}
