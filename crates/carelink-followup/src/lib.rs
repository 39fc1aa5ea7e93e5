//! # carelink-followup
//!
//! Recovery follow-up tracking for the CareLink companion.
//!
//! A [`FollowUpTracker`] owns the session's follow-up records. Users report
//! whether a condition has improved, stayed the same or worsened; each
//! report either schedules the next check-in one interval out or, after a
//! second consecutive improvement, resolves the record.
//!
//! Time comes from an injected [`carelink_core::traits::Clock`], so tests and
//! scenarios run against a `ManualClock`.

pub mod tracker;

pub use tracker::FollowUpTracker;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, TimeZone, Utc};

    use carelink_contracts::{
        error::CareLinkError,
        followup::{FollowUpRecord, FollowUpStatus},
    };
    use carelink_core::ManualClock;

    use super::FollowUpTracker;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap()
    }

    fn record(
        id: &str,
        label: &str,
        start: DateTime<Utc>,
        last: DateTime<Utc>,
        status: FollowUpStatus,
        next: Option<DateTime<Utc>>,
    ) -> FollowUpRecord {
        FollowUpRecord {
            id: id.into(),
            condition_label: label.into(),
            start_date: start,
            last_update_date: last,
            status,
            next_check_in: next,
            active: next.is_some(),
        }
    }

    fn seeds() -> Vec<FollowUpRecord> {
        vec![
            record("1", "Headache symptoms", at(15, 0), at(16, 0), FollowUpStatus::Same, Some(at(17, 0))),
            record("2", "Back pain recovery", at(10, 0), at(16, 0), FollowUpStatus::Improved, Some(at(18, 0))),
            record("3", "Cold symptoms", at(8, 0), at(12, 0), FollowUpStatus::Improved, None),
            record("4", "Sprained ankle", at(5, 0), at(14, 0), FollowUpStatus::Improved, None),
        ]
    }

    fn tracker() -> (FollowUpTracker, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(at(16, 12)));
        let tracker = FollowUpTracker::new(seeds(), clock.clone(), Duration::hours(24)).unwrap();
        (tracker, clock)
    }

    fn ids(records: Vec<&FollowUpRecord>) -> Vec<&str> {
        records.into_iter().map(|r| r.id.as_str()).collect()
    }

    // ── Seeding ───────────────────────────────────────────────────────────────

    #[test]
    fn active_seed_without_check_in_is_rejected() {
        let clock = Arc::new(ManualClock::new(at(16, 12)));
        let mut broken = seeds();
        broken[0].next_check_in = None;

        let result = FollowUpTracker::new(broken, clock, Duration::hours(24));
        assert!(matches!(result, Err(CareLinkError::ConfigError { .. })));
    }

    #[test]
    fn resolved_seed_with_check_in_is_rejected() {
        let clock = Arc::new(ManualClock::new(at(16, 12)));
        let mut broken = seeds();
        broken[2].next_check_in = Some(at(20, 0));

        let result = FollowUpTracker::new(broken, clock, Duration::hours(24));
        assert!(matches!(result, Err(CareLinkError::ConfigError { .. })));
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let clock = Arc::new(ManualClock::new(at(16, 12)));
        let mut broken = seeds();
        broken[3].id = "1".into();

        let result = FollowUpTracker::new(broken, clock, Duration::hours(24));
        assert!(matches!(result, Err(CareLinkError::ConfigError { .. })));
    }

    // ── Listing ───────────────────────────────────────────────────────────────

    #[test]
    fn active_list_is_soonest_check_in_first() {
        let (tracker, _) = tracker();
        assert_eq!(ids(tracker.list(true)), vec!["1", "2"]);
    }

    #[test]
    fn completed_list_is_most_recent_update_first() {
        let (tracker, _) = tracker();
        assert_eq!(ids(tracker.list(false)), vec!["4", "3"]);
    }

    #[test]
    fn update_reorders_the_active_list() {
        let (mut tracker, clock) = tracker();
        clock.set(at(18, 12));
        tracker.submit_update("1", FollowUpStatus::Same).unwrap();
        assert_eq!(ids(tracker.list(true)), vec!["2", "1"]);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let (tracker, _) = tracker();
        assert_eq!(
            tracker.get("99").unwrap_err(),
            CareLinkError::NotFound { kind: "follow-up", id: "99".into() }
        );
    }

    // ── Updates ───────────────────────────────────────────────────────────────

    #[test]
    fn same_status_schedules_next_check_in_one_interval_out() {
        let (mut tracker, _) = tracker();
        let updated = tracker.submit_update("1", FollowUpStatus::Same).unwrap().clone();

        assert!(updated.active);
        assert_eq!(updated.last_update_date, at(16, 12));
        assert_eq!(updated.next_check_in, Some(at(17, 12)));
    }

    #[test]
    fn second_consecutive_improvement_resolves() {
        let (mut tracker, _) = tracker();
        let updated = tracker.submit_update("2", FollowUpStatus::Improved).unwrap().clone();

        assert!(!updated.active);
        assert_eq!(updated.next_check_in, None);
        assert_eq!(updated.status, FollowUpStatus::Improved);
        assert_eq!(ids(tracker.list(true)), vec!["1"]);
        assert_eq!(ids(tracker.list(false)), vec!["2", "4", "3"]);
    }

    #[test]
    fn first_improvement_keeps_tracking() {
        let (mut tracker, clock) = tracker();
        let first = tracker.submit_update("1", FollowUpStatus::Improved).unwrap();
        assert!(first.active);
        assert_eq!(first.next_check_in, Some(at(17, 12)));

        clock.advance(Duration::hours(24));
        let second = tracker.submit_update("1", FollowUpStatus::Improved).unwrap();
        assert!(!second.active);
        assert_eq!(second.last_update_date, at(17, 12));
    }

    #[test]
    fn worsening_keeps_record_active() {
        let (mut tracker, _) = tracker();
        let updated = tracker.submit_update("2", FollowUpStatus::Worsened).unwrap();
        assert!(updated.active);
        assert_eq!(updated.status, FollowUpStatus::Worsened);
        assert_eq!(updated.next_check_in, Some(at(17, 12)));
    }

    #[test]
    fn unknown_id_fails_without_changes() {
        let (mut tracker, _) = tracker();
        let before = tracker.records().to_vec();
        assert!(matches!(
            tracker.submit_update("nope", FollowUpStatus::Same),
            Err(CareLinkError::NotFound { .. })
        ));
        assert_eq!(tracker.records(), before.as_slice());
    }

    #[test]
    fn resolved_record_rejects_updates() {
        let (mut tracker, _) = tracker();
        let before = tracker.get("3").unwrap().clone();
        assert!(matches!(
            tracker.submit_update("3", FollowUpStatus::Worsened),
            Err(CareLinkError::InvalidState { .. })
        ));
        assert_eq!(tracker.get("3").unwrap(), &before);
    }

    #[test]
    fn active_iff_next_check_in_holds_after_updates() {
        let (mut tracker, clock) = tracker();
        for status in [FollowUpStatus::Same, FollowUpStatus::Worsened, FollowUpStatus::Improved] {
            clock.advance(Duration::hours(3));
            let _ = tracker.submit_update("1", status);
            let _ = tracker.submit_update("2", status);
        }
        assert!(tracker.records().iter().all(|r| r.active == r.next_check_in.is_some()));
    }

    // ── Scheduling ────────────────────────────────────────────────────────────

    #[test]
    fn time_until_check_in_is_signed() {
        let (tracker, clock) = tracker();
        let headache = tracker.get("1").unwrap().clone();
        assert_eq!(tracker.time_until_next_check_in(&headache).unwrap(), Duration::hours(12));

        clock.advance(Duration::hours(24));
        assert_eq!(tracker.time_until_next_check_in(&headache).unwrap(), Duration::hours(-12));
    }

    #[test]
    fn time_until_check_in_of_inactive_record_is_invalid_state() {
        let (tracker, _) = tracker();
        let cold = tracker.get("3").unwrap();
        assert!(matches!(
            tracker.time_until_next_check_in(cold),
            Err(CareLinkError::InvalidState { .. })
        ));
    }

    #[test]
    fn due_lists_only_arrived_check_ins() {
        let (tracker, clock) = tracker();
        assert!(tracker.due().is_empty());

        clock.set(at(17, 6));
        assert_eq!(ids(tracker.due()), vec!["1"]);

        clock.set(at(19, 0));
        assert_eq!(ids(tracker.due()), vec!["1", "2"]);
    }
}
