//! Scenario 3: Follow-up Tracking
//!
//! Loads the seeded follow-ups at a fixed clock, reports how long until each
//! check-in, then records "same" for the headache and a second "improved" for
//! the back pain, which resolves it.

use std::sync::Arc;

use chrono::Duration;

use carelink_contracts::{
    error::CareLinkResult,
    followup::{FollowUpRecord, FollowUpStatus},
    text::TextKey,
};
use carelink_core::{traits::TranslationProvider, ManualClock};
use carelink_followup::FollowUpTracker;

use crate::{
    config::CompanionConfig,
    i18n::StaticTranslations,
    mock_data::{demo_now, follow_up_seeds},
};

fn status_key(status: FollowUpStatus) -> TextKey {
    match status {
        FollowUpStatus::Improved => TextKey::StatusImproved,
        FollowUpStatus::Same => TextKey::StatusSame,
        FollowUpStatus::Worsened => TextKey::StatusWorsened,
    }
}

fn describe_wait(wait: Duration) -> String {
    if wait < Duration::zero() {
        format!("overdue by {}h", -wait.num_hours())
    } else {
        format!("in {}h", wait.num_hours())
    }
}

fn print_lists(tracker: &FollowUpTracker, language: &str) -> CareLinkResult<()> {
    let t = StaticTranslations;
    let line = |r: &FollowUpRecord| {
        format!("{:<20} {:<12}", r.condition_label, t.text(language, status_key(r.status)))
    };

    println!("  Active:");
    for record in tracker.list(true) {
        let wait = tracker.time_until_next_check_in(record)?;
        println!("    {} next check-in {}", line(record), describe_wait(wait));
    }
    println!("  Completed:");
    for record in tracker.list(false) {
        println!("    {} last update {}", line(record), record.last_update_date.format("%Y-%m-%d"));
    }
    Ok(())
}

pub fn run_scenario(config: &CompanionConfig, language: &str) -> CareLinkResult<()> {
    println!("=== Scenario 3: Follow-up Tracking ===");
    println!();

    let t = StaticTranslations;
    let clock = Arc::new(ManualClock::new(demo_now()));
    let mut tracker = FollowUpTracker::new(follow_up_seeds(), clock, config.follow_up.interval())?;

    println!("  {} (now {})", t.text(language, TextKey::FollowUpTitle), demo_now().format("%Y-%m-%d %H:%M"));
    print_lists(&tracker, language)?;
    println!();

    for (id, status) in [("1", FollowUpStatus::Same), ("2", FollowUpStatus::Improved)] {
        let record = tracker.submit_update(id, status)?;
        let outcome = match record.next_check_in {
            Some(next) => format!("next check-in {}", next.format("%Y-%m-%d %H:%M")),
            None => "resolved".to_string(),
        };
        println!(
            "  {} '{}' → {}: {}",
            t.text(language, TextKey::SubmitUpdate),
            record.condition_label,
            t.text(language, status_key(status)),
            outcome
        );
    }
    println!();

    match tracker.submit_update("3", FollowUpStatus::Worsened) {
        Err(e) => println!("  Update on a resolved record → refused: {}", e),
        Ok(_) => println!("  Update on a resolved record → unexpectedly accepted"),
    }
    println!();

    print_lists(&tracker, language)?;
    println!();
    Ok(())
}
