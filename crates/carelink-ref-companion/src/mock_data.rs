//! Simulated data for the CareLink reference companion.
//!
//! All data in this module is hardcoded and fictional. It stands in for the
//! follow-up history, doctor directory and content catalog a deployed
//! companion would load from its backend.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use carelink_contracts::followup::{FollowUpRecord, FollowUpStatus};

use crate::{
    doctors::{Appointment, AppointmentKind, Availability, Doctor, Prescription, PrescriptionKind},
    resources::Resource,
};

/// Access token the simulated verifier accepts.
pub const DEMO_TOKEN: &str = "gsk_demo_companion_key";

/// UTC instant from calendar parts. Out-of-range parts yield the epoch.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or_default()
}

/// The "current time" the scenarios run at, so their output is reproducible.
pub fn demo_now() -> DateTime<Utc> {
    at(2025, 1, 16, 12, 0)
}

// ── Follow-ups ────────────────────────────────────────────────────────────────

pub fn follow_up_seeds() -> Vec<FollowUpRecord> {
    vec![
        FollowUpRecord {
            id: "1".to_string(),
            condition_label: "Headache symptoms".to_string(),
            start_date: at(2025, 1, 15, 0, 0),
            last_update_date: at(2025, 1, 16, 0, 0),
            status: FollowUpStatus::Same,
            next_check_in: Some(at(2025, 1, 17, 0, 0)),
            active: true,
        },
        FollowUpRecord {
            id: "2".to_string(),
            condition_label: "Back pain recovery".to_string(),
            start_date: at(2025, 1, 10, 0, 0),
            last_update_date: at(2025, 1, 16, 0, 0),
            status: FollowUpStatus::Improved,
            next_check_in: Some(at(2025, 1, 18, 0, 0)),
            active: true,
        },
        FollowUpRecord {
            id: "3".to_string(),
            condition_label: "Cold symptoms".to_string(),
            start_date: at(2025, 1, 8, 0, 0),
            last_update_date: at(2025, 1, 12, 0, 0),
            status: FollowUpStatus::Improved,
            next_check_in: None,
            active: false,
        },
    ]
}

// ── Doctor portal ─────────────────────────────────────────────────────────────

pub fn doctors() -> Vec<Doctor> {
    let doctor = |id, name: &str, specialty: &str, availability, rating| Doctor {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
        availability,
        rating,
    };
    vec![
        doctor(1, "Dr. Sarah Johnson", "Cardiologist", Availability::Online, 4.9),
        doctor(2, "Dr. Michael Chen", "General Physician", Availability::Online, 4.8),
        doctor(3, "Dr. Emily Rodriguez", "Pediatrician", Availability::Busy, 4.9),
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            doctor: "Dr. Sarah Johnson".to_string(),
            scheduled_at: at(2025, 1, 18, 10, 0),
            kind: AppointmentKind::VideoConsultation,
        },
        Appointment {
            id: 2,
            doctor: "Dr. Michael Chen".to_string(),
            scheduled_at: at(2025, 1, 20, 14, 30),
            kind: AppointmentKind::FollowUp,
        },
    ]
}

pub fn prescriptions() -> Vec<Prescription> {
    vec![
        Prescription {
            id: 1,
            doctor: "Dr. Sarah Johnson".to_string(),
            issued_on: at(2025, 1, 15, 0, 0),
            medicines: vec!["Aspirin 75mg".to_string(), "Lisinopril 10mg".to_string()],
            kind: PrescriptionKind::DigitalPrescription,
        },
        Prescription {
            id: 2,
            doctor: "Dr. Michael Chen".to_string(),
            issued_on: at(2025, 1, 10, 0, 0),
            medicines: vec!["Amoxicillin 500mg".to_string(), "Paracetamol 650mg".to_string()],
            kind: PrescriptionKind::LabReport,
        },
    ]
}

// ── Medical resources ─────────────────────────────────────────────────────────

pub fn resources() -> Vec<Resource> {
    let article = |title: &str, summary: &str, topic: &str, read_minutes| Resource::Article {
        title: title.to_string(),
        summary: summary.to_string(),
        topic: topic.to_string(),
        read_minutes,
    };
    let video = |title: &str, duration_secs, topic: &str| Resource::Video {
        title: title.to_string(),
        duration_secs,
        topic: topic.to_string(),
    };
    let tip = |title: &str, description: &str, topic: &str| Resource::PreventiveTip {
        title: title.to_string(),
        description: description.to_string(),
        topic: topic.to_string(),
    };
    let faq = |question: &str, answer: &str| Resource::Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    };

    vec![
        article(
            "Understanding Heart Disease: Prevention and Treatment",
            "Comprehensive guide to cardiovascular health, risk factors, and preventive measures.",
            "Cardiology",
            5,
        ),
        article(
            "Diabetes Management: Diet and Lifestyle Tips",
            "Essential information about managing diabetes through proper nutrition and exercise.",
            "Endocrinology",
            7,
        ),
        article(
            "Mental Health: Recognizing Signs of Depression",
            "Learn to identify early warning signs and seek appropriate help for mental health.",
            "Psychology",
            6,
        ),
        video("Proper Hand Washing Technique", 204, "Hygiene"),
        video("Basic First Aid for Cuts and Wounds", 317, "First Aid"),
        video("Breathing Exercises for Stress Relief", 525, "Wellness"),
        tip(
            "Annual Health Checkup Checklist",
            "Essential screenings and tests to schedule each year for optimal health.",
            "General Health",
        ),
        tip(
            "Vaccination Schedule for Adults",
            "Stay up-to-date with recommended vaccines for disease prevention.",
            "Immunization",
        ),
        tip(
            "Cancer Screening Guidelines",
            "Age-appropriate screening recommendations for early cancer detection.",
            "Oncology",
        ),
        faq(
            "When should I see a doctor for a fever?",
            "Seek medical attention if fever exceeds 103°F (39.4°C), persists for more than 3 days, \
             or is accompanied by severe symptoms like difficulty breathing, chest pain, or confusion.",
        ),
        faq(
            "How often should I exercise for optimal health?",
            "The WHO recommends at least 150 minutes of moderate-intensity aerobic activity or 75 \
             minutes of vigorous-intensity activity per week, plus muscle-strengthening activities \
             twice a week.",
        ),
        faq(
            "What are the signs of a heart attack?",
            "Common signs include chest pain or discomfort, shortness of breath, nausea, \
             lightheadedness, and pain in arms, back, neck, jaw, or stomach. Call emergency \
             services immediately if you suspect a heart attack.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_up_seeds_keep_active_iff_scheduled() {
        let seeds = follow_up_seeds();
        assert_eq!(seeds.len(), 3);
        assert!(seeds.iter().all(|r| r.active == r.next_check_in.is_some()));
    }

    #[test]
    fn invalid_calendar_parts_fall_back_to_epoch() {
        assert_eq!(at(2025, 2, 30, 0, 0), DateTime::<Utc>::default());
        assert_eq!(demo_now().to_rfc3339(), "2025-01-16T12:00:00+00:00");
    }

    #[test]
    fn demo_token_passes_default_policy() {
        assert!(carelink_core::TokenPolicy::default().accepts(DEMO_TOKEN));
    }
}
