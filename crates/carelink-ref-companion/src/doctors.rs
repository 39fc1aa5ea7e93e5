//! Doctor portal: directory, appointments and prescriptions.
//!
//! Everything here is read-only mock data. Booking and live consultations
//! are out of scope.

use chrono::{DateTime, Utc};
use serde::Serialize;

use carelink_contracts::error::{CareLinkError, CareLinkResult};

use crate::mock_data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Online,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub availability: Availability,
    /// Patient rating out of 5.
    pub rating: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppointmentKind {
    VideoConsultation,
    FollowUp,
}

impl AppointmentKind {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentKind::VideoConsultation => "Video Consultation",
            AppointmentKind::FollowUp => "Follow-up",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub id: u32,
    pub doctor: String,
    pub scheduled_at: DateTime<Utc>,
    pub kind: AppointmentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrescriptionKind {
    DigitalPrescription,
    LabReport,
}

impl PrescriptionKind {
    pub fn label(self) -> &'static str {
        match self {
            PrescriptionKind::DigitalPrescription => "Digital Prescription",
            PrescriptionKind::LabReport => "Lab Reports",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prescription {
    pub id: u32,
    pub doctor: String,
    pub issued_on: DateTime<Utc>,
    pub medicines: Vec<String>,
    pub kind: PrescriptionKind,
}

/// Read-only view over the portal's three tabs.
#[derive(Debug, Clone)]
pub struct DoctorPortal {
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    prescriptions: Vec<Prescription>,
}

impl DoctorPortal {
    pub fn new(
        doctors: Vec<Doctor>,
        appointments: Vec<Appointment>,
        prescriptions: Vec<Prescription>,
    ) -> Self {
        Self { doctors, appointments, prescriptions }
    }

    pub fn with_mock_data() -> Self {
        Self::new(mock_data::doctors(), mock_data::appointments(), mock_data::prescriptions())
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn doctor(&self, id: u32) -> CareLinkResult<&Doctor> {
        self.doctors.iter().find(|d| d.id == id).ok_or_else(|| CareLinkError::NotFound {
            kind: "doctor",
            id: id.to_string(),
        })
    }

    /// Doctors who can take a consultation right now.
    pub fn available_doctors(&self) -> Vec<&Doctor> {
        self.doctors.iter().filter(|d| d.availability == Availability::Online).collect()
    }

    /// Appointments at or after `now`, soonest first.
    pub fn upcoming_appointments(&self, now: DateTime<Utc>) -> Vec<&Appointment> {
        let mut upcoming: Vec<&Appointment> =
            self.appointments.iter().filter(|a| a.scheduled_at >= now).collect();
        upcoming.sort_by_key(|a| a.scheduled_at);
        upcoming
    }

    /// Prescriptions, most recently issued first.
    pub fn prescriptions(&self) -> Vec<&Prescription> {
        let mut out: Vec<&Prescription> = self.prescriptions.iter().collect();
        out.sort_by(|a, b| b.issued_on.cmp(&a.issued_on));
        out
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn only_online_doctors_are_available() {
        let portal = DoctorPortal::with_mock_data();
        let names: Vec<&str> = portal.available_doctors().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Sarah Johnson", "Dr. Michael Chen"]);
        assert_eq!(portal.doctors().len(), 3);
    }

    #[test]
    fn upcoming_appointments_skip_the_past_and_sort_ascending() {
        let portal = DoctorPortal::with_mock_data();

        let before_both = Utc.with_ymd_and_hms(2025, 1, 17, 0, 0, 0).unwrap();
        let all: Vec<u32> = portal.upcoming_appointments(before_both).iter().map(|a| a.id).collect();
        assert_eq!(all, vec![1, 2]);

        let between = Utc.with_ymd_and_hms(2025, 1, 19, 0, 0, 0).unwrap();
        let later = portal.upcoming_appointments(between);
        assert_eq!(later.len(), 1);
        assert_eq!(later[0].doctor, "Dr. Michael Chen");
        assert_eq!(later[0].kind.label(), "Follow-up");
    }

    #[test]
    fn prescriptions_are_newest_first() {
        let portal = DoctorPortal::with_mock_data();
        let ids: Vec<u32> = portal.prescriptions().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let reversed = DoctorPortal::new(
            Vec::new(),
            Vec::new(),
            mock_data::prescriptions().into_iter().rev().collect(),
        );
        let ids: Vec<u32> = reversed.prescriptions().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn unknown_doctor_is_not_found() {
        let portal = DoctorPortal::with_mock_data();
        assert_eq!(portal.doctor(2).unwrap().specialty, "General Physician");
        assert!(matches!(portal.doctor(42), Err(CareLinkError::NotFound { .. })));
    }
}
