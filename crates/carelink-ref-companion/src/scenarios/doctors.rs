//! Scenario 6: Doctor Portal
//!
//! Shows the doctor directory with availability, the appointments still
//! ahead of the demo clock, and prescriptions newest first.

use carelink_contracts::{error::CareLinkResult, text::TextKey};
use carelink_core::traits::TranslationProvider;

use crate::{
    doctors::{Availability, DoctorPortal},
    i18n::StaticTranslations,
    mock_data::demo_now,
};

pub fn run_scenario(language: &str) -> CareLinkResult<()> {
    println!("=== Scenario 6: Doctor Portal ===");
    println!();

    let portal = DoctorPortal::with_mock_data();
    let now = demo_now();
    println!("  {}", StaticTranslations.text(language, TextKey::DoctorPortalTitle));

    println!("  Doctors ({} available now):", portal.available_doctors().len());
    for doctor in portal.doctors() {
        let status = match doctor.availability {
            Availability::Online => "online",
            Availability::Busy => "busy",
        };
        println!("    {:<20} {:<18} {:<6} ★ {:.1}", doctor.name, doctor.specialty, status, doctor.rating);
    }
    println!();

    println!("  Upcoming appointments after {}:", now.format("%Y-%m-%d %H:%M"));
    for appointment in portal.upcoming_appointments(now) {
        println!(
            "    {}  {:<20} {}",
            appointment.scheduled_at.format("%Y-%m-%d %H:%M"),
            appointment.doctor,
            appointment.kind.label()
        );
    }
    println!();

    println!("  Prescriptions:");
    for prescription in portal.prescriptions() {
        println!(
            "    {}  {:<20} {:<21} {}",
            prescription.issued_on.format("%Y-%m-%d"),
            prescription.doctor,
            prescription.kind.label(),
            prescription.medicines.join(", ")
        );
    }
    println!();

    Ok(())
}
