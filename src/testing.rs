//! Fixtures shared by the unit tests.

use chrono::{Local, TimeZone};

use crate::models::{parse_date, parse_time, Appointment, AppointmentStatus, AppointmentType, Priority};

pub fn booked(id: &str, date: &str, time: &str, duration: u32, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_name: format!("Patient {}", id),
        reason: "Checkup".to_string(),
        date: parse_date(date).unwrap(),
        time: parse_time(time).unwrap(),
        duration,
        appointment_type: AppointmentType::Regular,
        priority: Priority::Medium,
        status,
        notes: None,
        created_at: Local.with_ymd_and_hms(2024, 12, 1, 9, 0, 0).unwrap(),
    }
}
