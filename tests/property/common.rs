use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
use clinic_scheduler::{Appointment, AppointmentStatus, AppointmentType, Priority};
use proptest::prelude::*;

pub fn day(offset: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 25).unwrap() + chrono::Duration::days(i64::from(offset))
}

/// Minutes past midnight to a clock time. `minute` must be below 1440.
pub fn clock(minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap()
}

pub fn existing(id: &str, date: NaiveDate, start_minute: u32, duration: u32) -> Appointment {
    existing_with(id, date, start_minute, duration, AppointmentStatus::Pending)
}

pub fn existing_with(
    id: &str,
    date: NaiveDate,
    start_minute: u32,
    duration: u32,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_name: format!("Patient {}", id),
        reason: "Checkup".to_string(),
        date,
        time: clock(start_minute),
        duration,
        appointment_type: AppointmentType::Regular,
        priority: Priority::Medium,
        status,
        notes: None,
        created_at: Local.with_ymd_and_hms(2024, 12, 1, 9, 0, 0).unwrap(),
    }
}

pub fn any_status() -> impl Strategy<Value = AppointmentStatus> {
    prop::sample::select(AppointmentStatus::ALL.to_vec())
}

/// A start minute and a positive duration, kept inside one day.
pub fn slot() -> impl Strategy<Value = (u32, u32)> {
    (0u32..1380).prop_flat_map(|start| (Just(start), 1u32..=(1440 - start).min(240)))
}
