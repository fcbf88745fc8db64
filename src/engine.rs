//! Conflict detection and appointment creation.
//!
//! Everything here is a pure decision over a caller-owned list: nothing is
//! stored, nothing is sent anywhere. The check is advisory, so whatever
//! service persists the appointment has to repeat it atomically.

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Result, SchedulingError};
use crate::models::{Appointment, AppointmentStatus, NewAppointment, TimeWindow};

/// Existing appointments whose window overlaps the candidate slot, in input
/// order. Only same-date appointments that still hold their slot count.
pub fn find_conflicts<'a>(
    existing: &'a [Appointment],
    date: NaiveDate,
    time: NaiveTime,
    duration: u32,
) -> Vec<&'a Appointment> {
    let candidate = TimeWindow::new(date, time, duration);

    existing
        .iter()
        .filter(|apt| apt.date == date && apt.status.holds_slot())
        .filter(|apt| candidate.overlaps_with(&apt.window()))
        .collect()
}

/// Whether booking `duration` minutes at `date` `time` would overlap an
/// existing appointment. Touching endpoints and zero-length slots never
/// conflict.
pub fn has_conflict(existing: &[Appointment], date: NaiveDate, time: NaiveTime, duration: u32) -> bool {
    !find_conflicts(existing, date, time, duration).is_empty()
}

/// Validate a booking and check it against `existing`, stamping it with the
/// current local time.
pub fn create_appointment(existing: &[Appointment], candidate: &NewAppointment) -> Result<Appointment> {
    create_appointment_at(existing, candidate, Local::now())
}

/// Same as [`create_appointment`] with an explicit creation time.
///
/// On success the returned appointment is `Pending` with a fresh id. It is
/// not added to `existing`; submitting it is up to the caller.
pub fn create_appointment_at(
    existing: &[Appointment],
    candidate: &NewAppointment,
    now: DateTime<Local>,
) -> Result<Appointment> {
    let slot = candidate.validate()?;

    let conflicts = find_conflicts(existing, slot.date, slot.time, slot.duration);
    if !conflicts.is_empty() {
        let conflicting_ids: Vec<String> = conflicts.iter().map(|apt| apt.id.clone()).collect();
        warn!(
            date = %slot.date,
            time = %slot.time,
            duration = slot.duration,
            conflicts = ?conflicting_ids,
            "rejected booking: slot already taken"
        );
        return Err(SchedulingError::Conflict {
            date: slot.date,
            time: slot.time,
            conflicting_ids,
        });
    }

    let appointment = Appointment {
        id: Uuid::new_v4().to_string(),
        patient_name: candidate.patient_name.trim().to_string(),
        reason: candidate.reason.trim().to_string(),
        date: slot.date,
        time: slot.time,
        duration: slot.duration,
        appointment_type: candidate.appointment_type,
        priority: candidate.priority,
        status: AppointmentStatus::Pending,
        notes: candidate
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        created_at: now,
    };

    info!(
        id = %appointment.id,
        window = %appointment.window(),
        priority = %appointment.priority,
        "appointment created"
    );
    debug!(checked = existing.len(), "no conflicts found");

    Ok(appointment)
}
