//! Reminder entries handed to the notification scheduler after a booking.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::models::{Appointment, TIME_FORMAT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub appointment_id: String,
    pub message: String,
    pub scheduled_for: NaiveDateTime,
}

impl Reminder {
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        now >= self.scheduled_for
    }
}

/// Reminder firing `lead_minutes` before the appointment starts, or at the
/// earliest representable instant if that is later.
pub fn derive_reminder(appointment: &Appointment, lead_minutes: u32) -> Reminder {
    Reminder {
        appointment_id: appointment.id.clone(),
        message: format!(
            "Reminder: Appointment with {} at {}",
            appointment.patient_name,
            appointment.time.format(TIME_FORMAT)
        ),
        scheduled_for: appointment
            .starts_at()
            .checked_sub_signed(Duration::minutes(i64::from(lead_minutes)))
            .unwrap_or(NaiveDateTime::MIN),
    }
}
