//! Status transitions for booked appointments.
//!
//! Transitions follow a fixed table keyed by (current status, action).
//! `Completed`, `Cancelled` and `NoShow` are terminal.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

use crate::error::{Result, SchedulingError};
use crate::models::{Appointment, AppointmentStatus};

/// Something a provider or patient does to an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAction {
    Confirm,
    Cancel,
    Complete,
    Reschedule,
    MarkNoShow,
    /// Put a rescheduled appointment back in the queue for confirmation.
    Reopen,
}

impl StatusAction {
    pub const ALL: [StatusAction; 6] = [
        StatusAction::Confirm,
        StatusAction::Cancel,
        StatusAction::Complete,
        StatusAction::Reschedule,
        StatusAction::MarkNoShow,
        StatusAction::Reopen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusAction::Confirm => "confirm",
            StatusAction::Cancel => "cancel",
            StatusAction::Complete => "complete",
            StatusAction::Reschedule => "reschedule",
            StatusAction::MarkNoShow => "mark_no_show",
            StatusAction::Reopen => "reopen",
        }
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The status `action` leads to from `current`, if the move is allowed.
pub fn next_status(current: AppointmentStatus, action: StatusAction) -> Option<AppointmentStatus> {
    use crate::models::AppointmentStatus::*;
    use StatusAction::*;

    match (current, action) {
        (Pending, Confirm) => Some(Confirmed),
        (Pending | Confirmed | Rescheduled, Cancel) => Some(Cancelled),
        (Pending | Confirmed, Reschedule) => Some(Rescheduled),
        (Pending | Confirmed, MarkNoShow) => Some(NoShow),
        (Confirmed, Complete) => Some(Completed),
        (Rescheduled, Reopen) => Some(Pending),
        _ => None,
    }
}

pub fn is_terminal(status: AppointmentStatus) -> bool {
    allowed_actions(status).is_empty()
}

pub fn allowed_actions(current: AppointmentStatus) -> Vec<StatusAction> {
    StatusAction::ALL
        .iter()
        .copied()
        .filter(|action| next_status(current, *action).is_some())
        .collect()
}

pub fn transition(current: AppointmentStatus, action: StatusAction) -> Result<AppointmentStatus> {
    next_status(current, action).ok_or(SchedulingError::InvalidTransition { from: current, action })
}

/// A copy of `appointment` after `action`. Identity and creation time are
/// kept; the input is left untouched.
pub fn apply(appointment: &Appointment, action: StatusAction) -> Result<Appointment> {
    let status = transition(appointment.status, action).inspect_err(|_| {
        warn!(id = %appointment.id, from = %appointment.status, %action, "rejected status change");
    })?;

    info!(id = %appointment.id, from = %appointment.status, to = %status, "status changed");
    Ok(Appointment {
        status,
        ..appointment.clone()
    })
}
