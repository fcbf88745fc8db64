use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::lifecycle::StatusAction;
use crate::models::AppointmentStatus;

/// Every failure the engine can report. All of them are recoverable by the
/// caller (re-prompt, pick another slot, refuse the action).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Time slot {date} {time} overlaps {} existing appointment(s)", .conflicting_ids.len())]
    Conflict {
        date: NaiveDate,
        time: NaiveTime,
        conflicting_ids: Vec<String>,
    },

    #[error("Cannot {action} an appointment that is {from}")]
    InvalidTransition {
        from: AppointmentStatus,
        action: StatusAction,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SchedulingError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        SchedulingError::Validation(message.into())
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, SchedulingError::Conflict { .. })
    }
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
