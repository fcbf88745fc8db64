//! Data models for the appointment book.
//!
//! This module defines the records the engine reads and produces:
//! - AppointmentType, Priority, AppointmentStatus: closed vocabularies
//! - TimeWindow: a half-open `[start, end)` span on the provider's local clock
//! - Appointment: a booked entry as exchanged with the appointment service
//! - NewAppointment: the raw booking-form fields for a candidate appointment
//!
//! All dates and times are naive and interpreted as the provider's local time.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SchedulingError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Kind of visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    #[default]
    Regular,
    Emergency,
    FollowUp,
    Consultation,
    Procedure,
}

impl AppointmentType {
    pub const ALL: [AppointmentType; 5] = [
        AppointmentType::Regular,
        AppointmentType::Emergency,
        AppointmentType::FollowUp,
        AppointmentType::Consultation,
        AppointmentType::Procedure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::Regular => "regular",
            AppointmentType::Emergency => "emergency",
            AppointmentType::FollowUp => "follow_up",
            AppointmentType::Consultation => "consultation",
            AppointmentType::Procedure => "procedure",
        }
    }
}

/// Urgency levels, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

/// Where an appointment stands. New bookings always start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Rescheduled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
        AppointmentStatus::Rescheduled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Rescheduled => "rescheduled",
            AppointmentStatus::NoShow => "no_show",
        }
    }

    /// Whether an appointment in this status still occupies its time slot.
    pub fn holds_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

macro_rules! impl_vocabulary {
    ($ty:ident, $label:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = SchedulingError;

            fn from_str(value: &str) -> Result<Self> {
                let wanted = value.trim().to_lowercase();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let choices: Vec<&str> = $ty::ALL.iter().map(|v| v.as_str()).collect();
                        SchedulingError::validation(format!(
                            "Invalid {}: '{}'. Must be one of: {}",
                            $label,
                            value,
                            choices.join(", ")
                        ))
                    })
            }
        }
    };
}

impl_vocabulary!(AppointmentType, "appointment type");
impl_vocabulary!(Priority, "priority");
impl_vocabulary!(AppointmentStatus, "status");

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        SchedulingError::validation(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

/// Parse a 24-hour `HH:mm` time.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| {
        SchedulingError::validation(format!("Invalid time '{}', expected HH:mm", value))
    })
}

/// A half-open `[start, end)` span of local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// The window starting at `date` `time`. An end past the last
    /// representable instant is clamped to it.
    pub fn new(date: NaiveDate, time: NaiveTime, duration_minutes: u32) -> Self {
        let start = date.and_time(time);
        let end = start
            .checked_add_signed(Duration::minutes(i64::from(duration_minutes)))
            .unwrap_or(NaiveDateTime::MAX);
        TimeWindow { start, end }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if this window overlaps with another. Empty windows overlap
    /// nothing, and windows that only touch at an endpoint do not overlap.
    pub fn overlaps_with(&self, other: &TimeWindow) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.start < other.end && self.end > other.start
    }

    /// Check if an instant falls within this window.
    pub fn contains(&self, instant: &NaiveDateTime) -> bool {
        &self.start <= instant && instant < &self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.start.format(DATE_FORMAT),
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

/// A booked appointment, in the shape the appointment service exchanges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    #[serde(default)]
    pub reason: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub duration: u32,
    #[serde(rename = "type", default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Local>,
}

impl Appointment {
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.date, self.time, self.duration)
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Booking-form input for a candidate appointment, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_name: String,
    #[serde(default)]
    pub reason: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    #[serde(rename = "type", default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Default for NewAppointment {
    fn default() -> Self {
        NewAppointment {
            patient_name: String::new(),
            reason: String::new(),
            date: String::new(),
            time: String::new(),
            duration: crate::config::DEFAULT_DURATION_MINUTES,
            appointment_type: AppointmentType::default(),
            priority: Priority::default(),
            notes: None,
        }
    }
}

/// The parsed date, time and length of a candidate that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedSlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
}

impl ValidatedSlot {
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.date, self.time, self.duration)
    }
}

impl NewAppointment {
    pub fn new(patient_name: &str, date: &str, time: &str, duration: u32) -> Self {
        NewAppointment {
            patient_name: patient_name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            duration,
            ..NewAppointment::default()
        }
    }

    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = reason.to_string();
        self
    }

    pub fn with_type(mut self, appointment_type: AppointmentType) -> Self {
        self.appointment_type = appointment_type;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// Check required fields and parse the date and time.
    pub fn validate(&self) -> Result<ValidatedSlot> {
        if self.patient_name.trim().is_empty() {
            return Err(SchedulingError::validation("Patient name cannot be empty"));
        }
        if self.date.trim().is_empty() {
            return Err(SchedulingError::validation("Appointment date cannot be empty"));
        }
        if self.time.trim().is_empty() {
            return Err(SchedulingError::validation("Appointment time cannot be empty"));
        }
        if self.duration == 0 {
            return Err(SchedulingError::validation("Duration must be positive"));
        }

        Ok(ValidatedSlot {
            date: parse_date(&self.date)?,
            time: parse_time(&self.time)?,
            duration: self.duration,
        })
    }
}

/// Serde adapter for `HH:mm` times. Also accepts `HH:mm:ss` on input.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|_| de::Error::custom(format!("invalid time '{}', expected HH:mm", raw)))
    }
}
