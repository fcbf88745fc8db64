//! Appointment book logic for a telemedicine practice.
//!
//! The crate decides whether a proposed booking collides with what is already
//! on the provider's calendar, builds the new appointment record, and derives
//! the counts, filters, reminders and free slots the front end displays. It
//! owns no storage: every operation works on a slice the caller passes in.

pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod lifecycle;
pub mod models;
pub mod reminder;
pub mod stats;

#[cfg(test)]
mod testing;

pub use calendar::{available_slots, nearest_available_slot, BreakWindow, WorkingHours};
pub use config::SchedulerConfig;
pub use engine::{create_appointment, create_appointment_at, find_conflicts, has_conflict};
pub use error::{Result, SchedulingError};
pub use filter::{appointments_on, filter_appointments, AppointmentFilter};
pub use lifecycle::StatusAction;
pub use models::{
    Appointment, AppointmentStatus, AppointmentType, NewAppointment, Priority, TimeWindow, ValidatedSlot,
};
pub use reminder::{derive_reminder, Reminder};
pub use stats::{compute_statistics, compute_statistics_on, AppointmentStats};
