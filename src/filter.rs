//! Search and filter over an appointment list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Appointment, AppointmentStatus, AppointmentType, Priority};

/// Search criteria. Unset fields match everything; set fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppointmentFilter {
    /// Case-insensitive substring of the patient name or the reason.
    pub query: Option<String>,
    pub status: Option<AppointmentStatus>,
    #[serde(rename = "type")]
    pub appointment_type: Option<AppointmentType>,
    pub priority: Option<Priority>,
}

impl AppointmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn appointment_type(mut self, appointment_type: AppointmentType) -> Self {
        self.appointment_type = Some(appointment_type);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn matches(&self, apt: &Appointment) -> bool {
        let query_ok = match self.normalized_query() {
            Some(needle) => {
                apt.patient_name.to_lowercase().contains(&needle) || apt.reason.to_lowercase().contains(&needle)
            }
            None => true,
        };

        query_ok
            && self.status.map_or(true, |s| apt.status == s)
            && self.appointment_type.map_or(true, |t| apt.appointment_type == t)
            && self.priority.map_or(true, |p| apt.priority == p)
    }

    fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

/// Appointments matching `filter`, in their original order.
pub fn filter_appointments<'a>(appointments: &'a [Appointment], filter: &AppointmentFilter) -> Vec<&'a Appointment> {
    appointments.iter().filter(|apt| filter.matches(apt)).collect()
}

/// Appointments on `date`, earliest first.
pub fn appointments_on(appointments: &[Appointment], date: NaiveDate) -> Vec<&Appointment> {
    let mut day: Vec<&Appointment> = appointments.iter().filter(|apt| apt.date == date).collect();
    day.sort_by_key(|apt| apt.time);
    day
}
