//! Aggregate counts over an appointment list for the dashboard header.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentStats {
    pub total: usize,
    /// Only statuses that actually occur have an entry.
    pub by_status: BTreeMap<AppointmentStatus, usize>,
    pub today: usize,
    pub week: usize,
}

impl AppointmentStats {
    pub fn count(&self, status: AppointmentStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn pending(&self) -> usize {
        self.count(AppointmentStatus::Pending)
    }

    pub fn cancelled(&self) -> usize {
        self.count(AppointmentStatus::Cancelled)
    }
}

/// First and last day of the Sunday-to-Saturday week containing `day`,
/// clamped to the representable date range.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day
        .checked_sub_signed(Duration::days(i64::from(day.weekday().num_days_from_sunday())))
        .unwrap_or(NaiveDate::MIN);
    let end = start.checked_add_signed(Duration::days(6)).unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// Statistics relative to today's local date.
pub fn compute_statistics(appointments: &[Appointment]) -> AppointmentStats {
    compute_statistics_on(appointments, Local::now().date_naive())
}

pub fn compute_statistics_on(appointments: &[Appointment], today: NaiveDate) -> AppointmentStats {
    let (week_start, week_end) = week_bounds(today);
    let mut stats = AppointmentStats::default();

    for apt in appointments {
        stats.total += 1;
        *stats.by_status.entry(apt.status).or_insert(0) += 1;
        if apt.date == today {
            stats.today += 1;
        }
        if apt.date >= week_start && apt.date <= week_end {
            stats.week += 1;
        }
    }

    stats
}
