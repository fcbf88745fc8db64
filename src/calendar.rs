//! Free-slot generation for a provider's working day.
//!
//! The working day is cut into equal consecutive slots from opening time,
//! skipping the break and anything an existing appointment already holds.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::has_conflict;
use crate::error::{Result, SchedulingError};
use crate::models::{hhmm, Appointment, TimeWindow};

/// A daily pause during which nothing is booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

/// Opening hours for one day, with an optional break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkingHours {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub lunch_break: Option<BreakWindow>,
}

impl Default for WorkingHours {
    fn default() -> Self {
        WorkingHours {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            lunch_break: Some(BreakWindow {
                start: NaiveTime::from_hms_opt(13, 0, 0).unwrap_or_default(),
                end: NaiveTime::from_hms_opt(14, 0, 0).unwrap_or_default(),
            }),
        }
    }
}

impl WorkingHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        WorkingHours {
            start,
            end,
            lunch_break: None,
        }
    }

    pub fn with_break(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.lunch_break = Some(BreakWindow { start, end });
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.end <= self.start {
            return Err(SchedulingError::validation("Working hours must end after they start"));
        }
        if let Some(pause) = self.lunch_break {
            if pause.end <= pause.start {
                return Err(SchedulingError::validation("Break must end after it starts"));
            }
            if pause.start < self.start || pause.end > self.end {
                return Err(SchedulingError::validation("Break must fall inside working hours"));
            }
        }
        Ok(())
    }

    fn overlaps_break(&self, start: NaiveTime, end: NaiveTime) -> bool {
        match self.lunch_break {
            Some(pause) => start < pause.end && end > pause.start,
            None => false,
        }
    }

    /// Every slot of `slot_minutes` in the working day, ignoring bookings.
    pub fn daily_slots(&self, date: NaiveDate, slot_minutes: u32) -> Result<Vec<TimeWindow>> {
        self.validate()?;
        if slot_minutes == 0 {
            return Err(SchedulingError::validation("Slot length must be positive"));
        }

        let step = Duration::minutes(i64::from(slot_minutes));
        let end = date.and_time(self.end);
        let mut current = date.and_time(self.start);
        let mut slots = Vec::new();

        while let Some(slot_end) = current.checked_add_signed(step).filter(|e| *e <= end) {
            if !self.overlaps_break(current.time(), slot_end.time()) {
                slots.push(TimeWindow {
                    start: current,
                    end: slot_end,
                });
            }
            current = slot_end;
        }

        Ok(slots)
    }
}

/// Slots on `date` that are inside working hours and not held by any
/// appointment in `existing`.
pub fn available_slots(
    existing: &[Appointment],
    date: NaiveDate,
    hours: &WorkingHours,
    slot_minutes: u32,
) -> Result<Vec<TimeWindow>> {
    let slots: Vec<TimeWindow> = hours
        .daily_slots(date, slot_minutes)?
        .into_iter()
        .filter(|slot| !has_conflict(existing, date, slot.start.time(), slot_minutes))
        .collect();

    debug!(%date, free = slots.len(), "computed available slots");
    Ok(slots)
}

/// The free slot whose start is closest to `preferred`. Ties go to the
/// earlier slot.
pub fn nearest_available_slot(
    existing: &[Appointment],
    date: NaiveDate,
    preferred: NaiveTime,
    hours: &WorkingHours,
    slot_minutes: u32,
) -> Result<Option<TimeWindow>> {
    let wanted = date.and_time(preferred);
    let slots = available_slots(existing, date, hours, slot_minutes)?;

    Ok(slots
        .into_iter()
        .min_by_key(|slot| ((slot.start - wanted).num_seconds().abs(), slot.start)))
}
