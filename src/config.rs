//! Scheduler settings: booking-screen defaults with `CLINIC_*` environment overrides.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::calendar::{BreakWindow, WorkingHours};
use crate::error::{Result, SchedulingError};
use crate::models::parse_time;

/// Length of a new booking when the form leaves it untouched.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;
/// Reminders fire this many minutes before the appointment starts.
pub const DEFAULT_REMINDER_LEAD_MINUTES: u32 = 30;
pub const DEFAULT_SLOT_MINUTES: u32 = 30;

pub const ENV_DEFAULT_DURATION: &str = "CLINIC_DEFAULT_DURATION";
pub const ENV_SLOT_MINUTES: &str = "CLINIC_SLOT_MINUTES";
pub const ENV_REMINDER_LEAD: &str = "CLINIC_REMINDER_LEAD";
pub const ENV_HOURS_START: &str = "CLINIC_HOURS_START";
pub const ENV_HOURS_END: &str = "CLINIC_HOURS_END";
pub const ENV_BREAK_START: &str = "CLINIC_BREAK_START";
pub const ENV_BREAK_END: &str = "CLINIC_BREAK_END";

/// Tunables for a provider's appointment book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerConfig {
    pub default_duration: u32,
    pub slot_minutes: u32,
    pub reminder_lead_minutes: u32,
    pub working_hours: WorkingHours,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            default_duration: DEFAULT_DURATION_MINUTES,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            reminder_lead_minutes: DEFAULT_REMINDER_LEAD_MINUTES,
            working_hours: WorkingHours::default(),
        }
    }
}

impl SchedulerConfig {
    /// Defaults overridden by `CLINIC_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `CLINIC_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SchedulerConfig::default();

        if let Some(value) = lookup(ENV_DEFAULT_DURATION) {
            config.default_duration = parse_minutes(ENV_DEFAULT_DURATION, &value)?;
        }
        if let Some(value) = lookup(ENV_SLOT_MINUTES) {
            config.slot_minutes = parse_minutes(ENV_SLOT_MINUTES, &value)?;
        }
        if let Some(value) = lookup(ENV_REMINDER_LEAD) {
            config.reminder_lead_minutes = parse_u32(ENV_REMINDER_LEAD, &value)?;
        }
        if let Some(value) = lookup(ENV_HOURS_START) {
            config.working_hours.start = parse_clock(ENV_HOURS_START, &value)?;
        }
        if let Some(value) = lookup(ENV_HOURS_END) {
            config.working_hours.end = parse_clock(ENV_HOURS_END, &value)?;
        }

        match (lookup(ENV_BREAK_START), lookup(ENV_BREAK_END)) {
            (Some(start), Some(end)) => {
                config.working_hours.lunch_break = Some(BreakWindow {
                    start: parse_clock(ENV_BREAK_START, &start)?,
                    end: parse_clock(ENV_BREAK_END, &end)?,
                });
            }
            (None, None) => {}
            _ => {
                return Err(SchedulingError::Config(format!(
                    "{} and {} must be set together",
                    ENV_BREAK_START, ENV_BREAK_END
                )))
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_duration == 0 {
            return Err(SchedulingError::Config("default duration must be positive".into()));
        }
        if self.slot_minutes == 0 {
            return Err(SchedulingError::Config("slot length must be positive".into()));
        }
        self.working_hours
            .validate()
            .map_err(|e| SchedulingError::Config(e.to_string()))
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_log_filter() -> &'static str {
        "clinic_scheduler=info"
    }
}

fn parse_u32(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| SchedulingError::Config(format!("{} must be a whole number, got '{}'", key, value)))
}

fn parse_minutes(key: &str, value: &str) -> Result<u32> {
    match parse_u32(key, value)? {
        0 => Err(SchedulingError::Config(format!("{} must be positive", key))),
        minutes => Ok(minutes),
    }
}

fn parse_clock(key: &str, value: &str) -> Result<NaiveTime> {
    parse_time(value).map_err(|_| SchedulingError::Config(format!("{} must be HH:mm, got '{}'", key, value)))
}
