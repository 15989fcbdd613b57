//! Attendance status vocabulary and admission rules.
//!
//! An attendance record covers one (employee, date) pair. Uniqueness of that
//! pair is enforced by the store; the rules here cover everything that can
//! be decided from the candidate record alone.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Presence status of an employee for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
}

impl AttendanceStatus {
    /// Stable identifier as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::HalfDay => "half_day",
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::HalfDay => "Half Day",
        }
    }

    /// Parse a stored status string. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            "late" => Some(Self::Late),
            "half_day" => Some(Self::HalfDay),
            _ => None,
        }
    }
}

/// Check the conditional-requirement rule for an attendance candidate.
///
/// A `present` record must carry a check-in time. Check-out before check-in
/// is deliberately admitted here: the pair is interpreted as an overnight
/// shift by [`crate::timesheet::hours_worked`], not treated as a data-entry
/// error.
pub fn validate_times(
    status: AttendanceStatus,
    check_in_time: Option<NaiveTime>,
) -> Result<(), CoreError> {
    if status == AttendanceStatus::Present && check_in_time.is_none() {
        return Err(CoreError::Validation(
            "Check-in time is required for present status".into(),
        ));
    }
    Ok(())
}
