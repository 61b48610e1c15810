use crate::domain::errors::AgendaError;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Hour and minute as typed by the user.
///
/// Values are not range checked: an hour of 25 rolls over into the next day
/// and an hour of -1 into the previous one once applied to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: i32,
    pub minute: i32,
}

impl TimeOfDay {
    pub fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }

    /// Builds a time from the two numeric text inputs
    pub fn from_inputs(hour: &str, minute: &str) -> Result<Self, AgendaError> {
        let hour_str = hour.trim();
        let minute_str = minute.trim();

        let parse = |s: &str| {
            s.parse::<i32>()
                .map_err(|_| AgendaError::InvalidTime(format!("{}:{}", hour_str, minute_str)))
        };

        Ok(Self::new(parse(hour_str)?, parse(minute_str)?))
    }

    /// Offset from midnight; out-of-range fields carry into the neighbouring unit
    pub fn since_midnight(&self) -> Duration {
        Duration::hours(i64::from(self.hour)) + Duration::minutes(i64::from(self.minute))
    }
}
