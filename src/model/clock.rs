use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-day work clock state.
///
/// `seconds` accumulates closed sessions for `date` only; the counter
/// resets to zero the first time the clock is touched on a new day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// The day the counter belongs to
    pub date: NaiveDate,
    /// Seconds accumulated from closed sessions today
    #[serde(default)]
    pub seconds: u64,
    /// Total recorded at the most recent clock-out
    #[serde(default)]
    pub last_clock_out: u64,
    /// Instant of the open session's clock-in, if one is open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clocked_in_at: Option<DateTime<Utc>>,
}

impl Clock {
    /// A zeroed clock for the given day
    pub fn new(date: NaiveDate) -> Self {
        Clock {
            date,
            seconds: 0,
            last_clock_out: 0,
            clocked_in_at: None,
        }
    }

    /// Whether a session is currently open
    pub fn is_clocked_in(&self) -> bool {
        self.clocked_in_at.is_some()
    }
}
