use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's completion record for a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntry {
    pub date: NaiveDate,
    pub completed: bool,
}

/// A recurring habit with its dated completion log.
///
/// `streak` and `longest_streak` are derived from `entries` but stored, so
/// listings never recompute them; they are rebuilt on every entry toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Store-assigned ID like `H-002`
    pub id: String,
    /// Habit name
    pub name: String,
    /// Completion log, kept sorted descending by date
    #[serde(default)]
    pub entries: Vec<HabitEntry>,
    /// Consecutive completed entries counted from the most recent
    #[serde(default)]
    pub streak: u32,
    /// Running maximum streak ever reached
    #[serde(default)]
    pub longest_streak: u32,
}

impl Habit {
    /// Create a habit with an empty log
    pub fn new(id: String, name: String) -> Self {
        Habit {
            id,
            name,
            entries: Vec::new(),
            streak: 0,
            longest_streak: 0,
        }
    }
}
