use chrono::{Datelike, Duration, NaiveDate};

use crate::model::habit::{Habit, HabitEntry};
use crate::ops::ids::next_id;

/// ID prefix for the habit collection
pub const ID_PREFIX: &str = "H";

/// Error type for habit operations
#[derive(Debug, thiserror::Error)]
pub enum HabitError {
    #[error("habit not found: {0}")]
    NotFound(String),
    #[error("habit name must not be empty")]
    EmptyName,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// Add a habit with an empty log. Returns the assigned ID.
pub fn add_habit(habits: &mut Vec<Habit>, name: &str) -> Result<String, HabitError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitError::EmptyName);
    }
    let id = next_id(habits.iter().map(|h| h.id.as_str()), ID_PREFIX);
    habits.push(Habit::new(id.clone(), name.to_string()));
    Ok(id)
}

/// Remove a habit from the store, returning it for reporting.
pub fn delete_habit(habits: &mut Vec<Habit>, habit_id: &str) -> Result<Habit, HabitError> {
    let idx = habits
        .iter()
        .position(|h| h.id == habit_id)
        .ok_or_else(|| HabitError::NotFound(habit_id.into()))?;
    Ok(habits.remove(idx))
}

/// Find a habit by ID.
pub fn find_habit<'a>(habits: &'a [Habit], habit_id: &str) -> Option<&'a Habit> {
    habits.iter().find(|h| h.id == habit_id)
}

// ---------------------------------------------------------------------------
// Entry log and streaks
// ---------------------------------------------------------------------------

/// Toggle a date's completion: an unlogged date gains a completed entry, a
/// logged date flips. Streaks are rebuilt afterwards. Returns the entry's
/// new completed value.
pub fn log_entry(habits: &mut [Habit], habit_id: &str, date: NaiveDate) -> Result<bool, HabitError> {
    let habit = habits
        .iter_mut()
        .find(|h| h.id == habit_id)
        .ok_or_else(|| HabitError::NotFound(habit_id.into()))?;

    let completed = match habit.entries.iter_mut().find(|e| e.date == date) {
        Some(entry) => {
            entry.completed = !entry.completed;
            entry.completed
        }
        None => {
            habit.entries.push(HabitEntry {
                date,
                completed: true,
            });
            true
        }
    };
    recompute_streak(habit);
    Ok(completed)
}

/// Rebuild `streak` and `longest_streak` from the entry log.
///
/// The streak is the run of completed entries counted from the most recent
/// entry backwards, breaking on the first incomplete one. Gaps between
/// entry dates do not break the run; only a logged incomplete day does.
fn recompute_streak(habit: &mut Habit) {
    habit.entries.sort_by(|a, b| b.date.cmp(&a.date));
    let streak = habit
        .entries
        .iter()
        .take_while(|e| e.completed)
        .count() as u32;
    habit.streak = streak;
    habit.longest_streak = habit.longest_streak.max(streak);
}

// ---------------------------------------------------------------------------
// Derived figures
// ---------------------------------------------------------------------------

/// Percent of the last 30 days (ending today) with a completed entry,
/// rounded to the nearest integer.
pub fn recent_completion(habit: &Habit, today: NaiveDate) -> u8 {
    let window_start = today - Duration::days(30);
    let completed = habit
        .entries
        .iter()
        .filter(|e| e.completed && e.date > window_start && e.date <= today)
        .count();
    (completed as f64 / 30.0 * 100.0).round() as u8
}

/// Per-month completion rate for `year`: completed entries in the month
/// over the days in that month, as a percentage. Index 0 is January.
pub fn monthly_rates(habit: &Habit, year: i32) -> [f64; 12] {
    let mut rates = [0.0; 12];
    for (idx, rate) in rates.iter_mut().enumerate() {
        let month = idx as u32 + 1;
        let completed = habit
            .entries
            .iter()
            .filter(|e| e.completed && e.date.year() == year && e.date.month() == month)
            .count();
        *rate = completed as f64 / days_in_month(year, month) as f64 * 100.0;
    }
    rates
}

/// Per-year completion rate for the five years ending at `end_year`:
/// completed entries in the year over the days in that year, as a
/// percentage.
pub fn yearly_rates(habit: &Habit, end_year: i32) -> Vec<(i32, f64)> {
    (end_year - 4..=end_year)
        .map(|year| {
            let completed = habit
                .entries
                .iter()
                .filter(|e| e.completed && e.date.year() == year)
                .count();
            (year, completed as f64 / days_in_year(year) as f64 * 100.0)
        })
        .collect()
}

fn days_in_month(year: i32, month: u32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(a), Some(b)) => (b - a).num_days(),
        _ => 30,
    }
}

fn days_in_year(year: i32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let next = NaiveDate::from_ymd_opt(year + 1, 1, 1);
    match (first, next) {
        (Some(a), Some(b)) => (b - a).num_days(),
        _ => 365,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
