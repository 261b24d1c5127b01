use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::model::task::{Task, TaskStatus};

/// The moment after which a pending task counts as missed: the end of the
/// day *after* its due date, in local wall-clock time. A task due Tuesday
/// is missed from Thursday 00:00:00.
pub fn missed_cutoff(due_date: NaiveDate) -> NaiveDateTime {
    (due_date + Duration::days(1))
        .and_hms_opt(23, 59, 59)
        .unwrap_or(NaiveDateTime::MAX)
}

/// Whether a task due on `due_date` counts as missed at `now`.
pub fn is_past_cutoff(due_date: NaiveDate, now: NaiveDateTime) -> bool {
    now > missed_cutoff(due_date)
}

/// A task flipped (or about to be flipped) by the sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissedTask {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
}

/// Report from a missed-task sweep.
#[derive(Debug, Default, Serialize)]
pub struct SweepResult {
    /// Tasks flipped pending → missed, in store order
    pub missed: Vec<MissedTask>,
}

impl SweepResult {
    pub fn has_changes(&self) -> bool {
        !self.missed.is_empty()
    }
}

/// Flip every pending task past its cutoff to missed.
///
/// Idempotent: completed and already-missed tasks are never touched, so
/// running the sweep again at the same instant changes nothing.
pub fn sweep_missed(tasks: &mut [Task], now: NaiveDateTime) -> SweepResult {
    let mut result = SweepResult::default();
    for task in tasks.iter_mut() {
        if task.status == TaskStatus::Pending && is_past_cutoff(task.due_date, now) {
            task.status = TaskStatus::Missed;
            result.missed.push(MissedTask {
                id: task.id.clone(),
                title: task.title.clone(),
                due_date: task.due_date,
            });
        }
    }
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
