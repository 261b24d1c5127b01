use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

use crate::model::milestone::Milestone;
use crate::model::task::{Task, TaskStatus};
use crate::ops::ids::next_id;

/// ID prefix for the milestone collection
pub const ID_PREFIX: &str = "M";

/// Error type for milestone operations
#[derive(Debug, thiserror::Error)]
pub enum MilestoneError {
    #[error("milestone not found: {0}")]
    NotFound(String),
    #[error("milestone title must not be empty")]
    EmptyTitle,
    #[error("progress amount must be between 0 and 100, got {0}")]
    AmountOutOfRange(u8),
    #[error("milestone {0} is already completed")]
    AlreadyCompleted(String),
    #[error("milestone {0} is at {1}%; progress must reach 100 before completing")]
    ProgressIncomplete(String, u8),
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Add a milestone directly. Returns the assigned ID.
pub fn add_milestone(
    milestones: &mut Vec<Milestone>,
    title: &str,
    description: &str,
    due_date: NaiveDate,
) -> Result<String, MilestoneError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(MilestoneError::EmptyTitle);
    }
    let id = next_id(milestones.iter().map(|m| m.id.as_str()), ID_PREFIX);
    let mut milestone = Milestone::new(id.clone(), title.to_string(), due_date);
    milestone.description = description.trim().to_string();
    milestones.push(milestone);
    Ok(id)
}

/// Spawn the milestone for a freshly created long-horizon task, carrying the
/// task's title, description, and due date. Returns the milestone ID.
///
/// Callers are expected to check `task.timeframe.is_long_horizon()` first;
/// daily and weekly tasks never reach this.
pub fn spawn_for_task(milestones: &mut Vec<Milestone>, task: &Task) -> String {
    let id = next_id(milestones.iter().map(|m| m.id.as_str()), ID_PREFIX);
    let mut milestone = Milestone::new(id.clone(), task.title.clone(), task.due_date);
    milestone.description = task.description.clone();
    milestone.task_id = Some(task.id.clone());
    milestones.push(milestone);
    id
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Bump a milestone's progress by `amount`, clamping at 100.
/// Returns the new progress value.
pub fn bump_progress(
    milestones: &mut [Milestone],
    milestone_id: &str,
    amount: u8,
) -> Result<u8, MilestoneError> {
    if amount > 100 {
        return Err(MilestoneError::AmountOutOfRange(amount));
    }
    let milestone = find_milestone_mut(milestones, milestone_id)
        .ok_or_else(|| MilestoneError::NotFound(milestone_id.into()))?;
    if milestone.completed {
        return Err(MilestoneError::AlreadyCompleted(milestone_id.into()));
    }
    milestone.progress = milestone.progress.saturating_add(amount).min(100);
    Ok(milestone.progress)
}

/// Complete a milestone whose progress has reached 100.
///
/// Completion back-propagates: every task sharing the milestone's title that
/// is not yet completed (pending or missed) is marked completed with the
/// same instant. Returns the IDs of the tasks that were flipped.
pub fn complete_milestone(
    milestones: &mut [Milestone],
    milestone_id: &str,
    tasks: &mut [Task],
    now: DateTime<Utc>,
) -> Result<Vec<String>, MilestoneError> {
    let milestone = find_milestone_mut(milestones, milestone_id)
        .ok_or_else(|| MilestoneError::NotFound(milestone_id.into()))?;
    if milestone.completed {
        return Err(MilestoneError::AlreadyCompleted(milestone_id.into()));
    }
    if milestone.progress < 100 {
        return Err(MilestoneError::ProgressIncomplete(
            milestone_id.into(),
            milestone.progress,
        ));
    }
    milestone.completed = true;

    let mut flipped = Vec::new();
    for task in tasks.iter_mut() {
        if task.title == milestone.title && task.status != TaskStatus::Completed {
            task.status = TaskStatus::Completed;
            task.completed_date = Some(now);
            flipped.push(task.id.clone());
        }
    }
    Ok(flipped)
}

// ---------------------------------------------------------------------------
// Deletion and lookup
// ---------------------------------------------------------------------------

/// Remove a milestone from the store, returning it for reporting.
pub fn delete_milestone(
    milestones: &mut Vec<Milestone>,
    milestone_id: &str,
) -> Result<Milestone, MilestoneError> {
    let idx = milestones
        .iter()
        .position(|m| m.id == milestone_id)
        .ok_or_else(|| MilestoneError::NotFound(milestone_id.into()))?;
    Ok(milestones.remove(idx))
}

/// Find a milestone by ID.
pub fn find_milestone<'a>(milestones: &'a [Milestone], milestone_id: &str) -> Option<&'a Milestone> {
    milestones.iter().find(|m| m.id == milestone_id)
}

/// Find a milestone by ID, mutable.
pub fn find_milestone_mut<'a>(
    milestones: &'a mut [Milestone],
    milestone_id: &str,
) -> Option<&'a mut Milestone> {
    milestones.iter_mut().find(|m| m.id == milestone_id)
}

// ---------------------------------------------------------------------------
// Listing and derived figures
// ---------------------------------------------------------------------------

/// All milestones ordered ascending by due date. Ties keep store order.
pub fn sorted_by_due(milestones: &[Milestone]) -> Vec<&Milestone> {
    let mut out: Vec<&Milestone> = milestones.iter().collect();
    out.sort_by_key(|m| m.due_date);
    out
}

/// Completed milestones over total, as a percentage (0 when empty).
pub fn road_progress(milestones: &[Milestone]) -> f64 {
    if milestones.is_empty() {
        return 0.0;
    }
    let completed = milestones.iter().filter(|m| m.completed).count();
    completed as f64 / milestones.len() as f64 * 100.0
}

/// Time remaining until the start of a milestone's due day, split into
/// display units. All zeros once the due day has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn is_over(self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Compute the countdown to `due_date` at the wall-clock instant `now`.
pub fn countdown(due_date: NaiveDate, now: NaiveDateTime) -> Countdown {
    let target = due_date.and_time(NaiveTime::MIN);
    let remaining = target - now;
    let total_seconds = remaining.num_seconds();
    if total_seconds <= 0 {
        return Countdown {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        };
    }
    Countdown {
        days: total_seconds / 86_400,
        hours: total_seconds / 3_600 % 24,
        minutes: total_seconds / 60 % 60,
        seconds: total_seconds % 60,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
