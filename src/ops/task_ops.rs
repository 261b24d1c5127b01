use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::model::task::{Task, TaskStatus, Timeframe};
use crate::ops::ids::next_id;
use crate::ops::sweep::is_past_cutoff;

/// ID prefix for the task collection
pub const ID_PREFIX: &str = "T";

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("priority must be between 1 and 10, got {0}")]
    PriorityOutOfRange(u8),
    #[error("task {0} is already {1}; only pending tasks can change status")]
    NotPending(String, &'static str),
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Add a task to the store. Returns the assigned ID.
///
/// The missed-cutoff is applied at creation time: a task whose due date is
/// already more than a day in the past is stored as missed, not pending.
pub fn add_task(
    tasks: &mut Vec<Task>,
    title: &str,
    description: &str,
    timeframe: Timeframe,
    priority: u8,
    due_date: NaiveDate,
    now: NaiveDateTime,
) -> Result<String, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    if !(1..=10).contains(&priority) {
        return Err(TaskError::PriorityOutOfRange(priority));
    }

    let id = next_id(tasks.iter().map(|t| t.id.as_str()), ID_PREFIX);
    let mut task = Task::new(id.clone(), title.to_string(), timeframe, priority, due_date);
    task.description = description.trim().to_string();
    if is_past_cutoff(due_date, now) {
        task.status = TaskStatus::Missed;
    }
    tasks.push(task);
    Ok(id)
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Direct status set. Only pending tasks may change status, and completing
/// one records the completion instant.
///
/// Setting the status a task already has is a no-op.
pub fn set_status(
    task: &mut Task,
    new_status: TaskStatus,
    now: DateTime<Utc>,
) -> Result<(), TaskError> {
    if task.status == new_status {
        return Ok(());
    }
    if task.status != TaskStatus::Pending {
        return Err(TaskError::NotPending(
            task.id.clone(),
            task.status.as_str(),
        ));
    }
    task.status = new_status;
    if new_status == TaskStatus::Completed {
        task.completed_date = Some(now);
    }
    Ok(())
}

/// Mark a task completed (user action).
pub fn complete_task(
    tasks: &mut [Task],
    task_id: &str,
    now: DateTime<Utc>,
) -> Result<(), TaskError> {
    let task = find_task_mut(tasks, task_id).ok_or_else(|| TaskError::NotFound(task_id.into()))?;
    set_status(task, TaskStatus::Completed, now)
}

/// Mark a task missed ahead of the sweep (user action).
pub fn miss_task(tasks: &mut [Task], task_id: &str, now: DateTime<Utc>) -> Result<(), TaskError> {
    let task = find_task_mut(tasks, task_id).ok_or_else(|| TaskError::NotFound(task_id.into()))?;
    set_status(task, TaskStatus::Missed, now)
}

// ---------------------------------------------------------------------------
// Deletion and lookup
// ---------------------------------------------------------------------------

/// Remove a task from the store, returning it for reporting.
pub fn delete_task(tasks: &mut Vec<Task>, task_id: &str) -> Result<Task, TaskError> {
    let idx = tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| TaskError::NotFound(task_id.into()))?;
    Ok(tasks.remove(idx))
}

/// Find a task by ID.
pub fn find_task<'a>(tasks: &'a [Task], task_id: &str) -> Option<&'a Task> {
    tasks.iter().find(|t| t.id == task_id)
}

/// Find a task by ID, mutable.
pub fn find_task_mut<'a>(tasks: &'a mut [Task], task_id: &str) -> Option<&'a mut Task> {
    tasks.iter_mut().find(|t| t.id == task_id)
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Whether a search pattern matches a task's title or description.
pub fn matches_task(task: &Task, re: &Regex) -> bool {
    re.is_match(&task.title) || re.is_match(&task.description)
}

/// Filter the store by status, timeframe, and search pattern, returning
/// references sorted ascending by priority (1 first). Ties keep store order.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    status: Option<TaskStatus>,
    timeframe: Option<Timeframe>,
    pattern: Option<&Regex>,
) -> Vec<&'a Task> {
    let mut out: Vec<&Task> = tasks
        .iter()
        .filter(|t| status.is_none_or(|s| t.status == s))
        .filter(|t| timeframe.is_none_or(|tf| t.timeframe == tf))
        .filter(|t| pattern.is_none_or(|re| matches_task(t, re)))
        .collect();
    out.sort_by_key(|t| t.priority);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
