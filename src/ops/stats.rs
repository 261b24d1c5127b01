use indexmap::IndexMap;
use serde::Serialize;

use crate::model::task::{Task, TaskStatus, Timeframe};

/// Aggregate figures over the task store.
#[derive(Debug, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub missed: usize,
    /// completed / total as a percentage (0 when the store is empty)
    pub completion_rate: f64,
    /// Tasks per horizon bucket, in fixed order
    pub by_timeframe: IndexMap<String, usize>,
}

/// Histogram bucket for a timeframe. The three longest horizons fold into
/// a single "long-term" bucket.
fn bucket(timeframe: Timeframe) -> &'static str {
    match timeframe {
        Timeframe::Daily => "daily",
        Timeframe::Weekly => "weekly",
        Timeframe::Monthly => "monthly",
        Timeframe::Quarterly => "quarterly",
        Timeframe::Yearly => "yearly",
        Timeframe::ThreeYears | Timeframe::FiveYears | Timeframe::Lifelong => "long-term",
    }
}

const BUCKETS: [&str; 6] = [
    "daily",
    "weekly",
    "monthly",
    "quarterly",
    "yearly",
    "long-term",
];

/// Count tasks by status and horizon bucket.
///
/// Every bucket appears in the histogram even at zero, so reports and JSON
/// output have a fixed shape.
pub fn task_stats(tasks: &[Task]) -> TaskStats {
    let mut stats = TaskStats::default();
    for name in BUCKETS {
        stats.by_timeframe.insert(name.to_string(), 0);
    }

    for task in tasks {
        stats.total += 1;
        match task.status {
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::Completed => stats.completed += 1,
            TaskStatus::Missed => stats.missed += 1,
        }
        if let Some(count) = stats.by_timeframe.get_mut(bucket(task.timeframe)) {
            *count += 1;
        }
    }

    if stats.total > 0 {
        stats.completion_rate = stats.completed as f64 / stats.total as f64 * 100.0;
    }
    stats
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
