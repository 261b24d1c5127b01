use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A long-horizon goal, spawned from a task whose timeframe is monthly or
/// longer, or created directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Store-assigned ID like `M-003`
    pub id: String,
    /// Milestone title (matches the originating task's title when spawned)
    pub title: String,
    /// Free-form details (may be empty)
    #[serde(default)]
    pub description: String,
    /// Calendar deadline
    pub due_date: NaiveDate,
    /// Whether the milestone has been completed
    #[serde(default)]
    pub completed: bool,
    /// Progress toward completion, 0–100 (absent in old data means 0)
    #[serde(default)]
    pub progress: u8,
    /// ID of the task this milestone was spawned from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl Milestone {
    /// Create a fresh milestone at zero progress
    pub fn new(id: String, title: String, due_date: NaiveDate) -> Self {
        Milestone {
            id,
            title,
            description: String::new(),
            due_date,
            completed: false,
            progress: 0,
            task_id: None,
        }
    }
}
