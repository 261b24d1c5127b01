use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
    Missed,
}

impl TaskStatus {
    /// The lowercase name used in storage and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Missed => "missed",
        }
    }

    /// Parse a status name
    pub fn parse(s: &str) -> Option<TaskStatus> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "completed" => Some(TaskStatus::Completed),
            "missed" => Some(TaskStatus::Missed),
            _ => None,
        }
    }
}

/// Recurrence/horizon bucket for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
    #[serde(rename = "3years")]
    ThreeYears,
    #[serde(rename = "5years")]
    FiveYears,
    Lifelong,
}

impl Timeframe {
    /// All timeframes in horizon order (shortest first)
    pub const ALL: [Timeframe; 8] = [
        Timeframe::Daily,
        Timeframe::Weekly,
        Timeframe::Monthly,
        Timeframe::Quarterly,
        Timeframe::Yearly,
        Timeframe::ThreeYears,
        Timeframe::FiveYears,
        Timeframe::Lifelong,
    ];

    /// The name used in storage and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
            Timeframe::Quarterly => "quarterly",
            Timeframe::Yearly => "yearly",
            Timeframe::ThreeYears => "3years",
            Timeframe::FiveYears => "5years",
            Timeframe::Lifelong => "lifelong",
        }
    }

    /// Parse a timeframe name
    pub fn parse(s: &str) -> Option<Timeframe> {
        match s {
            "daily" => Some(Timeframe::Daily),
            "weekly" => Some(Timeframe::Weekly),
            "monthly" => Some(Timeframe::Monthly),
            "quarterly" => Some(Timeframe::Quarterly),
            "yearly" => Some(Timeframe::Yearly),
            "3years" => Some(Timeframe::ThreeYears),
            "5years" => Some(Timeframe::FiveYears),
            "lifelong" => Some(Timeframe::Lifelong),
            _ => None,
        }
    }

    /// Long-horizon timeframes (monthly and up) spawn a milestone when a
    /// task is created with them.
    pub fn is_long_horizon(self) -> bool {
        !matches!(self, Timeframe::Daily | Timeframe::Weekly)
    }
}

/// A tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned ID like `T-014`
    pub id: String,
    /// Task title
    pub title: String,
    /// Free-form details (may be empty)
    #[serde(default)]
    pub description: String,
    /// Horizon bucket
    pub timeframe: Timeframe,
    /// Priority 1 (highest) to 10 (lowest)
    pub priority: u8,
    /// Lifecycle status
    pub status: TaskStatus,
    /// Calendar deadline
    pub due_date: NaiveDate,
    /// Instant the task was completed, if it ever was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a pending task with the given fields
    pub fn new(
        id: String,
        title: String,
        timeframe: Timeframe,
        priority: u8,
        due_date: NaiveDate,
    ) -> Self {
        Task {
            id,
            title,
            description: String::new(),
            timeframe,
            priority,
            status: TaskStatus::Pending,
            due_date,
            completed_date: None,
        }
    }
}
