use chrono::NaiveDate;
use serde::Serialize;

use crate::model::habit::Habit;
use crate::model::milestone::Milestone;
use crate::model::task::{Task, TaskStatus, Timeframe};
use crate::ops::milestone_ops::Countdown;
use crate::ops::sweep::MissedTask;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct MilestoneListJson {
    pub road_progress: f64,
    pub milestones: Vec<MilestoneRowJson>,
}

#[derive(Serialize)]
pub struct MilestoneRowJson {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub progress: u8,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<Countdown>,
}

#[derive(Serialize)]
pub struct HabitRowJson {
    pub id: String,
    pub name: String,
    pub streak: u32,
    pub longest_streak: u32,
    pub recent_completion: u8,
}

#[derive(Serialize)]
pub struct HabitDetailJson {
    pub id: String,
    pub name: String,
    pub streak: u32,
    pub longest_streak: u32,
    pub recent_completion: u8,
    pub year: i32,
    pub monthly_rates: Vec<f64>,
    pub yearly_rates: Vec<YearRateJson>,
}

#[derive(Serialize)]
pub struct YearRateJson {
    pub year: i32,
    pub rate: f64,
}

#[derive(Serialize)]
pub struct SearchHitJson {
    pub task_id: String,
    pub title: String,
    pub field: String,
}

#[derive(Serialize)]
pub struct SweepJson {
    pub dry_run: bool,
    pub missed: Vec<MissedTask>,
}

#[derive(Serialize)]
pub struct ClockJson {
    pub date: NaiveDate,
    pub seconds: u64,
    pub total: String,
    pub clocked_in: bool,
}

#[derive(Serialize)]
pub struct QuoteOfDayJson {
    pub text: String,
    pub author: String,
}

#[derive(Serialize)]
pub struct TodayJson {
    pub vault: String,
    pub quote: QuoteOfDayJson,
    pub due_tasks: Vec<Task>,
    pub clock_seconds: u64,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn milestone_to_row(milestone: &Milestone, countdown: Option<Countdown>) -> MilestoneRowJson {
    MilestoneRowJson {
        id: milestone.id.clone(),
        title: milestone.title.clone(),
        due_date: milestone.due_date,
        progress: milestone.progress,
        completed: milestone.completed,
        countdown,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn status_char(status: TaskStatus) -> char {
    match status {
        TaskStatus::Pending => ' ',
        TaskStatus::Completed => 'x',
        TaskStatus::Missed => '~',
    }
}

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    format!(
        "[{}] {} {}  p{} {} due {}",
        status_char(task.status),
        task.id,
        task.title,
        task.priority,
        task.timeframe.as_str(),
        task.due_date
    )
}

/// Format detailed task view
pub fn format_task_detail(task: &Task) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "[{}] {} {}",
        status_char(task.status),
        task.id,
        task.title
    ));
    lines.push(format!("status: {}", task.status.as_str()));
    lines.push(format!("timeframe: {}", task.timeframe.as_str()));
    lines.push(format!("priority: {}", task.priority));
    lines.push(format!("due: {}", task.due_date));
    if let Some(completed) = task.completed_date {
        lines.push(format!(
            "completed: {}",
            completed.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        ));
    }
    if !task.description.is_empty() {
        lines.push("description:".to_string());
        for line in task.description.lines() {
            lines.push(format!("  {}", line));
        }
    }

    lines
}

/// Format a countdown as `17d 03:12:44`, or `due` once the day has arrived.
pub fn format_countdown(cd: Countdown) -> String {
    if cd.is_over() {
        return "due".to_string();
    }
    format!("{}d {:02}:{:02}:{:02}", cd.days, cd.hours, cd.minutes, cd.seconds)
}

/// Format a single milestone as a one-line summary
pub fn format_milestone_line(milestone: &Milestone, countdown: Option<Countdown>) -> String {
    let mark = if milestone.completed { 'x' } else { ' ' };
    let mut line = format!(
        "[{}] {} {}  {:>3}% due {}",
        mark, milestone.id, milestone.title, milestone.progress, milestone.due_date
    );
    if let Some(cd) = countdown {
        line.push_str(&format!(" ({})", format_countdown(cd)));
    }
    line
}

/// Format a single habit as a one-line summary
pub fn format_habit_line(habit: &Habit, recent_completion: u8) -> String {
    format!(
        "{} {}  streak {} (best {})  30d {}%",
        habit.id, habit.name, habit.streak, habit.longest_streak, recent_completion
    )
}

// ---------------------------------------------------------------------------
// Input parsing
// ---------------------------------------------------------------------------

/// Parse a status name from the command line
pub fn parse_status(s: &str) -> Result<TaskStatus, String> {
    TaskStatus::parse(s).ok_or_else(|| {
        format!(
            "unknown status '{}' (expected: pending, completed, missed)",
            s
        )
    })
}

/// Parse a timeframe name from the command line
pub fn parse_timeframe(s: &str) -> Result<Timeframe, String> {
    Timeframe::parse(s).ok_or_else(|| {
        format!(
            "unknown timeframe '{}' (expected: daily, weekly, monthly, quarterly, yearly, 3years, 5years, lifelong)",
            s
        )
    })
}

/// Parse a YYYY-MM-DD date from the command line
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", s))
}
