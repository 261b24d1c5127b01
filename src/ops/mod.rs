pub mod clock_ops;
pub mod habit_ops;
pub mod idea_ops;
pub mod ids;
pub mod milestone_ops;
pub mod quote_ops;
pub mod search;
pub mod stats;
pub mod sweep;
pub mod task_ops;
