use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bz", about = concat!("[*] blaze v", env!("CARGO_PKG_VERSION"), " - your goals are plain JSON"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different vault directory
    #[arg(short = 'C', long = "vault-dir", global = true)]
    pub vault_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new blaze vault in the current directory
    Init(InitArgs),
    /// Add a task (long-horizon timeframes also spawn a milestone)
    Add(AddArgs),
    /// List tasks, filtered and sorted by priority
    List(ListArgs),
    /// Show task details
    Show(ShowArgs),
    /// Mark a task completed
    Done(DoneArgs),
    /// Mark a task missed
    Miss(MissArgs),
    /// Permanently delete a task
    Rm(RmArgs),
    /// Search tasks by pattern (case-insensitive)
    Search(SearchArgs),
    /// Flip overdue pending tasks to missed
    Sweep(SweepArgs),
    /// Show task statistics
    Stats,
    /// Milestones: long-horizon goals with a progress bar
    Milestone(MilestoneCmd),
    /// Habits: daily logs with streaks
    Habit(HabitCmd),
    /// Quotes to keep around
    Quote(QuoteCmd),
    /// Ideas to come back to
    Idea(IdeaCmd),
    /// Work clock: report today's total, or clock in/out
    Clock(ClockCmd),
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Vault name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Task command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Longer description
    #[arg(short = 'd', long)]
    pub description: Option<String>,
    /// Timeframe (daily, weekly, monthly, quarterly, yearly, 3years, 5years, lifelong)
    #[arg(short = 't', long)]
    pub timeframe: Option<String>,
    /// Priority 1-10, 1 highest (default from config)
    #[arg(short = 'p', long)]
    pub priority: Option<u8>,
    /// Due date YYYY-MM-DD (default: today)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status (pending, completed, missed)
    #[arg(short = 's', long)]
    pub status: Option<String>,
    /// Filter by timeframe
    #[arg(short = 't', long)]
    pub timeframe: Option<String>,
    /// Filter by pattern matched against title and description
    #[arg(long)]
    pub find: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID to show
    pub id: String,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct MissArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Pattern to search for (regex, case-insensitive)
    pub pattern: String,
}

#[derive(Args)]
pub struct SweepArgs {
    /// Show what would be flipped without writing
    #[arg(long)]
    pub dry_run: bool,
}

// ---------------------------------------------------------------------------
// Milestones
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct MilestoneCmd {
    #[command(subcommand)]
    pub action: Option<MilestoneAction>,
}

#[derive(Subcommand)]
pub enum MilestoneAction {
    /// List milestones by due date with countdowns (default)
    List,
    /// Add a standalone milestone
    Add(MilestoneAddArgs),
    /// Bump a milestone's progress
    Bump(MilestoneBumpArgs),
    /// Complete a milestone at 100% (also completes same-titled tasks)
    Done(MilestoneIdArg),
    /// Delete a milestone
    Rm(MilestoneIdArg),
}

#[derive(Args)]
pub struct MilestoneAddArgs {
    /// Milestone title
    pub title: String,
    /// Longer description
    #[arg(short = 'd', long)]
    pub description: Option<String>,
    /// Due date YYYY-MM-DD
    #[arg(long)]
    pub due: String,
}

#[derive(Args)]
pub struct MilestoneBumpArgs {
    /// Milestone ID
    pub id: String,
    /// Amount to add, 0-100 (default from config)
    #[arg(long)]
    pub by: Option<u8>,
}

#[derive(Args)]
pub struct MilestoneIdArg {
    /// Milestone ID
    pub id: String,
}

// ---------------------------------------------------------------------------
// Habits
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct HabitCmd {
    #[command(subcommand)]
    pub action: Option<HabitAction>,
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habits with streaks (default)
    List,
    /// Add a habit
    Add(HabitAddArgs),
    /// Toggle a day's completion
    Log(HabitLogArgs),
    /// Show a habit's log and completion rates
    Show(HabitShowArgs),
    /// Delete a habit
    Rm(HabitIdArg),
}

#[derive(Args)]
pub struct HabitAddArgs {
    /// Habit name
    pub name: String,
}

#[derive(Args)]
pub struct HabitLogArgs {
    /// Habit ID
    pub id: String,
    /// Date to toggle YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct HabitShowArgs {
    /// Habit ID
    pub id: String,
    /// Year for the monthly breakdown (default: current year)
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Args)]
pub struct HabitIdArg {
    /// Habit ID
    pub id: String,
}

// ---------------------------------------------------------------------------
// Quotes and ideas
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct QuoteCmd {
    #[command(subcommand)]
    pub action: Option<QuoteAction>,
}

#[derive(Subcommand)]
pub enum QuoteAction {
    /// List all quotes (default)
    List,
    /// Add a quote
    Add(QuoteAddArgs),
    /// Delete a quote
    Rm(QuoteIdArg),
}

#[derive(Args)]
pub struct QuoteAddArgs {
    /// Quote text
    pub text: String,
    /// Who said it
    #[arg(long = "by")]
    pub author: String,
}

#[derive(Args)]
pub struct QuoteIdArg {
    /// Quote ID
    pub id: String,
}

#[derive(Args)]
pub struct IdeaCmd {
    #[command(subcommand)]
    pub action: Option<IdeaAction>,
}

#[derive(Subcommand)]
pub enum IdeaAction {
    /// List all ideas (default)
    List,
    /// Add an idea
    Add(IdeaAddArgs),
    /// Delete an idea
    Rm(IdeaIdArg),
}

#[derive(Args)]
pub struct IdeaAddArgs {
    /// Idea title
    pub title: String,
    /// Longer description
    #[arg(short = 'd', long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct IdeaIdArg {
    /// Idea ID
    pub id: String,
}

// ---------------------------------------------------------------------------
// Work clock
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ClockCmd {
    #[command(subcommand)]
    pub action: Option<ClockAction>,
}

#[derive(Subcommand)]
pub enum ClockAction {
    /// Start a work session
    In,
    /// End the open session, banking its seconds
    Out,
}
