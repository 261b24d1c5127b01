mod init;
pub use init::cmd_init;

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{Datelike, Local, Utc};
use regex::{Regex, RegexBuilder};

/// Global override for vault directory (set by -C flag)
static VAULT_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::vault_io;
use crate::model::quote::FALLBACK_QUOTE;
use crate::model::task::{Task, TaskStatus};
use crate::model::vault::Vault;
use crate::ops::{
    clock_ops, habit_ops, idea_ops, milestone_ops, quote_ops, search, stats, sweep, task_ops,
};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for load_vault_cwd()
    if let Some(ref dir) = cli.vault_dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        VAULT_DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        None => cmd_today(json),
        Some(cmd) => match cmd {
            // Init never discovers a vault; main.rs routes it here directly
            Commands::Init(args) => cmd_init(args),

            Commands::Add(args) => cmd_add(args),
            Commands::List(args) => cmd_list(args, json),
            Commands::Show(args) => cmd_show(args, json),
            Commands::Done(args) => cmd_done(args),
            Commands::Miss(args) => cmd_miss(args),
            Commands::Rm(args) => cmd_rm(args),
            Commands::Search(args) => cmd_search(args, json),
            Commands::Sweep(args) => cmd_sweep(args, json),
            Commands::Stats => cmd_stats(json),

            Commands::Milestone(args) => match args.action.unwrap_or(MilestoneAction::List) {
                MilestoneAction::List => cmd_milestone_list(json),
                MilestoneAction::Add(args) => cmd_milestone_add(args),
                MilestoneAction::Bump(args) => cmd_milestone_bump(args),
                MilestoneAction::Done(args) => cmd_milestone_done(args),
                MilestoneAction::Rm(args) => cmd_milestone_rm(args),
            },
            Commands::Habit(args) => match args.action.unwrap_or(HabitAction::List) {
                HabitAction::List => cmd_habit_list(json),
                HabitAction::Add(args) => cmd_habit_add(args),
                HabitAction::Log(args) => cmd_habit_log(args),
                HabitAction::Show(args) => cmd_habit_show(args, json),
                HabitAction::Rm(args) => cmd_habit_rm(args),
            },
            Commands::Quote(args) => match args.action.unwrap_or(QuoteAction::List) {
                QuoteAction::List => cmd_quote_list(json),
                QuoteAction::Add(args) => cmd_quote_add(args),
                QuoteAction::Rm(args) => cmd_quote_rm(args),
            },
            Commands::Idea(args) => match args.action.unwrap_or(IdeaAction::List) {
                IdeaAction::List => cmd_idea_list(json),
                IdeaAction::Add(args) => cmd_idea_add(args),
                IdeaAction::Rm(args) => cmd_idea_rm(args),
            },
            Commands::Clock(args) => match args.action {
                None => cmd_clock_status(json),
                Some(ClockAction::In) => cmd_clock_in(),
                Some(ClockAction::Out) => cmd_clock_out(),
            },
        },
    }
}

// ---------------------------------------------------------------------------
// Vault loading
// ---------------------------------------------------------------------------

/// Discover and load the vault without touching it.
fn load_vault_raw() -> Result<Vault, Box<dyn std::error::Error>> {
    let override_dir = VAULT_DIR_OVERRIDE.lock().unwrap().clone();
    let start = match override_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let root = vault_io::discover_vault(&start)?;
    Ok(vault_io::load_vault(&root)?)
}

/// Load the vault and apply the on-load maintenance: the work clock rolls
/// over at midnight, and when `sweep.auto` is on, overdue pending tasks
/// flip to missed. Changes are persisted before the command runs.
fn load_vault_cwd() -> Result<Vault, Box<dyn std::error::Error>> {
    let mut vault = load_vault_raw()?;
    if clock_ops::roll_over(&mut vault.clock, Local::now()) {
        vault.dirty.clock = true;
    }
    if vault.config.sweep.auto {
        let result = sweep::sweep_missed(&mut vault.tasks, Local::now().naive_local());
        if result.has_changes() {
            vault.dirty.tasks = true;
        }
    }
    if vault.dirty.any() {
        vault_io::save_vault(&mut vault)?;
    }
    Ok(vault)
}

/// Build the case-insensitive regex behind --find and `bz search`.
fn build_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

// ---------------------------------------------------------------------------
// Today view (bare `bz`)
// ---------------------------------------------------------------------------

fn cmd_today(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;
    let now = Local::now();
    let today = now.date_naive();

    let (text, author) = quote_ops::quote_of_the_day(&vault.quotes, today);
    let mut due: Vec<&Task> = vault
        .tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending && t.due_date <= today)
        .collect();
    due.sort_by_key(|t| t.priority);
    let clock_seconds = clock_ops::total_today(&vault.clock, now);

    if json {
        let output = TodayJson {
            vault: vault.config.vault.name.clone(),
            quote: QuoteOfDayJson {
                text: text.to_string(),
                author: author.to_string(),
            },
            due_tasks: due.into_iter().cloned().collect(),
            clock_seconds,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("== {} ==", vault.config.vault.name);
    println!();
    println!("\"{}\" — {}", text, author);
    println!();
    if due.is_empty() {
        println!("(nothing due today)");
    } else {
        for task in &due {
            println!("{}", format_task_line(task));
        }
    }
    if clock_seconds > 0 || vault.clock.is_clocked_in() {
        let state = if vault.clock.is_clocked_in() {
            " (clocked in)"
        } else {
            ""
        };
        println!();
        println!("clock: {}{}", clock_ops::format_duration(clock_seconds), state);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let now = Local::now();

    let timeframe = match args.timeframe.as_deref() {
        Some(s) => parse_timeframe(s).map_err(Box::<dyn std::error::Error>::from)?,
        None => vault.config.tasks.default_timeframe,
    };
    let priority = args.priority.unwrap_or(vault.config.tasks.default_priority);
    let due_date = match args.due.as_deref() {
        Some(s) => parse_date(s).map_err(Box::<dyn std::error::Error>::from)?,
        None => now.date_naive(),
    };

    let id = task_ops::add_task(
        &mut vault.tasks,
        &args.title,
        args.description.as_deref().unwrap_or(""),
        timeframe,
        priority,
        due_date,
        now.naive_local(),
    )?;
    vault.dirty.tasks = true;

    // Long-horizon tasks get a companion milestone
    let mut milestone_id = None;
    if timeframe.is_long_horizon()
        && let Some(task) = task_ops::find_task(&vault.tasks, &id)
    {
        milestone_id = Some(milestone_ops::spawn_for_task(&mut vault.milestones, task));
        vault.dirty.milestones = true;
    }

    vault_io::save_vault(&mut vault)?;
    println!("{}", id);
    if let Some(mid) = milestone_id {
        println!("{} (milestone)", mid);
    }
    Ok(())
}

fn cmd_list(args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;
    let status = args
        .status
        .as_deref()
        .map(parse_status)
        .transpose()
        .map_err(Box::<dyn std::error::Error>::from)?;
    let timeframe = args
        .timeframe
        .as_deref()
        .map(parse_timeframe)
        .transpose()
        .map_err(Box::<dyn std::error::Error>::from)?;
    let pattern = args.find.as_deref().map(build_pattern).transpose()?;

    let tasks = task_ops::filter_tasks(&vault.tasks, status, timeframe, pattern.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }
    if tasks.is_empty() {
        println!("(no tasks)");
        return Ok(());
    }
    for task in &tasks {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;
    let task = task_ops::find_task(&vault.tasks, &args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
        return Ok(());
    }
    for line in format_task_detail(task) {
        println!("{}", line);
    }
    // Companion milestone, when the task spawned one
    if let Some(m) = vault
        .milestones
        .iter()
        .find(|m| m.task_id.as_deref() == Some(args.id.as_str()))
    {
        println!("milestone: {} ({}%)", m.id, m.progress);
    }
    Ok(())
}

fn cmd_done(args: DoneArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    task_ops::complete_task(&mut vault.tasks, &args.id, Utc::now())?;
    vault.dirty.tasks = true;
    vault_io::save_vault(&mut vault)?;
    println!("{} → completed", args.id);
    Ok(())
}

fn cmd_miss(args: MissArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    task_ops::miss_task(&mut vault.tasks, &args.id, Utc::now())?;
    vault.dirty.tasks = true;
    vault_io::save_vault(&mut vault)?;
    println!("{} → missed", args.id);
    Ok(())
}

fn cmd_rm(args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let removed = task_ops::delete_task(&mut vault.tasks, &args.id)?;
    vault.dirty.tasks = true;
    vault_io::save_vault(&mut vault)?;
    println!("deleted {} ({})", removed.id, removed.title);
    Ok(())
}

fn cmd_search(args: SearchArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;
    let re = build_pattern(&args.pattern)?;
    let hits = search::search_tasks(&vault.tasks, &re);

    if json {
        let rows: Vec<SearchHitJson> = hits
            .iter()
            .filter_map(|hit| {
                task_ops::find_task(&vault.tasks, &hit.task_id).map(|task| SearchHitJson {
                    task_id: hit.task_id.clone(),
                    title: task.title.clone(),
                    field: field_name(hit.field).to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("(no matches)");
        return Ok(());
    }
    // One line per task even when both fields match
    let mut seen = HashSet::new();
    for hit in &hits {
        if seen.insert(hit.task_id.as_str())
            && let Some(task) = task_ops::find_task(&vault.tasks, &hit.task_id)
        {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}

fn field_name(field: search::MatchField) -> &'static str {
    match field {
        search::MatchField::Title => "title",
        search::MatchField::Description => "description",
    }
}

// ---------------------------------------------------------------------------
// Sweep & stats
// ---------------------------------------------------------------------------

fn cmd_sweep(args: SweepArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Raw load: the on-load auto-sweep would leave nothing to report
    let mut vault = load_vault_raw()?;
    let result = sweep::sweep_missed(&mut vault.tasks, Local::now().naive_local());

    if !args.dry_run && result.has_changes() {
        vault.dirty.tasks = true;
        vault_io::save_vault(&mut vault)?;
    }

    if json {
        let output = SweepJson {
            dry_run: args.dry_run,
            missed: result.missed,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !result.has_changes() {
        println!("nothing to sweep");
        return Ok(());
    }
    for missed in &result.missed {
        println!("{} → missed ({}, was due {})", missed.id, missed.title, missed.due_date);
    }
    if args.dry_run {
        println!("(dry run — no changes written)");
    }
    Ok(())
}

fn cmd_stats(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;
    let stats = stats::task_stats(&vault.tasks);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("total      {:>4}", stats.total);
    println!("pending    {:>4}", stats.pending);
    println!("completed  {:>4}", stats.completed);
    println!("missed     {:>4}", stats.missed);
    println!("completion {:>5.1}%", stats.completion_rate);
    println!();
    for (bucket, count) in &stats.by_timeframe {
        println!("  {:<10} {:>4}", bucket, count);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Milestone commands
// ---------------------------------------------------------------------------

fn cmd_milestone_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;
    let now = Local::now().naive_local();
    let sorted = milestone_ops::sorted_by_due(&vault.milestones);
    let road = milestone_ops::road_progress(&vault.milestones);

    if json {
        let rows: Vec<MilestoneRowJson> = sorted
            .iter()
            .map(|m| {
                let cd = (!m.completed).then(|| milestone_ops::countdown(m.due_date, now));
                milestone_to_row(m, cd)
            })
            .collect();
        let output = MilestoneListJson {
            road_progress: road,
            milestones: rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if sorted.is_empty() {
        println!("(no milestones)");
        return Ok(());
    }
    for m in &sorted {
        let cd = (!m.completed).then(|| milestone_ops::countdown(m.due_date, now));
        println!("{}", format_milestone_line(m, cd));
    }
    let done = vault.milestones.iter().filter(|m| m.completed).count();
    println!();
    println!("road progress: {:.0}% ({}/{})", road, done, vault.milestones.len());
    Ok(())
}

fn cmd_milestone_add(args: MilestoneAddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let due = parse_date(&args.due).map_err(Box::<dyn std::error::Error>::from)?;
    let id = milestone_ops::add_milestone(
        &mut vault.milestones,
        &args.title,
        args.description.as_deref().unwrap_or(""),
        due,
    )?;
    vault.dirty.milestones = true;
    vault_io::save_vault(&mut vault)?;
    println!("{}", id);
    Ok(())
}

fn cmd_milestone_bump(args: MilestoneBumpArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let amount = args.by.unwrap_or(vault.config.milestones.progress_step);
    let progress = milestone_ops::bump_progress(&mut vault.milestones, &args.id, amount)?;
    vault.dirty.milestones = true;
    vault_io::save_vault(&mut vault)?;
    println!("{} → {}%", args.id, progress);
    Ok(())
}

fn cmd_milestone_done(args: MilestoneIdArg) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let flipped =
        milestone_ops::complete_milestone(&mut vault.milestones, &args.id, &mut vault.tasks, Utc::now())?;
    vault.dirty.milestones = true;
    if !flipped.is_empty() {
        vault.dirty.tasks = true;
    }
    vault_io::save_vault(&mut vault)?;
    println!("{} → completed", args.id);
    for task_id in &flipped {
        println!("{} → completed (same title)", task_id);
    }
    Ok(())
}

fn cmd_milestone_rm(args: MilestoneIdArg) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let removed = milestone_ops::delete_milestone(&mut vault.milestones, &args.id)?;
    vault.dirty.milestones = true;
    vault_io::save_vault(&mut vault)?;
    println!("deleted {} ({})", removed.id, removed.title);
    Ok(())
}

// ---------------------------------------------------------------------------
// Habit commands
// ---------------------------------------------------------------------------

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn cmd_habit_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;
    let today = Local::now().date_naive();

    if json {
        let rows: Vec<HabitRowJson> = vault
            .habits
            .iter()
            .map(|h| HabitRowJson {
                id: h.id.clone(),
                name: h.name.clone(),
                streak: h.streak,
                longest_streak: h.longest_streak,
                recent_completion: habit_ops::recent_completion(h, today),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if vault.habits.is_empty() {
        println!("(no habits)");
        return Ok(());
    }
    for habit in &vault.habits {
        println!(
            "{}",
            format_habit_line(habit, habit_ops::recent_completion(habit, today))
        );
    }
    Ok(())
}

fn cmd_habit_add(args: HabitAddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let id = habit_ops::add_habit(&mut vault.habits, &args.name)?;
    vault.dirty.habits = true;
    vault_io::save_vault(&mut vault)?;
    println!("{}", id);
    Ok(())
}

fn cmd_habit_log(args: HabitLogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let date = match args.date.as_deref() {
        Some(s) => parse_date(s).map_err(Box::<dyn std::error::Error>::from)?,
        None => Local::now().date_naive(),
    };

    let completed = habit_ops::log_entry(&mut vault.habits, &args.id, date)?;
    vault.dirty.habits = true;
    vault_io::save_vault(&mut vault)?;

    if let Some(habit) = habit_ops::find_habit(&vault.habits, &args.id) {
        let mark = if completed { "completed" } else { "not completed" };
        println!("{} on {}: {} (streak {})", args.id, date, mark, habit.streak);
    }
    Ok(())
}

fn cmd_habit_show(args: HabitShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;
    let habit = habit_ops::find_habit(&vault.habits, &args.id)
        .ok_or_else(|| format!("habit not found: {}", args.id))?;
    let today = Local::now().date_naive();
    let year = args.year.unwrap_or_else(|| today.year());
    let recent = habit_ops::recent_completion(habit, today);
    let monthly = habit_ops::monthly_rates(habit, year);
    let yearly = habit_ops::yearly_rates(habit, today.year());

    if json {
        let output = HabitDetailJson {
            id: habit.id.clone(),
            name: habit.name.clone(),
            streak: habit.streak,
            longest_streak: habit.longest_streak,
            recent_completion: recent,
            year,
            monthly_rates: monthly.to_vec(),
            yearly_rates: yearly
                .iter()
                .map(|&(year, rate)| YearRateJson { year, rate })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", format_habit_line(habit, recent));
    println!();
    println!("{}:", year);
    for (idx, rate) in monthly.iter().enumerate() {
        println!("  {} {:>5.1}%", MONTH_ABBREV[idx], rate);
    }
    println!();
    for (y, rate) in &yearly {
        println!("  {} {:>5.1}%", y, rate);
    }
    Ok(())
}

fn cmd_habit_rm(args: HabitIdArg) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let removed = habit_ops::delete_habit(&mut vault.habits, &args.id)?;
    vault.dirty.habits = true;
    vault_io::save_vault(&mut vault)?;
    println!("deleted {} ({})", removed.id, removed.name);
    Ok(())
}

// ---------------------------------------------------------------------------
// Quote & idea commands
// ---------------------------------------------------------------------------

fn cmd_quote_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&vault.quotes)?);
        return Ok(());
    }

    if vault.quotes.is_empty() {
        let (text, author) = FALLBACK_QUOTE;
        println!("\"{}\" — {}", text, author);
        return Ok(());
    }
    for quote in &vault.quotes {
        println!("{} \"{}\" — {}", quote.id, quote.text, quote.author);
    }
    Ok(())
}

fn cmd_quote_add(args: QuoteAddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let id = quote_ops::add_quote(&mut vault.quotes, &args.text, &args.author)?;
    vault.dirty.quotes = true;
    vault_io::save_vault(&mut vault)?;
    println!("{}", id);
    Ok(())
}

fn cmd_quote_rm(args: QuoteIdArg) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let removed = quote_ops::delete_quote(&mut vault.quotes, &args.id)?;
    vault.dirty.quotes = true;
    vault_io::save_vault(&mut vault)?;
    println!("deleted {} (\"{}\")", removed.id, removed.text);
    Ok(())
}

fn cmd_idea_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let vault = load_vault_cwd()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&vault.ideas)?);
        return Ok(());
    }

    if vault.ideas.is_empty() {
        println!("(no ideas)");
        return Ok(());
    }
    for idea in &vault.ideas {
        println!("{} {}", idea.id, idea.title);
        if !idea.description.is_empty() {
            println!("    {}", idea.description);
        }
    }
    Ok(())
}

fn cmd_idea_add(args: IdeaAddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let id = idea_ops::add_idea(
        &mut vault.ideas,
        &args.title,
        args.description.as_deref().unwrap_or(""),
    )?;
    vault.dirty.ideas = true;
    vault_io::save_vault(&mut vault)?;
    println!("{}", id);
    Ok(())
}

fn cmd_idea_rm(args: IdeaIdArg) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let removed = idea_ops::delete_idea(&mut vault.ideas, &args.id)?;
    vault.dirty.ideas = true;
    vault_io::save_vault(&mut vault)?;
    println!("deleted {} ({})", removed.id, removed.title);
    Ok(())
}

// ---------------------------------------------------------------------------
// Clock commands
// ---------------------------------------------------------------------------

fn cmd_clock_status(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Midnight rollover already applied on load
    let vault = load_vault_cwd()?;
    let now = Local::now();
    let total = clock_ops::total_today(&vault.clock, now);

    if json {
        let output = ClockJson {
            date: vault.clock.date,
            seconds: total,
            total: clock_ops::format_duration(total),
            clocked_in: vault.clock.is_clocked_in(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let state = if vault.clock.is_clocked_in() {
        " (clocked in)"
    } else {
        ""
    };
    println!("{}{}", clock_ops::format_duration(total), state);
    Ok(())
}

fn cmd_clock_in() -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let now = Local::now();
    clock_ops::clock_in(&mut vault.clock, now)?;
    vault.dirty.clock = true;
    vault_io::save_vault(&mut vault)?;
    println!("clocked in at {}", now.format("%H:%M:%S"));
    Ok(())
}

fn cmd_clock_out() -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = load_vault_cwd()?;
    let now = Local::now();
    let session = clock_ops::clock_out(&mut vault.clock, now)?;
    vault.dirty.clock = true;
    vault_io::save_vault(&mut vault)?;
    println!(
        "clocked out after {} (today: {})",
        clock_ops::format_duration(session),
        clock_ops::format_duration(vault.clock.seconds)
    );
    Ok(())
}
