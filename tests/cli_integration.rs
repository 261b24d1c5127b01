//! Integration tests for the `bz` CLI.
//!
//! Each test creates a temp vault directory, runs `bz` as a subprocess,
//! and verifies stdout and/or file contents. Fixture tasks use far-future
//! due dates so the on-load sweep never flips them under the tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `bz` binary.
fn bz_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("bz");
    path
}

/// Create a minimal test vault in the given directory.
fn create_test_vault(root: &Path) {
    let blaze_dir = root.join("blaze");
    fs::create_dir_all(&blaze_dir).unwrap();

    fs::write(
        blaze_dir.join("config.toml"),
        r#"[vault]
name = "test-vault"

[sweep]
auto = false

[tasks]
default_priority = 5
default_timeframe = "daily"

[milestones]
progress_step = 10
"#,
    )
    .unwrap();

    fs::write(
        blaze_dir.join("tasks.json"),
        r#"[
  {
    "id": "T-001",
    "title": "Morning run",
    "description": "5k around the park",
    "timeframe": "daily",
    "priority": 2,
    "status": "pending",
    "due_date": "2099-01-01"
  },
  {
    "id": "T-002",
    "title": "Weekly review",
    "description": "retro and plan",
    "timeframe": "weekly",
    "priority": 5,
    "status": "pending",
    "due_date": "2099-01-02"
  },
  {
    "id": "T-003",
    "title": "Old chore",
    "description": "",
    "timeframe": "daily",
    "priority": 4,
    "status": "completed",
    "due_date": "2020-01-01",
    "completed_date": "2020-01-01T12:00:00Z"
  },
  {
    "id": "T-004",
    "title": "Forgotten errand",
    "description": "",
    "timeframe": "daily",
    "priority": 1,
    "status": "pending",
    "due_date": "2020-01-01"
  }
]
"#,
    )
    .unwrap();

    fs::write(
        blaze_dir.join("milestones.json"),
        r#"[
  {
    "id": "M-001",
    "title": "Ship v1",
    "description": "",
    "due_date": "2099-06-01",
    "completed": false,
    "progress": 40
  },
  {
    "id": "M-002",
    "title": "Launch site",
    "description": "",
    "due_date": "2020-05-01",
    "completed": true,
    "progress": 100
  }
]
"#,
    )
    .unwrap();

    fs::write(
        blaze_dir.join("habits.json"),
        r#"[
  {
    "id": "H-001",
    "name": "Meditate",
    "entries": [
      { "date": "2025-06-03", "completed": true },
      { "date": "2025-06-02", "completed": true },
      { "date": "2025-06-01", "completed": false }
    ],
    "streak": 2,
    "longest_streak": 2
  }
]
"#,
    )
    .unwrap();

    fs::write(
        blaze_dir.join("quotes.json"),
        r#"[
  {
    "id": "Q-001",
    "text": "Stay hungry, stay foolish.",
    "author": "Steve Jobs"
  }
]
"#,
    )
    .unwrap();

    fs::write(
        blaze_dir.join("ideas.json"),
        r#"[
  {
    "id": "I-001",
    "title": "Plain-text CRM",
    "description": "contacts as markdown files"
  }
]
"#,
    )
    .unwrap();
}

/// Run `bz` with the given args in the given directory, returning (stdout, stderr, success).
fn run_bz(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(bz_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run bz");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `bz` expecting success, return stdout.
fn run_bz_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_bz(dir, args);
    if !success {
        panic!(
            "bz {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Parse a JSON collection file out of the vault.
fn read_json(root: &Path, file: &str) -> serde_json::Value {
    let content = fs::read_to_string(root.join("blaze").join(file)).unwrap();
    serde_json::from_str(&content).unwrap()
}

// ---------------------------------------------------------------------------
// Task command tests
// ---------------------------------------------------------------------------

#[test]
fn test_list_default() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["list"]);
    assert!(out.contains("Morning run"));
    assert!(out.contains("Weekly review"));
    assert!(out.contains("Old chore"));
    assert!(out.contains("Forgotten errand"));

    // Sorted by priority: T-004 (p1) before T-001 (p2) before T-002 (p5)
    let pos_004 = out.find("T-004").unwrap();
    let pos_001 = out.find("T-001").unwrap();
    let pos_002 = out.find("T-002").unwrap();
    assert!(pos_004 < pos_001);
    assert!(pos_001 < pos_002);
}

#[test]
fn test_list_status_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["list", "-s", "completed"]);
    assert!(out.contains("T-003"));
    assert!(!out.contains("T-001"));
}

#[test]
fn test_list_timeframe_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["list", "-t", "weekly"]);
    assert!(out.contains("T-002"));
    assert!(!out.contains("T-001"));
}

#[test]
fn test_list_find_pattern() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["list", "--find", "review"]);
    assert!(out.contains("T-002"));
    assert!(!out.contains("T-001"));
}

#[test]
fn test_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 4);
    // Priority sort puts T-004 (p1) first
    assert_eq!(arr[0]["id"], "T-004");
    assert_eq!(arr[0]["status"], "pending");
    assert_eq!(arr[0]["due_date"], "2020-01-01");
}

#[test]
fn test_show() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["show", "T-002"]);
    assert!(out.contains("Weekly review"));
    assert!(out.contains("weekly"));
    assert!(out.contains("retro and plan"));
}

#[test]
fn test_show_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["show", "T-002", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["id"], "T-002");
    assert_eq!(parsed["timeframe"], "weekly");
    assert_eq!(parsed["status"], "pending");
    assert_eq!(parsed["priority"], 5);
}

#[test]
fn test_show_not_found() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let (_stdout, stderr, success) = run_bz(tmp.path(), &["show", "T-999"]);
    assert!(!success);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_add_task() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["add", "Buy groceries"]);
    assert!(out.contains("T-005")); // Next ID after T-004

    let tasks = read_json(tmp.path(), "tasks.json");
    let added = &tasks.as_array().unwrap()[4];
    assert_eq!(added["title"], "Buy groceries");
    assert_eq!(added["timeframe"], "daily"); // config default
    assert_eq!(added["priority"], 5); // config default
}

#[test]
fn test_add_long_horizon_spawns_milestone() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(
        tmp.path(),
        &[
            "add",
            "Quarterly report",
            "-t",
            "quarterly",
            "-p",
            "3",
            "--due",
            "2099-03-31",
            "-d",
            "Q1 numbers",
        ],
    );
    assert!(out.contains("T-005"));
    assert!(out.contains("M-003 (milestone)"));

    let milestones = read_json(tmp.path(), "milestones.json");
    let spawned = &milestones.as_array().unwrap()[2];
    assert_eq!(spawned["title"], "Quarterly report");
    assert_eq!(spawned["due_date"], "2099-03-31");
    assert_eq!(spawned["task_id"], "T-005");
    assert_eq!(spawned["progress"], 0);
}

#[test]
fn test_add_weekly_spawns_no_milestone() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["add", "Weekly thing", "-t", "weekly"]);
    assert!(!out.contains("milestone"));

    let milestones = read_json(tmp.path(), "milestones.json");
    assert_eq!(milestones.as_array().unwrap().len(), 2);
}

#[test]
fn test_add_past_due_is_born_missed() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    run_bz_ok(tmp.path(), &["add", "Yesterday thing", "--due", "2020-06-01"]);

    let out = run_bz_ok(tmp.path(), &["show", "T-005", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["status"], "missed");
}

#[test]
fn test_done() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["done", "T-001"]);
    assert!(out.contains("T-001 → completed"));

    let show = run_bz_ok(tmp.path(), &["show", "T-001", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&show).unwrap();
    assert_eq!(parsed["status"], "completed");
    assert!(parsed["completed_date"].is_string());
}

#[test]
fn test_done_rejects_completed_task() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let (_stdout, stderr, success) = run_bz(tmp.path(), &["done", "T-003"]);
    assert!(!success);
    assert!(stderr.contains("already completed"));
}

#[test]
fn test_miss() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["miss", "T-002"]);
    assert!(out.contains("T-002 → missed"));

    let show = run_bz_ok(tmp.path(), &["show", "T-002", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&show).unwrap();
    assert_eq!(parsed["status"], "missed");
}

#[test]
fn test_rm() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["rm", "T-003"]);
    assert!(out.contains("deleted T-003"));

    let list = run_bz_ok(tmp.path(), &["list", "-s", "completed"]);
    assert!(list.contains("(no tasks)"));
}

#[test]
fn test_search() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    // Case-insensitive, matches descriptions too
    let out = run_bz_ok(tmp.path(), &["search", "RETRO"]);
    assert!(out.contains("T-002"));
    assert!(!out.contains("T-001"));
}

#[test]
fn test_search_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["search", "park", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["task_id"], "T-001");
    assert_eq!(arr[0]["field"], "description");
}

#[test]
fn test_add_then_show() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let add_out = run_bz_ok(tmp.path(), &["add", "Workflow test task"]);
    let id = add_out.trim();

    let show_out = run_bz_ok(tmp.path(), &["show", id]);
    assert!(show_out.contains("Workflow test task"));
}

// ---------------------------------------------------------------------------
// Sweep tests
// ---------------------------------------------------------------------------

#[test]
fn test_sweep() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["sweep"]);
    assert!(out.contains("T-004 → missed"));
    assert!(out.contains("Forgotten errand"));
    assert!(!out.contains("T-001")); // due 2099, untouched

    let tasks = read_json(tmp.path(), "tasks.json");
    let swept = &tasks.as_array().unwrap()[3];
    assert_eq!(swept["id"], "T-004");
    assert_eq!(swept["status"], "missed");

    // Second sweep has nothing left to do
    let again = run_bz_ok(tmp.path(), &["sweep"]);
    assert!(again.contains("nothing to sweep"));
}

#[test]
fn test_sweep_dry_run() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["sweep", "--dry-run"]);
    assert!(out.contains("T-004"));
    assert!(out.contains("dry run"));

    // Nothing written
    let tasks = read_json(tmp.path(), "tasks.json");
    assert_eq!(tasks.as_array().unwrap()[3]["status"], "pending");
}

#[test]
fn test_sweep_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["sweep", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["dry_run"], false);
    let missed = parsed["missed"].as_array().unwrap();
    assert_eq!(missed.len(), 1);
    assert_eq!(missed[0]["id"], "T-004");
    assert_eq!(missed[0]["due_date"], "2020-01-01");
}

#[test]
fn test_auto_sweep_on_load() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    // Turn the auto sweep on; any command load then flips overdue tasks
    fs::write(
        tmp.path().join("blaze/config.toml"),
        "[vault]\nname = \"test-vault\"\n\n[sweep]\nauto = true\n",
    )
    .unwrap();

    run_bz_ok(tmp.path(), &["list"]);

    let tasks = read_json(tmp.path(), "tasks.json");
    assert_eq!(tasks.as_array().unwrap()[3]["status"], "missed");
}

// ---------------------------------------------------------------------------
// Stats tests
// ---------------------------------------------------------------------------

#[test]
fn test_stats() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["stats"]);
    assert!(out.contains("total"));
    assert!(out.contains("pending"));
    assert!(out.contains("daily"));
}

#[test]
fn test_stats_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["stats", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["total"], 4);
    assert_eq!(parsed["pending"], 3);
    assert_eq!(parsed["completed"], 1);
    assert_eq!(parsed["completion_rate"], 25.0);
    assert_eq!(parsed["by_timeframe"]["daily"], 3);
    assert_eq!(parsed["by_timeframe"]["weekly"], 1);
    // Empty buckets still present
    assert_eq!(parsed["by_timeframe"]["long-term"], 0);
}

// ---------------------------------------------------------------------------
// Today view tests
// ---------------------------------------------------------------------------

#[test]
fn test_today_view() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &[]);
    assert!(out.contains("test-vault"));
    assert!(out.contains("Stay hungry, stay foolish."));
    // Overdue pending task is due; far-future ones are not
    assert!(out.contains("Forgotten errand"));
    assert!(!out.contains("Morning run"));
}

#[test]
fn test_today_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["vault"], "test-vault");
    assert_eq!(parsed["quote"]["author"], "Steve Jobs");
    let due = parsed["due_tasks"].as_array().unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0]["id"], "T-004");
    assert_eq!(parsed["clock_seconds"], 0);
}

#[test]
fn test_today_fallback_quote() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());
    fs::write(tmp.path().join("blaze/quotes.json"), "[]\n").unwrap();

    let out = run_bz_ok(tmp.path(), &[]);
    assert!(out.contains("The only way to do great work"));
}

// ---------------------------------------------------------------------------
// Milestone tests
// ---------------------------------------------------------------------------

#[test]
fn test_milestone_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["milestone"]);
    assert!(out.contains("Ship v1"));
    assert!(out.contains("Launch site"));
    assert!(out.contains("road progress: 50% (1/2)"));

    // Sorted by due date: M-002 (2020) before M-001 (2099)
    let pos_002 = out.find("M-002").unwrap();
    let pos_001 = out.find("M-001").unwrap();
    assert!(pos_002 < pos_001);
}

#[test]
fn test_milestone_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["milestone", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["road_progress"], 50.0);
    let rows = parsed["milestones"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Due-date order: completed M-002 first, no countdown on it
    assert_eq!(rows[0]["id"], "M-002");
    assert!(rows[0].get("countdown").is_none());
    assert_eq!(rows[1]["id"], "M-001");
    assert!(rows[1]["countdown"]["days"].as_i64().unwrap() > 0);
}

#[test]
fn test_milestone_add() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(
        tmp.path(),
        &["milestone", "add", "Read 12 books", "--due", "2099-12-31"],
    );
    assert!(out.contains("M-003"));

    let milestones = read_json(tmp.path(), "milestones.json");
    let added = &milestones.as_array().unwrap()[2];
    assert_eq!(added["title"], "Read 12 books");
    assert_eq!(added["progress"], 0);
    assert!(added.get("task_id").is_none()); // standalone
}

#[test]
fn test_milestone_bump_default_step() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["milestone", "bump", "M-001"]);
    assert!(out.contains("M-001 → 50%")); // 40 + configured step 10
}

#[test]
fn test_milestone_bump_clamps_at_100() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["milestone", "bump", "M-001", "--by", "75"]);
    assert!(out.contains("M-001 → 100%"));
}

#[test]
fn test_milestone_done_requires_full_progress() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let (_stdout, stderr, success) = run_bz(tmp.path(), &["milestone", "done", "M-001"]);
    assert!(!success);
    assert!(stderr.contains("progress must reach 100"));
}

#[test]
fn test_milestone_done_completes_matching_task() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    // A pending task sharing the milestone's title
    run_bz_ok(tmp.path(), &["add", "Ship v1"]);
    run_bz_ok(tmp.path(), &["milestone", "bump", "M-001", "--by", "60"]);

    let out = run_bz_ok(tmp.path(), &["milestone", "done", "M-001"]);
    assert!(out.contains("M-001 → completed"));
    assert!(out.contains("T-005 → completed"));

    let show = run_bz_ok(tmp.path(), &["show", "T-005", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&show).unwrap();
    assert_eq!(parsed["status"], "completed");
}

#[test]
fn test_milestone_rm() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["milestone", "rm", "M-002"]);
    assert!(out.contains("deleted M-002"));

    let milestones = read_json(tmp.path(), "milestones.json");
    assert_eq!(milestones.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Habit tests
// ---------------------------------------------------------------------------

#[test]
fn test_habit_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["habit"]);
    assert!(out.contains("Meditate"));
    assert!(out.contains("streak 2"));
}

#[test]
fn test_habit_add() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["habit", "add", "Stretch"]);
    assert!(out.contains("H-002"));
}

#[test]
fn test_habit_log_today_extends_streak() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    // Entry gaps don't break the run, so today joins the two June days
    let out = run_bz_ok(tmp.path(), &["habit", "log", "H-001"]);
    assert!(out.contains("completed"));
    assert!(out.contains("streak 3"));
}

#[test]
fn test_habit_log_toggles() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    run_bz_ok(tmp.path(), &["habit", "log", "H-001", "--date", "2025-07-01"]);
    let out = run_bz_ok(tmp.path(), &["habit", "log", "H-001", "--date", "2025-07-01"]);
    assert!(out.contains("not completed"));
    assert!(out.contains("streak 0")); // most recent entry now incomplete
}

#[test]
fn test_habit_log_backfill_date() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    // Flip the logged-incomplete day to complete
    let out = run_bz_ok(tmp.path(), &["habit", "log", "H-001", "--date", "2025-06-01"]);
    assert!(out.contains("streak 3"));

    let habits = read_json(tmp.path(), "habits.json");
    assert_eq!(habits.as_array().unwrap()[0]["streak"], 3);
    assert_eq!(habits.as_array().unwrap()[0]["longest_streak"], 3);
}

#[test]
fn test_habit_show() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["habit", "show", "H-001", "--year", "2025"]);
    assert!(out.contains("Meditate"));
    assert!(out.contains("2025:"));
    assert!(out.contains("Jun"));
}

#[test]
fn test_habit_show_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(
        tmp.path(),
        &["habit", "show", "H-001", "--year", "2025", "--json"],
    );
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["id"], "H-001");
    assert_eq!(parsed["year"], 2025);
    let monthly = parsed["monthly_rates"].as_array().unwrap();
    assert_eq!(monthly.len(), 12);
    // Two of thirty June days completed
    assert!(monthly[5].as_f64().unwrap() > 0.0);
    assert_eq!(monthly[0].as_f64().unwrap(), 0.0);
}

#[test]
fn test_habit_rm() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["habit", "rm", "H-001"]);
    assert!(out.contains("deleted H-001"));

    let list = run_bz_ok(tmp.path(), &["habit"]);
    assert!(list.contains("(no habits)"));
}

// ---------------------------------------------------------------------------
// Quote and idea tests
// ---------------------------------------------------------------------------

#[test]
fn test_quote_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["quote"]);
    assert!(out.contains("Q-001"));
    assert!(out.contains("Stay hungry, stay foolish."));
}

#[test]
fn test_quote_add() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(
        tmp.path(),
        &["quote", "add", "Talk is cheap. Show me the code.", "--by", "Linus Torvalds"],
    );
    assert!(out.contains("Q-002"));

    let quotes = read_json(tmp.path(), "quotes.json");
    assert_eq!(quotes.as_array().unwrap()[1]["author"], "Linus Torvalds");
}

#[test]
fn test_quote_rm_then_fallback() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    run_bz_ok(tmp.path(), &["quote", "rm", "Q-001"]);

    // Empty store lists the built-in quote
    let out = run_bz_ok(tmp.path(), &["quote"]);
    assert!(out.contains("The only way to do great work"));
}

#[test]
fn test_idea_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["idea"]);
    assert!(out.contains("I-001"));
    assert!(out.contains("Plain-text CRM"));
    assert!(out.contains("contacts as markdown files"));
}

#[test]
fn test_idea_add_and_rm() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_bz_ok(tmp.path(), &["idea", "add", "Garden sensor", "-d", "soil alerts"]);
    assert!(out.contains("I-002"));

    let rm_out = run_bz_ok(tmp.path(), &["idea", "rm", "I-002"]);
    assert!(rm_out.contains("deleted I-002"));

    let ideas = read_json(tmp.path(), "ideas.json");
    assert_eq!(ideas.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Clock tests
// ---------------------------------------------------------------------------

#[test]
fn test_clock_in_out() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let in_out = run_bz_ok(tmp.path(), &["clock", "in"]);
    assert!(in_out.contains("clocked in at"));

    let clock = read_json(tmp.path(), "clock.json");
    assert!(clock["clocked_in_at"].is_string());

    let out_out = run_bz_ok(tmp.path(), &["clock", "out"]);
    assert!(out_out.contains("clocked out after"));

    let clock = read_json(tmp.path(), "clock.json");
    assert!(clock.get("clocked_in_at").is_none());
}

#[test]
fn test_clock_status_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    run_bz_ok(tmp.path(), &["clock", "in"]);

    let out = run_bz_ok(tmp.path(), &["clock", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["clocked_in"], true);
    assert!(parsed["total"].as_str().unwrap().contains(':'));
}

#[test]
fn test_clock_out_without_in_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let (_stdout, stderr, success) = run_bz(tmp.path(), &["clock", "out"]);
    assert!(!success);
    assert!(stderr.contains("not clocked in"));
}

#[test]
fn test_clock_double_in_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    run_bz_ok(tmp.path(), &["clock", "in"]);
    let (_stdout, stderr, success) = run_bz(tmp.path(), &["clock", "in"]);
    assert!(!success);
    assert!(stderr.contains("already clocked in"));
}

// ---------------------------------------------------------------------------
// Error handling tests
// ---------------------------------------------------------------------------

#[test]
fn test_not_a_vault() {
    let tmp = tempfile::TempDir::new().unwrap();
    // Don't create vault structure
    let (_stdout, stderr, success) = run_bz(tmp.path(), &["list"]);
    assert!(!success);
    assert!(stderr.contains("not a blaze vault"));
}

#[test]
fn test_invalid_timeframe() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let (_stdout, stderr, success) = run_bz(tmp.path(), &["add", "Task", "-t", "biweekly"]);
    assert!(!success);
    assert!(stderr.contains("unknown timeframe"));
}

#[test]
fn test_invalid_status_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let (_stdout, stderr, success) = run_bz(tmp.path(), &["list", "-s", "done"]);
    assert!(!success);
    assert!(stderr.contains("unknown status"));
}

#[test]
fn test_invalid_date() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let (_stdout, stderr, success) = run_bz(tmp.path(), &["add", "Task", "--due", "tomorrow"]);
    assert!(!success);
    assert!(stderr.contains("invalid date"));
}

#[test]
fn test_priority_out_of_range() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let (_stdout, stderr, success) = run_bz(tmp.path(), &["add", "Task", "-p", "11"]);
    assert!(!success);
    assert!(stderr.contains("priority"));
}

#[test]
fn test_corrupted_collection_is_backed_up() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());
    fs::write(tmp.path().join("blaze/tasks.json"), "{ not json").unwrap();

    // Command still runs, starting from an empty task store
    let out = run_bz_ok(tmp.path(), &["list"]);
    assert!(out.contains("(no tasks)"));
    assert!(tmp.path().join("blaze/tasks.json.bak").exists());
}

#[test]
fn test_help() {
    let out = run_bz_ok(Path::new("."), &["--help"]);
    assert!(out.contains("blaze"));
    assert!(out.contains("add"));
    assert!(out.contains("milestone"));
    assert!(out.contains("habit"));
}

// ---------------------------------------------------------------------------
// Vault discovery tests
// ---------------------------------------------------------------------------

#[test]
fn test_discovery_walks_up() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());
    let nested = tmp.path().join("notes/2026");
    fs::create_dir_all(&nested).unwrap();

    let out = run_bz_ok(&nested, &["list"]);
    assert!(out.contains("T-001"));
}

#[test]
fn test_vault_dir_flag() {
    let vault = tempfile::TempDir::new().unwrap();
    create_test_vault(vault.path());
    let elsewhere = tempfile::TempDir::new().unwrap();

    let out = run_bz_ok(
        elsewhere.path(),
        &["-C", vault.path().to_str().unwrap(), "list"],
    );
    assert!(out.contains("T-001"));
}

// ---------------------------------------------------------------------------
// Init tests
// ---------------------------------------------------------------------------

#[test]
fn test_init() {
    let tmp = tempfile::TempDir::new().unwrap();

    let out = run_bz_ok(tmp.path(), &["init", "--name", "My Goals"]);
    assert!(out.contains("Initialized"));
    assert!(out.contains("My Goals"));

    // config.toml exists and is valid TOML
    let toml_content = fs::read_to_string(tmp.path().join("blaze/config.toml")).unwrap();
    let parsed: toml::Value = toml::from_str(&toml_content).unwrap();
    assert_eq!(parsed["vault"]["name"].as_str().unwrap(), "My Goals");

    // Contains expected sections from the template
    assert!(toml_content.contains("[sweep]"));
    assert!(toml_content.contains("[tasks]"));
    assert!(toml_content.contains("[milestones]"));

    // The fresh vault is usable right away
    let add_out = run_bz_ok(tmp.path(), &["add", "First task"]);
    assert!(add_out.contains("T-001"));
}

#[test]
fn test_init_infers_name_from_directory() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dir = tmp.path().join("personal-goals");
    fs::create_dir_all(&dir).unwrap();

    run_bz_ok(&dir, &["init"]);

    let toml_content = fs::read_to_string(dir.join("blaze/config.toml")).unwrap();
    let parsed: toml::Value = toml::from_str(&toml_content).unwrap();
    assert_eq!(parsed["vault"]["name"].as_str().unwrap(), "Personal Goals");
}

#[test]
fn test_init_twice_fails() {
    let tmp = tempfile::TempDir::new().unwrap();

    run_bz_ok(tmp.path(), &["init", "--name", "Once"]);
    let (_stdout, stderr, success) = run_bz(tmp.path(), &["init", "--name", "Twice"]);
    assert!(!success);
    assert!(stderr.contains("already exists"));
}
