use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::io::atomic::atomic_write;
use crate::io::config_io;
use crate::model::clock::Clock;
use crate::model::habit::Habit;
use crate::model::idea::Idea;
use crate::model::milestone::Milestone;
use crate::model::quote::Quote;
use crate::model::task::Task;
use crate::model::vault::{DirtyFlags, Vault};

/// Collection files stored inside the `blaze/` directory.
pub const TASKS_FILE: &str = "tasks.json";
pub const MILESTONES_FILE: &str = "milestones.json";
pub const HABITS_FILE: &str = "habits.json";
pub const QUOTES_FILE: &str = "quotes.json";
pub const IDEAS_FILE: &str = "ideas.json";
pub const CLOCK_FILE: &str = "clock.json";

/// Error type for vault I/O operations
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("not a blaze vault: no blaze/ directory found")]
    NotAVault,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("could not serialize {path}: {source}")]
    SerializeError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Discover the blaze vault by walking up from the given directory,
/// looking for a `blaze/` subdirectory.
pub fn discover_vault(start: &Path) -> Result<PathBuf, VaultError> {
    let mut current = start.to_path_buf();
    loop {
        let blaze_dir = current.join("blaze");
        if blaze_dir.is_dir() && blaze_dir.join("config.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(VaultError::NotAVault);
        }
    }
}

/// Read one JSON collection file.
///
/// A missing file yields `None` so the caller can substitute an empty
/// collection. A malformed file is backed up as `.bak` and also yields
/// `None`; one bad file should never lock the whole vault.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, VaultError> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path).map_err(|e| VaultError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    match serde_json::from_str(&text) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            let bak = path.with_extension("json.bak");
            let _ = fs::copy(path, &bak);
            eprintln!(
                "warning: could not parse {} (backed up as {}): {}",
                path.display(),
                bak.display(),
                e
            );
            Ok(None)
        }
    }
}

/// Load a complete blaze vault from the given root directory.
pub fn load_vault(root: &Path) -> Result<Vault, VaultError> {
    let blaze_dir = root.join("blaze");
    if !blaze_dir.is_dir() {
        return Err(VaultError::NotAVault);
    }

    let config = config_io::read_config(&blaze_dir)?;

    let tasks: Vec<Task> = read_collection(&blaze_dir.join(TASKS_FILE))?.unwrap_or_default();
    let milestones: Vec<Milestone> =
        read_collection(&blaze_dir.join(MILESTONES_FILE))?.unwrap_or_default();
    let habits: Vec<Habit> = read_collection(&blaze_dir.join(HABITS_FILE))?.unwrap_or_default();
    let quotes: Vec<Quote> = read_collection(&blaze_dir.join(QUOTES_FILE))?.unwrap_or_default();
    let ideas: Vec<Idea> = read_collection(&blaze_dir.join(IDEAS_FILE))?.unwrap_or_default();
    let clock: Clock = read_collection(&blaze_dir.join(CLOCK_FILE))?
        .unwrap_or_else(|| Clock::new(chrono::Local::now().date_naive()));

    Ok(Vault {
        root: root.to_path_buf(),
        blaze_dir,
        config,
        tasks,
        milestones,
        habits,
        quotes,
        ideas,
        clock,
        dirty: DirtyFlags::default(),
    })
}

/// Serialize one collection as pretty-printed JSON and write it atomically.
fn write_collection<T: Serialize>(path: &Path, value: &T) -> Result<(), VaultError> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| VaultError::SerializeError {
        path: path.to_path_buf(),
        source: e,
    })?;
    json.push('\n');
    atomic_write(path, json.as_bytes()).map_err(|e| VaultError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save the vault back to disk. Only collections flagged dirty are
/// rewritten; the rest are left untouched. Clears the dirty flags on
/// success.
pub fn save_vault(vault: &mut Vault) -> Result<(), VaultError> {
    if vault.dirty.tasks {
        write_collection(&vault.blaze_dir.join(TASKS_FILE), &vault.tasks)?;
    }
    if vault.dirty.milestones {
        write_collection(&vault.blaze_dir.join(MILESTONES_FILE), &vault.milestones)?;
    }
    if vault.dirty.habits {
        write_collection(&vault.blaze_dir.join(HABITS_FILE), &vault.habits)?;
    }
    if vault.dirty.quotes {
        write_collection(&vault.blaze_dir.join(QUOTES_FILE), &vault.quotes)?;
    }
    if vault.dirty.ideas {
        write_collection(&vault.blaze_dir.join(IDEAS_FILE), &vault.ideas)?;
    }
    if vault.dirty.clock {
        write_collection(&vault.blaze_dir.join(CLOCK_FILE), &vault.clock)?;
    }
    vault.dirty = DirtyFlags::default();
    Ok(())
}
