use std::path::PathBuf;

use super::clock::Clock;
use super::config::VaultConfig;
use super::habit::Habit;
use super::idea::Idea;
use super::milestone::Milestone;
use super::quote::Quote;
use super::task::Task;

/// A fully loaded blaze vault
#[derive(Debug)]
pub struct Vault {
    /// Root directory of the vault (parent of `blaze/`)
    pub root: PathBuf,
    /// Path to the `blaze/` directory
    pub blaze_dir: PathBuf,
    /// Parsed config.toml
    pub config: VaultConfig,
    pub tasks: Vec<Task>,
    pub milestones: Vec<Milestone>,
    pub habits: Vec<Habit>,
    pub quotes: Vec<Quote>,
    pub ideas: Vec<Idea>,
    pub clock: Clock,
    /// Which collections have unsaved changes
    pub dirty: DirtyFlags,
}

/// Tracks which collection files need rewriting on save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    pub tasks: bool,
    pub milestones: bool,
    pub habits: bool,
    pub quotes: bool,
    pub ideas: bool,
    pub clock: bool,
}

impl DirtyFlags {
    pub fn any(self) -> bool {
        self.tasks || self.milestones || self.habits || self.quotes || self.ideas || self.clock
    }
}
