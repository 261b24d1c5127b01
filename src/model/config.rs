use serde::{Deserialize, Serialize};

use crate::model::task::Timeframe;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultConfig {
    #[serde(default)]
    pub vault: VaultInfo,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub tasks: TaskConfig,
    #[serde(default)]
    pub milestones: MilestoneConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultInfo {
    #[serde(default = "default_vault_name")]
    pub name: String,
}

impl Default for VaultInfo {
    fn default() -> Self {
        VaultInfo {
            name: default_vault_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Run the missed-task sweep on every vault load
    #[serde(default = "default_true")]
    pub auto: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig { auto: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Priority assigned when `bz add` is called without `-p`
    #[serde(default = "default_priority")]
    pub default_priority: u8,
    /// Timeframe assigned when `bz add` is called without `-t`
    #[serde(default = "default_timeframe")]
    pub default_timeframe: Timeframe,
}

impl Default for TaskConfig {
    fn default() -> Self {
        TaskConfig {
            default_priority: default_priority(),
            default_timeframe: default_timeframe(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneConfig {
    /// Increment applied by `bz milestone bump` without `--by`
    #[serde(default = "default_progress_step")]
    pub progress_step: u8,
}

impl Default for MilestoneConfig {
    fn default() -> Self {
        MilestoneConfig {
            progress_step: default_progress_step(),
        }
    }
}

fn default_vault_name() -> String {
    "personal".to_string()
}

fn default_true() -> bool {
    true
}

fn default_priority() -> u8 {
    5
}

fn default_timeframe() -> Timeframe {
    Timeframe::Daily
}

fn default_progress_step() -> u8 {
    10
}
