use std::fs;
use std::path::Path;

use crate::io::vault_io::VaultError;
use crate::model::config::VaultConfig;

/// Read and parse `config.toml` from the blaze directory.
///
/// Every section is optional; missing keys fall back to the defaults
/// baked into [`VaultConfig`].
pub fn read_config(blaze_dir: &Path) -> Result<VaultConfig, VaultError> {
    let config_path = blaze_dir.join("config.toml");
    let config_text = fs::read_to_string(&config_path).map_err(|e| VaultError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: VaultConfig = toml::from_str(&config_text)?;
    Ok(config)
}
