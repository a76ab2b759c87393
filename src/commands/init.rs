use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};
use crate::core::ConfigError;

/// Write the default configuration into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(ConfigError::AlreadyExists(config_path).into());
    }

    fs::write(&config_path, DEFAULT_CONFIG_TOML)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
