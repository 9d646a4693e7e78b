//! Loading configuration from disk

use std::fs;
use std::path::Path;

use super::schema::TrainerConfig;
use super::validate::validate_config;
use crate::error::{Error, Result};

/// Load a YAML configuration and validate it
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<TrainerConfig> {
    let path = config_path.as_ref();
    let yaml = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;

    let config: TrainerConfig = serde_yaml::from_str(&yaml)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))?;

    validate_config(&config)?;
    Ok(config)
}

/// Write a configuration as YAML
pub fn save_config<P: AsRef<Path>>(config: &TrainerConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let yaml = serde_yaml::to_string(config)?;
    fs::write(path, yaml)
        .map_err(|e| Error::io(format!("Failed to write config file {}", path.display()), e))
}

impl TrainerConfig {
    /// Reload the JSON snapshot written beside a checkpoint
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read snapshot {}", path.display()), e))?;
        Ok(serde_json::from_str(&json)?)
    }
}
