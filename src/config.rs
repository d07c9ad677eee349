// Configuration management

use crate::error::{Result, UnitCheckError};
use crate::systemd::UnitScope;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where unit information is read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Run the systemctl command
    #[default]
    Systemctl,
    /// Talk to systemd over D-Bus
    Dbus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: Backend,
    pub scope: UnitScope,
    pub systemctl_path: PathBuf,
    pub check_all: bool,
    pub critical_units: Vec<String>,
    pub ignored_units: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Systemctl,
            scope: UnitScope::System,
            systemctl_path: PathBuf::from("systemctl"),
            check_all: false,
            critical_units: Vec::new(),
            ignored_units: Vec::new(),
        }
    }
}

impl Config {
    /// Get default config path: ~/.config/unitcheck/config.yaml
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("unitcheck").join("config.yaml"))
    }

    /// Load config from path, falling back to defaults if not found
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| Self::default_path().unwrap_or_default());

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_yaml::from_str(&contents).map_err(|e| {
                UnitCheckError::Config(format!("{}: {}", config_path.display(), e))
            })?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}
