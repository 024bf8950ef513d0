use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub leave: LeaveConfig,
    #[serde(default)]
    pub state: StateConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the leave-management service (permisos, usuarios/login)
    #[serde(default = "default_leave_url")]
    pub leave_url: String,
    /// Base URL of the employee directory service
    #[serde(default = "default_directory_url")]
    pub directory_url: String,
}

fn default_leave_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_directory_url() -> String {
    "http://localhost:8762".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            leave_url: default_leave_url(),
            directory_url: default_directory_url(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LeaveConfig {
    /// Hours counted per calendar day of leave
    pub hours_per_workday: u32,
}

impl Default for LeaveConfig {
    fn default() -> Self {
        Self {
            hours_per_workday: crate::draft::duration::DEFAULT_HOURS_PER_WORKDAY,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StateConfig {
    /// Optional override for state directory (for testing)
    pub state_dir_override: Option<PathBuf>,
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        if self.leave_url.trim_end_matches('/').is_empty() {
            anyhow::bail!("api.leave_url must not be empty");
        }
        if self.directory_url.trim_end_matches('/').is_empty() {
            anyhow::bail!("api.directory_url must not be empty");
        }
        Ok(())
    }
}

impl LeaveConfig {
    pub fn validate(&self) -> Result<()> {
        if self.hours_per_workday == 0 {
            anyhow::bail!("leave.hours_per_workday must be greater than 0");
        }

        if self.hours_per_workday > 12 {
            eprintln!(
                "Warning: leave.hours_per_workday = {} is unusually long for a workday",
                self.hours_per_workday
            );
        }

        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.leave.validate()?;
        Ok(())
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

pub fn config_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".permiso-cli");
    Ok(config_dir.join("config.toml"))
}

pub fn load() -> Result<Config> {
    let config_path = config_path()?;
    let config = load_from_path(&config_path)?;

    config.validate()?;

    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
