use crate::config::{self, Config};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn list(config: &Config) -> Result<()> {
    // Config derives Serialize, so pretty-print it as TOML
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    // Convert to Value and walk dot-notation paths ("api.leave_url")
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let path = config::config_path()?;
    let mut config = if path.exists() {
        config::load_from_path(&path)?
    } else {
        Config::default()
    };

    match key {
        "api.leave_url" => config.api.leave_url = value.to_string(),
        "api.directory_url" => config.api.directory_url = value.to_string(),
        "leave.hours_per_workday" => {
            config.leave.hours_per_workday = value
                .parse()
                .with_context(|| format!("'{}' is not a valid hour count", value))?;
        }
        "state.state_dir_override" => {
            config.state.state_dir_override = Some(PathBuf::from(value));
        }
        other => anyhow::bail!(
            "Unknown config key '{}'. Keys: api.leave_url, api.directory_url, \
             leave.hours_per_workday, state.state_dir_override",
            other
        ),
    }

    config.validate()?;
    config::save_to_path(&config, &path)?;

    println!("✓ Set {} = {}", key, value);
    Ok(())
}
