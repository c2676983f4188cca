//! Runtime settings, read from the environment (and `.env` via dotenv).

use crate::error::{Result, SubnetError};
use crate::models::{HostCountPolicy, UsableRangePolicy};
use std::str::FromStr;

pub const ENV_HOST_COUNT: &str = "SUBNET_HOST_COUNT";
pub const ENV_USABLE_RANGE: &str = "SUBNET_USABLE_RANGE";
pub const ENV_OUTPUT: &str = "SUBNET_OUTPUT";
pub const ENV_SHOW_BINARY: &str = "SUBNET_SHOW_BINARY";

/// Log config file loaded by the binary, relative to the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// How the report is written to stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(SubnetError::Config(format!(
                "unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host_count: HostCountPolicy,
    pub usable_range: UsableRangePolicy,
    pub output: OutputFormat,
    pub show_binary: bool,
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(value) = lookup(ENV_HOST_COUNT) {
            settings.host_count = value.parse()?;
        }
        if let Some(value) = lookup(ENV_USABLE_RANGE) {
            settings.usable_range = value.parse()?;
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            settings.output = value.parse()?;
        }
        if let Some(value) = lookup(ENV_SHOW_BINARY) {
            settings.show_binary = parse_bool(ENV_SHOW_BINARY, &value)?;
        }
        log::debug!("Settings: {settings:?}");
        Ok(settings)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(SubnetError::Config(format!(
            "{key}={other} is not a boolean"
        ))),
    }
}
