// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

mod validation;

pub use validation::{ConfigIssue, ValidationResult};

use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use elpris_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

fn default_base_url() -> String {
    elpris_client::elpriset::DEFAULT_BASE_URL.to_owned()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cutoff_hour() -> u32 {
    13
}

fn default_timezone() -> String {
    "Europe/Stockholm".to_owned()
}

fn default_log_level() -> String {
    "warn".to_owned()
}

/// Application configuration, read from an optional TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElprisConfig {
    /// Price API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// When to look for tomorrow's prices
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the price API (overridable for testing)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Custom User-Agent header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Tomorrow's prices are fetched once the local time is past this hour
    #[serde(default = "default_cutoff_hour")]
    pub tomorrow_cutoff_hour: u32,

    /// IANA timezone that decides what "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ElprisConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            schedule: ScheduleConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            tomorrow_cutoff_hour: default_cutoff_hour(),
            timezone: default_timezone(),
        }
    }
}

impl ElprisConfig {
    /// Settings for the HTTP price client
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig {
            base_url: self.api.base_url.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
            ..Default::default()
        };
        if let Some(user_agent) = &self.api.user_agent {
            client.user_agent.clone_from(user_agent);
        }
        client
    }

    pub fn timezone(&self) -> Result<Tz> {
        self.schedule
            .timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("Invalid timezone '{}': {e}", self.schedule.timezone))
    }

    /// Check field values, collecting every problem instead of stopping at the first
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            result.error("api.base_url", "Base URL must not be empty");
        } else if base_url.starts_with("http://") {
            result.warn("api.base_url", "Plain HTTP is used for price requests");
        } else if !base_url.starts_with("https://") {
            result.error("api.base_url", "Base URL must start with http:// or https://");
        }

        if self.api.timeout_secs == 0 {
            result.error("api.timeout_secs", "Timeout must be at least 1 second");
        }

        if self.schedule.tomorrow_cutoff_hour > 23 {
            result.error(
                "schedule.tomorrow_cutoff_hour",
                format!(
                    "Cutoff hour must be 0-23, got {}",
                    self.schedule.tomorrow_cutoff_hour
                ),
            );
        }

        if let Err(e) = self.timezone() {
            result.error("schedule.timezone", e.to_string());
        }

        result
    }
}

/// Load configuration from `path`, or use defaults when no path is given
///
/// Runs before logging is set up, so it does not log itself.
pub fn load_config(path: Option<&Path>) -> Result<ElprisConfig> {
    let Some(path) = path else {
        return Ok(ElprisConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ElprisConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    Ok(config)
}
