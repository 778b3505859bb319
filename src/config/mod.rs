// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! Configuration module

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, SmartGuardError};

/// Longest simulator tick period accepted, one day
pub const MAX_TICK_INTERVAL_SECS: u64 = 86_400;

/// Accepted values of `log_level`
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application name
    pub app_name: String,

    /// Default log level, overridden by `RUST_LOG` or `--debug`/`--trace`
    pub log_level: String,

    /// Controller behaviour
    pub controller: ControllerConfig,

    /// Sensor simulator
    pub simulator: SimulatorConfig,

    /// Activity log display
    pub log: LogConfig,

    /// GUI configuration
    pub gui: GuiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "SmartGuard".to_string(),
            log_level: "info".to_string(),
            controller: ControllerConfig::default(),
            simulator: SimulatorConfig::default(),
            log: LogConfig::default(),
            gui: GuiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Load or create default configuration
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            config.save(path)?;
            Ok(config)
        }
    }

    /// Reject values the controller and scheduler cannot run with.
    pub fn validate(&self) -> Result<()> {
        let p = self.simulator.trigger_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(SmartGuardError::Invalid {
                field: "simulator.trigger_probability",
                reason: format!("{} is outside [0, 1]", p),
            });
        }
        let secs = self.simulator.tick_interval_secs;
        if !(1..=MAX_TICK_INTERVAL_SECS).contains(&secs) {
            return Err(SmartGuardError::Invalid {
                field: "simulator.tick_interval_secs",
                reason: format!("{} is outside [1, {}]", secs, MAX_TICK_INTERVAL_SECS),
            });
        }
        if !LOG_LEVELS.contains(&self.log_directive().as_str()) {
            return Err(SmartGuardError::Invalid {
                field: "log_level",
                reason: format!("`{}` is not one of {}", self.log_level, LOG_LEVELS.join(", ")),
            });
        }
        if self.log.display_limit == 0 {
            return Err(SmartGuardError::Invalid {
                field: "log.display_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// `log_level` as an `EnvFilter` directive
    pub fn log_directive(&self) -> String {
        self.log_level.trim().to_lowercase()
    }

    /// Get configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("smartguard"))
            .unwrap_or_else(|| PathBuf::from("./config"))
    }

    /// Get default configuration path
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}

/// Initial state and disarm behaviour of the controller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Doors start locked
    pub doors_locked_at_start: bool,

    /// Reset every sensor flag when the system is disarmed
    pub clear_sensors_on_disarm: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            doors_locked_at_start: true,
            clear_sensors_on_disarm: true,
        }
    }
}

/// Random sensor simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Run the periodic tick at all
    pub enabled: bool,

    /// Seconds between ticks
    pub tick_interval_secs: u64,

    /// Chance per tick that a sensor trips while armed
    pub trigger_probability: f64,

    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_interval_secs: 5,
            trigger_probability: 0.05,
            seed: None,
        }
    }
}

/// Activity log display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Number of most recent entries shown
    pub display_limit: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { display_limit: 50 }
    }
}

/// GUI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,

    /// Theme
    pub theme: Theme,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            theme: Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
    System,
}
