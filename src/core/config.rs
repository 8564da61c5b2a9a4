//! Simulation run configuration
//!
//! Biological constants live with the component kinds; this file only
//! collects the knobs a driver can turn between runs. Values load from
//! TOML and any field left out falls back to the default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::calendar::ONE_DAY;
use super::error::{Result, SproutError};
use super::types::Seconds;

/// Which environment drives the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClimateConfig {
    /// Smooth diurnal cycle of temperature, moisture and light
    Eden,
    /// Fixed conditions, restored on every advance
    Constant {
        temperature: f64,
        moisture: f64,
        light: f64,
    },
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self::Eden
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Name given to the plant in reports
    pub plant_name: String,

    /// Simulated seconds per tick
    ///
    /// Every component update runs once per tick regardless of this
    /// value, so larger ticks only move the environment further between
    /// plant updates.
    pub tick_seconds: Seconds,

    /// Total simulated hours before the run stops
    pub hours: u64,

    /// Simulated seconds between progress reports
    ///
    /// Should be a multiple of tick_seconds; reports fire on the first
    /// tick at or past each boundary.
    pub report_interval: Seconds,

    pub climate: ClimateConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            plant_name: "Sprout".to_string(),
            tick_seconds: 1,
            hours: 24,
            report_interval: 60 * 60,
            climate: ClimateConfig::Eden,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of ticks the run lasts
    pub fn total_ticks(&self) -> u64 {
        (self.hours * 3600) / self.tick_seconds.max(1)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.tick_seconds == 0 {
            return Err(SproutError::InvalidConfig(
                "tick_seconds must be positive".into(),
            ));
        }

        if self.tick_seconds > ONE_DAY {
            return Err(SproutError::InvalidConfig(format!(
                "tick_seconds ({}) should not exceed one day ({})",
                self.tick_seconds, ONE_DAY
            )));
        }

        if self.hours == 0 {
            return Err(SproutError::InvalidConfig("hours must be positive".into()));
        }

        if self.report_interval < self.tick_seconds {
            return Err(SproutError::InvalidConfig(format!(
                "report_interval ({}) should be >= tick_seconds ({})",
                self.report_interval, self.tick_seconds
            )));
        }

        if let ClimateConfig::Constant { moisture, light, .. } = self.climate {
            if moisture < 0.0 || light < 0.0 {
                return Err(SproutError::InvalidConfig(
                    "constant climate moisture and light must be non-negative".into(),
                ));
            }
        }

        Ok(())
    }
}
