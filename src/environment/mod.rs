//! The environment a plant grows in
//!
//! Owns simulated time and the conditions derived from it. Plants
//! draw water from it and read its light and dryness.

pub mod climate;

pub use climate::{Climate, Conditions};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::calendar::TimeOfDay;
use crate::core::types::Seconds;

/// Moisture below this is dry
pub const DRY_THRESHOLD: f64 = 50.0;

/// Moisture above this is saturated
pub const SATURATED_THRESHOLD: f64 = 1500.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    time: Seconds,
    temperature: f64,
    moisture: f64,
    light: f64,
    soil_quality: Option<f64>,
    climate: Climate,
}

impl Environment {
    /// Environment at time zero with conditions taken from `climate`
    pub fn new(climate: Climate) -> Self {
        let c = climate.conditions(0);
        Self {
            time: 0,
            temperature: c.temperature,
            moisture: c.moisture,
            light: c.light,
            soil_quality: None,
            climate,
        }
    }

    pub fn eden() -> Self {
        Self::new(Climate::Eden)
    }

    pub fn constant(temperature: f64, moisture: f64, light: f64) -> Self {
        Self::new(Climate::Constant(Conditions {
            temperature,
            moisture,
            light,
        }))
    }

    pub fn with_soil_quality(mut self, quality: f64) -> Self {
        self.soil_quality = Some(quality);
        self
    }

    /// Move time forward and recompute conditions for the new time
    pub fn advance(&mut self, duration: Seconds) {
        self.time += duration;
        let c = self.climate.conditions(self.time);
        self.temperature = c.temperature;
        self.moisture = c.moisture.max(0.0);
        self.light = c.light;
    }

    /// Take up to `requested` water out of the soil; returns what was granted
    pub fn withdraw_water(&mut self, requested: f64) -> f64 {
        let granted = requested.max(0.0).min(self.moisture);
        self.moisture -= granted;
        granted
    }

    pub fn is_dry(&self) -> bool {
        self.moisture < DRY_THRESHOLD
    }

    pub fn is_saturated(&self) -> bool {
        self.moisture > SATURATED_THRESHOLD
    }

    pub fn light_level(&self) -> f64 {
        self.light
    }

    pub fn time(&self) -> Seconds {
        self.time
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn moisture(&self) -> f64 {
        self.moisture
    }

    pub fn soil_quality(&self) -> Option<f64> {
        self.soil_quality
    }

    pub fn climate(&self) -> &Climate {
        &self.climate
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_seconds(self.time)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Environment @ {} ({:?})", self.time_of_day(), self.time_of_day().period())?;
        writeln!(f, "  temperature: {:.2}", self.temperature)?;
        writeln!(f, "  moisture:    {:.2}", self.moisture)?;
        write!(f, "  light:       {:.2}", self.light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::ONE_DAY;

    #[test]
    fn test_new_starts_at_time_zero() {
        let env = Environment::eden();
        assert_eq!(env.time(), 0);
        assert!((env.temperature() - 16.0).abs() < 1e-9);
        assert!(env.soil_quality().is_none());
    }

    #[test]
    fn test_withdraw_caps_at_available() {
        let mut env = Environment::constant(20.0, 30.0, 100.0);
        assert_eq!(env.withdraw_water(10.0), 10.0);
        assert_eq!(env.moisture(), 20.0);
        assert_eq!(env.withdraw_water(50.0), 20.0);
        assert_eq!(env.moisture(), 0.0);
        assert_eq!(env.withdraw_water(5.0), 0.0);
    }

    #[test]
    fn test_withdraw_negative_grants_nothing() {
        let mut env = Environment::constant(20.0, 30.0, 100.0);
        assert_eq!(env.withdraw_water(-4.0), 0.0);
        assert_eq!(env.moisture(), 30.0);
    }

    #[test]
    fn test_advance_restores_moisture() {
        let mut env = Environment::constant(20.0, 300.0, 100.0);
        env.withdraw_water(250.0);
        assert!(env.is_dry());
        env.advance(1);
        assert_eq!(env.moisture(), 300.0);
        assert!(!env.is_dry());
    }

    #[test]
    fn test_dry_and_saturated_thresholds() {
        assert!(Environment::constant(20.0, 49.9, 0.0).is_dry());
        assert!(!Environment::constant(20.0, 50.0, 0.0).is_dry());
        assert!(Environment::constant(20.0, 1500.1, 0.0).is_saturated());
        assert!(!Environment::constant(20.0, 1500.0, 0.0).is_saturated());
    }

    #[test]
    fn test_eden_midday_is_dry() {
        let mut env = Environment::eden();
        env.advance(ONE_DAY / 2);
        assert!(env.is_dry());
        assert!(!env.is_saturated());
    }

    #[test]
    fn test_display_mentions_conditions() {
        let text = Environment::eden().to_string();
        assert!(text.contains("day 0 00:00:00"));
        assert!(text.contains("moisture"));
    }
}
