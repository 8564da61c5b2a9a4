//! Climate curves - pure functions from elapsed time to conditions

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::calendar::ONE_DAY;
use crate::core::config::ClimateConfig;
use crate::core::types::Seconds;

/// Temperature, moisture and light at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub temperature: f64,
    pub moisture: f64,
    pub light: f64,
}

/// Closed set of environment kinds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Climate {
    /// Warm and bright at midday, cool and dark at night
    Eden,
    /// Same conditions at every instant
    Constant(Conditions),
}

impl Climate {
    /// Conditions at `time`. Depends on nothing but `time`.
    pub fn conditions(&self, time: Seconds) -> Conditions {
        match self {
            Climate::Eden => eden(time),
            Climate::Constant(c) => Conditions {
                moisture: c.moisture.max(0.0),
                ..*c
            },
        }
    }
}

impl From<&ClimateConfig> for Climate {
    fn from(config: &ClimateConfig) -> Self {
        match *config {
            ClimateConfig::Eden => Climate::Eden,
            ClimateConfig::Constant {
                temperature,
                moisture,
                light,
            } => Climate::Constant(Conditions {
                temperature,
                moisture,
                light,
            }),
        }
    }
}

/// Angle of the day: 0 at midnight, PI at midday
pub fn day_angle(time: Seconds) -> f64 {
    2.0 * PI * ((time % ONE_DAY) as f64 / ONE_DAY as f64)
}

pub fn eden_temperature(theta: f64) -> f64 {
    6.0 * (theta - PI / 2.0).sin() + 22.0
}

pub fn eden_moisture(theta: f64, temperature: f64) -> f64 {
    (200.0 * theta.cos() - temperature + 225.0).max(0.0)
}

pub fn eden_light(theta: f64) -> f64 {
    let s = ((theta + PI) / 2.0).sin();
    215.0 * (-(s * s)).exp()
}

fn eden(time: Seconds) -> Conditions {
    let theta = day_angle(time);
    let temperature = eden_temperature(theta);
    Conditions {
        temperature,
        moisture: eden_moisture(theta, temperature),
        light: eden_light(theta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eden_midnight() {
        let c = Climate::Eden.conditions(0);
        assert!((c.temperature - 16.0).abs() < 1e-9);
        assert!((c.moisture - 409.0).abs() < 1e-9);
        assert!((c.light - 215.0 * (-1.0f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn test_eden_midday_is_warm_bright_and_dry() {
        let c = Climate::Eden.conditions(ONE_DAY / 2);
        assert!((c.temperature - 28.0).abs() < 1e-9);
        assert!((c.light - 215.0).abs() < 1e-9);
        // 200*cos(pi) - 28 + 225 = -3, clamped
        assert_eq!(c.moisture, 0.0);
    }

    #[test]
    fn test_eden_is_periodic() {
        for t in [0, 1234, 43_200, 80_000] {
            assert_eq!(
                Climate::Eden.conditions(t),
                Climate::Eden.conditions(t + 3 * ONE_DAY)
            );
        }
    }

    #[test]
    fn test_constant_clamps_moisture() {
        let climate = Climate::Constant(Conditions {
            temperature: 20.0,
            moisture: -5.0,
            light: 100.0,
        });
        assert_eq!(climate.conditions(10).moisture, 0.0);
        assert_eq!(climate.conditions(10).light, 100.0);
    }

    #[test]
    fn test_from_config() {
        assert_eq!(Climate::from(&ClimateConfig::Eden), Climate::Eden);
        let climate = Climate::from(&ClimateConfig::Constant {
            temperature: 1.0,
            moisture: 2.0,
            light: 3.0,
        });
        assert_eq!(
            climate.conditions(0),
            Conditions {
                temperature: 1.0,
                moisture: 2.0,
                light: 3.0
            }
        );
    }
}
