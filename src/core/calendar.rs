//! Time-of-day breakdown of simulated seconds
//!
//! The environment keeps raw elapsed seconds; reporting wants days and
//! clock hours, and a coarse period for log lines.

use serde::{Deserialize, Serialize};

use super::types::Seconds;

/// Length of one simulated day in seconds
pub const ONE_DAY: Seconds = 24 * 60 * 60;

/// Coarse periods of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePeriod {
    Morning,    // 06:00-12:00
    Afternoon,  // 12:00-18:00
    Evening,    // 18:00-22:00
    Night,      // 22:00-06:00
}

impl TimePeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimePeriod::Morning,
            12..=17 => TimePeriod::Afternoon,
            18..=21 => TimePeriod::Evening,
            _ => TimePeriod::Night, // 22-23, 0-5
        }
    }
}

/// Wall-clock view of an elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub day: u64,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    pub fn from_seconds(time: Seconds) -> Self {
        let in_day = time % ONE_DAY;
        Self {
            day: time / ONE_DAY,
            hour: (in_day / 3600) as u32,
            minute: ((in_day % 3600) / 60) as u32,
            second: (in_day % 60) as u32,
        }
    }

    pub fn period(&self) -> TimePeriod {
        TimePeriod::from_hour(self.hour)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "day {} {:02}:{:02}:{:02}",
            self.day, self.hour, self.minute, self.second
        )
    }
}
