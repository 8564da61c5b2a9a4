pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::{TimeOfDay, TimePeriod, ONE_DAY};
pub use config::{ClimateConfig, SimulationConfig};
pub use error::{Result, SproutError};
pub use types::{ComponentId, Seconds, ValueRange};
