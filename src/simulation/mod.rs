pub mod report;
pub mod tick;

pub use report::{text_report, PlantSnapshot, SimulationReport};
pub use tick::{RunSummary, Simulation, SimulationEvent, TickOutcome};
