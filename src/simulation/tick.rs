//! Tick driver - advances the environment, then the plant
//!
//! Each step runs: environment advance -> plant sample -> plant advance.
//! The plant always reads conditions for the tick it is in, and the
//! recorded sample is the state going into that tick.

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::{ComponentId, Seconds};
use crate::environment::{Climate, Environment};
use crate::plant::{ComponentKind, PlantModel};

/// Events generated during simulation steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// A component grew a successor
    ComponentSpawned {
        id: ComponentId,
        kind: ComponentKind,
        parent: Option<ComponentId>,
        /// Environment time of the tick that grew it
        time: Seconds,
    },
    /// The last living component died
    PlantDied { time: Seconds, age: Seconds },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    Alive,
    Died,
}

/// Result of a multi-tick run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks_run: u64,
    pub final_time: Seconds,
    pub survived: bool,
    pub component_count: usize,
}

impl RunSummary {
    pub fn summary(&self) -> String {
        format!(
            "Ran {} ticks to t={}s; plant {} with {} components",
            self.ticks_run,
            self.final_time,
            if self.survived { "survived" } else { "died" },
            self.component_count
        )
    }
}

/// One environment and the plant growing in it
#[derive(Debug, Clone)]
pub struct Simulation {
    environment: Environment,
    plant: PlantModel,
    ticks: u64,
    events: Vec<SimulationEvent>,
}

impl Simulation {
    pub fn new(environment: Environment, plant: PlantModel) -> Self {
        Self {
            environment,
            plant,
            ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            Environment::new(Climate::from(&config.climate)),
            PlantModel::new(config.plant_name.clone()),
        )
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn plant(&self) -> &PlantModel {
        &self.plant
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn events(&self) -> &[SimulationEvent] {
        &self.events
    }

    pub fn is_alive(&self) -> bool {
        self.plant.is_alive()
    }

    /// Advance one tick of `duration` seconds
    pub fn step(&mut self, duration: Seconds) -> TickOutcome {
        let was_alive = self.plant.is_alive();

        self.environment.advance(duration);
        self.plant.record_sample();
        let spawned = self.plant.advance(&mut self.environment, duration);
        self.ticks += 1;

        let time = self.environment.time();
        for id in spawned {
            if let Some(component) = self.plant.component(id) {
                self.events.push(SimulationEvent::ComponentSpawned {
                    id,
                    kind: component.kind(),
                    parent: component.parent(),
                    time,
                });
            }
        }

        if self.plant.is_alive() {
            return TickOutcome::Alive;
        }

        if was_alive {
            tracing::warn!(
                plant = %self.plant.name(),
                time,
                age = self.plant.age(),
                "plant died"
            );
            self.events.push(SimulationEvent::PlantDied {
                time,
                age: self.plant.age(),
            });
        }
        TickOutcome::Died
    }

    /// Step up to `ticks` times, stopping early if the plant dies
    pub fn run(&mut self, ticks: u64, duration: Seconds) -> RunSummary {
        self.run_with(ticks, duration, Seconds::MAX, |_| {})
    }

    /// Like `run`, calling `observer` before the first tick at or past
    /// each multiple of `report_interval` seconds
    pub fn run_with<F>(
        &mut self,
        ticks: u64,
        duration: Seconds,
        report_interval: Seconds,
        mut observer: F,
    ) -> RunSummary
    where
        F: FnMut(&Simulation),
    {
        let interval = report_interval.max(1);
        let mut next_report = self.environment.time();
        let mut ticks_run = 0;

        tracing::info!(
            plant = %self.plant.name(),
            ticks,
            duration,
            "simulation starting"
        );

        while ticks_run < ticks {
            let now = self.environment.time();
            if now >= next_report {
                observer(self);
                tracing::debug!(
                    time = now,
                    components = self.plant.component_count(),
                    sugar = self.plant.total_sugar(),
                    water = self.plant.total_water(),
                    "progress"
                );
                next_report = now.saturating_add(interval - now % interval);
            }

            let outcome = self.step(duration);
            ticks_run += 1;
            if outcome == TickOutcome::Died {
                break;
            }
        }

        let summary = RunSummary {
            ticks_run,
            final_time: self.environment.time(),
            survived: self.plant.is_alive(),
            component_count: self.plant.component_count(),
        };
        tracing::info!("{}", summary.summary());
        summary
    }
}
