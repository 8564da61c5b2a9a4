//! Serializable views of simulation state for external reporting

use serde::{Deserialize, Serialize};

use crate::core::calendar::TimeOfDay;
use crate::core::error::Result;
use crate::core::types::{ComponentId, Seconds};
use crate::environment::Environment;
use crate::plant::{ComponentKind, PlantComponent, PlantModel};
use crate::simulation::tick::{RunSummary, Simulation};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    pub time: Seconds,
    pub time_of_day: TimeOfDay,
    pub temperature: f64,
    pub moisture: f64,
    pub light: f64,
}

impl From<&Environment> for EnvironmentSnapshot {
    fn from(env: &Environment) -> Self {
        Self {
            time: env.time(),
            time_of_day: env.time_of_day(),
            temperature: env.temperature(),
            moisture: env.moisture(),
            light: env.light_level(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentSnapshot {
    pub id: ComponentId,
    pub name: String,
    pub kind: ComponentKind,
    pub parent: Option<ComponentId>,
    pub sugar: f64,
    pub water: f64,
    pub age: Seconds,
    pub size: f64,
    pub health: f64,
    pub samples: usize,
}

impl From<&PlantComponent> for ComponentSnapshot {
    fn from(c: &PlantComponent) -> Self {
        Self {
            id: c.id(),
            name: c.name().to_string(),
            kind: c.kind(),
            parent: c.parent(),
            sugar: c.sugar(),
            water: c.water(),
            age: c.age(),
            size: c.size(),
            health: c.health(),
            samples: c.history().len(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlantSnapshot {
    pub name: String,
    pub age: Seconds,
    pub alive: bool,
    pub total_sugar: f64,
    pub total_water: f64,
    pub components: Vec<ComponentSnapshot>,
}

impl From<&PlantModel> for PlantSnapshot {
    fn from(plant: &PlantModel) -> Self {
        Self {
            name: plant.name().to_string(),
            age: plant.age(),
            alive: plant.is_alive(),
            total_sugar: plant.total_sugar(),
            total_water: plant.total_water(),
            components: plant.components().iter().map(ComponentSnapshot::from).collect(),
        }
    }
}

/// Final state of a run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationReport {
    pub environment: EnvironmentSnapshot,
    pub plant: PlantSnapshot,
    pub summary: RunSummary,
}

impl SimulationReport {
    pub fn new(sim: &Simulation, summary: RunSummary) -> Self {
        Self {
            environment: EnvironmentSnapshot::from(sim.environment()),
            plant: PlantSnapshot::from(sim.plant()),
            summary,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Text report: environment block then plant block
pub fn text_report(sim: &Simulation) -> String {
    format!("<<Report>>\n{}\n{}", sim.environment(), sim.plant())
}
