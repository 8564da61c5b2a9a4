//! A whole plant: an append-only arena of components

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{ComponentId, Seconds};
use crate::environment::Environment;
use crate::plant::component::{PlantComponent, Resources};
use crate::plant::kind::ComponentKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantModel {
    name: String,
    age: Seconds,
    /// Creation order; a component's id is its index here
    components: Vec<PlantComponent>,
}

impl PlantModel {
    /// A plant that starts life as a single seed
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_initial(name, ComponentKind::Seed, Resources::seed())
    }

    /// A plant whose first component has the given kind and state
    pub fn with_initial(name: impl Into<String>, kind: ComponentKind, resources: Resources) -> Self {
        let first = PlantComponent::new(ComponentId(0), kind, None, 0, resources);
        Self {
            name: name.into(),
            age: 0,
            components: vec![first],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Seconds {
        self.age
    }

    pub fn components(&self) -> &[PlantComponent] {
        &self.components
    }

    pub fn component(&self, id: ComponentId) -> Option<&PlantComponent> {
        self.components.get(id.index())
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn count_kind(&self, kind: ComponentKind) -> usize {
        self.components.iter().filter(|c| c.kind() == kind).count()
    }

    pub fn is_alive(&self) -> bool {
        self.components.iter().any(|c| c.is_alive())
    }

    pub fn total_water(&self) -> f64 {
        self.components.iter().map(|c| c.water()).sum()
    }

    pub fn total_sugar(&self) -> f64 {
        self.components.iter().map(|c| c.sugar()).sum()
    }

    /// Run one tick against `env`, which must already be advanced.
    ///
    /// Every phase runs over the components that existed when the tick
    /// began. Components grown this tick are appended straight away but
    /// sit out until the next tick. Returns the ids of new components.
    pub fn advance(&mut self, env: &mut Environment, duration: Seconds) -> Vec<ComponentId> {
        self.age += duration;
        for component in &mut self.components {
            component.age_by(duration);
        }

        let active = self.components.len();

        for component in &mut self.components[..active] {
            component.extract_water(env);
        }

        for component in &mut self.components[..active] {
            component.photosynthesize(env);
        }

        let mut spawned = Vec::new();
        for idx in 0..active {
            if let Some(kind) = self.components[idx].feed() {
                spawned.push(self.append(kind, ComponentId(idx)));
            }
        }

        for component in &mut self.components[..active] {
            component.stress(env);
        }

        spawned
    }

    fn append(&mut self, kind: ComponentKind, parent: ComponentId) -> ComponentId {
        let id = ComponentId(self.components.len());
        self.components
            .push(PlantComponent::new(id, kind, Some(parent), self.age, Resources::default()));

        tracing::debug!(
            plant = %self.name,
            parent = %parent,
            child = %id,
            kind = %kind,
            age = self.age,
            "component spawned"
        );
        id
    }

    /// Append a sample to every component's history
    pub fn record_sample(&mut self) {
        for component in &mut self.components {
            component.record_sample();
        }
    }
}

impl fmt::Display for PlantModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plant {} (age {})", self.name, self.age)?;
        for component in &self.components {
            write!(f, "\n  {}", component)?;
        }
        Ok(())
    }
}
