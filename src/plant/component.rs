//! One anatomical unit of a plant
//!
//! A component holds its own water, sugar, health and size. Each tick the
//! owning plant drives it through water extraction, photosynthesis,
//! feeding (heal then grow) and stress. Growth may ask the plant to
//! append a successor component; the component itself never touches the
//! plant's collection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{ComponentId, Seconds};
use crate::environment::Environment;
use crate::plant::kind::{ComponentKind, KindTraits};
use crate::plant::stats::{History, Sample};

pub const MAX_HEALTH: f64 = 1000.0;
pub const MIN_SIZE: f64 = 1.0;
pub const MAX_SIZE: f64 = 10.0;

/// Light above this counts as sun exposure
pub const SUN_ACTIVATION_LIGHT: f64 = 100.0;

pub const SUN_DAMAGE: f64 = 0.2;
pub const WATER_DAMAGE: f64 = 0.1;

/// Sugar spent to grow a successor
pub const SPAWN_COST: f64 = 3.0 * MAX_SIZE;

/// Smallest size at which a successor can be grown
pub const SPAWN_MIN_SIZE: f64 = 0.75 * MAX_SIZE;

/// Resource state of a component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub water: f64,
    pub sugar: f64,
    pub health: f64,
    pub size: f64,
}

impl Resources {
    /// Starting state of a freshly planted seed
    pub fn seed() -> Self {
        Self {
            water: 10.0,
            sugar: 5.0,
            health: MAX_HEALTH,
            size: MIN_SIZE,
        }
    }

    /// Pull every quantity back inside its legal bounds
    pub fn clamped(self) -> Self {
        Self {
            water: self.water.max(0.0),
            sugar: self.sugar.max(0.0),
            health: self.health.clamp(0.0, MAX_HEALTH),
            size: self.size.clamp(MIN_SIZE, MAX_SIZE),
        }
    }
}

impl Default for Resources {
    /// State of a component grown by another component
    fn default() -> Self {
        Self {
            water: 0.0,
            sugar: 0.0,
            health: MAX_HEALTH,
            size: MIN_SIZE,
        }
    }
}

impl From<&Resources> for Sample {
    fn from(r: &Resources) -> Self {
        Sample {
            sugar: r.sugar,
            water: r.water,
            health: r.health,
            size: r.size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantComponent {
    id: ComponentId,
    name: String,
    kind: ComponentKind,
    /// Component whose growth created this one
    parent: Option<ComponentId>,
    /// Plant age when this component appeared
    born_at: Seconds,
    age: Seconds,
    resources: Resources,
    can_spawn_successor: bool,
    history: History,
}

impl PlantComponent {
    pub fn new(
        id: ComponentId,
        kind: ComponentKind,
        parent: Option<ComponentId>,
        born_at: Seconds,
        resources: Resources,
    ) -> Self {
        Self {
            id,
            name: format!("{} {}", kind, id),
            kind,
            parent,
            born_at,
            age: 0,
            resources: resources.clamped(),
            can_spawn_successor: kind.successor().is_some(),
            history: History::new(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    pub fn born_at(&self) -> Seconds {
        self.born_at
    }

    pub fn age(&self) -> Seconds {
        self.age
    }

    pub fn water(&self) -> f64 {
        self.resources.water
    }

    pub fn sugar(&self) -> f64 {
        self.resources.sugar
    }

    pub fn health(&self) -> f64 {
        self.resources.health
    }

    pub fn size(&self) -> f64 {
        self.resources.size
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn can_spawn_successor(&self) -> bool {
        self.can_spawn_successor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn traits(&self) -> &'static KindTraits {
        self.kind.traits()
    }

    pub fn is_alive(&self) -> bool {
        self.resources.health > 0.0
    }

    pub fn water_capacity(&self) -> f64 {
        2.0 * self.resources.size
    }

    pub fn dry(&self) -> bool {
        self.kind.dry(self.resources.water, self.water_capacity())
    }

    pub fn damp(&self) -> bool {
        self.kind.damp(self.resources.water, self.water_capacity())
    }

    pub fn soaked(&self) -> bool {
        self.kind.soaked(self.resources.water, self.water_capacity())
    }

    pub fn age_by(&mut self, duration: Seconds) {
        self.age += duration;
    }

    /// Whether the light is strong enough to photosynthesize.
    /// Separate from the tolerance band used for sun damage.
    pub fn sun_exposure(&self, env: &Environment) -> bool {
        self.is_alive() && env.light_level() > SUN_ACTIVATION_LIGHT
    }

    /// Draw water from the soil up to capacity; returns the new water level
    pub fn extract_water(&mut self, env: &mut Environment) -> f64 {
        if !self.is_alive() {
            return self.resources.water;
        }
        let room = (self.water_capacity() - self.resources.water).max(0.0);
        let request = self.traits().water_absorption_rate.min(room);
        self.resources.water += env.withdraw_water(request);
        self.resources.water
    }

    pub fn photosynthesize(&mut self, env: &Environment) {
        if !self.damp() || !self.sun_exposure(env) {
            return;
        }
        if self.resources.sugar >= 10.0 * self.resources.size {
            return;
        }
        let moved = self.traits().photosynthesis_rate.min(self.resources.water);
        self.resources.water -= moved;
        self.resources.sugar += moved;
    }

    /// Spend sugar one unit at a time to restore health
    pub fn heal(&mut self) {
        if !self.is_alive() {
            return;
        }
        let r = &mut self.resources;
        while r.health < MAX_HEALTH - 1.0 && r.sugar > 1.0 {
            r.sugar -= 1.0;
            r.health = (r.health + 1.0).min(MAX_HEALTH);
        }
    }

    /// Grow in size, or once large enough, pay for a successor.
    ///
    /// Returns the kind the owning plant should append.
    pub fn grow(&mut self) -> Option<ComponentKind> {
        if !self.is_alive() {
            return None;
        }
        let growth_factor = self.traits().growth_factor;
        let r = &mut self.resources;
        let required = 0.5 * r.size.powf(1.1);

        if r.size < MAX_SIZE && r.sugar > required {
            r.sugar -= required;
            r.size = (r.size + growth_factor).min(MAX_SIZE);
            None
        } else if self.can_spawn_successor && r.size >= SPAWN_MIN_SIZE && r.sugar > SPAWN_COST {
            r.sugar -= SPAWN_COST;
            self.can_spawn_successor = false;
            self.kind.successor()
        } else {
            None
        }
    }

    /// Heal first, then grow with what sugar is left
    pub fn feed(&mut self) -> Option<ComponentKind> {
        self.heal();
        self.grow()
    }

    /// Apply sun damage and water damage; both can land in one tick
    pub fn stress(&mut self, env: &Environment) {
        if !self.is_alive() {
            return;
        }
        if !self.traits().tolerable_light.contains(env.light_level()) {
            self.damage(SUN_DAMAGE);
        }
        if (env.is_dry() && self.dry()) || (env.is_saturated() && self.soaked()) {
            self.damage(WATER_DAMAGE);
        }
    }

    fn damage(&mut self, amount: f64) {
        self.resources.health = (self.resources.health - amount).max(0.0);
    }

    pub fn record_sample(&mut self) {
        self.history.push(Sample::from(&self.resources));
    }
}

impl fmt::Display for PlantComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} sugar {:>8.2}  water {:>7.2}  age {:>7}  size {:>5.2}  health {:>7.2}",
            self.name,
            self.resources.sugar,
            self.resources.water,
            self.age,
            self.resources.size,
            self.resources.health
        )
    }
}
