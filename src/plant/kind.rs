//! Component kinds and their constant tables
//!
//! Every kind-dependent number or predicate is answered by one match
//! here, so adding a kind without filling in its row does not compile.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::types::ValueRange;

/// Anatomical component kinds, in the order a plant grows them
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    #[display(fmt = "Seed")]
    Seed,
    #[display(fmt = "Root")]
    Root,
    #[display(fmt = "Stem")]
    Stem,
    #[display(fmt = "Leaf")]
    Leaf,
}

/// Per-kind constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindTraits {
    /// Size gained per growth step
    pub growth_factor: f64,
    /// Most water drawn from the soil per tick
    pub water_absorption_rate: f64,
    /// Light band that does no sun damage
    pub tolerable_light: ValueRange,
    /// Water turned into sugar per photosynthesis step
    pub photosynthesis_rate: f64,
    /// Below this fraction of capacity the component is dry
    pub dry_fraction: f64,
    /// Above this fraction of capacity the component can photosynthesize
    pub damp_fraction: f64,
    /// Above this fraction of capacity the component is soaked
    pub soaked_fraction: f64,
}

const SEED: KindTraits = KindTraits {
    growth_factor: 0.5,
    water_absorption_rate: 1.0,
    tolerable_light: ValueRange::new(60.0, 200.0),
    photosynthesis_rate: 1.0,
    dry_fraction: 0.2,
    damp_fraction: 0.5,
    soaked_fraction: 0.9,
};

const ROOT: KindTraits = KindTraits {
    growth_factor: 0.25,
    water_absorption_rate: 3.0,
    tolerable_light: ValueRange::new(0.0, 230.0),
    photosynthesis_rate: 0.25,
    dry_fraction: 0.1,
    damp_fraction: 0.3,
    soaked_fraction: 0.95,
};

const STEM: KindTraits = KindTraits {
    growth_factor: 0.4,
    water_absorption_rate: 1.5,
    tolerable_light: ValueRange::new(70.0, 230.0),
    photosynthesis_rate: 0.75,
    dry_fraction: 0.15,
    damp_fraction: 0.4,
    soaked_fraction: 0.9,
};

const LEAF: KindTraits = KindTraits {
    growth_factor: 0.3,
    water_absorption_rate: 0.5,
    tolerable_light: ValueRange::new(90.0, 230.0),
    photosynthesis_rate: 2.0,
    dry_fraction: 0.25,
    damp_fraction: 0.5,
    soaked_fraction: 0.85,
};

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Seed,
        ComponentKind::Root,
        ComponentKind::Stem,
        ComponentKind::Leaf,
    ];

    pub fn traits(&self) -> &'static KindTraits {
        match self {
            ComponentKind::Seed => &SEED,
            ComponentKind::Root => &ROOT,
            ComponentKind::Stem => &STEM,
            ComponentKind::Leaf => &LEAF,
        }
    }

    /// Kind grown once this one is large and sugared enough
    pub fn successor(&self) -> Option<ComponentKind> {
        match self {
            ComponentKind::Seed => Some(ComponentKind::Root),
            ComponentKind::Root => Some(ComponentKind::Stem),
            ComponentKind::Stem => Some(ComponentKind::Leaf),
            ComponentKind::Leaf => None,
        }
    }

    pub fn dry(&self, water: f64, capacity: f64) -> bool {
        water < self.traits().dry_fraction * capacity
    }

    pub fn damp(&self, water: f64, capacity: f64) -> bool {
        water > self.traits().damp_fraction * capacity
    }

    pub fn soaked(&self, water: f64, capacity: f64) -> bool {
        water > self.traits().soaked_fraction * capacity
    }
}
