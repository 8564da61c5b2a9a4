pub mod component;
pub mod kind;
pub mod model;
pub mod stats;

pub use component::{PlantComponent, Resources, MAX_HEALTH, MAX_SIZE};
pub use kind::{ComponentKind, KindTraits};
pub use model::PlantModel;
pub use stats::{History, Sample, Stat};
