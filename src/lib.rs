//! Sprout - plant growth simulation
//!
//! A plant is a growing set of components (seed, root, stem, leaf) living
//! in an environment whose temperature, moisture and light follow the
//! time of day. The external driver advances the environment, then the
//! plant, once per tick.

pub mod core;
pub mod environment;
pub mod plant;
pub mod simulation;
