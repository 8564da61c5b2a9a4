//! Per-component time series, sampled once per tick

use serde::{Deserialize, Serialize};

/// One tick's snapshot of a component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub sugar: f64,
    pub water: f64,
    pub health: f64,
    pub size: f64,
}

/// Recorded quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Sugar,
    Water,
    Health,
    Size,
}

impl Stat {
    pub const ALL: [Stat; 4] = [Stat::Sugar, Stat::Water, Stat::Health, Stat::Size];

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Sugar => "sugar",
            Stat::Water => "water",
            Stat::Health => "health",
            Stat::Size => "size",
        }
    }
}

impl Sample {
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Sugar => self.sugar,
            Stat::Water => self.water,
            Stat::Health => self.health,
            Stat::Size => self.size,
        }
    }
}

/// Append-only sample log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    samples: Vec<Sample>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// One stat's values in sample order
    pub fn series(&self, stat: Stat) -> Vec<f64> {
        self.samples.iter().map(|s| s.get(stat)).collect()
    }
}
