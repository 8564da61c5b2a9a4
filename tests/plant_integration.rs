//! Integration tests for plant growth
//!
//! These tests drive a plant the way the external driver does
//! (environment advance, sample, plant advance) and check:
//! - A seed grows to full size and then spawns exactly one root
//! - Spawned components sit out the tick that created them
//! - Sun and water stress kill at the expected rate

use sprout::environment::Environment;
use sprout::plant::{ComponentKind, PlantModel, Resources, Stat, MAX_HEALTH, MAX_SIZE};
use sprout::simulation::{Simulation, SimulationEvent};

fn favorable() -> Environment {
    // light inside the seed's band and above the sun threshold,
    // moisture neither dry nor saturated
    Environment::constant(20.0, 300.0, 150.0)
}

fn drive(env: &mut Environment, plant: &mut PlantModel) {
    env.advance(1);
    plant.record_sample();
    plant.advance(env, 1);
}

fn seed_plant(resources: Resources) -> PlantModel {
    PlantModel::with_initial("test", ComponentKind::Seed, resources)
}

// ============================================================================
// Growth and Spawning
// ============================================================================

#[test]
fn test_seed_grows_to_max_then_spawns_root_once() {
    let mut env = favorable();
    let mut plant = seed_plant(Resources {
        water: 10.0,
        sugar: 5.0,
        health: 1000.0,
        size: 1.0,
    });

    let mut previous_size = plant.components()[0].size();
    let mut spawn_tick = None;

    for tick in 0..1000 {
        drive(&mut env, &mut plant);

        let seed = &plant.components()[0];
        assert!(
            seed.size() >= previous_size,
            "seed shrank at tick {}: {} -> {}",
            tick,
            previous_size,
            seed.size()
        );
        previous_size = seed.size();

        let roots = plant.count_kind(ComponentKind::Root);
        if roots == 1 && spawn_tick.is_none() {
            spawn_tick = Some(tick);
            assert_eq!(seed.size(), MAX_SIZE, "root spawned before seed was full size");
        }
        if spawn_tick.is_some() {
            assert!(!seed.can_spawn_successor());
        } else {
            assert!(seed.can_spawn_successor());
        }
    }

    assert!(spawn_tick.is_some(), "seed never spawned a root");
    assert_eq!(plant.components()[0].size(), MAX_SIZE);
    assert_eq!(plant.count_kind(ComponentKind::Root), 1);
    assert_eq!(plant.count_kind(ComponentKind::Seed), 1);

    let root = &plant.components()[1];
    assert_eq!(root.kind(), ComponentKind::Root);
    assert_eq!(root.parent(), Some(plant.components()[0].id()));
}

#[test]
fn test_spawned_component_first_sample_is_next_tick() {
    let mut env = favorable();
    let mut plant = seed_plant(Resources {
        water: 15.0,
        sugar: 60.0,
        health: MAX_HEALTH,
        size: MAX_SIZE,
    });

    drive(&mut env, &mut plant);
    assert_eq!(plant.component_count(), 2);

    let root = &plant.components()[1];
    assert!(root.history().is_empty());
    assert_eq!(root.age(), 0);
    assert_eq!(root.water(), 0.0);

    drive(&mut env, &mut plant);
    let root = &plant.components()[1];
    assert_eq!(root.history().len(), 1);
    assert_eq!(root.history().series(Stat::Water), vec![0.0]);
    assert_eq!(root.age(), 1);

    let seed = &plant.components()[0];
    assert_eq!(seed.history().len(), 2);
    assert_eq!(seed.history().len() as u64, seed.age());
}

#[test]
fn test_components_keep_creation_order() {
    let mut sim = Simulation::new(
        favorable(),
        seed_plant(Resources {
            water: 10.0,
            sugar: 5.0,
            health: MAX_HEALTH,
            size: 1.0,
        }),
    );
    sim.run(1000, 1);

    for (idx, component) in sim.plant().components().iter().enumerate() {
        assert_eq!(component.id().index(), idx);
        if let Some(parent) = component.parent() {
            assert!(parent.index() < idx);
        }
    }

    let spawn_times: Vec<u64> = sim
        .events()
        .iter()
        .filter_map(|e| match e {
            SimulationEvent::ComponentSpawned { time, .. } => Some(*time),
            _ => None,
        })
        .collect();
    assert!(spawn_times.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(spawn_times.len() + 1, sim.plant().component_count());
}

#[test]
fn test_history_covers_each_tick() {
    let mut sim = Simulation::new(favorable(), PlantModel::new("Fern"));
    sim.run(50, 1);
    let seed = &sim.plant().components()[0];
    assert_eq!(seed.history().len(), 50);
    let sizes = seed.history().series(Stat::Size);
    assert_eq!(sizes[0], 1.0);
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
}

// ============================================================================
// Stress and Death
// ============================================================================

#[test]
fn test_sun_damage_drains_health_to_zero() {
    // too dark for the seed's band and for photosynthesis
    let mut env = Environment::constant(20.0, 300.0, 10.0);
    let mut plant = seed_plant(Resources {
        water: 5.0,
        sugar: 0.0,
        health: MAX_HEALTH,
        size: 1.0,
    });

    let mut previous = MAX_HEALTH;
    let mut ticks = 0;
    while plant.is_alive() {
        drive(&mut env, &mut plant);
        ticks += 1;
        let health = plant.components()[0].health();
        assert!(health < previous);
        if health > 0.0 {
            assert!((previous - health - 0.2).abs() < 1e-6);
        }
        previous = health;
        assert!(ticks <= 5001, "component should be dead by now");
    }
    assert_eq!(ticks, 5000);

    for _ in 0..10 {
        drive(&mut env, &mut plant);
        assert_eq!(plant.components()[0].health(), 0.0);
    }
}

#[test]
fn test_water_stress_kills_after_expected_ticks() {
    let mut env = Environment::constant(20.0, 0.0, 150.0);
    let mut plant = seed_plant(Resources {
        water: 0.0,
        sugar: 0.0,
        health: MAX_HEALTH,
        size: 1.0,
    });
    let expected = (MAX_HEALTH / 0.1).ceil() as u64;

    for _ in 0..expected - 1 {
        drive(&mut env, &mut plant);
    }
    assert!(plant.components()[0].dry());
    assert!(plant.is_alive());

    drive(&mut env, &mut plant);
    assert!(!plant.is_alive());
    assert_eq!(plant.components()[0].health(), 0.0);
}

#[test]
fn test_dead_plant_keeps_its_components() {
    let mut sim = Simulation::new(
        Environment::constant(20.0, 300.0, 250.0),
        seed_plant(Resources {
            water: 0.0,
            sugar: 0.0,
            health: 1.0,
            size: 1.0,
        }),
    );
    let summary = sim.run(100, 1);
    assert!(!summary.survived);
    assert_eq!(sim.plant().component_count(), 1);
    assert!(sim.plant().components().iter().all(|c| c.health() == 0.0));
    assert_eq!(sim.plant().components()[0].history().len() as u64, summary.ticks_run);
}

#[test]
fn test_eden_seed_day() {
    let mut sim = Simulation::new(Environment::eden(), PlantModel::new("Eden"));
    let summary = sim.run(86_400, 1);
    let seed = &sim.plant().components()[0];
    assert_eq!(summary.ticks_run, 86_400);
    assert!(summary.survived);
    assert!(seed.health() >= 0.0 && seed.health() <= MAX_HEALTH);
    assert!(seed.size() >= 1.0 && seed.size() <= MAX_SIZE);
}
