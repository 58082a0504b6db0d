//! Simulation session.
//!
//! Owns the store and the spawned balls, and advances them frame by frame.
//! The session is the caller side of the storage API: it allocates entities
//! once at startup, then reads and writes component values every frame.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use carom_engine::{BallMotion, BoxBounds, Position, spawn_balls, step};
use carom_foundation::{Entity, Result};
use carom_storage::Store;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Entity capacity of the store.
    pub capacity: usize,
    /// Number of balls to spawn.
    pub ball_count: usize,
    /// Full edge length of the box.
    pub extent: f32,
    /// Seconds advanced per frame.
    pub delta_time: f32,
    /// Seed for the spawn rng.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: 128,
            ball_count: 32,
            extent: BoxBounds::DEFAULT_EXTENT,
            delta_time: 0.1,
            seed: 42,
        }
    }
}

/// A running bouncing-ball simulation.
pub struct Simulation {
    store: Store,
    entities: Vec<Entity>,
    bounds: BoxBounds,
    delta_time: f32,
    frame: u64,
}

impl Simulation {
    /// Creates a simulation and spawns its balls.
    ///
    /// Spawning is deterministic for a given `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is zero or smaller than
    /// `ball_count`.
    ///
    /// # Panics
    ///
    /// Panics if `config.extent` is not strictly positive.
    pub fn new(config: &SimConfig) -> Result<Self> {
        let mut store = Store::new(config.capacity)?;
        let bounds = BoxBounds::new(config.extent);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let entities = spawn_balls(&mut store, config.ball_count, bounds, &mut rng)?;

        Ok(Self {
            store,
            entities,
            bounds,
            delta_time: config.delta_time,
            frame: 0,
        })
    }

    /// Rebuilds a simulation from explicit ball state.
    ///
    /// Entities are allocated from a fresh pool in the order given, so ids
    /// match a canonical spawn-then-run lifecycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is zero or smaller than the number
    /// of balls.
    ///
    /// # Panics
    ///
    /// Panics if `extent` is not strictly positive.
    pub fn with_state(
        capacity: usize,
        extent: f32,
        delta_time: f32,
        frame: u64,
        balls: &[(Position, BallMotion)],
    ) -> Result<Self> {
        let mut store = Store::new(capacity)?;
        let entities = store.allocate_many(balls.len())?;

        for (&entity, &(position, motion)) in entities.iter().zip(balls) {
            store.set(entity, position);
            store.set(entity, motion);
        }

        Ok(Self {
            store,
            entities,
            bounds: BoxBounds::new(extent),
            delta_time,
            frame,
        })
    }

    /// Advances the simulation by one frame.
    pub fn step(&mut self) {
        step(&mut self.store, &self.entities, self.bounds, self.delta_time);
        self.frame += 1;
    }

    /// Advances the simulation by `frames` frames.
    pub fn run(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// Returns the number of frames stepped so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Returns the live entities in spawn order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the box the balls bounce in.
    #[must_use]
    pub fn bounds(&self) -> BoxBounds {
        self.bounds
    }

    /// Returns the per-frame time step.
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Returns a ball's position.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is outside the store's capacity.
    #[must_use]
    pub fn position(&self, entity: Entity) -> Position {
        self.store.get(entity)
    }

    /// Returns a ball's motion state.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is outside the store's capacity.
    #[must_use]
    pub fn motion(&self, entity: Entity) -> BallMotion {
        self.store.get(entity)
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }
}
