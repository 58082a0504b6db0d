//! Ball spawning.
//!
//! Allocates a batch of entities and gives each one a randomized starting
//! position inside the box, a unit direction, and a speed. Pass a seeded rng
//! for reproducible runs.

use glam::Vec3;
use rand::Rng;

use carom_foundation::{Entity, Result};
use carom_storage::Store;

use crate::bounds::BoxBounds;
use crate::components::{BallMotion, Position};

/// Slowest spawned ball, in units per second.
pub const SPEED_MIN: f32 = 10.0;

/// Fastest spawned ball, in units per second (exclusive).
pub const SPEED_MAX: f32 = 50.0;

/// Spawns `count` balls with randomized initial state.
///
/// Positions are uniform per axis over the box interior, directions are
/// unit length, speeds are uniform in `[SPEED_MIN, SPEED_MAX)`. Entities
/// are allocated as one atomic batch and returned in allocation order.
///
/// # Errors
///
/// Returns [`ErrorKind::PoolExhausted`](carom_foundation::ErrorKind::PoolExhausted)
/// if `count` exceeds the store's available pool; no entities are spawned.
pub fn spawn_balls<R: Rng>(
    store: &mut Store,
    count: usize,
    bounds: BoxBounds,
    rng: &mut R,
) -> Result<Vec<Entity>> {
    let entities = store.allocate_many(count)?;

    for &entity in &entities {
        let position = Vec3::new(
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
        ) * bounds.extent();

        store.set(entity, Position { value: position });
        store.set(entity, BallMotion {
            direction: random_direction(rng),
            speed: rng.gen_range(SPEED_MIN..SPEED_MAX),
        });
    }

    Ok(entities)
}

/// Samples a unit direction, rejecting near-zero vectors before
/// normalizing.
fn random_direction<R: Rng>(rng: &mut R) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if v.length_squared() > 1e-6 {
            return v.normalize();
        }
    }
}
