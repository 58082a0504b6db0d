//! Per-frame ball movement.
//!
//! Two flavours of the same bounce:
//! - [`step`] integrates the full travel distance, flips direction on any
//!   axis whose wall was crossed, and clamps the position back inside.
//! - [`step_swept`] limits the travel distance to the wall itself using a
//!   slab intersection test, so the position never needs clamping.

use glam::Vec3;

use carom_foundation::Entity;
use carom_storage::Store;

use crate::bounds::BoxBounds;
use crate::components::{BallMotion, Position};

/// Advances each ball by one time step, reflecting off the box walls.
///
/// For each entity: the new position is `position + direction * speed * dt`.
/// On every axis where that position reaches or passes a wall, the
/// direction component is negated, and the position is clamped per axis to
/// stay inside the box. When no wall is touched, the update is exact vector
/// addition and the direction is untouched.
///
/// # Panics
///
/// Panics if any entity id is outside the store's capacity.
pub fn step(store: &mut Store, entities: &[Entity], bounds: BoxBounds, delta_time: f32) {
    let wall = bounds.max();

    for &entity in entities {
        let position = store.get::<Position>(entity);
        let mut motion = store.get::<BallMotion>(entity);

        let next = position.value + motion.direction * motion.speed * delta_time;

        if next.x.abs() >= wall {
            motion.direction.x = -motion.direction.x;
        }
        if next.y.abs() >= wall {
            motion.direction.y = -motion.direction.y;
        }
        if next.z.abs() >= wall {
            motion.direction.z = -motion.direction.z;
        }

        store.set(entity, Position {
            value: bounds.clamp(next),
        });
        store.set(entity, motion);
    }
}

/// Slab test: entry and exit distances of a ray against an axis-aligned box.
///
/// Returns `(t_near, t_far)` such that `origin + dir * t` is on the box
/// boundary at both distances. Zero direction components divide to
/// infinities and fall out of the min/max reduction, which matches IEEE
/// semantics and needs no special casing.
#[must_use]
pub fn intersect_aabb(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> (f32, f32) {
    let t_min = (min - origin) / dir;
    let t_max = (max - origin) / dir;
    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);
    (t1.max_element(), t2.min_element())
}

/// Advances each ball by one time step, never overshooting a wall.
///
/// The travel distance is limited to the exit distance of the motion ray
/// against the box, so the new position lands exactly on the wall instead of
/// past it. Direction flips use the same per-axis rule as [`step`].
///
/// # Panics
///
/// Panics if any entity id is outside the store's capacity.
pub fn step_swept(store: &mut Store, entities: &[Entity], bounds: BoxBounds, delta_time: f32) {
    let wall = bounds.max();
    let min_corner = bounds.min_corner();
    let max_corner = bounds.max_corner();

    for &entity in entities {
        let position = store.get::<Position>(entity);
        let mut motion = store.get::<BallMotion>(entity);

        let travel = motion.speed * delta_time;
        let (_, t_far) = intersect_aabb(position.value, motion.direction, min_corner, max_corner);
        let t = t_far.min(travel);

        let next = position.value + motion.direction * t;

        if next.x.abs() >= wall {
            motion.direction.x = -motion.direction.x;
        }
        if next.y.abs() >= wall {
            motion.direction.y = -motion.direction.y;
        }
        if next.z.abs() >= wall {
            motion.direction.z = -motion.direction.z;
        }

        store.set(entity, Position { value: next });
        store.set(entity, motion);
    }
}
