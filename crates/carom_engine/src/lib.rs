//! Ball components, box bounds, and the bounce step for Carom.
//!
//! This crate provides:
//! - [`Position`], [`BallMotion`] - The ball component types
//! - [`BoxBounds`] - The cubic box the balls live in
//! - [`step`] - Integrate-reflect-clamp update for one time step
//! - [`step_swept`] - Wall-limited variant using a slab intersection test
//! - [`spawn_balls`] - Batch spawn with randomized initial state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod components;
mod spawn;
mod step;

pub use bounds::BoxBounds;
pub use components::{BallMotion, Position};
pub use spawn::{SPEED_MAX, SPEED_MIN, spawn_balls};
pub use step::{intersect_aabb, step, step_swept};
