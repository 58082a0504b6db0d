//! Simulation session, snapshots, and CLI for Carom.
//!
//! This crate provides:
//! - [`SimConfig`], [`Simulation`] - A configured bouncing-ball run
//! - [`SimSnapshot`] - Point-in-time capture of the ball state
//! - [`to_bytes`]/[`from_bytes`] and file helpers for `MessagePack` snapshots

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod serialize;
mod sim;

pub use serialize::{BallState, SimSnapshot, from_bytes, load_from_file, save_to_file, to_bytes};
pub use sim::{SimConfig, Simulation};
