//! Carom - bouncing balls over a fixed-capacity entity/component store
//!
//! This crate re-exports all layers of the Carom system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: carom_runtime    — Simulation session, snapshots, CLI
//! Layer 2: carom_engine     — Ball components, box bounds, bounce step
//! Layer 1: carom_storage    — Entity pool, dense component arrays
//! Layer 0: carom_foundation — Core types (Entity, Error)
//! ```

pub use carom_engine as engine;
pub use carom_foundation as foundation;
pub use carom_runtime as runtime;
pub use carom_storage as storage;
