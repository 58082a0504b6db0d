//! Snapshot serialization and deserialization using `MessagePack`.
//!
//! This module captures the ball state of a running simulation and restores
//! it later, in memory or through a file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use carom_engine::{BallMotion, Position};
use carom_foundation::{Entity, Error, Result};

use crate::sim::Simulation;

/// One ball's state at capture time.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    /// The id the ball had when captured.
    pub entity: Entity,
    /// Position component.
    pub position: Position,
    /// Motion component.
    pub motion: BallMotion,
}

/// Point-in-time capture of a simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    /// Frames stepped before capture.
    pub frame: u64,
    /// Entity capacity of the store.
    pub capacity: usize,
    /// Full edge length of the box.
    pub extent: f32,
    /// Seconds advanced per frame.
    pub delta_time: f32,
    /// Per-ball state in spawn order.
    pub balls: Vec<BallState>,
}

impl SimSnapshot {
    /// Captures the current ball state of a simulation.
    #[must_use]
    pub fn capture(sim: &Simulation) -> Self {
        let balls = sim
            .entities()
            .iter()
            .map(|&entity| BallState {
                entity,
                position: sim.position(entity),
                motion: sim.motion(entity),
            })
            .collect();

        Self {
            frame: sim.frame(),
            capacity: sim.store().capacity(),
            extent: sim.bounds().extent(),
            delta_time: sim.delta_time(),
            balls,
        }
    }

    /// Rebuilds a simulation from this snapshot.
    ///
    /// Ids are reallocated from a fresh pool in snapshot order; for the
    /// canonical spawn-then-run lifecycle they match the captured ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot's capacity is zero or smaller than
    /// its ball count.
    pub fn restore(&self) -> Result<Simulation> {
        let balls: Vec<_> = self
            .balls
            .iter()
            .map(|ball| (ball.position, ball.motion))
            .collect();

        Simulation::with_state(self.capacity, self.extent, self.delta_time, self.frame, &balls)
    }
}

/// Encodes a snapshot as `MessagePack` bytes.
///
/// Named serialization keeps struct field names in the payload.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn to_bytes(snapshot: &SimSnapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(snapshot).map_err(|e| Error::serialization(e.to_string()))
}

/// Decodes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid snapshot.
pub fn from_bytes(bytes: &[u8]) -> Result<SimSnapshot> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Writes a snapshot to a `MessagePack` file.
///
/// An existing file at `path` is overwritten.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written, or if
/// encoding fails.
pub fn save_to_file<P: AsRef<Path>>(snapshot: &SimSnapshot, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        Error::io(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(snapshot)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!(
            "failed to write to file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    writer.flush().map_err(|e| {
        Error::io(format!(
            "failed to flush file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    Ok(())
}

/// Reads a snapshot back from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if decoding fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SimSnapshot> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::io(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!(
            "failed to read file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    from_bytes(&bytes)
}
