//! Ball component types.
//!
//! Plain data only. Both components default to all zeroes, which is the
//! value an unset or cleared slot reads as.

use glam::Vec3;

use carom_storage::Component;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World-space position of a ball.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Position vector.
    pub value: Vec3,
}

/// Motion state of a ball.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BallMotion {
    /// Unit travel direction.
    pub direction: Vec3,
    /// Scalar speed in units per second.
    pub speed: f32,
}

impl Component for Position {}
impl Component for BallMotion {}
