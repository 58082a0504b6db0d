//! The cubic box the balls bounce inside.

use glam::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned cube centred on the origin.
///
/// `extent` is the full edge length; the walls sit at `±extent / 2` on each
/// axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxBounds {
    extent: f32,
}

impl BoxBounds {
    /// Default edge length used by the demos.
    pub const DEFAULT_EXTENT: f32 = 20.0;

    /// Creates bounds with the given full edge length.
    ///
    /// # Panics
    ///
    /// Panics if `extent` is not strictly positive.
    #[must_use]
    pub fn new(extent: f32) -> Self {
        assert!(extent > 0.0, "box extent must be positive, got {extent}");
        Self { extent }
    }

    /// Returns the full edge length.
    #[must_use]
    pub fn extent(self) -> f32 {
        self.extent
    }

    /// Returns the wall coordinate on the negative side of each axis.
    #[must_use]
    pub fn min(self) -> f32 {
        -self.extent / 2.0
    }

    /// Returns the wall coordinate on the positive side of each axis.
    #[must_use]
    pub fn max(self) -> f32 {
        self.extent / 2.0
    }

    /// Returns the corner at the negative wall on every axis.
    #[must_use]
    pub fn min_corner(self) -> Vec3 {
        Vec3::splat(self.min())
    }

    /// Returns the corner at the positive wall on every axis.
    #[must_use]
    pub fn max_corner(self) -> Vec3 {
        Vec3::splat(self.max())
    }

    /// Returns true if `point` is on or inside the walls on every axis.
    #[must_use]
    pub fn contains(self, point: Vec3) -> bool {
        point.abs().max_element() <= self.max()
    }

    /// Clamps `point` to lie on or inside the walls on every axis.
    #[must_use]
    pub fn clamp(self, point: Vec3) -> Vec3 {
        point.clamp(self.min_corner(), self.max_corner())
    }
}

impl Default for BoxBounds {
    fn default() -> Self {
        Self {
            extent: Self::DEFAULT_EXTENT,
        }
    }
}
