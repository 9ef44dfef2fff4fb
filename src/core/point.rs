//! Point type for landmark coordinates.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// World coordinates of a landmark.
///
/// Units are whatever the landmark source uses (pixels for image-extracted
/// corners, meters for surveyed maps). Only relative geometry matters.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle from this point to another (radians, CCW from +X, in [-π, π])
    #[inline]
    pub fn angle_to(&self, other: &WorldPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dy.atan2(dx)
    }

    /// Bearing from this point to another, normalized into [0, 2π).
    #[inline]
    pub fn bearing_to(&self, other: &WorldPoint) -> f64 {
        normalize_bearing(self.angle_to(other))
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Map an angle from atan2's [-π, π] range into [0, 2π).
///
/// Negative zero is folded to positive zero so exact comparisons between
/// bearings behave.
#[inline]
pub fn normalize_bearing(theta: f64) -> f64 {
    let theta = if theta < 0.0 { theta + TAU } else { theta + 0.0 };
    // -ε + 2π can round up to exactly 2π
    if theta >= TAU { 0.0 } else { theta }
}
