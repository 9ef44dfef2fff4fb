//! Rotation-aware geometric signatures and the landmark catalog.
//!
//! A signature describes how a set of points is arranged around a source
//! point, without reference to absolute coordinates or heading:
//!
//! ```text
//!                 p2
//!                  ╲          gaps[k] = bearing[k+1] - bearing[k]
//!        p3         ╲  g1     last gap wraps back to p0
//!          ╲     g2  ╲
//!           ╲         ╲       distances: |s p0|, |s p1|, |s p2|, |s p3|
//!            ●─────────────── p0/p1 (tied bearing, nearer first)
//!            s        g0 = 0
//! ```
//!
//! Rotating the whole scene shifts every bearing by the same amount, which
//! leaves the gap sequence unchanged up to a cyclic rotation. The matcher
//! exploits this to compare a partial view against full-field signatures.
//!
//! # Phases
//!
//! - **Offline**: [`build_catalog`] computes one signature per landmark
//!   against the whole field.
//! - **Online**: [`build_signature`] computes the signature of the visible
//!   landmarks around a reference landmark, which is then matched against
//!   the catalog by [`crate::matching`].

mod builder;
mod catalog;

pub use builder::{SignatureNode, build_signature};
pub use catalog::{Catalog, build_catalog, build_catalog_parallel};

use serde::{Deserialize, Serialize};

/// Distances and angular gaps of points around a source, in bearing order.
///
/// `distances` and `angles` always have the same length. For a non-empty
/// signature the gaps sum to 2π (up to floating error). The empty signature
/// is a legal value that can never be matched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    distances: Vec<f64>,
    angles: Vec<f64>,
}

impl Signature {
    /// The empty signature (no points around the source).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble a signature from already ordered parts.
    ///
    /// Used by the builder and by tests that need hand-made signatures.
    /// Mismatched lengths are truncated to the shorter sequence.
    pub fn from_parts(mut distances: Vec<f64>, mut angles: Vec<f64>) -> Self {
        let len = distances.len().min(angles.len());
        distances.truncate(len);
        angles.truncate(len);
        Self { distances, angles }
    }

    /// Distances from the source, in bearing order.
    #[inline]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Angular gap from each point to the next, wrapping at the end.
    #[inline]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Number of points in the signature.
    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the signature has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Sum of all angular gaps (2π for a non-empty signature).
    pub fn angle_sum(&self) -> f64 {
        self.angles.iter().sum()
    }
}
