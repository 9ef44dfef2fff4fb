//! Signature construction around a single source point.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use crate::core::WorldPoint;

use super::Signature;

/// Staging record for one candidate while the signature is sorted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignatureNode {
    /// Candidate position
    pub point: WorldPoint,
    /// Distance from the source
    pub distance: f64,
    /// Bearing from the source in [0, 2π)
    pub angle: f64,
}

impl SignatureNode {
    fn new(source: WorldPoint, point: WorldPoint) -> Self {
        Self {
            point,
            distance: source.distance(&point),
            angle: source.bearing_to(&point),
        }
    }

    /// Ascending bearing, exact ties broken by ascending distance.
    fn angular_order(&self, other: &Self) -> Ordering {
        self.angle
            .total_cmp(&other.angle)
            .then_with(|| self.distance.total_cmp(&other.distance))
    }
}

/// Build the signature of `candidates` as seen from `source`.
///
/// Candidates exactly equal to `source` are skipped. The remaining points are
/// ordered by bearing (ties by distance, compared exactly) and the signature
/// records their distances plus the angular gap from each point to the next,
/// wrapping from the last point back to the first. The gaps of a non-empty
/// signature always sum to 2π.
///
/// Candidates do not need to be sorted. An empty candidate set (after
/// excluding the source) yields [`Signature::empty`].
///
/// # Example
/// ```
/// use disha::core::WorldPoint;
/// use disha::signature::build_signature;
///
/// let source = WorldPoint::new(0.0, 0.0);
/// let candidates = [
///     WorldPoint::new(0.0, 0.0),
///     WorldPoint::new(0.0, 2.0),
///     WorldPoint::new(1.0, 0.0),
/// ];
///
/// let signature = build_signature(source, &candidates);
/// assert_eq!(signature.distances(), &[1.0, 2.0]);
/// assert_eq!(signature.len(), 2);
/// ```
pub fn build_signature(source: WorldPoint, candidates: &[WorldPoint]) -> Signature {
    let mut nodes: Vec<SignatureNode> = candidates
        .iter()
        .filter(|p| **p != source)
        .map(|&p| SignatureNode::new(source, p))
        .collect();

    if nodes.is_empty() {
        return Signature::empty();
    }

    nodes.sort_by(SignatureNode::angular_order);

    let distances = nodes.iter().map(|n| n.distance).collect();

    let first = nodes[0].angle;
    let last = nodes[nodes.len() - 1].angle;
    let angles = nodes
        .windows(2)
        .map(|w| w[1].angle - w[0].angle)
        .chain(std::iter::once(TAU - (last - first)))
        .collect();

    Signature::from_parts(distances, angles)
}
