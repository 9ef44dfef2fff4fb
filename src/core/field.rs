//! Landmark field: the known map of reference points.

use serde::{Deserialize, Serialize};

use super::WorldPoint;

/// Closest landmark to a query position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestLandmark {
    /// Index of the landmark in the field
    pub index: usize,
    /// Landmark position
    pub point: WorldPoint,
    /// Distance from the query position to the landmark
    pub distance: f64,
}

/// Ordered, index-stable set of known landmarks.
///
/// Catalogs and match results refer to landmarks by their position in this
/// sequence, so the field exposes no way to reorder or mutate it after
/// construction. Build a new field (and a new catalog) if the landmarks
/// change.
///
/// Duplicate points are allowed but not recommended: a landmark coincident
/// with the signature source is dropped from that signature.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkField {
    points: Vec<WorldPoint>,
}

impl LandmarkField {
    /// Create a field from landmark positions, keeping their order.
    pub fn new(points: Vec<WorldPoint>) -> Self {
        Self { points }
    }

    /// All landmarks in index order.
    #[inline]
    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    /// Landmark at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<WorldPoint> {
        self.points.get(index).copied()
    }

    /// Number of landmarks.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the field has no landmarks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate landmarks in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, WorldPoint> {
        self.points.iter()
    }

    /// Find the landmark closest to `position`.
    ///
    /// On exact distance ties the lowest index wins. Landmarks with NaN
    /// coordinates are never chosen. Returns `None` when no landmark has a
    /// comparable distance (including the empty field).
    pub fn nearest(&self, position: WorldPoint) -> Option<ClosestLandmark> {
        let mut best: Option<ClosestLandmark> = None;

        for (index, point) in self.points.iter().enumerate() {
            let distance = position.distance(point);
            if distance.is_nan() {
                continue;
            }
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(ClosestLandmark {
                    index,
                    point: *point,
                    distance,
                });
            }
        }

        best
    }

    /// Landmarks strictly closer than `radius` to `center`, in index order.
    ///
    /// If `center` is itself a landmark it is included (distance 0), which
    /// the signature builder then excludes as the source.
    pub fn within_radius(&self, center: WorldPoint, radius: f64) -> Vec<WorldPoint> {
        self.points
            .iter()
            .filter(|p| center.distance(p) < radius)
            .copied()
            .collect()
    }

    /// Axis-aligned bounds as (min, max), or `None` for an empty field.
    pub fn bounds(&self) -> Option<(WorldPoint, WorldPoint)> {
        let first = *self.points.first()?;
        let (min, max) = self.points.iter().fold((first, first), |(min, max), p| {
            (
                WorldPoint::new(min.x.min(p.x), min.y.min(p.y)),
                WorldPoint::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some((min, max))
    }
}

impl From<Vec<WorldPoint>> for LandmarkField {
    fn from(points: Vec<WorldPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<WorldPoint> for LandmarkField {
    fn from_iter<I: IntoIterator<Item = WorldPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LandmarkField {
    type Item = &'a WorldPoint;
    type IntoIter = std::slice::Iter<'a, WorldPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
