//! Online phase: search the catalog for landmarks that contain a query.

use log::{trace, warn};
use rayon::prelude::*;

use crate::core::{LandmarkField, WorldPoint};
use crate::signature::{Catalog, Signature};

use super::alignment::aligns_cyclically;
use super::config::MatcherConfig;
use super::subset::is_sub_multiset;

/// Rotation-invariant signature matcher.
///
/// A landmark is a candidate when its full-field signature contains the
/// query as a sub-pattern:
///
/// 1. every query distance appears among the landmark's distances
///    (exact sub-multiset test), and
/// 2. the query's angular gaps can be rebuilt, in order, from contiguous
///    groups of the landmark's gaps read cyclically from some rotation
///    offset (within the angular tolerance).
///
/// The matcher holds only configuration, so one instance can serve any
/// number of catalogs and queries.
#[derive(Clone, Debug, Default)]
pub struct SignatureMatcher {
    config: MatcherConfig,
}

impl SignatureMatcher {
    /// Create a matcher with the given configuration.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Whether the landmark signature `candidate` contains `query`.
    ///
    /// The empty query is never contained in anything.
    pub fn contains(&self, candidate: &Signature, query: &Signature) -> bool {
        if query.is_empty() {
            return false;
        }

        is_sub_multiset(query.distances(), candidate.distances())
            && aligns_cyclically(
                candidate.angles(),
                query.angles(),
                self.config.angle_tolerance,
            )
    }

    /// Indices of every catalog entry that contains `query`, ascending.
    pub fn find_candidates(&self, catalog: &Catalog, query: &Signature) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }

        let candidates: Vec<usize> = if self.config.use_parallel {
            catalog
                .signatures()
                .par_iter()
                .enumerate()
                .filter(|(_, sig)| self.contains(sig, query))
                .map(|(i, _)| i)
                .collect()
        } else {
            catalog
                .iter()
                .enumerate()
                .filter(|(_, sig)| self.contains(sig, query))
                .map(|(i, _)| i)
                .collect()
        };

        trace!(
            "{} of {} landmarks contain a {}-point query",
            candidates.len(),
            catalog.len(),
            query.len()
        );
        candidates
    }

    /// Landmarks whose catalog entry contains `query`, in index order.
    ///
    /// `catalog` must have been built from `field` and the field must not
    /// have changed since. If their sizes disagree, a warning is logged and
    /// indices beyond the end of the field are dropped.
    pub fn match_points(
        &self,
        catalog: &Catalog,
        field: &LandmarkField,
        query: &Signature,
    ) -> Vec<WorldPoint> {
        if catalog.len() != field.len() {
            warn!(
                "Catalog has {} entries but field has {} landmarks; was it built from this field?",
                catalog.len(),
                field.len()
            );
        }

        self.find_candidates(catalog, query)
            .into_iter()
            .filter_map(|i| field.get(i))
            .collect()
    }
}

/// Match `query` against `catalog` with the default configuration.
///
/// Returns the landmarks of `field` whose full-field signature contains the
/// query, in ascending index order. An empty query returns no landmarks.
///
/// # Example
/// ```
/// use disha::core::{LandmarkField, WorldPoint};
/// use disha::matching::match_signature;
/// use disha::signature::{build_catalog, build_signature};
///
/// let field = LandmarkField::new(vec![
///     WorldPoint::new(0.0, 0.0),
///     WorldPoint::new(10.0, 0.0),
///     WorldPoint::new(10.0, 10.0),
///     WorldPoint::new(0.0, 10.0),
/// ]);
/// let catalog = build_catalog(&field);
///
/// // Standing at (0, 0) with (0, 10) out of sight.
/// let visible = [field.points()[0], field.points()[1], field.points()[2]];
/// let query = build_signature(field.points()[0], &visible);
///
/// let found = match_signature(&catalog, &field, &query);
/// assert!(found.contains(&WorldPoint::new(0.0, 0.0)));
/// ```
pub fn match_signature(
    catalog: &Catalog,
    field: &LandmarkField,
    query: &Signature,
) -> Vec<WorldPoint> {
    SignatureMatcher::with_defaults().match_points(catalog, field, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{build_catalog, build_signature};
    use std::f64::consts::TAU;

    fn square() -> LandmarkField {
        LandmarkField::new(vec![
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(10.0, 0.0),
            WorldPoint::new(10.0, 10.0),
            WorldPoint::new(0.0, 10.0),
        ])
    }

    fn scattered_field(n: usize) -> LandmarkField {
        (0..n)
            .map(|i| {
                let t = i as f64;
                WorldPoint::new((t * 2.3).sin() * 60.0 + t * 0.7, (t * 1.3).cos() * 45.0)
            })
            .collect()
    }

    #[test]
    fn test_empty_query_short_circuits() {
        let field = square();
        let catalog = build_catalog(&field);

        assert!(match_signature(&catalog, &field, &Signature::empty()).is_empty());
        assert!(
            SignatureMatcher::new(MatcherConfig::parallel())
                .find_candidates(&catalog, &Signature::empty())
                .is_empty()
        );
    }

    #[test]
    fn test_square_partial_view() {
        let field = square();
        let catalog = build_catalog(&field);

        let visible = &field.points()[..3];
        let query = build_signature(field.points()[0], visible);
        assert_eq!(query.len(), 2);

        let found = match_signature(&catalog, &field, &query);
        assert!(found.contains(&WorldPoint::new(0.0, 0.0)));
    }

    #[test]
    fn test_full_signature_recalls_itself() {
        let field = scattered_field(35);
        let catalog = build_catalog(&field);
        let matcher = SignatureMatcher::with_defaults();

        for (i, sig) in catalog.iter().enumerate() {
            let candidates = matcher.find_candidates(&catalog, sig);
            assert!(candidates.contains(&i), "landmark {} not recalled", i);
        }
    }

    #[test]
    fn test_unknown_distance_never_matches() {
        let field = LandmarkField::new(vec![
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(10.0, 0.0),
            WorldPoint::new(0.0, 10.0),
        ]);
        let catalog = build_catalog(&field);
        let query = Signature::from_parts(vec![999.0], vec![TAU]);

        assert!(match_signature(&catalog, &field, &query).is_empty());
    }

    #[test]
    fn test_results_in_index_order() {
        let field = square();
        let catalog = build_catalog(&field);
        // A lone neighbour at distance 10 is visible from every corner.
        let query = Signature::from_parts(vec![10.0], vec![TAU]);

        let candidates = SignatureMatcher::with_defaults().find_candidates(&catalog, &query);
        assert_eq!(candidates, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let field = scattered_field(50);
        let catalog = build_catalog(&field);
        let sequential = SignatureMatcher::with_defaults();
        let parallel = SignatureMatcher::new(MatcherConfig::parallel());

        for i in [0, 7, 21, 49] {
            let center = field.points()[i];
            let visible = field.within_radius(center, 40.0);
            let query = build_signature(center, &visible);
            assert_eq!(
                sequential.find_candidates(&catalog, &query),
                parallel.find_candidates(&catalog, &query)
            );
        }
    }

    #[test]
    fn test_mismatched_field_drops_missing_indices() {
        let field = square();
        let catalog = build_catalog(&field);
        let shorter = LandmarkField::new(field.points()[..2].to_vec());
        let query = Signature::from_parts(vec![10.0], vec![TAU]);

        let found = match_signature(&catalog, &shorter, &query);
        assert_eq!(found, shorter.points().to_vec());
    }

    #[test]
    fn test_zero_tolerance_still_recalls_exact_signature() {
        let field = scattered_field(20);
        let catalog = build_catalog(&field);
        let matcher = SignatureMatcher::new(MatcherConfig::default().with_angle_tolerance(0.0));

        assert!(matcher.contains(&catalog[3], &catalog[3]));
    }
}
