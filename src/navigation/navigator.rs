//! Navigation session over a known landmark field.
//!
//! # Pipeline
//!
//! ```text
//! Reported position + visibility radius
//!       │
//!       ▼
//! ┌──────────────────┐
//! │ Closest landmark │  nearest field point to the position
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  Visible subset  │  landmarks within radius of the closest one
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ Query signature  │  build_signature(closest, visible)
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  Catalog match   │  landmarks whose signature contains the query
//! └──────────────────┘
//! ```

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, defaults};
use crate::core::{ClosestLandmark, LandmarkField, WorldPoint};
use crate::matching::{MatcherConfig, SignatureMatcher};
use crate::signature::{Catalog, build_catalog, build_catalog_parallel, build_signature};

/// Configuration for the navigator.
///
/// # Example
///
/// ```rust
/// use disha::navigation::NavigatorConfig;
///
/// let config = NavigatorConfig {
///     visible_radius: 60.0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Signature matcher configuration (also selects the parallel
    /// catalog build).
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Default visibility radius used by [`Navigator::navigate_default`].
    /// Default: 100.0
    #[serde(default = "defaults::visible_radius")]
    pub visible_radius: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            visible_radius: defaults::visible_radius(),
        }
    }
}

impl NavigatorConfig {
    /// Check that tolerance and radius are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matcher.validate()?;
        if !self.visible_radius.is_finite() || self.visible_radius <= 0.0 {
            return Err(ConfigError::InvalidParameter(format!(
                "visible_radius must be finite and positive, got {}",
                self.visible_radius
            )));
        }
        Ok(())
    }
}

/// Outcome of one navigation query.
///
/// An empty `suggested_points` is a normal outcome: the visible pattern
/// could not be placed in the field.
#[derive(Clone, Debug, Default)]
pub struct NavigationResult {
    /// Landmark closest to the reported position (`None` for an empty field).
    pub closest: Option<ClosestLandmark>,

    /// Landmarks within the visibility radius of the closest landmark,
    /// including the closest landmark itself.
    pub visible_points: Vec<WorldPoint>,

    /// Landmarks whose surroundings contain the visible pattern, in field
    /// order.
    pub suggested_points: Vec<WorldPoint>,

    /// Time spent building the catalog for this session.
    pub offline_time: Duration,

    /// Time spent matching the query against the catalog.
    pub online_time: Duration,
}

impl NavigationResult {
    /// Number of visible landmarks other than the closest one.
    pub fn visible_neighbors(&self) -> usize {
        match self.closest {
            Some(closest) => self
                .visible_points
                .iter()
                .filter(|p| **p != closest.point)
                .count(),
            None => 0,
        }
    }

    /// Whether the closest landmark is among the suggestions.
    pub fn is_resolved(&self) -> bool {
        self.closest
            .is_some_and(|c| self.suggested_points.contains(&c.point))
    }

    /// Whether the query narrowed the field down to exactly one landmark.
    pub fn is_unique(&self) -> bool {
        self.suggested_points.len() == 1
    }
}

/// Navigation session: a landmark field and its catalog.
///
/// The catalog is built once in [`Navigator::new`] and stays valid for the
/// lifetime of the session because the field cannot change underneath it.
/// Queries only borrow the session.
pub struct Navigator {
    field: LandmarkField,
    catalog: Catalog,
    matcher: SignatureMatcher,
    config: NavigatorConfig,
    offline_time: Duration,
}

impl Navigator {
    /// Create a session, building the catalog for `field`.
    pub fn new(field: LandmarkField, config: NavigatorConfig) -> Self {
        info!("Map size: {}", field.len());

        let start = Instant::now();
        let catalog = if config.matcher.use_parallel {
            build_catalog_parallel(&field)
        } else {
            build_catalog(&field)
        };
        let offline_time = start.elapsed();
        info!(
            "Offline phase took: {:.6} seconds",
            offline_time.as_secs_f64()
        );

        let matcher = SignatureMatcher::new(config.matcher.clone());

        Self {
            field,
            catalog,
            matcher,
            config,
            offline_time,
        }
    }

    /// Create a session with default configuration.
    pub fn with_defaults(field: LandmarkField) -> Self {
        Self::new(field, NavigatorConfig::default())
    }

    /// The landmark field of this session.
    pub fn field(&self) -> &LandmarkField {
        &self.field
    }

    /// The catalog built from the field.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Session configuration.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Time it took to build the catalog.
    pub fn offline_time(&self) -> Duration {
        self.offline_time
    }

    /// Localize using the configured default visibility radius.
    pub fn navigate_default(&self, position: WorldPoint) -> NavigationResult {
        self.navigate(position, self.config.visible_radius)
    }

    /// Localize from a reported position.
    ///
    /// The closest landmark to `position` acts as the observer; landmarks
    /// strictly closer than `visible_radius` to it form the visible pattern.
    /// A non-positive radius sees nothing, which yields no suggestions.
    pub fn navigate(&self, position: WorldPoint, visible_radius: f64) -> NavigationResult {
        debug!("Lost at ({:.3}, {:.3})", position.x, position.y);
        info!("Visible radius: {}", visible_radius);

        let Some(closest) = self.field.nearest(position) else {
            info!("Empty landmark field, nothing to match");
            return NavigationResult {
                offline_time: self.offline_time,
                ..Default::default()
            };
        };
        info!(
            "Closest point: ({}, {}), with distance: {:.3}",
            closest.point.x, closest.point.y, closest.distance
        );

        let visible_points = self.field.within_radius(closest.point, visible_radius);
        let query = build_signature(closest.point, &visible_points);
        info!("Number of visible points: {}", query.len());

        let start = Instant::now();
        let suggested_points = self
            .matcher
            .match_points(&self.catalog, &self.field, &query);
        let online_time = start.elapsed();
        info!(
            "Online phase took: {:.6} seconds",
            online_time.as_secs_f64()
        );
        info!("Suggested {} point(s)", suggested_points.len());

        NavigationResult {
            closest: Some(closest),
            visible_points,
            suggested_points,
            offline_time: self.offline_time,
            online_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> LandmarkField {
        LandmarkField::new(vec![
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(10.0, 0.0),
            WorldPoint::new(10.0, 10.0),
            WorldPoint::new(0.0, 10.0),
        ])
    }

    #[test]
    fn test_navigator_config_default() {
        let config = NavigatorConfig::default();
        assert_eq!(config.visible_radius, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_navigator_config_default_matches_yaml_default() {
        let from_yaml: NavigatorConfig = serde_yaml::from_str("{}").unwrap();
        let section = crate::config::NavigationSection::default();

        assert_eq!(from_yaml.visible_radius, NavigatorConfig::default().visible_radius);
        assert_eq!(from_yaml.visible_radius, section.visible_radius);
    }

    #[test]
    fn test_navigator_config_rejects_bad_radius() {
        for radius in [0.0, -5.0, f64::INFINITY, f64::NAN] {
            let config = NavigatorConfig {
                visible_radius: radius,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "radius {} accepted", radius);
        }
    }

    #[test]
    fn test_navigator_builds_catalog() {
        let navigator = Navigator::with_defaults(square());
        assert_eq!(navigator.catalog().len(), 4);
        assert_eq!(navigator.field().len(), 4);
    }

    #[test]
    fn test_navigate_empty_field() {
        let navigator = Navigator::with_defaults(LandmarkField::default());
        let result = navigator.navigate(WorldPoint::new(1.0, 1.0), 50.0);

        assert!(result.closest.is_none());
        assert!(result.visible_points.is_empty());
        assert!(result.suggested_points.is_empty());
        assert_eq!(result.visible_neighbors(), 0);
        assert!(!result.is_resolved());
    }

    #[test]
    fn test_navigate_full_view() {
        let navigator = Navigator::with_defaults(square());
        let result = navigator.navigate(WorldPoint::new(1.0, -2.0), 14.5);

        let closest = result.closest.unwrap();
        assert_eq!(closest.index, 0);
        assert_eq!(result.visible_points.len(), 4);
        assert_eq!(result.visible_neighbors(), 3);
        assert!(result.is_resolved());
    }

    #[test]
    fn test_navigate_sees_nothing() {
        let navigator = Navigator::with_defaults(square());
        let result = navigator.navigate(WorldPoint::new(0.0, 0.0), 5.0);

        assert_eq!(result.visible_points, vec![WorldPoint::ZERO]);
        assert_eq!(result.visible_neighbors(), 0);
        assert!(result.suggested_points.is_empty());
    }

    #[test]
    fn test_navigate_non_positive_radius() {
        let navigator = Navigator::with_defaults(square());
        let result = navigator.navigate(WorldPoint::new(0.0, 0.0), 0.0);

        assert!(result.closest.is_some());
        assert!(result.visible_points.is_empty());
        assert!(result.suggested_points.is_empty());
    }

    #[test]
    fn test_navigate_default_uses_config_radius() {
        let config = NavigatorConfig {
            visible_radius: 10.5,
            ..Default::default()
        };
        let navigator = Navigator::new(square(), config);
        let result = navigator.navigate_default(WorldPoint::new(10.0, 10.0));

        // (10, 10) sees (10, 0) and (0, 10) but not the opposite corner.
        assert_eq!(result.visible_points.len(), 3);
        assert!(result.is_resolved());
    }

    #[test]
    fn test_parallel_session_agrees() {
        let position = WorldPoint::new(9.0, 1.0);
        let sequential = Navigator::with_defaults(square()).navigate(position, 12.0);
        let parallel = Navigator::new(
            square(),
            NavigatorConfig {
                matcher: MatcherConfig::parallel(),
                ..Default::default()
            },
        )
        .navigate(position, 12.0);

        assert_eq!(sequential.suggested_points, parallel.suggested_points);
        assert_eq!(sequential.visible_points, parallel.visible_points);
    }

    #[test]
    fn test_nan_landmark_does_not_panic() {
        let field = LandmarkField::new(vec![
            WorldPoint::new(f64::NAN, 0.0),
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(10.0, 0.0),
            WorldPoint::new(10.0, f64::NAN),
            WorldPoint::new(0.0, 10.0),
        ]);
        let navigator = Navigator::with_defaults(field);
        assert_eq!(navigator.catalog().len(), 5);

        let result = navigator.navigate(WorldPoint::new(1.0, 1.0), 50.0);
        assert_eq!(result.closest.unwrap().index, 1);
        assert_eq!(result.visible_points.len(), 3);
        assert!(result.suggested_points.iter().all(|p| p.is_finite()));
    }
}
