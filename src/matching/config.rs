//! Matcher configuration.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

use super::ANGLE_TOLERANCE;

/// Configuration for the signature matcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Tolerance when comparing summed angular gaps (radians).
    /// Distances are always compared exactly.
    /// Default: 1e-5
    #[serde(default = "default_angle_tolerance")]
    pub angle_tolerance: f64,

    /// Whether to use parallel search (rayon).
    /// Splits the per-landmark work of catalog building and matching across
    /// CPU cores. Worth it for fields of a few hundred landmarks and up.
    #[serde(default)]
    pub use_parallel: bool,
}

fn default_angle_tolerance() -> f64 {
    ANGLE_TOLERANCE
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            angle_tolerance: default_angle_tolerance(),
            use_parallel: false,
        }
    }
}

impl MatcherConfig {
    /// Default tolerance with parallel search enabled.
    pub fn parallel() -> Self {
        Self {
            use_parallel: true,
            ..Default::default()
        }
    }

    /// Set the angular tolerance.
    pub fn with_angle_tolerance(mut self, tolerance: f64) -> Self {
        self.angle_tolerance = tolerance;
        self
    }

    /// Check that the tolerance is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.angle_tolerance.is_finite() || self.angle_tolerance < 0.0 {
            return Err(ConfigError::InvalidParameter(format!(
                "angle_tolerance must be finite and non-negative, got {}",
                self.angle_tolerance
            )));
        }
        Ok(())
    }
}
