//! Field and navigation configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Landmark field source
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FieldSection {
    /// Path to a landmark file (YAML, or one `x y` pair per line).
    /// Can be overridden on the command line.
    #[serde(default)]
    pub path: Option<String>,
}

/// Navigation settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigationSection {
    /// Visibility radius around the closest landmark.
    /// Same units as the landmark coordinates.
    /// Default: 100.0
    #[serde(default = "defaults::visible_radius")]
    pub visible_radius: f64,

    /// Maximum number of suggested points printed by the CLI report
    /// (0 = all).
    /// Default: 20
    #[serde(default = "defaults::report_limit")]
    pub report_limit: usize,
}

impl Default for NavigationSection {
    fn default() -> Self {
        Self {
            visible_radius: defaults::visible_radius(),
            report_limit: defaults::report_limit(),
        }
    }
}
