//! Main DishaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::matching::MatcherConfig;
use crate::navigation::NavigatorConfig;

use super::error::ConfigLoadError;
use super::sections::{FieldSection, NavigationSection};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full Disha configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DishaConfig {
    /// Landmark field source
    #[serde(default)]
    pub field: FieldSection,

    /// Signature matching settings
    #[serde(default)]
    pub matching: MatcherConfig,

    /// Navigation settings
    #[serde(default)]
    pub navigation: NavigationSection,
}

impl DishaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml), or fall back to
    /// built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigLoadError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Convert to NavigatorConfig
    pub fn to_navigator_config(&self) -> NavigatorConfig {
        NavigatorConfig {
            matcher: self.matching.clone(),
            visible_radius: self.navigation.visible_radius,
        }
    }
}
