//! Unified configuration loading for Disha.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use disha::config::DishaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = DishaConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = DishaConfig::default();
//!
//! let navigator_config = config.to_navigator_config();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`FieldSection`] | Landmark file path |
//! | [`MatcherConfig`](crate::matching::MatcherConfig) | Angle tolerance, parallel search |
//! | [`NavigationSection`] | Visibility radius, report size |
//!
//! ## Example YAML
//!
//! ```yaml
//! field:
//!   path: data/square.txt
//!
//! matching:
//!   angle_tolerance: 1.0e-5   # radians
//!   use_parallel: false
//!
//! navigation:
//!   visible_radius: 100.0     # landmark units (pixels for image maps)
//!   report_limit: 20
//! ```

pub(crate) mod defaults;
mod disha;
mod error;
mod sections;

pub use disha::{DEFAULT_CONFIG_PATH, DishaConfig};
pub use error::{ConfigError, ConfigLoadError};
pub use sections::{FieldSection, NavigationSection};
