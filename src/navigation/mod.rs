//! Navigation sessions: localize from the pattern of visible landmarks.
//!
//! A [`Navigator`] owns a landmark field and the catalog built from it
//! (offline phase), and answers queries of the form "I am near this
//! position and can see this far" (online phase):
//!
//! ```ignore
//! use disha::core::{LandmarkField, WorldPoint};
//! use disha::navigation::{Navigator, NavigatorConfig};
//!
//! let field = disha::io::load_field(Path::new("data/campus.yaml"))?;
//! let navigator = Navigator::new(field, NavigatorConfig::default());
//!
//! let result = navigator.navigate(WorldPoint::new(412.0, 230.0), 100.0);
//! for point in &result.suggested_points {
//!     println!("Could be at ({}, {})", point.x, point.y);
//! }
//! ```
//!
//! Several suggestions mean the visible pattern is ambiguous in this field;
//! a larger radius usually narrows it down. No suggestions is a normal
//! outcome, not an error.

mod navigator;

pub use navigator::{NavigationResult, Navigator, NavigatorConfig};
