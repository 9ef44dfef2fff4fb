//! # Disha
//!
//! Landmark-pattern localization without GPS.
//!
//! ## Overview
//!
//! Given a known 2D field of point landmarks (building corners, trees, beacons),
//! Disha finds where an observer stands from the relative geometry of the
//! landmarks it can see. Each landmark is described by a rotation-invariant
//! **signature**: the distances to its neighbours and the angular gaps between
//! them in bearing order.
//!
//! - **Offline**: build a [`Catalog`] holding one signature per landmark
//! - **Online**: build a query signature from the visible landmarks and keep
//!   every catalog entry that contains it
//!
//! ## Quick Start
//!
//! ```rust
//! use disha::{LandmarkField, Navigator, WorldPoint};
//!
//! let field = LandmarkField::new(vec![
//!     WorldPoint::new(0.0, 0.0),
//!     WorldPoint::new(10.0, 0.0),
//!     WorldPoint::new(10.0, 10.0),
//!     WorldPoint::new(0.0, 10.0),
//! ]);
//!
//! let navigator = Navigator::with_defaults(field);
//! let result = navigator.navigate(WorldPoint::new(1.0, 1.0), 20.0);
//!
//! assert!(result.suggested_points.contains(&WorldPoint::new(0.0, 0.0)));
//! ```
//!
//! ## Coordinate System
//!
//! - X: right, Y: up (image maps work too, the geometry is mirrored consistently)
//! - Bearings: radians in `[0, 2π)`, CCW positive from +X axis

#![warn(missing_docs)]

// Core types
pub mod core;

// Landmark signatures and the offline catalog
pub mod signature;

// Online signature matching
pub mod matching;

// Navigation session
pub mod navigation;

// Unified configuration
pub mod config;

// Landmark file loading
pub mod io;

// Re-export commonly used types at crate root
pub use config::DishaConfig;
pub use core::{LandmarkField, WorldPoint};
pub use matching::{ANGLE_TOLERANCE, MatcherConfig, SignatureMatcher, match_signature};
pub use navigation::{NavigationResult, Navigator, NavigatorConfig};
pub use signature::{Catalog, Signature, build_catalog, build_signature};
