//! Core types for the Disha library.
//!
//! - [`WorldPoint`]: landmark coordinates
//! - [`LandmarkField`]: the ordered, index-stable landmark map
//! - [`ClosestLandmark`]: result of a nearest-landmark query
//!
//! Angles follow the usual convention: counter-clockwise from the +X axis,
//! in radians. Bearings used by signatures are normalized into [0, 2π).

mod field;
mod point;

pub use field::{ClosestLandmark, LandmarkField};
pub use point::{WorldPoint, normalize_bearing};
