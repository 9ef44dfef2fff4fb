//! Rotation-invariant signature matching.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    ONLINE MATCHING                            │
//! │                                                               │
//! │  Query Signature            Catalog (one entry per landmark)  │
//! │       │                            │                          │
//! │       └──────────────┬─────────────┘                          │
//! │                      ▼   for each landmark i                  │
//! │           ┌──────────────────────┐                            │
//! │           │ Distance sub-multiset│── fail ──▶ reject i        │
//! │           │   (exact, sorted)    │                            │
//! │           └──────────┬───────────┘                            │
//! │                      ▼                                        │
//! │           ┌──────────────────────┐                            │
//! │           │ Circular gap window  │── fail ──▶ reject i        │
//! │           │   (within ε)         │                            │
//! │           └──────────┬───────────┘                            │
//! │                      ▼                                        │
//! │                 accept field[i]                               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Distances alone under-determine a match: any rotation or mirror image of
//! the visible cluster has the same distance multiset. The gap test pins down
//! the cyclic order and spacing of the visible landmarks.
//!
//! ## Example
//!
//! ```rust,ignore
//! use disha::matching::{MatcherConfig, SignatureMatcher};
//!
//! let matcher = SignatureMatcher::new(MatcherConfig::parallel());
//! let indices = matcher.find_candidates(&catalog, &query);
//! let points = matcher.match_points(&catalog, &field, &query);
//! ```

mod alignment;
mod config;
mod matcher;
mod subset;

pub use alignment::aligns_cyclically;
pub use config::MatcherConfig;
pub use matcher::{SignatureMatcher, match_signature};
pub use subset::is_sub_multiset;

/// Default tolerance (radians) when comparing summed angular gaps.
pub const ANGLE_TOLERANCE: f64 = 1e-5;
