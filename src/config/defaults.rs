//! Default value functions for serde deserialization.

pub fn visible_radius() -> f64 {
    100.0
}

pub fn report_limit() -> usize {
    20
}
