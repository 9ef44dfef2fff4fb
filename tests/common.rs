//! Test utilities for Disha integration tests.
//!
//! Landmark field generators with fixed seeds so failures reproduce.

#![allow(dead_code)]

use disha::{LandmarkField, WorldPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Four corners of a 10x10 square.
pub fn square_field() -> LandmarkField {
    LandmarkField::new(vec![
        WorldPoint::new(0.0, 0.0),
        WorldPoint::new(10.0, 0.0),
        WorldPoint::new(10.0, 10.0),
        WorldPoint::new(0.0, 10.0),
    ])
}

/// Regular `cols` x `rows` grid with the given spacing, row-major.
pub fn grid_field(cols: usize, rows: usize, spacing: f64) -> LandmarkField {
    (0..rows)
        .flat_map(|r| {
            (0..cols).map(move |c| WorldPoint::new(c as f64 * spacing, r as f64 * spacing))
        })
        .collect()
}

/// `n` landmarks uniformly scattered over a `width` x `height` area.
pub fn random_field(n: usize, width: f64, height: f64, seed: u64) -> LandmarkField {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| WorldPoint::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)))
        .collect()
}

/// Grid landmarks pushed off the lattice by up to `jitter` in each axis.
pub fn jittered_grid_field(
    cols: usize,
    rows: usize,
    spacing: f64,
    jitter: f64,
    seed: u64,
) -> LandmarkField {
    let mut rng = StdRng::seed_from_u64(seed);
    grid_field(cols, rows, spacing)
        .iter()
        .map(|p| {
            WorldPoint::new(
                p.x + rng.gen_range(-jitter..jitter),
                p.y + rng.gen_range(-jitter..jitter),
            )
        })
        .collect()
}

/// Turn the whole field a quarter turn CCW about the origin.
///
/// `(x, y) -> (-y, x)` is exact in floating point, so pairwise distances
/// stay bit-identical while every bearing shifts by π/2.
pub fn quarter_turn(field: &LandmarkField) -> LandmarkField {
    field.iter().map(|p| WorldPoint::new(-p.y, p.x)).collect()
}
