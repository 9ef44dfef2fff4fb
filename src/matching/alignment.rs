//! Angular alignment: circular window search over gap sequences.
//!
//! A query seen from a reference landmark only contains some of the
//! landmarks around it, so each query gap spans one or more consecutive gaps
//! of the full-field signature. The query is aligned when the full cycle of
//! catalog gaps, read from some rotation offset, splits into contiguous
//! groups whose sums equal the query gaps in order:
//!
//! ```text
//! catalog gaps (cyclic):   a0 │ a1  a2 │ a3 │ a4  a5  a6 │
//!                          ───┴────────┴────┴────────────┴──▶ wraps to a0
//! query gaps:              q0 │   q1   │ q2 │     q3     │
//! ```
//!
//! The first group is located with a two-pointer window that slides over the
//! cycle once; every window whose sum is within tolerance of `q0`
//! is then extended greedily around the rest of the cycle.

/// Whether two gap sums agree within `tolerance`.
#[inline]
fn approx(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Whether `query` can be carved out of the cyclic sequence `catalog`.
///
/// Both slices are angular gap sequences of signatures. The query is read in
/// order without wrapping; the catalog is read cyclically from any offset.
/// Returns `true` as soon as one offset works. An empty query aligns
/// trivially; a non-empty query never aligns with an empty catalog.
pub fn aligns_cyclically(catalog: &[f64], query: &[f64], tolerance: f64) -> bool {
    let Some(&target) = query.first() else {
        return true;
    };
    let m = catalog.len();
    if m == 0 || query.len() > m {
        return false;
    }

    // Window is catalog[start .. start + len] (cyclic), never longer than m.
    let mut len = 0usize;
    let mut sum = 0.0f64;

    for start in 0..m {
        if len == 0 {
            sum = 0.0;
        }

        // Grow the trailing edge while the window falls short.
        while len < m && (len == 0 || sum < target - tolerance) {
            sum += catalog[(start + len) % m];
            len += 1;
        }

        if approx(sum, target, tolerance) && completes_cycle(catalog, query, start, len, tolerance)
        {
            return true;
        }

        // Advance the leading edge: next offset.
        sum -= catalog[start];
        len -= 1;
    }

    false
}

/// Greedily match `query[1..]` against the catalog gaps that follow the
/// first window, until the walk is back at `start`.
fn completes_cycle(
    catalog: &[f64],
    query: &[f64],
    start: usize,
    first_len: usize,
    tolerance: f64,
) -> bool {
    let m = catalog.len();
    let mut next = 1;
    let mut partial = 0.0f64;

    for step in first_len..m {
        let Some(&expected) = query.get(next) else {
            // Query used up with catalog gaps left over.
            return false;
        };

        partial += catalog[(start + step) % m];
        if approx(partial, expected, tolerance) {
            partial = 0.0;
            next += 1;
        } else if partial > expected {
            return false;
        }
    }

    next == query.len()
}
