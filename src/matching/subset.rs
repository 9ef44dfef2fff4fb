//! Distance admissibility: sub-multiset test over sorted sequences.

use std::cmp::Ordering;

/// Whether every element of `query` appears, counted, in `candidate`.
///
/// Both sequences are sorted ascending and merged: walking the candidate
/// stream, the query cursor advances whenever the current candidate value
/// equals the value under the cursor. The walk stops as soon as the query is
/// fully consumed.
///
/// Values are compared exactly. For signatures this is sound because query
/// and catalog distances come from the same computation on the same points.
///
/// # Example
/// ```
/// use disha::matching::is_sub_multiset;
///
/// assert!(is_sub_multiset(&[3, 1], &[1, 2, 3]));
/// assert!(!is_sub_multiset(&[1, 1], &[1, 2, 3]));
/// ```
pub fn is_sub_multiset<T: PartialOrd + Copy>(query: &[T], candidate: &[T]) -> bool {
    if query.len() > candidate.len() {
        return false;
    }

    let mut query = query.to_vec();
    let mut candidate = candidate.to_vec();
    query.sort_by(ascending);
    candidate.sort_by(ascending);

    let mut cursor = 0;
    for value in &candidate {
        if cursor == query.len() {
            break;
        }
        if query[cursor] == *value {
            cursor += 1;
        }
    }

    cursor == query.len()
}

/// Ascending order with unordered values (NaN) placed last.
///
/// Values that do not compare equal to themselves are grouped at the end,
/// which keeps the order total for floats. They never match anything in
/// the merge because `NaN != NaN`.
#[inline]
fn ascending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    #[allow(clippy::eq_op)]
    let (a_unordered, b_unordered) = (a != a, b != b);
    match (a_unordered, b_unordered) {
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}
