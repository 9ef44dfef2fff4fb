//! Offline phase: one full-field signature per landmark.

use log::debug;
use rayon::prelude::*;

use crate::core::LandmarkField;

use super::{Signature, build_signature};

/// Full-field signatures, indexed like the landmark field they came from.
///
/// `catalog[i]` is the signature of landmark `i` against every landmark of
/// the field. The catalog is only meaningful together with that exact field;
/// results of matching are indices into it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    signatures: Vec<Signature>,
}

impl Catalog {
    /// Signature of landmark `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Signature> {
        self.signatures.get(index)
    }

    /// All signatures in landmark order.
    #[inline]
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Number of entries (equals the field size).
    #[inline]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Iterate signatures in landmark order.
    pub fn iter(&self) -> std::slice::Iter<'_, Signature> {
        self.signatures.iter()
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = Signature;

    fn index(&self, index: usize) -> &Signature {
        &self.signatures[index]
    }
}

/// Build the catalog sequentially.
///
/// Deterministic: building twice from the same field gives bit-identical
/// catalogs. O(n² log n) in the field size.
pub fn build_catalog(field: &LandmarkField) -> Catalog {
    let points = field.points();
    let signatures = points
        .iter()
        .map(|&source| build_signature(source, points))
        .collect();

    debug!("Built catalog of {} signatures", field.len());
    Catalog { signatures }
}

/// Build the catalog with one rayon task per landmark.
///
/// Every signature depends only on the shared read-only field, so the result
/// is identical to [`build_catalog`].
pub fn build_catalog_parallel(field: &LandmarkField) -> Catalog {
    let points = field.points();
    let signatures = points
        .par_iter()
        .map(|&source| build_signature(source, points))
        .collect();

    debug!("Built catalog of {} signatures (parallel)", field.len());
    Catalog { signatures }
}
