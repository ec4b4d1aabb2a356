//! N-ality and support sets of Dynkin labels.
//!
//! The N-ality of an SU(N) representation is the number of boxes in its
//! Young tableau, reduced mod N:
//!
//! ```text
//! boxes(p) = Σ_{j=1}^{N-1} j · p[j-1]
//! t(p)     = boxes(p) mod N
//! ```
//!
//! # Example
//!
//! ```
//! use tesselation::{nality, DynkinLabel};
//!
//! // The SU(3) adjoint [1, 1] has 3 boxes, N-ality 0.
//! let adj = DynkinLabel::adjoint(3).unwrap();
//! assert_eq!(nality(&adj), 0);
//! ```

use crate::label::DynkinLabel;

/// Number of boxes in the Young tableau of `label`.
///
/// Below 2^63 for any label of rank at most [`MAX_RANK`](crate::MAX_RANK).
#[must_use]
pub fn box_count(label: &DynkinLabel) -> u64 {
    label
        .entries()
        .iter()
        .zip(1u64..)
        .map(|(&p, j)| j * u64::from(p))
        .sum()
}

/// N-ality of `label`, in `0..N`.
#[must_use]
pub fn nality(label: &DynkinLabel) -> usize {
    (box_count(label) % label.n() as u64) as usize
}

/// Ascending positions of the non-zero entries of `entries`.
///
/// Works on a raw label as well as on its augmented form.
///
/// ```
/// use tesselation::{nonzero_index_set, DynkinLabel};
///
/// let p = DynkinLabel::new(vec![0, 2, 0, 1]).unwrap();
/// assert_eq!(nonzero_index_set(p.entries()), vec![1, 3]);
/// assert_eq!(nonzero_index_set(p.augmented().entries()), vec![0, 2, 4, 5]);
/// ```
#[must_use]
pub fn nonzero_index_set(entries: &[u32]) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p != 0)
        .map(|(k, _)| k)
        .collect()
}
