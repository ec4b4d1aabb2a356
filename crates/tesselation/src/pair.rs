//! Locating the optimal l-pair for `X ⊗ Q_i`.
//!
//! Fusing `X` with `Q_i` moves one unit between two simple-root directions
//! of the augmented label. The pair `(l1, l2)` that yields the optimal
//! irreducible constituent is
//!
//! - `l1`: the largest non-zero augmented position `≤ N - i`,
//! - `l2`: the smallest non-zero augmented position `> l1`.
//!
//! Both sentinels are non-zero, so the pair always exists and satisfies
//! `0 ≤ l1 < l2 ≤ N`.
//!
//! # Example
//!
//! ```
//! use tesselation::{optimal_l_pair, DynkinLabel, LPair};
//!
//! // SU(3) fundamental, shift i = 2: augmented [1, 1, 0, 1]
//! let p = DynkinLabel::new(vec![1, 0]).unwrap();
//! assert_eq!(optimal_l_pair(&p, 2).unwrap(), LPair { l1: 1, l2: 3 });
//! ```

use crate::error::{Error, Result};
use crate::label::DynkinLabel;
use crate::nality::nonzero_index_set;

/// Pair of augmented positions exchanging a unit in the optimal fusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LPair {
    /// Lower position, decremented.
    pub l1: usize,
    /// Upper position, decremented.
    pub l2: usize,
}

impl LPair {
    /// Augmented position receiving the unit for shift `shift` in SU(`n`):
    /// `l1 + l2 + shift - n`.
    ///
    /// Returns `None` when that position falls outside `0..=n`.
    #[must_use]
    pub fn target(&self, shift: usize, n: usize) -> Option<usize> {
        (self.l1 + self.l2 + shift)
            .checked_sub(n)
            .filter(|&t| t <= n)
    }
}

/// Check that `shift` is a valid `Q_i` index for SU(`n`), i.e. in `1..=n`.
pub(crate) fn check_shift(shift: usize, n: usize) -> Result<()> {
    if (1..=n).contains(&shift) {
        Ok(())
    } else {
        Err(Error::ShiftOutOfRange { shift, n })
    }
}

/// Find the l-pair for fusing `label` with `Q_shift`.
///
/// `shift` is normally `N - nality(label)`, but any value in `1..=N` is
/// accepted. If no augmented position `≤ N - shift` is non-zero, `l1` falls
/// back to the left sentinel and `l2` is the first non-zero position.
///
/// # Errors
///
/// [`Error::ShiftOutOfRange`] if `shift` is not in `1..=N`.
pub fn optimal_l_pair(label: &DynkinLabel, shift: usize) -> Result<LPair> {
    let n = label.n();
    check_shift(shift, n)?;

    let augmented = label.augmented();
    let support = nonzero_index_set(augmented.entries());
    let bound = n - shift;

    let l1 = support
        .iter()
        .rev()
        .copied()
        .find(|&l| l <= bound)
        .unwrap_or(0);
    // The right sentinel at N is always in the support and l1 <= N - 1.
    let l2 = support.iter().copied().find(|&l| l > l1).unwrap_or(n);

    Ok(LPair { l1, l2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(entries: &[u32]) -> DynkinLabel {
        DynkinLabel::new(entries.to_vec()).unwrap()
    }

    #[test]
    fn su3_fundamental_and_antifundamental() {
        assert_eq!(
            optimal_l_pair(&label(&[1, 0]), 2).unwrap(),
            LPair { l1: 1, l2: 3 }
        );
        assert_eq!(
            optimal_l_pair(&label(&[0, 1]), 1).unwrap(),
            LPair { l1: 2, l2: 3 }
        );
    }

    #[test]
    fn falls_back_to_left_sentinel() {
        // augmented [1, 0, 2, 1], bound N - i = 1: only the sentinel qualifies
        assert_eq!(
            optimal_l_pair(&label(&[0, 2]), 2).unwrap(),
            LPair { l1: 0, l2: 2 }
        );
    }

    #[test]
    fn all_zero_label_pairs_the_sentinels() {
        for shift in 1..=4 {
            assert_eq!(
                optimal_l_pair(&label(&[0, 0, 0]), shift).unwrap(),
                LPair { l1: 0, l2: 4 }
            );
        }
    }

    #[test]
    fn trivial_shift_pairs_left_sentinel_with_first_entry() {
        // shift N: bound 0
        assert_eq!(
            optimal_l_pair(&label(&[0, 3, 1]), 4).unwrap(),
            LPair { l1: 0, l2: 2 }
        );
    }

    #[test]
    fn shift_out_of_range() {
        let p = label(&[1, 0]);
        assert_eq!(
            optimal_l_pair(&p, 0),
            Err(Error::ShiftOutOfRange { shift: 0, n: 3 })
        );
        assert_eq!(
            optimal_l_pair(&p, 4),
            Err(Error::ShiftOutOfRange { shift: 4, n: 3 })
        );
    }

    #[test]
    fn target_lies_between_pair() {
        let p = label(&[2, 0, 1, 0, 3]);
        let n = p.n();
        for shift in 1..=n {
            let pair = optimal_l_pair(&p, shift).unwrap();
            let target = pair.target(shift, n).unwrap();
            assert!(pair.l1 < target && target <= pair.l2, "shift {shift}");
        }
    }

    #[test]
    fn target_out_of_range() {
        assert_eq!(LPair { l1: 0, l2: 1 }.target(1, 4), None);
        assert_eq!(LPair { l1: 3, l2: 4 }.target(3, 4), None);
        assert_eq!(LPair { l1: 1, l2: 3 }.target(2, 3), Some(3));
    }
}
