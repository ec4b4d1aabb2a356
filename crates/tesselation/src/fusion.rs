//! Optimal irreducible constituent of `X ⊗ Q_i`.
//!
//! Given the l-pair, the constituent is obtained from the augmented label of
//! `X` by moving units:
//!
//! ```text
//! f[l1]               -= 1
//! f[l1 + i - N + l2]  += 1
//! f[l2]               -= 1
//! ```
//!
//! and stripping the sentinels. With `i = N - t(X)` the result has N-ality 0,
//! which is the point of the construction: `X ⊗ Q_i` can then be dressed with
//! adjoints into a singlet.
//!
//! # Example
//!
//! ```
//! use tesselation::{fj, DynkinLabel, Fusion};
//!
//! // SU(3) sextet [2, 0] fused with the antitriplet lands on the adjoint.
//! let p = DynkinLabel::new(vec![2, 0]).unwrap();
//! assert_eq!(fj(&p).unwrap().entries(), &[1, 1]);
//!
//! let fusion = Fusion::compute(&p).unwrap();
//! assert_eq!(fusion.shift(), 1);
//! assert_eq!(fusion.partner().unwrap().entries(), &[1, 0]);
//! assert!(!fusion.is_degenerate());
//! ```

use crate::error::{Error, Result};
use crate::label::DynkinLabel;
use crate::nality::nality;
use crate::pair::{check_shift, optimal_l_pair, LPair};

/// Apply the unit transfer of `pair` with shift `shift` to `label`.
///
/// Any pair satisfying `0 ≤ l1 < l2 ≤ N` whose target lies inside the
/// augmented label is accepted; pairs from [`optimal_l_pair`] on the same
/// label and shift always succeed.
///
/// # Errors
///
/// - [`Error::ShiftOutOfRange`] if `shift` is not in `1..=N`.
/// - [`Error::InvalidPair`] if the pair is out of order, out of bounds, or
///   its target position is outside `0..=N`.
/// - [`Error::NonDominant`] if a coefficient of the result would be negative.
pub fn optimal_representation(
    label: &DynkinLabel,
    shift: usize,
    pair: LPair,
) -> Result<DynkinLabel> {
    let n = label.n();
    check_shift(shift, n)?;

    let LPair { l1, l2 } = pair;
    let invalid = Error::InvalidPair { l1, l2, shift, n };
    if l1 >= l2 || l2 > n {
        return Err(invalid);
    }
    let target = pair.target(shift, n).ok_or(invalid)?;

    let mut f: Vec<i64> = label
        .augmented()
        .entries()
        .iter()
        .map(|&p| i64::from(p))
        .collect();
    f[l1] -= 1;
    f[target] += 1;
    f[l2] -= 1;

    let entries = f[1..n]
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            u32::try_from(value).map_err(|_| Error::NonDominant { position, value })
        })
        .collect::<Result<Vec<_>>>()?;
    DynkinLabel::new(entries)
}

/// Outcome of fusing a label with its N-ality-cancelling partner `Q_i`.
///
/// Computed once by [`Fusion::compute`]; [`fj`] and [`kmin`](crate::kmin)
/// are thin wrappers around it.
///
/// Deserialized reports are recomputed from their `source` and rejected with
/// [`Error::InconsistentFusion`] unless every field matches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "FusionRecord")
)]
pub struct Fusion {
    source: DynkinLabel,
    nality: usize,
    shift: usize,
    pair: Option<LPair>,
    label: DynkinLabel,
}

impl Fusion {
    /// Fuse `source` with `Q_i`, `i = N - nality(source)`.
    ///
    /// A source of N-ality 0 needs no partner (`Q_N` is trivial): a warning
    /// is emitted through `tracing`, [`is_degenerate`](Self::is_degenerate)
    /// is set, and the source is carried through unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::NonDominant`] if the fusion leaves the dominant chamber,
    /// which does not happen for a well-formed label.
    pub fn compute(source: &DynkinLabel) -> Result<Self> {
        let n = source.n();
        let t = nality(source);
        let shift = n - t;

        if shift == n {
            tracing::warn!(
                n,
                label = %source,
                "label has N-ality 0, so Q_i is trivial; using it unchanged"
            );
            return Ok(Self {
                source: source.clone(),
                nality: t,
                shift,
                pair: None,
                label: source.clone(),
            });
        }

        let pair = optimal_l_pair(source, shift)?;
        let label = optimal_representation(source, shift, pair)?;
        tracing::debug!(
            n,
            shift,
            l1 = pair.l1,
            l2 = pair.l2,
            source = %source,
            result = %label,
            "fused label with Q_i"
        );
        Ok(Self {
            source: source.clone(),
            nality: t,
            shift,
            pair: Some(pair),
            label,
        })
    }

    /// The label that was fused.
    #[must_use]
    pub fn source(&self) -> &DynkinLabel {
        &self.source
    }

    /// N-ality of the source.
    #[must_use]
    pub fn nality(&self) -> usize {
        self.nality
    }

    /// The shift `i` of the partner `Q_i`; equals `N` in the degenerate case.
    #[must_use]
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// The l-pair used, or `None` in the degenerate case.
    #[must_use]
    pub fn pair(&self) -> Option<LPair> {
        self.pair
    }

    /// The optimal representation; the source itself in the degenerate case.
    #[must_use]
    pub fn label(&self) -> &DynkinLabel {
        &self.label
    }

    /// Consume the report, keeping the optimal representation.
    #[must_use]
    pub fn into_label(self) -> DynkinLabel {
        self.label
    }

    /// Whether the source already had N-ality 0.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.pair.is_none()
    }

    /// The partner `Q_i`: trivial in the degenerate case.
    ///
    /// # Errors
    ///
    /// [`Error::FundamentalOutOfRange`] if the shift is 0 or above `N`. A
    /// report from [`compute`](Self::compute) or from deserialization always
    /// has `1 <= shift <= N`, so this does not happen in practice.
    pub fn partner(&self) -> Result<DynkinLabel> {
        let n = self.source.n();
        if self.shift == n {
            DynkinLabel::trivial(n)
        } else {
            DynkinLabel::fundamental(n, self.shift)
        }
    }
}

/// Wire form of [`Fusion`], checked against a fresh computation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FusionRecord {
    source: DynkinLabel,
    nality: usize,
    shift: usize,
    pair: Option<LPair>,
    label: DynkinLabel,
}

#[cfg(feature = "serde")]
impl TryFrom<FusionRecord> for Fusion {
    type Error = Error;

    fn try_from(record: FusionRecord) -> Result<Self> {
        let fusion = Self::compute(&record.source)?;
        let claimed = Self {
            source: record.source,
            nality: record.nality,
            shift: record.shift,
            pair: record.pair,
            label: record.label,
        };
        if claimed != fusion {
            return Err(Error::InconsistentFusion {
                label: fusion.source.to_string(),
            });
        }
        Ok(fusion)
    }
}

/// Optimal irreducible representation in `X ⊗ Q_i` for `label` = X.
///
/// # Errors
///
/// See [`Fusion::compute`].
pub fn fj(label: &DynkinLabel) -> Result<DynkinLabel> {
    Fusion::compute(label).map(Fusion::into_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(entries: &[u32]) -> DynkinLabel {
        DynkinLabel::new(entries.to_vec()).unwrap()
    }

    #[test]
    fn su3_fundamentals_fuse_to_singlet() {
        assert_eq!(fj(&label(&[1, 0])).unwrap(), label(&[0, 0]));
        assert_eq!(fj(&label(&[0, 1])).unwrap(), label(&[0, 0]));
    }

    #[test]
    fn su3_sextets_fuse_to_adjoint() {
        assert_eq!(fj(&label(&[2, 0])).unwrap(), label(&[1, 1]));
        assert_eq!(fj(&label(&[0, 2])).unwrap(), label(&[1, 1]));
    }

    #[test]
    fn su4_examples() {
        assert_eq!(fj(&label(&[1, 0, 0])).unwrap(), label(&[0, 0, 0]));
        assert_eq!(fj(&label(&[0, 1, 0])).unwrap(), label(&[0, 0, 0]));
        assert_eq!(fj(&label(&[2, 0, 0])).unwrap(), label(&[1, 0, 1]));
        assert_eq!(fj(&label(&[1, 1, 0])).unwrap(), label(&[1, 0, 1]));
    }

    #[test]
    fn degenerate_passes_through() {
        let adj = DynkinLabel::adjoint(4).unwrap();
        let fusion = Fusion::compute(&adj).unwrap();
        assert!(fusion.is_degenerate());
        assert_eq!(fusion.shift(), 4);
        assert_eq!(fusion.pair(), None);
        assert_eq!(fusion.label(), &adj);
        assert!(fusion.partner().unwrap().is_trivial());
    }

    #[test]
    fn report_fields() {
        let p = label(&[1, 0]);
        let fusion = Fusion::compute(&p).unwrap();
        assert_eq!(fusion.source(), &p);
        assert_eq!(fusion.nality(), 1);
        assert_eq!(fusion.shift(), 2);
        assert_eq!(fusion.pair(), Some(LPair { l1: 1, l2: 3 }));
        assert_eq!(fusion.partner().unwrap(), label(&[0, 1]));
    }

    #[test]
    fn partner_tracks_shift() {
        for x in [label(&[1, 0, 0]), label(&[0, 1, 0]), label(&[2, 0, 1])] {
            let fusion = Fusion::compute(&x).unwrap();
            let partner = fusion.partner().unwrap();
            assert_eq!(crate::nality::box_count(&partner), fusion.shift() as u64);
            assert_eq!(nality(&partner), (4 - nality(&x)) % 4, "{x}");
        }

        let broken = Fusion {
            shift: 0,
            ..Fusion::compute(&label(&[1, 0])).unwrap()
        };
        assert_eq!(
            broken.partner(),
            Err(Error::FundamentalOutOfRange { index: 0, n: 3 })
        );
    }

    #[test]
    fn unit_moves_into_the_right_sentinel() {
        // augmented [1, 1, 0, 1]; pair (1, 3), target 3
        let out = optimal_representation(&label(&[1, 0]), 2, LPair { l1: 1, l2: 3 }).unwrap();
        assert_eq!(out, label(&[0, 0]));
    }

    #[test]
    fn rejects_malformed_pairs() {
        let p = label(&[1, 1]);
        assert_eq!(
            optimal_representation(&p, 1, LPair { l1: 2, l2: 2 }),
            Err(Error::InvalidPair {
                l1: 2,
                l2: 2,
                shift: 1,
                n: 3
            })
        );
        assert_eq!(
            optimal_representation(&p, 1, LPair { l1: 1, l2: 4 }),
            Err(Error::InvalidPair {
                l1: 1,
                l2: 4,
                shift: 1,
                n: 3
            })
        );
        // target 0 + 1 + 1 - 3 < 0
        assert_eq!(
            optimal_representation(&p, 1, LPair { l1: 0, l2: 1 }),
            Err(Error::InvalidPair {
                l1: 0,
                l2: 1,
                shift: 1,
                n: 3
            })
        );
        assert_eq!(
            optimal_representation(&p, 0, LPair { l1: 1, l2: 2 }),
            Err(Error::ShiftOutOfRange { shift: 0, n: 3 })
        );
    }

    #[test]
    fn rejects_non_dominant_result() {
        // [0, 1]: decrementing position 1 (a zero) goes negative
        let p = label(&[0, 1]);
        assert_eq!(
            optimal_representation(&p, 2, LPair { l1: 1, l2: 3 }),
            Err(Error::NonDominant {
                position: 0,
                value: -1
            })
        );
    }

    #[test]
    fn fusion_cancels_nality() {
        let p = label(&[3, 1, 0, 2, 2]);
        assert_ne!(nality(&p), 0);
        assert_eq!(nality(&fj(&p).unwrap()), 0);
    }
}
