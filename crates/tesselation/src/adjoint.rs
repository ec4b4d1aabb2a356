//! Minimum adjoint multiplicity for gauge invariance.
//!
//! For a label `p` of SU(N) with `S = Σ j·p[j-1]` boxes, the smallest `k`
//! such that `X ⊗ G^{⊗k}` contains a singlet is bounded by the box-counting
//! estimates
//!
//! ```text
//! k_n = ⌊n·S / N⌋ − Σ_{m=1}^{n-1} (n − m) · p[N-1-m]      n = 1..N-1
//! ```
//!
//! and equals their maximum. The division is a floor; it is exact whenever
//! `p` has N-ality 0, which is always the case for labels produced by
//! [`fj`](crate::fj).
//!
//! # Example
//!
//! ```
//! use tesselation::{kmin, minimum_adjoint_count, DynkinLabel};
//!
//! // SU(3) decuplet [3, 0]: 10 ⊗ 8 ⊗ 8 ∋ 1, 10 ⊗ 8 ∌ 1
//! let decuplet = DynkinLabel::new(vec![3, 0]).unwrap();
//! assert_eq!(minimum_adjoint_count(&decuplet), 2);
//!
//! // SU(3) sextet: fused with the antitriplet to the adjoint, one more adjoint
//! let sextet = DynkinLabel::new(vec![2, 0]).unwrap();
//! assert_eq!(kmin(&sextet).unwrap(), 1);
//! ```

use crate::error::Result;
use crate::fusion::Fusion;
use crate::label::DynkinLabel;
use crate::nality::box_count;

/// Minimum number of adjoint copies whose product with `label` contains a
/// singlet, without any `Q_i` partner.
///
/// Exact for every label: rank is capped at [`MAX_RANK`](crate::MAX_RANK),
/// so the box count stays below 2^63 and every `n·S` below 2^80.
#[must_use]
pub fn minimum_adjoint_count(label: &DynkinLabel) -> u64 {
    let n_group = label.n();
    let boxes = i128::from(box_count(label));
    let group = i128::try_from(n_group).unwrap_or(i128::MAX);

    // tail(n) = Σ_{m<n} (n-m)·q_m with q_m = p[N-1-m] telescopes:
    // tail(n+1) = tail(n) + Σ_{m<=n} q_m
    let mut reversed = 0i128;
    let mut tail = 0i128;
    // k_1 = ⌊S / N⌋ >= 0
    let mut best = 0i128;
    for (n, &q) in (1i128..).zip(label.entries().iter().rev()) {
        best = best.max((n * boxes).div_euclid(group) - tail);
        reversed += i128::from(q);
        tail += reversed;
    }
    // every k_n <= S, which fits a u64
    u64::try_from(best).unwrap_or(u64::MAX)
}

/// Minimum number of adjoint copies such that `X ⊗ Q_i ⊗ G^{⊗k}` contains a
/// singlet, for `label` = X and its N-ality-cancelling partner `Q_i`.
///
/// Labels of N-ality 0 take the trivial partner and emit a warning; see
/// [`Fusion::compute`].
///
/// # Errors
///
/// See [`Fusion::compute`].
pub fn kmin(label: &DynkinLabel) -> Result<u64> {
    Fusion::compute(label).map(|fusion| fusion.adjoint_count())
}

impl Fusion {
    /// Minimum adjoint count of the fused representation.
    #[must_use]
    pub fn adjoint_count(&self) -> u64 {
        debug_assert_eq!(
            crate::nality::nality(self.label()),
            0,
            "fused label must have N-ality 0"
        );
        minimum_adjoint_count(self.label())
    }
}
