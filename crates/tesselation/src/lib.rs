//! Tesselation - minimal gauge-invariant operators in SU(N) Yang-Mills
//!
//! Given an irreducible representation `X` of SU(N) by its Dynkin label, this
//! crate answers three questions needed to build the lowest-dimensional
//! gauge-invariant operator containing `X`:
//!
//! 1. What is its **N-ality** `t`, the Young-tableau box count mod N?
//! 2. Which irreducible constituent of `X ⊗ Q_i` (`i = N - t`) is **optimal**,
//!    i.e. cancels the N-ality with the fewest extra boxes?
//! 3. How many **adjoint** copies are then needed for a singlet?
//!
//! # Pipeline
//!
//! ```text
//! label ──► nality ──► shift i = N - t
//!   │                     │
//!   └──► augmented ──► optimal_l_pair ──► optimal_representation ──► fj
//!                                                                     │
//!                                           minimum_adjoint_count ◄───┘ = kmin
//! ```
//!
//! # Reference values
//!
//! | Group | Label | t | `fj` | `kmin` |
//! |-------|-------|---|------|--------|
//! | SU(2) | `[3]` | 1 | `[2]` | 1 |
//! | SU(3) | `[1, 0]` | 1 | `[0, 0]` | 0 |
//! | SU(3) | `[2, 0]` | 2 | `[1, 1]` | 1 |
//! | SU(3) | `[3, 0]` | 0 | `[3, 0]` | 2 |
//! | SU(4) | `[2, 0, 0]` | 2 | `[1, 0, 1]` | 1 |
//!
//! # Example
//!
//! ```
//! use tesselation::prelude::*;
//!
//! let x: DynkinLabel = "[2, 0, 0]".parse().unwrap();
//! assert_eq!(nality(&x), 2);
//!
//! let shift = x.n() - nality(&x);
//! let pair = optimal_l_pair(&x, shift).unwrap();
//! assert_eq!(pair, LPair { l1: 1, l2: 4 });
//! assert_eq!(optimal_representation(&x, shift, pair).unwrap().entries(), &[1, 0, 1]);
//!
//! assert_eq!(fj(&x).unwrap().entries(), &[1, 0, 1]);
//! assert_eq!(kmin(&x).unwrap(), 1);
//! ```
//!
//! # Diagnostics
//!
//! Labels that already have N-ality 0 need no partner. [`kmin`] and [`fj`]
//! then use the label unchanged and emit a `WARN` event through `tracing`;
//! [`Fusion::is_degenerate`] reports the same condition to callers that
//! prefer not to install a subscriber.

#![deny(missing_docs)]

// Error taxonomy
pub mod error;

// Dynkin labels and their augmented form
pub mod label;

// N-ality, box count, support sets
pub mod nality;

// l-pair selection
pub mod pair;

// Optimal representation in X ⊗ Q_i
pub mod fusion;

// Minimum adjoint multiplicity
pub mod adjoint;

pub use adjoint::{kmin, minimum_adjoint_count};
pub use error::{Error, ErrorKind, Result};
pub use fusion::{fj, optimal_representation, Fusion};
pub use label::{AugmentedLabel, DynkinLabel, MAX_RANK, SENTINEL};
pub use nality::{box_count, nality, nonzero_index_set};
pub use pair::{optimal_l_pair, LPair};

/// Prelude module for convenient imports.
///
/// ```
/// use tesselation::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adjoint::{kmin, minimum_adjoint_count};
    pub use crate::error::{Error, ErrorKind};
    pub use crate::fusion::{fj, optimal_representation, Fusion};
    pub use crate::label::{AugmentedLabel, DynkinLabel};
    pub use crate::nality::{box_count, nality, nonzero_index_set};
    pub use crate::pair::{optimal_l_pair, LPair};
}
