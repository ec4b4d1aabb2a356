//! Error taxonomy for label validation and fusion.
//!
//! Every failure is scoped to a single call. Errors fall into two classes,
//! reported by [`Error::kind`]:
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`ErrorKind::InvalidInput`] | a label, shift or l-pair violates its preconditions |
//! | [`ErrorKind::InvalidState`] | a fusion would leave the dominant Weyl chamber |
//!
//! An N-ality-0 label passed to [`kmin`](crate::kmin) or [`fj`](crate::fj) is
//! not an error; see [`Fusion::is_degenerate`](crate::Fusion::is_degenerate).

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied a value outside the operation's domain.
    InvalidInput,
    /// The computation reached a state that correct inputs never produce.
    InvalidState,
}

/// Errors raised by label construction and the fusion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A Dynkin label needs at least one entry (N ≥ 2).
    #[error("Dynkin label must have at least one entry (SU(N) with N >= 2)")]
    EmptyLabel,

    /// A label has more than [`MAX_RANK`](crate::label::MAX_RANK) entries.
    #[error("Dynkin label of rank {rank} exceeds the supported maximum {max}")]
    RankTooLarge {
        /// Number of entries supplied.
        rank: usize,
        /// Largest supported rank.
        max: usize,
    },

    /// A Dynkin coefficient was negative.
    #[error("negative Dynkin coefficient {value} at position {position}")]
    NegativeEntry {
        /// 0-based position in the label.
        position: usize,
        /// The offending value, in decimal.
        value: String,
    },

    /// A Dynkin coefficient does not fit in `u32`.
    #[error("Dynkin coefficient {value} at position {position} exceeds {max}", max = u32::MAX)]
    EntryTooLarge {
        /// 0-based position in the label.
        position: usize,
        /// The offending value, in decimal.
        value: String,
    },

    /// A textual Dynkin coefficient did not parse as an integer.
    #[error("Dynkin coefficient {token:?} at position {position} is not an integer")]
    NonInteger {
        /// 0-based position in the label.
        position: usize,
        /// The token as written.
        token: String,
    },

    /// The shift `i` of `Q_i` lies outside `1..=N`.
    #[error("shift {shift} outside 1..={n} for SU({n})")]
    ShiftOutOfRange {
        /// Requested shift.
        shift: usize,
        /// Group rank plus one.
        n: usize,
    },

    /// A fundamental representation index lies outside `1..N`.
    #[error("fundamental index {index} outside 1..{n} for SU({n})")]
    FundamentalOutOfRange {
        /// Requested 1-indexed position.
        index: usize,
        /// Group rank plus one.
        n: usize,
    },

    /// An l-pair violates `0 <= l1 < l2 <= N` or places the transferred
    /// unit outside the augmented label.
    #[error("l-pair ({l1}, {l2}) with shift {shift} is invalid for SU({n})")]
    InvalidPair {
        /// Lower augmented position.
        l1: usize,
        /// Upper augmented position.
        l2: usize,
        /// Shift the pair was applied with.
        shift: usize,
        /// Group rank plus one.
        n: usize,
    },

    /// A stored fusion report disagrees with the fusion recomputed from its
    /// source label.
    #[error("fusion report for {label} does not match its recomputation")]
    InconsistentFusion {
        /// The report's source label.
        label: String,
    },

    /// Fusion produced a negative Dynkin coefficient.
    #[error("fusion leaves the dominant chamber: coefficient {position} would be {value}")]
    NonDominant {
        /// 0-based position in the resulting label.
        position: usize,
        /// The negative value that would have been produced.
        value: i64,
    },
}

impl Error {
    /// Classify this error.
    ///
    /// ```
    /// use tesselation::{DynkinLabel, Error, ErrorKind};
    ///
    /// let err = DynkinLabel::new(Vec::new()).unwrap_err();
    /// assert_eq!(err, Error::EmptyLabel);
    /// assert_eq!(err.kind(), ErrorKind::InvalidInput);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NonDominant { .. } => ErrorKind::InvalidState,
            Self::EmptyLabel
            | Self::RankTooLarge { .. }
            | Self::NegativeEntry { .. }
            | Self::EntryTooLarge { .. }
            | Self::NonInteger { .. }
            | Self::ShiftOutOfRange { .. }
            | Self::FundamentalOutOfRange { .. }
            | Self::InvalidPair { .. }
            | Self::InconsistentFusion { .. } => ErrorKind::InvalidInput,
        }
    }
}
