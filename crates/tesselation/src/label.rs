//! Dynkin labels of SU(N) irreducible representations.
//!
//! A label is a sequence of N-1 non-negative integers; the group is implied
//! by its length. Labels are immutable: every operation in this crate returns
//! a fresh label rather than editing one in place.
//!
//! # Augmented form
//!
//! The fusion pipeline works on the *augmented* label of length N+1. The
//! interior positions `1..N` hold the label; the two boundary positions `0`
//! and `N` hold the sentinel `1`, standing for the trivial representation at
//! the two ends of the simple-root chain.
//!
//! ```text
//! label      [p1, p2, ..., p(N-1)]
//! augmented  [1, p1, p2, ..., p(N-1), 1]
//!             0  1   2       N-1     N
//! ```
//!
//! # Example
//!
//! ```
//! use tesselation::DynkinLabel;
//!
//! let p: DynkinLabel = "[1, 0, 2]".parse().unwrap();
//! assert_eq!(p.n(), 4);
//! assert_eq!(p.rank(), 3);
//! assert_eq!(p.augmented().entries(), &[1, 1, 0, 2, 1]);
//! assert_eq!(p.to_string(), "[1, 0, 2]");
//! ```

use core::fmt;
use core::num::IntErrorKind;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Value stored at both boundary positions of an [`AugmentedLabel`].
pub const SENTINEL: u32 = 1;

/// Largest supported rank, N-1.
///
/// With `u32` coefficients this keeps the box count below 2^63 and every
/// intermediate of the adjoint-count formula below 2^80.
pub const MAX_RANK: usize = u16::MAX as usize;

/// Dynkin label of an SU(N) irreducible representation.
///
/// # Invariant
///
/// Between one and [`MAX_RANK`] entries (2 ≤ N ≤ MAX_RANK + 1). Entries are
/// non-negative by type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
pub struct DynkinLabel {
    entries: Vec<u32>,
}

impl DynkinLabel {
    /// Create a label from its coefficients.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyLabel`] if `entries` is empty, [`Error::RankTooLarge`]
    /// if it has more than [`MAX_RANK`] entries.
    pub fn new(entries: Vec<u32>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyLabel);
        }
        if entries.len() > MAX_RANK {
            return Err(Error::RankTooLarge {
                rank: entries.len(),
                max: MAX_RANK,
            });
        }
        Ok(Self { entries })
    }

    /// Create a label from signed coefficients, rejecting negative values.
    ///
    /// ```
    /// use tesselation::{DynkinLabel, Error};
    ///
    /// assert!(DynkinLabel::from_signed(&[2, 0, 1]).is_ok());
    /// assert_eq!(
    ///     DynkinLabel::from_signed(&[2, -1]),
    ///     Err(Error::NegativeEntry { position: 1, value: "-1".to_string() })
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::EmptyLabel`], [`Error::NegativeEntry`],
    /// [`Error::EntryTooLarge`] or [`Error::RankTooLarge`].
    pub fn from_signed(entries: &[i64]) -> Result<Self> {
        let entries = entries
            .iter()
            .enumerate()
            .map(|(position, &value)| coefficient(position, value))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// The trivial (singlet) representation of SU(`n`).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyLabel`] if `n < 2`.
    pub fn trivial(n: usize) -> Result<Self> {
        Self::new(vec![0; n.saturating_sub(1)])
    }

    /// The fundamental-type representation `Q_i` of SU(`n`): a single `1` at
    /// the 1-indexed position `index`.
    ///
    /// ```
    /// use tesselation::DynkinLabel;
    ///
    /// let q2 = DynkinLabel::fundamental(4, 2).unwrap();
    /// assert_eq!(q2.entries(), &[0, 1, 0]);
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::EmptyLabel`] if `n < 2`, [`Error::FundamentalOutOfRange`] if
    /// `index` is not in `1..n`.
    pub fn fundamental(n: usize, index: usize) -> Result<Self> {
        let mut entries = Self::trivial(n)?.entries;
        if index == 0 || index >= n {
            return Err(Error::FundamentalOutOfRange { index, n });
        }
        entries[index - 1] = 1;
        Ok(Self { entries })
    }

    /// The adjoint representation of SU(`n`): `[1, 0, ..., 0, 1]`, or `[2]`
    /// for SU(2).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyLabel`] if `n < 2`.
    pub fn adjoint(n: usize) -> Result<Self> {
        let mut entries = Self::trivial(n)?.entries;
        let last = entries.len() - 1;
        entries[0] += 1;
        entries[last] += 1;
        Ok(Self { entries })
    }

    /// The `N` of SU(N).
    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.entries.len() + 1
    }

    /// Number of simple roots, N-1.
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.entries.len()
    }

    /// The coefficients.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Whether this is the singlet.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.entries.iter().all(|&p| p == 0)
    }

    /// The complex-conjugate representation (reversed label).
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            entries: self.entries.iter().rev().copied().collect(),
        }
    }

    /// The label padded with [`SENTINEL`] at positions `0` and `N`.
    #[must_use]
    pub fn augmented(&self) -> AugmentedLabel {
        let mut entries = Vec::with_capacity(self.entries.len() + 2);
        entries.push(SENTINEL);
        entries.extend_from_slice(&self.entries);
        entries.push(SENTINEL);
        AugmentedLabel { entries }
    }
}

impl AsRef<[u32]> for DynkinLabel {
    fn as_ref(&self) -> &[u32] {
        &self.entries
    }
}

impl TryFrom<Vec<u32>> for DynkinLabel {
    type Error = Error;

    fn try_from(entries: Vec<u32>) -> Result<Self> {
        Self::new(entries)
    }
}

impl TryFrom<&[u32]> for DynkinLabel {
    type Error = Error;

    fn try_from(entries: &[u32]) -> Result<Self> {
        Self::new(entries.to_vec())
    }
}

impl TryFrom<&[i64]> for DynkinLabel {
    type Error = Error;

    fn try_from(entries: &[i64]) -> Result<Self> {
        Self::from_signed(entries)
    }
}

impl From<DynkinLabel> for Vec<u32> {
    fn from(label: DynkinLabel) -> Self {
        label.entries
    }
}

impl fmt::Display for DynkinLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (k, p) in self.entries.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("]")
    }
}

/// Range-check one signed coefficient.
fn coefficient(position: usize, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(Error::NegativeEntry {
            position,
            value: value.to_string(),
        });
    }
    u32::try_from(value).map_err(|_| Error::EntryTooLarge {
        position,
        value: value.to_string(),
    })
}

/// Parse one textual coefficient, telling overflow apart from garbage.
fn parse_coefficient(position: usize, token: &str) -> Result<u32> {
    match token.parse::<i64>() {
        Ok(value) => coefficient(position, value),
        Err(e) => Err(match e.kind() {
            IntErrorKind::PosOverflow => Error::EntryTooLarge {
                position,
                value: token.to_string(),
            },
            IntErrorKind::NegOverflow => Error::NegativeEntry {
                position,
                value: token.to_string(),
            },
            _ => Error::NonInteger {
                position,
                token: token.to_string(),
            },
        }),
    }
}

/// Parses `"[1, 0, 2]"`, `"(1,0,2)"`, `"1,0,2"` or `"1 0 2"`.
///
/// Comma-separated input must not contain empty fields: `"1,,2"` is rejected.
impl FromStr for DynkinLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let body = s.trim();
        let body = body
            .strip_prefix('[')
            .and_then(|b| b.strip_suffix(']'))
            .or_else(|| body.strip_prefix('(').and_then(|b| b.strip_suffix(')')))
            .unwrap_or(body)
            .trim();
        if body.is_empty() {
            return Err(Error::EmptyLabel);
        }

        let tokens: Vec<&str> = if body.contains(',') {
            body.split(',').map(str::trim).collect()
        } else {
            body.split_whitespace().collect()
        };
        let entries = tokens
            .into_iter()
            .enumerate()
            .map(|(position, token)| parse_coefficient(position, token))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }
}

/// A Dynkin label padded with boundary sentinels, length N+1.
///
/// Only obtainable through [`DynkinLabel::augmented`], so position `0` and
/// position `N` always hold [`SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AugmentedLabel {
    entries: Vec<u32>,
}

impl AugmentedLabel {
    /// The `N` of SU(N); also the index of the right sentinel.
    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.entries.len() - 1
    }

    /// All N+1 entries, sentinels included.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// The wrapped label, positions `1..N`.
    #[must_use]
    pub fn interior(&self) -> &[u32] {
        &self.entries[1..self.entries.len() - 1]
    }
}
