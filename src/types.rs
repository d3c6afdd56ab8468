//! Type-safe wrapper for the dimension of the ambient space.
//!
//! Points of GF(2)^n are plain `u32` values in `0..2^n`, and the group
//! operation is XOR. The dimension itself gets a newtype so that the size of
//! the space is validated once, at the boundary, instead of at every use site.
use std::fmt;

/// Dimension `n` of the ambient space GF(2)^n.
///
/// # Invariants
///
/// - `1 <= n <= Dim::MAX`
/// - Every point of the space fits into a `u32`, and a table with one entry
///   per point (`2^n` entries) is cheap enough to allocate per attempt.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Dim(u32);

impl Dim {
    /// Largest supported dimension.
    pub const MAX: u32 = 24;

    /// Creates a new dimension.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not in the range `1..=Dim::MAX`.
    pub fn new(n: u32) -> Self {
        assert!(
            (1..=Self::MAX).contains(&n),
            "Dimension should be in the range 1..={}",
            Self::MAX
        );
        Dim(n)
    }

    /// Creates a new dimension from a raw (possibly user-supplied) value.
    ///
    /// Returns `None` if `n` is not in the range `1..=Dim::MAX`.
    pub fn checked(n: i64) -> Option<Self> {
        if (1..=Self::MAX as i64).contains(&n) {
            Some(Dim(n as u32))
        } else {
            None
        }
    }

    /// Returns the raw dimension.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Number of points in the space, `2^n`.
    pub fn space_size(self) -> usize {
        1 << self.0
    }

    /// Returns true if `point` belongs to the space.
    pub fn contains(self, point: u32) -> bool {
        (point as usize) < self.space_size()
    }

    /// Iterates over the standard basis `2^0, 2^1, ..., 2^(n-1)`.
    pub fn basis(self) -> impl Iterator<Item = u32> {
        (0..self.0).map(|i| 1 << i)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2)^{}", self.0)
    }
}

impl From<Dim> for u32 {
    fn from(dim: Dim) -> Self {
        dim.0
    }
}
