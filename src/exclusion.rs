//! Exclusion multiplicities of a cap.
//!
//! The exclusion multiplicity of a point `p` is the number of unordered
//! triples `i < j < k` of cap points with `cap[i] ^ cap[j] ^ cap[k] == p`.
//! The statistic searched for is the maximum of this count over the space.
//!
//! Counting enumerates all triples, so the cost is `O(|cap|^3)` plus one
//! `O(2^n)` scan of the table. This dominates each search attempt.

use std::collections::BTreeMap;

use crate::cap::Cap;
use crate::types::Dim;

/// Multiplicity table: `counts[p]` triples of the cap XOR to `p`.
///
/// # Panics
///
/// Panics if a cap point is outside the space of `dim`.
pub fn exclusion_counts(cap: &Cap, dim: Dim) -> Vec<u64> {
    let mut counts = vec![0u64; dim.space_size()];
    for s in cap.triple_sums() {
        counts[s as usize] += 1;
    }
    counts
}

/// Maximum exclusion multiplicity over all points of the space.
///
/// Returns 0 for caps with fewer than three points.
pub fn max_exclusion_multiplicity(cap: &Cap, dim: Dim) -> u64 {
    exclusion_counts(cap, dim).into_iter().max().unwrap_or(0)
}

/// Full multiplicity table of a cap, for reporting.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExclusionProfile {
    counts: Vec<u64>,
}

impl ExclusionProfile {
    pub fn new(cap: &Cap, dim: Dim) -> Self {
        Self {
            counts: exclusion_counts(cap, dim),
        }
    }

    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Points attaining the maximum multiplicity.
    pub fn argmax(&self) -> Vec<u32> {
        let max = self.max();
        (0..self.counts.len() as u32)
            .filter(|&p| self.counts[p as usize] == max)
            .collect()
    }

    /// Number of points per multiplicity value, in ascending order of multiplicity.
    pub fn histogram(&self) -> BTreeMap<u64, usize> {
        let mut histogram = BTreeMap::new();
        for &c in &self.counts {
            *histogram.entry(c).or_insert(0) += 1;
        }
        histogram
    }
}
