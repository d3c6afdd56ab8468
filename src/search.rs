//! Generate-and-test search for a complete cap with a given statistic.
//!
//! Each attempt builds a fresh random complete cap and computes its maximum
//! exclusion multiplicity; the first cap hitting the target wins. Attempts are
//! independent and share nothing but the random source.
//!
//! Without an attempt ceiling the search does not terminate when no complete
//! cap of the requested kind is reachable (e.g. `n = 1`, where the only
//! complete cap has multiplicity 0).

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::Rng;

use crate::builder::build_complete_cap;
use crate::cap::Cap;
use crate::exclusion::max_exclusion_multiplicity;
use crate::types::Dim;

/// Parameters of a search.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SearchConfig {
    /// Dimension of the ambient space.
    pub dim: Dim,
    /// Requested maximum exclusion multiplicity.
    pub target: u64,
    /// Attempt ceiling (`None` to search forever).
    pub max_attempts: Option<u64>,
}

impl SearchConfig {
    /// Creates an unbounded search configuration.
    pub fn new(dim: Dim, target: u64) -> Self {
        Self {
            dim,
            target,
            max_attempts: None,
        }
    }

    /// Set the attempt ceiling.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

/// A successful search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The winning complete cap.
    pub cap: Cap,
    /// Its maximum exclusion multiplicity (equal to the target).
    pub multiplicity: u64,
    /// Number of caps generated, including the winning one.
    pub attempts: u64,
    /// Wall time spent searching.
    pub elapsed: Duration,
}

/// Runs the search.
///
/// Returns `None` only if `config.max_attempts` is set and exhausted.
pub fn search<R: Rng + ?Sized>(config: &SearchConfig, rng: &mut R) -> Option<SearchOutcome> {
    let SearchConfig {
        dim,
        target,
        max_attempts,
    } = *config;
    let start = Instant::now();

    let mut attempts = 0u64;
    while max_attempts.map_or(true, |max| attempts < max) {
        attempts += 1;
        let cap = build_complete_cap(dim, rng);
        let multiplicity = max_exclusion_multiplicity(&cap, dim);
        debug!(
            "attempt {}: cap of size {} with max multiplicity {}",
            attempts,
            cap.len(),
            multiplicity
        );

        if multiplicity == target {
            let elapsed = start.elapsed();
            info!(
                "Found cap of size {} with max multiplicity {} in {} after {} attempts ({:.3} s)",
                cap.len(),
                multiplicity,
                dim,
                attempts,
                elapsed.as_secs_f64()
            );
            return Some(SearchOutcome {
                cap,
                multiplicity,
                attempts,
                elapsed,
            });
        }
    }

    warn!(
        "No cap with max multiplicity {} in {} after {} attempts",
        target, dim, attempts
    );
    None
}
