//! # cap-rs: Random complete caps in GF(2)^n
//!
//! **`cap-rs`** searches for *complete caps* in the binary vector space GF(2)^n
//! whose *maximum exclusion multiplicity* equals a requested value.
//!
//! ## What is a cap?
//!
//! Points of GF(2)^n are `n`-bit vectors, represented as integers in `0..2^n`,
//! and addition is bitwise XOR. A **cap** is a set of points with no three
//! distinct elements summing to zero. A cap is **complete** when no further
//! point can be added by greedy completion.
//!
//! For a fixed cap, the **exclusion multiplicity** of a point `p` is the number
//! of unordered cap triples whose XOR equals `p`. The statistic of interest is
//! the maximum of this count over the whole space.
//!
//! ## Basic Usage
//!
//! ```rust
//! use cap_rs::builder::build_complete_cap;
//! use cap_rs::exclusion::max_exclusion_multiplicity;
//! use cap_rs::search::{search, SearchConfig};
//! use cap_rs::types::Dim;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let dim = Dim::new(5);
//!
//! // 1. Grow a random complete cap
//! let cap = build_complete_cap(dim, &mut rng);
//! assert!(cap.is_cap());
//! assert!(cap.is_complete());
//!
//! // 2. Measure it
//! let k = max_exclusion_multiplicity(&cap, dim);
//!
//! // 3. Search for a cap with the same statistic
//! let config = SearchConfig::new(dim, k);
//! let outcome = search(&config, &mut rng).unwrap();
//! assert_eq!(outcome.multiplicity, k);
//! ```
//!
//! ## Core Components
//!
//! - **[`builder`]**: randomized greedy completion of a cap from the standard basis.
//! - **[`exclusion`]**: exclusion multiplicity table and its maximum.
//! - **[`search`]**: the generate-and-test loop.
//! - **[`cap`]**, **[`pool`]**: the cap and the pool of still-available points.
//!
//! Randomness is always passed in explicitly, so a fixed-seed generator
//! reproduces the whole search.

pub mod bitset;
pub mod builder;
pub mod cap;
pub mod exclusion;
pub mod pool;
pub mod search;
pub mod types;
