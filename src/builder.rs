//! Randomized greedy completion of a cap.
//!
//! Construction starts from the seed cap `{0, e_1, ..., e_n}` and keeps a
//! [`Pool`] of points that can still be added. A point leaves the pool when it
//! joins the cap or when it becomes the XOR of three distinct cap points;
//! adding such a point would create four points summing to zero, and since
//! zero is in the cap, this also rules out every three-point zero sum.
//!
//! Each step draws a uniformly random pool point `p`, removes `p ^ a ^ b` for
//! every pair `a, b` of current cap points, and commits `p`. The cap is
//! complete (maximal) exactly when the pool runs dry.
//!
//! Different random draws lead to structurally different complete caps, of
//! possibly different sizes.

use log::debug;
use rand::Rng;

use crate::cap::Cap;
use crate::pool::Pool;
use crate::types::Dim;

/// Grows a random complete cap in GF(2)^n.
pub fn build_complete_cap<R: Rng + ?Sized>(dim: Dim, rng: &mut R) -> Cap {
    let mut pool = Pool::full(dim);
    let cap = Cap::seeded(dim);
    for p in cap.iter() {
        pool.remove(p);
    }

    // Exclusions induced by the seed itself.
    for s in cap.triple_sums() {
        pool.remove(s);
    }
    debug!(
        "build_complete_cap({}): seed of size {}, {} points available",
        dim,
        cap.len(),
        pool.len()
    );

    complete(cap, pool, rng)
}

/// Saturates `cap` by drawing from `pool` until it is empty.
///
/// The pool must already exclude the cap members and all their triple sums.
fn complete<R: Rng + ?Sized>(mut cap: Cap, mut pool: Pool, rng: &mut R) -> Cap {
    while let Some(p) = pool.choose(rng) {
        let points = cap.points();
        for (i, &a) in points.iter().enumerate() {
            let pa = p ^ a;
            for &b in &points[i + 1..] {
                pool.remove(pa ^ b);
            }
        }
        // `p ^ a ^ b` never equals `p` for distinct `a, b`, but a point drawn
        // twice must not be inserted twice.
        cap.push(p);
        pool.remove(p);
    }

    debug!("build_complete_cap({}): complete cap of size {}", cap.dim(), cap.len());
    cap
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use test_log::test;

    use super::*;

    #[test]
    fn test_dim_1() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let cap = build_complete_cap(Dim::new(1), &mut rng);
        assert_eq!(cap.points(), &[0, 1]);
    }

    #[test]
    fn test_dim_2() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let cap = build_complete_cap(Dim::new(2), &mut rng);
        assert_eq!(cap.points(), &[0, 1, 2]);
    }

    #[test]
    fn test_dim_3_is_the_seed() {
        // Every non-seed point of GF(2)^3 is a triple sum of {0, 1, 2, 4}.
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let cap = build_complete_cap(Dim::new(3), &mut rng);
            assert_eq!(cap.points(), &[0, 1, 2, 4]);
        }
    }

    #[test]
    fn test_seed_prefix() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for n in 1..=6 {
            let dim = Dim::new(n);
            let cap = build_complete_cap(dim, &mut rng);
            let seed: Vec<u32> = std::iter::once(0).chain(dim.basis()).collect();
            assert_eq!(&cap.points()[..seed.len()], seed.as_slice());
        }
    }

    #[test]
    fn test_cap_invariants() {
        for n in 2..=6 {
            let dim = Dim::new(n);
            for seed in 0..20 {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let cap = build_complete_cap(dim, &mut rng);
                assert!(cap.is_cap(), "dim={} seed={} cap={}", n, seed, cap);
                assert!(cap.is_sidon(), "dim={} seed={} cap={}", n, seed, cap);
                assert!(cap.is_complete(), "dim={} seed={} cap={}", n, seed, cap);
            }
        }
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let dim = Dim::new(6);
        let a = build_complete_cap(dim, &mut ChaCha8Rng::seed_from_u64(99));
        let b = build_complete_cap(dim, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_complete_from_partial_pool() {
        // Completing from an empty pool returns the cap unchanged.
        let dim = Dim::new(4);
        let cap = Cap::seeded(dim);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let done = complete(cap.clone(), Pool::new(dim), &mut rng);
        assert_eq!(done.points(), cap.points());
    }
}
