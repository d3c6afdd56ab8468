//! Pool of points that may still be added to a cap.
//!
//! The pool is a growable sequence of distinct points with positional
//! access, paired with a position table indexed by point value. The table
//! turns "remove this value" and "where is this value" into O(1) operations,
//! which matters because cap construction removes a quadratic number of
//! values per step.
//!
//! Removal swaps the last element into the vacated slot, so the order of the
//! remaining points is not preserved. Uniform random selection only needs
//! positional access, not a particular order.

use rand::Rng;

use crate::types::Dim;

/// Marker for "not in the pool" in the position table.
const ABSENT: u32 = u32::MAX;

#[derive(Debug, Clone)]
pub struct Pool {
    /// Points currently in the pool.
    points: Vec<u32>,
    /// `slots[p]` is the index of `p` in `points`, or [`ABSENT`].
    slots: Vec<u32>,
}

impl Pool {
    /// Creates an empty pool for points of the given space.
    pub fn new(dim: Dim) -> Self {
        Self {
            points: Vec::with_capacity(dim.space_size()),
            slots: vec![ABSENT; dim.space_size()],
        }
    }

    /// Creates a pool holding every point of the space, in ascending order.
    pub fn full(dim: Dim) -> Self {
        let size = dim.space_size();
        Self {
            points: (0..size as u32).collect(),
            slots: (0..size as u32).collect(),
        }
    }

    /// Number of points in the pool.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: u32) -> bool {
        self.position(point).is_some()
    }

    /// Returns the index of `point` in the pool, if present.
    pub fn position(&self, point: u32) -> Option<usize> {
        match self.slots.get(point as usize) {
            Some(&slot) if slot != ABSENT => Some(slot as usize),
            _ => None,
        }
    }

    /// Returns the point at `index`.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.points.get(index).copied()
    }

    /// Appends `point` to the end of the pool. Returns false if it was already present.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the space.
    pub fn push(&mut self, point: u32) -> bool {
        assert!(
            (point as usize) < self.slots.len(),
            "Point {} is out of range 0..{}",
            point,
            self.slots.len()
        );
        if self.contains(point) {
            return false;
        }
        self.slots[point as usize] = self.points.len() as u32;
        self.points.push(point);
        true
    }

    /// Removes and returns the last point.
    pub fn pop(&mut self) -> Option<u32> {
        let point = self.points.pop()?;
        self.slots[point as usize] = ABSENT;
        Some(point)
    }

    /// Removes `point` from the pool. Returns false (and does nothing) if absent.
    pub fn remove(&mut self, point: u32) -> bool {
        let Some(index) = self.position(point) else {
            return false;
        };
        self.points.swap_remove(index);
        if let Some(&moved) = self.points.get(index) {
            self.slots[moved as usize] = index as u32;
        }
        self.slots[point as usize] = ABSENT;
        true
    }

    /// Swaps the points at positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.points.swap(a, b);
        self.slots[self.points[a] as usize] = a as u32;
        self.slots[self.points[b] as usize] = b as u32;
    }

    /// Iterates over the points in their current order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().copied()
    }

    /// Picks a uniformly random point of the pool without removing it.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u32> {
        if self.points.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.points.len());
        Some(self.points[index])
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_full() {
        let pool = Pool::full(Dim::new(3));
        assert_eq!(pool.len(), 8);
        assert_eq!(pool.iter().collect::<Vec<_>>(), (0..8).collect::<Vec<_>>());
        for p in 0..8 {
            assert_eq!(pool.position(p), Some(p as usize));
        }
    }

    #[test]
    fn test_push_pop() {
        let mut pool = Pool::new(Dim::new(3));
        assert!(pool.is_empty());
        assert!(pool.push(5));
        assert!(pool.push(2));
        assert!(!pool.push(5));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.pop(), Some(2));
        assert!(!pool.contains(2));
        assert_eq!(pool.pop(), Some(5));
        assert_eq!(pool.pop(), None);
    }

    #[test]
    fn test_remove() {
        let mut pool = Pool::full(Dim::new(2));
        assert!(pool.remove(1));
        assert!(!pool.contains(1));
        assert!(!pool.remove(1));
        assert_eq!(pool.len(), 3);

        // The last point moved into the vacated slot.
        assert_eq!(pool.get(1), Some(3));
        assert_eq!(pool.position(3), Some(1));

        assert!(pool.remove(3));
        assert!(pool.remove(0));
        assert!(pool.remove(2));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut pool = Pool::full(Dim::new(2));
        assert!(!pool.remove(100));
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_swap() {
        let mut pool = Pool::full(Dim::new(2));
        pool.swap(0, 3);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec![3, 1, 2, 0]);
        assert_eq!(pool.position(3), Some(0));
        assert_eq!(pool.position(0), Some(3));
    }

    #[test]
    fn test_choose() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut pool = Pool::new(Dim::new(4));
        assert_eq!(pool.choose(&mut rng), None);

        pool.push(7);
        pool.push(9);
        for _ in 0..100 {
            let p = pool.choose(&mut rng).unwrap();
            assert!(p == 7 || p == 9);
        }
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_choose_covers_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pool = Pool::full(Dim::new(3));
        let mut seen = [false; 8];
        for _ in 0..1000 {
            seen[pool.choose(&mut rng).unwrap() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
