//! Fixed-size bit set over the points of GF(2)^n.
//!
//! Used as the membership index of a [`Cap`][crate::cap::Cap], so that
//! "is this point already in the cap?" is a single word lookup instead of a
//! linear scan over the cap sequence.

/// A bit set backed by a vector of u64 words, one bit per point.
#[derive(Debug, Clone)]
pub struct BitSet {
    /// Storage: each u64 holds 64 points
    words: Vec<u64>,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates a new empty bit set able to hold points in `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(Self::BITS_PER_WORD)],
            count: 0,
        }
    }

    /// Returns the number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the set holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the capacity in bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * Self::BITS_PER_WORD
    }

    #[inline]
    fn word_and_mask(point: u32) -> (usize, u64) {
        let index = point as usize;
        (index / Self::BITS_PER_WORD, 1u64 << (index % Self::BITS_PER_WORD))
    }

    /// Returns true if `point` is in the set.
    #[inline]
    pub fn contains(&self, point: u32) -> bool {
        let (word, mask) = Self::word_and_mask(point);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    /// Adds `point` to the set. Returns true if it was not present.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the capacity.
    #[inline]
    pub fn insert(&mut self, point: u32) -> bool {
        let (word, mask) = Self::word_and_mask(point);
        assert!(
            word < self.words.len(),
            "Point {} is out of range 0..{}",
            point,
            self.capacity()
        );
        let was_clear = self.words[word] & mask == 0;
        if was_clear {
            self.words[word] |= mask;
            self.count += 1;
        }
        was_clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bs = BitSet::new(16);
        assert!(bs.is_empty());
        assert_eq!(bs.len(), 0);
        assert!(!bs.contains(0));
        assert!(!bs.contains(1000));
    }

    #[test]
    fn test_insert_contains() {
        let mut bs = BitSet::new(128);
        assert!(!bs.contains(42));
        assert!(bs.insert(42));
        assert!(bs.contains(42));
        assert!(!bs.insert(42));
        assert_eq!(bs.len(), 1);
    }

    #[test]
    #[should_panic]
    fn test_insert_out_of_range() {
        let mut bs = BitSet::new(8);
        bs.insert(64);
    }
}
