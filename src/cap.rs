//! Caps in GF(2)^n.
//!
//! A cap is a sequence of distinct points such that no three distinct
//! elements XOR to zero. Points are only ever appended, never removed, and
//! the insertion order is kept for output.

use std::fmt;

use crate::bitset::BitSet;
use crate::types::Dim;

#[derive(Debug, Clone)]
pub struct Cap {
    dim: Dim,
    /// Points in insertion order.
    points: Vec<u32>,
    /// Membership index over the whole space.
    members: BitSet,
}

impl Cap {
    /// Creates an empty cap in the given space.
    pub fn new(dim: Dim) -> Self {
        Self {
            dim,
            points: Vec::new(),
            members: BitSet::new(dim.space_size()),
        }
    }

    /// Creates the seed cap: the zero point followed by the standard basis.
    pub fn seeded(dim: Dim) -> Self {
        let mut cap = Cap::new(dim);
        cap.push(0);
        for e in dim.basis() {
            cap.push(e);
        }
        cap
    }

    /// Creates a cap from the given points, in order.
    ///
    /// Duplicates are skipped. No cap invariant is checked here, see [`Cap::is_cap`].
    ///
    /// # Panics
    ///
    /// Panics if a point is outside the space.
    pub fn from_points(dim: Dim, points: impl IntoIterator<Item = u32>) -> Self {
        let mut cap = Cap::new(dim);
        for p in points {
            cap.push(p);
        }
        cap
    }

    pub fn dim(&self) -> Dim {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends `point` unless it is already a member. Returns true if appended.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the space.
    pub fn push(&mut self, point: u32) -> bool {
        assert!(self.dim.contains(point), "Point {} is not in {}", point, self.dim);
        if !self.members.insert(point) {
            return false;
        }
        self.points.push(point);
        true
    }

    pub fn contains(&self, point: u32) -> bool {
        self.members.contains(point)
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[u32] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().copied()
    }

    /// Iterates over the XOR of every unordered triple `i < j < k` of cap points.
    pub fn triple_sums(&self) -> impl Iterator<Item = u32> + '_ {
        let p = &self.points;
        let n = p.len();
        (0..n).flat_map(move |i| {
            (i + 1..n).flat_map(move |j| {
                let ij = p[i] ^ p[j];
                (j + 1..n).map(move |k| ij ^ p[k])
            })
        })
    }

    /// Returns true if no three distinct points XOR to zero.
    pub fn is_cap(&self) -> bool {
        self.triple_sums().all(|s| s != 0)
    }

    /// Returns true if no four distinct points XOR to zero.
    ///
    /// Caps produced by greedy completion contain zero and satisfy this
    /// stronger property: a triple sum never lands on another member.
    pub fn is_sidon(&self) -> bool {
        let p = &self.points;
        let n = p.len();
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    let s = p[i] ^ p[j] ^ p[k];
                    if p[k + 1..].contains(&s) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Returns true if every point outside the cap is the XOR of three distinct
    /// cap points, i.e. no point can be added by greedy completion.
    pub fn is_complete(&self) -> bool {
        let mut covered = self.members.clone();
        for s in self.triple_sums() {
            covered.insert(s);
        }
        covered.len() == self.dim.space_size()
    }
}

/// Formats the cap as `p0,p1,...,pn,` with a trailing comma.
impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.points {
            write!(f, "{},", p)?;
        }
        Ok(())
    }
}
