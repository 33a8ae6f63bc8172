use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity bitset over tile catalog indices
///
/// Backs both cell option sets and per-direction adjacency sets.
/// Provides O(1) membership testing and the set operations the
/// propagation pass needs (union of neighbor adjacency sets followed
/// by intersection with the running option set).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
    capacity: usize,
}

impl TileSet {
    /// Create a set with no tiles present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Create a set containing every tile in the catalog
    pub fn full(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
            capacity,
        }
    }

    /// Create a set from an iterator of tile indices
    ///
    /// Indices at or beyond `capacity` are ignored.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>, capacity: usize) -> Self {
        let mut set = Self::new(capacity);
        for tile in indices {
            set.insert(tile);
        }
        set
    }

    /// Insert a tile index
    ///
    /// Indices at or beyond the capacity are ignored.
    pub fn insert(&mut self, tile: usize) {
        if tile < self.capacity {
            self.bits.set(tile, true);
        }
    }

    /// Remove a tile index
    pub fn remove(&mut self, tile: usize) {
        if tile < self.capacity {
            self.bits.set(tile, false);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    ///
    /// Both sets must share the same capacity.
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Merge another set into this one in-place
    ///
    /// Both sets must share the same capacity.
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of tile indices this set can hold
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Test whether every tile in this set is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|tile| other.contains(tile))
    }

    /// Iterate tile indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// The tile at the given rank in ascending index order
    pub fn nth(&self, rank: usize) -> Option<usize> {
        self.bits.iter_ones().nth(rank)
    }

    /// The single member, when the set holds exactly one tile
    pub fn sole(&self) -> Option<usize> {
        let mut ones = self.bits.iter_ones();
        let first = ones.next()?;
        ones.next().is_none().then_some(first)
    }

    /// Extract all tile indices as a vector in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({} tiles: {:?})", self.len(), self.to_vec())
    }
}
