//! Per-position collapse state

use crate::algorithm::bitset::TileSet;

/// One grid slot: collapse flag plus the set of still-possible tiles
///
/// While uncollapsed, `options` holds every tile the neighbors currently
/// permit. Once collapsed the set holds exactly one tile and never changes
/// again. Position is implicit from the cell's index in the grid.
#[derive(Clone, Debug)]
pub struct Cell {
    collapsed: bool,
    options: TileSet,
}

impl Cell {
    /// Create an uncollapsed cell with the given starting options
    pub fn new(options: TileSet) -> Self {
        Self {
            collapsed: false,
            options,
        }
    }

    /// Whether this cell has been committed to a single tile
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// The set of tiles still possible at this position
    pub const fn options(&self) -> &TileSet {
        &self.options
    }

    /// Count of remaining options; lower means more constrained
    pub fn entropy(&self) -> usize {
        self.options.len()
    }

    /// Replace the option set during a propagation pass
    ///
    /// Has no effect on a collapsed cell; collapse is final.
    pub fn set_options(&mut self, options: TileSet) {
        if !self.collapsed {
            self.options = options;
        }
    }

    /// Commit this cell to a single tile
    pub fn collapse_to(&mut self, tile: usize, capacity: usize) {
        self.collapsed = true;
        self.options = TileSet::from_indices([tile], capacity);
    }

    /// The committed tile, once collapsed
    pub fn tile(&self) -> Option<usize> {
        if self.collapsed { self.options.sole() } else { None }
    }
}
