//! Fixed-size square grid with positional neighbor lookup
//!
//! Cells are stored in a flat vector addressed by `x + y * dimensions`.
//! Neighbor relationships are purely positional; no edges are stored.

use crate::spatial::cell::Cell;
use crate::spatial::tiles::TileCatalog;
use ndarray::Array2;

/// Cardinal direction on the grid plane
///
/// The canonical ordering is fixed as up, down, left, right. `Up` points
/// toward row zero (`y - 1`), `Down` toward `y + 1`, `Left` toward `x - 1`
/// and `Right` toward `x + 1`. Per-tile adjacency arrays are indexed in
/// this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward `y - 1`
    Up,
    /// Toward `y + 1`
    Down,
    /// Toward `x - 1`
    Left,
    /// Toward `x + 1`
    Right,
}

impl Direction {
    /// All four directions in canonical order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction pointing back toward the originating cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Position of this direction in per-tile adjacency arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name, matching the tileset file keys
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Square grid of cells, fixed for the duration of a run
#[derive(Clone, Debug)]
pub struct Grid {
    dimensions: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate `dimensions`² uncollapsed cells with full option sets
    pub fn new(dimensions: usize, catalog: &TileCatalog) -> Self {
        let cells = (0..dimensions * dimensions)
            .map(|_| Cell::new(catalog.full_set()))
            .collect();

        Self { dimensions, cells }
    }

    /// Side length in cells
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Total number of cells (`dimensions`²)
    pub const fn cell_count(&self) -> usize {
        self.dimensions * self.dimensions
    }

    /// Flat index for a coordinate pair
    pub const fn index_of(&self, x: usize, y: usize) -> usize {
        x + y * self.dimensions
    }

    /// Coordinate pair for a flat index
    pub const fn position_of(&self, index: usize) -> (usize, usize) {
        (index % self.dimensions, index / self.dimensions)
    }

    /// World position of a cell on the ground plane, as `(x, 0, y)`
    pub const fn world_position(&self, index: usize) -> [i32; 3] {
        let (x, y) = self.position_of(index);
        [x as i32, 0, y as i32]
    }

    /// Borrow a cell by flat index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Mutably borrow a cell by flat index
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// All cells in flat index order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Swap in a rebuilt cell snapshot after a propagation pass
    ///
    /// The replacement must hold exactly `cell_count` cells; anything else
    /// is ignored to preserve the fixed-dimensions invariant.
    pub fn replace_cells(&mut self, cells: Vec<Cell>) {
        if cells.len() == self.cell_count() {
            self.cells = cells;
        }
    }

    /// Flat index of the neighboring cell in the given direction
    ///
    /// Returns `None` at the grid boundary.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let (x, y) = self.position_of(index);
        let (nx, ny) = match direction {
            Direction::Up => (Some(x), y.checked_sub(1)),
            Direction::Down => (Some(x), Some(y + 1)),
            Direction::Left => (x.checked_sub(1), Some(y)),
            Direction::Right => (Some(x + 1), Some(y)),
        };

        match (nx, ny) {
            (Some(nx), Some(ny)) if nx < self.dimensions && ny < self.dimensions => {
                Some(self.index_of(nx, ny))
            }
            _ => None,
        }
    }

    /// Iterate flat indices of cells not yet collapsed
    pub fn uncollapsed(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_collapsed())
            .map(|(index, _)| index)
    }

    /// Whether every cell has been committed
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Export the current assignment as a 2-D tile index map
    ///
    /// Rows are `y`, columns are `x`; uncollapsed cells map to `None`.
    pub fn tile_map(&self) -> Array2<Option<usize>> {
        Array2::from_shape_fn((self.dimensions, self.dimensions), |(y, x)| {
            self.cells.get(self.index_of(x, y)).and_then(Cell::tile)
        })
    }
}
