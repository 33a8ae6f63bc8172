//! Whole-grid constraint propagation
//!
//! One pass rebuilds every uncollapsed cell's option set from scratch:
//! start from the full catalog, then for each existing 4-directional
//! neighbor intersect with the union of tiles that neighbor's own options
//! still permit on the shared edge. Collapsed cells are copied unchanged.
//! The pass computes against an immutable snapshot and swaps the rebuilt
//! cells in at the end, so in-pass updates never feed each other.

use crate::algorithm::bitset::TileSet;
use crate::spatial::{Direction, Grid, TileCatalog};

/// Recompute one cell's options from its four neighbors
///
/// Boundary cells simply skip missing directions. The lookup runs through
/// the opposite direction: the neighbor above constrains this cell through
/// its `down` adjacency set (the relation "who may sit below me"), and
/// symmetrically for the other three directions. Intersection order does
/// not affect the result.
pub fn recompute_options(grid: &Grid, catalog: &TileCatalog, index: usize) -> TileSet {
    let mut options = catalog.full_set();

    for direction in Direction::ALL {
        let Some(neighbor_index) = grid.neighbor(index, direction) else {
            continue;
        };
        let Some(neighbor) = grid.cell(neighbor_index) else {
            continue;
        };

        let mut valid = TileSet::new(catalog.len());
        for tile in neighbor.options().iter() {
            if let Some(allowed) = catalog.allowed(tile, direction.opposite()) {
                valid.union_with(allowed);
            }
        }

        options.intersect_with(&valid);
    }

    options
}

/// One full propagation pass over the grid
///
/// Builds a new cell snapshot and replaces the grid's cells with it.
/// Option sets only ever shrink: each rebuilt set is the intersection of
/// neighbor-derived sets that were themselves computed from already-shrunk
/// options, so re-running the pass on a stable grid changes nothing.
pub fn propagate_all(grid: &mut Grid, catalog: &TileCatalog) {
    let mut next = Vec::with_capacity(grid.cell_count());

    for index in 0..grid.cell_count() {
        let Some(cell) = grid.cell(index) else {
            continue;
        };

        let mut updated = cell.clone();
        if !cell.is_collapsed() {
            updated.set_options(recompute_options(grid, catalog, index));
        }
        next.push(updated);
    }

    grid.replace_cells(next);
}
