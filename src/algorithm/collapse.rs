//! Cell collapse with the backup-tile fallback
//!
//! A contradiction (an option set propagation emptied) is never surfaced
//! as a failure: the configured backup tile is substituted so a run always
//! produces a fully-assigned grid. The original behavior reached this
//! branch through a caught exception; here it is an explicit empty-check.

use crate::spatial::Cell;
use rand::{Rng, rngs::StdRng};

/// Result of collapsing a single cell
#[derive(Clone, Copy, Debug)]
pub struct CollapseOutcome {
    /// The tile the cell was committed to
    pub tile: usize,
    /// Whether the backup tile masked an empty option set
    pub fallback_used: bool,
}

/// Commit a cell to one tile, chosen uniformly among its options
///
/// When the option set is empty the backup tile becomes the sole option
/// instead. The cell is marked collapsed in either case.
pub fn collapse_cell(
    cell: &mut Cell,
    backup_tile: usize,
    catalog_len: usize,
    rng: &mut StdRng,
) -> CollapseOutcome {
    let option_count = cell.options().len();

    if option_count == 0 {
        cell.collapse_to(backup_tile, catalog_len);
        return CollapseOutcome {
            tile: backup_tile,
            fallback_used: true,
        };
    }

    let rank = rng.random_range(0..option_count);
    let tile = cell.options().nth(rank).unwrap_or(backup_tile);
    cell.collapse_to(tile, catalog_len);

    CollapseOutcome {
        tile,
        fallback_used: false,
    }
}
