//! Lowest-entropy-first cell selection
//!
//! Collapsing the most-constrained cell first minimizes the chance of
//! driving some other cell to an empty option set later. The candidate set
//! at minimum entropy is deterministic for a given grid snapshot; only the
//! final pick among ties is random.

use crate::spatial::{Cell, Grid};
use rand::{Rng, rngs::StdRng};

/// Flat indices of uncollapsed cells tied for minimum entropy
///
/// Returns an empty vector when every cell is collapsed. Candidates appear
/// in ascending index order.
pub fn minimum_entropy_candidates(grid: &Grid) -> Vec<usize> {
    let mut minimum = usize::MAX;
    let mut candidates = Vec::new();

    for index in grid.uncollapsed() {
        let entropy = grid.cell(index).map_or(usize::MAX, Cell::entropy);

        if entropy < minimum {
            minimum = entropy;
            candidates.clear();
            candidates.push(index);
        } else if entropy == minimum {
            candidates.push(index);
        }
    }

    candidates
}

/// Choose the next cell to collapse, uniformly at random among ties
///
/// Returns `None` when no uncollapsed cell exists; the solver treats that
/// as an internal-invariant violation since termination is counted out by
/// iteration, not discovered here.
pub fn select_cell(grid: &Grid, rng: &mut StdRng) -> Option<usize> {
    let candidates = minimum_entropy_candidates(grid);
    if candidates.is_empty() {
        return None;
    }

    let pick = rng.random_range(0..candidates.len());
    candidates.get(pick).copied()
}
