/// Efficient bitset implementation for tile option tracking
pub mod bitset;
/// Cell collapse with the backup-tile fallback policy
pub mod collapse;
/// Whole-grid constraint propagation
pub mod propagation;
/// Lowest-entropy cell selection
pub mod selection;
/// Solver orchestration and the presentation hook seam
pub mod solver;
