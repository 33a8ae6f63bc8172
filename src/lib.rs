//! Wave function collapse tile grid generation
//!
//! Starting from a grid where every cell may hold any tile type, the solver
//! repeatedly picks the most-constrained cell, commits it to one concrete
//! tile, and propagates adjacency constraints across the whole grid until
//! every cell holds exactly one tile. Contradictions are masked by a
//! configurable backup tile, so a run always completes with a renderable
//! grid.

#![forbid(unsafe_code)]

/// Core constraint-solving loop: option bitsets, entropy selection,
/// collapse with fallback, whole-grid propagation, and the solver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid, cell, and tile catalog data structures
pub mod spatial;

pub use io::error::{GenerationError, Result};
