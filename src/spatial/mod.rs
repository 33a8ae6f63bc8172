//! Spatial data model for the collapse loop
//!
//! This module contains the pure-data side of the system:
//! - Cell collapse state and option sets
//! - The fixed-size square grid with neighbor lookup
//! - The immutable tile catalog with per-direction adjacency

/// Per-position collapse state
pub mod cell;
/// Fixed-size square grid and direction handling
pub mod grid;
/// Tile definitions and the adjacency catalog
pub mod tiles;

pub use cell::Cell;
pub use grid::{Direction, Grid};
pub use tiles::{TileCatalog, TileDef};
