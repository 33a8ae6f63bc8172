//! Input/output operations: CLI, tileset loading, rendering, errors

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime constants and configurable parameter defaults
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// PNG export of the collapsed grid
pub mod image;
/// Progress reporting for a single solve
pub mod progress;
/// JSON tileset loading and validation
pub mod tileset;
/// Collapse-order capture and GIF generation
pub mod visualization;
