//! Runtime constants and configurable parameter defaults

/// Default grid side length in cells
pub const DEFAULT_DIMENSIONS: usize = 16;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default edge length in pixels of one rendered cell
pub const DEFAULT_CELL_PIXELS: u32 = 8;

/// Default output path for the rendered grid
pub const DEFAULT_OUTPUT: &str = "wavegrid.png";

// Safety limit: propagation is O(dimensions^2) per collapse, so a full run
// is O(dimensions^4)
/// Maximum allowed grid side length
pub const MAX_GRID_DIMENSION: usize = 256;

/// Delay between GIF animation frames in milliseconds
pub const GIF_FRAME_DELAY_MS: u32 = 50;

/// How many frame delays the final GIF frame is held for
pub const FINAL_FRAME_HOLD: u32 = 20;

/// Suffix added to the output stem for the step visualization
pub const VISUALIZATION_SUFFIX: &str = "_steps";
