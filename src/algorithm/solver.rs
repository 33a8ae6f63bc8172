//! Solver orchestration: the select/collapse/propagate loop
//!
//! The solver exclusively owns the grid for the run's duration. Each step
//! collapses exactly one cell and then rebuilds every uncollapsed cell's
//! options in a full propagation pass; the run terminates after exactly
//! `dimensions`² steps. Presentation concerns reach the loop only through
//! the narrow [`StepHooks`] seam.

use crate::algorithm::collapse::{CollapseOutcome, collapse_cell};
use crate::algorithm::propagation::propagate_all;
use crate::algorithm::selection::select_cell;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::{Grid, TileCatalog};
use rand::{SeedableRng, rngs::StdRng};

/// Run configuration, validated once at solver construction
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Grid side length in cells
    pub dimensions: usize,
    /// Catalog index substituted when a contradiction empties a cell
    pub backup_tile: usize,
    /// Seed for reproducible stochastic choices
    pub seed: u64,
}

/// Presentation-layer callbacks for the collapse loop
///
/// All methods default to no-ops; the core never depends on an
/// implementation existing. `yield_step` is an opaque suspension point
/// between a collapse and the following propagation pass — a host loop may
/// animate or interleave work there, but nothing about algorithm state may
/// change.
pub trait StepHooks {
    /// A cell placeholder exists at the given `(x, 0, y)` world position
    ///
    /// Called once per grid cell when a run starts.
    fn place_marker(&mut self, _position: [i32; 3]) {}

    /// A cell collapsed to `tile` at the given world position
    ///
    /// Fire-and-forget; called exactly once per cell over a full run.
    fn realize_tile(&mut self, _tile: usize, _position: [i32; 3], _iteration: usize) {}

    /// Control yield between a collapse and the next propagation pass
    fn yield_step(&mut self, _iteration: usize) {}
}

/// Hook implementation that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl StepHooks for NoHooks {}

/// Drives the iterative collapse over an exclusively-owned grid
pub struct Solver {
    catalog: TileCatalog,
    grid: Grid,
    rng: StdRng,
    iteration: usize,
    backup_tile: usize,
    fallback_count: usize,
}

impl Solver {
    /// Create a solver with a freshly initialized grid
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero or beyond the safety
    /// bound, the catalog is empty, or the backup tile index is out of
    /// range. Misconfiguration fails here, never mid-run.
    pub fn new(catalog: TileCatalog, config: &SolverConfig) -> Result<Self> {
        if config.dimensions == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &config.dimensions,
                &"grid side length must be positive",
            ));
        }

        if config.dimensions > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "dimensions",
                &config.dimensions,
                &format!("grid side length is limited to {MAX_GRID_DIMENSION}"),
            ));
        }

        if catalog.is_empty() {
            return Err(GenerationError::InvalidTileset {
                reason: "tile catalog contains no tiles".to_string(),
            });
        }

        if config.backup_tile >= catalog.len() {
            return Err(GenerationError::InvalidTileIndex {
                index: config.backup_tile,
                max_tiles: catalog.len(),
            });
        }

        let grid = Grid::new(config.dimensions, &catalog);

        Ok(Self {
            catalog,
            grid,
            rng: StdRng::seed_from_u64(config.seed),
            iteration: 0,
            backup_tile: config.backup_tile,
            fallback_count: 0,
        })
    }

    /// The grid in its current state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The catalog this solver collapses against
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Completed select/collapse/propagate cycles
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// How many cells were committed to the backup tile
    pub const fn fallback_count(&self) -> usize {
        self.fallback_count
    }

    /// Whether the run has performed one collapse per cell
    pub const fn is_done(&self) -> bool {
        self.iteration == self.grid.cell_count()
    }

    /// Announce every cell position to the presentation layer
    ///
    /// Intended to be called once before stepping; `run` does this itself.
    pub fn place_markers(&self, hooks: &mut impl StepHooks) {
        for index in 0..self.grid.cell_count() {
            hooks.place_marker(self.grid.world_position(index));
        }
    }

    /// Execute one select/collapse/propagate cycle
    ///
    /// Returns `Ok(true)` while uncollapsed cells remain and `Ok(false)`
    /// once the run is complete (including the call that completes it).
    ///
    /// # Errors
    ///
    /// Returns an internal-invariant error if no uncollapsed cell exists
    /// before the iteration count reaches `dimensions`². The termination
    /// check makes this unreachable in a well-formed run.
    pub fn step(&mut self, hooks: &mut impl StepHooks) -> Result<bool> {
        if self.is_done() {
            return Ok(false);
        }

        let Some(index) = select_cell(&self.grid, &mut self.rng) else {
            return Err(GenerationError::InternalInvariant {
                detail: format!(
                    "no uncollapsed cells at iteration {} of {}",
                    self.iteration,
                    self.grid.cell_count()
                ),
            });
        };

        let catalog_len = self.catalog.len();
        let outcome = match self.grid.cell_mut(index) {
            Some(cell) => collapse_cell(cell, self.backup_tile, catalog_len, &mut self.rng),
            None => {
                return Err(GenerationError::InternalInvariant {
                    detail: format!("selected cell index {index} is out of bounds"),
                });
            }
        };

        self.record_outcome(outcome);
        hooks.realize_tile(outcome.tile, self.grid.world_position(index), self.iteration);
        hooks.yield_step(self.iteration);

        propagate_all(&mut self.grid, &self.catalog);
        self.iteration += 1;

        Ok(!self.is_done())
    }

    /// Drive the loop to completion
    ///
    /// Places the cell markers, then steps until every cell is collapsed.
    ///
    /// # Errors
    ///
    /// Propagates any internal-invariant error from `step`.
    pub fn run(&mut self, hooks: &mut impl StepHooks) -> Result<()> {
        if self.iteration == 0 {
            self.place_markers(hooks);
        }

        while self.step(hooks)? {}
        Ok(())
    }

    const fn record_outcome(&mut self, outcome: CollapseOutcome) {
        if outcome.fallback_used {
            self.fallback_count += 1;
        }
    }
}
