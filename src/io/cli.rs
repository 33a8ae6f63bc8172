//! Command-line interface for tile grid generation

use crate::algorithm::solver::{NoHooks, Solver, SolverConfig};
use crate::io::configuration::{
    DEFAULT_CELL_PIXELS, DEFAULT_DIMENSIONS, DEFAULT_OUTPUT, DEFAULT_SEED, GIF_FRAME_DELAY_MS,
    VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::SolveProgress;
use crate::io::tileset::load_tileset;
use crate::io::visualization::SolveRecorder;
use crate::spatial::TileCatalog;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wavegrid")]
#[command(
    author,
    version,
    about = "Generate tile grids with wave function collapse"
)]
/// Command-line arguments for the grid generation tool
pub struct Cli {
    /// Grid side length in cells
    #[arg(short, long, default_value_t = DEFAULT_DIMENSIONS)]
    pub dimensions: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// JSON tileset file (built-in pipe maze set when omitted)
    #[arg(short, long)]
    pub tileset: Option<PathBuf>,

    /// Backup tile name substituted when a contradiction empties a cell
    /// (defaults to the catalog's first tile)
    #[arg(short, long)]
    pub backup: Option<String>,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Edge length in pixels of each rendered cell
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Record the collapse order as an animated GIF next to the output
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a single generation from CLI arguments
pub struct GenerationRun {
    cli: Cli,
}

impl GenerationRun {
    /// Create a run from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the catalog, drive the solve, and export the results
    ///
    /// # Errors
    ///
    /// Returns an error if the tileset fails to load or validate, the run
    /// configuration is invalid, or an export fails.
    pub fn process(&self) -> Result<()> {
        let catalog = match &self.cli.tileset {
            Some(path) => load_tileset(path)?,
            None => TileCatalog::pipe_maze(),
        };

        let backup_tile = match &self.cli.backup {
            Some(name) => catalog.index_of(name).ok_or_else(|| {
                invalid_parameter("backup", name, &"no tile with this name in the catalog")
            })?,
            None => 0,
        };

        let config = SolverConfig {
            dimensions: self.cli.dimensions,
            backup_tile,
            seed: self.cli.seed,
        };

        let mut solver = Solver::new(catalog, &config)?;

        let mut recorder = self.cli.visualize.then(|| {
            SolveRecorder::new(self.cli.dimensions, self.cli.cell_pixels, solver.catalog())
        });

        let progress = self
            .cli
            .should_show_progress()
            .then(|| SolveProgress::new(solver.grid().cell_count()));

        if let Some(rec) = recorder.as_mut() {
            solver.place_markers(rec);
        }

        loop {
            let more = match recorder.as_mut() {
                Some(rec) => solver.step(rec)?,
                None => solver.step(&mut NoHooks)?,
            };

            if let Some(bar) = &progress {
                bar.update(solver.iteration());
            }

            if !more {
                break;
            }
        }

        if let Some(bar) = &progress {
            bar.finish();
        }

        let output = self
            .cli
            .output
            .to_str()
            .ok_or_else(|| invalid_parameter("output", &"<non-utf8>", &"invalid output path"))?;
        export_grid_as_png(solver.grid(), solver.catalog(), self.cli.cell_pixels, output)?;

        if let Some(rec) = &recorder {
            let viz_path = visualization_path(&self.cli.output);
            let viz = viz_path.to_str().ok_or_else(|| {
                invalid_parameter("output", &"<non-utf8>", &"invalid visualization path")
            })?;
            rec.export_gif(viz, GIF_FRAME_DELAY_MS)?;
        }

        Ok(())
    }
}

fn visualization_path(output: &Path) -> PathBuf {
    let stem = output.file_stem().unwrap_or_default();
    let viz_name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

    if let Some(parent) = output.parent() {
        parent.join(viz_name)
    } else {
        PathBuf::from(viz_name)
    }
}
