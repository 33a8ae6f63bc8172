//! CLI entry point for wave function collapse grid generation

use clap::Parser;
use wavegrid::io::cli::{Cli, GenerationRun};

fn main() -> wavegrid::Result<()> {
    let cli = Cli::parse();
    let run = GenerationRun::new(cli);
    run.process()
}
