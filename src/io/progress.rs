//! Progress reporting for a single solve

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the `dimensions`² collapse steps of one run
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a bar sized for the run's total collapse count
    pub fn new(total_steps: usize) -> Self {
        let bar = ProgressBar::new(total_steps as u64);
        bar.set_style(BAR_STYLE.clone());
        Self { bar }
    }

    /// Report the number of completed collapse steps
    pub fn update(&self, completed: usize) {
        self.bar.set_position(completed as u64);
    }

    /// Complete and release the bar
    pub fn finish(&self) {
        self.bar.finish();
    }
}
