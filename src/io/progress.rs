//! Progress display for the attempt loop

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_UPDATE_INTERVAL;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} attempts")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks the attempt loop against its cap and the grid's fill level
pub struct GenerationProgress {
    bar: ProgressBar,
    capacity: usize,
}

impl GenerationProgress {
    /// Create a progress display for a run with the given attempt cap
    pub fn new(attempt_cap: usize, capacity: usize) -> Self {
        let bar = ProgressBar::new(attempt_cap as u64);
        bar.set_style(ATTEMPT_STYLE.clone());
        bar.set_message(format!("0/{capacity} cells"));

        Self { bar, capacity }
    }

    /// Report the current attempt count and filled-cell count
    pub fn update(&self, attempts: usize, filled: usize) {
        // Redrawing every attempt would dominate the loop
        if attempts % PROGRESS_UPDATE_INTERVAL != 0 {
            return;
        }

        self.bar.set_position(attempts as u64);
        self.bar
            .set_message(format!("{filled}/{} cells", self.capacity));
    }

    /// Finalize the display with the run's closing statistics
    pub fn finish(&self, attempts: usize, filled: usize) {
        self.bar.set_position(attempts as u64);
        self.bar
            .finish_with_message(format!("{filled}/{} cells", self.capacity));
    }
}
