//! Command-line interface and generation session driver

use crate::algorithm::generator::{Generator, Outcome};
use crate::algorithm::strategy::{RandomPlacement, RandomSelection};
use crate::io::configuration::{
    DEFAULT_ATTEMPT_CAP, DEFAULT_COLOR_COUNT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_OUTPUT, DEFAULT_TILE_PIXELS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::GenerationProgress;
use crate::spatial::Size;
use crate::tiles::Tileset;
use clap::Parser;

#[derive(Parser)]
#[command(name = "wangtiles")]
#[command(
    author,
    version,
    about = "Generate a Wang tile grid by bounded rejection sampling"
)]
/// Command-line arguments for the grid generation tool
pub struct Cli {
    /// Output PNG path for the rendered grid
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: std::path::PathBuf,

    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation (0 is a valid seed)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum placement attempts before stopping
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPT_CAP)]
    pub attempts: usize,

    /// Number of edge colors (the encoding currently supports 2)
    #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Side length of one rendered tile in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_PIXELS)]
    pub tile_pixels: usize,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives one generate-then-export run from CLI arguments
pub struct Session {
    cli: Cli,
}

impl Session {
    /// Create a session with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the tileset, fill the grid, and export the result
    ///
    /// # Errors
    ///
    /// Returns an error if the color count is unsupported, the grid
    /// parameters are malformed, or the PNG export fails. An exhausted run
    /// is not an error; the partial grid is exported and the summary says
    /// which terminal state was reached.
    // Allow print for user feedback on run completion
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        let tileset = Tileset::build(self.cli.colors)?;
        let size = Size::new(self.cli.width, self.cli.height);

        let selection = RandomSelection::new(self.cli.seed);
        let placement = RandomPlacement::new(self.cli.seed);

        let mut generator =
            Generator::new(&tileset, size, selection, placement, self.cli.attempts)?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| GenerationProgress::new(self.cli.attempts, size.capacity()));

        while generator.step().is_some() {
            if let Some(ref bar) = progress {
                bar.update(generator.attempts(), generator.grid().filled_count());
            }
        }

        let run = generator.finish();

        if let Some(ref bar) = progress {
            bar.finish(run.attempts, run.placements);
        }

        if !self.cli.quiet {
            match run.outcome {
                Outcome::Complete => eprintln!(
                    "Filled {} cells in {} attempts ({} rejected)",
                    run.placements, run.attempts, run.rejections
                ),
                Outcome::Exhausted => eprintln!(
                    "Attempt cap {} reached with {}/{} cells filled",
                    run.attempts,
                    run.placements,
                    run.grid.capacity()
                ),
            }
        }

        let output = self.cli.output.to_str().ok_or_else(|| {
            invalid_parameter(
                "output",
                &self.cli.output.display(),
                &"path is not valid UTF-8",
            )
        })?;

        export_grid_as_png(&run.grid, &tileset, self.cli.tile_pixels, output)
    }
}
