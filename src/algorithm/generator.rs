//! Randomized placement loop with terminal outcome reporting
//!
//! Deliberately a blind rejection-sampling filler rather than a
//! backtracking solver: each attempt proposes a tile and a cell, validates
//! the pair against the current grid, commits on success and discards on
//! failure. The loop halts when the grid is full or the attempt cap is
//! reached, and always reports which of the two it was. For a 16-tile
//! binary-color set valid configurations are dense enough that random
//! retry converges quickly; sparser tilesets can legitimately end
//! exhausted with a partial grid.

use crate::algorithm::strategy::{PointPlacement, TileSelection};
use crate::algorithm::validator::{self, Candidate, PlacementRejection};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Grid, Size};
use crate::tiles::Tileset;

/// Terminal state of a generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell was filled before the attempt cap
    Complete,
    /// The attempt cap was reached with the grid incomplete
    Exhausted,
}

/// What a single placement attempt did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// The proposal passed validation and was committed
    Placed(Candidate),
    /// The proposal was discarded; the loop simply moves on
    Rejected(PlacementRejection),
}

/// A finished run: the grid plus how and how hard it ended
#[derive(Clone, Debug)]
pub struct GenerationRun {
    /// Final grid, complete or partial
    pub grid: Grid,
    /// Whether the run filled the grid or hit the cap
    pub outcome: Outcome,
    /// Proposals drawn in total
    pub attempts: usize,
    /// Proposals committed
    pub placements: usize,
    /// Proposals discarded
    pub rejections: usize,
}

/// Rejection-sampling grid filler
///
/// Owns the grid for the duration of the run and hands it back, together
/// with the terminal outcome, when the loop halts.
pub struct Generator<'a, S, P> {
    tileset: &'a Tileset,
    grid: Grid,
    selection: S,
    placement: P,
    attempt_cap: usize,
    attempts: usize,
    rejections: usize,
}

impl<'a, S: TileSelection, P: PointPlacement> Generator<'a, S, P> {
    /// Create a generator over an empty grid
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::InvalidParameter`] when either
    /// grid dimension is zero or the tileset is empty; a malformed call
    /// fails here rather than producing a silently wrong grid.
    pub fn new(
        tileset: &'a Tileset,
        size: Size,
        selection: S,
        placement: P,
        attempt_cap: usize,
    ) -> Result<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(invalid_parameter(
                "size",
                &format!("{}x{}", size.width, size.height),
                &"width and height must both be positive",
            ));
        }

        if tileset.is_empty() {
            return Err(invalid_parameter(
                "tileset",
                &"empty",
                &"generation needs at least one tile to propose",
            ));
        }

        Ok(Self {
            tileset,
            grid: Grid::empty(size),
            selection,
            placement,
            attempt_cap,
            attempts: 0,
            rejections: 0,
        })
    }

    /// Perform one placement attempt
    ///
    /// Returns `None` once the loop has halted, either because the grid is
    /// full or because the attempt cap has been consumed.
    pub fn step(&mut self) -> Option<Attempt> {
        if self.grid.is_full() || self.attempts >= self.attempt_cap {
            return None;
        }

        self.attempts += 1;

        let index = self.selection.next_tile(self.tileset.len());
        let point = self.placement.next_point(self.grid.size());
        let candidate = Candidate::new(index, point);

        match validator::try_place(candidate, &mut self.grid, self.tileset) {
            Ok(placed) => Some(Attempt::Placed(placed)),
            Err(rejection) => {
                self.rejections += 1;
                Some(Attempt::Rejected(rejection))
            }
        }
    }

    /// Run every remaining attempt and hand back the result
    pub fn run(mut self) -> GenerationRun {
        while self.step().is_some() {}
        self.finish()
    }

    /// Stop here and report the current terminal state
    ///
    /// Used by callers that drive [`Generator::step`] themselves, for
    /// example to interleave progress reporting.
    pub fn finish(self) -> GenerationRun {
        let outcome = if self.grid.is_full() {
            Outcome::Complete
        } else {
            Outcome::Exhausted
        };

        GenerationRun {
            placements: self.grid.filled_count(),
            outcome,
            attempts: self.attempts,
            rejections: self.rejections,
            grid: self.grid,
        }
    }

    /// The grid as filled so far
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Proposals drawn so far
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// The configured attempt budget
    pub const fn attempt_cap(&self) -> usize {
        self.attempt_cap
    }
}

/// Build a generator and run it to its terminal state
///
/// # Errors
///
/// Returns [`crate::GenerationError::InvalidParameter`] for a zero-area
/// grid or an empty tileset; exhaustion is reported through
/// [`GenerationRun::outcome`], never as an error.
pub fn generate<S: TileSelection, P: PointPlacement>(
    tileset: &Tileset,
    size: Size,
    selection: S,
    placement: P,
    attempt_cap: usize,
) -> Result<GenerationRun> {
    Ok(Generator::new(tileset, size, selection, placement, attempt_cap)?.run())
}
