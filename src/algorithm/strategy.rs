//! Pluggable tile-selection and point-placement strategies
//!
//! The generator draws proposals from two policies: one choosing which
//! tile to try, one choosing where to try it. The shipped implementations
//! sample uniformly from a seedable generator; a seed of `Some(0)` is a
//! real seed, and `None` falls back to operating-system entropy, so seeded
//! runs are reproducible draw for draw.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::spatial::{Point, Size};
use crate::tiles::TileIndex;

/// Policy deciding which tile index to propose next
pub trait TileSelection {
    /// Draw the next tile index in `[0, tileset_len)`
    fn next_tile(&mut self, tileset_len: usize) -> TileIndex;
}

/// Policy deciding which cell to propose next
pub trait PointPlacement {
    /// Draw the next point within the grid bounds
    fn next_point(&mut self, size: Size) -> Point;
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Uniform random tile selection
pub struct RandomSelection {
    rng: StdRng,
}

impl RandomSelection {
    /// Create a selector, deterministic when a seed is given
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: rng_from_seed(seed),
        }
    }
}

impl TileSelection for RandomSelection {
    fn next_tile(&mut self, tileset_len: usize) -> TileIndex {
        if tileset_len == 0 {
            return 0;
        }
        self.rng.random_range(0..tileset_len)
    }
}

/// Uniform random point placement
pub struct RandomPlacement {
    rng: StdRng,
}

impl RandomPlacement {
    /// Create a placer, deterministic when a seed is given
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: rng_from_seed(seed),
        }
    }
}

impl PointPlacement for RandomPlacement {
    fn next_point(&mut self, size: Size) -> Point {
        let x = self.rng.random_range(0..size.width.max(1));
        let y = self.rng.random_range(0..size.height.max(1));
        Point::new(x as i32, y as i32)
    }
}
