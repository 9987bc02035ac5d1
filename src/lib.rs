//! Wang tile grid generation by bounded rejection sampling
//!
//! Builds the complete catalogue of edge-color combinations for a color
//! count, then fills a bounded grid by blind trial and retry: propose a
//! tile and a cell, commit when every shared boundary matches a filled
//! neighbour, discard otherwise. The loop is capped, so a run always ends
//! in a reported terminal state, complete or exhausted.

#![forbid(unsafe_code)]

/// Placement core: adjacency validation, strategies, and the retry loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Spatial grid management
pub mod spatial;
/// Tile encoding and the tileset catalogue
pub mod tiles;

pub use io::error::{GenerationError, Result};
