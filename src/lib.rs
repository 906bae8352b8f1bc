//! Word Search Puzzle Library
//!
//! Builds square word-search grids: sizes the grid from the word list, places
//! words in random compass directions using a per-cell free-space index, and
//! fills the leftover cells with noise letters.

pub mod engine;
pub mod error;
pub mod freespace;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod placement;
pub mod scramble;
pub mod words;

pub use engine::{BuildReport, Engine};
pub use error::{BuildError, ConfigError};
pub use grid::{format_grid, Grid, Sizing};
