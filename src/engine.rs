//! The puzzle engine: owns the grid and its free-space index for one build.
//!
//! A build runs the phases in a fixed order:
//!
//! 1. capitalize the words and keep that list as the public word list
//! 2. scramble a working copy (random reversals, descending sort)
//! 3. place each word with the randomized vacancy search
//! 4. fill the remaining cells with noise letters
//!
//! The grid and index are sized and created up front and only ever mutated
//! by the build. All randomness comes from the generator passed to `build`.

use std::fmt;

use rand::Rng;

use crate::error::{BuildError, Result};
use crate::freespace::FreeSpaceIndex;
use crate::grid::{dimension_for, Grid, Sizing};
use crate::placement::{place_all, Placement};
use crate::scramble::{capitalize, scramble};

/// Outcome of a build: how many words made it into the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildReport {
    pub placed: usize,
    pub total: usize,
}

impl BuildReport {
    /// Words that found no slot.
    pub fn not_placed(&self) -> usize {
        self.total - self.placed
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inserted: {}", self.placed)?;
        write!(f, "Remaining: {}", self.not_placed())
    }
}

/// Builds one word-search puzzle. Use a fresh engine per puzzle.
#[derive(Clone, Debug)]
pub struct Engine {
    words: Vec<String>,
    capitalized: Vec<String>,
    grid: Grid,
    index: FreeSpaceIndex,
    placements: Vec<Placement>,
    built: bool,
}

impl Engine {
    /// Creates an engine with a grid sized from `words`.
    pub fn new(words: Vec<String>, sizing: Sizing) -> Self {
        let dim = dimension_for(&words, sizing);
        Self::with_dimension(words, dim)
    }

    /// Creates an engine with an explicit grid dimension.
    ///
    /// Words longer than the grid allows are reported as not placed.
    pub fn with_dimension(words: Vec<String>, dim: usize) -> Self {
        let grid = Grid::new(dim);
        let index = FreeSpaceIndex::new(&grid);
        log::debug!("sized {}x{} grid for {} words", dim, dim, words.len());

        Self {
            words,
            capitalized: Vec::new(),
            grid,
            index,
            placements: Vec::new(),
            built: false,
        }
    }

    /// Places as many words as possible and fills the rest with noise.
    ///
    /// Returns `BuildError::AlreadyBuilt` on a second call.
    pub fn build<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<BuildReport> {
        if self.built {
            return Err(BuildError::AlreadyBuilt);
        }
        self.built = true;

        capitalize(&mut self.words);
        self.capitalized = self.words.clone();
        scramble(&mut self.words, rng);

        self.placements = place_all(&self.words, &mut self.grid, &mut self.index, rng);
        self.grid.fill_noise(rng);

        let report = BuildReport {
            placed: self.placements.len(),
            total: self.words.len(),
        };
        log::info!(
            "placed {} of {} words in a {}x{} grid",
            report.placed,
            report.total,
            self.dimension(),
            self.dimension()
        );

        Ok(report)
    }

    pub fn dimension(&self) -> usize {
        self.grid.dim()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The capitalized words in their original order. Empty before `build`.
    pub fn words(&self) -> &[String] {
        &self.capitalized
    }

    /// Successful placements in insertion order. Reversed words appear as
    /// written in the grid.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}
