//! Per-cell free-space bookkeeping.
//!
//! For every cell and every compass direction the index stores how many
//! consecutive empty cells lie beyond it before the ray hits a letter or the
//! grid edge. The index is a cache derived from the grid: it is rebuilt from
//! scratch after every mutation rather than patched.

use crate::geometry::{Coord, Direction, NUM_DIRECTIONS};
use crate::grid::{coord_to_idx, idx_to_coord, Grid};

/// Cached free-space data for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMeta {
    /// The cell this record describes.
    pub pos: Coord,
    /// Free cells beyond `pos`, indexed by `Direction::index`.
    pub freespace: [usize; NUM_DIRECTIONS],
    /// Set by the vacancy probe once it has seen no room in any direction.
    /// Only a pruning hint; cleared on every recompute.
    pub saturated: bool,
}

impl CellMeta {
    fn new(pos: Coord) -> Self {
        Self {
            pos,
            freespace: [0; NUM_DIRECTIONS],
            saturated: false,
        }
    }

    #[inline(always)]
    pub fn space(&self, direction: Direction) -> usize {
        self.freespace[direction.index()]
    }
}

/// Counts the empty cells beyond `pos` in `direction`.
///
/// Walks one step at a time and stops at the first cell that is off the grid
/// or holds a letter.
pub fn free_run(grid: &Grid, pos: Coord, direction: Direction) -> usize {
    let mut count = 0;
    let mut next = pos.step(direction);
    while grid.is_vacant(next) {
        count += 1;
        next = next.step(direction);
    }
    count
}

/// Free-space cache for every cell of a grid.
#[derive(Clone, Debug)]
pub struct FreeSpaceIndex {
    dim: usize,
    cells: Vec<CellMeta>,
}

impl FreeSpaceIndex {
    /// Builds the index for `grid`, with every count computed.
    pub fn new(grid: &Grid) -> Self {
        let dim = grid.dim();
        let cells = (0..dim * dim)
            .map(|cell_index| CellMeta::new(idx_to_coord(dim, cell_index)))
            .collect();

        let mut index = Self { dim, cells };
        index.recompute(grid);
        index
    }

    /// Rescans every ray of every cell and clears all saturation flags.
    ///
    /// # Panics
    ///
    /// Panics if `grid` has a different dimension than the index.
    pub fn recompute(&mut self, grid: &Grid) {
        assert_eq!(grid.dim(), self.dim, "grid and index dimensions differ");

        for meta in &mut self.cells {
            for direction in Direction::ALL {
                meta.freespace[direction.index()] = free_run(grid, meta.pos, direction);
            }
            meta.saturated = false;
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the record for `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the grid.
    #[inline]
    pub fn cell(&self, pos: Coord) -> &CellMeta {
        &self.cells[coord_to_idx(self.dim, pos)]
    }

    #[inline]
    pub fn cell_mut(&mut self, pos: Coord) -> &mut CellMeta {
        &mut self.cells[coord_to_idx(self.dim, pos)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellMeta> {
        self.cells.iter()
    }
}
