//! Randomized vacancy search and word insertion.
//!
//! Each word gets a bounded number of probes. A probe picks a random cell,
//! then tries up to 8 randomly drawn directions against the free-space index.
//! The first direction with enough room wins. Words that find no slot are
//! skipped, never retried.

use rand::Rng;

use crate::freespace::{CellMeta, FreeSpaceIndex};
use crate::geometry::{ray, Coord, Direction, NUM_DIRECTIONS};
use crate::grid::Grid;

/// Random cells tried per word before giving up on it.
pub const MAX_PROBES: usize = 100;

/// Direction bitmask with every direction marked as exhausted.
const ALL_EXHAUSTED: u8 = u8::MAX;

/// A word written into the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The letters as written, reading from `start` along `direction`.
    pub word: String,
    pub start: Coord,
    pub direction: Direction,
}

impl Placement {
    /// Coordinates covered by the word, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        ray(self.start, self.direction, self.word.chars().count())
    }
}

/// Tries a sequence of candidate directions against one cell.
///
/// Returns the first direction with at least `size` free cells. A direction
/// with no room at all sets its bit in a local mask; once all 8 bits are set
/// the cell is marked saturated and the remaining candidates are ignored.
pub fn probe_cell(
    meta: &mut CellMeta,
    size: usize,
    candidates: impl IntoIterator<Item = Direction>,
) -> Option<Direction> {
    let mut exhausted = 0u8;

    for direction in candidates {
        let space = meta.space(direction);
        if space == 0 {
            exhausted |= 1 << direction.index();
            if exhausted == ALL_EXHAUSTED {
                meta.saturated = true;
                return None;
            }
        }
        if space >= size {
            return Some(direction);
        }
    }

    None
}

/// Searches for a cell and direction with room for `size` letters.
///
/// Directions are drawn independently per probe, so one probe may try the
/// same direction more than once. Cells holding a letter cannot start a word
/// and are marked saturated on sight.
pub fn vacant<R: Rng + ?Sized>(
    grid: &Grid,
    index: &mut FreeSpaceIndex,
    size: usize,
    rng: &mut R,
) -> Option<(Coord, Direction)> {
    let dim = index.dim();
    if dim == 0 {
        return None;
    }

    for _ in 0..MAX_PROBES {
        let row = rng.gen_range(0..dim);
        let col = rng.gen_range(0..dim);
        let pos = Coord::new(row as i32, col as i32);

        let meta = index.cell_mut(pos);
        if meta.saturated {
            continue;
        }
        if !grid.is_vacant(pos) {
            meta.saturated = true;
            continue;
        }

        let draws =
            (0..NUM_DIRECTIONS).map(|_| Direction::ALL[rng.gen_range(0..NUM_DIRECTIONS)]);
        if let Some(direction) = probe_cell(meta, size, draws) {
            return Some((pos, direction));
        }
    }

    None
}

/// Writes `word` one letter per cell from `start` along `direction`.
///
/// The caller must have checked the free space; bounds are not re-verified
/// beyond the grid's own assertion.
pub fn insert(grid: &mut Grid, start: Coord, direction: Direction, word: &str) {
    for (pos, letter) in ray(start, direction, word.chars().count()).zip(word.chars()) {
        grid.set(pos, letter);
    }
}

/// Attempts every word in order, recomputing the index after each insertion.
///
/// Returns the placements that succeeded, in insertion order.
pub fn place_all<R: Rng + ?Sized>(
    words: &[String],
    grid: &mut Grid,
    index: &mut FreeSpaceIndex,
    rng: &mut R,
) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(words.len());

    for word in words {
        let size = word.chars().count();
        match vacant(grid, index, size, rng) {
            Some((start, direction)) => {
                insert(grid, start, direction, word);
                index.recompute(grid);
                log::debug!(
                    "placed {} at ({}, {}) heading {}",
                    word,
                    start.row,
                    start.col,
                    direction
                );
                placements.push(Placement {
                    word: word.clone(),
                    start,
                    direction,
                });
            }
            None => {
                log::debug!("no slot for {} after {} probes", word, MAX_PROBES);
            }
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn corner_meta() -> CellMeta {
        let index = FreeSpaceIndex::new(&Grid::new(5));
        *index.cell(Coord::new(0, 0))
    }

    #[test]
    fn test_probe_accepts_first_direction_with_room() {
        let mut meta = corner_meta();
        let candidates = [Direction::North, Direction::East, Direction::South];
        assert_eq!(probe_cell(&mut meta, 3, candidates), Some(Direction::East));
        assert!(!meta.saturated);
    }

    #[test]
    fn test_probe_rejects_short_directions() {
        let mut meta = corner_meta();
        assert_eq!(probe_cell(&mut meta, 5, Direction::ALL), None);
        assert!(!meta.saturated);
    }

    #[test]
    fn test_probe_saturates_when_every_direction_is_blocked() {
        let index = FreeSpaceIndex::new(&Grid::new(1));
        let mut meta = *index.cell(Coord::new(0, 0));

        assert_eq!(probe_cell(&mut meta, 1, Direction::ALL), None);
        assert!(meta.saturated);
    }

    #[test]
    fn test_repeated_blocked_direction_does_not_saturate() {
        let mut meta = corner_meta();
        assert_eq!(probe_cell(&mut meta, 2, [Direction::North; 8]), None);
        assert!(!meta.saturated);
    }

    #[test]
    fn test_vacant_slot_has_room() {
        let grid = Grid::new(6);
        let mut index = FreeSpaceIndex::new(&grid);
        let mut rng = StdRng::seed_from_u64(11);

        let (start, direction) = vacant(&grid, &mut index, 4, &mut rng).expect("slot");
        assert!(index.cell(start).space(direction) >= 4);
        assert!(ray(start, direction, 4).all(|pos| grid.is_vacant(pos)));
    }

    #[test]
    fn test_vacant_fails_for_oversized_word() {
        let grid = Grid::new(4);
        let mut index = FreeSpaceIndex::new(&grid);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(vacant(&grid, &mut index, 8, &mut rng), None);
    }

    #[test]
    fn test_vacant_with_constant_draws_only_tries_north_from_origin() {
        // all-zero randomness: cell (0, 0), direction North, every probe
        let grid = Grid::new(5);
        let mut index = FreeSpaceIndex::new(&grid);
        assert_eq!(vacant(&grid, &mut index, 2, &mut StepRng::new(0, 0)), None);
        assert!(!index.cell(Coord::new(0, 0)).saturated);
    }

    #[test]
    fn test_vacant_skips_occupied_cells() {
        let mut grid = Grid::new(5);
        grid.set(Coord::new(0, 0), 'A');
        let mut index = FreeSpaceIndex::new(&grid);

        assert_eq!(vacant(&grid, &mut index, 1, &mut StepRng::new(0, 0)), None);
        assert!(index.cell(Coord::new(0, 0)).saturated);
    }

    #[test]
    fn test_zero_grid_has_no_vacancy() {
        let grid = Grid::new(0);
        let mut index = FreeSpaceIndex::new(&grid);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(vacant(&grid, &mut index, 1, &mut rng), None);
    }

    #[test]
    fn test_insert_writes_along_direction() {
        let mut grid = Grid::new(5);
        insert(&mut grid, Coord::new(4, 0), Direction::NorthEast, "WORD");

        assert_eq!(grid.get(Coord::new(4, 0)), Some('W'));
        assert_eq!(grid.get(Coord::new(3, 1)), Some('O'));
        assert_eq!(grid.get(Coord::new(2, 2)), Some('R'));
        assert_eq!(grid.get(Coord::new(1, 3)), Some('D'));
        assert_eq!(grid.vacant_count(), 21);
    }

    #[test]
    fn test_place_all_keeps_placements_intact() {
        let words: Vec<String> = ["PUZZLE", "GRID", "WORD", "SEARCH", "LETTER", "RAY"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let mut grid = Grid::new(10);
        let mut index = FreeSpaceIndex::new(&grid);
        let mut rng = StdRng::seed_from_u64(2024);

        let placements = place_all(&words, &mut grid, &mut index, &mut rng);

        assert!(!placements.is_empty());
        let mut covered = Vec::new();
        for placement in &placements {
            let read: String = placement.cells().filter_map(|pos| grid.get(pos)).collect();
            assert_eq!(read, placement.word);
            covered.extend(placement.cells());
        }
        covered.sort();
        let before = covered.len();
        covered.dedup();
        assert_eq!(covered.len(), before, "placements overlap");
        assert_eq!(grid.vacant_count(), 100 - covered.len());
    }
}
