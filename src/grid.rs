//! Square letter grid for word-search puzzles.
//!
//! The grid is represented as a flat row-major vector where each cell holds a
//! letter, or `EMPTY` for a cell nothing has been written to yet.

use rand::Rng;

use crate::geometry::Coord;

/// Sentinel for a cell that holds no letter.
pub const EMPTY: char = '\0';

/// Multiplier applied to the word-length statistic before taking its square root.
const AREA_FACTOR: f64 = 2.5;

/// Extra cells added to the longest word so it has room to terminate.
const LENGTH_MARGIN: usize = 2;

/// How the grid dimension scales with the word list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Sizing {
    /// `sqrt(2.5 x mean word length)`, floored at the longest word plus margin.
    #[default]
    Mean,
    /// `sqrt(2.5 x total letters)`, so the grid grows with the number of words.
    Total,
}

/// Computes the square dimension for a word list.
///
/// Lengths are measured after uppercasing, which is how the words are
/// placed. The result is at least the longest word plus a margin of 2. An
/// empty word list yields 0.
pub fn dimension_for<S: AsRef<str>>(words: &[S], sizing: Sizing) -> usize {
    if words.is_empty() {
        return 0;
    }

    let lengths = words
        .iter()
        .map(|w| w.as_ref().chars().flat_map(char::to_uppercase).count());
    let (longest, total) = lengths.fold((0, 0), |(longest, total), len| {
        (usize::max(longest, len), total + len)
    });

    let statistic = match sizing {
        Sizing::Mean => total as f64 / words.len() as f64,
        Sizing::Total => total as f64,
    };
    let area_dim = (AREA_FACTOR * statistic).sqrt().floor() as usize;

    usize::max(longest + LENGTH_MARGIN, area_dim)
}

/// Converts a coordinate to a linear cell index. Assumes it is in bounds.
#[inline(always)]
pub const fn coord_to_idx(dim: usize, pos: Coord) -> usize {
    (pos.row as usize) * dim + (pos.col as usize)
}

/// Converts a linear cell index to a coordinate.
#[inline(always)]
pub const fn idx_to_coord(dim: usize, cell_index: usize) -> Coord {
    Coord::new((cell_index / dim) as i32, (cell_index % dim) as i32)
}

/// An N x N letter grid. The dimension never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dim: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Creates an empty `dim x dim` grid.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![EMPTY; dim * dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the letter at `pos`, or `None` if `pos` is off the grid.
    #[inline]
    pub fn get(&self, pos: Coord) -> Option<char> {
        pos.in_bounds(self.dim)
            .then(|| self.cells[coord_to_idx(self.dim, pos)])
    }

    /// Returns true if `pos` is on the grid and holds no letter.
    #[inline]
    pub fn is_vacant(&self, pos: Coord) -> bool {
        self.get(pos) == Some(EMPTY)
    }

    /// Writes a letter at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the grid.
    #[inline]
    pub fn set(&mut self, pos: Coord, letter: char) {
        assert!(
            pos.in_bounds(self.dim),
            "({}, {}) is outside a {}x{} grid",
            pos.row,
            pos.col,
            self.dim,
            self.dim
        );
        let idx = coord_to_idx(self.dim, pos);
        self.cells[idx] = letter;
    }

    /// Number of cells that still hold no letter.
    pub fn vacant_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == EMPTY).count()
    }

    /// Writes a uniformly random letter `A..=Z` into every empty cell.
    ///
    /// Cells that already hold a letter are left untouched.
    pub fn fill_noise<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|c| **c == EMPTY) {
            *cell = char::from(b'A' + rng.gen_range(0..26u8));
        }
    }

    /// Copies the grid out as a 2D array of rows.
    pub fn rows(&self) -> Vec<Vec<char>> {
        if self.dim == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.dim).map(<[char]>::to_vec).collect()
    }
}

/// Formats a grid for the console.
///
/// Every letter is followed by a single space and each row ends with a
/// newline. Empty cells show as '.'.
pub fn format_grid(grid: &Grid) -> String {
    let mut output = String::with_capacity(grid.dim * (2 * grid.dim + 1));

    for row in grid.rows() {
        for letter in row {
            output.push(if letter == EMPTY { '.' } else { letter });
            output.push(' ');
        }
        output.push('\n');
    }

    output
}
