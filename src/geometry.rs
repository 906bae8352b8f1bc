//! Coordinates and compass directions on the puzzle grid.
//!
//! A word occupies a straight ray of cells: a starting coordinate plus a unit
//! step repeated once per letter. There are 8 such steps, the four orthogonal
//! and four diagonal compass directions.

/// A (row, col) position on the grid.
///
/// Signed so that a step off the top or left edge is representable and can
/// be rejected by a bounds check instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring coordinate one unit step away.
    #[inline(always)]
    pub const fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Returns true if the coordinate lies inside a `dim x dim` grid.
    #[inline(always)]
    pub const fn in_bounds(self, dim: usize) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < dim && (self.col as usize) < dim
    }
}

/// One of the 8 compass directions a word can run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    SouthEast,
    NorthWest,
    SouthWest,
}

/// Number of compass directions.
pub const NUM_DIRECTIONS: usize = 8;

/// Unit step for every direction, indexed by `Direction::index`.
///
/// Ordering note: must stay in sync with `Direction::ALL`.
const DELTAS: [(i32, i32); NUM_DIRECTIONS] = [
    (-1, 0),  // N
    (1, 0),   // S
    (0, 1),   // E
    (0, -1),  // W
    (-1, 1),  // NE
    (1, 1),   // SE
    (-1, -1), // NW
    (1, -1),  // SW
];

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; NUM_DIRECTIONS] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::SouthWest,
    ];

    /// Slot of this direction in per-cell free-space arrays.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of `index`. Returns `None` for indices outside `0..8`.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_DIRECTIONS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The (row, col) delta of one step in this direction.
    #[inline(always)]
    pub const fn delta(self) -> (i32, i32) {
        DELTAS[self.index()]
    }

    /// Short compass label, e.g. `"NE"`.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::SouthEast => "SE",
            Direction::NorthWest => "NW",
            Direction::SouthWest => "SW",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Walks `len` cells starting at `start` (inclusive) in `direction`.
///
/// Does not check bounds; callers decide whether the ray fits.
pub fn ray(start: Coord, direction: Direction, len: usize) -> impl Iterator<Item = Coord> {
    std::iter::successors(Some(start), move |&pos| Some(pos.step(direction))).take(len)
}
