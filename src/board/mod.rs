//! Board representation for Chain Reaction

pub mod board;
pub mod cell;


// Re-exports
pub use board::Board;
pub use cell::Cell;
pub use crate::rules::ChainReaction;

use crate::error::GameError;

/// Board height
pub const ROWS: usize = 9;
/// Board width
pub const COLS: usize = 6;
pub const TOTAL_CELLS: usize = ROWS * COLS; // 54

/// Largest critical mass on the board (interior cells)
pub const MAX_CRITICAL_MASS: u8 = 4;

/// Critical mass of every cell: its number of orthogonal neighbours.
/// Corners hold 2, edges 3, interior cells 4.
pub const CRITICAL_MASS: [[u8; COLS]; ROWS] = build_critical_mass();

const fn build_critical_mass() -> [[u8; COLS]; ROWS] {
    let mut table = [[MAX_CRITICAL_MASS; COLS]; ROWS];
    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col < COLS {
            let mut neighbours = MAX_CRITICAL_MASS;
            if row == 0 || row == ROWS - 1 {
                neighbours -= 1;
            }
            if col == 0 || col == COLS - 1 {
                neighbours -= 1;
            }
            table[row][col] = neighbours;
            col += 1;
        }
        row += 1;
    }
    table
}

/// Orthogonal directions, in the order neighbours receive orbs
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Player colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Lowercase key used in logs and the results file
    pub fn as_str(self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Blue => "blue",
        }
    }

    /// Capitalised name for on-screen messages
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < ROWS && (col as usize) < COLS);
        Self { row, col }
    }

    /// Build a position from unchecked coordinates.
    pub fn try_new(row: i32, col: i32) -> Result<Self, GameError> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * COLS + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / COLS) as u8,
            col: (idx % COLS) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < ROWS as i32 && col >= 0 && col < COLS as i32
    }

    #[inline]
    pub fn critical_mass(self) -> u8 {
        CRITICAL_MASS[self.row as usize][self.col as usize]
    }

    /// In-bounds orthogonal neighbours
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let r = i32::from(self.row) + dr;
            let c = i32::from(self.col) + dc;
            Pos::is_valid(r, c).then(|| Pos::new(r as u8, c as u8))
        })
    }

    /// Every position in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Critical mass lookup
#[inline]
pub fn critical_mass(pos: Pos) -> u8 {
    pos.critical_mass()
}
