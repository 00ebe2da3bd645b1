//! Immutable board value and move application

use super::{Cell, Player, Pos, TOTAL_CELLS};
use crate::error::GameError;
use crate::rules::{resolve_chain_reactions, ChainReaction};

/// Game board.
///
/// A `Board` is a plain value: applying a move returns a new board and
/// leaves the receiver untouched, so older boards stay valid for as long as
/// anyone holds them (the search keeps one per ply on its stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Empty starting board
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; TOTAL_CELLS],
        }
    }

    /// Build a board from explicit cells; unspecified cells are empty.
    ///
    /// Used to set up positions for analysis and tests. No chain reaction is
    /// resolved, so the caller is responsible for passing a stable layout.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (Pos, Cell)>,
    {
        let mut board = Self::new();
        for (pos, cell) in cells {
            board.cells[pos.to_index()] = cell;
        }
        board
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// All cells with their positions, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (Pos::from_index(idx), *cell))
    }

    /// Check if `player` may place an orb at `pos`
    #[inline]
    pub fn is_legal(&self, player: Player, pos: Pos) -> bool {
        self.get(pos).accepts(player)
    }

    /// Every empty or own cell, in row-major order.
    ///
    /// The order is the search's enumeration and tie-break order.
    pub fn legal_moves(&self, player: Player) -> Vec<Pos> {
        self.cells()
            .filter(|(_, cell)| cell.accepts(player))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of legal moves without allocating
    pub fn legal_move_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|cell| cell.accepts(player)).count()
    }

    /// Place one orb for `player` and resolve the resulting chain reaction.
    pub fn apply_move(&self, player: Player, pos: Pos) -> Result<Board, GameError> {
        self.apply_move_traced(player, pos).map(|(board, _)| board)
    }

    /// Like [`Board::apply_move`], also reporting what the cascade did.
    pub fn apply_move_traced(
        &self,
        player: Player,
        pos: Pos,
    ) -> Result<(Board, ChainReaction), GameError> {
        let target = self.get(pos);
        if let Some(owner) = target.owner() {
            if owner != player {
                return Err(GameError::IllegalMove { pos, owner });
            }
        }

        let mut next = *self;
        next.cells[pos.to_index()] = target.with_orb(player);
        let reaction = resolve_chain_reactions(&mut next.cells);
        Ok((next, reaction))
    }

    /// Sum of orbs owned by `player`
    pub fn score(&self, player: Player) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.is_owned_by(player))
            .map(|cell| u32::from(cell.count()))
            .sum()
    }

    /// Check if `player` owns at least one cell
    #[inline]
    pub fn has_player(&self, player: Player) -> bool {
        self.cells.iter().any(|cell| cell.is_owned_by(player))
    }

    /// Sole remaining color, if exactly one color is present.
    ///
    /// An empty board has no winner. Callers combine this with the game's
    /// started flag, see [`crate::rules::game_winner`].
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        crate::rules::winner(self)
    }

    /// Total orbs of both colors
    pub fn total_orbs(&self) -> u32 {
        self.cells.iter().map(|cell| u32::from(cell.count())).sum()
    }

    /// Every cell holds fewer orbs than its critical mass
    pub fn is_stable(&self) -> bool {
        self.cells().all(|(pos, cell)| cell.count() < pos.critical_mass())
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
