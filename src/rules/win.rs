//! Win condition checking
//!
//! A player wins by eliminating every orb of the other color. Before both
//! colors have appeared on the board the game has not really started, so an
//! empty or single-colored board is never a win on its own.

use crate::board::{Board, Player};

/// Sole color present on the board.
///
/// Returns `None` both when the two colors are present and when the board
/// is empty.
pub fn winner(board: &Board) -> Option<Player> {
    match (board.has_player(Player::Red), board.has_player(Player::Blue)) {
        (true, false) => Some(Player::Red),
        (false, true) => Some(Player::Blue),
        _ => None,
    }
}

/// Check if both colors own at least one cell
#[inline]
pub fn both_present(board: &Board) -> bool {
    board.has_player(Player::Red) && board.has_player(Player::Blue)
}

/// Winner of a game in progress, honoring the started flag
#[inline]
pub fn game_winner(board: &Board, started: bool) -> Option<Player> {
    if started {
        winner(board)
    } else {
        None
    }
}
