//! Turn state for a single game
//!
//! Red moves first. The `started` flag turns on once both colors have had
//! an orb on the board and never turns off again; only then can a player
//! win by eliminating the other.

use log::info;

use crate::board::{Board, Player, Pos};
use crate::config::GameConfig;
use crate::engine::AIEngine;
use crate::error::GameError;
use crate::harness::{BackgroundSearch, View};
use crate::rules::{both_present, game_winner};

/// Board, side to move and the started flag of a game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Player,
    started: bool,
    moves: u32,
    last_move: Option<Pos>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Red,
            started: false,
            moves: 0,
            last_move: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Moves played so far
    #[inline]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Play `pos` for the side to move and pass the turn.
    pub fn play(&mut self, pos: Pos) -> Result<(), GameError> {
        self.board = self.board.apply_move(self.turn, pos)?;
        self.started = self.started || both_present(&self.board);
        self.last_move = Some(pos);
        self.moves += 1;
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Winner once the game has started and one color is gone
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        game_winner(&self.board, self.started)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Play an AI-vs-AI game to the end, each move searched in the background.
    ///
    /// `view` is redrawn while each search runs; a quit request ends the game
    /// with [`GameError::Interrupted`].
    pub fn play_out<V: View + ?Sized>(
        config: &GameConfig,
        view: &mut V,
    ) -> Result<Game, GameError> {
        let engine = AIEngine::new(config.engine);
        let mut game = Game::new();

        while !game.is_over() {
            view.draw_board(game.board(), game.turn(), "");
            let search = BackgroundSearch::spawn(
                engine,
                game.board,
                game.turn,
                game.started,
                config.hard_ceiling,
            );
            let result = search.wait(view)?;

            let Some(pos) = result.best_move else {
                // No legal move: every cell belongs to the other side
                break;
            };
            game.play(pos)?;
        }

        if let Some(winner) = game.winner() {
            info!(
                "{winner} wins after {} moves (red {} orbs, blue {} orbs)",
                game.moves,
                game.board.score(Player::Red),
                game.board.score(Player::Blue)
            );
            view.draw_board(game.board(), game.turn(), &format!("{} wins!", winner.name()));
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_red_moves_first_and_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Player::Red);

        game.play(Pos::new(0, 0)).unwrap();
        assert_eq!(game.turn(), Player::Blue);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.last_move(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_started_after_both_colors_appear() {
        let mut game = Game::new();

        game.play(Pos::new(0, 0)).unwrap();
        assert!(!game.started());
        // Red alone on the board is not a win yet
        assert_eq!(game.winner(), None);

        game.play(Pos::new(8, 5)).unwrap();
        assert!(game.started());
        assert_eq!(game.board().get(Pos::new(8, 5)), Cell::new(Player::Blue, 1));
    }

    #[test]
    fn test_elimination_ends_game() {
        let mut game = Game::new();
        game.play(Pos::new(0, 0)).unwrap(); // red
        game.play(Pos::new(0, 1)).unwrap(); // blue, next to red's corner
        game.play(Pos::new(0, 0)).unwrap(); // red explodes into blue's only cell

        assert!(game.started());
        assert_eq!(game.winner(), Some(Player::Red));
        assert!(game.is_over());
    }

    #[test]
    fn test_illegal_move_keeps_state() {
        let mut game = Game::new();
        game.play(Pos::new(2, 2)).unwrap();
        let before = game;

        let err = game.play(Pos::new(2, 2)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
        assert_eq!(game, before);
    }
}
