//! Main AI engine
//!
//! Wraps the negamax searcher and guarantees a playable answer: when the
//! search cannot decide on a move, a uniformly random legal move is played
//! instead.
//!
//! # Example
//!
//! ```
//! use chain_reaction::{AIEngine, Board, EngineConfig, Player};
//!
//! let engine = AIEngine::new(EngineConfig { depth: 2, ..Default::default() });
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Player::Red, false);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::search::SearchResult;

/// Where a played move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Regular negamax result
    Search,
    /// The search returned no move; random legal move substituted
    Indecision,
    /// The harness ceiling passed first; random legal move substituted
    Overrun,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move to play; `None` only when the player has no legal move at all
    pub best_move: Option<Pos>,
    /// Search score for the mover (0 for substituted moves)
    pub score: f64,
    /// How the move was chosen
    pub source: MoveSource,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Wrap a completed search, falling back to a random move if it did not decide.
    pub fn from_search<R: Rng + ?Sized>(
        result: SearchResult,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Self {
        match result.best_move {
            Some(pos) => {
                debug!(
                    "{player} search: move {pos} score {} nodes {} in {:?}",
                    result.score, result.nodes, result.elapsed
                );
                Self {
                    best_move: Some(pos),
                    score: result.score,
                    source: MoveSource::Search,
                    time_ms: millis(result.elapsed),
                    nodes: result.nodes,
                }
            }
            None => {
                let mut fallback =
                    Self::fallback(board, player, MoveSource::Indecision, result.elapsed, rng);
                fallback.nodes = result.nodes;
                warn!(
                    "{player} search returned no move; playing random move {:?}",
                    fallback.best_move
                );
                fallback
            }
        }
    }

    /// Uniformly random legal move for `player`
    pub fn fallback<R: Rng + ?Sized>(
        board: &Board,
        player: Player,
        source: MoveSource,
        elapsed: Duration,
        rng: &mut R,
    ) -> Self {
        Self {
            best_move: random_legal_move(board, player, rng),
            score: 0.0,
            source,
            time_ms: millis(elapsed),
            nodes: 0,
        }
    }
}

/// Pick a legal move for `player` uniformly at random
pub fn random_legal_move<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<Pos> {
    board.legal_moves(player).choose(rng).copied()
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Main AI engine for Chain Reaction.
#[derive(Debug, Clone, Copy)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the move to play for `player`.
    ///
    /// `started` tells the search whether both colors have been on the board
    /// in this game; until then no position counts as won or lost.
    #[must_use]
    pub fn get_move(&self, board: &Board, player: Player, started: bool) -> Option<Pos> {
        self.get_move_with_stats(board, player, started).best_move
    }

    /// Get the move to play with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, player: Player, started: bool) -> MoveResult {
        let mut searcher = self.config.searcher();
        let result = searcher.search(board, player, started);
        MoveResult::from_search(result, board, player, &mut rand::thread_rng())
    }

    /// Like [`AIEngine::get_move_with_stats`], winding down once `stop` is raised.
    #[must_use]
    pub fn get_move_with_stop(
        &self,
        board: &Board,
        player: Player,
        started: bool,
        stop: Arc<AtomicBool>,
    ) -> MoveResult {
        let mut searcher = self.config.searcher().with_stop_flag(stop);
        let result = searcher.search(board, player, started);
        MoveResult::from_search(result, board, player, &mut rand::thread_rng())
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_engine_plays_legal_move() {
        let engine = AIEngine::new(EngineConfig {
            depth: 2,
            ..Default::default()
        });
        let board = Board::from_cells([(Pos::new(0, 0), Cell::new(Player::Red, 1))]);

        let result = engine.get_move_with_stats(&board, Player::Blue, false);
        let pos = result.best_move.unwrap();
        assert!(board.is_legal(Player::Blue, pos));
        assert_eq!(result.source, MoveSource::Search);
    }

    #[test]
    fn test_indecision_falls_back_to_random_move() {
        let board = Board::from_cells([(Pos::new(4, 4), Cell::new(Player::Blue, 1))]);
        let undecided = SearchResult {
            best_move: None,
            score: 0.0,
            nodes: 1,
            elapsed: Duration::ZERO,
        };
        let mut rng = StdRng::seed_from_u64(7);

        let result = MoveResult::from_search(undecided, &board, Player::Red, &mut rng);
        assert_eq!(result.source, MoveSource::Indecision);
        assert!(board.is_legal(Player::Red, result.best_move.unwrap()));
    }

    #[test]
    fn test_random_legal_move_respects_ownership() {
        // Only (0,0) is open to red
        let board = Board::from_cells(Pos::all().map(|pos| {
            let owner = if pos == Pos::new(0, 0) { Player::Red } else { Player::Blue };
            (pos, Cell::new(owner, 1))
        }));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(random_legal_move(&board, Player::Red, &mut rng), Some(Pos::new(0, 0)));
        }
    }

    #[test]
    fn test_stopped_search_still_plays() {
        let engine = AIEngine::new(EngineConfig {
            depth: 8,
            ..Default::default()
        });
        let stop = Arc::new(AtomicBool::new(true));

        let result = engine.get_move_with_stop(&Board::new(), Player::Red, false, stop);
        assert_eq!(result.source, MoveSource::Indecision);
        assert!(result.best_move.is_some());
    }
}
