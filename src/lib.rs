//! Chain Reaction game engine with a negamax AI
//!
//! Two players take turns adding orbs to a 9x6 grid:
//! - A player may add an orb to an empty cell or one they already own
//! - A cell holding as many orbs as it has neighbors explodes, sending one
//!   orb to each neighbor and capturing it
//! - Explosions cascade until the board is stable
//! - Once both colors have appeared, the player who eliminates the other wins
//!
//! # Architecture
//!
//! - [`board`]: Grid, cells, positions and move application
//! - [`rules`]: Chain reaction resolution and win detection
//! - [`eval`]: Static evaluation heuristics
//! - [`search`]: Depth-limited negamax with alpha-beta pruning
//! - [`engine`]: AI engine with a random fallback move
//! - [`harness`]: Background search with a hard wall-clock ceiling
//! - [`game`]: Turn state and headless game loop
//! - [`ui`]: egui window and terminal view
//!
//! # Quick Start
//!
//! ```
//! use chain_reaction::{Board, Heuristic, Player, Pos};
//!
//! let board = Board::new().apply_move(Player::Red, Pos::new(0, 0)).unwrap();
//! assert_eq!(board.score(Player::Red), 1);
//!
//! // Red is one orb ahead, weighted by the corner's low critical mass
//! assert_eq!(Heuristic::Weighted.evaluate(&board, Player::Red), 3.0);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod harness;
pub mod results;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, COLS, ROWS};
pub use config::{EngineConfig, GameConfig};
pub use engine::{AIEngine, MoveResult, MoveSource};
pub use error::GameError;
pub use eval::Heuristic;
pub use game::Game;
pub use harness::{BackgroundSearch, View};
pub use results::ResultLog;
pub use search::{SearchResult, Searcher};
