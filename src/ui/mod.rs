//! User interfaces
//!
//! A native window built on egui/eframe, and a plain-text view used for
//! headless AI-vs-AI runs.

mod app;
mod board_view;
mod game_state;
mod terminal;
mod theme;

pub use app::ChainReactionApp;
pub use game_state::{AiState, GameState};
pub use terminal::TerminalView;
