//! Engine and game configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::eval::Heuristic;
use crate::search::Searcher;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 3;

/// Longest the interactive loop waits for a search before playing a random move
pub const DEFAULT_HARD_CEILING: Duration = Duration::from_secs(5);

/// Search settings for one AI player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Plies to search
    pub depth: u32,
    /// Per-move budget; nodes reached after it become heuristic leaves
    pub time_limit: Option<Duration>,
    /// Leaf evaluation
    pub heuristic: Heuristic,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_limit: None,
            heuristic: Heuristic::default(),
        }
    }
}

impl EngineConfig {
    /// Fresh searcher for these settings
    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.depth, self.heuristic).with_time_limit(self.time_limit)
    }
}

/// Settings for a run of one or more games.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub engine: EngineConfig,
    /// Red is played by the AI too
    pub ai_vs_ai: bool,
    /// Consecutive games to play
    pub games: u32,
    /// Results file, one CSV row per game
    pub csv: Option<PathBuf>,
    /// Harness wall-clock ceiling per AI move
    pub hard_ceiling: Duration,
    /// Render to the terminal instead of opening a window
    pub headless: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            ai_vs_ai: false,
            games: 1,
            csv: None,
            hard_ceiling: DEFAULT_HARD_CEILING,
            headless: false,
        }
    }
}
