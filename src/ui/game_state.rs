//! Game state management for the Chain Reaction window

use std::time::{Duration, Instant};

use log::{error, info};

use crate::board::{Player, Pos};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult, MoveSource};
use crate::game::Game;
use crate::harness::{BackgroundSearch, THINKING_MESSAGE};
use crate::results::ResultLog;

/// How long the result of a finished game stays on screen
const GAME_OVER_PAUSE: Duration = Duration::from_secs(2);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking(BackgroundSearch),
}

/// Main game state
pub struct GameState {
    pub game: Game,
    /// 0-based index of the current game
    pub game_number: u32,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
    /// Set when the current game ended
    pub finished_at: Option<Instant>,
    /// Every requested game has been played
    pub all_done: bool,

    config: GameConfig,
    engine: AIEngine,
    results: Option<ResultLog>,
}

impl GameState {
    pub fn new(config: GameConfig, results: Option<ResultLog>) -> Self {
        Self {
            game: Game::new(),
            game_number: 0,
            ai_state: AiState::Idle,
            last_ai_result: None,
            message: None,
            finished_at: None,
            all_done: config.games == 0,
            engine: AIEngine::new(config.engine),
            config,
            results,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Check if `player` is played by the AI
    pub fn is_ai(&self, player: Player) -> bool {
        player == Player::Blue || self.config.ai_vs_ai
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.is_playing() && !self.is_ai(self.game.turn())
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.is_playing() && self.is_ai(self.game.turn())
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking(_))
    }

    fn is_playing(&self) -> bool {
        !self.all_done && self.finished_at.is_none()
    }

    /// Advance the state by one frame: collect or start AI moves and move
    /// on to the next game once the pause after a finished game is over.
    pub fn tick(&mut self) {
        self.check_ai_result();

        if self.is_ai_turn() && !self.is_ai_thinking() {
            self.start_ai_thinking();
        }

        if let Some(finished) = self.finished_at {
            if finished.elapsed() >= GAME_OVER_PAUSE {
                self.next_game();
            }
        }
    }

    /// Attempt to play a human move
    pub fn try_play(&mut self, pos: Pos) -> Result<(), String> {
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        if !self.game.board().is_legal(self.game.turn(), pos) {
            return Err(format!(
                "That cell belongs to {}",
                self.game.turn().opponent().name()
            ));
        }
        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        if let Err(err) = self.game.play(pos) {
            error!("rejected move {pos}: {err}");
            self.message = Some(err.to_string());
            return;
        }
        self.message = None;

        if let Some(winner) = self.game.winner() {
            self.finish_game(winner);
        }
    }

    fn finish_game(&mut self, winner: Player) {
        let board = self.game.board();
        info!(
            "game {}: {winner} wins (red {} orbs, blue {} orbs)",
            self.game_number + 1,
            board.score(Player::Red),
            board.score(Player::Blue)
        );

        if let Some(log) = &mut self.results {
            if let Err(err) = log.record(self.game_number + 1, winner, board) {
                error!("failed to write result: {err}");
            }
        }

        self.finished_at = Some(Instant::now());
    }

    fn next_game(&mut self) {
        self.finished_at = None;
        self.game_number += 1;
        if self.game_number >= self.config.games {
            self.all_done = true;
            return;
        }
        self.game = Game::new();
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.message = None;
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let search = BackgroundSearch::spawn(
            self.engine,
            *self.game.board(),
            self.game.turn(),
            self.game.started(),
            self.config.hard_ceiling,
        );
        self.ai_state = AiState::Thinking(search);
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &mut self.ai_state {
            AiState::Thinking(search) => search.poll(),
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;

            match move_result.best_move {
                Some(pos) => {
                    self.execute_move(pos);
                    if move_result.source == MoveSource::Overrun {
                        self.message = Some("AI ran out of time; random move played".to_string());
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
            self.last_ai_result = Some(move_result);
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking(search) => Some(search.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Status line for the current frame
    pub fn status(&self) -> String {
        if self.all_done {
            return "All games played".to_string();
        }
        if let Some(winner) = self.game.winner() {
            return format!("{} wins!", winner.name());
        }
        if self.is_ai_thinking() {
            return THINKING_MESSAGE.to_string();
        }
        if self.is_human_turn() {
            return "Your move".to_string();
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn config(games: u32) -> GameConfig {
        GameConfig {
            engine: EngineConfig {
                depth: 1,
                ..Default::default()
            },
            games,
            ..Default::default()
        }
    }

    #[test]
    fn test_red_is_human_by_default() {
        let state = GameState::new(config(1), None);
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());
    }

    #[test]
    fn test_human_move_hands_turn_to_ai() {
        let mut state = GameState::new(config(1), None);
        state.try_play(Pos::new(0, 0)).unwrap();

        assert_eq!(state.game.turn(), Player::Blue);
        assert!(state.is_ai_turn());
        assert!(state.try_play(Pos::new(1, 1)).is_err());
    }

    #[test]
    fn test_ai_reply_arrives() {
        let mut state = GameState::new(config(1), None);
        state.try_play(Pos::new(0, 0)).unwrap();

        let start = Instant::now();
        while state.game.turn() == Player::Blue {
            assert!(start.elapsed() < Duration::from_secs(10));
            state.tick();
            std::thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(state.game.moves(), 2);
        assert!(state.last_ai_result.is_some());
    }
}
