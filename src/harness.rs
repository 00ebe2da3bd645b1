//! Background search with a hard wall-clock ceiling
//!
//! The search runs on its own thread and hands its answer back through a
//! one-slot channel. The interactive side keeps redrawing and handling
//! input while it waits, and never waits longer than the ceiling: past it,
//! a random legal move is played and the late result is ignored. The
//! worker's stop flag is raised at that point so it winds down at its next
//! node instead of running to completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{error, warn};

use crate::board::{Board, Player};
use crate::engine::{AIEngine, MoveResult, MoveSource};
use crate::error::GameError;

/// Wait between two polls of the worker (60 Hz)
pub const POLL_INTERVAL: Duration = Duration::from_micros(1_000_000 / 60);

/// Status line shown while the AI thinks
pub const THINKING_MESSAGE: &str = "AI thinking...  (Esc to quit)";

/// Rendering and quit handling while a search runs.
pub trait View {
    /// Redraw `board` with `turn` to move and a status message
    fn draw_board(&mut self, board: &Board, turn: Player, message: &str);

    /// Drain pending input; true once the user asked to quit
    fn quit_requested(&mut self) -> bool;
}

/// A search running on a worker thread.
pub struct BackgroundSearch {
    board: Board,
    player: Player,
    receiver: Receiver<MoveResult>,
    stop: Arc<AtomicBool>,
    start_time: Instant,
    ceiling: Duration,
}

impl BackgroundSearch {
    /// Start searching `board` for `player` with `engine`.
    pub fn spawn(
        engine: AIEngine,
        board: Board,
        player: Player,
        started: bool,
        ceiling: Duration,
    ) -> Self {
        Self::spawn_with(board, player, ceiling, move |stop| {
            engine.get_move_with_stop(&board, player, started, stop)
        })
    }

    /// Start an arbitrary search job. The job receives the stop flag raised
    /// when the ceiling passes or the search is dropped.
    pub fn spawn_with<F>(board: Board, player: Player, ceiling: Duration, job: F) -> Self
    where
        F: FnOnce(Arc<AtomicBool>) -> MoveResult + Send + 'static,
    {
        let (tx, rx) = sync_channel(1);
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);

        thread::spawn(move || {
            let result = job(worker_stop);
            // The receiver is gone if the harness gave up waiting
            let _ = tx.send(result);
        });

        Self {
            board,
            player,
            receiver: rx,
            stop,
            start_time: Instant::now(),
            ceiling,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Time since the search started
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Non-blocking check for the move to play.
    ///
    /// Returns the search's move once it is ready, or a random legal move
    /// once the ceiling has passed. `None` means keep waiting.
    pub fn poll(&mut self) -> Option<MoveResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => {
                if self.elapsed() > self.ceiling {
                    Some(self.abandon())
                } else {
                    None
                }
            }
            Err(TryRecvError::Disconnected) => {
                error!("{} search worker exited without a result", self.player);
                Some(self.fallback(MoveSource::Indecision))
            }
        }
    }

    /// Block until a move is available, redrawing `view` at [`POLL_INTERVAL`].
    ///
    /// Returns [`GameError::Interrupted`] as soon as the view reports a quit
    /// request.
    pub fn wait<V: View + ?Sized>(mut self, view: &mut V) -> Result<MoveResult, GameError> {
        loop {
            if let Some(result) = self.poll() {
                return Ok(result);
            }

            view.draw_board(&self.board, self.player, THINKING_MESSAGE);
            if view.quit_requested() {
                self.stop.store(true, Ordering::Relaxed);
                return Err(GameError::Interrupted);
            }

            thread::sleep(POLL_INTERVAL);
        }
    }

    fn abandon(&mut self) -> MoveResult {
        self.stop.store(true, Ordering::Relaxed);
        let result = self.fallback(MoveSource::Overrun);
        warn!(
            "{} search exceeded hard ceiling of {:?} after {:?}; playing random move {:?}",
            self.player,
            self.ceiling,
            self.elapsed(),
            result.best_move
        );
        result
    }

    fn fallback(&self, source: MoveSource) -> MoveResult {
        MoveResult::fallback(
            &self.board,
            self.player,
            source,
            self.elapsed(),
            &mut rand::thread_rng(),
        )
    }
}

impl Drop for BackgroundSearch {
    fn drop(&mut self) {
        // Nobody will read the result any more
        self.stop.store(true, Ordering::Relaxed);
    }
}
