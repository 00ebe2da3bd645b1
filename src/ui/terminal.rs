//! Plain-text board view for headless runs

use std::io::{self, Write};

use crate::board::{Board, Player, Pos, COLS, ROWS};
use crate::harness::View;

/// Prints the board to a writer whenever it changes.
///
/// A terminal view has no input channel, so it never asks to quit; stop a
/// headless run with Ctrl-C.
pub struct TerminalView<W: Write = io::Stdout> {
    out: W,
    last: Option<(Board, Player)>,
}

impl TerminalView {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, board: &Board, turn: Player, message: &str) -> io::Result<()> {
        write!(self.out, "   ")?;
        for col in 0..COLS {
            write!(self.out, " {col:>2}")?;
        }
        writeln!(self.out)?;

        for row in 0..ROWS {
            write!(self.out, "{row:>2} ")?;
            for col in 0..COLS {
                let cell = board.get(Pos::new(row as u8, col as u8));
                match cell.owner() {
                    Some(Player::Red) => write!(self.out, " R{}", cell.count())?,
                    Some(Player::Blue) => write!(self.out, " B{}", cell.count())?,
                    None => write!(self.out, "  .")?,
                }
            }
            writeln!(self.out)?;
        }

        writeln!(
            self.out,
            "{} to move | red {} blue {}",
            turn.name(),
            board.score(Player::Red),
            board.score(Player::Blue)
        )?;
        if !message.is_empty() {
            writeln!(self.out, "{message}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> View for TerminalView<W> {
    fn draw_board(&mut self, board: &Board, turn: Player, message: &str) {
        // The harness redraws at 60 Hz; only print real changes
        if self.last == Some((*board, turn)) {
            return;
        }
        self.last = Some((*board, turn));

        if let Err(err) = self.render(board, turn, message) {
            log::warn!("failed to draw board: {err}");
        }
    }

    fn quit_requested(&mut self) -> bool {
        false
    }
}
