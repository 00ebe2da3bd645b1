//! Per-run results file
//!
//! One CSV row per finished game: `game,winner,red_orbs,blue_orbs`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::board::{Board, Player};
use crate::error::GameError;

pub const HEADER: &str = "game,winner,red_orbs,blue_orbs";

/// CSV writer for game results.
pub struct ResultLog<W: Write = BufWriter<File>> {
    out: W,
}

impl ResultLog {
    /// Create (or truncate) the results file at `path` and write the header.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        info!("writing results to {}", path.display());
        ResultLog::new(BufWriter::new(file))
    }
}

impl<W: Write> ResultLog<W> {
    /// Wrap any writer and write the header.
    pub fn new(mut out: W) -> Result<Self, GameError> {
        writeln!(out, "{HEADER}")?;
        out.flush()?;
        Ok(Self { out })
    }

    /// Append the result of game `game` (1-based).
    pub fn record(&mut self, game: u32, winner: Player, board: &Board) -> Result<(), GameError> {
        writeln!(
            self.out,
            "{},{},{},{}",
            game,
            winner.as_str(),
            board.score(Player::Red),
            board.score(Player::Blue)
        )?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    #[test]
    fn test_header_and_rows() {
        let board = Board::from_cells([
            (Pos::new(0, 0), Cell::new(Player::Red, 1)),
            (Pos::new(4, 4), Cell::new(Player::Red, 3)),
        ]);

        let mut log = ResultLog::new(Vec::new()).unwrap();
        log.record(1, Player::Red, &board).unwrap();
        log.record(2, Player::Blue, &Board::new()).unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(
            text,
            "game,winner,red_orbs,blue_orbs\n1,red,4,0\n2,blue,0,0\n"
        );
    }
}
