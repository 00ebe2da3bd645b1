//! Heuristic evaluation functions for Chain Reaction positions
//!
//! All scores are from the perspective of `player`: positive values favor
//! `player`, negative values favor the opponent.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Player, MAX_CRITICAL_MASS};

/// Named evaluation strategy used at search leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Own orbs minus opponent orbs
    Difference,
    /// Orbs weighted toward corners and edges
    #[default]
    Weighted,
    /// Own cells touching the opponent minus opponent cells touching us
    Frontier,
    /// Own legal moves minus opponent legal moves
    Mobility,
    /// Cells close to exploding
    Imminent,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::Difference,
        Heuristic::Weighted,
        Heuristic::Frontier,
        Heuristic::Mobility,
        Heuristic::Imminent,
    ];

    /// Key used on the command line
    pub fn key(self) -> &'static str {
        match self {
            Heuristic::Difference => "difference",
            Heuristic::Weighted => "weighted",
            Heuristic::Frontier => "frontier",
            Heuristic::Mobility => "mobility",
            Heuristic::Imminent => "imminent",
        }
    }

    /// Score `board` for `player`
    #[inline]
    pub fn evaluate(self, board: &Board, player: Player) -> f64 {
        match self {
            Heuristic::Difference => orb_difference(board, player),
            Heuristic::Weighted => weighted_orbs(board, player),
            Heuristic::Frontier => frontier(board, player),
            Heuristic::Mobility => mobility(board, player),
            Heuristic::Imminent => imminent_explosions(board, player),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unknown heuristic key
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown heuristic '{0}' (expected difference, weighted, frontier, mobility or imminent)")]
pub struct ParseHeuristicError(String);

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseHeuristicError(s.to_string()))
    }
}

/// Evaluate the board from the perspective of the given player.
#[inline]
#[must_use]
pub fn evaluate(board: &Board, player: Player, heuristic: Heuristic) -> f64 {
    heuristic.evaluate(board, player)
}

/// Simple material balance
#[must_use]
pub fn orb_difference(board: &Board, player: Player) -> f64 {
    f64::from(board.score(player)) - f64::from(board.score(player.opponent()))
}

/// Material balance with safer cells weighted higher.
///
/// Weight is `MAX_CRITICAL_MASS + 1 - critical_mass`: corners 3, edges 2,
/// interior 1.
#[must_use]
pub fn weighted_orbs(board: &Board, player: Player) -> f64 {
    let mut score = 0i32;
    for (pos, cell) in board.cells() {
        let Some(owner) = cell.owner() else {
            continue;
        };
        let weight = i32::from(MAX_CRITICAL_MASS + 1 - pos.critical_mass());
        let value = i32::from(cell.count()) * weight;
        if owner == player {
            score += value;
        } else {
            score -= value;
        }
    }
    f64::from(score)
}

/// Net frontier advantage.
///
/// Every cell looks in all four directions; a cell counts once if any
/// neighbour belongs to the other color. The result is the number of
/// `player` frontier cells minus the opponent's.
///
/// This per-cell count is chosen deliberately over counting ordered pairs
/// of adjacent opposing cells, which cancel out to zero on every board.
#[must_use]
pub fn frontier(board: &Board, player: Player) -> f64 {
    let mut score = 0i32;
    for (pos, cell) in board.cells() {
        let Some(owner) = cell.owner() else {
            continue;
        };
        let contested = pos
            .neighbors()
            .any(|n| board.get(n).is_owned_by(owner.opponent()));
        if !contested {
            continue;
        }
        if owner == player {
            score += 1;
        } else {
            score -= 1;
        }
    }
    f64::from(score)
}

/// Legal move count versus the opponent's
#[must_use]
pub fn mobility(board: &Board, player: Player) -> f64 {
    board.legal_move_count(player) as f64 - board.legal_move_count(player.opponent()) as f64
}

/// Prefer own cells close to exploding, penalise the opponent's.
///
/// A cell needing `need` more orbs contributes `4 / need`.
#[must_use]
pub fn imminent_explosions(board: &Board, player: Player) -> f64 {
    let mut score = 0.0;
    for (pos, cell) in board.cells() {
        let Some(owner) = cell.owner() else {
            continue;
        };
        // Only a cycling board cut off mid-cascade can hold overloaded cells
        let need = pos.critical_mass().saturating_sub(cell.count()).max(1);
        let value = f64::from(MAX_CRITICAL_MASS) / f64::from(need);
        if owner == player {
            score += value;
        } else {
            score -= value;
        }
    }
    score
}
