//! Chain reaction resolution
//!
//! Explosions are resolved in repeated row-major passes over the grid. A
//! cell at or above its critical mass explodes the moment the scan reaches
//! it: it empties, and each orthogonal neighbour gains one orb and is
//! captured by the exploding color. The scan then carries on from the next
//! cell, so a neighbour further ahead in the same pass can explode in that
//! pass, while one already behind the scan waits for the next pass.
//! Resolution ends after a pass without explosions.
//!
//! The visiting order is observable in the resulting board and must not be
//! changed (no work queue, no neighbour-first propagation).

use std::collections::HashSet;

use crate::board::{Cell, Player, Pos, TOTAL_CELLS};

/// Passes after which two-color cascades are also checked for cycles
pub const CYCLE_CHECK_PASSES: u32 = TOTAL_CELLS as u32;

/// Summary of one chain reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChainReaction {
    /// Cells that exploded
    pub explosions: u32,
    /// Passes containing at least one explosion
    pub passes: u32,
    /// Orbs lost by cells that exploded above their critical mass.
    /// An exploding cell always empties but only feeds one orb per neighbour.
    pub spilled: u32,
    /// Resolution stopped with overloaded cells left because the grid was
    /// cycling and could never settle (in practice a board owned by a
    /// single color holding more orbs than it can keep stable)
    pub decided: bool,
}

/// Resolve every pending explosion in `cells`, in place.
///
/// Passes repeat until one of them has no explosion, so the result is
/// stable. The one exception is a grid that keeps exploding forever, such
/// as a fully captured board. Passes are deterministic over a finite set of
/// grids, so such a grid must eventually repeat: the grid after each pass
/// is remembered once a single color remains (or once the cascade has run
/// for [`CYCLE_CHECK_PASSES`] passes), and a repeated grid ends resolution
/// with [`ChainReaction::decided`] set.
pub fn resolve_chain_reactions(cells: &mut [Cell; TOTAL_CELLS]) -> ChainReaction {
    let mut reaction = ChainReaction::default();
    let mut seen: HashSet<[Cell; TOTAL_CELLS]> = HashSet::new();

    loop {
        let mut exploded = false;

        for idx in 0..TOTAL_CELLS {
            let cell = cells[idx];
            let Some(owner) = cell.owner() else {
                continue;
            };
            let pos = Pos::from_index(idx);
            let mass = pos.critical_mass();
            if cell.count() < mass {
                continue;
            }

            exploded = true;
            reaction.explosions += 1;
            reaction.spilled += u32::from(cell.count() - mass);

            cells[idx] = Cell::EMPTY;
            for neighbor in pos.neighbors() {
                let n = neighbor.to_index();
                cells[n] = cells[n].with_orb(owner);
            }
        }

        if !exploded {
            break;
        }
        reaction.passes += 1;

        let watch = reaction.passes > CYCLE_CHECK_PASSES || sole_owner(cells).is_some();
        if watch && !seen.insert(*cells) {
            reaction.decided = true;
            break;
        }
    }

    reaction
}

/// The only color on the board, if there is exactly one
fn sole_owner(cells: &[Cell; TOTAL_CELLS]) -> Option<Player> {
    let mut owners = cells.iter().filter_map(|cell| cell.owner());
    let first = owners.next()?;
    owners.all(|owner| owner == first).then_some(first)
}
