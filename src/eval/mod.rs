//! Board evaluation
//!
//! Five interchangeable strategies, selected by key. Every strategy scores
//! the board from the perspective of the given player and is antisymmetric:
//! `evaluate(board, p) == -evaluate(board, p.opponent())`, which negamax
//! relies on.

pub mod heuristic;

pub use heuristic::{
    evaluate, frontier, imminent_explosions, mobility, orb_difference, weighted_orbs, Heuristic,
    ParseHeuristicError,
};
