//! Search module for the Chain Reaction AI
//!
//! Contains:
//! - Negamax with alpha-beta pruning, a started-flag terminal guard and
//!   leaf-level time truncation

pub mod negamax;

pub use negamax::{SearchResult, Searcher, LOSS, WIN};
