//! Game rules for Chain Reaction
//!
//! This module implements the rule set:
//! - Chain reaction resolution (explosions)
//! - Win conditions (elimination, guarded by the started flag)

pub mod explosion;
pub mod win;

// Re-exports for convenient access
pub use explosion::{resolve_chain_reactions, ChainReaction};
pub use win::{both_present, game_winner, winner};
