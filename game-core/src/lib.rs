//! Core trait and types for searchable two-player games
//!
//! This crate provides the fundamental abstractions consumed by the `mcts`
//! search engine:
//! - `Player`: two-valued player identity with a signed score convention
//! - `GameState`: capability trait any searchable game must satisfy
//! - `InvalidAction`: error for actions that are not legal in a position
//!
//! The engine dispatches over `GameState` generically, so new games plug in
//! without changes to the search logic.

pub mod player;
pub mod state;

// Re-export main types for convenience
pub use player::Player;
pub use state::{GameState, InvalidAction};
