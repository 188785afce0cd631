//! Monte Carlo Tree Search over the `game-core` state contract
//!
//! This crate provides a game-agnostic UCT search that works with any game
//! implementing the `game-core` GameState trait.
//!
//! # Overview
//!
//! The search builds a tree rooted at the position to decide from by
//! running simulations. Each simulation consists of four phases:
//!
//! 1. **Selection**: Traverse the tree using UCT (Upper Confidence bound
//!    applied to Trees) to balance exploration and exploitation
//! 2. **Expansion**: When reaching a node with untried actions, add a
//!    child for the first one
//! 3. **Rollout**: Play the child's state out to a terminal state with the
//!    configured rollout policy
//! 4. **Backpropagation**: Add the outcome to visit/score statistics along
//!    the path from the new node to the root
//!
//! After the configured number of simulations, the most-visited root
//! action is the decision.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mcts::{MctsConfig, RandomRollout, run_mcts};
//! use games_connect4::Connect4;
//! use rand_chacha::ChaCha20Rng;
//! use rand::SeedableRng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let result = run_mcts(
//!     Connect4::new(),
//!     &RandomRollout,
//!     MctsConfig::default(),
//!     &mut rng,
//! );
//!
//! match result.decision {
//!     Some(column) => println!("Best column: {column}"),
//!     None => println!("Nothing to decide"),
//! }
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `simulations`: Number of simulations per search (default: 1000)
//! - `exploration`: Exploration constant for UCT (default: √2)
//!
//! # Rollout policies
//!
//! The search requires a [`RolloutPolicy`] to score leaf positions:
//!
//! - [`RandomRollout`]: Plays uniformly random moves to a terminal state
//! - Custom policies can substitute heavier playout heuristics without
//!   touching the selection/expansion/backpropagation logic

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{NodeId, SearchNode};
pub use rollout::{RandomRollout, RolloutPolicy};
pub use search::{run_mcts, ActionStats, MctsSearch, SearchResult};
pub use tree::SearchTree;
