//! The `GameState` capability trait consumed by the search engine.
//!
//! A state is a plain value: applying an action produces a new state and
//! never mutates the receiver. The engine only ever observes a state
//! through this trait.

use std::fmt::{Debug, Display};

use thiserror::Error;

use crate::player::Player;

/// Error returned by [`GameState::apply`] for an action that is not legal
/// in the current position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid action: {action}")]
pub struct InvalidAction {
    /// Rendering of the rejected action.
    pub action: String,
}

impl InvalidAction {
    pub fn new(action: impl Display) -> Self {
        Self {
            action: action.to_string(),
        }
    }
}

/// Capability contract for a searchable two-player zero-sum game.
///
/// Implementations must keep [`valid_actions`] and [`is_terminal`]
/// consistent: the action list is empty exactly when the state is terminal.
/// The rollout driver treats a non-terminal state with no valid actions as
/// a broken contract and panics.
///
/// [`valid_actions`]: GameState::valid_actions
/// [`is_terminal`]: GameState::is_terminal
pub trait GameState: Clone + Debug {
    /// Move token. Small and copyable; the engine never inspects it beyond
    /// equality and display.
    type Action: Copy + Eq + Debug + Display;

    /// The player whose turn it is.
    fn current_player(&self) -> Player;

    /// Legal actions in a stable order. Empty iff the state is terminal.
    fn valid_actions(&self) -> Vec<Self::Action>;

    /// Successor state after the current player plays `action`; the turn
    /// passes to the opponent. The receiver is unchanged.
    fn apply(&self, action: Self::Action) -> Result<Self, InvalidAction>;

    /// Whether the game is decided or drawn.
    fn is_terminal(&self) -> bool;

    /// Zero-sum outcome from the perspective of the player about to move:
    /// `+1.0` / `-1.0` for a decisive win by [`Player::One`] /
    /// [`Player::Two`], `0.0` for a draw. Only meaningful when
    /// [`is_terminal`] is true.
    ///
    /// [`is_terminal`]: GameState::is_terminal
    fn score(&self) -> f32;
}
