//! Player identity for two-player zero-sum games.

use std::fmt;

/// One of the two players.
///
/// Scores use a single signed convention across the whole engine: outcomes
/// are positive when `One` wins and negative when `Two` wins. [`sign`] is
/// the only place that convention is materialized.
///
/// [`sign`]: Player::sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player who moves after this one.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Signed identity: `+1.0` for `One`, `-1.0` for `Two`.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Player::One => 1.0,
            Player::Two => -1.0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}
