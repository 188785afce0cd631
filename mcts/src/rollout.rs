//! Rollout policies: how a simulation plays a position out.
//!
//! The default policy plays uniformly random valid actions until the game
//! ends. The trait keeps the playout strategy injectable, so heavier
//! heuristics can be substituted without touching selection, expansion, or
//! backpropagation.

use game_core::GameState;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// Strategy that plays a state out to a terminal outcome.
pub trait RolloutPolicy<S: GameState> {
    /// Play `state` to completion and return the terminal score, in the
    /// shared sign convention of [`GameState::score`].
    fn rollout(&self, state: S, rng: &mut ChaCha20Rng) -> f32;
}

/// Uniform-random playout.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRollout;

impl<S: GameState> RolloutPolicy<S> for RandomRollout {
    fn rollout(&self, mut state: S, rng: &mut ChaCha20Rng) -> f32 {
        while !state.is_terminal() {
            let actions = state.valid_actions();
            assert!(
                !actions.is_empty(),
                "non-terminal state has no valid actions: {state:?}"
            );
            let action = actions[rng.gen_range(0..actions.len())];
            state = state
                .apply(action)
                .expect("action from valid_actions must apply cleanly");
        }
        state.score()
    }
}
