//! The search loop.
//!
//! Runs a fixed number of simulations over a tree rooted at the position
//! to decide from, then reports the most-visited root action. Each
//! simulation is select → rollout → backpropagate, run to completion
//! before the next begins; the simulation loop is a plain counted loop.

use game_core::GameState;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout::RolloutPolicy;
use crate::tree::SearchTree;

/// Visit count and mean score of one tried root action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionStats<A> {
    pub action: A,
    pub visits: u32,
    pub mean_score: f32,
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    /// Most-visited root action, ties broken uniformly at random.
    ///
    /// `None` when the root acquired no children — a terminal root
    /// position or a zero-simulation search. That is a normal outcome,
    /// not an error; the caller decides how to react.
    pub decision: Option<A>,

    /// Number of simulations performed.
    pub simulations: u32,

    /// Statistics per tried root action, in the order the actions were
    /// first tried.
    pub stats: Vec<ActionStats<A>>,
}

/// One search over a tree rooted at a fixed position.
///
/// The tree is built fresh per search and dropped with it; positions are
/// re-searched from scratch on every decision.
pub struct MctsSearch<'a, S: GameState, P> {
    tree: SearchTree<S>,
    rollout: &'a P,
    config: MctsConfig,
}

impl<'a, S, P> MctsSearch<'a, S, P>
where
    S: GameState,
    P: RolloutPolicy<S>,
{
    /// Create a new search rooted at `root_state`.
    pub fn new(root_state: S, rollout: &'a P, config: MctsConfig) -> Self {
        Self {
            tree: SearchTree::new(root_state),
            rollout,
            config,
        }
    }

    /// Run the configured number of simulations and report the decision.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> SearchResult<S::Action> {
        for _ in 0..self.config.simulations {
            self.simulate(rng);
        }

        let decision = self.tree.best_action(rng);
        let root = self.tree.get(self.tree.root());
        let stats = root
            .children
            .iter()
            .map(|&(action, child_id)| {
                let child = self.tree.get(child_id);
                ActionStats {
                    action,
                    visits: child.visits,
                    mean_score: child.mean_score(),
                }
            })
            .collect();

        debug!(
            simulations = self.config.simulations,
            nodes = self.tree.len(),
            decision = ?decision,
            "search complete"
        );

        SearchResult {
            decision,
            simulations: self.config.simulations,
            stats,
        }
    }

    /// Run a single simulation (select → rollout → backpropagate).
    fn simulate(&mut self, rng: &mut ChaCha20Rng) {
        let node_id = self.select(rng);
        let state = self.tree.get(node_id).state.clone();
        let score = self.rollout.rollout(state, rng);
        self.tree.backpropagate(node_id, score);

        trace!(node = node_id.0, score, "simulation complete");
    }

    /// Descend from the root to the node the next rollout starts from.
    ///
    /// In order of preference: expand the first node on the UCT path that
    /// still has untried actions, or stop at a terminal node.
    fn select(&mut self, rng: &mut ChaCha20Rng) -> NodeId {
        let mut current = self.tree.root();
        loop {
            let node = self.tree.get(current);
            if node.is_terminal {
                return current;
            }
            if !node.fully_expanded {
                return self.tree.expand(current);
            }
            current = self
                .tree
                .select_child(current, self.config.exploration, rng)
                .expect("fully expanded non-terminal node must have children");
        }
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &SearchTree<S> {
        &self.tree
    }
}

/// Convenience function to run a single search.
pub fn run_mcts<S, P>(
    root_state: S,
    rollout: &P,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> SearchResult<S::Action>
where
    S: GameState,
    P: RolloutPolicy<S>,
{
    MctsSearch::new(root_state, rollout, config).run(rng)
}
