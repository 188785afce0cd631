//! Search tree with arena allocation.
//!
//! Nodes live in a contiguous `Vec` owned by the tree and reference each
//! other by [`NodeId`] index, so the parent back-references needed for
//! backpropagation never form an ownership cycle. The tree lives exactly
//! as long as the search that built it.

use game_core::GameState;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::node::{NodeId, SearchNode};

/// Search tree with arena-based node storage.
#[derive(Debug)]
pub struct SearchTree<S: GameState> {
    /// Arena storing all nodes
    nodes: Vec<SearchNode<S>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<S: GameState> SearchTree<S> {
    /// Create a new tree holding only a root built from `root_state`.
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![SearchNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn allocate(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Expand `node_id` by creating a child for its first untried action,
    /// and return the new child's ID.
    ///
    /// Marks the node fully expanded once the last untried action is taken.
    ///
    /// # Panics
    ///
    /// Panics if the node has no untried action left. Selection never
    /// expands a fully-expanded or terminal node, so reaching that state
    /// means the tree discipline is broken.
    pub fn expand(&mut self, node_id: NodeId) -> NodeId {
        let node = self.get(node_id);
        let actions = node.state.valid_actions();
        let untried = actions
            .iter()
            .copied()
            .find(|action| !node.children.iter().any(|(tried, _)| tried == action))
            .unwrap_or_else(|| panic!("expand called on a fully expanded node"));

        let child_state = node
            .state
            .apply(untried)
            .expect("action from valid_actions must apply cleanly");
        let child_id = self.allocate(SearchNode::new_child(node_id, untried, child_state));

        let node = self.get_mut(node_id);
        node.children.push((untried, child_id));
        if node.children.len() == actions.len() {
            node.fully_expanded = true;
        }

        child_id
    }

    /// Select the UCT-best child of `node_id`, breaking exact ties
    /// uniformly at random. Returns `None` when the node has no children.
    pub fn select_child(
        &self,
        node_id: NodeId,
        exploration: f32,
        rng: &mut ChaCha20Rng,
    ) -> Option<NodeId> {
        let node = self.get(node_id);
        let mover_sign = node.state.current_player().sign();
        let parent_visits_ln = (node.visits as f32).ln();

        let mut best_value = f32::NEG_INFINITY;
        let mut best: Vec<NodeId> = Vec::new();
        for &(_, child_id) in &node.children {
            let value = self
                .get(child_id)
                .uct_value(mover_sign, parent_visits_ln, exploration);
            if value > best_value {
                best_value = value;
                best.clear();
                best.push(child_id);
            } else if value == best_value {
                best.push(child_id);
            }
        }

        pick_uniform(&best, rng)
    }

    /// Add `score` and one visit to every node from `node_id` up to the
    /// root inclusive.
    ///
    /// The score is applied unchanged at every level: the tree keeps one
    /// shared sign convention and UCT reorients it per mover.
    pub fn backpropagate(&mut self, node_id: NodeId, score: f32) {
        let mut current = node_id;
        while current.is_some() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.score += score;
            current = node.parent;
        }
    }

    /// Most-visited root action, ties broken uniformly at random.
    /// Returns `None` when the root has no children.
    pub fn best_action(&self, rng: &mut ChaCha20Rng) -> Option<S::Action> {
        let root = self.get(self.root);

        let mut best_visits = 0;
        let mut best: Vec<S::Action> = Vec::new();
        for &(action, child_id) in &root.children {
            let visits = self.get(child_id).visits;
            if visits > best_visits {
                best_visits = visits;
                best.clear();
                best.push(action);
            } else if visits == best_visits {
                best.push(action);
            }
        }

        pick_uniform(&best, rng)
    }
}

fn pick_uniform<T: Copy>(candidates: &[T], rng: &mut ChaCha20Rng) -> Option<T> {
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}
