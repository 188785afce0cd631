//! Search tree node representation.
//!
//! Each node snapshots the game state reached by taking an action from its
//! parent and accumulates the visit/score statistics consumed by UCT
//! selection.

use game_core::GameState;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode<S: GameState> {
    /// Parent node index (`NONE` for the root). A back-reference for
    /// backpropagation only; the arena owns every node.
    pub parent: NodeId,

    /// Action that led to this node from the parent (`None` for the root).
    pub action: Option<S::Action>,

    /// Game state at this node.
    pub state: S,

    /// Number of rollouts backpropagated through this node.
    pub visits: u32,

    /// Sum of rollout scores backpropagated through this node, in the
    /// shared sign convention: positive favors player one.
    pub score: f32,

    /// Whether `state` is terminal; cached at construction.
    pub is_terminal: bool,

    /// True once every valid action has a child. Terminal nodes qualify at
    /// construction with zero children.
    pub fully_expanded: bool,

    /// Children in the order their actions were first tried.
    pub children: Vec<(S::Action, NodeId)>,
}

impl<S: GameState> SearchNode<S> {
    /// Create a root node.
    pub fn new_root(state: S) -> Self {
        Self::new(NodeId::NONE, None, state)
    }

    /// Create a child node.
    pub fn new_child(parent: NodeId, action: S::Action, state: S) -> Self {
        Self::new(parent, Some(action), state)
    }

    fn new(parent: NodeId, action: Option<S::Action>, state: S) -> Self {
        let is_terminal = state.is_terminal();
        Self {
            parent,
            action,
            state,
            visits: 0,
            score: 0.0,
            is_terminal,
            fully_expanded: is_terminal,
            children: Vec::new(),
        }
    }

    /// Mean backpropagated score. 0.0 before the first visit.
    #[inline]
    pub fn mean_score(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / self.visits as f32
        }
    }

    /// UCT value of this node as a child choice.
    ///
    /// `mover_sign` is the sign of the player to move in the *parent*
    /// state: it orients the exploitation term so each side maximizes its
    /// own expected outcome under the shared score convention.
    /// `parent_visits_ln` is `ln(parent.visits)`, computed once per
    /// selection. Selection only compares children that have been visited
    /// at least once, so the divisions are total.
    #[inline]
    pub fn uct_value(&self, mover_sign: f32, parent_visits_ln: f32, exploration: f32) -> f32 {
        let visits = self.visits as f32;
        mover_sign * self.score / visits + exploration * (parent_visits_ln / visits).sqrt()
    }
}
