//! Search nodes and the arena that owns them.
//!
//! Every node records the node it was expanded from. Parents are always
//! pushed before their children, so following `parent` links strictly
//! decreases the index and the chain ends at the root.

use crate::result::Step;

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A state together with how it was reached.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    pub state: S,
    /// Action taken from the parent; `None` for the root.
    pub action: Option<A>,
    pub parent: Option<NodeId>,
    /// Accumulated path cost from the initial state.
    pub cost: f64,
    /// Number of actions from the initial state.
    pub depth: usize,
}

/// Append-only storage for the nodes of one search run.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> NodeArena<S, A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Drop every node, keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Add the node for the initial state (cost 0, no parent).
    pub fn push_root(&mut self, state: S) -> NodeId {
        self.push(Node {
            state,
            action: None,
            parent: None,
            cost: 0.0,
            depth: 0,
        })
    }

    /// Add a node reached from `parent` by `action` at total cost `cost`.
    pub fn push_child(&mut self, parent: NodeId, action: A, state: S, cost: f64) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        self.push(Node {
            state,
            action: Some(action),
            parent: Some(parent),
            cost,
            depth,
        })
    }

    fn push(&mut self, node: Node<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Clone, A: Copy> NodeArena<S, A> {
    /// The steps from the root down to `id`, root first.
    pub fn path(&self, id: NodeId) -> Vec<Step<S, A>> {
        let mut steps = Vec::with_capacity(self.get(id).depth + 1);
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = self.get(ci);
            debug_assert!(node.parent.is_none_or(|p| p.0 < ci.0));
            steps.push(Step {
                action: node.action,
                state: node.state.clone(),
            });
            cur = node.parent;
        }
        steps.reverse();
        steps
    }
}
