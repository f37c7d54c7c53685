use crate::search::{HeuristicValue, Move, State};
use std::cmp::Ordering;

/// Index of a node in the [`SearchSpace`](crate::search::SearchSpace) it was
/// created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the frontier
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] is a node in the search tree. It contains the state it
/// stands for and the information specific to the search, such as costs and
/// the parent node.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Position of the node in the search space
    node_id: NodeId,
    /// The puzzle configuration of this node
    state: State,
    /// Status of the node
    status: SearchNodeStatus,
    /// G-value of the node, i.e. the number of moves from the initial state.
    /// Greedy search keeps this at zero.
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the moves left.
    h: HeuristicValue,
    /// Move that led to this node
    transition: Option<Move>,
    /// Parent node, `None` for the root
    parent_id: Option<NodeId>,
}

impl SearchNode {
    /// Create the root node of a search. Costs are set when it is opened.
    pub fn new_without_parent(node_id: NodeId, state: State) -> Self {
        Self {
            node_id,
            state,
            status: SearchNodeStatus::New,
            g: 0,
            h: 0,
            transition: None,
            parent_id: None,
        }
    }

    /// Create a node discovered by making `transition` from `parent_id`.
    pub fn new_with_parent(
        node_id: NodeId,
        state: State,
        parent_id: NodeId,
        transition: Move,
    ) -> Self {
        Self {
            node_id,
            state,
            status: SearchNodeStatus::New,
            g: 0,
            h: 0,
            transition: Some(transition),
            parent_id: Some(parent_id),
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
    }

    /// Attach the node to a cheaper parent and put it back in the frontier,
    /// keeping its heuristic value.
    pub fn reopen(&mut self, parent_id: NodeId, transition: Move, g: HeuristicValue) {
        debug_assert!(
            self.parent_id.is_some(),
            "The root node can not be reached more cheaply"
        );
        self.parent_id = Some(parent_id);
        self.transition = Some(transition);
        self.open(g, self.h);
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &State {
        &self.state
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_transition(&self) -> Option<Move> {
        self.transition
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// One-line summary in the form `Instance: 1234567-8, G: 1, H: 0`.
    pub fn summary(&self) -> String {
        format!("Instance: {}, G: {}, H: {}", self.state, self.g, self.h)
    }
}

/// Priority of a node in the frontier of a best-first search. The ordering is
/// given by [`frontier_order`]; smaller keys are expanded first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    f: HeuristicValue,
    g: HeuristicValue,
    /// Insertion counter, makes the order total
    sequence: u64,
}

impl FrontierKey {
    pub fn new(node: &SearchNode, sequence: u64) -> Self {
        Self {
            f: node.get_f(),
            g: node.get_g(),
            sequence,
        }
    }
}

/// Lower `f` first. On equal `f` the deeper node (higher `g`) goes first, and
/// on equal `g` the node inserted earlier goes first.
pub fn frontier_order(a: &FrontierKey, b: &FrontierKey) -> Ordering {
    a.f.cmp(&b.f)
        .then_with(|| b.g.cmp(&a.g))
        .then_with(|| a.sequence.cmp(&b.sequence))
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        frontier_order(self, other)
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
