use crate::search::{Move, NodeId, SearchNode, State};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// A [`SearchSpace`] owns every node created during one search. The map from
/// states to nodes is the visited set: a state is registered once, the first
/// time it is generated, and is never given a second node.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    registered_states: HashMap<State, NodeId>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut nodes = SegVec::new();
        let mut registered_states = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_states.insert(initial_state, root_node_id);
        nodes.push(SearchNode::new_without_parent(root_node_id, initial_state));

        Self {
            root_node_id,
            nodes,
            registered_states,
        }
    }

    /// Return the node of `state`, creating a new one (with status
    /// [`New`](crate::search::SearchNodeStatus::New)) if the state has not
    /// been seen before.
    pub fn insert_or_get_node(
        &mut self,
        state: State,
        transition: Move,
        parent_id: NodeId,
    ) -> &mut SearchNode {
        let node_id = match self.registered_states.get(&state) {
            Some(&node_id) => node_id,
            None => {
                let node_id = NodeId::new(self.nodes.len());
                self.nodes.push(SearchNode::new_with_parent(
                    node_id, state, parent_id, transition,
                ));
                self.registered_states.insert(state, node_id);
                node_id
            }
        };
        self.get_node_mut(node_id)
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    pub fn contains(&self, state: &State) -> bool {
        self.registered_states.contains_key(state)
    }

    /// Number of distinct states seen so far.
    pub fn len(&self) -> usize {
        self.registered_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_states.is_empty()
    }

    /// Nodes from the root to `goal_id`, both included.
    pub fn extract_path(&self, goal_id: NodeId) -> Vec<&SearchNode> {
        let mut path = vec![];
        let mut current = Some(goal_id);
        while let Some(node_id) = current {
            let node = self.get_node(node_id);
            path.push(node);
            current = node.get_parent_id();
        }
        path.reverse();
        path
    }

    /// The moves leading from the root to `goal_id`.
    pub fn extract_plan(&self, goal_id: NodeId) -> Vec<Move> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while let (Some(parent_id), Some(transition)) =
            (current_node.get_parent_id(), current_node.get_transition())
        {
            steps.push(transition);
            current_node = self.get_node(parent_id);
        }
        steps.reverse();
        steps
    }

    /// Number of nodes from `node_id` up to the root, both included.
    pub fn path_length(&self, node_id: NodeId) -> usize {
        let mut length = 0;
        let mut current = Some(node_id);
        while let Some(id) = current {
            length += 1;
            current = self.get_node(id).get_parent_id();
        }
        length
    }
}
