use crate::search::{Move, NodeId, SearchNode, SearchSpace, State};
use itertools::Itertools;

/// The outcome of a successful search: the node at the goal and the search
/// space it lives in, which holds the rest of the path and the visited set.
#[derive(Debug)]
pub struct Solution {
    search_space: SearchSpace,
    goal_id: NodeId,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum PathStyle {
    /// One line per node with its state and costs
    #[default]
    Summary,
    /// A 3×3 grid per step
    Grid,
}

impl Solution {
    pub(crate) fn new(search_space: SearchSpace, goal_id: NodeId) -> Self {
        Self {
            search_space,
            goal_id,
        }
    }

    pub fn goal_node(&self) -> &SearchNode {
        self.search_space.get_node(self.goal_id)
    }

    /// Number of nodes on the path, the root and the goal included.
    pub fn path_length(&self) -> usize {
        self.search_space.path_length(self.goal_id)
    }

    /// Number of moves on the path.
    pub fn num_moves(&self) -> usize {
        self.path_length() - 1
    }

    /// Number of distinct states the search generated.
    pub fn visited_states(&self) -> usize {
        self.search_space.len()
    }

    /// The nodes from the initial state to the goal.
    pub fn path(&self) -> Vec<&SearchNode> {
        self.search_space.extract_path(self.goal_id)
    }

    pub fn states(&self) -> Vec<State> {
        self.path().into_iter().map(|node| *node.get_state()).collect()
    }

    pub fn moves(&self) -> Vec<Move> {
        self.search_space.extract_plan(self.goal_id)
    }

    pub fn render(&self, style: PathStyle) -> String {
        let path = self.path();
        match style {
            PathStyle::Summary => path.iter().map(|node| node.summary()).join("\n"),
            PathStyle::Grid => path
                .iter()
                .map(|node| match node.get_transition() {
                    Some(transition) => {
                        format!("{}\n{}", transition, node.get_state().grid())
                    }
                    None => format!("Start\n{}", node.get_state().grid()),
                })
                .join("\n"),
        }
    }
}
