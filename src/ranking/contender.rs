use crate::search::{HeuristicName, SearchEngineName};
use serde::Deserialize;
use strum_macros::EnumIter;

/// A search engine paired with the heuristic it runs with.
#[derive(clap::ValueEnum, Deserialize, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Contender {
    #[clap(name = "bfs")]
    #[serde(rename = "bfs")]
    BreadthFirst,
    GreedyNumDisplaced,
    GreedyManhattan,
    #[clap(name = "astar-num-displaced")]
    #[serde(rename = "astar-num-displaced")]
    AStarNumDisplaced,
    #[clap(name = "astar-manhattan")]
    #[serde(rename = "astar-manhattan")]
    AStarManhattan,
}

impl Contender {
    pub fn engine(&self) -> SearchEngineName {
        match self {
            Contender::BreadthFirst => SearchEngineName::BFS,
            Contender::GreedyNumDisplaced | Contender::GreedyManhattan => SearchEngineName::GBFS,
            Contender::AStarNumDisplaced | Contender::AStarManhattan => SearchEngineName::AStar,
        }
    }

    pub fn heuristic(&self) -> HeuristicName {
        match self {
            Contender::BreadthFirst => HeuristicName::ZeroHeuristic,
            Contender::GreedyNumDisplaced | Contender::AStarNumDisplaced => {
                HeuristicName::NumDisplaced
            }
            Contender::GreedyManhattan | Contender::AStarManhattan => {
                HeuristicName::ManhattanDistance
            }
        }
    }

    pub fn label(&self) -> String {
        let engine = self.engine();
        if engine.is_informed() {
            format!(
                "{} with '{}' heuristic",
                engine.label(),
                self.heuristic().label()
            )
        } else {
            engine.label().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn labels() {
        let labels: Vec<String> = Contender::iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Breadth First Search",
                "Greedy Best First Search with 'Number of Tiles Displaced' heuristic",
                "Greedy Best First Search with 'Manhattan Distance' heuristic",
                "A-Star Search with 'Number of Tiles Displaced' heuristic",
                "A-Star Search with 'Manhattan Distance' heuristic",
            ]
        );
    }
}
