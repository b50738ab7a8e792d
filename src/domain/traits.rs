use crate::domain::graph::{ComponentAssignment, CondensationGraph, Graph};

pub trait SccDecomposer {
    fn decompose(&self, graph: &Graph) -> ComponentAssignment;
}

pub trait LongestPathSolver {
    /// Longest path length (in edges) starting at each vertex.
    fn longest_paths(&self, graph: &CondensationGraph) -> Vec<usize>;

    /// Maximum over all vertices; 0 for an empty or edgeless graph.
    fn solve(&self, graph: &CondensationGraph) -> usize {
        self.longest_paths(graph).into_iter().max().unwrap_or(0)
    }
}
