use crate::domain::graph::Graph;
use crate::domain::traits::SccDecomposer;
use serde::Serialize;

/// The SCC partition in external (1-based) numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentReport {
    pub component_count: usize,
    pub components: Vec<Vec<usize>>,
}

pub fn component_report(graph: &Graph, decomposer: &dyn SccDecomposer) -> ComponentReport {
    let assignment = decomposer.decompose(graph);
    let components: Vec<Vec<usize>> = assignment
        .components()
        .into_iter()
        .map(|group| group.into_iter().map(|v| v + 1).collect())
        .collect();

    ComponentReport {
        component_count: assignment.component_count(),
        components,
    }
}
