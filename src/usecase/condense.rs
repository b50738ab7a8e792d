use crate::domain::graph::{ComponentAssignment, CondensationGraph, Graph};

/// Collapses each component into one vertex. Intra-component edges are
/// dropped; parallel inter-component edges are kept.
pub fn build_condensation(graph: &Graph, assignment: &ComponentAssignment) -> CondensationGraph {
    let mut condensed = Graph::new(assignment.component_count());

    for (u, outs) in graph.edges.iter().enumerate() {
        let cu = assignment.component_of(u);
        for &v in outs {
            let cv = assignment.component_of(v);
            if cu != cv {
                condensed.add_edge(cu, cv);
            }
        }
    }

    CondensationGraph::from_acyclic(condensed)
}
