use crate::domain::graph::Graph;
use crate::domain::traits::{LongestPathSolver, SccDecomposer};
use crate::usecase::condense::build_condensation;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::ChainStats;
use tokio::sync::mpsc;

/// Runs decompose -> condense -> solve on `graph`, reporting each phase on `sink`.
pub async fn longest_relation_chain(
    graph: &Graph,
    decomposer: &dyn SccDecomposer,
    solver: &dyn LongestPathSolver,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> ChainStats {
    let mut stats = ChainStats {
        people: graph.node_count(),
        relations: graph.edge_count(),
        ..ChainStats::default()
    };

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let assignment = decomposer.decompose(graph);
    stats.components = assignment.component_count();
    stats.cyclic_components = assignment.cyclic_components(graph);
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: stats.people,
            edges: stats.relations,
            components: stats.components,
            cyclic_components: stats.cyclic_components,
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "condense".into(),
        },
    )
    .await;
    let condensed = build_condensation(graph, &assignment);
    stats.condensed_relations = condensed.graph().edge_count();
    emit(
        &sink,
        AppEvent::CondensationBuilt {
            nodes: condensed.graph().node_count(),
            edges: stats.condensed_relations,
            dropped_edges: stats.relations - stats.condensed_relations,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "condense".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "longest_path".into(),
        },
    )
    .await;
    stats.longest_chain = solver.solve(&condensed);
    emit(
        &sink,
        AppEvent::LongestPathSolved {
            longest_chain: stats.longest_chain,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "longest_path".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    stats
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
