use crate::usecase::stats::ChainStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    CondensationBuilt {
        nodes: usize,
        edges: usize,
        dropped_edges: usize,
    },

    LongestPathSolved {
        longest_chain: usize,
    },

    Finished {
        stats: ChainStats,
    },
}
