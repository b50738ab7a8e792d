// Domain layer: pure graph types and algorithm ports
pub mod graph;
pub mod traits;
