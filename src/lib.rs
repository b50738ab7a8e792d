//! Longest relation chain over the condensation of a directed graph.
//!
//! Layers:
//! - domain: graph types and the algorithm ports
//! - infrastructure: algorithm implementations, input parsing, event printing
//! - usecase: the pipeline and its progress events
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
