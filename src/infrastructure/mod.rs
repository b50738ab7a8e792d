// Infrastructure layer: algorithm implementations, input parsing, eventing
pub mod edge_list_reader;
pub mod event_ndjson;
pub mod longest_path_memo;
pub mod scc_tarjan;
