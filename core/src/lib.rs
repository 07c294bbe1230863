//! neuronet-core: compressed sparse row graph engine.
//!
//! A pure Rust library that ingests a directed edge list, sorts it by origin,
//! packs it into CSR arrays (offsets + targets) and answers structural
//! queries: degree, neighbors, depth-bounded BFS and the max-degree node.
//! The structure is built once and read-only afterwards.
//!
//! Pipeline: [`EdgeBuffer`] → [`sort_by_origin`] → [`CsrGraph`] →
//! [`bfs`] / [`max_degree_node`] / [`CsrGraph::degree`].

mod error;
mod graph;
mod ingest;
mod query;
mod sort;
mod sparse;
mod traversal;

pub use error::GraphError;
pub use graph::{estimate_csr_bytes, CsrGraph, Edge, NodeId};
pub use ingest::{parse_line, EdgeBuffer, INITIAL_EDGE_CAPACITY};
pub use query::GraphQuery;
pub use sort::{first_unsorted, sort_by_origin};
pub use sparse::{LoadOptions, LoadReport, SparseGraph};
pub use traversal::{
    bfs, bfs_layers, extract_subgraph, max_degree_node, SubgraphEdge, SubgraphResult, Visit,
};
