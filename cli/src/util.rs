use std::path::Path;

use anyhow::{Context, Result};
use neuronet_core::{LoadReport, NodeId, SparseGraph};
use tracing::debug;

use crate::config::Settings;

/// Map a user-supplied node id onto the graph's id space.
///
/// Negative or oversized values have no node behind them; callers treat
/// `None` as out of range rather than as a parse error.
pub fn resolve_node(raw: i64) -> Option<NodeId> {
    NodeId::try_from(raw).ok()
}

/// Load the edge list at `path` under the configured limits.
pub fn load_graph(path: &Path, settings: &Settings) -> Result<(SparseGraph, LoadReport)> {
    debug!(path = %path.display(), max_memory_mb = settings.max_memory_mb, "opening graph");
    let mut graph = SparseGraph::with_options(settings.load_options());
    let report = graph
        .load(path)
        .with_context(|| format!("loading edge list {}", path.display()))?;
    Ok((graph, report))
}
