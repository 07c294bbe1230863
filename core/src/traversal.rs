use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::error::GraphError;
use crate::graph::{CsrGraph, NodeId};

/// A node reached by BFS together with its hop distance from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub node: NodeId,
    pub depth: u32,
}

/// A single edge between two nodes of an extracted subgraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubgraphEdge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Nodes reached from a start node plus the edges among them.
#[derive(Debug, Clone)]
pub struct SubgraphResult {
    /// Visited nodes in discovery order; the start node is first.
    pub nodes: Vec<NodeId>,
    pub edges: Vec<SubgraphEdge>,
}

/// Breadth-first traversal from `start`, at most `max_depth` hops out.
///
/// Returns visited nodes in discovery order: start first, then layer by
/// layer, and within a layer in CSR neighbor order. Nodes at `max_depth` are
/// emitted but not expanded, so `max_depth == 0` yields just `[start]`.
/// Fails only when `start` is not a node of the graph.
pub fn bfs(graph: &CsrGraph, start: NodeId, max_depth: u32) -> Result<Vec<NodeId>, GraphError> {
    Ok(bfs_layers(graph, start, max_depth)?
        .into_iter()
        .map(|v| v.node)
        .collect())
}

/// Same traversal as [`bfs`], keeping the depth at which each node was found.
pub fn bfs_layers(graph: &CsrGraph, start: NodeId, max_depth: u32) -> Result<Vec<Visit>, GraphError> {
    let node_count = graph.node_count();
    if !graph.contains(start) {
        warn!(start, node_count, "BFS start node out of range");
        return Err(GraphError::StartOutOfRange {
            start: i64::from(start),
            node_count,
        });
    }

    let mut visited = vec![false; node_count];
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    let mut out = Vec::new();

    visited[start as usize] = true;
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        out.push(Visit {
            node: current,
            depth,
        });
        if depth >= max_depth {
            continue;
        }

        for &next in graph.row(current).unwrap_or_default() {
            let seen = &mut visited[next as usize];
            if !*seen {
                *seen = true;
                queue.push_back((next, depth + 1));
            }
        }
    }

    debug!(start, max_depth, visited = out.len(), "BFS finished");
    Ok(out)
}

/// Extract the subgraph reachable from `start` within `max_depth` hops.
///
/// Phase 1 runs [`bfs`]. Phase 2 walks the out-edges of each visited node in
/// discovery order and keeps those whose target was also visited. Parallel
/// edges and self-loops are reported as many times as they occur.
pub fn extract_subgraph(
    graph: &CsrGraph,
    start: NodeId,
    max_depth: u32,
) -> Result<SubgraphResult, GraphError> {
    let nodes = bfs(graph, start, max_depth)?;

    let mut in_set = vec![false; graph.node_count()];
    for &n in &nodes {
        in_set[n as usize] = true;
    }

    let mut edges = Vec::new();
    for &from in &nodes {
        for &to in graph.row(from).unwrap_or_default() {
            if in_set[to as usize] {
                edges.push(SubgraphEdge { from, to });
            }
        }
    }

    Ok(SubgraphResult { nodes, edges })
}

/// Node with the highest out-degree.
///
/// Linear scan with a strict `>` against a running best that starts at
/// degree 0: ties keep the lowest id, and a graph whose every degree is 0
/// (or that has no nodes) yields `None`.
pub fn max_degree_node(graph: &CsrGraph) -> Option<NodeId> {
    let mut best: Option<usize> = None;
    let mut best_degree = 0usize;

    for (index, degree) in graph.degrees().enumerate() {
        if degree > best_degree {
            best_degree = degree;
            best = Some(index);
        }
    }
    // Indices stay below node_count, which is at most NodeId::MAX + 1.
    let best = best.and_then(|index| NodeId::try_from(index).ok());

    match best {
        Some(node) => info!(node, degree = best_degree, "max-degree node"),
        None => info!("no node has outgoing edges"),
    }
    best
}
