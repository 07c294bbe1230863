use crate::error::GraphError;
use crate::graph::{CsrGraph, NodeId};
use crate::traversal;

/// Read-only structural queries over a loaded graph.
///
/// Callers that want to swap graph representations program against this
/// trait and pick the concrete type when they construct the graph.
pub trait GraphQuery {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Out-degree, or 0 for ids outside the graph.
    fn degree(&self, node: NodeId) -> usize;

    /// Copy of the out-neighbors; empty for ids outside the graph.
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;

    /// Nodes within `max_depth` hops of `start`, in discovery order.
    fn bfs(&self, start: NodeId, max_depth: u32) -> Result<Vec<NodeId>, GraphError>;

    fn max_degree_node(&self) -> Option<NodeId>;

    /// Approximate bytes held by the representation.
    fn memory_usage(&self) -> usize;
}

impl GraphQuery for CsrGraph {
    fn node_count(&self) -> usize {
        CsrGraph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        CsrGraph::edge_count(self)
    }

    fn degree(&self, node: NodeId) -> usize {
        CsrGraph::degree(self, node)
    }

    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        CsrGraph::neighbors(self, node)
    }

    fn bfs(&self, start: NodeId, max_depth: u32) -> Result<Vec<NodeId>, GraphError> {
        traversal::bfs(self, start, max_depth)
    }

    fn max_degree_node(&self) -> Option<NodeId> {
        traversal::max_degree_node(self)
    }

    fn memory_usage(&self) -> usize {
        CsrGraph::memory_usage(self)
    }
}
