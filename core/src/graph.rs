use std::mem::size_of;

use tracing::debug;

use crate::error::GraphError;
use crate::ingest::EdgeBuffer;
use crate::sort;

/// Dense node identifier in `[0, node_count)`.
pub type NodeId = u32;

/// A directed edge as read from the edge list. Duplicates are distinct records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub origin: NodeId,
    pub destination: NodeId,
}

/// Immutable compressed sparse row graph.
///
/// `offsets` has length `node_count + 1` and `targets` has length
/// `edge_count`; the out-neighbors of node `i` are
/// `targets[offsets[i]..offsets[i + 1]]`. Both arrays are allocated once by
/// the builder and never resized. Accessors hand out copies, never the
/// arrays themselves.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// `usize` so edge counts past `u32::MAX` still index `targets`.
    offsets: Box<[usize]>,
    targets: Box<[NodeId]>,
}

/// Bytes the two CSR arrays will occupy for the given sizes.
pub fn estimate_csr_bytes(node_count: usize, edge_count: usize) -> usize {
    node_count
        .saturating_add(1)
        .saturating_mul(size_of::<usize>())
        .saturating_add(edge_count.saturating_mul(size_of::<NodeId>()))
}

impl CsrGraph {
    /// Build the CSR arrays from edges already sorted by origin.
    ///
    /// Checks that `edges` is sorted and that every endpoint is below
    /// `node_count` before building.
    pub fn from_sorted_edges(edges: &[Edge], node_count: usize) -> Result<Self, GraphError> {
        if let Some(index) = sort::first_unsorted(edges) {
            return Err(GraphError::Unsorted { index });
        }
        if let Some(bad) = edges
            .iter()
            .flat_map(|e| [e.origin, e.destination])
            .find(|&n| n as usize >= node_count)
        {
            return Err(GraphError::NodeOutOfRange {
                node: bad,
                node_count,
            });
        }

        Ok(Self::build(edges, node_count))
    }

    /// Histogram of origins into `offsets[origin + 1]`, prefix sum, then a
    /// straight copy of destinations in buffer order: the sort already
    /// groups each origin's edges into the slot the offsets describe.
    ///
    /// `edges` must be sorted by origin with every endpoint below `node_count`.
    fn build(edges: &[Edge], node_count: usize) -> Self {
        let mut offsets = vec![0usize; node_count + 1].into_boxed_slice();
        for e in edges {
            offsets[e.origin as usize + 1] += 1;
        }
        for i in 1..=node_count {
            offsets[i] += offsets[i - 1];
        }

        let targets: Box<[NodeId]> = edges.iter().map(|e| e.destination).collect();

        debug!(
            node_count,
            edge_count = targets.len(),
            "built CSR arrays"
        );

        Self { offsets, targets }
    }

    /// Run the full pipeline on an ingested buffer: sort by origin, then build.
    pub fn from_edge_buffer(mut buffer: EdgeBuffer) -> Self {
        let node_count = buffer.node_count();
        sort::sort_by_origin(buffer.edges_mut());
        // Every endpoint is <= the buffer's max id and the sort just ran.
        Self::build(buffer.edges(), node_count)
    }

    /// Build from any edge iterator; convenience over [`EdgeBuffer`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        Self::from_edge_buffer(edges.into_iter().collect())
    }

    /// A graph with no nodes and no edges.
    ///
    /// Stands in for a handle that holds no graph. Building from an empty
    /// edge list gives a different result: node 0 with no edges.
    pub fn empty() -> Self {
        Self {
            offsets: vec![0].into_boxed_slice(),
            targets: Box::new([]),
        }
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Out-degree of `node`, or 0 if `node` is out of range.
    pub fn degree(&self, node: NodeId) -> usize {
        self.row(node).map_or(0, <[NodeId]>::len)
    }

    /// A copy of the out-neighbors of `node`, in CSR order. Empty when
    /// `node` is out of range or has no outgoing edges.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.row(node).map(<[NodeId]>::to_vec).unwrap_or_default()
    }

    /// Out-degree of every node, in id order.
    pub fn degrees(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.offsets.windows(2).map(|w| w[1] - w[0])
    }

    pub fn contains(&self, node: NodeId) -> bool {
        (node as usize) < self.node_count()
    }

    /// Borrow the neighbor slice of `node` for in-crate traversal.
    pub(crate) fn row(&self, node: NodeId) -> Option<&[NodeId]> {
        let i = node as usize;
        if i >= self.node_count() {
            return None;
        }
        Some(&self.targets[self.offsets[i]..self.offsets[i + 1]])
    }

    /// Bytes held by the offset and target arrays.
    pub fn memory_usage(&self) -> usize {
        estimate_csr_bytes(self.node_count(), self.edge_count())
    }

    pub fn memory_usage_mb(&self) -> f64 {
        self.memory_usage() as f64 / (1024.0 * 1024.0)
    }

    #[cfg(test)]
    pub(crate) fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::empty()
    }
}
