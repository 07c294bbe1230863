use std::path::PathBuf;

use crate::graph::NodeId;

/// Errors surfaced by graph loading, construction and traversal.
///
/// Malformed edge-list lines and out-of-range ids passed to `degree` or
/// `neighbors` are not errors; they parse leniently or answer 0/empty.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("cannot read edge list '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read edge list: {0}")]
    Read(#[from] std::io::Error),

    #[error("start node {start} is out of range (node_count={node_count})")]
    StartOutOfRange { start: i64, node_count: usize },

    #[error("graph needs ~{required_mb}MB, exceeds max_memory_mb={limit_mb}MB")]
    MemoryLimit { required_mb: usize, limit_mb: usize },

    #[error("edge references node {node}, out of range for node_count={node_count}")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("edge buffer is not sorted by origin at index {index}")]
    Unsorted { index: usize },
}
