use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::error::GraphError;
use crate::graph::{estimate_csr_bytes, CsrGraph, NodeId};
use crate::ingest::EdgeBuffer;
use crate::query::GraphQuery;
use crate::traversal;

const BYTES_PER_MB: usize = 1024 * 1024;

/// Knobs applied while loading an edge list.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Refuse graphs whose CSR arrays would exceed this many MB. `None` = no cap.
    pub max_memory_mb: Option<usize>,
}

/// Summary of a successful load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub memory_bytes: usize,
    pub load_time: Duration,
}

impl LoadReport {
    pub fn memory_mb(&self) -> f64 {
        self.memory_bytes as f64 / BYTES_PER_MB as f64
    }

    pub fn load_time_ms(&self) -> f64 {
        self.load_time.as_secs_f64() * 1000.0
    }
}

/// The loaded graph plus where it came from.
#[derive(Debug)]
struct LoadedGraph {
    csr: CsrGraph,
    source: Option<PathBuf>,
}

/// Loadable sparse graph handle.
///
/// Starts out "never loaded". A successful [`load`](Self::load) replaces the
/// current graph; a failed one drops it, so no partial structure is ever
/// queryable. While unloaded every query answers as an empty graph.
#[derive(Debug, Default)]
pub struct SparseGraph {
    options: LoadOptions,
    state: Option<LoadedGraph>,
}

impl SparseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self {
            options,
            state: None,
        }
    }

    /// Load an edge-list file, replacing any previously loaded graph.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, GraphError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading edge list");

        let file = match File::open(path) {
            Ok(f) => f,
            Err(source) => {
                self.state = None;
                warn!(path = %path.display(), error = %source, "cannot open edge list");
                return Err(GraphError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        self.load_from(BufReader::new(file), Some(path.to_path_buf()))
    }

    /// Load an edge list from any buffered reader.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadReport, GraphError> {
        self.load_from(reader, None)
    }

    fn load_from<R: BufRead>(
        &mut self,
        reader: R,
        source: Option<PathBuf>,
    ) -> Result<LoadReport, GraphError> {
        self.state = None;
        let start = Instant::now();

        let mut buffer = EdgeBuffer::new();
        if let Err(e) = buffer.ingest_reader(reader) {
            warn!(error = %e, "edge list read failed");
            return Err(GraphError::Read(e));
        }

        let required = estimate_csr_bytes(buffer.node_count(), buffer.len());
        if let Some(limit_mb) = self.options.max_memory_mb {
            let required_mb = required.div_ceil(BYTES_PER_MB);
            if required_mb > limit_mb {
                warn!(required_mb, limit_mb, "graph exceeds memory limit");
                return Err(GraphError::MemoryLimit {
                    required_mb,
                    limit_mb,
                });
            }
        }

        let csr = CsrGraph::from_edge_buffer(buffer);
        let report = LoadReport {
            node_count: csr.node_count(),
            edge_count: csr.edge_count(),
            memory_bytes: csr.memory_usage(),
            load_time: start.elapsed(),
        };

        info!(
            nodes = report.node_count,
            edges = report.edge_count,
            memory_mb = report.memory_mb(),
            load_ms = report.load_time_ms(),
            "CSR graph loaded"
        );

        self.state = Some(LoadedGraph { csr, source });
        Ok(report)
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }

    /// The underlying CSR graph, if one is loaded.
    pub fn csr(&self) -> Option<&CsrGraph> {
        self.state.as_ref().map(|s| &s.csr)
    }

    /// Path of the file behind the current graph; `None` for reader loads.
    pub fn source(&self) -> Option<&Path> {
        self.state.as_ref().and_then(|s| s.source.as_deref())
    }

    pub fn options(&self) -> LoadOptions {
        self.options
    }

    /// BFS that also reports each node's depth.
    pub fn bfs_layers(&self, start: NodeId, max_depth: u32) -> Result<Vec<traversal::Visit>, GraphError> {
        traversal::bfs_layers(self.csr_or_empty(), start, max_depth)
    }

    pub fn extract_subgraph(
        &self,
        start: NodeId,
        max_depth: u32,
    ) -> Result<traversal::SubgraphResult, GraphError> {
        traversal::extract_subgraph(self.csr_or_empty(), start, max_depth)
    }

    fn csr_or_empty(&self) -> &CsrGraph {
        static EMPTY: std::sync::OnceLock<CsrGraph> = std::sync::OnceLock::new();
        match self.csr() {
            Some(csr) => csr,
            None => EMPTY.get_or_init(CsrGraph::empty),
        }
    }
}

impl GraphQuery for SparseGraph {
    fn node_count(&self) -> usize {
        self.csr().map_or(0, CsrGraph::node_count)
    }

    fn edge_count(&self) -> usize {
        self.csr().map_or(0, CsrGraph::edge_count)
    }

    fn degree(&self, node: NodeId) -> usize {
        self.csr().map_or(0, |g| g.degree(node))
    }

    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.csr().map(|g| g.neighbors(node)).unwrap_or_default()
    }

    fn bfs(&self, start: NodeId, max_depth: u32) -> Result<Vec<NodeId>, GraphError> {
        traversal::bfs(self.csr_or_empty(), start, max_depth)
    }

    fn max_degree_node(&self) -> Option<NodeId> {
        self.csr().and_then(traversal::max_degree_node)
    }

    fn memory_usage(&self) -> usize {
        self.csr().map_or(0, CsrGraph::memory_usage)
    }
}
