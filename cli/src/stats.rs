use std::io::{self, Write};

use neuronet_core::{GraphQuery, LoadReport, NodeId, SparseGraph};
use serde::Serialize;

use crate::output::Render;

/// Load metrics plus the max-degree node, as shown after loading a dataset.
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub source: Option<String>,
    pub node_count: usize,
    pub edge_count: usize,
    pub memory_bytes: usize,
    pub memory_mb: f64,
    pub load_time_ms: f64,
    pub max_degree_node: Option<NodeId>,
    pub max_degree: usize,
}

pub fn run(graph: &SparseGraph, report: &LoadReport) -> StatsOutput {
    let max_degree_node = graph.max_degree_node();
    StatsOutput {
        source: graph.source().map(|p| p.display().to_string()),
        node_count: report.node_count,
        edge_count: report.edge_count,
        memory_bytes: report.memory_bytes,
        memory_mb: report.memory_mb(),
        load_time_ms: report.load_time_ms(),
        max_degree_node,
        max_degree: max_degree_node.map_or(0, |n| graph.degree(n)),
    }
}

impl Render for StatsOutput {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        if let Some(source) = &self.source {
            writeln!(out, "source:          {source}")?;
        }
        writeln!(out, "nodes:           {}", self.node_count)?;
        writeln!(out, "edges:           {}", self.edge_count)?;
        writeln!(out, "memory:          {:.2} MB", self.memory_mb)?;
        writeln!(out, "load time:       {:.2} ms", self.load_time_ms)?;
        match self.max_degree_node {
            Some(node) => writeln!(out, "max-degree node: {node} (degree {})", self.max_degree),
            None => writeln!(out, "max-degree node: none"),
        }
    }
}
