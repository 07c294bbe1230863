use std::io::{self, Write};

use anyhow::Result;
use neuronet_core::{GraphError, GraphQuery, NodeId, SparseGraph};
use serde::Serialize;

use crate::output::Render;
use crate::util::resolve_node;

#[derive(Debug, Serialize)]
pub struct EdgeRow {
    pub from: NodeId,
    pub to: NodeId,
}

/// Nodes reached by BFS and the edges among them.
#[derive(Debug, Serialize)]
pub struct SubgraphOutput {
    pub start: i64,
    pub max_depth: u32,
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeRow>,
}

pub fn run(graph: &SparseGraph, start: i64, max_depth: u32) -> Result<SubgraphOutput> {
    let Some(node) = resolve_node(start) else {
        return Err(GraphError::StartOutOfRange {
            start,
            node_count: graph.node_count(),
        }
        .into());
    };

    let sub = graph.extract_subgraph(node, max_depth)?;
    let edges: Vec<EdgeRow> = sub
        .edges
        .iter()
        .map(|e| EdgeRow {
            from: e.from,
            to: e.to,
        })
        .collect();

    Ok(SubgraphOutput {
        start,
        max_depth,
        node_count: sub.nodes.len(),
        edge_count: edges.len(),
        nodes: sub.nodes,
        edges,
    })
}

impl Render for SubgraphOutput {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "subgraph from {} (max depth {}): {} nodes, {} edges",
            self.start, self.max_depth, self.node_count, self.edge_count
        )?;
        for e in &self.edges {
            writeln!(out, "{} -> {}", e.from, e.to)?;
        }
        Ok(())
    }
}
