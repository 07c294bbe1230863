use std::io::{self, Write};

use neuronet_core::{GraphQuery, NodeId, SparseGraph};
use serde::Serialize;

use crate::output::Render;
use crate::util::resolve_node;

#[derive(Debug, Serialize)]
pub struct DegreeRow {
    pub node: i64,
    pub degree: usize,
}

#[derive(Debug, Serialize)]
pub struct DegreeOutput {
    pub degrees: Vec<DegreeRow>,
}

/// Out-degree of each requested node; ids outside the graph report 0.
pub fn run(graph: &SparseGraph, nodes: &[i64]) -> DegreeOutput {
    let degrees = nodes
        .iter()
        .map(|&node| DegreeRow {
            node,
            degree: resolve_node(node).map_or(0, |n| graph.degree(n)),
        })
        .collect();
    DegreeOutput { degrees }
}

impl Render for DegreeOutput {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{:>12} {:>10}", "node", "degree")?;
        for row in &self.degrees {
            writeln!(out, "{:>12} {:>10}", row.node, row.degree)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MaxDegreeOutput {
    /// `None` when no node has an outgoing edge.
    pub node: Option<NodeId>,
    pub degree: usize,
}

pub fn run_max(graph: &SparseGraph) -> MaxDegreeOutput {
    let node = graph.max_degree_node();
    MaxDegreeOutput {
        node,
        degree: node.map_or(0, |n| graph.degree(n)),
    }
}

impl Render for MaxDegreeOutput {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        match self.node {
            Some(node) => writeln!(out, "{node} (degree {})", self.degree),
            None => writeln!(out, "none (no node has outgoing edges)"),
        }
    }
}
