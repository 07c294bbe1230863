use std::io::{self, Write};

use neuronet_core::{GraphQuery, NodeId, SparseGraph};
use serde::Serialize;

use crate::output::Render;
use crate::util::resolve_node;

#[derive(Debug, Serialize)]
pub struct NeighborsOutput {
    pub node: i64,
    pub count: usize,
    pub neighbors: Vec<NodeId>,
}

/// Out-neighbors of `node` in CSR order; empty outside the graph.
pub fn run(graph: &SparseGraph, node: i64) -> NeighborsOutput {
    let neighbors = resolve_node(node)
        .map(|n| graph.neighbors(n))
        .unwrap_or_default();
    NeighborsOutput {
        node,
        count: neighbors.len(),
        neighbors,
    }
}

impl Render for NeighborsOutput {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "node {}: {} neighbors", self.node, self.count)?;
        for n in &self.neighbors {
            writeln!(out, "  {n}")?;
        }
        Ok(())
    }
}
