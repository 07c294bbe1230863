use std::io::{self, Write};

use anyhow::Result;
use neuronet_core::{GraphError, GraphQuery, SparseGraph};
use serde::Serialize;

use crate::output::Render;
use crate::util::resolve_node;

#[derive(Debug, Serialize)]
pub struct VisitRow {
    pub node: u32,
    pub depth: u32,
}

/// BFS result in discovery order.
#[derive(Debug, Serialize)]
pub struct BfsOutput {
    pub start: i64,
    pub max_depth: u32,
    pub count: usize,
    pub visited: Vec<VisitRow>,
}

pub fn run(graph: &SparseGraph, start: i64, max_depth: u32) -> Result<BfsOutput> {
    let Some(node) = resolve_node(start) else {
        return Err(GraphError::StartOutOfRange {
            start,
            node_count: graph.node_count(),
        }
        .into());
    };

    let visited: Vec<VisitRow> = graph
        .bfs_layers(node, max_depth)?
        .into_iter()
        .map(|v| VisitRow {
            node: v.node,
            depth: v.depth,
        })
        .collect();

    Ok(BfsOutput {
        start,
        max_depth,
        count: visited.len(),
        visited,
    })
}

impl Render for BfsOutput {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "BFS from {} (max depth {}): {} nodes",
            self.start, self.max_depth, self.count
        )?;
        writeln!(out, "{:>12} {:>8}", "node", "depth")?;
        for row in &self.visited {
            writeln!(out, "{:>12} {:>8}", row.node, row.depth)?;
        }
        Ok(())
    }
}
