//! neuronet: command-line front end for the CSR graph engine.
//!
//! Loads an edge list, builds the CSR structure and answers one query per
//! invocation. Results go to stdout (text or `--json`); logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod config;
mod degree;
mod neighborhood;
mod neighbors;
mod output;
mod stats;
mod subgraph;
mod util;

use config::{Settings, DEFAULT_BFS_DEPTH};
use output::emit;

#[derive(Parser, Debug)]
#[command(version, about = "Query large directed graphs stored in CSR form")]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the edge list and report size, memory, load time and max-degree node
    Stats(GraphArgs),
    /// Breadth-first traversal from a start node, bounded by depth
    Bfs(TraverseArgs),
    /// Out-degree of one or more nodes
    Degree(DegreeArgs),
    /// Out-neighbors of a node
    Neighbors(NodeArgs),
    /// Node with the most outgoing edges
    MaxDegree(GraphArgs),
    /// BFS-reachable nodes plus the edges among them
    Subgraph(TraverseArgs),
}

#[derive(clap::Args, Debug)]
struct GraphArgs {
    /// Edge-list file: one "<origin> <destination>" pair per line
    path: PathBuf,
}

#[derive(clap::Args, Debug)]
struct TraverseArgs {
    /// Edge-list file
    path: PathBuf,

    /// Start node id
    #[arg(short, long, allow_negative_numbers = true)]
    start: i64,

    /// Maximum number of hops from the start node
    #[arg(short, long, default_value_t = DEFAULT_BFS_DEPTH)]
    depth: u32,
}

#[derive(clap::Args, Debug)]
struct DegreeArgs {
    /// Edge-list file
    path: PathBuf,

    /// Node ids to query
    #[arg(required = true, allow_negative_numbers = true)]
    nodes: Vec<i64>,
}

#[derive(clap::Args, Debug)]
struct NodeArgs {
    /// Edge-list file
    path: PathBuf,

    /// Node id to query
    #[arg(allow_negative_numbers = true)]
    node: i64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.settings.log_level())),
        )
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let settings = &cli.settings;
    let json = settings.json;

    match cli.cmd {
        Command::Stats(args) => {
            let (graph, report) = util::load_graph(&args.path, settings)?;
            emit(&stats::run(&graph, &report), json, out)
        }
        Command::Bfs(args) => {
            let (graph, _) = util::load_graph(&args.path, settings)?;
            emit(&neighborhood::run(&graph, args.start, args.depth)?, json, out)
        }
        Command::Degree(args) => {
            let (graph, _) = util::load_graph(&args.path, settings)?;
            emit(&degree::run(&graph, &args.nodes), json, out)
        }
        Command::Neighbors(args) => {
            let (graph, _) = util::load_graph(&args.path, settings)?;
            emit(&neighbors::run(&graph, args.node), json, out)
        }
        Command::MaxDegree(args) => {
            let (graph, _) = util::load_graph(&args.path, settings)?;
            emit(&degree::run_max(&graph), json, out)
        }
        Command::Subgraph(args) => {
            let (graph, _) = util::load_graph(&args.path, settings)?;
            emit(&subgraph::run(&graph, args.start, args.depth)?, json, out)
        }
    }
}
