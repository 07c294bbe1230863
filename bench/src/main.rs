use neuronet_core::{bfs, max_degree_node, sort_by_origin, CsrGraph, Edge, EdgeBuffer, NodeId};
use std::collections::VecDeque;
use std::time::Instant;

type Generator = fn(u64) -> Vec<Edge>;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(5_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: neuronet-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  lsystem     Branching tree, ids in breadth-first order (pre-sorted input)");
        println!("  scalefree   Preferential attachment via edge sampling (hub-and-spoke)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense clusters connected by a thin bridge");
        println!("  dla         Diffusion-limited aggregation (organic branching)");
        println!();
        println!("Default node_count: 5000000");
        return;
    }

    println!("neuronet-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "lsystem" => vec![("L-system tree", gen_lsystem)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("L-system tree", gen_lsystem as Generator),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: Generator, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let edges = generator(node_count);
    println!(
        "Generated {} edges in {:.2}s",
        edges.len(),
        t.elapsed().as_secs_f64()
    );

    // Time each pipeline stage separately, then build the graph used below.
    let t = Instant::now();
    let buffer: EdgeBuffer = edges.iter().copied().collect();
    let ingest_time = t.elapsed();

    let mut sorted = buffer.edges().to_vec();
    let t = Instant::now();
    sort_by_origin(&mut sorted);
    let sort_time = t.elapsed();

    let t = Instant::now();
    let graph = CsrGraph::from_edge_buffer(buffer);
    let build_time = t.elapsed();

    println!(
        "ingest {:.1}ms | sort {:.1}ms | sort+build {:.1}ms, {} nodes, {} edges, ~{:.0}MB",
        ingest_time.as_secs_f64() * 1000.0,
        sort_time.as_secs_f64() * 1000.0,
        build_time.as_secs_f64() * 1000.0,
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage_mb()
    );

    // BFS from node 0 (root or seed for every generator)
    println!();
    println!("{:>8} {:>12} {:>10}", "depth", "visited", "time");
    println!("{:->8} {:->12} {:->10}", "", "", "");

    for depth in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let visited = match bfs(&graph, 0, depth) {
            Ok(v) => v.len(),
            Err(e) => {
                eprintln!("bfs failed: {}", e);
                break;
            }
        };
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>8.1}ms",
            depth,
            visited,
            elapsed.as_secs_f64() * 1000.0
        );
        // Stop if we already found everything
        if visited >= graph.node_count() {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    println!();
    let t = Instant::now();
    let best = max_degree_node(&graph);
    let elapsed = t.elapsed();
    match best {
        Some(node) => println!(
            "Max-degree node: {} (degree {}) in {:.1}ms",
            node,
            graph.degree(node),
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!("Max-degree node: none ({:.1}ms)", elapsed.as_secs_f64() * 1000.0),
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn edge(origin: u64, destination: u64) -> Edge {
    Edge {
        origin: origin as NodeId,
        destination: destination as NodeId,
    }
}

/// L-system tree: each node spawns 3 children.
///
/// Edges come out already ordered by origin, which is the worst case for an
/// end-pivot quicksort and exercises the sorter's depth fallback.
fn gen_lsystem(node_count: u64) -> Vec<Edge> {
    let branching = 3u64;
    let mut edges = Vec::with_capacity(node_count as usize);

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                edges.push(edge(parent, next_id));
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    edges
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// A new node links to the endpoint of a randomly picked existing edge, so
/// nodes that already have many edges are picked more often.
fn gen_scale_free(node_count: u64) -> Vec<Edge> {
    let edges_per_node = 10u64;
    let mut edges = Vec::with_capacity((node_count * edges_per_node) as usize);
    let mut rng = FastRng::new(12345);

    let mut endpoints: Vec<u64> = Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    // Seed: small clique, linked both ways so node 0 reaches it
    let seed = 5u64.min(node_count);
    for i in 0..seed {
        for j in 0..seed {
            if i != j {
                edges.push(edge(i, j));
                endpoints.push(i);
                endpoints.push(j);
            }
        }
    }

    for new_node in seed..node_count {
        let attach = edges_per_node.min(new_node);
        for _ in 0..attach {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            // Alternate direction so hubs gain both in- and out-edges.
            if rng.next(2) == 0 {
                edges.push(edge(new_node, target));
            } else {
                edges.push(edge(target, new_node));
            }
            endpoints.push(new_node);
            endpoints.push(target);
        }
    }

    edges
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
fn gen_small_world(node_count: u64) -> Vec<Edge> {
    let k = 10u64; // forward neighbors on the ring
    let p = 0.05f64; // rewire probability
    let mut edges = Vec::with_capacity((node_count * k) as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                edges.push(edge(i, if rewired != i { rewired } else { neighbor }));
            } else {
                edges.push(edge(i, neighbor));
            }
        }
    }

    edges
}

/// Erdos-Renyi: ~10 uniformly random edges per node, no structure.
fn gen_random(node_count: u64) -> Vec<Edge> {
    let target_edges = node_count * 10;
    let mut edges = Vec::with_capacity(target_edges as usize);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        edges.push(edge(rng.next(node_count), rng.next(node_count)));
    }

    edges
}

/// Barbell: two dense clusters joined by a chain of 10 bridge nodes.
fn gen_barbell(node_count: u64) -> Vec<Edge> {
    let bridge_len = 10u64;
    let cluster = node_count.saturating_sub(bridge_len) / 2;
    if cluster < 2 {
        return gen_random(node_count);
    }
    let mut edges = Vec::with_capacity((cluster * 40 + bridge_len) as usize);
    let mut rng = FastRng::new(99999);

    let b_start = cluster + bridge_len;
    for base in [0, b_start] {
        for i in 0..cluster {
            for _ in 0..20u64.min(cluster - 1) {
                let target = rng.next(cluster);
                if target != i {
                    edges.push(edge(base + i, base + target));
                }
            }
        }
    }

    // Bridge: last node of A -> chain -> first node of B
    let mut prev = cluster - 1;
    for id in cluster..b_start {
        edges.push(edge(prev, id));
        prev = id;
    }
    edges.push(edge(prev, b_start));

    edges
}

/// DLA (diffusion-limited aggregation): organic, tree-like growth.
///
/// Each new particle sticks to a recent "surface" node, with an occasional
/// second link that closes a loop.
fn gen_dla(node_count: u64) -> Vec<Edge> {
    let mut edges = Vec::with_capacity((node_count * 2) as usize);
    let mut rng = FastRng::new(77777);

    let surface_max = 10000usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        edges.push(edge(attach_to, new_node));

        // 10% chance of a second connection (creates loops / shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                edges.push(edge(new_node, other));
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    edges
}
