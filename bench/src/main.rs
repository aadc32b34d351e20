//! simple-graph-bench: demo driver and synthetic-topology benchmark for
//! simple-graph-core.
//!
//! - `demo`: builds the small sample graph and prints a shortest path, the
//!   max-degree vertex, cycle detection and the adjacency list.
//! - `run`: generates large deterministic graphs and times the core queries.
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use simple_graph_core::{bfs_neighborhood, has_cycle, max_degree, shortest_path, Graph};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod generators;
mod report;

use config::{OutputFormat, RunConfig};
use report::{BenchReport, DegreeRow, DemoReport, DepthRow, PathRow};

const DEPTHS: [u32; 7] = [1, 2, 3, 5, 10, 20, 50];

#[derive(Parser)]
#[command(name = "simple-graph-bench")]
#[command(version)]
#[command(about = "Demo driver and benchmark for the simple-graph engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample graph and print query results
    Demo {
        /// Report format
        #[arg(long, env = "SIMPLE_GRAPH_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Generate synthetic topologies and benchmark each
    Run(RunConfig),
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { format } => report::print_demo(&run_demo()?, format),
        Commands::Run(config) => {
            config.validate()?;
            info!(mode = ?config.mode, nodes = config.nodes, seed = config.seed, "starting benchmark");
            for (name, generator) in generators::for_mode(config.mode) {
                let report = run_benchmark(name, generator, &config);
                report::print_bench(&report, config.format)?;
            }
            Ok(())
        }
    }
}

/// A–B, A–C, C–D, D–E, D–G, E–G plus isolated H.
fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    graph.load_edges([
        ("A", "B"),
        ("A", "C"),
        ("C", "D"),
        ("D", "E"),
        ("D", "G"),
        ("E", "G"),
    ]);
    graph.add_vertex("H");
    graph
}

fn run_demo() -> anyhow::Result<DemoReport> {
    let graph = sample_graph();
    let (from, to) = ("A", "G");

    let path = shortest_path(&graph, from, to).context("demo shortest path")?;
    let hub = max_degree(&graph).context("demo max degree")?;

    Ok(DemoReport {
        from: from.to_string(),
        to: to.to_string(),
        shortest_path: path.iter().map(|v| v.name().to_string()).collect(),
        max_degree: hub.name().to_string(),
        cyclic: has_cycle(&graph),
        adjacency: graph.to_string(),
    })
}

fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: generators::Generator, config: &RunConfig) -> BenchReport {
    let t = Instant::now();
    let graph = generator(config.nodes, config.seed);
    let generate_secs = t.elapsed().as_secs_f64();
    info!(
        generator = name,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph generated"
    );

    // BFS from v0 (the root or first hub in every generator)
    let start = "v0";
    let mut depths = Vec::new();
    let mut entire_graph_reached = false;
    for depth in DEPTHS {
        let t = Instant::now();
        let result = bfs_neighborhood(&graph, start, depth);
        depths.push(DepthRow {
            depth,
            found: result.neighbors.len(),
            visited: result.vertices_visited,
            ms: elapsed_ms(t),
        });
        // Stop if we already found everything
        if result.vertices_visited >= graph.vertex_count() {
            entire_graph_reached = true;
            break;
        }
    }

    // Shortest path: first vertex to last inserted vertex
    let far = graph
        .all_vertices()
        .last()
        .map(|v| v.name().to_string())
        .unwrap_or_else(|| start.to_string());
    let t = Instant::now();
    let hops = shortest_path(&graph, start, &far).ok().map(|p| p.len() - 1);
    let shortest = PathRow {
        from: start.to_string(),
        to: far,
        hops,
        ms: elapsed_ms(t),
    };

    let t = Instant::now();
    let hub = max_degree(&graph).ok().map(|v| DegreeRow {
        vertex: v.name().to_string(),
        degree: graph.degree(v.name()).unwrap_or(0),
        ms: elapsed_ms(t),
    });

    let t = Instant::now();
    let cyclic = has_cycle(&graph);
    let cycle_ms = elapsed_ms(t);

    BenchReport {
        generator: name.to_string(),
        target_nodes: config.nodes,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        memory_mb: graph.memory_usage() as f64 / 1_048_576.0,
        generate_secs,
        depths,
        entire_graph_reached,
        shortest_path: shortest,
        max_degree: hub,
        cyclic,
        cycle_ms,
    }
}
