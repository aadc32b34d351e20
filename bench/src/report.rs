use serde::Serialize;

use crate::config::OutputFormat;

/// Output of the `demo` subcommand.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub from: String,
    pub to: String,
    pub shortest_path: Vec<String>,
    pub max_degree: String,
    pub cyclic: bool,
    pub adjacency: String,
}

#[derive(Debug, Serialize)]
pub struct DepthRow {
    pub depth: u32,
    pub found: usize,
    pub visited: usize,
    pub ms: f64,
}

#[derive(Debug, Serialize)]
pub struct PathRow {
    pub from: String,
    pub to: String,
    /// None when no path exists.
    pub hops: Option<usize>,
    pub ms: f64,
}

#[derive(Debug, Serialize)]
pub struct DegreeRow {
    pub vertex: String,
    pub degree: usize,
    pub ms: f64,
}

/// Output of one generator under the `run` subcommand.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub generator: String,
    pub target_nodes: u64,
    pub vertices: usize,
    pub edges: usize,
    pub memory_mb: f64,
    pub generate_secs: f64,
    pub depths: Vec<DepthRow>,
    /// Set when a depth already reached every vertex and deeper runs were skipped.
    pub entire_graph_reached: bool,
    pub shortest_path: PathRow,
    pub max_degree: Option<DegreeRow>,
    pub cyclic: bool,
    pub cycle_ms: f64,
}

pub fn print_demo(report: &DemoReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            println!(
                "Shortest path {} → {}: {}",
                report.from,
                report.to,
                report.shortest_path.join(" → ")
            );
            println!("Max degree: {}", report.max_degree);
            println!("Cyclic: {}", report.cyclic);
            print!("adjList:\n{}", report.adjacency);
        }
    }
    Ok(())
}

pub fn print_bench(report: &BenchReport, format: OutputFormat) -> anyhow::Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("--- {} ---", report.generator);
    println!("Target: {} nodes", report.target_nodes);
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.0}MB",
        report.generate_secs, report.vertices, report.edges, report.memory_mb
    );

    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "depth", "found", "visited", "time");
    println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");
    for row in &report.depths {
        println!(
            "{:>8} {:>12} {:>12} {:>8.1}ms",
            row.depth, row.found, row.visited, row.ms
        );
    }
    if report.entire_graph_reached {
        println!("{:>8} (entire graph reached)", "");
    }

    println!();
    let sp = &report.shortest_path;
    match sp.hops {
        Some(hops) => println!(
            "Shortest path {} → {}: {} hops in {:.1}ms",
            sp.from, sp.to, hops, sp.ms
        ),
        None => println!("Shortest path {} → {}: no path ({:.1}ms)", sp.from, sp.to, sp.ms),
    }
    if let Some(md) = &report.max_degree {
        println!("Max degree: {} (degree {}) in {:.1}ms", md.vertex, md.degree, md.ms);
    }
    println!("Cyclic: {} ({:.1}ms)", report.cyclic, report.cycle_ms);
    println!();
    Ok(())
}
