// Generators: all O(n) or O(n + edges), single-threaded, deterministic for a
// given seed. Vertices are named `v<index>` and created in index order, so
// `v0` is the first vertex and the highest index the last.

use std::collections::VecDeque;

use simple_graph_core::Graph;

use crate::config::Mode;

pub type Generator = fn(u64, u64) -> Graph;

/// Generators selected by `mode`, with display names.
pub fn for_mode(mode: Mode) -> Vec<(&'static str, Generator)> {
    match mode {
        Mode::Lsystem => vec![("L-system tree", gen_lsystem as Generator)],
        Mode::Scalefree => vec![("Scale-free (edge sampling)", gen_scale_free as Generator)],
        Mode::Smallworld => vec![("Small-world (Watts-Strogatz)", gen_small_world as Generator)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random as Generator)],
        Mode::Barbell => vec![("Barbell (clique-bridge-clique)", gen_barbell as Generator)],
        Mode::Dla => vec![("DLA (organic branching)", gen_dla as Generator)],
        Mode::All => vec![
            ("L-system tree", gen_lsystem as Generator),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
    }
}

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

fn name(i: u64) -> String {
    format!("v{}", i)
}

fn connect(graph: &mut Graph, a: u64, b: u64) {
    graph.add_edge(&name(a), &name(b));
}

/// L-system fractal tree: deep branching with self-similar structure.
///
/// Each vertex spawns three children. Log depth, exponential width.
/// Tests deep BFS and path reconstruction.
pub fn gen_lsystem(node_count: u64, _seed: u64) -> Graph {
    let mut graph = Graph::with_capacity(node_count as usize);
    let branching = 3u64;
    graph.add_vertex(&name(0));

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                connect(&mut graph, parent, child);
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Preferential attachment by picking a random existing edge endpoint, so
/// vertices with more edges are more likely to gain another.
pub fn gen_scale_free(node_count: u64, seed: u64) -> Graph {
    let edges_per_node = 10u64;
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 12345);

    let mut edge_endpoints: Vec<u64> =
        Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    // Seed: small clique
    let clique = 5u64.min(node_count);
    for i in 0..clique {
        graph.add_vertex(&name(i));
    }
    for i in 0..clique {
        for j in (i + 1)..clique {
            connect(&mut graph, i, j);
            edge_endpoints.push(i);
            edge_endpoints.push(j);
        }
    }

    for new_node in clique..node_count {
        graph.add_vertex(&name(new_node));
        if edge_endpoints.is_empty() {
            continue;
        }

        for _ in 0..edges_per_node.min(new_node) {
            let idx = rng.next(edge_endpoints.len() as u64) as usize;
            let target = edge_endpoints[idx];
            if target != new_node {
                connect(&mut graph, new_node, target);
                edge_endpoints.push(new_node);
                edge_endpoints.push(target);
            }
        }
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each vertex links to its K nearest ring neighbors, each link rewired to a
/// random vertex with probability p. High clustering, short paths.
pub fn gen_small_world(node_count: u64, seed: u64) -> Graph {
    let k = 10u64;
    let p = 0.05f64;
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 67890);

    for i in 0..node_count {
        graph.add_vertex(&name(i));
    }

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            let target = if rng.next_f64() < p {
                rng.next(node_count)
            } else {
                neighbor
            };
            if target != i {
                connect(&mut graph, i, target);
            }
        }
    }

    graph
}

/// Erdos-Renyi: uniform random edges, ~10 per vertex. No structure.
pub fn gen_random(node_count: u64, seed: u64) -> Graph {
    let target_edges = node_count * 10;
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 54321);

    for i in 0..node_count {
        graph.add_vertex(&name(i));
    }

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            connect(&mut graph, from, to);
        }
    }

    graph
}

/// Barbell: two dense cliques connected by a thin bridge.
///
/// Worst case for "find path through bottleneck": every path from one side
/// to the other crosses the whole bridge chain.
pub fn gen_barbell(node_count: u64, seed: u64) -> Graph {
    let bridge_len = (node_count / 4).clamp(1, 10);
    let clique_size = ((node_count - bridge_len) / 2).max(1);
    let links = 20u64.min(clique_size - 1);
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 99999);

    // Clique A: 0..clique_size
    for i in 0..clique_size {
        graph.add_vertex(&name(i));
    }
    for i in 0..clique_size {
        for _ in 0..links {
            let target = rng.next(clique_size);
            if target != i {
                connect(&mut graph, i, target);
            }
        }
    }

    // Bridge: chain hanging off the last vertex of A
    let bridge_start = clique_size;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        connect(&mut graph, id - 1, id);
    }

    // Clique B: after the bridge, attached to its last vertex
    let b_start = bridge_start + bridge_len;
    for i in 0..clique_size {
        graph.add_vertex(&name(b_start + i));
    }
    connect(&mut graph, b_start - 1, b_start);

    for i in 0..clique_size {
        for _ in 0..links {
            let target = rng.next(clique_size);
            if target != i {
                connect(&mut graph, b_start + i, b_start + target);
            }
        }
    }

    graph
}

/// DLA (Diffusion-Limited Aggregation): organic branching growth.
///
/// Each new vertex attaches to a random vertex on the recent "surface",
/// with an occasional second long-range link that closes a loop.
pub fn gen_dla(node_count: u64, seed: u64) -> Graph {
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 77777);

    graph.add_vertex(&name(0));

    // Surface: recent additions new particles attach to.
    // VecDeque for O(1) eviction of the oldest entry.
    let surface_max = 10000usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        connect(&mut graph, new_node, attach_to);

        // 10% chance of a second connection (creates loops / shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                connect(&mut graph, new_node, other);
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    graph
}
