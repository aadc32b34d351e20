use std::collections::VecDeque;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::vertex::{Vertex, VertexId, Visit, VisitState};

/// A vertex found during BFS neighborhood traversal.
#[derive(Debug, Clone)]
pub struct NeighborResult<'g> {
    pub vertex: &'g Vertex,
    pub distance: u32,
}

/// Result of a neighborhood traversal.
#[derive(Debug)]
pub struct TraversalResult<'g> {
    /// Reached vertices in discovery order, excluding the start vertex.
    pub neighbors: Vec<NeighborResult<'g>>,
    pub vertices_visited: usize,
}

/// Degree information for a single vertex.
#[derive(Debug, Clone)]
pub struct DegreeResult<'g> {
    pub vertex: &'g Vertex,
    pub degree: usize,
}

/// Breadth-first search state for one source. Owned by the caller, so any
/// number of searches can run against the same `&Graph`.
#[derive(Debug)]
pub struct SearchTree {
    source: VertexId,
    visits: Vec<Visit>,
    /// Reached vertices in discovery order, source first.
    order: Vec<VertexId>,
}

impl SearchTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Traversal record for `id`, or None if `id` is not a vertex of the
    /// searched graph.
    pub fn visit(&self, id: VertexId) -> Option<&Visit> {
        self.visits.get(id as usize)
    }

    pub fn reached(&self, id: VertexId) -> bool {
        self.visit(id)
            .is_some_and(|v| v.visit_state() != VisitState::Unvisited)
    }

    /// Reached vertices in discovery order, source first.
    pub fn discovery_order(&self) -> &[VertexId] {
        &self.order
    }

    /// Walk predecessor links from `target` back to the source and return the
    /// path source-first. None if `target` was not reached.
    ///
    /// The walk is bounded by the number of vertices, so a broken chain can
    /// never loop.
    pub fn path_to<'g>(&self, graph: &'g Graph, target: VertexId) -> Option<Vec<&'g Vertex>> {
        if !self.reached(target) {
            return None;
        }

        let mut stack = Vec::new();
        let mut current = target;
        for _ in 0..self.visits.len() {
            stack.push(current);
            if current == self.source {
                let mut path = Vec::with_capacity(stack.len());
                while let Some(id) = stack.pop() {
                    path.push(graph.vertex(id)?);
                }
                return Some(path);
            }
            current = self.visits[current as usize].predecessor()?;
        }
        None
    }
}

/// Core BFS loop. Expands from `source` through vertices still unvisited in
/// `visits`, appending each newly discovered vertex to `order`. Vertices at
/// `max_depth` are finished without expanding their neighbors.
fn expand(
    graph: &Graph,
    visits: &mut [Visit],
    order: &mut Vec<VertexId>,
    source: VertexId,
    max_depth: u32,
) {
    let start = &mut visits[source as usize];
    start.mark_discovered();
    start.set_predecessor(None);
    start.set_distance(0);
    order.push(source);

    let mut queue: VecDeque<VertexId> = VecDeque::new();
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let depth = visits[current as usize].distance();
        if depth < max_depth {
            for &w in graph.neighbor_ids(current) {
                let next = &mut visits[w as usize];
                if next.visit_state() == VisitState::Unvisited {
                    next.mark_discovered();
                    next.set_predecessor(Some(current));
                    next.set_distance(depth + 1);
                    order.push(w);
                    queue.push_back(w);
                }
            }
        }
        visits[current as usize].mark_finished();
    }
}

fn search(graph: &Graph, source: VertexId, max_depth: u32) -> SearchTree {
    let mut visits = vec![Visit::new(); graph.vertex_count()];
    let mut order = Vec::new();
    expand(graph, &mut visits, &mut order, source, max_depth);
    SearchTree {
        source,
        visits,
        order,
    }
}

/// Full BFS from `source`: the tree of every vertex reachable from it.
pub fn breadth_first(graph: &Graph, source: &str) -> Result<SearchTree> {
    let src = graph
        .get_vertex(source)
        .ok_or_else(|| GraphError::VertexNotFound(source.to_string()))?;
    Ok(search(graph, src.id(), u32::MAX))
}

/// BFS neighborhood: every vertex reachable from `start` within `max_depth` hops.
///
/// Each vertex is reported once, at its minimum distance. Empty if `start`
/// is not in the graph.
pub fn bfs_neighborhood<'g>(graph: &'g Graph, start: &str, max_depth: u32) -> TraversalResult<'g> {
    let Some(src) = graph.get_vertex(start) else {
        return TraversalResult {
            neighbors: Vec::new(),
            vertices_visited: 0,
        };
    };

    let tree = search(graph, src.id(), max_depth);
    let neighbors = tree
        .discovery_order()
        .iter()
        .skip(1)
        .filter_map(|&id| {
            let vertex = graph.vertex(id)?;
            let distance = tree.visit(id)?.distance();
            Some(NeighborResult { vertex, distance })
        })
        .collect();

    TraversalResult {
        neighbors,
        vertices_visited: tree.discovery_order().len(),
    }
}

/// Shortest path from `source` to `target` by BFS (unweighted).
///
/// Returns the vertices along the path including both endpoints, so a path
/// of `n` edges has `n + 1` entries and `source == target` yields `[source]`.
/// Among equally short paths, the one through earlier-inserted vertices wins.
pub fn shortest_path<'g>(graph: &'g Graph, source: &str, target: &str) -> Result<Vec<&'g Vertex>> {
    let tgt = graph
        .get_vertex(target)
        .ok_or_else(|| GraphError::VertexNotFound(target.to_string()))?;
    let tree = breadth_first(graph, source)?;

    debug!(
        source,
        target,
        reached = tree.discovery_order().len(),
        "shortest_path search complete"
    );

    tree.path_to(graph, tgt.id()).ok_or_else(|| GraphError::NoPath {
        from: source.to_string(),
        to: target.to_string(),
    })
}

/// Vertex with the largest adjacency set. Ties go to the earliest-inserted
/// vertex.
pub fn max_degree(graph: &Graph) -> Result<&Vertex> {
    let mut best: Option<(&Vertex, usize)> = None;
    for v in graph.all_vertices() {
        let degree = graph.neighbor_ids(v.id()).len();
        if best.map_or(true, |(_, d)| degree > d) {
            best = Some((v, degree));
        }
    }
    best.map(|(v, _)| v).ok_or(GraphError::EmptyGraph)
}

/// Vertices ranked by degree, highest first, ties in insertion order.
/// `top_n == 0` returns every vertex.
pub fn degree_centrality(graph: &Graph, top_n: usize) -> Vec<DegreeResult<'_>> {
    let mut results: Vec<DegreeResult> = graph
        .all_vertices()
        .map(|v| DegreeResult {
            vertex: v,
            degree: graph.neighbor_ids(v.id()).len(),
        })
        .collect();

    // Stable sort keeps insertion order within equal degrees
    results.sort_by(|a, b| b.degree.cmp(&a.degree));

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}

/// Number of connected components.
pub fn component_count(graph: &Graph) -> usize {
    let mut visits = vec![Visit::new(); graph.vertex_count()];
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut components = 0;

    for v in graph.all_vertices() {
        if visits[v.id() as usize].visit_state() == VisitState::Unvisited {
            expand(graph, &mut visits, &mut order, v.id(), u32::MAX);
            components += 1;
        }
    }
    components
}

/// Whether the graph contains a cycle. A self-loop is a cycle.
///
/// A simple graph is a forest iff it has exactly `V - C` edges, where `C`
/// is its component count; any edge beyond that closes a cycle.
pub fn has_cycle(graph: &Graph) -> bool {
    let components = component_count(graph);
    graph.edge_count() + components > graph.vertex_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chain(n: usize) -> Graph {
        let mut g = Graph::new();
        g.load_edges((0..n - 1).map(|i| (format!("v{}", i), format!("v{}", i + 1))));
        g
    }

    fn make_star(leaves: usize) -> Graph {
        let mut g = Graph::new();
        g.load_edges((1..=leaves).map(|i| ("hub".to_string(), format!("leaf{}", i))));
        g
    }

    fn make_cycle(n: usize) -> Graph {
        let mut g = Graph::new();
        g.load_edges((0..n).map(|i| (format!("v{}", i), format!("v{}", (i + 1) % n))));
        g
    }

    /// A–B, A–C, C–D, D–E, D–G, E–G plus isolated H.
    fn make_sample() -> Graph {
        let mut g = Graph::new();
        g.load_edges([
            ("A", "B"),
            ("A", "C"),
            ("C", "D"),
            ("D", "E"),
            ("D", "G"),
            ("E", "G"),
        ]);
        g.add_vertex("H");
        g
    }

    fn names(path: &[&Vertex]) -> Vec<String> {
        path.iter().map(|v| v.name().to_string()).collect()
    }

    // --- Shortest path tests ---

    #[test]
    fn test_shortest_path_sample() {
        let g = make_sample();
        let path = shortest_path(&g, "A", "G").unwrap();
        assert_eq!(names(&path), vec!["A", "C", "D", "G"]);
    }

    #[test]
    fn test_shortest_path_reverse_direction() {
        let g = make_sample();
        let path = shortest_path(&g, "G", "A").unwrap();
        assert_eq!(names(&path), vec!["G", "D", "C", "A"]);
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let g = make_sample();
        let err = shortest_path(&g, "A", "H").unwrap_err();
        assert_eq!(
            err,
            GraphError::NoPath {
                from: "A".to_string(),
                to: "H".to_string()
            }
        );
    }

    #[test]
    fn test_shortest_path_self() {
        let g = make_sample();
        let path = shortest_path(&g, "D", "D").unwrap();
        assert_eq!(names(&path), vec!["D"]);

        let path = shortest_path(&g, "H", "H").unwrap();
        assert_eq!(names(&path), vec!["H"]);
    }

    #[test]
    fn test_shortest_path_missing_endpoints() {
        let g = make_sample();
        assert_eq!(
            shortest_path(&g, "Z", "A").unwrap_err(),
            GraphError::VertexNotFound("Z".to_string())
        );
        assert_eq!(
            shortest_path(&g, "A", "Z").unwrap_err(),
            GraphError::VertexNotFound("Z".to_string())
        );
    }

    #[test]
    fn test_shortest_path_chain() {
        let g = make_chain(6);
        let path = shortest_path(&g, "v0", "v5").unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path[0].name(), "v0");
        assert_eq!(path[5].name(), "v5");
    }

    #[test]
    fn test_shortest_path_cycle() {
        let g = make_cycle(6);
        let path = shortest_path(&g, "v0", "v3").unwrap();
        assert_eq!(path.len(), 4);
        let path = shortest_path(&g, "v0", "v5").unwrap();
        assert_eq!(names(&path), vec!["v0", "v5"]);
    }

    #[test]
    fn test_shortest_path_ignores_self_loops() {
        let mut g = make_chain(4);
        g.add_edge("v0", "v0");
        g.add_edge("v2", "v2");
        let path = shortest_path(&g, "v0", "v3").unwrap();
        assert_eq!(names(&path), vec!["v0", "v1", "v2", "v3"]);
    }

    #[test]
    fn test_repeated_searches_do_not_interfere() {
        let g = make_sample();
        let first = shortest_path(&g, "A", "G").unwrap();
        let _ = shortest_path(&g, "G", "B").unwrap();
        let _ = shortest_path(&g, "A", "H").unwrap_err();
        let again = shortest_path(&g, "A", "G").unwrap();
        assert_eq!(names(&first), names(&again));
        // Unreachable stays unreachable after a search from the other side
        assert!(shortest_path(&g, "H", "A").is_err());
    }

    #[test]
    fn test_shortest_path_after_mutation() {
        let mut g = make_sample();
        assert!(shortest_path(&g, "A", "H").is_err());
        g.add_edge("B", "H");
        let path = shortest_path(&g, "A", "H").unwrap();
        assert_eq!(names(&path), vec!["A", "B", "H"]);
    }

    // --- Search tree tests ---

    #[test]
    fn test_breadth_first_marks_reached_finished() {
        let g = make_sample();
        let tree = breadth_first(&g, "A").unwrap();
        let h = g.get_vertex("H").unwrap().id();
        let d = g.get_vertex("D").unwrap().id();
        assert!(!tree.reached(h));
        assert_eq!(tree.visit(h).unwrap().visit_state(), VisitState::Unvisited);
        assert_eq!(tree.visit(d).unwrap().visit_state(), VisitState::Finished);
        assert_eq!(tree.visit(d).unwrap().distance(), 2);
        assert_eq!(tree.discovery_order().len(), 6);
        assert!(tree.visit(tree.source()).unwrap().predecessor().is_none());
    }

    #[test]
    fn test_breadth_first_predecessor_names() {
        let g = make_sample();
        let tree = breadth_first(&g, "A").unwrap();
        let g_id = g.get_vertex("G").unwrap().id();
        let pred = tree.visit(g_id).unwrap().predecessor().unwrap();
        assert_eq!(g.vertex(pred).unwrap().name(), "D");
    }

    #[test]
    fn test_breadth_first_missing_source() {
        let g = make_sample();
        assert!(matches!(
            breadth_first(&g, "nope"),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_path_to_out_of_range_id() {
        let g = make_chain(3);
        let tree = breadth_first(&g, "v0").unwrap();
        assert!(tree.path_to(&g, 99).is_none());
    }

    // --- Neighborhood tests ---

    #[test]
    fn test_bfs_chain() {
        let g = make_chain(6);
        let result = bfs_neighborhood(&g, "v0", 10);
        assert_eq!(result.neighbors.len(), 5);
        let v5 = result.neighbors.iter().find(|n| n.vertex.name() == "v5").unwrap();
        assert_eq!(v5.distance, 5);
    }

    #[test]
    fn test_bfs_chain_depth_limited() {
        let g = make_chain(10);
        let result = bfs_neighborhood(&g, "v0", 3);
        assert_eq!(result.neighbors.len(), 3);
        assert!(result.neighbors.iter().all(|n| n.distance <= 3));
    }

    #[test]
    fn test_bfs_star() {
        let g = make_star(100);
        let result = bfs_neighborhood(&g, "hub", 1);
        assert_eq!(result.neighbors.len(), 100);
        assert!(result.neighbors.iter().all(|n| n.distance == 1));
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let g = make_cycle(5);
        let result = bfs_neighborhood(&g, "v0", 100);
        assert_eq!(result.neighbors.len(), 4);
    }

    #[test]
    fn test_bfs_depth_zero() {
        let g = make_chain(5);
        let result = bfs_neighborhood(&g, "v0", 0);
        // Depth 0 = only start vertex, no neighbors
        assert_eq!(result.neighbors.len(), 0);
        assert_eq!(result.vertices_visited, 1);
    }

    #[test]
    fn test_bfs_self_loop() {
        let mut g = Graph::new();
        g.add_edge("A", "A");
        let result = bfs_neighborhood(&g, "A", 5);
        // Start vertex is already discovered, so the loop adds nothing
        assert_eq!(result.neighbors.len(), 0);
    }

    #[test]
    fn test_bfs_start_not_in_graph() {
        let g = make_chain(3);
        let result = bfs_neighborhood(&g, "nope", 10);
        assert_eq!(result.neighbors.len(), 0);
        assert_eq!(result.vertices_visited, 0);
    }

    #[test]
    fn test_bfs_discovery_order() {
        let g = make_sample();
        let result = bfs_neighborhood(&g, "A", 10);
        let order: Vec<&str> = result.neighbors.iter().map(|n| n.vertex.name()).collect();
        assert_eq!(order, vec!["B", "C", "D", "E", "G"]);
    }

    // --- Degree tests ---

    #[test]
    fn test_max_degree_sample() {
        let g = make_sample();
        assert_eq!(max_degree(&g).unwrap().name(), "D");
    }

    #[test]
    fn test_max_degree_empty() {
        let g = Graph::new();
        assert_eq!(max_degree(&g).unwrap_err(), GraphError::EmptyGraph);
    }

    #[test]
    fn test_max_degree_tie_first_inserted_wins() {
        let mut g = Graph::new();
        g.load_edges([("X", "Y"), ("Y", "Z"), ("Z", "X")]);
        assert_eq!(max_degree(&g).unwrap().name(), "X");
    }

    #[test]
    fn test_max_degree_isolated_vertices() {
        let mut g = Graph::new();
        g.add_vertex("P");
        g.add_vertex("Q");
        assert_eq!(max_degree(&g).unwrap().name(), "P");
    }

    #[test]
    fn test_degree_centrality_ordering() {
        let g = make_sample();
        let ranked = degree_centrality(&g, 0);
        assert_eq!(ranked.len(), 7);
        assert_eq!(ranked[0].vertex.name(), "D");
        assert_eq!(ranked[0].degree, 3);
        // A, C, E, G all have degree 2; insertion order is A, C, E, G
        let tied: Vec<&str> = ranked[1..5].iter().map(|r| r.vertex.name()).collect();
        assert_eq!(tied, vec!["A", "C", "E", "G"]);
        assert_eq!(ranked[6].vertex.name(), "H");
        assert_eq!(ranked[6].degree, 0);
    }

    #[test]
    fn test_degree_centrality_top_n() {
        let g = make_star(10);
        let ranked = degree_centrality(&g, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].vertex.name(), "hub");
        assert_eq!(ranked[0].degree, 10);
    }

    // --- Cycle tests ---

    #[test]
    fn test_has_cycle() {
        assert!(has_cycle(&make_sample()));
        assert!(has_cycle(&make_cycle(3)));
        assert!(!has_cycle(&make_chain(5)));
        assert!(!has_cycle(&make_star(4)));
        assert!(!has_cycle(&Graph::new()));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let mut g = make_chain(3);
        assert!(!has_cycle(&g));
        g.add_edge("v1", "v1");
        assert!(has_cycle(&g));
    }

    #[test]
    fn test_forest_without_cycle() {
        let mut g = make_chain(3);
        g.load_edges([("x", "y"), ("y", "z")]);
        g.add_vertex("lonely");
        assert_eq!(component_count(&g), 3);
        assert!(!has_cycle(&g));
    }
}
