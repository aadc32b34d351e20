//! simple-graph-core: In-memory undirected simple graph.
//!
//! Vertices are identified by unique names; edges are unordered, with no
//! parallel edges and self-loops allowed. Provides BFS shortest path,
//! neighborhood traversal and degree queries. Traversal state is scoped to
//! each search, so queries never observe leftovers from earlier ones.

mod error;
mod graph;
mod traversal;
mod vertex;

pub use error::{GraphError, Result};
pub use graph::{Graph, Neighbors, VertexKey};
pub use traversal::{
    bfs_neighborhood, breadth_first, component_count, degree_centrality, has_cycle, max_degree,
    shortest_path, DegreeResult, NeighborResult, SearchTree, TraversalResult,
};
pub use vertex::{Vertex, VertexId, Visit, VisitState};
