use std::collections::{btree_set, BTreeSet, HashMap};
use std::fmt;

use tracing::{debug, trace};

use crate::vertex::{Vertex, VertexId};

/// Anything that names a vertex of a graph: its name or its handle.
pub trait VertexKey {
    fn resolve(&self, graph: &Graph) -> Option<VertexId>;
}

impl VertexKey for str {
    fn resolve(&self, graph: &Graph) -> Option<VertexId> {
        graph.index.get(self).copied()
    }
}

impl VertexKey for String {
    fn resolve(&self, graph: &Graph) -> Option<VertexId> {
        self.as_str().resolve(graph)
    }
}

/// Resolved by name, so a vertex obtained from another graph maps to the
/// vertex of the same name in this one.
impl VertexKey for Vertex {
    fn resolve(&self, graph: &Graph) -> Option<VertexId> {
        self.name().resolve(graph)
    }
}

impl VertexKey for VertexId {
    fn resolve(&self, graph: &Graph) -> Option<VertexId> {
        ((*self as usize) < graph.vertices.len()).then_some(*self)
    }
}

/// In-memory undirected simple graph: vertex arena + name index + adjacency sets.
///
/// Each edge is stored in both endpoints' sets; a self-loop is stored once in
/// its vertex's own set. Adjacency sets are ordered by `VertexId`, which is
/// assignment order, so every iteration over the graph is deterministic.
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<BTreeSet<VertexId>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Return the handle for `name`, creating the vertex if it doesn't exist.
    fn intern(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.vertices.len() as VertexId;
        self.vertices.push(Vertex::new(id, name.to_string()));
        self.adjacency.push(BTreeSet::new());
        self.index.insert(name.to_string(), id);
        trace!(vertex = name, id, "vertex created");
        id
    }

    /// Add a vertex with no neighbors, or return the existing one unchanged.
    pub fn add_vertex(&mut self, name: &str) -> &Vertex {
        let id = self.intern(name);
        &self.vertices[id as usize]
    }

    pub fn get_vertex(&self, name: &str) -> Option<&Vertex> {
        self.index.get(name).map(|&id| &self.vertices[id as usize])
    }

    /// Vertex by handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id as usize)
    }

    pub fn has_vertex(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether `from`-`to` is an edge. Order of the endpoints doesn't matter.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&v), Some(&w)) => self.adjacency[v as usize].contains(&w),
            _ => false,
        }
    }

    /// Connect `from` and `to`, creating either vertex if missing.
    /// Adding an edge that already exists changes nothing.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if self.has_edge(from, to) {
            return;
        }
        let v = self.intern(from);
        let w = self.intern(to);
        self.adjacency[v as usize].insert(w);
        self.adjacency[w as usize].insert(v);
        self.edge_count += 1;
        debug!(from, to, edges = self.edge_count, "edge added");
    }

    /// Bulk load from an iterator of (from, to) name pairs.
    pub fn load_edges<I, S>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        for (from, to) in edges {
            self.add_edge(from.as_ref(), to.as_ref());
        }
    }

    /// Neighbors of a vertex given by name, handle or `Vertex`.
    /// Empty if the vertex is not in this graph.
    pub fn adjacent_to<K: VertexKey + ?Sized>(&self, key: &K) -> Neighbors<'_> {
        Neighbors {
            graph: self,
            inner: key
                .resolve(self)
                .map(|id| self.adjacency[id as usize].iter()),
        }
    }

    /// All vertices in insertion order.
    pub fn all_vertices(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Size of the vertex's adjacency set. A self-loop counts once.
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.index
            .get(name)
            .map(|&id| self.adjacency[id as usize].len())
    }

    pub(crate) fn neighbor_ids(&self, id: VertexId) -> &BTreeSet<VertexId> {
        &self.adjacency[id as usize]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let names: usize = self.vertices.iter().map(|v| v.name().len()).sum();
        // Name bytes are held twice: once by the vertex, once by the index key.
        let vertex_mem = self.vertices.len() * (size_of::<Vertex>() + size_of::<String>() + 16)
            + names * 2;
        // BTreeSet nodes carry roughly 2x overhead over the raw ids.
        let adj_mem: usize = self
            .adjacency
            .iter()
            .map(|s| size_of::<BTreeSet<VertexId>>() + s.len() * size_of::<VertexId>() * 2)
            .sum();

        vertex_mem + adj_mem
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Adjacency-list rendering: one line per vertex, `"<name>: <n1> <n2> ... "`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.vertices {
            write!(f, "{}: ", v)?;
            for w in self.adjacent_to(&v.id()) {
                write!(f, "{} ", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the neighbors of one vertex. Clone it to restart.
#[derive(Clone)]
pub struct Neighbors<'a> {
    graph: &'a Graph,
    inner: Option<btree_set::Iter<'a, VertexId>>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.inner.as_mut()?.next()?;
        Some(&self.graph.vertices[id as usize])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |it| it.size_hint())
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
