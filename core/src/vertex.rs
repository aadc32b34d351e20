use std::fmt;
use std::hash::{Hash, Hasher};

/// Graph-internal vertex handle. Index into the graph's vertex arena.
pub type VertexId = u32;

/// A named vertex. Identity is the name; the graph hands out one `Vertex`
/// per distinct name and never constructs a second one for the same name.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    name: String,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Progress of a vertex through a single breadth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    /// Enqueued, neighbors not yet expanded.
    Discovered,
    /// Dequeued and all neighbors expanded.
    Finished,
}

/// Per-search traversal record for one vertex.
///
/// Lives in a table owned by the search, never on the stored `Vertex`, so
/// repeated or overlapping searches over the same graph start clean.
#[derive(Debug, Clone, Default)]
pub struct Visit {
    state: VisitState,
    predecessor: Option<VertexId>,
    distance: u32,
}

impl Visit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_discovered(&mut self) {
        self.state = VisitState::Discovered;
    }

    pub fn mark_unvisited(&mut self) {
        self.state = VisitState::Unvisited;
    }

    pub fn mark_finished(&mut self) {
        self.state = VisitState::Finished;
    }

    pub fn visit_state(&self) -> VisitState {
        self.state
    }

    /// Handle of the vertex this one was discovered from. None for the search
    /// source and for vertices the search never reached. Resolve to a name
    /// through `Graph::vertex`.
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    pub fn set_predecessor(&mut self, pred: Option<VertexId>) {
        self.predecessor = pred;
    }

    /// Hop count from the search source. Meaningless while unvisited.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub(crate) fn set_distance(&mut self, distance: u32) {
        self.distance = distance;
    }
}
