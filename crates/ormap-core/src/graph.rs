use std::fmt;

/// A directed graph over opaque payload values.
///
/// The graph is a data container: it performs no duplicate, self-loop or
/// cycle detection. Vertices and edges are kept in insertion order and are
/// addressed by [`VertexId`] and [`EdgeId`].
#[derive(Clone)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge>,
}

#[derive(Debug, Clone)]
pub struct Vertex<T> {
    /// Identifies the vertex within its graph
    pub id: VertexId,

    /// Payload carried by the vertex
    pub data: T,

    /// Edges ending at this vertex, in insertion order
    pub incoming: Vec<EdgeId>,

    /// Edges starting at this vertex, in insertion order
    pub outgoing: Vec<EdgeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub id: EdgeId,

    /// Vertex the edge starts from
    pub source: VertexId,

    /// Vertex the edge points to
    pub sink: VertexId,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl<T> Graph<T> {
    pub const fn new() -> Graph<T> {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Inserts a new vertex wrapping `data` and returns its identifier.
    ///
    /// Inserting the same payload twice produces two distinct vertices.
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            id,
            data,
            incoming: vec![],
            outgoing: vec![],
        });
        id
    }

    /// Records a directed edge from `source` to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if either vertex does not belong to this graph.
    #[track_caller]
    pub fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        assert!(source.0 < self.vertices.len(), "invalid source vertex");
        assert!(sink.0 < self.vertices.len(), "invalid sink vertex");

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { id, source, sink });
        self.vertices[source.0].outgoing.push(id);
        self.vertices[sink.0].incoming.push(id);
        id
    }

    /// Returns the vertex with the given identifier.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not belong to this graph.
    #[track_caller]
    pub fn vertex(&self, id: VertexId) -> &Vertex<T> {
        &self.vertices[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the first vertex whose payload satisfies `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&Vertex<T>> {
        self.vertices.iter().find(|vertex| predicate(&vertex.data))
    }

    /// Vertices reachable from `id` over a single outgoing edge.
    pub fn outgoing(&self, id: VertexId) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.vertex(id)
            .outgoing
            .iter()
            .map(|edge| self.vertex(self.edge(*edge).sink))
    }

    /// Vertices with an edge pointing at `id`.
    pub fn incoming(&self, id: VertexId) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.vertex(id)
            .incoming
            .iter()
            .map(|edge| self.vertex(self.edge(*edge).source))
    }

    pub fn has_edge(&self, source: VertexId, sink: VertexId) -> bool {
        self.vertex(source)
            .outgoing
            .iter()
            .any(|edge| self.edge(*edge).sink == sink)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "VertexId({})", self.0)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EdgeId({})", self.0)
    }
}
