use crate::algorithm::*;
use crate::graph::{directed::AdjacentListGraph, *};
use crate::{GraphError, Result};
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::{BuildHasher, Hash};

/// A directed graph over vertices of type `V`.
///
/// *   Adding an edge adds its missing endpoints.
/// *   Adding a present vertex, or a present edge, does nothing.
/// *   Removing an absent vertex, or an absent edge, does nothing.
/// *   Queries about absent vertices answer as if the vertices were isolated,
///     except [DirectedGraph::degree] which fails with [GraphError::UnknownVertex].
///
/// Vertices are iterated in the order they were added.
/// Out-neighbors of a vertex are iterated in the order their edges were added.
///
/// `S` is the hasher used to look up vertices.
pub struct DirectedGraph<V, S = RandomState> {
    lower_graph: AdjacentListGraph,
    vertices: BiHashMap<VertexId, V, S, S>,
}

impl<V> DirectedGraph<V, RandomState>
where
    V: Hash + Eq,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<V, S> DirectedGraph<V, S>
where
    V: Hash + Eq,
    S: BuildHasher + Clone,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            lower_graph: AdjacentListGraph::new(),
            vertices: BiHashMap::with_hashers(hasher.clone(), hasher),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            lower_graph: AdjacentListGraph::new(),
            vertices: BiHashMap::with_capacity_and_hashers(capacity, hasher.clone(), hasher),
        }
    }
}

impl<V, S> DirectedGraph<V, S>
where
    V: Hash + Eq,
    S: BuildHasher,
{
    /// The underlying low-level graph.
    pub fn lower_graph(&self) -> &AdjacentListGraph {
        &self.lower_graph
    }

    pub fn vertex_by_id(&self, vid: &VertexId) -> Option<&V> {
        self.vertices.get_by_left(vid)
    }

    pub fn id_by_vertex(&self, vert: &V) -> Option<VertexId> {
        self.vertices.get_by_right(vert).copied()
    }

    /// Adds a vertex without edges, and returns whether it was absent.
    pub fn add_vertex(&mut self, vert: V) -> bool {
        if self.vertices.contains_right(&vert) {
            false
        } else {
            let vid = self.lower_graph.add_vertex();
            self.vertices.insert(vid, vert);
            true
        }
    }

    /// Adds an edge, together with its missing endpoints,
    /// and returns whether the edge was absent.
    pub fn add_edge(&mut self, source: V, sink: V) -> bool {
        let vid_src = self.id_or_insert(source);
        let vid_snk = self.id_or_insert(sink);
        self.lower_graph.add_edge(vid_src, vid_snk)
    }

    fn id_or_insert(&mut self, vert: V) -> VertexId {
        if let Some(vid) = self.id_by_vertex(&vert) {
            vid
        } else {
            let vid = self.lower_graph.add_vertex();
            self.vertices.insert(vid, vert);
            vid
        }
    }

    /// Removes a vertex and all edges from or to it,
    /// and returns whether it was present.
    pub fn remove_vertex(&mut self, vert: &V) -> bool {
        match self.vertices.remove_by_right(vert) {
            Some((vid, _)) => {
                let _ = self.lower_graph.remove_vertex(&vid);
                true
            }
            None => false,
        }
    }

    /// Removes an edge and returns whether it was present.
    /// Its endpoints are kept.
    pub fn remove_edge(&mut self, source: &V, sink: &V) -> bool {
        match (self.id_by_vertex(source), self.id_by_vertex(sink)) {
            (Some(vid_src), Some(vid_snk)) => {
                self.lower_graph.remove_edge(&vid_src, &vid_snk).is_some()
            }
            _ => false,
        }
    }

    /// Total number of vertices.
    pub fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of edges.
    pub fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    /// Whether there are neither vertices nor edges.
    pub fn is_empty(&self) -> bool {
        self.vertex_size() == 0 && self.edge_size() == 0
    }

    /// Number of out-edges of a vertex.
    pub fn degree(&self, vert: &V) -> Result<usize> {
        self.id_by_vertex(vert)
            .and_then(|vid| self.lower_graph.out_degree(&vid))
            .ok_or(GraphError::UnknownVertex)
    }

    /// Iterates over vertices in the order they were added.
    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        let it = self
            .lower_graph
            .iter_vertices()
            .filter_map(|vid| self.vertex_by_id(&vid));
        Box::new(it)
    }

    /// Iterates over sinks of out-edges of a vertex,
    /// in the order these edges were added.
    ///
    /// It is empty if the vertex is absent.
    pub fn adjacent_to(&self, vert: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        match self.id_by_vertex(vert) {
            Some(vid) => {
                let it = self
                    .lower_graph
                    .out_neighbors(&vid)
                    .filter_map(|vid| self.vertex_by_id(&vid));
                Box::new(it)
            }
            None => Box::new(std::iter::empty()),
        }
    }

    /// Iterates over edges as `(source, sink)` pairs.
    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = (&V, &V)> + '_> {
        let it = self.lower_graph.iter_edges().filter_map(|e| {
            let source = self.vertex_by_id(&e.source)?;
            let sink = self.vertex_by_id(&e.sink)?;
            Some((source, sink))
        });
        Box::new(it)
    }

    pub fn contains_vertex(&self, vert: &V) -> bool {
        self.vertices.contains_right(vert)
    }

    pub fn contains_edge(&self, source: &V, sink: &V) -> bool {
        match (self.id_by_vertex(source), self.id_by_vertex(sink)) {
            (Some(vid_src), Some(vid_snk)) => self.lower_graph.contains_edge(&vid_src, &vid_snk),
            _ => false,
        }
    }

    /// Whether `sink` is reachable from `source` by following edges.
    ///
    /// A vertex always reaches itself, even if it is absent.
    pub fn has_path(&self, source: &V, sink: &V) -> bool {
        if source == sink {
            return true;
        }
        match (self.id_by_vertex(source), self.id_by_vertex(sink)) {
            (Some(vid_src), Some(vid_snk)) => self.lower_graph.has_path(&vid_src, &vid_snk),
            _ => false,
        }
    }

    /// Number of edges on a shortest path from `source` to `sink`.
    ///
    /// It is `0` if `source == sink`, even if it is absent,
    /// and [UNREACHABLE] if there is no path.
    pub fn path_length(&self, source: &V, sink: &V) -> usize {
        if source == sink {
            return 0;
        }
        match (self.id_by_vertex(source), self.id_by_vertex(sink)) {
            (Some(vid_src), Some(vid_snk)) => self.lower_graph.path_length(&vid_src, &vid_snk),
            _ => UNREACHABLE,
        }
    }

    /// Vertices along a shortest path from `source` to `sink`, both included.
    ///
    /// It is `[source]` if `source == sink`, even if it is absent,
    /// and empty if there is no path.
    pub fn shortest_path(&self, source: &V, sink: &V) -> Vec<V>
    where
        V: Clone,
    {
        if source == sink {
            return vec![source.clone()];
        }
        match (self.id_by_vertex(source), self.id_by_vertex(sink)) {
            (Some(vid_src), Some(vid_snk)) => self
                .lower_graph
                .shortest_path(&vid_src, &vid_snk)
                .iter()
                .filter_map(|vid| self.vertex_by_id(vid))
                .cloned()
                .collect(),
            _ => vec![],
        }
    }
}

impl<V, S> Clone for DirectedGraph<V, S>
where
    V: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            lower_graph: self.lower_graph.clone(),
            vertices: self.vertices.clone(),
        }
    }
}

impl<V, S> Default for DirectedGraph<V, S>
where
    V: Hash + Eq,
    S: BuildHasher + Clone + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

/// Two graphs are equal iff they have the same vertices
/// and every vertex has the same out-neighbors in both,
/// no matter in which order they were added.
impl<V, S1, S2> PartialEq<DirectedGraph<V, S2>> for DirectedGraph<V, S1>
where
    V: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &DirectedGraph<V, S2>) -> bool {
        if self.vertex_size() != other.vertex_size() || self.edge_size() != other.edge_size() {
            return false;
        }
        self.iter_vertices().all(|v| other.contains_vertex(v))
            && self
                .iter_edges()
                .all(|(source, sink)| other.contains_edge(source, sink))
    }
}

impl<V, S> Eq for DirectedGraph<V, S>
where
    V: Hash + Eq,
    S: BuildHasher,
{
}

impl<V, S> Extend<(V, V)> for DirectedGraph<V, S>
where
    V: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (source, sink) in edges {
            self.add_edge(source, sink);
        }
    }
}

impl<V, S> FromIterator<(V, V)> for DirectedGraph<V, S>
where
    V: Hash + Eq,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut res = Self::default();
        res.extend(edges);
        res
    }
}
