use crate::graph::*;

pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    /// Adds an edge and returns whether it is new.
    ///
    /// Both endpoints must be present.
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> bool;
}

pub trait EdgeShrinkableGraph {
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> Option<Edge>;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a vertex and every edge connecting to it, and returns these edges.
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static>;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool;
    /// Sinks of out-edges of `v`, in the order these edges were added.
    /// Empty if `v` is absent.
    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;
    /// Sources of in-edges of `v`. Empty if `v` is absent.
    fn in_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;
    /// `None` if `v` is absent.
    fn out_degree(&self, v: &VertexId) -> Option<usize>;

    fn debug<'a>(&'a self) -> GraphDebug<'a, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
