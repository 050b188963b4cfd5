use crate::graph::*;
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

/// A directed graph backed by ordered adjacency lists.
///
/// Sinks of out-edges are kept in the order these edges were added.
/// At most one edge connects an ordered pair of vertices.
/// Self-loops are allowed.
///
/// |                    | Complexity                                                                                   |
/// | ------------------ | -------------------------------------------------------------------------------------------- |
/// | `add_vertex`       | $O(\log \|V\|)$                                                                              |
/// | `add_edge`         | $O(\log \|V\| + \log \|E\|)$                                                                 |
/// | `remove_edge`      | $O(\log \|V\| + \log \|E\| + d)$, where $d$ is the out-degree of the source.                 |
/// | `remove_vertex`    | $O(\log \|V\| + \sum_{u} d(u))$, where $u$ ranges over in-neighbors of the vertex to remove. |
/// | `vertex_size`      | $O(1)$                                                                                       |
/// | `iter_vertices`    | amortized $O(1)$ and $O(\log \|V\|)$ in the worst cases.                                     |
/// | `contains_vertex`  | $O(\log \|V\|)$                                                                              |
/// | `edge_size`        | $O(1)$                                                                                       |
/// | `contains_edge`    | $O(\log \|E\|)$                                                                              |
/// | `out_neighbors`    | returns in $O(\log \|V\|)$. $O(1)$ on each call to `.next`.                                  |
/// | `in_neighbors`     | returns in $O(\log \|E\|)$. amortized $O(1)$ and $O(\log \|E\|)$ in the worst cases on each call to `.next`.|
/// | `out_degree`       | $O(\log \|V\|)$                                                                              |
#[derive(Clone, Default)]
pub struct AdjacentListGraph {
    vid_factory: VertexIdFactory,
    out_edges: BTreeMap<VertexId, Vec<VertexId>>,
    // (sink, source)
    in_edges: BTreeSet<(VertexId, VertexId)>,
    edge_size: usize,
}

impl std::fmt::Debug for AdjacentListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacentListGraph {{")?;
        write!(f, "{:?}", self.debug())?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for AdjacentListGraph {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            out_edges: BTreeMap::new(),
            in_edges: BTreeSet::new(),
            edge_size: 0,
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        self.out_edges.insert(vid, vec![]);
        trace!("add vertex {:?}", vid);
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> bool {
        debug_assert!(self.out_edges.contains_key(&source));
        debug_assert!(self.out_edges.contains_key(&sink));
        if !self.in_edges.insert((sink, source)) {
            return false;
        }
        if let Some(sinks) = self.out_edges.get_mut(&source) {
            sinks.push(sink);
        }
        self.edge_size += 1;
        trace!("add edge {:?} -> {:?}", source, sink);
        true
    }
}

impl EdgeShrinkableGraph for AdjacentListGraph {
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> Option<Edge> {
        if !self.in_edges.remove(&(*sink, *source)) {
            return None;
        }
        if let Some(sinks) = self.out_edges.get_mut(source) {
            if let Some(pos) = sinks.iter().position(|x| x == sink) {
                sinks.remove(pos);
            }
        }
        self.edge_size -= 1;
        trace!("remove edge {:?} -> {:?}", source, sink);
        Some(Edge::new(*source, *sink))
    }
}

impl VertexShrinkableGraph for AdjacentListGraph {
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        let sinks = match self.out_edges.remove(vertex) {
            None => return Box::new(std::iter::empty()),
            Some(sinks) => sinks,
        };
        let mut res: Vec<Edge> = Vec::with_capacity(sinks.len());
        for sink in sinks {
            self.in_edges.remove(&(sink, *vertex));
            res.push(Edge::new(*vertex, sink));
        }
        // A self-loop has gone with the out-edges above.
        let sources: Vec<VertexId> = self.in_neighbors(vertex).collect();
        for source in sources {
            self.in_edges.remove(&(*vertex, source));
            if let Some(sinks) = self.out_edges.get_mut(&source) {
                sinks.retain(|x| x != vertex);
            }
            res.push(Edge::new(source, *vertex));
        }
        self.edge_size -= res.len();
        debug!(
            "remove vertex {:?} together with {} edges",
            vertex,
            res.len()
        );
        Box::new(res.into_iter())
    }
}

impl QueryableGraph for AdjacentListGraph {
    fn vertex_size(&self) -> usize {
        self.out_edges.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.out_edges.keys().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.out_edges.contains_key(v)
    }

    fn edge_size(&self) -> usize {
        self.edge_size
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.out_edges.iter().flat_map(|(source, sinks)| {
            sinks.iter().map(move |sink| Edge::new(*source, *sink))
        });
        Box::new(it)
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.in_edges.contains(&(*sink, *source))
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.out_edges.get(v) {
            Some(sinks) => Box::new(sinks.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn in_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let start = (*v, VertexId::MIN);
        let end = (v.next(), VertexId::MIN);
        let it = self.in_edges.range(start..end).map(|(_, source)| *source);
        Box::new(it)
    }

    fn out_degree(&self, v: &VertexId) -> Option<usize> {
        self.out_edges.get(v).map(Vec::len)
    }
}
