use crate::graph::*;
use ahash::RandomState;
use log::debug;
use std::collections::HashSet;

pub trait Reachability
where
    Self: QueryableGraph + Sized,
{
    /// Iterates over vertices reachable from `source` in depth-first preorder,
    /// starting with `source` itself.
    ///
    /// Out-edges are followed in the order they were added.
    /// Nothing is yielded if `source` is absent.
    fn dfs(&self, source: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(DfsIter::new(self, source))
    }

    /// Whether `sink` is reachable from `source`.
    ///
    /// A vertex always reaches itself, even if it is absent.
    fn has_path(&self, source: &VertexId, sink: &VertexId) -> bool {
        if source == sink {
            return true;
        }
        let res = self.dfs(source).any(|v| v == *sink);
        debug!("has_path {:?} -> {:?}: {}", source, sink, res);
        res
    }
}

impl<G: QueryableGraph> Reachability for G {}

struct DfsIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    stack: Vec<VertexId>,
    visited: HashSet<VertexId, RandomState>,
}

impl<'a, G> DfsIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, source: &VertexId) -> Self {
        let stack = if graph.contains_vertex(source) {
            vec![*source]
        } else {
            vec![]
        };
        Self {
            graph,
            stack,
            visited: HashSet::with_hasher(RandomState::new()),
        }
    }
}

impl<'a, G> Iterator for DfsIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vert) = self.stack.pop() {
            if !self.visited.insert(vert) {
                continue;
            }
            let nexts: Vec<_> = self
                .graph
                .out_neighbors(&vert)
                .filter(|v| !self.visited.contains(v))
                .collect();
            // reversed, so that the earliest added out-edge is explored first
            self.stack.extend(nexts.into_iter().rev());
            return Some(vert);
        }
        None
    }
}
