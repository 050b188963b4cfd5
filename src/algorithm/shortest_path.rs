use crate::graph::*;
use ahash::RandomState;
use log::debug;
use std::collections::{HashMap, VecDeque};

/// Length of paths between vertices that are not connected.
pub const UNREACHABLE: usize = usize::MAX;

/// Shortest paths by number of edges.
pub trait ShortestPath
where
    Self: QueryableGraph + Sized,
{
    /// Number of edges on a shortest path from `source` to `sink`.
    ///
    /// It is `0` if `source == sink`, even if it is absent,
    /// and [UNREACHABLE] if there is no path.
    fn path_length(&self, source: &VertexId, sink: &VertexId) -> usize {
        if source == sink {
            return 0;
        }
        let res = Bfs::new(self, source)
            .find(|(v, _)| v == sink)
            .map_or(UNREACHABLE, |(_, dist)| dist);
        debug!("path_length {:?} -> {:?}: {}", source, sink, res);
        res
    }

    /// Vertices along a shortest path, both `source` and `sink` included.
    ///
    /// Ties are broken by the order out-edges were added.
    /// It is `[source]` if `source == sink`, even if it is absent,
    /// and empty if there is no path.
    fn shortest_path(&self, source: &VertexId, sink: &VertexId) -> Vec<VertexId> {
        if source == sink {
            return vec![*source];
        }
        let mut bfs = Bfs::new(self, source);
        let res = if bfs.any(|(v, _)| v == *sink) {
            bfs.backtrack(sink)
        } else {
            vec![]
        };
        debug!(
            "shortest_path {:?} -> {:?}: {} vertices",
            source,
            sink,
            res.len()
        );
        res
    }

    /// Distances to all vertices reachable from `source`, `source` itself included.
    fn bfs_distances(&self, source: &VertexId) -> HashMap<VertexId, usize, RandomState> {
        let mut bfs = Bfs::new(self, source);
        bfs.by_ref().for_each(drop);
        bfs.distances
    }
}

impl<G: QueryableGraph> ShortestPath for G {}

/// Breadth-first search yielding vertices together with their distances,
/// in the order they are popped off the queue.
struct Bfs<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    queue: VecDeque<VertexId>,
    distances: HashMap<VertexId, usize, RandomState>,
    predecessors: HashMap<VertexId, VertexId, RandomState>,
}

impl<'a, G> Bfs<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, source: &VertexId) -> Self {
        let mut res = Self {
            graph,
            queue: VecDeque::new(),
            distances: HashMap::with_hasher(RandomState::new()),
            predecessors: HashMap::with_hasher(RandomState::new()),
        };
        if graph.contains_vertex(source) {
            res.distances.insert(*source, 0);
            res.queue.push_back(*source);
        }
        res
    }

    /// Walks predecessors back from a visited `sink` to the source.
    fn backtrack(&self, sink: &VertexId) -> Vec<VertexId> {
        debug_assert!(self.distances.contains_key(sink));
        let mut res = vec![*sink];
        let mut cur = *sink;
        while let Some(prev) = self.predecessors.get(&cur) {
            res.push(*prev);
            cur = *prev;
        }
        res.reverse();
        res
    }
}

impl<'a, G> Iterator for Bfs<'a, G>
where
    G: QueryableGraph,
{
    type Item = (VertexId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let vert = self.queue.pop_front()?;
        let dist = self.distances[&vert];
        for next in self.graph.out_neighbors(&vert) {
            if !self.distances.contains_key(&next) {
                self.distances.insert(next, dist + 1);
                self.predecessors.insert(next, vert);
                self.queue.push_back(next);
            }
        }
        Some((vert, dist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use petgraph::algo::dijkstra;
    use quickcheck_macros::quickcheck;

    // a -> b -> c -> d -> e
    fn chain() -> (AdjacentListGraph, Vec<VertexId>) {
        let mut g = AdjacentListGraph::new();
        let vs: Vec<_> = (0..5).map(|_| g.add_vertex()).collect();
        for w in vs.windows(2) {
            g.add_edge(w[0], w[1]);
        }
        (g, vs)
    }

    #[test]
    fn chain_lengths() {
        let (g, vs) = chain();
        assert_eq!(g.path_length(&vs[0], &vs[2]), 2);
        assert_eq!(g.path_length(&vs[0], &vs[3]), 3);
        assert_eq!(g.path_length(&vs[1], &vs[2]), 1);
        assert_eq!(g.path_length(&vs[1], &vs[0]), UNREACHABLE);
        assert_eq!(g.shortest_path(&vs[0], &vs[3]), vs[0..4].to_vec());
        assert_eq!(g.shortest_path(&vs[1], &vs[3]), vs[1..4].to_vec());
    }

    #[test]
    fn shortcut_wins() {
        let (mut g, vs) = chain();
        g.add_edge(vs[0], vs[2]);
        assert_eq!(g.path_length(&vs[0], &vs[2]), 1);
        assert_eq!(g.shortest_path(&vs[0], &vs[2]), vec![vs[0], vs[2]]);
        assert_eq!(g.path_length(&vs[0], &vs[4]), 3);
    }

    #[test]
    fn ties_follow_insertion_order() {
        let mut g = AdjacentListGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let d = g.add_vertex();
        g.add_edge(a, c);
        g.add_edge(a, b);
        g.add_edge(b, d);
        g.add_edge(c, d);
        assert_eq!(g.shortest_path(&a, &d), vec![a, c, d]);
    }

    #[test]
    fn self_and_absent() {
        let (g, vs) = chain();
        let absent = VertexId::new(42);
        assert_eq!(g.path_length(&vs[2], &vs[2]), 0);
        assert_eq!(g.path_length(&absent, &absent), 0);
        assert_eq!(g.shortest_path(&absent, &absent), vec![absent]);
        assert_eq!(g.path_length(&vs[0], &absent), UNREACHABLE);
        assert_eq!(g.path_length(&absent, &vs[0]), UNREACHABLE);
        assert!(g.shortest_path(&vs[0], &absent).is_empty());
        assert!(g.shortest_path(&absent, &vs[0]).is_empty());
        assert!(g.shortest_path(&vs[4], &vs[0]).is_empty());
    }

    #[test]
    fn distances_from_source() {
        let (mut g, vs) = chain();
        let lonely = g.add_vertex();
        let dists = g.bfs_distances(&vs[1]);
        assert_eq!(dists.len(), 4);
        assert_eq!(dists[&vs[1]], 0);
        assert_eq!(dists[&vs[4]], 3);
        assert!(!dists.contains_key(&vs[0]));
        assert!(!dists.contains_key(&lonely));
        assert!(g.bfs_distances(&VertexId::new(42)).is_empty());
    }

    #[quickcheck]
    fn path_length_agrees_with_petgraph(ops: Ops) {
        let oracle = ops.oracle();
        let trial: AdjacentListGraph = ops.apply();
        let vs: Vec<_> = trial.iter_vertices().collect();
        for src in vs.iter() {
            let oracle_dists = dijkstra(&oracle, src.to_raw(), None, |_| 1usize);
            for snk in vs.iter() {
                let expected = oracle_dists
                    .get(&snk.to_raw())
                    .copied()
                    .unwrap_or(UNREACHABLE);
                assert_eq!(trial.path_length(src, snk), expected);
            }
        }
    }

    #[quickcheck]
    fn shortest_paths_are_real_and_minimal(ops: Ops) {
        let g: AdjacentListGraph = ops.apply();
        let vs: Vec<_> = g.iter_vertices().collect();
        for src in vs.iter() {
            for snk in vs.iter() {
                let path = g.shortest_path(src, snk);
                let len = g.path_length(src, snk);
                if len == UNREACHABLE {
                    assert!(path.is_empty());
                    continue;
                }
                assert_eq!(path.len(), len + 1);
                assert_eq!(path.first(), Some(src));
                assert_eq!(path.last(), Some(snk));
                for w in path.windows(2) {
                    assert!(g.contains_edge(&w[0], &w[1]));
                }
            }
        }
    }
}
