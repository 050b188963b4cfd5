mod adjacent_list;
pub use self::adjacent_list::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use petgraph::graphmap::DiGraphMap;
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;
    use std::collections::BTreeSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        AddVertex(VertexId),
        RemoveVertex(VertexId),
        AddEdge((VertexId, VertexId)),
        RemoveEdge((VertexId, VertexId)),
    }

    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }

        /// Replays operations on a fresh graph.
        ///
        /// Vertex ids in `Op::AddVertex` are generated in the same order
        /// as any fresh graph hands them out.
        pub fn apply<G>(&self) -> G
        where
            G: GrowableGraph + VertexShrinkableGraph,
        {
            let mut g = G::new();
            for op in self.iter() {
                match op {
                    Op::AddVertex(vid) => {
                        let my_vid = g.add_vertex();
                        assert_eq!(my_vid, *vid);
                    }
                    Op::RemoveVertex(vid) => {
                        let _ = g.remove_vertex(vid);
                    }
                    Op::AddEdge((source, sink)) => {
                        g.add_edge(*source, *sink);
                    }
                    Op::RemoveEdge((source, sink)) => {
                        g.remove_edge(source, sink);
                    }
                }
            }
            g
        }

        pub fn oracle(&self) -> DiGraphMap<usize, ()> {
            let mut g = DiGraphMap::new();
            for op in self.iter() {
                match op {
                    Op::AddVertex(vid) => {
                        g.add_node(vid.to_raw());
                    }
                    Op::RemoveVertex(vid) => {
                        g.remove_node(vid.to_raw());
                    }
                    Op::AddEdge((source, sink)) => {
                        g.add_edge(source.to_raw(), sink.to_raw(), ());
                    }
                    Op::RemoveEdge((source, sink)) => {
                        g.remove_edge(source.to_raw(), sink.to_raw());
                    }
                }
            }
            g
        }
    }

    fn pick<T: Copy>(g: &mut quickcheck::Gen, known: &BTreeSet<T>) -> T {
        let idx = usize::arbitrary(g) % known.len();
        *known.iter().nth(idx).unwrap()
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut vid_factory = VertexIdFactory::new();
            let mut known_vid = BTreeSet::new();
            let mut known_edges = BTreeSet::new();
            let ops = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .filter_map(|_| match u8::arbitrary(g) % 4 {
                    0 => {
                        let vid = vid_factory.one_more();
                        known_vid.insert(vid);
                        Some(Op::AddVertex(vid))
                    }
                    1 => {
                        if known_vid.is_empty() {
                            None
                        } else {
                            let vid = pick(g, &known_vid);
                            known_vid.remove(&vid);
                            known_edges.retain(|(src, snk)| *src != vid && *snk != vid);
                            Some(Op::RemoveVertex(vid))
                        }
                    }
                    2 => {
                        if known_vid.is_empty() {
                            None
                        } else {
                            let source = pick(g, &known_vid);
                            let sink = pick(g, &known_vid);
                            known_edges.insert((source, sink));
                            Some(Op::AddEdge((source, sink)))
                        }
                    }
                    3 => {
                        if known_edges.is_empty() {
                            None
                        } else {
                            let edge = pick(g, &known_edges);
                            known_edges.remove(&edge);
                            Some(Op::RemoveEdge(edge))
                        }
                    }
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| {
                let mut res = me.clone();
                res.ops = me.ops[0..n].to_vec();
                res
            });
            Box::new(it)
        }
    }
}
