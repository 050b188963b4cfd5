use super::DirectedGraph;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};

/// One line per vertex, in the order vertices were added.
/// Each line is the vertex, `:`, and then its out-neighbors separated by `, `.
///
/// ```plain
/// A: A, B
/// B:
/// C: A, B
/// ```
impl<V, S> Display for DirectedGraph<V, S>
where
    V: Hash + Eq + Display,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for v in self.iter_vertices() {
            write!(f, "{}:", v)?;
            let mut sep = " ";
            for sink in self.adjacent_to(v) {
                write!(f, "{}{}", sep, sink)?;
                sep = ", ";
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V, S> Debug for DirectedGraph<V, S>
where
    V: Hash + Eq + Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DirectedGraph {{")?;
        write!(f, "{:?}", self.debug(2, 2))?;
        write!(f, "}}")
    }
}

impl<V, S> DirectedGraph<V, S>
where
    V: Hash + Eq + Debug,
    S: BuildHasher,
{
    /// Inspects vertices and their out-neighbors with customized indentation.
    pub fn debug(&self, init: usize, indent: usize) -> GraphDebug<'_, V, S> {
        GraphDebug {
            graph: self,
            indent: Indention {
                spaces: init,
                step: indent,
            },
        }
    }
}

/// Default implementation about how to inspect a [DirectedGraph].
pub struct GraphDebug<'a, V, S> {
    graph: &'a DirectedGraph<V, S>,
    indent: Indention,
}

impl<'a, V, S> Debug for GraphDebug<'a, V, S>
where
    V: Hash + Eq + Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let indent = self.indent.one_more_level();
        for vert in self.graph.iter_vertices() {
            writeln!(f, "{}{:?}", self.indent, vert)?;
            for sink in self.graph.adjacent_to(vert) {
                writeln!(f, "{}-> {:?}", indent, sink)?;
            }
        }
        Ok(())
    }
}

struct Indention {
    spaces: usize,
    step: usize,
}

impl Display for Indention {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:1$}", "", self.spaces)
    }
}

impl Indention {
    fn one_more_level(&self) -> Self {
        Self {
            spaces: self.spaces + self.step,
            step: self.step,
        }
    }
}
