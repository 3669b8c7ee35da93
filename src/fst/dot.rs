//! Graphviz export.
//!
//! Accepting nodes are drawn as double circles labelled with their outputs,
//! other nodes as empty circles. Edges are labelled with their label, followed
//! by `|` and the arc output when that output is not empty. A node reached by
//! several arcs is emitted once.

use std::fmt::{self, Display, Write};

use hashbrown::HashSet;

use super::fsa::Fsa;
use super::fst::Fst;
use super::graph::Graph;
use super::label::Label;
use super::node_arena::NodeId;
use super::output::Output;
use super::trie::Trie;

/// Renders a graph in the Graphviz `dot` language when formatted.
///
/// Returned by [`Graph::dot`].
pub struct Dot<'g, L: Label, O: Output> {
    graph: &'g Graph<L, O>,
    name: &'g str,
}

impl<L, O> Graph<L, O>
where
    L: Label + Display,
    O: Output + Display,
{
    /// Returns a value that formats as a `digraph` named `name`.
    pub fn dot<'g>(&'g self, name: &'g str) -> Dot<'g, L, O> {
        Dot { graph: self, name }
    }

    /// Renders the graph as a `digraph` named `name`.
    pub fn to_dot(&self, name: &str) -> String {
        self.dot(name).to_string()
    }
}

impl<L, O> Display for Dot<'_, L, O>
where
    L: Label + Display,
    O: Output + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {} {{", self.name)?;
        let mut visited = HashSet::new();
        self.write_node(f, self.graph.root(), &mut visited)?;
        writeln!(f, "}}")
    }
}

impl<L, O> Dot<'_, L, O>
where
    L: Label + Display,
    O: Output + Display,
{
    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        visited: &mut HashSet<NodeId>,
    ) -> fmt::Result {
        if !visited.insert(id) {
            return Ok(());
        }
        let node = self.graph.node(id);
        if node.is_accepting() {
            write!(f, "  \"{id}\" [shape=doublecircle,label=\"")?;
            for (i, out) in node.outputs().iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                write_escaped(f, out)?;
            }
            f.write_str("\"];\n")?;
        } else {
            writeln!(f, "  \"{id}\" [shape=circle,label=\"\"];")?;
        }
        for (label, arc) in node.transitions().iter() {
            write!(f, "  \"{id}\" -> \"{}\" [label=\"", arc.target)?;
            write_escaped(f, label)?;
            if !arc.output.is_empty() {
                f.write_char('|')?;
                write_escaped(f, &arc.output)?;
            }
            f.write_str("\"];\n")?;
            self.write_node(f, arc.target, visited)?;
        }
        Ok(())
    }
}

/// Writes `value` with `"` and `\` backslash-escaped.
fn write_escaped(f: &mut fmt::Formatter<'_>, value: &impl Display) -> fmt::Result {
    for c in value.to_string().chars() {
        if matches!(c, '"' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    Ok(())
}

impl<L: Label + Display, O: Output + Display> Trie<L, O> {
    /// Renders the trie as `digraph Trie`.
    pub fn to_dot(&self) -> String {
        self.graph().to_dot("Trie")
    }
}

impl<L: Label + Display> Fsa<L> {
    /// Renders the automaton as `digraph FSA`.
    pub fn to_dot(&self) -> String {
        self.graph().to_dot("FSA")
    }
}

impl<L: Label + Display, O: Output + Display> Fst<L, O> {
    /// Renders the transducer as `digraph FST`.
    pub fn to_dot(&self) -> String {
        self.graph().to_dot("FST")
    }
}
