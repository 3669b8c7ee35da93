use super::graph::Graph;
use super::key::IntoKey;
use super::label::Label;
use super::node::Arc;
use super::output::Output;
use super::query::Lookup;

/// A prefix tree mapping keys to values.
///
/// Shares common prefixes but never suffixes, so it uses one node per distinct
/// prefix of the key set. Keys may be inserted in any order. This is the
/// baseline the minimal builders are checked against: it answers every lookup
/// the same way they do.
#[derive(Clone, Debug, Default)]
pub struct Trie<L: Label, O: Output> {
    graph: Graph<L, O>,
}

impl<L: Label, O: Output> Trie<L, O> {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Trie {
            graph: Graph::new(),
        }
    }

    /// Adds `value` under `key`, creating nodes for any missing part of its path.
    ///
    /// Inserting a key again appends another value.
    pub fn insert(&mut self, key: impl IntoKey<L>, value: O) {
        let key = key.collect_key();
        let mut current = self.graph.root();
        for &label in key.iter() {
            current = match self.graph.child(current, label) {
                Some(next) => next,
                None => {
                    let next = self.graph.add_node(false);
                    self.graph
                        .node_mut(current)
                        .transitions_mut()
                        .insert(label, Arc::new(next, O::empty()));
                    next
                }
            };
        }
        let node = self.graph.node_mut(current);
        node.set_accepting();
        node.outputs_mut().push(value);
    }

    /// Looks up the values stored under `key`.
    pub fn search(&self, key: impl IntoKey<L>) -> Lookup<O> {
        self.graph.search(key)
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<L, O> {
        &self.graph
    }

    /// Returns the number of nodes in the trie.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}
