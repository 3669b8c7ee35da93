use hashbrown::HashMap;
use mark_last::MarkLastIterator;

use super::label::Label;
use super::node::{Arc, Node};
use super::node_arena::{NodeArena, NodeId};
use super::output::Output;

/// An acyclic graph of nodes rooted at a single start state.
///
/// This is the storage shared by [`Trie`](super::Trie), the automaton builders
/// and their finished results. Nodes live in an arena and arcs refer to their
/// targets by [`NodeId`], so after minimization one node can be the target of
/// any number of arcs.
#[derive(Clone, Debug)]
pub struct Graph<L: Label, O: Output> {
    nodes: NodeArena<Node<L, O>>,
    root: NodeId,
}

impl<L: Label, O: Output> Default for Graph<L, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label, O: Output> Graph<L, O> {
    /// Creates a graph holding only a non-accepting root.
    pub fn new() -> Self {
        let mut nodes = NodeArena::new();
        let root = nodes.alloc_with(|id| Node::new(id, false));
        Graph { nodes, root }
    }

    /// The start state.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<L, O> {
        &self.nodes[id]
    }

    /// Returns the number of nodes allocated, including nodes that minimization
    /// has made unreachable.
    ///
    /// For a finished automaton this equals the number of reachable nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node that `label`'s arc out of `id` leads to.
    #[inline]
    pub fn child(&self, id: NodeId, label: L) -> Option<NodeId> {
        self.nodes[id].get(label).map(|arc| arc.target)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<L, O> {
        &mut self.nodes[id]
    }

    pub(crate) fn add_node(&mut self, accepting: bool) -> NodeId {
        self.nodes.alloc_with(|id| Node::new(id, accepting))
    }

    /// Walks `key` from the root as far as arcs exist.
    ///
    /// Returns the length of the longest prefix of `key` present in the graph
    /// and the node that prefix leads to.
    pub(crate) fn common_prefix(&self, key: &[L]) -> (usize, NodeId) {
        let mut current = self.root;
        for (i, &label) in key.iter().enumerate() {
            match self.child(current, label) {
                Some(next) => current = next,
                None => return (i, current),
            }
        }
        (key.len(), current)
    }

    /// Hangs a fresh chain of nodes spelling `suffix` off `state`.
    ///
    /// Every new arc carries an empty output and only the last new node is
    /// accepting. Returns the last node of the chain, or `state` itself if
    /// `suffix` is empty.
    pub(crate) fn add_suffix(&mut self, state: NodeId, suffix: &[L]) -> NodeId {
        let mut parent = state;
        for (last, label) in suffix.iter().copied().mark_last() {
            let child = self.add_node(last);
            self.nodes[parent]
                .transitions_mut()
                .insert(label, Arc::new(child, O::empty()));
            parent = child;
        }
        parent
    }

    /// Rebuilds the arena with only the nodes reachable from the root.
    ///
    /// Surviving nodes are renumbered in depth-first pre-order, so the root
    /// becomes node 0 and arcs are visited in label order.
    pub(crate) fn compact(self) -> Self {
        let mut remap: HashMap<NodeId, NodeId> = HashMap::new();
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if remap.contains_key(&id) {
                continue;
            }
            remap.insert(id, NodeId::from_index(order.len()));
            order.push(id);
            stack.extend(
                self.nodes[id]
                    .transitions()
                    .iter()
                    .rev()
                    .map(|(_, arc)| arc.target),
            );
        }

        let mut slots: Vec<Option<Node<L, O>>> =
            self.nodes.into_vec().into_iter().map(Some).collect();
        let mut nodes = NodeArena::with_capacity(order.len());
        for old in order {
            let mut node = slots[old.index()]
                .take()
                .expect("each reachable node is visited once");
            nodes.alloc_with(|id| {
                node.relocate(id, |target| remap[&target]);
                node
            });
        }
        Graph {
            nodes,
            root: NodeId::from_index(0),
        }
    }
}
