//! Suffix deduplication.
//!
//! The registry holds one canonical node per equivalence class of finished
//! subtrees. Because children are always registered before their parents,
//! two nodes are equivalent exactly when they compare equal one level deep
//! (see the `PartialEq` impl on [`Node`](super::Node)), which keeps both
//! hashing and comparison independent of subtree size.

use std::hash::BuildHasher;

use hashbrown::{DefaultHashBuilder, HashTable};

use super::graph::Graph;
use super::label::Label;
use super::node_arena::NodeId;
use super::output::Output;

/// Table of canonical nodes, keyed by node structure.
///
/// Only node handles are stored. Hashes and comparisons read the nodes out of
/// the graph, which is sound because registered nodes are never modified.
pub(crate) struct Registry {
    table: HashTable<NodeId>,
    hasher: DefaultHashBuilder,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Registry {
            table: HashTable::new(),
            hasher: DefaultHashBuilder::default(),
        }
    }

    /// Number of canonical nodes.
    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    /// Minimizes the most recently added path below `state`.
    ///
    /// Follows the arc with the greatest label, the only one that can still
    /// lead to unregistered nodes, and works bottom-up: each child is replaced
    /// by an equivalent registered node if there is one, and registered itself
    /// otherwise. `state` itself stays unregistered.
    ///
    /// Recursion depth is bounded by the length of the path being minimized.
    pub(crate) fn replace_or_register<L: Label, O: Output>(
        &mut self,
        graph: &mut Graph<L, O>,
        state: NodeId,
    ) {
        let Some((_, arc)) = graph.node(state).transitions().last() else {
            return;
        };
        let child = arc.target;
        if graph.node(child).is_registered() {
            return;
        }
        if !graph.node(child).transitions().is_empty() {
            self.replace_or_register(graph, child);
        }
        let canonical = self.canonicalize(graph, child);
        if canonical != child {
            log::trace!("merged {child:?} into {canonical:?}");
            graph
                .node_mut(state)
                .transitions_mut()
                .last_mut()
                .expect("state has a last arc")
                .target = canonical;
        }
    }

    /// Returns the registered node equivalent to `id`, registering `id` if
    /// there is none.
    fn canonicalize<L: Label, O: Output>(&mut self, graph: &mut Graph<L, O>, id: NodeId) -> NodeId {
        let node = graph.node(id);
        debug_assert!(!node.is_registered());
        debug_assert!(
            node.transitions()
                .iter()
                .all(|(_, arc)| graph.node(arc.target).is_registered()),
            "Cannot canonicalize unless all children are registered"
        );

        let hash = self.hasher.hash_one(node);
        if let Some(&existing) = self.table.find(hash, |&other| graph.node(other) == node) {
            return existing;
        }

        let Registry { table, hasher } = self;
        table.insert_unique(hash, id, |&other| hasher.hash_one(graph.node(other)));
        graph.node_mut(id).mark_registered();
        id
    }
}
