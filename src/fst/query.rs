use hashbrown::HashSet;

use super::graph::Graph;
use super::key::IntoKey;
use super::label::Label;
use super::node_arena::NodeId;
use super::output::Output;

/// The result of looking up a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup<O> {
    /// Some label of the key has no arc.
    NotFound,
    /// The key spells a path, but only as a prefix of longer keys.
    NoValue,
    /// The key was inserted. Holds one output per insertion, in insertion order.
    ///
    /// Automata without outputs report `Found(vec![])`.
    Found(Vec<O>),
}

impl<O> Lookup<O> {
    /// True if the key was inserted.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Returns the outputs of an inserted key.
    pub fn into_values(self) -> Option<Vec<O>> {
        match self {
            Lookup::Found(values) => Some(values),
            Lookup::NotFound | Lookup::NoValue => None,
        }
    }
}

impl<L: Label, O: Output> Graph<L, O> {
    /// Looks up `key`, concatenating the arc outputs along its path.
    ///
    /// Each output of the final state is returned prefixed with the outputs
    /// collected on the way.
    pub fn search(&self, key: impl IntoKey<L>) -> Lookup<O> {
        let key = key.collect_key();
        let mut current = self.root();
        let mut prefix = O::empty();
        for &label in key.iter() {
            let Some(arc) = self.node(current).get(label) else {
                return Lookup::NotFound;
            };
            prefix = prefix.concat(&arc.output);
            current = arc.target;
        }
        let node = self.node(current);
        if !node.is_accepting() {
            return Lookup::NoValue;
        }
        Lookup::Found(node.outputs().iter().map(|out| prefix.concat(out)).collect())
    }

    /// True if `key` was inserted.
    pub fn contains(&self, key: impl IntoKey<L>) -> bool {
        self.state(key)
            .is_some_and(|id| self.node(id).is_accepting())
    }

    /// Returns the node `key` leads to, accepting or not.
    ///
    /// Keys whose remaining suffixes are equivalent lead to the same node once
    /// the graph is minimal.
    pub fn state(&self, key: impl IntoKey<L>) -> Option<NodeId> {
        key.collect_key()
            .iter()
            .try_fold(self.root(), |id, &label| self.child(id, label))
    }

    /// Returns every key with its outputs, in label order.
    ///
    /// Outputs are fully concatenated along each path, exactly as
    /// [`search`](Graph::search) would return them.
    pub fn entries(&self) -> Vec<(Vec<L>, Vec<O>)> {
        let mut entries = Vec::new();
        let mut key = Vec::new();
        self.collect_entries(self.root(), &mut key, &O::empty(), &mut entries);
        entries
    }

    fn collect_entries(
        &self,
        id: NodeId,
        key: &mut Vec<L>,
        prefix: &O,
        entries: &mut Vec<(Vec<L>, Vec<O>)>,
    ) {
        let node = self.node(id);
        if node.is_accepting() {
            let outputs = node.outputs().iter().map(|out| prefix.concat(out)).collect();
            entries.push((key.clone(), outputs));
        }
        for (label, arc) in node.transitions().iter() {
            key.push(*label);
            self.collect_entries(arc.target, key, &prefix.concat(&arc.output), entries);
            key.pop();
        }
    }

    /// Counts the distinct nodes reachable from the root.
    pub fn reachable_node_count(&self) -> usize {
        let mut visited = HashSet::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if visited.insert(id) {
                stack.extend(self.node(id).transitions().iter().map(|(_, arc)| arc.target));
            }
        }
        visited.len()
    }
}
