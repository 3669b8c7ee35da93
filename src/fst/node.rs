use std::hash;

use super::label::Label;
use super::node_arena::NodeId;
use super::output::Output;
use super::transitions::Transitions;

/// An outgoing edge: the node it leads to and the output emitted when it is taken.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Arc<O: Output> {
    /// The node this arc leads to. Many arcs may share one target.
    pub target: NodeId,
    /// The output fragment emitted when this arc is traversed.
    pub output: O,
}

impl<O: Output> Arc<O> {
    /// Creates an arc to `target` emitting `output`.
    pub fn new(target: NodeId, output: O) -> Self {
        Arc { target, output }
    }
}

/// A state in the graph.
#[derive(Clone, Debug)]
pub struct Node<L: Label, O: Output> {
    id: NodeId,
    accepting: bool,
    outputs: Vec<O>,
    transitions: Transitions<L, O>,
    registered: bool,
}

impl<L: Label, O: Output> Node<L, O> {
    /// Creates a node without arcs or outputs.
    pub(crate) fn new(id: NodeId, accepting: bool) -> Self {
        Node {
            id,
            accepting,
            outputs: Vec::new(),
            transitions: Transitions::None,
            registered: false,
        }
    }

    /// The handle this node was allocated under.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// True if this node corresponds to the end of a key.
    #[inline]
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// The outputs of an accepting node, one per insertion that ended here.
    ///
    /// The output of a key is the concatenation of the arc outputs along its
    /// path followed by one of these.
    #[inline]
    pub fn outputs(&self) -> &[O] {
        &self.outputs
    }

    /// The outgoing arcs, sorted by label.
    #[inline]
    pub fn transitions(&self) -> &Transitions<L, O> {
        &self.transitions
    }

    /// Returns the arc labelled `label`, or None if no such arc exists.
    #[inline]
    pub fn get(&self, label: L) -> Option<&Arc<O>> {
        self.transitions.get(label)
    }

    /// True once this node has been entered into a registry.
    ///
    /// Registered nodes may be shared and are never modified again.
    #[inline]
    pub(crate) fn is_registered(&self) -> bool {
        self.registered
    }

    pub(crate) fn set_accepting(&mut self) {
        debug_assert!(!self.registered || self.accepting, "registered nodes are immutable");
        self.accepting = true;
    }

    pub(crate) fn outputs_mut(&mut self) -> &mut Vec<O> {
        debug_assert!(!self.registered, "registered nodes are immutable");
        &mut self.outputs
    }

    pub(crate) fn transitions_mut(&mut self) -> &mut Transitions<L, O> {
        debug_assert!(!self.registered, "registered nodes are immutable");
        &mut self.transitions
    }

    pub(crate) fn mark_registered(&mut self) {
        self.registered = true;
    }

    /// Moves this node to a new handle, rewriting arc targets through `remap`.
    pub(crate) fn relocate(&mut self, id: NodeId, mut remap: impl FnMut(NodeId) -> NodeId) {
        self.id = id;
        for (_, arc) in self.transitions.as_mut_slice() {
            arc.target = remap(arc.target);
        }
    }
}

// Nodes are compared one level deep: targets are compared by handle, not by
// structure. Minimization registers children before their parents, so equal
// subtrees already share a handle by the time their parents are compared.
impl<L: Label, O: Output> PartialEq for Node<L, O> {
    fn eq(&self, rhs: &Self) -> bool {
        self.accepting == rhs.accepting
            && self.transitions.len() == rhs.transitions.len()
            && self.outputs == rhs.outputs
            && self
                .transitions
                .iter()
                .zip(rhs.transitions.iter())
                .all(|((l1, a1), (l2, a2))| l1 == l2 && a1 == a2)
    }
}

impl<L: Label, O: Output> Eq for Node<L, O> {}

// Consistent with PartialEq: the handle and registration flag are left out.
impl<L: Label, O: Output> hash::Hash for Node<L, O> {
    fn hash<H>(&self, state: &mut H)
    where
        H: hash::Hasher,
    {
        self.accepting.hash(state);
        self.outputs.hash(state);
        state.write_usize(self.transitions.len());
        for (label, arc) in self.transitions.iter() {
            (label, arc).hash(state);
        }
    }
}
