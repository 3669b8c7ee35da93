//! An index-addressed arena for graph nodes.
//!
//! Nodes refer to each other through [`NodeId`] handles instead of references,
//! so a node can be the target of any number of arcs and still be mutated
//! through the arena while its subtree is being built.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A stable handle to a node in a graph.
///
/// Handles are assigned in allocation order and are never reused within one
/// arena. Two arcs point at the same node exactly when their handles are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the position of this node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(u32::try_from(index).expect("node arena exhausted"))
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Append-only storage for values addressed by [`NodeId`].
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<T>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        NodeArena { slots: Vec::new() }
    }

    /// Creates an empty arena with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Allocates the value built by `make`, which receives the handle the value
    /// will live under.
    pub fn alloc_with(&mut self, make: impl FnOnce(NodeId) -> T) -> NodeId {
        let id = NodeId::from_index(self.slots.len());
        self.slots.push(make(id));
        id
    }

    /// Returns the number of values allocated in this arena.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Consumes the arena, returning its values in allocation order.
    pub fn into_vec(self) -> Vec<T> {
        self.slots
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.slots[id.index()]
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.slots[id.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn handles_follow_allocation_order() {
        let mut arena = NodeArena::new();
        let a = arena.alloc_with(|id| (id, "a"));
        let b = arena.alloc_with(|id| (id, "b"));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena[a], (a, "a"));
        assert_eq!(arena[b].1, "b");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn values_are_mutable_through_handles() {
        let mut arena = NodeArena::with_capacity(1);
        let a = arena.alloc_with(|_| 1);
        arena[a] += 41;
        assert_eq!(arena.into_vec(), vec![42]);
    }
}
