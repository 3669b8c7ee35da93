use std::slice;

use super::label::Label;
use super::node::Arc;
use super::output::Output;

/// The outgoing arcs of a node, kept sorted by label.
///
/// A compact representation that doesn't allocate until there are at least
/// three arcs. Most nodes of a minimal graph have one or two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transitions<L: Label, O: Output> {
    /// No arcs.
    None,
    /// Exactly one arc.
    One((L, Arc<O>)),
    /// Exactly two arcs, in label order.
    Two([(L, Arc<O>); 2]),
    /// Three or more arcs stored in a vector, in label order.
    Many(Vec<(L, Arc<O>)>),
}

impl<L: Label, O: Output> Default for Transitions<L, O> {
    fn default() -> Self {
        Transitions::None
    }
}

impl<L: Label, O: Output> Transitions<L, O> {
    /// Returns the arcs as a slice sorted by label.
    #[inline]
    pub fn as_slice(&self) -> &[(L, Arc<O>)] {
        match self {
            Transitions::None => &[],
            Transitions::One(arc) => slice::from_ref(arc),
            Transitions::Two(arcs) => &arcs[..],
            Transitions::Many(arcs) => arcs.as_slice(),
        }
    }

    /// Returns the arcs as a mutable slice sorted by label.
    ///
    /// Labels must not be changed through this slice.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [(L, Arc<O>)] {
        match self {
            Transitions::None => &mut [],
            Transitions::One(arc) => slice::from_mut(arc),
            Transitions::Two(arcs) => &mut arcs[..],
            Transitions::Many(arcs) => arcs.as_mut_slice(),
        }
    }

    /// Returns an iterator over `(label, arc)` pairs in label order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, (L, Arc<O>)> {
        self.as_slice().iter()
    }

    /// Returns the number of arcs.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Transitions::None => 0,
            Transitions::One(_) => 1,
            Transitions::Two(_) => 2,
            Transitions::Many(arcs) => arcs.len(),
        }
    }

    /// True if there are no arcs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Transitions::None)
    }

    /// Returns the arc labelled `label`, or None if no such arc exists.
    #[inline]
    pub fn get(&self, label: L) -> Option<&Arc<O>> {
        match self {
            Transitions::None => None,
            Transitions::One((l, arc)) => (*l == label).then_some(arc),
            Transitions::Two([(l1, a1), (l2, a2)]) => {
                if label == *l1 {
                    Some(a1)
                } else if label == *l2 {
                    Some(a2)
                } else {
                    None
                }
            }
            Transitions::Many(arcs) => {
                // Unrolling by 2 exposes load-level parallelism and beats binary
                // search for the small fan-outs typical of key sets.
                let chunks = arcs.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == label {
                        return Some(&chunk[0].1);
                    }
                    if chunk[1].0 == label {
                        return Some(&chunk[1].1);
                    }
                }
                remainder
                    .iter()
                    .find(|(l, _)| *l == label)
                    .map(|(_, arc)| arc)
            }
        }
    }

    /// Returns the arc labelled `label` for modification.
    pub(crate) fn get_mut(&mut self, label: L) -> Option<&mut Arc<O>> {
        self.as_mut_slice()
            .iter_mut()
            .find(|(l, _)| *l == label)
            .map(|(_, arc)| arc)
    }

    /// Returns the arc with the greatest label.
    #[inline]
    pub fn last(&self) -> Option<(L, &Arc<O>)> {
        self.as_slice().last().map(|(l, arc)| (*l, arc))
    }

    /// Returns the arc with the greatest label for modification.
    pub(crate) fn last_mut(&mut self) -> Option<&mut Arc<O>> {
        self.as_mut_slice().last_mut().map(|(_, arc)| arc)
    }

    /// Inserts an arc in sorted position.
    ///
    /// Appending past the current greatest label, which is what sorted insertion
    /// does, costs no shifting.
    pub(crate) fn insert(&mut self, label: L, arc: Arc<O>) {
        debug_assert!(self.get(label).is_none(), "insert: label already exists");
        *self = match std::mem::take(self) {
            Transitions::None => Transitions::One((label, arc)),
            Transitions::One((l1, a1)) => {
                if label < l1 {
                    Transitions::Two([(label, arc), (l1, a1)])
                } else {
                    Transitions::Two([(l1, a1), (label, arc)])
                }
            }
            Transitions::Two(arcs) => {
                let mut v = Vec::with_capacity(4);
                v.extend(arcs);
                let pos = v.partition_point(|(l, _)| *l < label);
                v.insert(pos, (label, arc));
                Transitions::Many(v)
            }
            Transitions::Many(mut arcs) => {
                let pos = arcs.partition_point(|(l, _)| *l < label);
                arcs.insert(pos, (label, arc));
                Transitions::Many(arcs)
            }
        };
    }
}
