//! Output values carried on transducer arcs and accepting states.
//!
//! An output type behaves like a free monoid with a notion of "longest common
//! prefix": outputs along a path are concatenated, and the builder pushes the
//! common prefix of sibling outputs towards the root. Strings and byte strings
//! are the obvious instances. Unsigned integers form one too, with addition as
//! concatenation and `min` as common prefix, which is how a term dictionary
//! stores monotonically increasing ordinals.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// A value that can be split across the arcs of a path.
///
/// Implementations must satisfy, for all `a` and `b`:
///
/// - `empty().concat(&a) == a` and `a.concat(&empty()) == a`
/// - `p = a.common_prefix(&b)` is a prefix of both, so that
///   `p.concat(&a.suffix_from(p.len())) == a`
/// - `a.suffix_from(0) == a` and `a.suffix_from(a.len()).is_empty()`
pub trait Output: Clone + Eq + Hash + Debug {
    /// The identity element.
    fn empty() -> Self;

    /// Returns `self` followed by `other`.
    fn concat(&self, other: &Self) -> Self;

    /// Returns the longest value that is a prefix of both `self` and `other`.
    fn common_prefix(&self, other: &Self) -> Self;

    /// The length of this value, in the unit `suffix_from` counts in.
    fn len(&self) -> usize;

    /// Returns what is left of `self` after dropping its first `start` units.
    ///
    /// # Panics
    ///
    /// Panics if `start` exceeds [`len`](Output::len).
    fn suffix_from(&self, start: usize) -> Self;

    /// True if this is the identity element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Output for String {
    fn empty() -> Self {
        String::new()
    }

    fn concat(&self, other: &Self) -> Self {
        let mut s = String::with_capacity(self.len() + other.len());
        s.push_str(self);
        s.push_str(other);
        s
    }

    fn common_prefix(&self, other: &Self) -> Self {
        let end = self
            .char_indices()
            .zip(other.chars())
            .find(|&((_, a), b)| a != b)
            .map_or(self.len().min(other.len()), |((i, _), _)| i);
        self[..end].to_owned()
    }

    fn len(&self) -> usize {
        str::len(self)
    }

    fn suffix_from(&self, start: usize) -> Self {
        self[start..].to_owned()
    }
}

impl Output for Vec<u8> {
    fn empty() -> Self {
        Vec::new()
    }

    fn concat(&self, other: &Self) -> Self {
        let mut v = Vec::with_capacity(self.len() + other.len());
        v.extend_from_slice(self);
        v.extend_from_slice(other);
        v
    }

    fn common_prefix(&self, other: &Self) -> Self {
        let end = self
            .iter()
            .zip(other)
            .take_while(|(a, b)| a == b)
            .count();
        self[..end].to_vec()
    }

    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn suffix_from(&self, start: usize) -> Self {
        self[start..].to_vec()
    }
}

macro_rules! integer_output {
    ($($ty:ty),*) => {$(
        impl Output for $ty {
            fn empty() -> Self {
                0
            }

            fn concat(&self, other: &Self) -> Self {
                self + other
            }

            fn common_prefix(&self, other: &Self) -> Self {
                *self.min(other)
            }

            fn len(&self) -> usize {
                usize::try_from(*self).expect("integer output does not fit in usize")
            }

            fn suffix_from(&self, start: usize) -> Self {
                <$ty>::try_from(start)
                    .ok()
                    .and_then(|start| self.checked_sub(start))
                    .expect("suffix start beyond integer output")
            }
        }
    )*};
}

integer_output!(u32, u64, usize);

/// The output of an automaton without outputs.
///
/// Every value is empty, so arcs and accepting states never differ by output and
/// only structure decides whether two nodes can be merged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoOutput;

impl Output for NoOutput {
    fn empty() -> Self {
        NoOutput
    }

    fn concat(&self, _: &Self) -> Self {
        NoOutput
    }

    fn common_prefix(&self, _: &Self) -> Self {
        NoOutput
    }

    fn len(&self) -> usize {
        0
    }

    fn suffix_from(&self, start: usize) -> Self {
        assert_eq!(start, 0, "suffix start beyond empty output");
        NoOutput
    }
}

impl Display for NoOutput {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}
