use smallvec::SmallVec;

use super::error::BuildError;
use super::label::Label;

/// Inline buffer for a single key. Keys longer than this spill to the heap.
pub type KeyBuf<L> = SmallVec<[L; 32]>;

/// Trait for types that can be used as a key when building a graph.
///
/// Implemented for common string and sequence types so that the builders'
/// `insert` methods and lookups accept them directly without manual conversion.
pub trait IntoKey<L: Label> {
    /// Collects this key into a label buffer.
    fn collect_key(self) -> KeyBuf<L>;
}

// String types → char

macro_rules! string_key {
    ($($ty:ty),*) => {$(
        impl IntoKey<char> for $ty {
            fn collect_key(self) -> KeyBuf<char> {
                self.chars().collect()
            }
        }
    )*};
}

string_key!(&str, &&str, String, &String);

// Generic sequence types → L

impl<L: Label> IntoKey<L> for &[L] {
    fn collect_key(self) -> KeyBuf<L> {
        self.iter().copied().collect()
    }
}

impl<L: Label> IntoKey<L> for Vec<L> {
    fn collect_key(self) -> KeyBuf<L> {
        self.into_iter().collect()
    }
}

impl<L: Label> IntoKey<L> for &Vec<L> {
    fn collect_key(self) -> KeyBuf<L> {
        self.iter().copied().collect()
    }
}

impl<L: Label, const N: usize> IntoKey<L> for [L; N] {
    fn collect_key(self) -> KeyBuf<L> {
        self.into_iter().collect()
    }
}

impl<L: Label, const N: usize> IntoKey<L> for &[L; N] {
    fn collect_key(self) -> KeyBuf<L> {
        self.iter().copied().collect()
    }
}

/// Remembers the most recently accepted key and rejects keys that sort before it.
///
/// Equal consecutive keys are accepted.
#[derive(Debug)]
pub(crate) struct KeyOrder<L: Label> {
    previous: Option<KeyBuf<L>>,
}

impl<L: Label> KeyOrder<L> {
    pub(crate) fn new() -> Self {
        KeyOrder { previous: None }
    }

    /// Checks that `key` does not sort before the previous key.
    pub(crate) fn check(&self, key: &[L]) -> Result<(), BuildError<L>> {
        match &self.previous {
            Some(previous) if key < previous.as_slice() => Err(BuildError::OutOfOrder {
                previous: previous.to_vec(),
                current: key.to_vec(),
            }),
            _ => Ok(()),
        }
    }

    /// Records `key` as the most recently accepted key.
    pub(crate) fn advance(&mut self, key: KeyBuf<L>) {
        debug_assert!(self.check(&key).is_ok());
        self.previous = Some(key);
    }
}
