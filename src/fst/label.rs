use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as transition labels.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: transitions store labels by value
/// - `Eq + Ord`: keys are compared lexicographically, label by label
/// - `Hash`: structural node hashing in the registry
/// - `Debug`: error messages and debug printing
pub trait Label: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> Label for T {}
