/// Graphviz export of graphs and finished automata.
#[cfg(feature = "dot")]
pub mod dot;
/// Build and load error types.
pub mod error;
/// Minimal acyclic automaton builder and the finished automaton.
pub mod fsa;
/// Minimal acyclic transducer builder with output pushing, and the finished transducer.
#[allow(clippy::module_inception)]
pub mod fst;
/// Arena-backed graph shared by every builder.
pub mod graph;
/// Conversions from strings, slices and arrays into label sequences.
pub mod key;
/// Trait for types that can serve as arc labels.
pub mod label;
/// Building automata and transducers from line-oriented files.
pub mod load;
/// Node and arc types.
pub mod node;
/// Internal index-addressed arena.
pub(crate) mod node_arena;
/// Output values and the algebra the transducer builder relies on.
pub mod output;
/// Lookups and traversals over a graph.
pub mod query;
pub(crate) mod registry;
/// Baseline prefix tree.
pub mod trie;
/// Compact sorted map from labels to arcs.
pub mod transitions;

#[cfg(test)]
mod test_data;

#[cfg(feature = "dot")]
pub use dot::Dot;
pub use error::{BuildError, LoadError};
pub use fsa::{build_fsa, Fsa, FsaBuilder};
pub use fst::{build_fst, Fst, FstBuilder};
pub use graph::Graph;
pub use key::IntoKey;
pub use label::Label;
pub use load::{build_fsa_from_file, build_fst_from_file};
pub use node::{Arc, Node};
pub use node_arena::NodeId;
pub use output::{NoOutput, Output};
pub use query::Lookup;
pub use transitions::Transitions;
pub use trie::Trie;
