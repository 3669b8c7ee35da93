//! # libfst
//!
//! Incremental construction of minimal acyclic
//! [finite-state automata](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! and transducers from sorted keys.
//!
//! An automaton ([`Fsa`]) is a trie that also shares suffixes: a set of keys
//! stored in the fewest possible states, built in a single pass with the
//! algorithm of [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1).
//! A transducer ([`Fst`]) additionally maps each key to one or more outputs.
//! Outputs are split across the arcs of a key's path and pushed towards the
//! root, following Mihov and Maurel, so that paths can still share their tails.
//!
//! ## Features
//!
//! - **Generic over label type**: `char`, `u8`, `u16`, or any type implementing [`Label`]
//! - **Generic over output type**: strings, byte strings and unsigned integers
//!   out of the box, or any type implementing [`Output`]
//! - **Incremental**: lookups work while the builder is still accepting keys
//! - **Diagnostics**: Graphviz export with the `dot` feature, enabled by default
//!
//! ## Quick Start
//!
//! ```
//! use libfst::build_fsa;
//!
//! let fsa = build_fsa(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
//! assert!(fsa.contains("CAKE"));
//! assert!(!fsa.contains("AKE"));
//! // every key shares the "AKE" tail
//! assert_eq!(fsa.node_count(), 5);
//! ```
//!
//! Transducers take `(key, value)` pairs. Repeating a key keeps every value:
//!
//! ```
//! use libfst::{FstBuilder, Lookup};
//!
//! let mut builder = FstBuilder::new();
//! builder.insert("February", 28u64).unwrap();
//! builder.insert("February", 29).unwrap();
//! builder.insert("March", 31).unwrap();
//! assert!(builder.insert("January", 31).is_err());
//!
//! let fst = builder.finish();
//! assert_eq!(fst.search("February"), Lookup::Found(vec![28, 29]));
//! assert_eq!(fst.search("Mar"), Lookup::NoValue);
//! assert_eq!(fst.search("Smarch"), Lookup::NotFound);
//! ```
//!
//! ## Generic Usage
//!
//! ```
//! use libfst::build_fst;
//!
//! let keys: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
//! let fst = build_fst(keys.into_iter().zip(["ab", "ac", "b"].map(String::from))).unwrap();
//! assert!(fst.contains([1u8, 2, 3]));
//! assert!(!fst.contains([1u8, 2, 5]));
//! ```

#![warn(missing_docs)]

/// Automata, transducers and the graph they are built on.
pub mod fst;

pub use fst::{
    build_fsa, build_fsa_from_file, build_fst, build_fst_from_file, BuildError, Fsa, FsaBuilder,
    Fst, FstBuilder, Graph, IntoKey, Label, LoadError, Lookup, NoOutput, NodeId, Output, Trie,
};
