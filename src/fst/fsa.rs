use super::error::BuildError;
use super::graph::Graph;
use super::key::{IntoKey, KeyOrder};
use super::label::Label;
use super::node_arena::NodeId;
use super::output::NoOutput;
use super::query::Lookup;
use super::registry::Registry;

/// A builder for minimal acyclic automata.
///
/// Keys must be inserted in lexicographically sorted order. Each insertion
/// first minimizes whatever part of the previous key the new key does not
/// share, since sorted order guarantees nothing will extend it again, and then
/// appends the new key's remaining suffix as a fresh chain of nodes. The
/// result is the unique minimal automaton for the key set.
///
/// Lookups work at any point; [`finish`](FsaBuilder::finish) minimizes the
/// last key's suffix and returns the read-only [`Fsa`].
pub struct FsaBuilder<L: Label> {
    graph: Graph<L, NoOutput>,
    registry: Registry,
    order: KeyOrder<L>,
    len: usize,
}

impl<L: Label> Default for FsaBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> FsaBuilder<L> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        FsaBuilder {
            graph: Graph::new(),
            registry: Registry::new(),
            order: KeyOrder::new(),
            len: 0,
        }
    }

    /// Adds a key to the automaton being constructed.
    ///
    /// The key can be any type that implements [`IntoKey`], including `&str`,
    /// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`.
    /// Adding the key that was added last is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::OutOfOrder`] if the key sorts before the
    /// previously added key. The builder is left unchanged.
    pub fn insert(&mut self, key: impl IntoKey<L>) -> Result<(), BuildError<L>> {
        let key = key.collect_key();
        self.order.check(&key)?;

        let (prefix_len, state) = self.graph.common_prefix(&key);
        if !self.graph.node(state).transitions().is_empty() {
            self.registry.replace_or_register(&mut self.graph, state);
        }
        let last = self.graph.add_suffix(state, &key[prefix_len..]);
        self.graph.node_mut(last).set_accepting();

        self.order.advance(key);
        self.len += 1;
        Ok(())
    }

    /// True if `key` has been inserted.
    pub fn contains(&self, key: impl IntoKey<L>) -> bool {
        self.graph.contains(key)
    }

    /// Looks up `key` among the keys inserted so far.
    pub fn search(&self, key: impl IntoKey<L>) -> Lookup<NoOutput> {
        self.graph.search(key)
    }

    /// Returns the number of keys inserted so far, counting repeats.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The graph built so far.
    pub fn graph(&self) -> &Graph<L, NoOutput> {
        &self.graph
    }

    /// Finalizes construction and returns the minimal automaton.
    ///
    /// This minimizes the suffix of the last key and drops every node that
    /// minimization made unreachable.
    pub fn finish(mut self) -> Fsa<L> {
        let root = self.graph.root();
        self.registry.replace_or_register(&mut self.graph, root);
        let allocated = self.graph.node_count();
        let graph = self.graph.compact();
        log::debug!(
            "finished automaton: {} keys, {} nodes allocated, {} registered, {} kept",
            self.len,
            allocated,
            self.registry.len(),
            graph.node_count()
        );
        Fsa { graph }
    }
}

/// A minimal acyclic automaton: a set of keys sharing both prefixes and suffixes.
#[derive(Clone, Debug)]
pub struct Fsa<L: Label> {
    graph: Graph<L, NoOutput>,
}

impl<L: Label> Fsa<L> {
    /// True if `key` is in the set.
    pub fn contains(&self, key: impl IntoKey<L>) -> bool {
        self.graph.contains(key)
    }

    /// Looks up `key`, telling a missing key apart from a prefix of one.
    pub fn search(&self, key: impl IntoKey<L>) -> Lookup<NoOutput> {
        self.graph.search(key)
    }

    /// True if some key in the set starts with `prefix`.
    pub fn has_prefix(&self, prefix: impl IntoKey<L>) -> bool {
        self.graph.state(prefix).is_some()
    }

    /// Returns the node `key` leads to.
    pub fn state(&self, key: impl IntoKey<L>) -> Option<NodeId> {
        self.graph.state(key)
    }

    /// Returns every key in the set, in sorted order.
    pub fn keys(&self) -> Vec<Vec<L>> {
        self.graph.entries().into_iter().map(|(key, _)| key).collect()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<L, NoOutput> {
        &self.graph
    }

    /// Returns the number of nodes in the automaton.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

/// Builds a minimal automaton from an iterator of sorted keys.
///
/// Repeated keys are allowed.
///
/// # Examples
///
/// ```
/// use libfst::build_fsa;
///
/// let fsa = build_fsa(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
/// assert!(fsa.contains("CAKE"));
/// assert!(!fsa.contains("AKE"));
/// assert_eq!(fsa.state("B"), fsa.state("M"));
/// ```
pub fn build_fsa<L, K>(keys: impl IntoIterator<Item = K>) -> Result<Fsa<L>, BuildError<L>>
where
    L: Label,
    K: IntoKey<L>,
{
    let mut builder = FsaBuilder::new();
    for key in keys {
        builder.insert(key)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fst::Trie;
    use crate::fst::test_data::sorted_months;

    fn order_err(a: &str, b: &str) -> BuildError<char> {
        BuildError::OutOfOrder {
            previous: a.chars().collect(),
            current: b.chars().collect(),
        }
    }

    fn months() -> Fsa<char> {
        build_fsa(sorted_months().into_iter().map(|(month, _)| month)).unwrap()
    }

    #[test]
    fn month_lookup() {
        let fsa = months();
        assert!(fsa.contains("March"));
        assert!(fsa.contains("February"));
        assert!(!fsa.contains("Smarch"));
        assert!(!fsa.contains("Ma"));
        assert!(fsa.has_prefix("Ma"));
        assert_eq!(fsa.search("March"), Lookup::Found(vec![]));
        assert_eq!(fsa.search("Ma"), Lookup::NoValue);
        assert_eq!(fsa.search("Smarch"), Lookup::NotFound);
    }

    #[test]
    fn months_share_suffixes() {
        let fsa = months();
        let ember = fsa.state("Dec").unwrap();
        assert_eq!(fsa.state("Nov"), Some(ember));
        assert_eq!(fsa.state("Sept"), Some(ember));
        let y = fsa.state("January").unwrap();
        for month in ["February", "May", "July"] {
            assert_eq!(fsa.state(month), Some(y), "{month}");
        }
        assert_eq!(fsa.state("Janu"), fsa.state("Febru"));
    }

    #[test]
    fn smaller_than_trie() {
        let fsa = months();
        let mut trie = Trie::<char, NoOutput>::new();
        for (month, _) in sorted_months() {
            trie.insert(month, NoOutput);
        }
        assert!(fsa.node_count() < trie.node_count());
        assert_eq!(fsa.node_count(), fsa.graph().reachable_node_count());
    }

    #[test]
    fn graph_shares_nodes() {
        let fsa1 = build_fsa(["ABCDEF"]).unwrap();
        assert_eq!(fsa1.node_count(), "ABCDEF".len() + 1);

        let fsa2 = build_fsa(["ABCDEF", "ABDEF", "ABEF", "AF"]).unwrap();
        assert_eq!(fsa1.node_count(), fsa2.node_count());
    }

    #[test]
    fn graph_shares_nodes_unicode() {
        let fsa1 = build_fsa(["授人以鱼不如授人以渔"]).unwrap();
        let fsa2 = build_fsa(["授人以渔", "授人以鱼不如授人以渔"]).unwrap();
        assert_eq!(fsa1.node_count(), fsa2.node_count());
    }

    #[test]
    fn lookups_work_before_finishing() {
        let mut builder = FsaBuilder::new();
        builder.insert("ALFA").unwrap();
        builder.insert("BRAVO").unwrap();
        assert!(builder.contains("ALFA"));
        assert!(builder.contains("BRAVO"));
        assert!(!builder.contains("CHARLIE"));
        let fsa = builder.finish();
        assert!(fsa.contains("ALFA"));
        assert!(!fsa.contains("CHARLIE"));
    }

    #[test]
    fn unsorted_input_keys_gives_error() {
        use itertools::Itertools;
        const SORTED_KEYS: [&str; 6] = ["ALFA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT"];
        let mut sorted_count = 0;
        // Every permutation except the sorted one must be rejected.
        for keys in SORTED_KEYS.iter().permutations(SORTED_KEYS.len()) {
            let is_sorted = keys.iter().copied().eq(SORTED_KEYS.iter());
            let res = build_fsa(keys);
            assert_eq!(res.is_ok(), is_sorted);
            sorted_count += is_sorted as i32;
        }
        assert_eq!(sorted_count, 1);
    }

    #[test]
    fn unsorted_input_keys_gives_unsorted_keys_in_error() {
        let res = build_fsa(["ALFA", "BRAVO", "CHARLIE", "GOLF", "FOXTROT", "HOTEL"]);
        assert_eq!(res.unwrap_err(), order_err("GOLF", "FOXTROT"));

        let res = build_fsa(["ZULU", "ALFA"]);
        assert_eq!(res.unwrap_err(), order_err("ZULU", "ALFA"));

        let res = build_fsa(["ZULU", "ZUL"]);
        assert_eq!(res.unwrap_err(), order_err("ZULU", "ZUL"));
    }

    #[test]
    fn rejected_key_leaves_builder_unchanged() {
        let mut builder = FsaBuilder::new();
        builder.insert("MARCH").unwrap();
        let nodes = builder.graph().node_count();
        assert_eq!(builder.insert("FEBRUARY"), Err(order_err("MARCH", "FEBRUARY")));
        assert_eq!(builder.graph().node_count(), nodes);
        assert_eq!(builder.len(), 1);
        builder.insert("MAY").unwrap();
        let fsa = builder.finish();
        assert!(fsa.contains("MARCH"));
        assert!(fsa.contains("MAY"));
        assert!(!fsa.contains("FEBRUARY"));
    }

    #[test]
    fn same_key_twice_is_accepted() {
        let fsa = build_fsa(["ALFA", "BRAVO", "CHARLIE", "CHARLIE"]).unwrap();
        let once = build_fsa(["ALFA", "BRAVO", "CHARLIE"]).unwrap();
        assert!(fsa.contains("CHARLIE"));
        assert_eq!(fsa.node_count(), once.node_count());
    }

    #[test]
    fn prefix_then_extension() {
        let fsa = build_fsa(["TEST", "TESTER", "WTEST"]).unwrap();
        assert!(fsa.contains("TEST"));
        assert!(fsa.contains("TESTER"));
        assert!(!fsa.contains("TESTE"));
        assert!(!fsa.contains("TES"));
        assert!(fsa.contains("WTEST"));
        assert_eq!(
            fsa.keys(),
            vec![
                "TEST".chars().collect::<Vec<_>>(),
                "TESTER".chars().collect(),
                "WTEST".chars().collect()
            ]
        );
    }

    #[test]
    fn suffixes_are_shared() {
        let testdata = [
            "ASUFFIX",
            "BSUFFIX",
            "CDESUFFIX",
            "FFFFFFFSUFFIX",
            "INBETWEEN",
            "JSUFFIX",
            "XXSUFFIX",
        ];
        let fsa = build_fsa(testdata).unwrap();
        let suffix_node = fsa.state("A").unwrap();
        for key in testdata {
            if let Some(prefix) = key.strip_suffix("SUFFIX") {
                assert_eq!(fsa.state(prefix), Some(suffix_node), "{key}");
            }
        }
    }

    #[test]
    fn empty_key() {
        let fsa = build_fsa(["", "A"]).unwrap();
        assert!(fsa.contains(""));
        assert!(fsa.contains("A"));
        let empty = build_fsa::<char, &str>([]).unwrap();
        assert!(!empty.contains(""));
        assert_eq!(empty.node_count(), 1);
    }

    #[test]
    fn generic_fsa_with_u8() {
        let mut builder = FsaBuilder::<u8>::new();
        builder.insert([1, 2, 3]).unwrap();
        builder.insert([1, 2, 4]).unwrap();
        builder.insert([2, 3, 4]).unwrap();
        let fsa = builder.finish();
        assert!(fsa.contains([1, 2, 3]));
        assert!(fsa.contains([1, 2, 4]));
        assert!(fsa.contains([2, 3, 4]));
        assert!(!fsa.contains([1, 2, 5]));
        assert!(!fsa.contains([1, 2]));
        assert!(fsa.has_prefix([1, 2]));
        assert_eq!(fsa.state([1, 2, 3]), fsa.state([2, 3, 4]));
    }
}
