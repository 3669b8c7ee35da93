use super::error::BuildError;
use super::graph::Graph;
use super::key::{IntoKey, KeyOrder};
use super::label::Label;
use super::node_arena::NodeId;
use super::output::Output;
use super::query::Lookup;
use super::registry::Registry;

/// A builder for minimal acyclic transducers.
///
/// Works like [`FsaBuilder`](super::FsaBuilder), with an output value attached
/// to every key. Outputs are split across the arcs of a key's path and pushed
/// as close to the root as the keys inserted so far allow, so that the part of
/// a path below the point where its output is fully emitted carries only empty
/// outputs and can be shared with other keys.
///
/// Keys must be inserted in lexicographically sorted order. Repeating the last
/// key adds another output for it instead of replacing the first one.
pub struct FstBuilder<L: Label, O: Output> {
    graph: Graph<L, O>,
    registry: Registry,
    order: KeyOrder<L>,
    len: usize,
}

impl<L: Label, O: Output> Default for FstBuilder<L, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label, O: Output> FstBuilder<L, O> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        FstBuilder {
            graph: Graph::new(),
            registry: Registry::new(),
            order: KeyOrder::new(),
            len: 0,
        }
    }

    /// Adds `key` with its output `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::OutOfOrder`] if the key sorts before the
    /// previously added key. The builder is left unchanged.
    pub fn insert(&mut self, key: impl IntoKey<L>, value: O) -> Result<(), BuildError<L>> {
        let key = key.collect_key();
        self.order.check(&key)?;

        let (prefix_len, state) = self.graph.common_prefix(&key);
        if !self.graph.node(state).transitions().is_empty() {
            self.registry.replace_or_register(&mut self.graph, state);
        }

        let remaining = self.push_outputs(&key[..prefix_len], value);
        let suffix = &key[prefix_len..];
        let last = self.graph.add_suffix(state, suffix);
        match suffix.first() {
            // Repeated key (or the empty key first): the new value becomes
            // another output of the existing final state.
            None => {
                let node = self.graph.node_mut(last);
                node.set_accepting();
                node.outputs_mut().push(remaining);
            }
            Some(&label) => {
                self.graph.node_mut(last).outputs_mut().push(O::empty());
                self.graph
                    .node_mut(state)
                    .transitions_mut()
                    .get_mut(label)
                    .expect("new branch starts at the common prefix state")
                    .output = remaining;
            }
        }

        self.order.advance(key);
        self.len += 1;
        Ok(())
    }

    /// Walks the common prefix of a new key, leaving on each arc only the part
    /// of its output that the new key shares.
    ///
    /// Whatever an arc gives up moves one level down: it is prepended to every
    /// arc leaving the arc's target and to the target's own outputs. Returns
    /// the part of `value` not emitted along the prefix.
    fn push_outputs(&mut self, prefix: &[L], mut value: O) -> O {
        let mut current = self.graph.root();
        for &label in prefix {
            let arc = self
                .graph
                .node_mut(current)
                .transitions_mut()
                .get_mut(label)
                .expect("common prefix arc exists");
            let shared = arc.output.common_prefix(&value);
            let pushed = arc.output.suffix_from(shared.len());
            value = value.suffix_from(shared.len());
            arc.output = shared;
            current = arc.target;

            if pushed.is_empty() {
                continue;
            }
            let node = self.graph.node_mut(current);
            for (_, arc) in node.transitions_mut().as_mut_slice() {
                arc.output = pushed.concat(&arc.output);
            }
            if node.is_accepting() {
                for out in node.outputs_mut() {
                    *out = pushed.concat(out);
                }
            }
        }
        value
    }

    /// Looks up the outputs of `key` among the keys inserted so far.
    pub fn search(&self, key: impl IntoKey<L>) -> Lookup<O> {
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
    pub fn graph(&self) -> &Graph<L, O> {
        &self.graph
    }

    /// Finalizes construction and returns the minimal transducer.
    ///
    /// This minimizes the suffix of the last key and drops every node that
    /// minimization made unreachable.
    pub fn finish(mut self) -> Fst<L, O> {
        let root = self.graph.root();
        self.registry.replace_or_register(&mut self.graph, root);
        let allocated = self.graph.node_count();
        let graph = self.graph.compact();
        log::debug!(
            "finished transducer: {} keys, {} nodes allocated, {} registered, {} kept",
            self.len,
            allocated,
            self.registry.len(),
            graph.node_count()
        );
        Fst { graph }
    }
}

/// A minimal acyclic transducer: a map from keys to one or more outputs.
#[derive(Clone, Debug)]
pub struct Fst<L: Label, O: Output> {
    graph: Graph<L, O>,
}

impl<L: Label, O: Output> Fst<L, O> {
    /// Looks up the outputs of `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libfst::{build_fst, Lookup};
    ///
    /// let fst = build_fst([("Jan", 31u64), ("Jun", 30), ("Jun", 31)]).unwrap();
    /// assert_eq!(fst.search("Jun"), Lookup::Found(vec![30, 31]));
    /// assert_eq!(fst.search("Ju"), Lookup::NoValue);
    /// assert_eq!(fst.search("Jul"), Lookup::NotFound);
    /// ```
    pub fn search(&self, key: impl IntoKey<L>) -> Lookup<O> {
        self.graph.search(key)
    }

    /// True if `key` was inserted.
    pub fn contains(&self, key: impl IntoKey<L>) -> bool {
        self.graph.contains(key)
    }

    /// Returns the node `key` leads to.
    pub fn state(&self, key: impl IntoKey<L>) -> Option<NodeId> {
        self.graph.state(key)
    }

    /// Returns every key with its outputs, in sorted order.
    pub fn entries(&self) -> Vec<(Vec<L>, Vec<O>)> {
        self.graph.entries()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<L, O> {
        &self.graph
    }

    /// Returns the number of nodes in the transducer.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

/// Builds a minimal transducer from an iterator of `(key, value)` pairs sorted
/// by key.
pub fn build_fst<L, K, O>(pairs: impl IntoIterator<Item = (K, O)>) -> Result<Fst<L, O>, BuildError<L>>
where
    L: Label,
    K: IntoKey<L>,
    O: Output,
{
    let mut builder = FstBuilder::new();
    for (key, value) in pairs {
        builder.insert(key, value)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fst::Trie;
    use crate::fst::test_data::sorted_months;

    fn int_months() -> Fst<char, u64> {
        build_fst(sorted_months()).unwrap()
    }

    fn string_months() -> Fst<char, String> {
        build_fst(
            sorted_months()
                .into_iter()
                .map(|(month, days)| (month, days.to_string())),
        )
        .unwrap()
    }

    fn strings(values: &[&str]) -> Lookup<String> {
        Lookup::Found(values.iter().map(|v| v.to_string()).collect())
    }

    /// Sums the arc outputs along `key` plus the first output of its final state.
    fn path_sum(fst: &Fst<char, u64>, key: &str) -> u64 {
        let graph = fst.graph();
        let mut id = graph.root();
        let mut sum = 0;
        for label in key.chars() {
            let arc = graph.node(id).get(label).unwrap();
            sum += arc.output;
            id = arc.target;
        }
        sum + graph.node(id).outputs()[0]
    }

    #[test]
    fn integer_month_lookup() {
        let fst = int_months();
        assert_eq!(fst.search("March"), Lookup::Found(vec![31]));
        assert_eq!(fst.search("February"), Lookup::Found(vec![28, 29]));
        assert_eq!(fst.search("Smarch"), Lookup::NotFound);
        assert_eq!(fst.search("Ma"), Lookup::NoValue);
    }

    #[test]
    fn string_month_lookup() {
        let fst = string_months();
        assert_eq!(fst.search("March"), strings(&["31"]));
        assert_eq!(fst.search("February"), strings(&["28", "29"]));
        assert_eq!(fst.search("September"), strings(&["30"]));
        assert_eq!(fst.search("Smarch"), Lookup::NotFound);
    }

    #[test]
    fn lookups_work_before_finishing() {
        let mut builder = FstBuilder::new();
        for (month, days) in sorted_months() {
            builder.insert(month, days).unwrap();
        }
        assert_eq!(builder.search("February"), Lookup::Found(vec![28, 29]));
        assert_eq!(builder.search("March"), Lookup::Found(vec![31]));
        assert_eq!(builder.search("Smarch"), Lookup::NotFound);
        let fst = builder.finish();
        assert_eq!(fst.search("Smarch"), Lookup::NotFound);
    }

    #[test]
    fn every_month_round_trips() {
        let fst = int_months();
        let mut trie = Trie::new();
        for (month, days) in sorted_months() {
            trie.insert(month, days);
            assert!(fst.search(month).into_values().unwrap().contains(&days));
        }
        assert_eq!(fst.entries(), trie.graph().entries());
    }

    #[test]
    fn path_sums_equal_inserted_values() {
        let fst = int_months();
        for (month, days) in sorted_months() {
            if month != "February" {
                assert_eq!(path_sum(&fst, month), days, "{month}");
            }
        }
    }

    #[test]
    fn outputs_are_pushed_towards_the_root() {
        let fst = int_months();
        let graph = fst.graph();
        // "June" and "July" share "Ju"; 30 of their outputs is emitted there.
        let j = graph.state("J").unwrap();
        let ju = graph.node(j).get('u').unwrap();
        assert_eq!(graph.node(graph.root()).get('J').unwrap().output + ju.output, 30);
        assert_eq!(graph.node(ju.target).get('l').unwrap().output, 1);
        assert_eq!(graph.node(ju.target).get('n').unwrap().output, 0);
    }

    #[test]
    fn months_share_suffixes() {
        let fst = int_months();
        let ember = fst.state("Dec").unwrap();
        assert_eq!(fst.state("Nov"), Some(ember));
        assert_eq!(fst.state("Sept"), Some(ember));
        let y = fst.state("January").unwrap();
        assert_eq!(fst.state("May"), Some(y));
        assert_eq!(fst.state("July"), Some(y));

        let fst = string_months();
        let ember = fst.state("Dec").unwrap();
        assert_eq!(fst.state("Nov"), Some(ember));
        assert_eq!(fst.state("Sept"), Some(ember));
    }

    #[test]
    fn smaller_than_trie() {
        let fst = int_months();
        let mut trie = Trie::new();
        for (month, days) in sorted_months() {
            trie.insert(month, days);
        }
        assert!(fst.node_count() < trie.node_count());
    }

    #[test]
    fn repeated_key_keeps_every_output() {
        let fst = build_fst([("a", 5u64), ("a", 5), ("a", 2)]).unwrap();
        assert_eq!(fst.search("a"), Lookup::Found(vec![5, 5, 2]));
    }

    #[test]
    fn later_keys_rewrite_earlier_arcs() {
        let fst = build_fst([("ab", 10u64), ("ac", 3), ("ad", 7), ("b", 1)]).unwrap();
        assert_eq!(fst.search("ab"), Lookup::Found(vec![10]));
        assert_eq!(fst.search("ac"), Lookup::Found(vec![3]));
        assert_eq!(fst.search("ad"), Lookup::Found(vec![7]));
        assert_eq!(fst.search("b"), Lookup::Found(vec![1]));
        let graph = fst.graph();
        assert_eq!(graph.node(graph.root()).get('a').unwrap().output, 3);
    }

    #[test]
    fn prefix_keys_carry_outputs_on_their_state() {
        let fst = build_fst([("TEST", "x".to_owned()), ("TESTER", "xy".to_owned())]).unwrap();
        assert_eq!(fst.search("TEST"), strings(&["x"]));
        assert_eq!(fst.search("TESTER"), strings(&["xy"]));
        assert_eq!(fst.search("TESTE"), Lookup::NoValue);

        let fst = build_fst([("TEST", "ab".to_owned()), ("TESTER", "ac".to_owned())]).unwrap();
        assert_eq!(fst.search("TEST"), strings(&["ab"]));
        assert_eq!(fst.search("TESTER"), strings(&["ac"]));
    }

    #[test]
    fn empty_key_maps_to_root() {
        let fst = build_fst([("", 4u32), ("a", 9)]).unwrap();
        assert_eq!(fst.search(""), Lookup::Found(vec![4]));
        assert_eq!(fst.search("a"), Lookup::Found(vec![9]));
    }

    #[test]
    fn out_of_order_is_rejected() {
        let mut builder = FstBuilder::new();
        builder.insert("March", 31u64).unwrap();
        assert_eq!(
            builder.insert("February", 28),
            Err(BuildError::OutOfOrder {
                previous: "March".chars().collect(),
                current: "February".chars().collect(),
            })
        );
        assert_eq!(builder.search("March"), Lookup::Found(vec![31]));
        assert_eq!(builder.search("February"), Lookup::NotFound);
    }

    #[test]
    fn byte_keys_and_byte_outputs() {
        let fst = build_fst([
            (vec![1u8, 2], vec![7u8, 7, 1]),
            (vec![1, 3], vec![7, 7, 2]),
            (vec![2], vec![7]),
        ])
        .unwrap();
        assert_eq!(fst.search([1u8, 2]), Lookup::Found(vec![vec![7, 7, 1]]));
        assert_eq!(fst.search([1u8, 3]), Lookup::Found(vec![vec![7, 7, 2]]));
        assert_eq!(fst.search([2u8]), Lookup::Found(vec![vec![7]]));
        assert_eq!(fst.search([1u8]), Lookup::NoValue);
    }
}
