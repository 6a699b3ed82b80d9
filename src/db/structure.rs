/*!
The indexed fact store.

A [`Structure`] is, semantically, a set of [`Triplet`]s (adding a fact already present is a
contract violation, not a silent merge). Internally it keeps eight indices, one per subset `S` of
the three positions `{0, 1, 2}`: the index for `S` maps the fact projected onto `S` (remaining
positions zeroed) to the facts agreeing with that projection. The all-zero key (`S = ∅`) is served
directly by the canonical store, so every partial-key [`lookup`](Structure::lookup) is one hash
probe away.

Facts are stored once, in a [`slotmap::SlotMap`] keyed by [`FactKey`]; the other seven buckets hold
only that key, not a second copy of the fact, matching this crate's established use of `slotmap`
for stable, reusable-slot storage.
*/

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::config::StructureConfig;
use crate::misc::log::targets;
use crate::structures::{
    node::{is_valid, Node, HOLE},
    triplet::Triplet,
};
use crate::types::err::StructureError;

use super::FactKey;

/// The indexed fact store.
///
/// See the [module documentation](self) for the indexing scheme.
pub struct Structure {
    facts: SlotMap<FactKey, Triplet>,

    /// `S = {0, 1, 2}`: the exact-match index, also used for [`is_true`](Structure::is_true).
    exact: HashMap<Triplet, FactKey>,

    /// `S = {0, 1}`.
    by_ab: HashMap<(Node, Node), Vec<FactKey>>,
    /// `S = {0, 2}`.
    by_ac: HashMap<(Node, Node), Vec<FactKey>>,
    /// `S = {1, 2}`.
    by_bc: HashMap<(Node, Node), Vec<FactKey>>,

    /// `S = {0}`.
    by_a: HashMap<Node, Vec<FactKey>>,
    /// `S = {1}`.
    by_b: HashMap<Node, Vec<FactKey>>,
    /// `S = {2}`.
    by_c: HashMap<Node, Vec<FactKey>>,
}

impl Default for Structure {
    fn default() -> Self {
        Structure::with_config(StructureConfig::default())
    }
}

impl Structure {
    /// An empty structure, using default capacity hints.
    pub fn new() -> Self {
        Structure::default()
    }

    /// An empty structure, reserving initial capacity for each bucket per `config`.
    pub fn with_config(config: StructureConfig) -> Self {
        let cap = config.initial_bucket_capacity;
        Structure {
            facts: SlotMap::with_capacity_and_key(cap),
            exact: HashMap::with_capacity(cap),
            by_ab: HashMap::with_capacity(cap),
            by_ac: HashMap::with_capacity(cap),
            by_bc: HashMap::with_capacity(cap),
            by_a: HashMap::with_capacity(cap),
            by_b: HashMap::with_capacity(cap),
            by_c: HashMap::with_capacity(cap),
        }
    }

    /// The number of facts currently stored.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether the structure holds no facts.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Adds a fact, indexing it in all eight buckets.
    ///
    /// # Errors
    /// - [`StructureError::ZeroNode`] if any position is 0.
    /// - [`StructureError::DuplicateFact`] if the fact is already present.
    pub fn add_fact(&mut self, a: Node, b: Node, c: Node) -> Result<(), StructureError> {
        if !(is_valid(a) && is_valid(b) && is_valid(c)) {
            return Err(StructureError::ZeroNode);
        }

        let fact = Triplet::new(a, b, c);
        if self.exact.contains_key(&fact) {
            return Err(StructureError::DuplicateFact);
        }

        let key = self.facts.insert(fact);
        self.exact.insert(fact, key);

        self.by_ab.entry((a, b)).or_default().push(key);
        self.by_ac.entry((a, c)).or_default().push(key);
        self.by_bc.entry((b, c)).or_default().push(key);

        self.by_a.entry(a).or_default().push(key);
        self.by_b.entry(b).or_default().push(key);
        self.by_c.entry(c).or_default().push(key);

        log::trace!(target: targets::STRUCTURE, "added {a} {b} {c}");

        Ok(())
    }

    /// Removes a fact, erasing it from all eight buckets.
    ///
    /// # Errors
    /// - [`StructureError::ZeroNode`] if any position is 0.
    /// - [`StructureError::MissingFact`] if the fact is not present.
    pub fn remove_fact(&mut self, a: Node, b: Node, c: Node) -> Result<(), StructureError> {
        if !(is_valid(a) && is_valid(b) && is_valid(c)) {
            return Err(StructureError::ZeroNode);
        }

        let fact = Triplet::new(a, b, c);
        let Some(key) = self.exact.remove(&fact) else {
            return Err(StructureError::MissingFact);
        };

        self.facts.remove(key);

        remove_from_bucket(&mut self.by_ab, (a, b), key);
        remove_from_bucket(&mut self.by_ac, (a, c), key);
        remove_from_bucket(&mut self.by_bc, (b, c), key);

        remove_from_bucket(&mut self.by_a, a, key);
        remove_from_bucket(&mut self.by_b, b, key);
        remove_from_bucket(&mut self.by_c, c, key);

        log::trace!(target: targets::STRUCTURE, "removed {a} {b} {c}");

        Ok(())
    }

    /// Whether the fully-ground fact `(a, b, c)` is present.
    ///
    /// Never fails: a malformed (zero-containing) input is simply never present.
    pub fn is_true(&self, a: Node, b: Node, c: Node) -> bool {
        if !(is_valid(a) && is_valid(b) && is_valid(c)) {
            return false;
        }
        self.exact.contains_key(&Triplet::new(a, b, c))
    }

    /// The conjunction of [`is_true`](Structure::is_true) over `facts`.
    pub fn all_true<I: IntoIterator<Item = (Node, Node, Node)>>(&self, facts: I) -> bool {
        facts.into_iter().all(|(a, b, c)| self.is_true(a, b, c))
    }

    /// All facts matching the partial key `(a, b, c)`, where each position is either a positive
    /// node or 0 (hole, matching any value).
    ///
    /// Returns an owned snapshot: the result does not alias the structure's internal storage, so
    /// mutating the structure afterwards cannot invalidate it.
    pub fn lookup(&self, a: Node, b: Node, c: Node) -> Vec<(Node, Node, Node)> {
        let facts = match (a == HOLE, b == HOLE, c == HOLE) {
            (true, true, true) => self.lookup_all(),
            (false, true, true) => self.resolve(self.by_a.get(&a)),
            (true, false, true) => self.resolve(self.by_b.get(&b)),
            (true, true, false) => self.resolve(self.by_c.get(&c)),
            (false, false, true) => self.resolve(self.by_ab.get(&(a, b))),
            (false, true, false) => self.resolve(self.by_ac.get(&(a, c))),
            (true, false, false) => self.resolve(self.by_bc.get(&(b, c))),
            (false, false, false) => {
                let fact = Triplet::new(a, b, c);
                match self.exact.get(&fact) {
                    Some(_) => vec![fact],
                    None => Vec::new(),
                }
            }
        };

        log::trace!(
            target: targets::LOOKUP,
            "lookup({a}, {b}, {c}) -> {} facts",
            facts.len()
        );

        facts.into_iter().map(Triplet::as_tuple).collect()
    }

    fn lookup_all(&self) -> Vec<Triplet> {
        self.facts.values().copied().collect()
    }

    fn resolve(&self, keys: Option<&Vec<FactKey>>) -> Vec<Triplet> {
        match keys {
            // An absent bucket and an empty bucket are indistinguishable to callers.
            None => Vec::new(),
            Some(keys) => keys
                .iter()
                .filter_map(|key| self.facts.get(*key).copied())
                .collect(),
        }
    }
}

fn remove_from_bucket<K: Eq + std::hash::Hash>(
    map: &mut HashMap<K, Vec<FactKey>>,
    key: K,
    fact_key: FactKey,
) {
    if let std::collections::hash_map::Entry::Occupied(mut entry) = map.entry(key) {
        let bucket = entry.get_mut();
        if let Some(pos) = bucket.iter().position(|k| *k == fact_key) {
            bucket.swap_remove(pos);
        }
        if bucket.is_empty() {
            entry.remove();
        }
    }
}
