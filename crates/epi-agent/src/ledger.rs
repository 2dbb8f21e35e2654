//! Symmetric contact-weight ledger.
//!
//! # Design
//!
//! Interaction intensity is a relation over unordered agent pairs.  It is
//! stored as two mirrored sparse maps (`a → c → w` and `c → a → w`) so that
//! "all contacts of `a`" is a single map lookup, but the only mutating
//! operation, [`ContactLedger::add`], writes both directions in one call.
//! No other code path can observe a half-written pair.
//!
//! Inner maps are `BTreeMap`s so that iterating a contact list (the weighted
//! friend draw) visits ids in ascending order, keeping runs reproducible.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use epi_core::AgentId;

#[derive(Clone, Debug, Default)]
pub struct ContactLedger {
    weights: FxHashMap<AgentId, BTreeMap<AgentId, f64>>,
}

impl ContactLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `w` to the pair `(a, c)` in both directions and return the new
    /// weight.
    ///
    /// Self-pairs and non-positive weights are ignored (returns the current
    /// weight unchanged), which keeps every entry non-negative.
    pub fn add(&mut self, a: AgentId, c: AgentId, w: f64) -> f64 {
        if a == c || w.is_nan() || w <= 0.0 {
            return self.weight(a, c);
        }
        let forward = self.weights.entry(a).or_default().entry(c).or_insert(0.0);
        *forward += w;
        let total = *forward;
        self.weights.entry(c).or_default().insert(a, total);
        total
    }

    /// Accumulated weight between `a` and `c` (0 if they never met).
    pub fn weight(&self, a: AgentId, c: AgentId) -> f64 {
        self.weights
            .get(&a)
            .and_then(|m| m.get(&c))
            .copied()
            .unwrap_or(0.0)
    }

    /// Contacts of `a` with their weights, in ascending id order.
    pub fn contacts(&self, a: AgentId) -> impl Iterator<Item = (AgentId, f64)> + '_ {
        self.weights
            .get(&a)
            .into_iter()
            .flat_map(|m| m.iter().map(|(&id, &w)| (id, w)))
    }

    /// Owned copy of `a`'s contact history.
    pub fn history(&self, a: AgentId) -> BTreeMap<AgentId, f64> {
        self.weights.get(&a).cloned().unwrap_or_default()
    }

    /// Number of distinct contacts `a` has.
    pub fn degree(&self, a: AgentId) -> usize {
        self.weights.get(&a).map_or(0, BTreeMap::len)
    }

    /// Number of agents with at least one contact.
    pub fn agent_count(&self) -> usize {
        self.weights.len()
    }

    /// `true` if every entry has an identical mirror entry.
    pub fn is_symmetric(&self) -> bool {
        self.weights.iter().all(|(&a, m)| {
            m.iter().all(|(&c, &w)| w >= 0.0 && self.weight(c, a) == w)
        })
    }
}
