//! Frequent itemset mining via the level-wise Apriori loop.
//!
//! [`mine_frequent_itemsets`] is the stateless miner: L1 from the distinct
//! items, then C2→L2, C3→L3, … until a level comes up empty. [`Apriori`] is
//! the configurable facade that validates thresholds, runs the miner and the
//! rule generator, and caches the result of the last fit.
//!
//! # Example
//!
//! ```
//! use asociar::prelude::*;
//!
//! let store = TransactionStore::from_rows(&[
//!     vec!["a", "b"],
//!     vec!["a", "c"],
//!     vec!["a", "b", "c"],
//!     vec!["b", "c"],
//! ]);
//!
//! let mut miner = Apriori::new()
//!     .with_min_support(0.5)
//!     .with_min_confidence(0.5);
//! miner.fit(&store).unwrap();
//!
//! // {a}, {b}, {c} and all three pairs are frequent; {a,b,c} is not.
//! assert_eq!(miner.frequent_itemsets().len(), 6);
//! for rule in miner.rules() {
//!     println!(
//!         "{:?} => {:?} (conf={:.2}, lift={:.2})",
//!         rule.lhs.items(),
//!         rule.rhs.items(),
//!         rule.confidence,
//!         rule.lift
//!     );
//! }
//! ```

mod candidates;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AsociarError, Result};
use crate::itemset::Itemset;
use crate::rules::{generate_rules, RuleSet};
use crate::transactions::TransactionStore;

use candidates::{generate_candidates, prune_candidates};

/// Mine all frequent itemsets at or above `min_support`.
///
/// Returns every itemset across all levels whose support ratio meets the
/// threshold, in level order; within a level, itemsets appear in canonical
/// (sorted) order, so the discovery order is fully deterministic.
///
/// The function is total: an empty store yields an empty result,
/// `min_support <= 0.0` admits every item, and `min_support > 1.0` yields
/// nothing. Threshold validation is the [`Apriori`] facade's job.
#[must_use]
pub fn mine_frequent_itemsets(store: &TransactionStore, min_support: f64) -> Vec<Itemset> {
    let mut result = Vec::new();
    if store.is_empty() {
        return result;
    }

    // L1: distinct items whose singleton support meets the threshold.
    let mut level: Vec<Itemset> = store
        .distinct_items()
        .into_iter()
        .map(Itemset::singleton)
        .filter(|itemset| store.support_ratio(itemset) >= min_support)
        .collect();

    while !level.is_empty() {
        result.extend(level.iter().cloned());

        let candidates = generate_candidates(&level);
        let prev: HashSet<Itemset> = level.iter().cloned().collect();
        let mut next: Vec<Itemset> = prune_candidates(candidates, &prev)
            .into_iter()
            .filter(|candidate| store.support_ratio(candidate) >= min_support)
            .collect();
        next.sort();
        level = next;
    }

    result
}

/// Apriori association rule miner.
///
/// Mines frequent itemsets level by level, then derives every rule whose
/// confidence meets the threshold, with support and lift attached. Rules
/// keep their discovery order; nothing is re-sorted by metric value.
///
/// # Parameters
///
/// - `min_support`: minimum support ratio in (0, 1]
/// - `min_confidence`: minimum confidence in (0, 1]
///
/// # Examples
///
/// ```
/// use asociar::prelude::*;
///
/// let store = TransactionStore::from_rows(&[
///     vec!["bread", "milk"],
///     vec!["bread", "butter"],
///     vec!["bread", "milk", "butter"],
///     vec!["milk", "butter"],
/// ]);
///
/// let mut miner = Apriori::new()
///     .with_min_support(0.5)
///     .with_min_confidence(0.6);
/// miner.fit(&store).unwrap();
/// assert!(!miner.rules().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Apriori {
    /// Minimum support ratio for frequent itemsets.
    min_support: f64,
    /// Minimum confidence for generated rules.
    min_confidence: f64,
    /// Frequent itemsets from the last fit, in discovery order.
    frequent_itemsets: Vec<Itemset>,
    /// Rules from the last fit.
    rules: RuleSet,
}

impl Apriori {
    /// Create a miner with the default thresholds.
    ///
    /// # Default Parameters
    ///
    /// - `min_support`: 0.25
    /// - `min_confidence`: 0.8
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_support: 0.25,
            min_confidence: 0.8,
            frequent_itemsets: Vec::new(),
            rules: RuleSet::default(),
        }
    }

    /// Set the minimum support threshold.
    ///
    /// # Arguments
    ///
    /// * `min_support` - Minimum support ratio, must be in (0, 1] at fit time
    #[must_use]
    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    /// Set the minimum confidence threshold.
    ///
    /// # Arguments
    ///
    /// * `min_confidence` - Minimum confidence, must be in (0, 1] at fit time
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Reject thresholds outside (0, 1] before any mining work starts.
    fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(AsociarError::InvalidHyperparameter {
                param: "min_support".to_string(),
                value: self.min_support.to_string(),
                constraint: "in (0, 1]".to_string(),
            });
        }
        if !(self.min_confidence > 0.0 && self.min_confidence <= 1.0) {
            return Err(AsociarError::InvalidHyperparameter {
                param: "min_confidence".to_string(),
                value: self.min_confidence.to_string(),
                constraint: "in (0, 1]".to_string(),
            });
        }
        Ok(())
    }

    /// Fit the miner: mine frequent itemsets, then generate rules.
    ///
    /// The previous fit's results are overwritten; no other state is carried
    /// between invocations. An empty store is not an error and produces an
    /// empty rule set.
    ///
    /// # Errors
    ///
    /// Returns [`AsociarError::InvalidHyperparameter`] if `min_support` or
    /// `min_confidence` lies outside (0, 1].
    pub fn fit(&mut self, store: &TransactionStore) -> Result<()> {
        self.validate()?;
        self.frequent_itemsets = mine_frequent_itemsets(store, self.min_support);
        self.rules = generate_rules(&self.frequent_itemsets, store, self.min_confidence);
        Ok(())
    }

    /// Frequent itemsets discovered by the last fit, in discovery order.
    #[must_use]
    pub fn frequent_itemsets(&self) -> &[Itemset] {
        &self.frequent_itemsets
    }

    /// Rules generated by the last fit, in discovery order.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl Default for Apriori {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> TransactionStore {
        TransactionStore::from_rows(&[
            vec!["a", "b"],
            vec!["a", "c"],
            vec!["a", "b", "c"],
            vec!["b", "c"],
        ])
    }

    #[test]
    fn test_new_defaults() {
        let miner = Apriori::new();
        assert!((miner.min_support - 0.25).abs() < 1e-12);
        assert!((miner.min_confidence - 0.8).abs() < 1e-12);
        assert!(miner.frequent_itemsets().is_empty());
        assert!(miner.rules().is_empty());
    }

    #[test]
    fn test_builder() {
        let miner = Apriori::new().with_min_support(0.3).with_min_confidence(0.7);
        assert!((miner.min_support - 0.3).abs() < 1e-12);
        assert!((miner.min_confidence - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_mine_concrete_scenario() {
        let itemsets = mine_frequent_itemsets(&sample_store(), 0.5);
        assert_eq!(
            itemsets,
            vec![
                Itemset::singleton("a"),
                Itemset::singleton("b"),
                Itemset::singleton("c"),
                Itemset::from_items(&["a", "b"]),
                Itemset::from_items(&["a", "c"]),
                Itemset::from_items(&["b", "c"]),
            ]
        );
    }

    #[test]
    fn test_mine_excludes_triple_below_threshold() {
        // {a,b,c} has support 0.25 < 0.5 and must not appear.
        let itemsets = mine_frequent_itemsets(&sample_store(), 0.5);
        assert!(!itemsets.contains(&Itemset::from_items(&["a", "b", "c"])));
    }

    #[test]
    fn test_mine_reaches_higher_levels() {
        let store = TransactionStore::from_rows(&[
            vec!["a", "b", "c"],
            vec!["a", "b", "c"],
            vec!["a", "b"],
        ]);
        let itemsets = mine_frequent_itemsets(&store, 0.5);
        assert!(itemsets.contains(&Itemset::from_items(&["a", "b", "c"])));
        // Levels appear in order: singletons, then pairs, then the triple.
        let sizes: Vec<usize> = itemsets.iter().map(Itemset::len).collect();
        let mut sorted_sizes = sizes.clone();
        sorted_sizes.sort_unstable();
        assert_eq!(sizes, sorted_sizes);
    }

    #[test]
    fn test_mine_empty_store() {
        let store = TransactionStore::from_rows(&[]);
        assert!(mine_frequent_itemsets(&store, 0.5).is_empty());
    }

    #[test]
    fn test_mine_min_support_above_one_is_empty() {
        assert!(mine_frequent_itemsets(&sample_store(), 1.0 + f64::EPSILON).is_empty());
    }

    #[test]
    fn test_mine_min_support_at_most_zero_keeps_every_item() {
        let itemsets = mine_frequent_itemsets(&sample_store(), 0.0);
        for item in sample_store().distinct_items() {
            assert!(itemsets.contains(&Itemset::singleton(item)));
        }
    }

    #[test]
    fn test_fit_rejects_min_support_out_of_range() {
        let store = sample_store();
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let mut miner = Apriori::new().with_min_support(bad);
            let err = miner.fit(&store).unwrap_err();
            assert!(err.to_string().contains("min_support"));
        }
    }

    #[test]
    fn test_fit_rejects_min_confidence_out_of_range() {
        let store = sample_store();
        for bad in [0.0, -1.0, 1.01, f64::NAN] {
            let mut miner = Apriori::new().with_min_confidence(bad);
            let err = miner.fit(&store).unwrap_err();
            assert!(err.to_string().contains("min_confidence"));
        }
    }

    #[test]
    fn test_fit_boundary_thresholds_accepted() {
        let mut miner = Apriori::new().with_min_support(1.0).with_min_confidence(1.0);
        assert!(miner.fit(&sample_store()).is_ok());
        assert!(miner.frequent_itemsets().is_empty());
    }

    #[test]
    fn test_fit_empty_store_is_not_an_error() {
        let mut miner = Apriori::new();
        let store = TransactionStore::from_rows(&[]);
        assert!(miner.fit(&store).is_ok());
        assert!(miner.frequent_itemsets().is_empty());
        assert!(miner.rules().is_empty());
    }

    #[test]
    fn test_refit_overwrites_previous_results() {
        let mut miner = Apriori::new().with_min_support(0.5).with_min_confidence(0.5);
        miner.fit(&sample_store()).unwrap();
        assert!(!miner.rules().is_empty());

        let disjoint = TransactionStore::from_rows(&[vec!["x"], vec!["y"]]);
        miner.fit(&disjoint).unwrap();
        assert!(miner.rules().is_empty());
        assert_eq!(miner.frequent_itemsets().len(), 2);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let store = sample_store();
        let mut first = Apriori::new().with_min_support(0.5).with_min_confidence(0.5);
        let mut second = Apriori::new().with_min_support(0.5).with_min_confidence(0.5);
        first.fit(&store).unwrap();
        second.fit(&store).unwrap();
        assert_eq!(first.frequent_itemsets(), second.frequent_itemsets());
        assert_eq!(first.rules(), second.rules());
    }
}
