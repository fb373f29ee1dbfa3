//! Association rule derivation from frequent itemsets.
//!
//! For every frequent itemset of size >= 2, [`generate_rules`] enumerates
//! all non-trivial left/right splits, computes confidence through the same
//! support-counting primitive the miner uses, and keeps the rules that meet
//! the confidence threshold, with support and lift attached.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::itemset::Itemset;
use crate::transactions::TransactionStore;

/// An association rule `lhs => rhs` with its quality metrics.
///
/// The two sides are disjoint and their union is the frequent itemset the
/// rule was derived from. Metrics are rounded to two decimal places for
/// output stability. Rules are immutable once created.
///
/// Serializes to `{"lhs": [..], "rhs": [..], "support": .., "confidence": ..,
/// "lift": ..}`, the shape an external formatter consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    /// Left-hand side (antecedent).
    pub lhs: Itemset,
    /// Right-hand side (consequent).
    pub rhs: Itemset,
    /// Fraction of transactions containing both sides, in [0, 1].
    pub support: f64,
    /// Estimated P(rhs | lhs), in [0, 1].
    pub confidence: f64,
    /// Observed joint support over the support expected under independence;
    /// non-negative, unbounded above.
    pub lift: f64,
}

/// The ordered collection of rules produced by one mining run.
///
/// Order is itemset discovery order, then split-enumeration order within
/// each itemset. Never re-sorted by any metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<AssociationRule>,
}

impl RuleSet {
    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AssociationRule> {
        self.rules.get(index)
    }

    /// Iterate over the rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, AssociationRule> {
        self.rules.iter()
    }

    /// The rules as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[AssociationRule] {
        &self.rules
    }

    fn push(&mut self, rule: AssociationRule) {
        self.rules.push(rule);
    }
}

impl Index<usize> for RuleSet {
    type Output = AssociationRule;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rules[index]
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a AssociationRule;
    type IntoIter = std::slice::Iter<'a, AssociationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for RuleSet {
    type Item = AssociationRule;
    type IntoIter = std::vec::IntoIter<AssociationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

/// Round to two decimal places for output stability.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive association rules from frequent itemsets.
///
/// For each itemset S with |S| >= 2 (in the given order), every non-empty
/// proper subset R of S becomes a candidate right-hand side with
/// L = S \ R, enumerated by increasing bitmask over S's canonical element
/// order. A rule is kept when `confidence = count(S) / count(L)` meets
/// `min_confidence`; its support is the support ratio of S and its lift is
/// `ratio(S) / (ratio(L) * ratio(R))`.
///
/// A zero-support denominator never raises: the candidate is skipped by an
/// explicit guard, and only that one candidate is lost.
#[must_use]
pub fn generate_rules(
    frequent_itemsets: &[Itemset],
    store: &TransactionStore,
    min_confidence: f64,
) -> RuleSet {
    let mut rules = RuleSet::default();

    for itemset in frequent_itemsets.iter().filter(|s| s.len() >= 2) {
        let union_count = store.support_count(itemset);
        let union_ratio = store.support_ratio(itemset);

        for (lhs, rhs) in itemset.splits() {
            let lhs_count = store.support_count(&lhs);
            if lhs_count == 0 {
                // Undefined confidence; no rule can be formed.
                continue;
            }
            let confidence = union_count as f64 / lhs_count as f64;
            if confidence < min_confidence {
                continue;
            }

            let lhs_ratio = store.support_ratio(&lhs);
            let rhs_ratio = store.support_ratio(&rhs);
            if rhs_ratio == 0.0 {
                // Undefined lift; skip the candidate rather than divide.
                continue;
            }
            let lift = union_ratio / (lhs_ratio * rhs_ratio);

            rules.push(AssociationRule {
                lhs,
                rhs,
                support: round2(union_ratio),
                confidence: round2(confidence),
                lift: round2(lift),
            });
        }
    }

    rules
}
