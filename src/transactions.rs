//! Immutable transaction store and support counting.
//!
//! The store is built once from the input rows and read-only thereafter.
//! Support counting is the single primitive behind frequent-itemset
//! filtering, confidence, and lift, so the three can never disagree.

use std::collections::{BTreeSet, HashSet};

use crate::itemset::Itemset;

/// An immutable view over categorical transactions.
///
/// Each transaction is a set of distinct item labels: duplicates within one
/// row collapse to membership, so an item repeated in a transaction counts
/// once per transaction.
///
/// For non-market-basket data, attribute labels should be prepended to
/// attribute values (e.g. `"outlook=sunny"`) before the store is built, so
/// that one rule never mixes two values of the same attribute. The engine
/// does not enforce this; it is the caller's data-preparation contract.
///
/// # Examples
///
/// ```
/// use asociar::{Itemset, TransactionStore};
///
/// let store = TransactionStore::from_rows(&[
///     vec!["bread", "milk"],
///     vec!["bread", "butter"],
///     vec!["milk"],
/// ]);
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.support_count(&Itemset::singleton("bread")), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<HashSet<String>>,
}

impl TransactionStore {
    /// Build a store from owned rows.
    #[must_use]
    pub fn new(transactions: &[Vec<String>]) -> Self {
        Self {
            transactions: transactions
                .iter()
                .map(|row| row.iter().cloned().collect())
                .collect(),
        }
    }

    /// Build a store from string-slice rows.
    #[must_use]
    pub fn from_rows(rows: &[Vec<&str>]) -> Self {
        Self {
            transactions: rows
                .iter()
                .map(|row| row.iter().map(|s| (*s).to_string()).collect())
                .collect(),
        }
    }

    /// Number of transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if the store holds no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All distinct items across the store, in canonical (sorted) order.
    ///
    /// This seeds L1 in the level-wise mining loop.
    #[must_use]
    pub fn distinct_items(&self) -> Vec<String> {
        let unique: BTreeSet<&String> = self.transactions.iter().flatten().collect();
        unique.into_iter().cloned().collect()
    }

    /// Number of transactions containing every item of `itemset`.
    ///
    /// The empty itemset is contained in every transaction.
    #[must_use]
    pub fn support_count(&self, itemset: &Itemset) -> usize {
        self.transactions
            .iter()
            .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
            .count()
    }

    /// Fraction of transactions containing `itemset`.
    ///
    /// Returns 0.0 for an empty store; the empty itemset over a non-empty
    /// store yields 1.0.
    #[must_use]
    pub fn support_ratio(&self, itemset: &Itemset) -> f64 {
        if self.transactions.is_empty() {
            return 0.0;
        }
        self.support_count(itemset) as f64 / self.transactions.len() as f64
    }
}
