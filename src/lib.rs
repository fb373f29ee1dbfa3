//! Asociar: Association rule mining in pure Rust.
//!
//! Asociar mines frequent itemsets from categorical transactional data with
//! the Apriori algorithm and derives association rules with support,
//! confidence, and lift. The engine is single-threaded, in-memory, and
//! deterministic: the same input and thresholds always produce the same
//! rule set, in the same order.
//!
//! # Quick Start
//!
//! ```
//! use asociar::prelude::*;
//!
//! // Each transaction is a set of categorical item labels. For tabular
//! // data, prefix values with their attribute name ("outlook=sunny") so a
//! // rule never mixes two values of one attribute.
//! let store = TransactionStore::from_rows(&[
//!     vec!["bread", "milk"],
//!     vec!["bread", "butter"],
//!     vec!["bread", "milk", "butter"],
//!     vec!["milk", "butter"],
//! ]);
//!
//! let mut miner = Apriori::new()
//!     .with_min_support(0.5)
//!     .with_min_confidence(0.6);
//! miner.fit(&store).unwrap();
//!
//! for rule in miner.rules() {
//!     println!(
//!         "{:?} => {:?} (support={}, confidence={}, lift={})",
//!         rule.lhs.items(),
//!         rule.rhs.items(),
//!         rule.support,
//!         rule.confidence,
//!         rule.lift
//!     );
//! }
//! ```
//!
//! # Modules
//!
//! - [`itemset`]: Canonical itemset representation
//! - [`transactions`]: Immutable transaction store and support counting
//! - [`mining`]: Level-wise frequent itemset miner and the [`Apriori`] facade
//! - [`rules`]: Rule generation with confidence and lift
//! - [`error`]: Error types

pub mod error;
pub mod itemset;
pub mod mining;
pub mod prelude;
pub mod rules;
pub mod transactions;

pub use error::{AsociarError, Result};
pub use itemset::Itemset;
pub use mining::{mine_frequent_itemsets, Apriori};
pub use rules::{generate_rules, AssociationRule, RuleSet};
pub use transactions::TransactionStore;
