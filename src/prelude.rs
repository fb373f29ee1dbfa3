//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use asociar::prelude::*;
//! ```

pub use crate::error::{AsociarError, Result};
pub use crate::itemset::Itemset;
pub use crate::mining::{mine_frequent_itemsets, Apriori};
pub use crate::rules::{generate_rules, AssociationRule, RuleSet};
pub use crate::transactions::TransactionStore;
