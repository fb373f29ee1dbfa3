//! Level-k candidate generation and anti-monotone pruning.

use std::collections::HashSet;

use crate::itemset::Itemset;

/// Build level-k candidates from the level-(k-1) frequent itemsets.
///
/// Joins every pair of itemsets that agree on their first k-2 canonical
/// elements and differ in the last, deduplicating by canonical form. Always
/// produces a fresh collection; the previous level is never touched.
pub(crate) fn generate_candidates(prev_level: &[Itemset]) -> Vec<Itemset> {
    let mut candidates = Vec::new();
    let mut seen = HashSet::new();

    for i in 0..prev_level.len() {
        for j in (i + 1)..prev_level.len() {
            if let Some(joined) = prev_level[i].join(&prev_level[j]) {
                if seen.insert(joined.clone()) {
                    candidates.push(joined);
                }
            }
        }
    }

    candidates
}

/// Discard candidates with an infrequent (k-1)-subset.
///
/// Anti-monotonicity guarantees no such candidate can be frequent, so it is
/// dropped before any support counting happens. Filtering builds a new
/// collection rather than deleting from the one being iterated.
pub(crate) fn prune_candidates(
    candidates: Vec<Itemset>,
    prev_level: &HashSet<Itemset>,
) -> Vec<Itemset> {
    candidates
        .into_iter()
        .filter(|candidate| {
            candidate
                .k_minus_1_subsets()
                .iter()
                .all(|subset| prev_level.contains(subset))
        })
        .collect()
}
