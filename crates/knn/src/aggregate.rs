//! Aggregation of a query's neighbour set into a single prediction.
//!
//! The mode (classification vs regression) is fixed once per run from the
//! label kind; weighting is an orthogonal switch. All four paths are pure
//! reductions over the k selected neighbours.

use std::collections::BTreeMap;

use crate::select::Neighbor;

/// Majority vote over the neighbours' categories.
///
/// Ties break to the smallest category: counts are visited in ascending
/// category order and only a strictly greater count replaces the leader.
pub(crate) fn classify_unweighted(neighbors: &[Neighbor], categories: &[i64]) -> i64 {
    debug_assert!(!neighbors.is_empty());

    let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
    for n in neighbors {
        *counts.entry(categories[n.train_index]).or_insert(0) += 1;
    }

    let mut best_count = 0;
    let mut best_category = 0;
    for (&category, &count) in &counts {
        if count > best_count {
            best_count = count;
            best_category = category;
        }
    }
    best_category
}

/// Inverse-distance-weighted vote over the neighbours' categories.
///
/// Per category, the score is the sum of neighbour weights. Candidates are
/// ranked as if sorted ascending by `(score, category)` with the last one
/// taken: visiting categories in ascending order and replacing the leader
/// on `score >= best` means the higher score wins and, among equal scores,
/// the larger category wins.
pub(crate) fn classify_weighted(neighbors: &[Neighbor], categories: &[i64]) -> i64 {
    debug_assert!(!neighbors.is_empty());

    let mut scores: BTreeMap<i64, f64> = BTreeMap::new();
    for n in neighbors {
        *scores.entry(categories[n.train_index]).or_insert(0.0) += n.weight;
    }

    let mut best_score = f64::NEG_INFINITY;
    let mut best_category = 0;
    for (&category, &score) in &scores {
        if score >= best_score {
            best_score = score;
            best_category = category;
        }
    }
    best_category
}

/// Arithmetic mean of the neighbours' values.
pub(crate) fn regress_unweighted(neighbors: &[Neighbor], values: &[f64]) -> f64 {
    debug_assert!(!neighbors.is_empty());

    let sum: f64 = neighbors.iter().map(|n| values[n.train_index]).sum();
    sum / neighbors.len() as f64
}

/// Inverse-distance-weighted mean of the neighbours' values.
pub(crate) fn regress_weighted(neighbors: &[Neighbor], values: &[f64]) -> f64 {
    debug_assert!(!neighbors.is_empty());

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for n in neighbors {
        weighted_sum += values[n.train_index] * n.weight;
        weight_sum += n.weight;
    }
    weighted_sum / weight_sum
}
