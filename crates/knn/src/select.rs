//! Per-query neighbour selection.
//!
//! Brute-force: every training point is scored against the query, ranked
//! under the total order `(distance ascending, train_id ascending)`, and
//! the first k kept. The id tie-break makes selection reproducible, also
//! at the k-th boundary.

use crate::error::ExecutionError;
use crate::metric::Metric;

/// Weight assigned to a neighbour at exactly zero distance.
///
/// Large enough to dominate a weighted vote or average, finite so sums
/// stay well-defined. Fixed by design; not calibrated to the data.
pub const MAX_WEIGHT_ZERO_DIST: f64 = 1e6;

/// One selected neighbour of one query point. Ephemeral: produced by the
/// selector, consumed by the aggregator, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Neighbor {
    /// Row index of the training point (for label lookup).
    pub train_index: usize,
    /// Id of the training point.
    pub train_id: i64,
    /// Distance to the query point.
    pub distance: f64,
    /// Inverse-distance weight; strictly positive and finite.
    pub weight: f64,
}

/// Selects the k nearest training points for one query point.
///
/// `scored` is a reusable scratch buffer; it is cleared on entry.
///
/// # Errors
///
/// Returns [`ExecutionError::DimensionMismatch`] when a training row's
/// length differs from the query's, and [`ExecutionError::InvalidDistance`]
/// when the metric produces a non-finite or negative value. Both are fatal
/// to the run.
pub(crate) fn select_neighbors(
    query_id: i64,
    query: &[f64],
    train_ids: &[i64],
    train_features: &[&[f64]],
    k: usize,
    metric: &Metric,
    scored: &mut Vec<(f64, i64, usize)>,
) -> Result<Vec<Neighbor>, ExecutionError> {
    debug_assert!(k >= 1);
    debug_assert!(k <= train_features.len());
    debug_assert_eq!(train_ids.len(), train_features.len());

    scored.clear();
    for (index, (&train_id, &features)) in train_ids.iter().zip(train_features).enumerate() {
        if features.len() != query.len() {
            return Err(ExecutionError::DimensionMismatch {
                query_id,
                train_id,
                expected: query.len(),
                got: features.len(),
            });
        }
        let distance = metric.distance(query, features);
        if !distance.is_finite() || distance < 0.0 {
            return Err(ExecutionError::InvalidDistance {
                query_id,
                train_id,
                distance,
            });
        }
        scored.push((distance, train_id, index));
    }

    // Total order: distance first, id breaks ties. Distances are finite by
    // the check above, so the Equal fallback is never load-bearing.
    scored.sort_unstable_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });
    scored.truncate(k);

    Ok(scored
        .iter()
        .map(|&(distance, train_id, train_index)| Neighbor {
            train_index,
            train_id,
            distance,
            weight: weight_of(distance),
        })
        .collect())
}

/// Inverse-distance weight, with the zero-distance special case.
fn weight_of(distance: f64) -> f64 {
    if distance > 0.0 {
        1.0 / distance
    } else {
        MAX_WEIGHT_ZERO_DIST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn run(
        query: &[f64],
        train_ids: &[i64],
        train_features: &[&[f64]],
        k: usize,
    ) -> Vec<Neighbor> {
        let mut scored = Vec::new();
        select_neighbors(
            100,
            query,
            train_ids,
            train_features,
            k,
            &Metric::SquaredEuclidean,
            &mut scored,
        )
        .unwrap()
    }

    #[test]
    fn returns_exactly_k_sorted_by_distance() {
        let features: Vec<Vec<f64>> = vec![vec![9.0], vec![1.0], vec![4.0], vec![0.0]];
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();
        let neighbors = run(&[0.0], &[10, 20, 30, 40], &rows, 3);

        assert_eq!(neighbors.len(), 3);
        assert_eq!(neighbors[0].train_id, 40);
        assert_eq!(neighbors[1].train_id, 20);
        assert_eq!(neighbors[2].train_id, 30);
        for pair in neighbors.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn distance_ties_break_by_id() {
        // Points at +1 and -1 are equidistant from 0.
        let features: Vec<Vec<f64>> = vec![vec![1.0], vec![-1.0], vec![5.0]];
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();

        // Higher id listed first in the input; the tie must still resolve
        // to the smaller id.
        let neighbors = run(&[0.0], &[7, 3, 1], &rows, 2);
        assert_eq!(neighbors[0].train_id, 3);
        assert_eq!(neighbors[1].train_id, 7);
    }

    #[test]
    fn boundary_tie_is_strict_top_k() {
        // Three points tied at distance 1; k = 2 must keep the two
        // smallest ids, never an arbitrary pair.
        let features: Vec<Vec<f64>> = vec![vec![1.0], vec![1.0], vec![1.0]];
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();
        let neighbors = run(&[0.0], &[12, 5, 9], &rows, 2);

        let ids: Vec<i64> = neighbors.iter().map(|n| n.train_id).collect();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn zero_distance_gets_max_weight() {
        let features: Vec<Vec<f64>> = vec![vec![2.0, 2.0], vec![3.0, 3.0]];
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();
        let neighbors = run(&[2.0, 2.0], &[1, 2], &rows, 2);

        assert_abs_diff_eq!(neighbors[0].distance, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(neighbors[0].weight, MAX_WEIGHT_ZERO_DIST, epsilon = 1e-12);
        assert_abs_diff_eq!(neighbors[1].weight, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn weights_are_inverse_distance() {
        let features: Vec<Vec<f64>> = vec![vec![2.0], vec![10.0]];
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();
        let neighbors = run(&[0.0], &[1, 2], &rows, 2);

        // Squared-L2 distances 4 and 100
        assert_abs_diff_eq!(neighbors[0].weight, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(neighbors[1].weight, 0.01, epsilon = 1e-12);
        for n in &neighbors {
            assert!(n.weight > 0.0 && n.weight.is_finite());
        }
    }

    #[test]
    fn carries_train_index_for_label_lookup() {
        let features: Vec<Vec<f64>> = vec![vec![5.0], vec![1.0]];
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();
        let neighbors = run(&[0.0], &[50, 60], &rows, 1);
        assert_eq!(neighbors[0].train_index, 1);
        assert_eq!(neighbors[0].train_id, 60);
    }

    #[test]
    fn dimension_mismatch_is_execution_error() {
        let features: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0]];
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();
        let mut scored = Vec::new();

        let result = select_neighbors(
            100,
            &[0.0, 0.0],
            &[1],
            &rows,
            1,
            &Metric::SquaredEuclidean,
            &mut scored,
        );
        assert!(matches!(
            result,
            Err(ExecutionError::DimensionMismatch {
                query_id: 100,
                train_id: 1,
                expected: 2,
                got: 3,
            })
        ));
    }

    #[test]
    fn nan_metric_is_execution_error() {
        let features: Vec<Vec<f64>> = vec![vec![1.0]];
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();
        let metric = Metric::custom("nan", |_: &[f64], _: &[f64]| f64::NAN);
        let mut scored = Vec::new();

        let result = select_neighbors(100, &[0.0], &[1], &rows, 1, &metric, &mut scored);
        assert!(matches!(
            result,
            Err(ExecutionError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn scratch_buffer_is_cleared_between_calls() {
        let features: Vec<Vec<f64>> = vec![vec![1.0], vec![2.0]];
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();
        let mut scored = Vec::new();

        let first = select_neighbors(
            1,
            &[0.0],
            &[1, 2],
            &rows,
            2,
            &Metric::SquaredEuclidean,
            &mut scored,
        )
        .unwrap();
        assert_eq!(first.len(), 2);

        let second = select_neighbors(
            2,
            &[0.0],
            &[1, 2],
            &rows,
            1,
            &Metric::SquaredEuclidean,
            &mut scored,
        )
        .unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].train_id, 1);
    }
}
