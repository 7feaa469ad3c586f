//! Prediction run orchestration and result assembly.

use tracing::{debug, info};

use pythia_store::{Column, Relation, TableStore};

use crate::aggregate::{classify_unweighted, classify_weighted, regress_unweighted, regress_weighted};
use crate::config::KnnParams;
use crate::error::PredictError;
use crate::result::RunSummary;
use crate::select::select_neighbors;
use crate::validate::{Labels, validate_run};

/// Runs one k-NN prediction: validate, select, aggregate, assemble.
///
/// Produces exactly one output relation named `params.output_table()` with
/// one row per query point and columns `id`, the query feature column,
/// `prediction` (iff a label column was given) and `k_nearest_neighbours`
/// (iff neighbour output is on). The relation is built fully in memory and
/// inserted in a single step, so a failing run leaves the store untouched.
///
/// # Errors
///
/// Any [`PredictError`]: configuration, validation, execution or store.
pub fn predict(store: &mut TableStore, params: &KnnParams) -> Result<RunSummary, PredictError> {
    let output = {
        let (train, query) = validate_run(store, params)?;
        info!(
            n_training = train.ids.len(),
            n_queries = query.ids.len(),
            k = params.k(),
            metric = params.metric().name(),
            weighted = params.weighted(),
            "inputs validated"
        );

        let mut scored = Vec::with_capacity(train.ids.len());
        let mut category_preds: Vec<i64> = Vec::new();
        let mut value_preds: Vec<f64> = Vec::new();
        let mut neighbor_lists: Vec<Vec<i64>> = Vec::new();

        for (&query_id, &features) in query.ids.iter().zip(&query.features) {
            let neighbors = select_neighbors(
                query_id,
                features,
                &train.ids,
                &train.features,
                params.k(),
                params.metric(),
                &mut scored,
            )?;

            match &train.labels {
                Some(Labels::Categories(categories)) => {
                    category_preds.push(if params.weighted() {
                        classify_weighted(&neighbors, categories)
                    } else {
                        classify_unweighted(&neighbors, categories)
                    });
                }
                Some(Labels::Values(values)) => {
                    value_preds.push(if params.weighted() {
                        regress_weighted(&neighbors, values)
                    } else {
                        regress_unweighted(&neighbors, values)
                    });
                }
                None => {}
            }

            if params.output_neighbors() {
                // Nearest first, i.e. descending weight.
                neighbor_lists.push(neighbors.iter().map(|n| n.train_id).collect());
            }
        }
        debug!(n_predictions = query.ids.len(), "aggregation complete");

        let mut columns = vec![
            Column::integers("id", query.ids.clone()),
            Column::double_arrays(
                params.test_column(),
                query.features.iter().map(|f| f.to_vec()).collect(),
            ),
        ];
        match &train.labels {
            Some(Labels::Categories(_)) => {
                columns.push(Column::integers("prediction", category_preds));
            }
            Some(Labels::Values(_)) => {
                columns.push(Column::floats("prediction", value_preds));
            }
            None => {}
        }
        if params.output_neighbors() {
            columns.push(Column::integer_arrays("k_nearest_neighbours", neighbor_lists));
        }

        Relation::new(params.output_table(), columns)?
    };

    let summary = RunSummary::new(
        output.name().to_string(),
        output.n_rows(),
        store.read_table(params.point_source())?.n_rows(),
        params.k(),
    );
    store.insert_table(output)?;
    info!(
        output_table = summary.output_table(),
        n_rows = summary.n_queries(),
        "output relation written"
    );

    Ok(summary)
}
