//! Run validation: precondition checks ahead of any distance computation.
//!
//! Validation is fail-fast (first violation aborts the run) and read-only.
//! On success it hands the selector borrowed, typed views of both tables so
//! the hot path never touches the column machinery again.

use pythia_store::{Column, Relation, TableStore};

use crate::config::KnnParams;
use crate::error::{PredictError, ValidationError};

/// Training-set labels, typed once per run from the declared column type.
///
/// Integer and boolean columns yield categories (classification, booleans
/// as 0/1); float columns yield values (regression).
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Labels {
    /// Discrete categories.
    Categories(Vec<i64>),
    /// Real-valued targets.
    Values(Vec<f64>),
}

/// Typed view of the training table.
#[derive(Debug)]
pub(crate) struct TrainingView<'a> {
    /// Training point ids, row-aligned with `features`.
    pub ids: Vec<i64>,
    /// Borrowed feature rows.
    pub features: Vec<&'a [f64]>,
    /// Labels, present iff a label column was requested.
    pub labels: Option<Labels>,
}

/// Typed view of the query table.
#[derive(Debug)]
pub(crate) struct QueryView<'a> {
    /// Query point ids, row-aligned with `features`.
    pub ids: Vec<i64>,
    /// Borrowed feature rows.
    pub features: Vec<&'a [f64]>,
}

/// Validates all preconditions and builds the typed views.
///
/// Check order: parameter shape (including the custom-metric probe), table
/// existence and non-emptiness, output-name availability, column existence
/// and typing, nulls, k bounds, label typing. The first violation is
/// returned; nothing is written.
pub(crate) fn validate_run<'a>(
    store: &'a TableStore,
    params: &KnnParams,
) -> Result<(TrainingView<'a>, QueryView<'a>), PredictError> {
    params.validate()?;

    let training = require_table(store, params.point_source())?;
    let queries = require_table(store, params.test_source())?;

    if store.contains(params.output_table()) {
        return Err(ValidationError::OutputExists {
            name: params.output_table().to_string(),
        }
        .into());
    }

    let train_features = feature_rows(training, params.point_column())?;
    let query_features = feature_rows(queries, params.test_column())?;
    let train_ids = id_values(training, params.point_id())?;
    let query_ids = id_values(queries, params.test_id())?;

    if params.k() == 0 {
        return Err(ValidationError::InvalidK { k: 0 }.into());
    }
    if params.k() > training.n_rows() {
        return Err(ValidationError::KExceedsTrainingRows {
            k: params.k(),
            rows: training.n_rows(),
        }
        .into());
    }

    let labels = match params.label_column() {
        Some(column) => Some(label_values(training, column)?),
        None => None,
    };

    Ok((
        TrainingView {
            ids: train_ids,
            features: train_features,
            labels,
        },
        QueryView {
            ids: query_ids,
            features: query_features,
        },
    ))
}

fn require_table<'a>(
    store: &'a TableStore,
    name: &str,
) -> Result<&'a Relation, ValidationError> {
    let relation = store
        .read_table(name)
        .map_err(|_| ValidationError::MissingTable {
            name: name.to_string(),
        })?;
    if relation.is_empty() {
        return Err(ValidationError::EmptyTable {
            name: name.to_string(),
        });
    }
    Ok(relation)
}

fn require_column<'a>(
    relation: &'a Relation,
    column: &str,
) -> Result<&'a Column, ValidationError> {
    relation
        .column(column)
        .ok_or_else(|| ValidationError::MissingColumn {
            table: relation.name().to_string(),
            column: column.to_string(),
        })
}

/// Resolves a feature column to borrowed, non-null double-array rows.
fn feature_rows<'a>(
    relation: &'a Relation,
    column: &str,
) -> Result<Vec<&'a [f64]>, ValidationError> {
    let col = require_column(relation, column)?;
    let rows = col
        .as_double_array()
        .ok_or_else(|| ValidationError::ColumnTypeMismatch {
            table: relation.name().to_string(),
            column: column.to_string(),
            expected: "double_array",
            got: col.column_type().name(),
        })?;
    rows.iter()
        .map(|row| {
            row.as_deref().ok_or_else(|| ValidationError::NullEntries {
                table: relation.name().to_string(),
                column: column.to_string(),
            })
        })
        .collect()
}

/// Resolves an id column to non-null integers.
fn id_values(relation: &Relation, column: &str) -> Result<Vec<i64>, ValidationError> {
    let col = require_column(relation, column)?;
    let values = col
        .as_integer()
        .ok_or_else(|| ValidationError::ColumnTypeMismatch {
            table: relation.name().to_string(),
            column: column.to_string(),
            expected: "integer",
            got: col.column_type().name(),
        })?;
    values
        .iter()
        .map(|v| {
            v.ok_or_else(|| ValidationError::NullEntries {
                table: relation.name().to_string(),
                column: column.to_string(),
            })
        })
        .collect()
}

/// Resolves the label column, fixing the label kind from its declared type.
fn label_values(relation: &Relation, column: &str) -> Result<Labels, ValidationError> {
    let col = require_column(relation, column)?;
    let null_err = || ValidationError::NullEntries {
        table: relation.name().to_string(),
        column: column.to_string(),
    };

    if let Some(values) = col.as_integer() {
        let categories = values
            .iter()
            .map(|v| v.ok_or_else(null_err))
            .collect::<Result<_, _>>()?;
        return Ok(Labels::Categories(categories));
    }
    if let Some(values) = col.as_boolean() {
        let categories = values
            .iter()
            .map(|v| v.map(i64::from).ok_or_else(null_err))
            .collect::<Result<_, _>>()?;
        return Ok(Labels::Categories(categories));
    }
    if let Some(values) = col.as_float() {
        let targets = values
            .iter()
            .map(|v| v.ok_or_else(null_err))
            .collect::<Result<_, _>>()?;
        return Ok(Labels::Values(targets));
    }

    Err(ValidationError::ColumnTypeMismatch {
        table: relation.name().to_string(),
        column: column.to_string(),
        expected: "integer, float or boolean",
        got: col.column_type().name(),
    })
}
