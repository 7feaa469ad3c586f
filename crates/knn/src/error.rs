//! Error taxonomy for the pythia-knn crate.
//!
//! Three layers, mirroring when a failure can occur:
//!
//! - [`ConfigError`] — the run parameters themselves are unusable;
//! - [`ValidationError`] — the input relations violate a precondition,
//!   detected before any distance computation;
//! - [`ExecutionError`] — a failure surfaced mid-computation.
//!
//! [`PredictError`] wraps all three for the public entry point. None of
//! these are retried: a run fully succeeds or fully fails, and no output
//! relation is created on failure.

use pythia_store::StoreError;

/// Bad or missing run parameters.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Returned when a required parameter is empty.
    #[error("parameter '{param}' must not be empty")]
    EmptyParameter {
        /// Name of the offending parameter.
        param: &'static str,
    },

    /// Returned when neither a label column nor neighbour output is requested.
    #[error("nothing to produce: request a label column, neighbour output, or both")]
    NoOutputRequested,

    /// Returned when a metric name cannot be parsed.
    #[error("unknown distance metric '{name}'")]
    UnknownMetric {
        /// The unrecognised metric name.
        name: String,
    },

    /// Returned when a custom metric fails the probe check.
    #[error("invalid custom metric: {reason}")]
    InvalidMetric {
        /// Why the probe rejected the function.
        reason: String,
    },
}

/// Precondition violations on the input relations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// Returned when a required table does not exist.
    #[error("table '{name}' not found")]
    MissingTable {
        /// Name of the missing table.
        name: String,
    },

    /// Returned when a required table has no rows.
    #[error("table '{name}' is empty")]
    EmptyTable {
        /// Name of the empty table.
        name: String,
    },

    /// Returned when the output table name is already taken.
    #[error("output table '{name}' already exists")]
    OutputExists {
        /// The conflicting name.
        name: String,
    },

    /// Returned when a required column does not exist in its table.
    #[error("column '{column}' not found in table '{table}'")]
    MissingColumn {
        /// The table inspected.
        table: String,
        /// The missing column.
        column: String,
    },

    /// Returned when a column has the wrong declared type.
    #[error("column '{column}' in table '{table}' must be {expected}, got {got}")]
    ColumnTypeMismatch {
        /// The table inspected.
        table: String,
        /// The offending column.
        column: String,
        /// The required type.
        expected: &'static str,
        /// The declared type found.
        got: &'static str,
    },

    /// Returned when a column that must be fully populated contains nulls.
    #[error("column '{column}' in table '{table}' contains null entries")]
    NullEntries {
        /// The table inspected.
        table: String,
        /// The offending column.
        column: String,
    },

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when k exceeds the number of training rows.
    #[error("k = {k} exceeds the {rows} rows of the training table")]
    KExceedsTrainingRows {
        /// The requested k.
        k: usize,
        /// The training row count.
        rows: usize,
    },
}

/// Failures surfaced during distance computation or aggregation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExecutionError {
    /// Returned when a feature row's dimension differs from the query's.
    #[error(
        "dimension mismatch: training point {train_id} has {got} features, query {query_id} has {expected}"
    )]
    DimensionMismatch {
        /// Id of the query point.
        query_id: i64,
        /// Id of the training point.
        train_id: i64,
        /// Dimension of the query vector.
        expected: usize,
        /// Dimension of the training vector.
        got: usize,
    },

    /// Returned when the metric produces a non-finite or negative distance.
    #[error(
        "metric produced invalid distance {distance} between query {query_id} and training point {train_id}"
    )]
    InvalidDistance {
        /// Id of the query point.
        query_id: i64,
        /// Id of the training point.
        train_id: i64,
        /// The offending distance value.
        distance: f64,
    },
}

/// Error type for a full prediction run.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The run parameters are unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The input relations violate a precondition.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A failure surfaced during computation.
    #[error("execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// The storage collaborator failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
