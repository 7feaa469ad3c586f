//! Error types for pythia-store.

/// Error type for all fallible operations in the pythia-store crate.
///
/// Covers relation construction (schema shape problems), table-store
/// lookups, and JSON interchange failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Returned when a requested table does not exist in the store.
    #[error("table '{name}' not found")]
    TableNotFound {
        /// Name of the missing table.
        name: String,
    },

    /// Returned when inserting a table whose name is already taken.
    #[error("table '{name}' already exists")]
    TableExists {
        /// Name of the conflicting table.
        name: String,
    },

    /// Returned when a relation is built with columns of unequal length.
    #[error("column '{column}' has {got} rows, expected {expected}")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        got: usize,
    },

    /// Returned when a relation is built with two columns of the same name.
    #[error("duplicate column '{column}'")]
    DuplicateColumn {
        /// The repeated column name.
        column: String,
    },

    /// Returned when JSON (de)serialisation of a relation fails.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serde_json failure.
        reason: String,
    },

    /// Returned when a JSON document does not describe a valid relation.
    #[error("malformed relation document: {reason}")]
    MalformedDocument {
        /// What was wrong with the document.
        reason: String,
    },
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json {
            reason: e.to_string(),
        }
    }
}
