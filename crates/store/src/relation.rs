//! Named relations: schema-checked sets of equal-length columns.

use crate::column::Column;
use crate::error::StoreError;

/// A named relation.
///
/// Construction validates the schema: every column must have the same row
/// count and column names must be unique. Column order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    name: String,
    columns: Vec<Column>,
    n_rows: usize,
}

impl Relation {
    /// Creates a relation from named columns.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ColumnLengthMismatch`] if any column's row
    /// count differs from the first column's, and
    /// [`StoreError::DuplicateColumn`] on repeated column names. A relation
    /// with no columns has zero rows.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self, StoreError> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);

        for col in &columns {
            if col.len() != n_rows {
                return Err(StoreError::ColumnLengthMismatch {
                    column: col.name().to_string(),
                    expected: n_rows,
                    got: col.len(),
                });
            }
        }
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name() == col.name()) {
                return Err(StoreError::DuplicateColumn {
                    column: col.name().to_string(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            columns,
            n_rows,
        })
    }

    /// Relation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns `true` when the relation has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// All columns, in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Consumes the relation and returns its columns, in declaration order.
    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Returns `true` when a column of the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}
