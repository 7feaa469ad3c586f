//! Typed, nullable columns.

use serde::{Deserialize, Serialize};

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// 64-bit signed integers.
    Integer,
    /// 64-bit floats.
    Float,
    /// Booleans.
    Boolean,
    /// Fixed-role arrays of 64-bit floats (feature vectors).
    DoubleArray,
    /// Arrays of 64-bit integers (neighbour id lists).
    IntegerArray,
}

impl ColumnType {
    /// Human-readable type name as used in error messages and JSON.
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::DoubleArray => "double_array",
            ColumnType::IntegerArray => "integer_array",
        }
    }
}

/// Column payload: one typed vector, with `None` marking a null entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Integer values.
    Integer(Vec<Option<i64>>),
    /// Float values.
    Float(Vec<Option<f64>>),
    /// Boolean values.
    Boolean(Vec<Option<bool>>),
    /// Float-array values.
    DoubleArray(Vec<Option<Vec<f64>>>),
    /// Integer-array values.
    IntegerArray(Vec<Option<Vec<i64>>>),
}

impl ColumnData {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Integer(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
            ColumnData::DoubleArray(v) => v.len(),
            ColumnData::IntegerArray(v) => v.len(),
        }
    }

    /// Returns `true` when the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared type of this payload.
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Integer(_) => ColumnType::Integer,
            ColumnData::Float(_) => ColumnType::Float,
            ColumnData::Boolean(_) => ColumnType::Boolean,
            ColumnData::DoubleArray(_) => ColumnType::DoubleArray,
            ColumnData::IntegerArray(_) => ColumnType::IntegerArray,
        }
    }

    /// Returns `true` when any entry is null.
    pub fn has_nulls(&self) -> bool {
        match self {
            ColumnData::Integer(v) => v.iter().any(Option::is_none),
            ColumnData::Float(v) => v.iter().any(Option::is_none),
            ColumnData::Boolean(v) => v.iter().any(Option::is_none),
            ColumnData::DoubleArray(v) => v.iter().any(Option::is_none),
            ColumnData::IntegerArray(v) => v.iter().any(Option::is_none),
        }
    }
}

/// A named, typed, nullable column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Creates a column from a name and payload.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Convenience constructor for a non-null integer column.
    pub fn integers(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self::new(
            name,
            ColumnData::Integer(values.into_iter().map(Some).collect()),
        )
    }

    /// Convenience constructor for a non-null float column.
    pub fn floats(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(
            name,
            ColumnData::Float(values.into_iter().map(Some).collect()),
        )
    }

    /// Convenience constructor for a non-null boolean column.
    pub fn booleans(name: impl Into<String>, values: Vec<bool>) -> Self {
        Self::new(
            name,
            ColumnData::Boolean(values.into_iter().map(Some).collect()),
        )
    }

    /// Convenience constructor for a non-null double-array column.
    pub fn double_arrays(name: impl Into<String>, values: Vec<Vec<f64>>) -> Self {
        Self::new(
            name,
            ColumnData::DoubleArray(values.into_iter().map(Some).collect()),
        )
    }

    /// Convenience constructor for a non-null integer-array column.
    pub fn integer_arrays(name: impl Into<String>, values: Vec<Vec<i64>>) -> Self {
        Self::new(
            name,
            ColumnData::IntegerArray(values.into_iter().map(Some).collect()),
        )
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column payload.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Declared type.
    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` when any entry is null.
    pub fn has_nulls(&self) -> bool {
        self.data.has_nulls()
    }

    /// Integer payload, if this is an integer column.
    pub fn as_integer(&self) -> Option<&[Option<i64>]> {
        match &self.data {
            ColumnData::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// Float payload, if this is a float column.
    pub fn as_float(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean column.
    pub fn as_boolean(&self) -> Option<&[Option<bool>]> {
        match &self.data {
            ColumnData::Boolean(v) => Some(v),
            _ => None,
        }
    }

    /// Double-array payload, if this is a double-array column.
    pub fn as_double_array(&self) -> Option<&[Option<Vec<f64>>]> {
        match &self.data {
            ColumnData::DoubleArray(v) => Some(v),
            _ => None,
        }
    }

    /// Integer-array payload, if this is an integer-array column.
    pub fn as_integer_array(&self) -> Option<&[Option<Vec<i64>>]> {
        match &self.data {
            ColumnData::IntegerArray(v) => Some(v),
            _ => None,
        }
    }
}
