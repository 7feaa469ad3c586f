//! JSON interchange for relations.
//!
//! A relation serialises as
//! `{"name": ..., "columns": [{"name": ..., "type": ..., "values": [...]}]}`
//! with nulls carried through as JSON `null`. Reading re-validates the
//! relation shape via [`Relation::new`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::{Column, ColumnData, ColumnType};
use crate::error::StoreError;
use crate::relation::Relation;

#[derive(Debug, Serialize, Deserialize)]
struct RelationDoc {
    name: String,
    columns: Vec<ColumnDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ColumnDoc {
    name: String,
    #[serde(rename = "type")]
    column_type: ColumnType,
    values: Vec<Value>,
}

/// Serialises a relation to pretty-printed JSON.
pub fn to_json(relation: &Relation) -> Result<String, StoreError> {
    let doc = RelationDoc {
        name: relation.name().to_string(),
        columns: relation.columns().iter().map(column_to_doc).collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parses a relation from JSON.
///
/// # Errors
///
/// Returns [`StoreError::MalformedDocument`] when a value does not match
/// its column's declared type, and the usual relation-shape errors from
/// [`Relation::new`].
pub fn from_json(json: &str) -> Result<Relation, StoreError> {
    let doc: RelationDoc = serde_json::from_str(json)?;
    let columns = doc
        .columns
        .into_iter()
        .map(doc_to_column)
        .collect::<Result<Vec<_>, _>>()?;
    Relation::new(doc.name, columns)
}

fn column_to_doc(col: &Column) -> ColumnDoc {
    let values = match col.data() {
        ColumnData::Integer(v) => v.iter().map(|o| json_opt(o.map(Value::from))).collect(),
        ColumnData::Float(v) => v.iter().map(|o| json_opt(o.map(Value::from))).collect(),
        ColumnData::Boolean(v) => v.iter().map(|o| json_opt(o.map(Value::from))).collect(),
        ColumnData::DoubleArray(v) => v
            .iter()
            .map(|o| json_opt(o.as_ref().map(|a| Value::from(a.clone()))))
            .collect(),
        ColumnData::IntegerArray(v) => v
            .iter()
            .map(|o| json_opt(o.as_ref().map(|a| Value::from(a.clone()))))
            .collect(),
    };
    ColumnDoc {
        name: col.name().to_string(),
        column_type: col.column_type(),
        values,
    }
}

fn json_opt(v: Option<Value>) -> Value {
    v.unwrap_or(Value::Null)
}

fn doc_to_column(doc: ColumnDoc) -> Result<Column, StoreError> {
    let data = match doc.column_type {
        ColumnType::Integer => ColumnData::Integer(
            doc.values
                .iter()
                .map(|v| read_opt(v, &doc.name, read_i64))
                .collect::<Result<_, _>>()?,
        ),
        ColumnType::Float => ColumnData::Float(
            doc.values
                .iter()
                .map(|v| read_opt(v, &doc.name, read_f64))
                .collect::<Result<_, _>>()?,
        ),
        ColumnType::Boolean => ColumnData::Boolean(
            doc.values
                .iter()
                .map(|v| read_opt(v, &doc.name, read_bool))
                .collect::<Result<_, _>>()?,
        ),
        ColumnType::DoubleArray => ColumnData::DoubleArray(
            doc.values
                .iter()
                .map(|v| read_opt(v, &doc.name, read_f64_array))
                .collect::<Result<_, _>>()?,
        ),
        ColumnType::IntegerArray => ColumnData::IntegerArray(
            doc.values
                .iter()
                .map(|v| read_opt(v, &doc.name, read_i64_array))
                .collect::<Result<_, _>>()?,
        ),
    };
    Ok(Column::new(doc.name, data))
}

fn read_opt<T>(
    v: &Value,
    column: &str,
    read: fn(&Value) -> Option<T>,
) -> Result<Option<T>, StoreError> {
    if v.is_null() {
        return Ok(None);
    }
    read(v).map(Some).ok_or_else(|| StoreError::MalformedDocument {
        reason: format!("value {v} does not match the declared type of column '{column}'"),
    })
}

fn read_i64(v: &Value) -> Option<i64> {
    v.as_i64()
}

fn read_f64(v: &Value) -> Option<f64> {
    v.as_f64()
}

fn read_bool(v: &Value) -> Option<bool> {
    v.as_bool()
}

fn read_f64_array(v: &Value) -> Option<Vec<f64>> {
    v.as_array()?.iter().map(Value::as_f64).collect()
}

fn read_i64_array(v: &Value) -> Option<Vec<i64>> {
    v.as_array()?.iter().map(Value::as_i64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_relation() -> Relation {
        Relation::new(
            "train",
            vec![
                Column::integers("id", vec![1, 2]),
                Column::double_arrays("features", vec![vec![0.0, 0.0], vec![10.0, 10.0]]),
                Column::new("label", ColumnData::Integer(vec![Some(0), None])),
            ],
        )
        .unwrap()
    }

    #[test]
    fn round_trip_preserves_relation() {
        let rel = sample_relation();
        let json = to_json(&rel).unwrap();
        let back = from_json(&json).unwrap();
        assert_eq!(back, rel);
    }

    #[test]
    fn null_survives_round_trip() {
        let rel = sample_relation();
        let back = from_json(&to_json(&rel).unwrap()).unwrap();
        let label = back.column("label").unwrap();
        assert!(label.has_nulls());
        assert_eq!(label.as_integer().unwrap()[1], None);
    }

    #[test]
    fn parse_handwritten_document() {
        let json = r#"{
            "name": "queries",
            "columns": [
                {"name": "id", "type": "integer", "values": [100]},
                {"name": "features", "type": "double_array", "values": [[1.0, 1.0]]}
            ]
        }"#;
        let rel = from_json(json).unwrap();
        assert_eq!(rel.name(), "queries");
        assert_eq!(rel.n_rows(), 1);
        assert_eq!(
            rel.column("features").unwrap().as_double_array().unwrap()[0].as_deref(),
            Some(&[1.0, 1.0][..])
        );
    }

    #[test]
    fn integer_accepts_no_floats() {
        let json = r#"{
            "name": "t",
            "columns": [{"name": "id", "type": "integer", "values": [1.5]}]
        }"#;
        let result = from_json(json);
        assert!(matches!(result, Err(StoreError::MalformedDocument { .. })));
    }

    #[test]
    fn float_accepts_integer_literals() {
        let json = r#"{
            "name": "t",
            "columns": [{"name": "y", "type": "float", "values": [2]}]
        }"#;
        let rel = from_json(json).unwrap();
        assert_eq!(rel.column("y").unwrap().as_float().unwrap()[0], Some(2.0));
    }

    #[test]
    fn ragged_columns_fail_on_parse() {
        let json = r#"{
            "name": "t",
            "columns": [
                {"name": "id", "type": "integer", "values": [1, 2]},
                {"name": "y", "type": "float", "values": [0.5]}
            ]
        }"#;
        let result = from_json(json);
        assert!(matches!(
            result,
            Err(StoreError::ColumnLengthMismatch { .. })
        ));
    }

    #[test]
    fn bad_array_element_fails() {
        let json = r#"{
            "name": "t",
            "columns": [{"name": "f", "type": "double_array", "values": [[1.0, "x"]]}]
        }"#;
        let result = from_json(json);
        assert!(matches!(result, Err(StoreError::MalformedDocument { .. })));
    }
}
