//! Store-level integration: insert/read semantics and JSON interchange.

use pythia_store::{Column, Relation, StoreError, TableStore, from_json, to_json};

fn training() -> Relation {
    Relation::new(
        "training",
        vec![
            Column::integers("id", vec![1, 2, 3]),
            Column::double_arrays(
                "features",
                vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]],
            ),
            Column::integers("label", vec![0, 1, 1]),
        ],
    )
    .unwrap()
}

#[test]
fn insert_then_read_returns_the_same_relation() {
    let mut store = TableStore::new();
    store.insert_table(training()).unwrap();

    let back = store.read_table("training").unwrap();
    assert_eq!(back, &training());
    assert_eq!(store.n_tables(), 1);
    assert_eq!(store.names().collect::<Vec<_>>(), vec!["training"]);
}

#[test]
fn insert_never_overwrites() {
    let mut store = TableStore::new();
    store.insert_table(training()).unwrap();

    let replacement =
        Relation::new("training", vec![Column::integers("id", vec![99])]).unwrap();
    let result = store.insert_table(replacement);
    assert!(matches!(result, Err(StoreError::TableExists { name }) if name == "training"));
    // Original rows intact.
    assert_eq!(store.read_table("training").unwrap().n_rows(), 3);
}

#[test]
fn reading_an_unknown_table_fails() {
    let store = TableStore::new();
    let result = store.read_table("nope");
    assert!(matches!(result, Err(StoreError::TableNotFound { name }) if name == "nope"));
}

#[test]
fn json_round_trip_through_a_store() {
    let json = to_json(&training()).unwrap();
    let mut store = TableStore::new();
    store.insert_table(from_json(&json).unwrap()).unwrap();

    let back = store.read_table("training").unwrap();
    assert_eq!(back.n_rows(), 3);
    assert_eq!(
        back.column("features").unwrap().as_double_array().unwrap()[1].as_deref(),
        Some(&[1.0, 0.0][..])
    );
}
