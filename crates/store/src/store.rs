//! Process-local table store.

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::relation::Relation;

/// A process-local collection of named relations.
///
/// This is the storage collaborator the prediction engine reads from and
/// writes to. Relations are keyed by name; insertion never overwrites.
#[derive(Debug, Default)]
pub struct TableStore {
    tables: BTreeMap<String, Relation>,
}

impl TableStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a relation by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TableNotFound`] if no relation of that name
    /// exists.
    pub fn read_table(&self, name: &str) -> Result<&Relation, StoreError> {
        self.tables.get(name).ok_or_else(|| StoreError::TableNotFound {
            name: name.to_string(),
        })
    }

    /// Inserts a new relation under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TableExists`] if the name is already taken;
    /// the existing relation is left untouched.
    pub fn insert_table(&mut self, relation: Relation) -> Result<(), StoreError> {
        if self.tables.contains_key(relation.name()) {
            return Err(StoreError::TableExists {
                name: relation.name().to_string(),
            });
        }
        self.tables.insert(relation.name().to_string(), relation);
        Ok(())
    }

    /// Returns `true` when a relation of the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Number of relations in the store.
    pub fn n_tables(&self) -> usize {
        self.tables.len()
    }

    /// Iterator over table names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.tables.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    fn small_relation(name: &str) -> Relation {
        Relation::new(name, vec![Column::integers("id", vec![1, 2])]).unwrap()
    }

    #[test]
    fn insert_then_read() {
        let mut store = TableStore::new();
        store.insert_table(small_relation("train")).unwrap();

        assert!(store.contains("train"));
        assert_eq!(store.n_tables(), 1);
        let rel = store.read_table("train").unwrap();
        assert_eq!(rel.n_rows(), 2);
    }

    #[test]
    fn read_missing_fails() {
        let store = TableStore::new();
        let result = store.read_table("nope");
        assert!(matches!(result, Err(StoreError::TableNotFound { name }) if name == "nope"));
    }

    #[test]
    fn double_insert_fails_and_preserves_original() {
        let mut store = TableStore::new();
        store.insert_table(small_relation("t")).unwrap();

        let replacement = Relation::new("t", vec![Column::integers("id", vec![9])]).unwrap();
        let result = store.insert_table(replacement);
        assert!(matches!(result, Err(StoreError::TableExists { name }) if name == "t"));

        // Original untouched
        assert_eq!(store.read_table("t").unwrap().n_rows(), 2);
    }

    #[test]
    fn names_are_sorted() {
        let mut store = TableStore::new();
        store.insert_table(small_relation("zeta")).unwrap();
        store.insert_table(small_relation("alpha")).unwrap();

        let names: Vec<_> = store.names().cloned().collect();
        assert_eq!(names, vec!["alpha".to_string(), "zeta".to_string()]);
    }
}
