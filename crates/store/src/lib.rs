//! Pythia table store: named relations with typed, nullable columns.
//!
//! This crate is the relational-storage collaborator of the prediction
//! engine. It deliberately stays small: relations are in-memory,
//! schema-checked at construction, addressed by name through a
//! [`TableStore`], and exchanged with the outside world as JSON.
//!
//! # Quick start
//!
//! ```
//! use pythia_store::{Column, Relation, TableStore};
//!
//! let training = Relation::new(
//!     "training",
//!     vec![
//!         Column::integers("id", vec![1, 2]),
//!         Column::double_arrays("features", vec![vec![0.0, 0.0], vec![10.0, 10.0]]),
//!     ],
//! )
//! .unwrap();
//!
//! let mut store = TableStore::new();
//! store.insert_table(training).unwrap();
//! assert_eq!(store.read_table("training").unwrap().n_rows(), 2);
//! ```

mod column;
mod error;
mod json;
mod relation;
mod store;

pub use column::{Column, ColumnData, ColumnType};
pub use error::StoreError;
pub use json::{from_json, to_json};
pub use relation::Relation;
pub use store::TableStore;
