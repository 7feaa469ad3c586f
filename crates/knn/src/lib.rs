//! Exact k-nearest-neighbour prediction over named tables.
//!
//! Given a training relation of labelled points and a query relation, this
//! crate finds, per query point, the k closest training points under a
//! pluggable distance metric, aggregates their labels into a prediction
//! (vote for classification, mean for regression, optionally weighted by
//! inverse distance) and writes one output relation to the table store.
//!
//! # Quick start
//!
//! ```
//! use pythia_knn::{KnnParams, predict};
//! use pythia_store::{Column, Relation, TableStore};
//!
//! let mut store = TableStore::new();
//! store
//!     .insert_table(
//!         Relation::new(
//!             "training",
//!             vec![
//!                 Column::integers("id", vec![1, 2]),
//!                 Column::double_arrays("features", vec![vec![0.0, 0.0], vec![10.0, 10.0]]),
//!                 Column::integers("label", vec![0, 1]),
//!             ],
//!         )
//!         .unwrap(),
//!     )
//!     .unwrap();
//! store
//!     .insert_table(
//!         Relation::new(
//!             "queries",
//!             vec![
//!                 Column::integers("id", vec![100]),
//!                 Column::double_arrays("features", vec![vec![1.0, 1.0]]),
//!             ],
//!         )
//!         .unwrap(),
//!     )
//!     .unwrap();
//!
//! let params = KnnParams::new("training", "queries", "predictions").with_label_column("label");
//! let summary = predict(&mut store, &params).unwrap();
//! assert_eq!(summary.n_queries(), 1);
//! ```
//!
//! # Architecture
//!
//! ```text
//! predict()
//!   ├─ validate_run()       (validate.rs — fail-fast preconditions)
//!   ├─ select_neighbors()   (select.rs  — per-query top-k under (distance, id))
//!   ├─ classify_*/regress_* (aggregate.rs)
//!   └─ assemble + insert    (predict.rs — atomic output relation)
//! ```
//!
//! Ranking is deterministic: distance ties break by training id, weighted
//! vote ties by the documented score/category order. Selection and
//! aggregation per query point are independent, so parallelising across
//! queries would not change any output.

pub mod config;
pub mod error;
pub mod metric;
pub mod predict;
pub mod result;

pub(crate) mod aggregate;
pub(crate) mod select;
pub(crate) mod validate;

pub use config::KnnParams;
pub use error::{ConfigError, ExecutionError, PredictError, ValidationError};
pub use metric::{Metric, MetricFn};
pub use predict::predict;
pub use result::RunSummary;
pub use select::MAX_WEIGHT_ZERO_DIST;
