use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Pythia configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PythiaConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Prediction settings.
    #[serde(default)]
    pub knn: KnnToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub training: Option<PathBuf>,
    pub queries: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    #[serde(default = "default_training_table")]
    pub training_table: String,
    #[serde(default = "default_query_table")]
    pub query_table: String,
    #[serde(default = "default_output_table")]
    pub output_table: String,
    #[serde(default = "default_feature_column")]
    pub training_column: String,
    #[serde(default = "default_feature_column")]
    pub query_column: String,
    #[serde(default = "default_id_column")]
    pub training_id: String,
    #[serde(default = "default_id_column")]
    pub query_id: String,
    #[serde(default)]
    pub label_column: Option<String>,
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_metric")]
    pub metric: String,
    #[serde(default)]
    pub weighted: bool,
    #[serde(default = "default_true")]
    pub output_neighbors: bool,
}

impl Default for KnnToml {
    fn default() -> Self {
        Self {
            training_table: default_training_table(),
            query_table: default_query_table(),
            output_table: default_output_table(),
            training_column: default_feature_column(),
            query_column: default_feature_column(),
            training_id: default_id_column(),
            query_id: default_id_column(),
            label_column: None,
            k: default_k(),
            metric: default_metric(),
            weighted: false,
            output_neighbors: true,
        }
    }
}

fn default_training_table() -> String {
    "training".to_string()
}
fn default_query_table() -> String {
    "queries".to_string()
}
fn default_output_table() -> String {
    "predictions".to_string()
}
fn default_feature_column() -> String {
    "features".to_string()
}
fn default_id_column() -> String {
    "id".to_string()
}
fn default_k() -> usize {
    1
}
fn default_metric() -> String {
    "squared_euclidean".to_string()
}
fn default_true() -> bool {
    true
}
