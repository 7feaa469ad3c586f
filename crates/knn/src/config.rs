//! Run parameters for a prediction.

use crate::error::ConfigError;
use crate::metric::Metric;

/// Parameters of one prediction run.
///
/// Names the training and query tables and their columns, the output table,
/// and the algorithm knobs. Use the builder methods to customise.
///
/// # Example
///
/// ```
/// use pythia_knn::{KnnParams, Metric};
///
/// let params = KnnParams::new("training", "queries", "predictions")
///     .with_label_column("label")
///     .with_k(3)
///     .with_metric(Metric::Euclidean)
///     .with_weighted(true);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct KnnParams {
    /// Training table name.
    point_source: String,
    /// Feature column in the training table.
    point_column: String,
    /// Id column in the training table.
    point_id: String,
    /// Label column in the training table; `None` disables prediction output.
    label_column: Option<String>,
    /// Query table name.
    test_source: String,
    /// Feature column in the query table.
    test_column: String,
    /// Id column in the query table.
    test_id: String,
    /// Name of the output table to create.
    output_table: String,
    /// Number of neighbours to consider.
    k: usize,
    /// Whether to emit the per-query neighbour id list.
    output_neighbors: bool,
    /// Distance metric.
    metric: Metric,
    /// Whether votes/averages are weighted by inverse distance.
    weighted: bool,
}

impl KnnParams {
    /// Creates parameters for the given training, query and output tables.
    ///
    /// Defaults: feature columns `"features"`, id columns `"id"`, no label
    /// column, `k = 1`, neighbour output on, squared-Euclidean metric,
    /// unweighted.
    pub fn new(
        point_source: impl Into<String>,
        test_source: impl Into<String>,
        output_table: impl Into<String>,
    ) -> Self {
        Self {
            point_source: point_source.into(),
            point_column: "features".to_string(),
            point_id: "id".to_string(),
            label_column: None,
            test_source: test_source.into(),
            test_column: "features".to_string(),
            test_id: "id".to_string(),
            output_table: output_table.into(),
            k: 1,
            output_neighbors: true,
            metric: Metric::default(),
            weighted: false,
        }
    }

    /// Sets the feature column of the training table.
    pub fn with_point_column(mut self, column: impl Into<String>) -> Self {
        self.point_column = column.into();
        self
    }

    /// Sets the id column of the training table.
    pub fn with_point_id(mut self, column: impl Into<String>) -> Self {
        self.point_id = column.into();
        self
    }

    /// Requests supervised prediction from the given label column.
    pub fn with_label_column(mut self, column: impl Into<String>) -> Self {
        self.label_column = Some(column.into());
        self
    }

    /// Sets the feature column of the query table.
    pub fn with_test_column(mut self, column: impl Into<String>) -> Self {
        self.test_column = column.into();
        self
    }

    /// Sets the id column of the query table.
    pub fn with_test_id(mut self, column: impl Into<String>) -> Self {
        self.test_id = column.into();
        self
    }

    /// Sets the number of neighbours.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Enables or disables the neighbour id list in the output.
    pub fn with_output_neighbors(mut self, output_neighbors: bool) -> Self {
        self.output_neighbors = output_neighbors;
        self
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Enables or disables inverse-distance weighting.
    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Training table name.
    pub fn point_source(&self) -> &str {
        &self.point_source
    }

    /// Feature column of the training table.
    pub fn point_column(&self) -> &str {
        &self.point_column
    }

    /// Id column of the training table.
    pub fn point_id(&self) -> &str {
        &self.point_id
    }

    /// Label column, if supervised prediction was requested.
    pub fn label_column(&self) -> Option<&str> {
        self.label_column.as_deref()
    }

    /// Query table name.
    pub fn test_source(&self) -> &str {
        &self.test_source
    }

    /// Feature column of the query table.
    pub fn test_column(&self) -> &str {
        &self.test_column
    }

    /// Id column of the query table.
    pub fn test_id(&self) -> &str {
        &self.test_id
    }

    /// Output table name.
    pub fn output_table(&self) -> &str {
        &self.output_table
    }

    /// Number of neighbours.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Whether the neighbour id list is emitted.
    pub fn output_neighbors(&self) -> bool {
        self.output_neighbors
    }

    /// The distance metric.
    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    /// Whether aggregation is inverse-distance weighted.
    pub fn weighted(&self) -> bool {
        self.weighted
    }

    /// Validates the parameter shape.
    ///
    /// Checks that no required name is empty, that at least one of label
    /// column and neighbour output is requested, and that a custom metric
    /// passes its probe. Data-dependent checks (table existence, k against
    /// the training row count, column types) belong to run validation, not
    /// here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required: [(&'static str, &str); 7] = [
            ("point_source", &self.point_source),
            ("point_column", &self.point_column),
            ("point_id", &self.point_id),
            ("test_source", &self.test_source),
            ("test_column", &self.test_column),
            ("test_id", &self.test_id),
            ("output_table", &self.output_table),
        ];
        for (param, value) in required {
            if value.is_empty() {
                return Err(ConfigError::EmptyParameter { param });
            }
        }
        if let Some(label) = &self.label_column
            && label.is_empty()
        {
            return Err(ConfigError::EmptyParameter {
                param: "label_column",
            });
        }
        if self.label_column.is_none() && !self.output_neighbors {
            return Err(ConfigError::NoOutputRequested);
        }
        self.metric.validate()
    }
}
