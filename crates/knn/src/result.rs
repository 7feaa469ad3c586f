//! Output summary of a prediction run.

/// Summary of one completed prediction run.
///
/// The predictions themselves land in the output relation; this carries
/// the shape of what was produced, for callers and logs.
#[derive(Debug, Clone)]
pub struct RunSummary {
    output_table: String,
    n_queries: usize,
    n_training: usize,
    k: usize,
}

impl RunSummary {
    pub(crate) fn new(output_table: String, n_queries: usize, n_training: usize, k: usize) -> Self {
        Self {
            output_table,
            n_queries,
            n_training,
            k,
        }
    }

    /// Name of the output relation that was created.
    pub fn output_table(&self) -> &str {
        &self.output_table
    }

    /// Number of query points predicted (one output row each).
    pub fn n_queries(&self) -> usize {
        self.n_queries
    }

    /// Number of training points scanned per query.
    pub fn n_training(&self) -> usize {
        self.n_training
    }

    /// Number of neighbours used per query.
    pub fn k(&self) -> usize {
        self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let summary = RunSummary::new("out".to_string(), 3, 10, 2);
        assert_eq!(summary.output_table(), "out");
        assert_eq!(summary.n_queries(), 3);
        assert_eq!(summary.n_training(), 10);
        assert_eq!(summary.k(), 2);
    }
}
