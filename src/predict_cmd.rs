//! Predict command: load JSON tables, run the prediction, write the output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use pythia_knn::{KnnParams, Metric, predict};
use pythia_store::{Relation, TableStore, from_json, to_json};

use crate::cli::PredictArgs;
use crate::config::{KnnToml, PythiaConfig};

/// Run the prediction pipeline.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: PythiaConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Resolve paths, CLI overriding config
    let training_path = args
        .training
        .or(config.io.training)
        .ok_or_else(|| anyhow!("no training path: set [io].training in config or use --training"))?;
    let queries_path = args
        .queries
        .or(config.io.queries)
        .ok_or_else(|| anyhow!("no queries path: set [io].queries in config or use --queries"))?;
    let output_path = args.output.or(config.io.output).unwrap_or_else(|| {
        // Auto-derive: queries.json -> queries.predictions.json
        queries_path.with_extension("predictions.json")
    });

    // 3. Read both input tables into a fresh store
    let mut store = TableStore::new();
    let training = read_relation(&training_path, &config.knn.training_table)?;
    info!(
        table = config.knn.training_table,
        n_rows = training.n_rows(),
        "training data loaded"
    );
    store.insert_table(training)?;

    let queries = read_relation(&queries_path, &config.knn.query_table)?;
    info!(
        table = config.knn.query_table,
        n_rows = queries.n_rows(),
        "query data loaded"
    );
    store.insert_table(queries)?;

    // 4. Run the prediction
    let params = build_params(&config.knn)?;
    let summary = predict(&mut store, &params).context("prediction failed")?;
    info!(
        output_table = summary.output_table(),
        n_queries = summary.n_queries(),
        k = summary.k(),
        "prediction complete"
    );

    // 5. Write the output relation
    let output = store.read_table(summary.output_table())?;
    write_relation(output, &output_path)?;
    info!(path = %output_path.display(), "predictions written");

    Ok(())
}

fn build_params(knn: &KnnToml) -> Result<KnnParams> {
    let metric: Metric = knn
        .metric
        .parse()
        .with_context(|| format!("unusable [knn].metric '{}'", knn.metric))?;

    let mut params = KnnParams::new(&knn.training_table, &knn.query_table, &knn.output_table)
        .with_point_column(&knn.training_column)
        .with_point_id(&knn.training_id)
        .with_test_column(&knn.query_column)
        .with_test_id(&knn.query_id)
        .with_k(knn.k)
        .with_metric(metric)
        .with_weighted(knn.weighted)
        .with_output_neighbors(knn.output_neighbors);
    if let Some(label) = &knn.label_column {
        params = params.with_label_column(label);
    }
    Ok(params)
}

/// Reads a relation from JSON, renaming it to the configured table name if
/// the document carries a different one.
fn read_relation(path: &Path, table_name: &str) -> Result<Relation> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read table file: {}", path.display()))?;
    let relation =
        from_json(&json).with_context(|| format!("failed to parse table: {}", path.display()))?;
    if relation.name() == table_name {
        return Ok(relation);
    }
    Relation::new(table_name, relation.into_columns())
        .with_context(|| format!("failed to rename table from {}", path.display()))
}

fn write_relation(relation: &Relation, path: &PathBuf) -> Result<()> {
    let json = to_json(relation).context("failed to serialise output relation")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write predictions: {}", path.display()))?;
    Ok(())
}
