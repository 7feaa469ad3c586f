use tracing_subscriber::EnvFilter;

/// Workspace crate targets wired into the default filter.
const CRATE_TARGETS: &[&str] = &["pythia", "pythia_knn", "pythia_store"];

/// Initialize tracing from the CLI verbosity count.
///
/// 0 -> warn, 1 (-v) -> info, 2 (-vv) -> debug, 3+ (-vvv) -> trace.
/// A set `RUST_LOG` env var takes precedence over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
