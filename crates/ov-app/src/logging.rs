use tracing_subscriber::EnvFilter;

/// Crates whose logs are shown by default
const CRATE_TARGETS: &[&str] = &["ov_core", "ov_data", "ov_views", "ov_ui", "ocean_explorer"];

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}=info"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
