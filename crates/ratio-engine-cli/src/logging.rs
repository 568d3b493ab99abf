use tracing_subscriber::EnvFilter;

/// Route tracing output to stderr so stdout stays machine-readable.
///
/// `RUST_LOG` overrides the `--log-level` flag when set.
pub fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
