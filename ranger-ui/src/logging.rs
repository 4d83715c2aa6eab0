//! Tracing setup for binaries and demos built on ranger.

/// Default directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "error,ranger_ui=info,ranger_components=info";

/// Installs a global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVES`]. Calling this more than once is harmless; only the
/// first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_DIRECTIVES);
}

/// Like [`init_tracing`], with caller-provided fallback directives.
pub fn init_tracing_with(fallback: &str) {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
