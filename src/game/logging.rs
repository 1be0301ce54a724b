//! Logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Install a compact `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` overrides the default `info` filter, e.g.
/// `RUST_LOG=angry_vectors_engine=debug` to see rejected fire requests.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
