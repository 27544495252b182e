use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs the stderr subscriber. `RUST_LOG` wins over `verbose`, which
/// selects `debug`; otherwise [`DEFAULT_LOG_LEVEL`]. Safe to call twice.
pub fn init(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
    }
}
