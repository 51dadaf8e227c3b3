use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "shakesearch=info,tower_http=info";

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the default filter. `verbose` raises this crate to
/// `debug`. Calling twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("shakesearch=debug,tower_http=debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return;
    }

    tracing::debug!("tracing initialized");
}
