use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT_TRACING: Once = Once::new();

/// Installs the global tracing subscriber. Later calls are no-ops.
///
/// Filtering follows `RUST_LOG` and falls back to `structuring_ledger=info`.
/// Output goes to stderr so stdout stays free for CSV.
pub fn init(json: bool) {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("structuring_ledger=info"));

        let builder = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);

        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
