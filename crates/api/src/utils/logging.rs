use pmrelay_domain::{LogFormat, RelayError};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` directives take precedence over [`DEFAULT_FILTER`]. Must be
/// called once per process.
///
/// # Errors
/// Returns `RelayError::Internal` if a global subscriber is already set.
pub fn init_tracing(format: LogFormat) -> Result<(), RelayError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = match format {
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|err| RelayError::Internal(format!("failed to initialise tracing: {err}")))
}
