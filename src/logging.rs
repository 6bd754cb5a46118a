//! Logging initialisation.

use crate::settings::LoggingSettings;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `settings.filter`. An unparsable
/// configured filter falls back to `info`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(settings: &LoggingSettings) -> bool {
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&settings.filter))
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer())
		.with(filter)
		.try_init()
		.is_ok()
}
