//! Observability for the plant catalog
//!
//! Structured logging through `tracing`:
//! - Every event carries an explicit, typed `event` name
//! - Operations are wrapped in an `ObservationScope`
//! - Binaries install the subscriber once via `init_logging`
//!
//! # Usage
//!
//! ```ignore
//! use plant_catalog::observability::{log_event, Event};
//!
//! log_event(Event::ConfigLoaded);
//! ```

mod events;
mod scope;

pub use events::Event;
pub use scope::ObservationScope;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "PLANTS_LOG";

/// Default filter directive when `PLANTS_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// Logs go to stderr so that stdout stays reserved for command output.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt)
        .try_init();
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_failure() {
        tracing::warn!(event = %event);
    } else {
        tracing::info!(event = %event);
    }
}
