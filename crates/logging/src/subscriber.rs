//! crates/logging/src/subscriber.rs
//! Subscriber installation for binaries.
//!
//! Library crates only emit events; the `file-list` binary calls one of the
//! helpers below exactly once during start-up.

use std::env;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::Verbosity;

/// Environment variable consulted before falling back to [`Verbosity`].
pub const ENV_FILTER_VAR: &str = "FILE_LIST_LOG";

/// Builds the [`EnvFilter`] for a run.
///
/// A non-empty, parseable [`ENV_FILTER_VAR`] wins; otherwise the verbosity's
/// directive is used.
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    match env::var(ENV_FILTER_VAR) {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(value)
            .unwrap_or_else(|_| EnvFilter::new(verbosity.directive())),
        _ => EnvFilter::new(verbosity.directive()),
    }
}

/// Installs a formatting subscriber on standard error.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{Verbosity, init_tracing};
///
/// init_tracing(Verbosity::from_verbose_level(1))?;
/// tracing::info!(target: "file_list::list", "ready");
/// ```
pub fn init_tracing(verbosity: Verbosity) -> Result<(), TryInitError> {
    init_tracing_with_filter(env_filter(verbosity))
}

/// Installs a formatting subscriber combined with a caller-supplied filter.
///
/// Returns an error when a global subscriber is already installed, which
/// happens when tests in the same process initialise logging twice.
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry().with(filter).with(fmt).try_init()
}
