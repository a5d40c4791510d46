//! Logging integration.
//!
//! Provides a helper for configuring [`tracing`]-based logging from
//! [`I18nSettings`](crate::settings::I18nSettings). The crate itself only
//! emits events through `tracing`; installing a subscriber is up to the
//! hosting application, and this helper covers the common case.

use crate::settings::I18nSettings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level`. In debug mode a pretty,
/// human-readable format is used; in production a structured JSON format is
/// used. Calling this when a subscriber is already installed is a no-op.
pub fn setup_logging(settings: &I18nSettings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}
