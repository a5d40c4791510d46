//! Error types for the localization crate.
//!
//! Almost every operation in this crate degrades to a safe default instead of
//! failing: unknown languages fall back to the configured default, missing
//! catalogs activate identity translations, and unrecognized date inputs pass
//! through unchanged. The only operations that surface errors are the
//! installed-language directory scan (an unreadable catalog root indicates
//! misconfiguration, not a missing catalog) and settings loading.

use thiserror::Error;

/// The error type for the clinic-rs localization crate.
#[derive(Error, Debug)]
pub enum I18nError {
    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An I/O error occurred while scanning the catalog root.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, I18nError>`.
pub type I18nResult<T> = Result<T, I18nError>;
