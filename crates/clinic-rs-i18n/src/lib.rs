//! # clinic-rs-i18n
//!
//! Localization support for the clinic-rs application: language negotiation,
//! translation catalogs, and locale-aware date formatting.
//!
//! ## Modules
//!
//! - [`settings`] - Configuration constants and loaders
//! - [`catalog`] - `.po` catalog location and parsing
//! - [`backends`] - Catalog-backed and native-runtime translation backends
//! - [`registry`] - The active language/catalog pair and phrase lookup
//! - [`negotiate`] - Language negotiation from explicit or client-hinted input
//! - [`dates`] - Locale-aware date formatting
//! - [`languages`] - Installed-language enumeration
//! - [`error`] - Error types and result alias
//! - [`logging`] - Tracing-based logging integration
//!
//! ## Quick Start
//!
//! ```
//! use clinic_rs_i18n::{Catalog, LocaleDateFormatter, TranslationRegistry};
//!
//! let catalog = Catalog::parse(concat!(
//!     "msgid \"Patient\"\n",
//!     "msgstr \"Paciente\"\n",
//! ));
//!
//! let mut registry = TranslationRegistry::new("en");
//! registry.replace("es_ES", catalog);
//! assert_eq!(registry.translate("Patient"), "Paciente");
//!
//! // Phrases with no translation come back unchanged.
//! assert_eq!(registry.translate("Doctor"), "Doctor");
//!
//! // Date patterns resolve through the same lookup.
//! let dates = LocaleDateFormatter::new(&registry);
//! assert_eq!(dates.format_local_date("20240131"), "2024-01-31");
//! ```
//!
//! The typical request cycle goes through a backend instead of a hand-built
//! catalog: [`TranslationRegistry::for_request`] negotiates a tag from the
//! request (or the client's `Accept-Language` preference), locates and parses
//! its catalog, and returns a ready registry. A language without a catalog
//! degrades to identity translations; nothing in the cycle fails.

pub mod backends;
pub mod catalog;
pub mod dates;
pub mod error;
pub mod languages;
pub mod logging;
pub mod negotiate;
pub mod registry;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use backends::{GettextBackend, PoFileBackend, TranslationBackend};
pub use catalog::{locate_catalog, Catalog};
pub use dates::LocaleDateFormatter;
pub use error::{I18nError, I18nResult};
pub use languages::installed_languages;
pub use negotiate::LanguageNegotiator;
pub use registry::TranslationRegistry;
pub use settings::I18nSettings;
