//! The translation registry: active language plus active catalog.
//!
//! The registry is an explicit value owned by the caller, typically scoped to
//! one request. The hosting application builds one per negotiation cycle (or
//! keeps one behind a read-mostly lock if it prefers sharing); nothing in
//! this crate holds process-global mutable state.

use crate::backends::TranslationBackend;
use crate::catalog::Catalog;
use crate::negotiate::LanguageNegotiator;

/// The active language and its translation mapping.
///
/// Lookups never fail: a phrase with no (or an empty) translation is returned
/// verbatim, so degraded modes surface as untranslated UI text rather than
/// errors.
///
/// # Examples
///
/// ```
/// use clinic_rs_i18n::{Catalog, TranslationRegistry};
///
/// let catalog = Catalog::parse("msgid \"Patient\"\nmsgstr \"Paciente\"\n");
/// let mut registry = TranslationRegistry::new("en");
/// registry.replace("es_ES", catalog);
///
/// assert_eq!(registry.language(), "es_ES");
/// assert_eq!(registry.translate("Patient"), "Paciente");
/// assert_eq!(registry.translate("Doctor"), "Doctor");
/// ```
#[derive(Debug, Clone)]
pub struct TranslationRegistry {
    language: String,
    catalog: Catalog,
}

impl TranslationRegistry {
    /// Creates a registry for `language` with the empty catalog, so every
    /// lookup starts out as identity.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            catalog: Catalog::default(),
        }
    }

    /// Runs one full negotiation cycle and returns the resulting registry:
    /// resolve a tag from `requested` or the preference header, then load and
    /// activate its catalog.
    pub fn for_request(
        backend: &dyn TranslationBackend,
        requested: Option<&str>,
        accept_language: Option<&str>,
    ) -> Self {
        let tag = LanguageNegotiator::new(backend).resolve(requested, accept_language);
        let mut registry = Self::new(tag.clone());
        registry.activate(backend, &tag);
        registry
    }

    /// Activates `tag`: loads its catalog from `backend` and replaces the
    /// active mapping wholesale.
    ///
    /// A tag with no usable catalog activates the empty catalog, turning
    /// [`translate`](Self::translate) into a pure identity function. This is
    /// the designed no-translation degraded mode, not an error.
    pub fn activate(&mut self, backend: &dyn TranslationBackend, tag: &str) {
        self.language = tag.to_string();
        self.catalog = backend.load_catalog(tag);
    }

    /// Replaces the active language and catalog directly.
    pub fn replace(&mut self, language: impl Into<String>, catalog: Catalog) {
        self.language = language.into();
        self.catalog = catalog;
    }

    /// The active language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The active catalog.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Translates `msgid` using the active catalog.
    ///
    /// Returns the mapped value when it is present and non-empty; otherwise
    /// returns `msgid` verbatim. Never fails.
    pub fn translate(&self, msgid: &str) -> String {
        match self.catalog.get(msgid) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => msgid.to_string(),
        }
    }
}
