//! Translation backends.
//!
//! A [`TranslationBackend`] answers two questions: does a language exist, and
//! what catalog should be active for it. Two implementations exist and the
//! hosting application selects one at startup, never mid-process:
//!
//! - [`PoFileBackend`] parses `.po` catalogs itself. This is the default
//!   mode and the only one in which this crate serves translated strings.
//! - [`GettextBackend`] is for deployments where a native gettext runtime
//!   serves lookups directly. There a language exists when its compiled
//!   `.mo` artifact is present on disk; the artifact's contents are opaque
//!   to this crate and `load_catalog` yields the empty catalog.

use std::path::PathBuf;

use crate::catalog::{locate_catalog, Catalog};
use crate::settings::I18nSettings;

/// Strategy interface for language availability and catalog loading.
///
/// The default language always exists for both implementations.
pub trait TranslationBackend {
    /// The configured default language tag.
    fn default_language(&self) -> &str;

    /// Returns `true` if a usable catalog source can be found for `tag`.
    fn language_exists(&self, tag: &str) -> bool;

    /// Loads the catalog for `tag`.
    ///
    /// This never fails: a tag with no usable catalog yields the empty
    /// catalog, which makes every lookup fall back to the source phrase.
    fn load_catalog(&self, tag: &str) -> Catalog;
}

/// Backend that locates and parses `.po` catalog files.
#[derive(Debug, Clone)]
pub struct PoFileBackend {
    settings: I18nSettings,
}

impl PoFileBackend {
    /// Creates a backend rooted at `settings.locale_dir`.
    pub const fn new(settings: I18nSettings) -> Self {
        Self { settings }
    }

    /// The settings this backend was built with.
    pub const fn settings(&self) -> &I18nSettings {
        &self.settings
    }
}

impl TranslationBackend for PoFileBackend {
    fn default_language(&self) -> &str {
        &self.settings.default_language
    }

    fn language_exists(&self, tag: &str) -> bool {
        tag == self.settings.default_language || locate_catalog(&self.settings, tag).is_some()
    }

    fn load_catalog(&self, tag: &str) -> Catalog {
        let Some(path) = locate_catalog(&self.settings, tag) else {
            tracing::debug!(%tag, "no catalog file found, activating identity translations");
            return Catalog::default();
        };
        match Catalog::from_file(&path) {
            Ok(catalog) => {
                tracing::debug!(
                    %tag,
                    path = %path.display(),
                    entries = catalog.len(),
                    "loaded translation catalog"
                );
                catalog
            }
            Err(err) => {
                tracing::warn!(
                    %tag,
                    path = %path.display(),
                    %err,
                    "failed to read catalog, activating identity translations"
                );
                Catalog::default()
            }
        }
    }
}

/// Backend for deployments with a native gettext runtime.
///
/// Availability is gated on the compiled catalog artifact at
/// `<root>/<tag>/LC_MESSAGES/<tag>-<domain>.mo`. Lookups bypass this crate
/// entirely in this mode, so [`load_catalog`](TranslationBackend::load_catalog)
/// always yields the empty catalog.
#[derive(Debug, Clone)]
pub struct GettextBackend {
    settings: I18nSettings,
}

impl GettextBackend {
    /// Creates a backend rooted at `settings.locale_dir`.
    pub const fn new(settings: I18nSettings) -> Self {
        Self { settings }
    }

    fn compiled_catalog_path(&self, tag: &str) -> PathBuf {
        self.settings
            .locale_dir
            .join(tag)
            .join("LC_MESSAGES")
            .join(format!("{tag}-{}.mo", self.settings.domain))
    }
}

impl TranslationBackend for GettextBackend {
    fn default_language(&self) -> &str {
        &self.settings.default_language
    }

    fn language_exists(&self, tag: &str) -> bool {
        tag == self.settings.default_language || self.compiled_catalog_path(tag).is_file()
    }

    fn load_catalog(&self, tag: &str) -> Catalog {
        tracing::debug!(%tag, "native runtime serves lookups, no catalog parsed");
        Catalog::default()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn settings_at(root: &TempDir) -> I18nSettings {
        I18nSettings {
            locale_dir: root.path().to_path_buf(),
            ..I18nSettings::default()
        }
    }

    #[test]
    fn test_default_language_always_exists() {
        let root = TempDir::new().unwrap();
        let settings = settings_at(&root);

        let po = PoFileBackend::new(settings.clone());
        assert!(po.language_exists("en"));

        let gettext = GettextBackend::new(settings);
        assert!(gettext.language_exists("en"));
    }

    #[test]
    fn test_po_backend_existence_follows_locator() {
        let root = TempDir::new().unwrap();
        let settings = settings_at(&root);
        fs::write(root.path().join("es_ES-clinic.po"), "").unwrap();

        let backend = PoFileBackend::new(settings);
        assert!(backend.language_exists("es_ES"));
        assert!(!backend.language_exists("fr_FR"));
    }

    #[test]
    fn test_po_backend_loads_catalog() {
        let root = TempDir::new().unwrap();
        let settings = settings_at(&root);
        fs::write(
            root.path().join("es_ES-clinic.po"),
            "msgid \"Patient\"\nmsgstr \"Paciente\"\n",
        )
        .unwrap();

        let backend = PoFileBackend::new(settings);
        let catalog = backend.load_catalog("es_ES");
        assert_eq!(catalog.get("Patient"), Some("Paciente"));
    }

    #[test]
    fn test_po_backend_missing_catalog_is_empty() {
        let root = TempDir::new().unwrap();
        let backend = PoFileBackend::new(settings_at(&root));
        assert!(backend.load_catalog("pt_BR").is_empty());
    }

    #[test]
    fn test_gettext_backend_checks_compiled_artifact() {
        let root = TempDir::new().unwrap();
        let settings = settings_at(&root);
        let messages_dir = root.path().join("fr_FR").join("LC_MESSAGES");
        fs::create_dir_all(&messages_dir).unwrap();
        fs::write(messages_dir.join("fr_FR-clinic.mo"), [0xde, 0x12]).unwrap();

        let backend = GettextBackend::new(settings);
        assert!(backend.language_exists("fr_FR"));
        assert!(!backend.language_exists("es_ES"));
        // Lookups are served by the native runtime, never from here.
        assert!(backend.load_catalog("fr_FR").is_empty());
    }
}
