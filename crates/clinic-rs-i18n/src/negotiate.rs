//! Language negotiation.
//!
//! Determines the effective language tag from an explicit request or from a
//! client-supplied `Accept-Language`-style preference header, validated
//! against availability. Every failure mode falls back to the configured
//! default tag; negotiation never fails and never panics on malformed input.

use crate::backends::TranslationBackend;

/// Negotiates the active language against a [`TranslationBackend`].
///
/// # Examples
///
/// ```
/// use clinic_rs_i18n::{I18nSettings, LanguageNegotiator, PoFileBackend};
///
/// let backend = PoFileBackend::new(I18nSettings::default());
/// let negotiator = LanguageNegotiator::new(&backend);
///
/// // No catalogs installed: everything resolves to the default tag.
/// assert_eq!(negotiator.resolve(Some("xx_XX"), None), "en");
/// assert_eq!(negotiator.resolve(None, Some("de-DE,de;q=0.9")), "en");
/// assert_eq!(negotiator.resolve(None, None), "en");
/// ```
pub struct LanguageNegotiator<'a> {
    backend: &'a dyn TranslationBackend,
}

impl<'a> LanguageNegotiator<'a> {
    /// Creates a negotiator validating against `backend`.
    pub const fn new(backend: &'a dyn TranslationBackend) -> Self {
        Self { backend }
    }

    /// Resolves the effective language tag.
    ///
    /// A non-empty `requested` tag wins when the backend knows it; otherwise
    /// the first entry of the preference header is canonicalized and checked.
    /// Unknown tags, unparseable headers, and an absent header all resolve to
    /// the default tag.
    pub fn resolve(&self, requested: Option<&str>, accept_language: Option<&str>) -> String {
        if let Some(tag) = requested.filter(|tag| !tag.is_empty()) {
            if self.backend.language_exists(tag) {
                return tag.to_string();
            }
            tracing::debug!(%tag, "requested language not installed, using default");
            return self.backend.default_language().to_string();
        }

        if let Some(candidate) = accept_language
            .and_then(|header| header.split(',').next())
            .and_then(canonical_tag)
        {
            if self.backend.language_exists(&candidate) {
                return candidate;
            }
            tracing::debug!(%candidate, "client language not installed, using default");
        }

        self.backend.default_language().to_string()
    }

    /// Resolves as [`resolve`](Self::resolve) and additionally exports the
    /// result through the process `LANG` environment variable, so that
    /// locale-sensitive collaborators pick it up. The export is best-effort;
    /// resolution is unaffected by it.
    pub fn resolve_and_export(
        &self,
        requested: Option<&str>,
        accept_language: Option<&str>,
    ) -> String {
        let tag = self.resolve(requested, accept_language);
        std::env::set_var("LANG", &tag);
        tag
    }
}

/// Canonicalizes one preference-header entry into `xx_YY` form.
///
/// A bare 2-letter code repeats itself with the region uppercased
/// (`"es"` → `"es_ES"`); a hyphenated tag lowercases its first segment and
/// uppercases its second (`"pt-br"` → `"pt_BR"`). Quality parameters
/// (`;q=...`) and surrounding whitespace are ignored. Returns `None` for
/// anything else.
pub fn canonical_tag(entry: &str) -> Option<String> {
    let tag = entry.split(';').next().unwrap_or_default().trim();

    if tag.len() == 2 && tag.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(format!(
            "{}_{}",
            tag.to_ascii_lowercase(),
            tag.to_ascii_uppercase()
        ));
    }

    let mut pieces = tag.split('-');
    let language = pieces.next().unwrap_or_default();
    let region = pieces.next().unwrap_or_default();
    if language.is_empty() || region.is_empty() {
        return None;
    }
    Some(format!(
        "{}_{}",
        language.to_ascii_lowercase(),
        region.to_ascii_uppercase()
    ))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::backends::PoFileBackend;
    use crate::settings::I18nSettings;

    use super::*;

    fn backend_with(root: &TempDir, tags: &[&str]) -> PoFileBackend {
        for tag in tags {
            fs::write(root.path().join(format!("{tag}-clinic.po")), "").unwrap();
        }
        PoFileBackend::new(I18nSettings {
            locale_dir: root.path().to_path_buf(),
            ..I18nSettings::default()
        })
    }

    #[test]
    fn test_explicit_known_tag() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &["es_ES"]);
        let negotiator = LanguageNegotiator::new(&backend);
        assert_eq!(negotiator.resolve(Some("es_ES"), None), "es_ES");
    }

    #[test]
    fn test_explicit_unknown_tag_falls_back() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &[]);
        let negotiator = LanguageNegotiator::new(&backend);
        assert_eq!(negotiator.resolve(Some("zz_ZZ"), None), "en");
    }

    #[test]
    fn test_explicit_tag_wins_over_header() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &["es_ES", "fr_FR"]);
        let negotiator = LanguageNegotiator::new(&backend);
        assert_eq!(
            negotiator.resolve(Some("es_ES"), Some("fr-FR")),
            "es_ES"
        );
    }

    #[test]
    fn test_empty_requested_uses_header() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &["fr_FR"]);
        let negotiator = LanguageNegotiator::new(&backend);
        assert_eq!(negotiator.resolve(Some(""), Some("fr-FR")), "fr_FR");
    }

    #[test]
    fn test_header_bare_code() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &["es_ES"]);
        let negotiator = LanguageNegotiator::new(&backend);
        assert_eq!(negotiator.resolve(None, Some("es")), "es_ES");
    }

    #[test]
    fn test_header_first_entry_only() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &["fr_FR", "es_ES"]);
        let negotiator = LanguageNegotiator::new(&backend);
        // es_ES is installed too, but only the first entry is honored.
        assert_eq!(
            negotiator.resolve(None, Some("fr-FR,es-ES;q=0.8")),
            "fr_FR"
        );
    }

    #[test]
    fn test_header_quality_parameter_stripped() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &["de_DE"]);
        let negotiator = LanguageNegotiator::new(&backend);
        assert_eq!(
            negotiator.resolve(None, Some("de;q=0.9,en;q=0.8")),
            "de_DE"
        );
    }

    #[test]
    fn test_header_unknown_language_falls_back() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &[]);
        let negotiator = LanguageNegotiator::new(&backend);
        assert_eq!(negotiator.resolve(None, Some("ja-JP,ja;q=0.9")), "en");
    }

    #[test]
    fn test_malformed_header_falls_back() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &["es_ES"]);
        let negotiator = LanguageNegotiator::new(&backend);
        assert_eq!(negotiator.resolve(None, Some("gibberish")), "en");
        assert_eq!(negotiator.resolve(None, Some("x")), "en");
        assert_eq!(negotiator.resolve(None, Some("-")), "en");
        assert_eq!(negotiator.resolve(None, Some("")), "en");
    }

    #[test]
    fn test_no_header_falls_back() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &["es_ES"]);
        let negotiator = LanguageNegotiator::new(&backend);
        assert_eq!(negotiator.resolve(None, None), "en");
    }

    #[test]
    fn test_resolve_and_export_sets_lang() {
        let root = TempDir::new().unwrap();
        let backend = backend_with(&root, &["pt_BR"]);
        let negotiator = LanguageNegotiator::new(&backend);
        let tag = negotiator.resolve_and_export(Some("pt_BR"), None);
        assert_eq!(tag, "pt_BR");
        assert_eq!(std::env::var("LANG").unwrap(), "pt_BR");
    }

    #[test]
    fn test_canonical_tag_forms() {
        assert_eq!(canonical_tag("es"), Some("es_ES".to_string()));
        assert_eq!(canonical_tag("EN"), Some("en_EN".to_string()));
        assert_eq!(canonical_tag("pt-br"), Some("pt_BR".to_string()));
        assert_eq!(canonical_tag("zh-Hant-TW"), Some("zh_HANT".to_string()));
        assert_eq!(canonical_tag(" fr-FR ;q=0.7"), Some("fr_FR".to_string()));
        assert_eq!(canonical_tag("deu"), None);
        assert_eq!(canonical_tag("e1"), None);
        assert_eq!(canonical_tag("-DE"), None);
        assert_eq!(canonical_tag("de-"), None);
        assert_eq!(canonical_tag(""), None);
    }
}
