//! Installed-language enumeration.
//!
//! Lists the languages installed under the catalog root by scanning for
//! subdirectories, paired with human-readable display names from an
//! externally supplied name table.

use std::collections::{BTreeMap, HashMap};
use std::fs;

use crate::error::I18nResult;
use crate::settings::I18nSettings;

/// Directory names that never denote a language.
const IGNORED_DIRS: &[&str] = &["CVS"];

/// Scans `settings.locale_dir` and returns the installed languages as a
/// `tag → display name` mapping.
///
/// Every subdirectory counts as a language except `CVS` and names starting
/// with a dot (version-control and hidden artifacts). The display name comes
/// from `display_names`; a discovered directory with no entry there maps to
/// `None`. When the root holds no qualifying subdirectories at all the result
/// is `Ok(None)` — "nothing to show" rather than an empty mapping.
///
/// # Errors
///
/// Returns an error when the catalog root cannot be read; that indicates
/// misconfiguration rather than a missing single catalog, and is the one
/// failure this subsystem propagates.
pub fn installed_languages(
    settings: &I18nSettings,
    display_names: &HashMap<String, String>,
) -> I18nResult<Option<BTreeMap<String, Option<String>>>> {
    let mut languages = BTreeMap::new();

    for entry in fs::read_dir(&settings.locale_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with('.') || IGNORED_DIRS.contains(&name) {
            continue;
        }
        languages.insert(name.to_string(), display_names.get(name).cloned());
    }

    Ok(if languages.is_empty() {
        None
    } else {
        Some(languages)
    })
}
