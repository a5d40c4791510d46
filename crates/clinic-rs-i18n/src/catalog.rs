//! Translation catalogs: locating and parsing `.po` files.
//!
//! A catalog file is an ordered list of `msgid "<source>"` / `msgstr
//! "<translated>"` line pairs, one pair per entry, each value enclosed in
//! double quotes on its own line. Catalogs may be organized flat
//! (`<root>/<tag>-<domain>.po`) or per-language-directory
//! (`<root>/<tag>/<domain>.po` or `<root>/<tag>/<tag>-<domain>.po`);
//! [`locate_catalog`] tries all three conventions in order.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::settings::I18nSettings;

/// A parsed translation catalog for a single language: a mapping from source
/// phrase to translated phrase.
///
/// Later duplicate keys overwrite earlier ones. The default catalog is empty,
/// which makes every lookup fall back to the source phrase.
///
/// # Examples
///
/// ```
/// use clinic_rs_i18n::Catalog;
///
/// let catalog = Catalog::parse(concat!(
///     "msgid \"Patient\"\n",
///     "msgstr \"Paciente\"\n",
/// ));
/// assert_eq!(catalog.get("Patient"), Some("Paciente"));
/// assert_eq!(catalog.get("Doctor"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parses catalog text into a `Catalog`.
    ///
    /// The scan is line-oriented: every line containing the case-insensitive
    /// token `msgid` contributes the text between its first and last double
    /// quote as a key, and the immediately following line contributes its
    /// quoted payload as the value (empty when there is no next line). The
    /// `.po` header entry (`msgid ""`) is stored like any other pair.
    /// Behavior on catalogs that do not follow the two-line-pair convention
    /// is unspecified; well-formed pairs always extract exactly.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let mut entries = HashMap::new();

        for (index, line) in lines.iter().enumerate() {
            if !line.to_ascii_lowercase().contains("msgid") {
                continue;
            }
            let key = quoted_payload(line);
            let value = lines
                .get(index + 1)
                .map_or_else(String::new, |next| quoted_payload(next));
            entries.insert(key, value);
        }

        Self { entries }
    }

    /// Reads and parses the catalog file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&std::fs::read_to_string(path)?))
    }

    /// Looks up the translated phrase for `msgid`.
    pub fn get(&self, msgid: &str) -> Option<&str> {
        self.entries.get(msgid).map(String::as_str)
    }

    /// Returns the number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(source, translated)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Extracts the text between the first and last double quote on a line.
/// Lines without a quoted payload yield the empty string.
fn quoted_payload(line: &str) -> String {
    match (line.find('"'), line.rfind('"')) {
        (Some(start), Some(end)) if end > start => line[start + 1..end].to_string(),
        _ => String::new(),
    }
}

/// Finds the catalog file for `tag`, trying the three supported path
/// conventions rooted at `settings.locale_dir`, in order:
///
/// 1. `<root>/<tag>-<domain>.po`
/// 2. `<root>/<tag>/<domain>.po`
/// 3. `<root>/<tag>/<tag>-<domain>.po`
///
/// Returns the first path that exists, or `None` when no convention matches.
pub fn locate_catalog(settings: &I18nSettings, tag: &str) -> Option<PathBuf> {
    let root = &settings.locale_dir;
    let domain = &settings.domain;

    let candidates = [
        root.join(format!("{tag}-{domain}.po")),
        root.join(tag).join(format!("{domain}.po")),
        root.join(tag).join(format!("{tag}-{domain}.po")),
    ];

    candidates.into_iter().find(|path| path.is_file())
}
