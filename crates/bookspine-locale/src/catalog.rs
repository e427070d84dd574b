//! Locale catalogs: key → template message tables.
//!
//! A catalog starts from a built-in table (`en`, `ja`) and can be adjusted
//! per key or layered under a TOML locale file, so a project can retranslate
//! a single label without redefining the whole locale.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{MessageArg, MessageLookup, format};

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Failed to read locale file at {locale_path}: {source}")]
    LocaleReadError {
        locale_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse locale file at {locale_path}: {source}")]
    LocaleParseError {
        locale_path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk shape of a locale file:
///
/// ```toml
/// locale = "en"
///
/// [messages]
/// chapter = "Chapter %d"
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    locale: String,
    #[serde(default)]
    messages: HashMap<String, String>,
}

const EN_MESSAGES: &[(&str, &str)] = &[
    ("chapter", "Chapter %d"),
    ("part", "Part %d"),
    ("appendix", "Appendix %pA"),
    ("chapter_postfix", ". "),
];

const JA_MESSAGES: &[(&str, &str)] = &[
    ("chapter", "第%d章"),
    ("part", "第%d部"),
    ("appendix", "付録%pA"),
    // chapter_postfix is U+3000 (ideographic space), not an empty string.
    ("chapter_postfix", "\u{3000}"),
];

/// A locale identifier plus its key → template message table.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog for a custom locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    /// The built-in table for `locale`, or `None` for locales without one.
    pub fn builtin(locale: &str) -> Option<Self> {
        let table = match locale {
            "en" => EN_MESSAGES,
            "ja" => JA_MESSAGES,
            _ => return None,
        };
        let mut catalog = Self::new(locale);
        for &(key, template) in table {
            catalog.set(key, template);
        }
        Some(catalog)
    }

    /// The locale identifier ("en", "ja", ...).
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Install or override a single message template.
    pub fn set(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    /// The raw template for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Resolve `key` and substitute `args` into its template.
    ///
    /// An unknown key resolves to the key itself; a missing translation must
    /// not abort a compilation run.
    pub fn message(&self, key: &str, args: &[MessageArg<'_>]) -> String {
        match self.get(key) {
            Some(template) => format::substitute(template, args),
            None => key.to_string(),
        }
    }

    /// Load a TOML locale file, layering its `[messages]` over the built-in
    /// table for that locale when one exists.
    pub fn load(locale_path: impl AsRef<Path>) -> Result<Self, LocaleError> {
        let locale_path = locale_path.as_ref();

        let content = std::fs::read_to_string(locale_path).map_err(|source| {
            LocaleError::LocaleReadError {
                locale_path: locale_path.to_path_buf(),
                source,
            }
        })?;

        let file: CatalogFile =
            toml::from_str(&content).map_err(|source| LocaleError::LocaleParseError {
                locale_path: locale_path.to_path_buf(),
                source,
            })?;

        let mut catalog = Self::builtin(&file.locale).unwrap_or_else(|| Self::new(&file.locale));
        for (key, template) in file.messages {
            catalog.set(key, template);
        }
        Ok(catalog)
    }
}

impl MessageLookup for Catalog {
    fn message(&self, key: &str, args: &[MessageArg<'_>]) -> String {
        Catalog::message(self, key, args)
    }
}
