use rustc_hash::FxHashMap;
use serde_yaml::{Mapping, Value};

use crate::error::LoadError;
use crate::locale::normalize_locale;

/// Locale used when the document does not name one.
pub const DEFAULT_LOCALE: &str = "en";

const TRANSLATIONS_KEY: &str = "translations";
const DEFAULT_LOCALE_KEY: &str = "defaultLocale";
const PREFIX_KEY: &str = "prefix";

type LocaleLines = FxHashMap<String, Vec<String>>;

/// The loaded key -> locale -> lines mapping, plus the default locale and
/// prefix configured next to it.
///
/// Locale tags are stored normalized. A table is never mutated once it has
/// been handed to a store; reloading builds a fresh one.
///
/// Document shape:
/// ```yaml
/// defaultLocale: en
/// prefix: "<gray>[Server]"
/// translations:
///   welcome:
///     en_US: ["Hi {name}!"]
///   commands:
///     help:
///       en: "<yellow>/help"
/// ```
/// Nested sections form dotted keys (`commands.help`). A locale entry may be
/// a list of lines or a single string.
#[derive(Clone, Debug)]
pub struct TranslationTable {
    translations: FxHashMap<String, LocaleLines>,
    default_locale: String,
    prefix: String,
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationTable {
    pub fn new() -> Self {
        Self {
            translations: FxHashMap::default(),
            default_locale: DEFAULT_LOCALE.to_string(),
            prefix: String::new(),
        }
    }

    pub fn with_default_locale(mut self, locale: &str) -> Self {
        self.default_locale = normalize_locale(locale);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Insert (or replace) the lines for `key` under `locale`.
    ///
    /// Used to assemble tables in code; the locale is normalized like a
    /// parsed one.
    pub fn insert<I, S>(&mut self, key: impl Into<String>, locale: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.translations
            .entry(key.into())
            .or_default()
            .insert(
                normalize_locale(locale),
                lines.into_iter().map(Into::into).collect(),
            );
    }

    /// Parse a YAML translation document.
    pub fn parse(src: &str) -> Result<Self, LoadError> {
        if src.trim().is_empty() {
            return Ok(Self::new());
        }

        let doc: Value =
            serde_yaml::from_str(src).map_err(|e| LoadError::Yaml(e.to_string()))?;

        let root = match doc {
            Value::Mapping(m) => m,
            // An empty document is a valid, empty table.
            Value::Null => Mapping::new(),
            _ => {
                return Err(LoadError::structure(
                    "<root>",
                    "expected a mapping at the top level",
                ))
            }
        };

        let mut table = Self::new();

        if let Some(v) = root.get(DEFAULT_LOCALE_KEY) {
            let Some(locale) = v.as_str() else {
                return Err(LoadError::structure(DEFAULT_LOCALE_KEY, "must be a string"));
            };
            table.default_locale = normalize_locale(locale);
        }

        if let Some(v) = root.get(PREFIX_KEY) {
            match v {
                Value::String(s) => table.prefix = s.clone(),
                Value::Null => {}
                _ => return Err(LoadError::structure(PREFIX_KEY, "must be a string")),
            }
        }

        match root.get(TRANSLATIONS_KEY) {
            None | Some(Value::Null) => {}
            Some(Value::Mapping(section)) => table.collect_section("", section)?,
            Some(_) => {
                return Err(LoadError::structure(
                    TRANSLATIONS_KEY,
                    "expected a mapping of message keys",
                ))
            }
        }

        Ok(table)
    }

    fn collect_section(&mut self, path: &str, section: &Mapping) -> Result<(), LoadError> {
        for (k, v) in section {
            let Some(name) = k.as_str() else {
                return Err(LoadError::structure(
                    display_path(path),
                    "mapping keys must be strings",
                ));
            };

            match v {
                Value::Mapping(child) => {
                    let child_path = if path.is_empty() {
                        name.to_string()
                    } else {
                        format!("{path}.{name}")
                    };
                    self.collect_section(&child_path, child)?;
                }
                Value::Sequence(items) => {
                    let lines = lines_from_sequence(path, name, items)?;
                    self.insert_entry(path, name, lines)?;
                }
                Value::String(s) => self.insert_entry(path, name, vec![s.clone()])?,
                _ => {
                    return Err(LoadError::structure(
                        format!("{}.{name}", display_path(path)),
                        "expected a list of lines, a single line, or a nested section",
                    ))
                }
            }
        }
        Ok(())
    }

    fn insert_entry(&mut self, key: &str, locale: &str, lines: Vec<String>) -> Result<(), LoadError> {
        if key.is_empty() {
            return Err(LoadError::structure(
                format!("{TRANSLATIONS_KEY}.{locale}"),
                "locale entries must sit under a message key",
            ));
        }

        let tag = normalize_locale(locale);
        let per_key = self.translations.entry(key.to_string()).or_default();
        if per_key.contains_key(&tag) {
            return Err(LoadError::structure(
                format!("{TRANSLATIONS_KEY}.{key}.{locale}"),
                format!("duplicate locale `{tag}`"),
            ));
        }
        per_key.insert(tag, lines);
        Ok(())
    }

    /// Lines stored for `key` under an already normalized `locale`.
    pub fn lines(&self, key: &str, locale: &str) -> Option<&[String]> {
        self.translations
            .get(key)
            .and_then(|per_key| per_key.get(locale))
            .map(Vec::as_slice)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    /// All message keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Locales that carry an entry for `key`, sorted.
    pub fn locales_for(&self, key: &str) -> Vec<&str> {
        let mut locales: Vec<&str> = self
            .translations
            .get(key)
            .map(|per_key| per_key.keys().map(String::as_str).collect())
            .unwrap_or_default();
        locales.sort_unstable();
        locales
    }

    /// Distinct locales across the whole table, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self
            .translations
            .values()
            .flat_map(|per_key| per_key.keys().map(String::as_str))
            .collect();
        locales.sort_unstable();
        locales.dedup();
        locales
    }

    /// Number of message keys.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        TRANSLATIONS_KEY.to_string()
    } else {
        format!("{TRANSLATIONS_KEY}.{path}")
    }
}

fn lines_from_sequence(key: &str, locale: &str, items: &[Value]) -> Result<Vec<String>, LoadError> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                LoadError::structure(
                    format!("{}.{locale}[{idx}]", display_path(key)),
                    "lines must be strings",
                )
            })
        })
        .collect()
}
