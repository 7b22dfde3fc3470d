use std::fmt;

use tracing::{debug, warn};

use crate::locale::normalize_locale;
use crate::table::TranslationTable;

/// Outcome of looking a key up for a locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The requested locale had a non-empty entry.
    Exact(&'a [String]),
    /// The requested locale had nothing; the table's default locale did.
    Default(&'a [String]),
    /// Neither locale had a non-empty entry.
    Missing,
}

impl<'a> Lookup<'a> {
    pub fn lines(&self) -> Option<&'a [String]> {
        match *self {
            Lookup::Exact(lines) | Lookup::Default(lines) => Some(lines),
            Lookup::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing)
    }
}

/// Fetch the raw lines for `key`, falling back to the table's default locale.
///
/// The requested locale wins whenever it has a non-empty entry. Tags are
/// matched exactly after normalization; `en-us` does not fall back to `en`.
pub fn resolve_lines<'a>(table: &'a TranslationTable, key: &str, locale: &str) -> Lookup<'a> {
    let locale = normalize_locale(locale);

    if let Some(lines) = non_empty(table.lines(key, &locale)) {
        return Lookup::Exact(lines);
    }

    let default_locale = table.default_locale();
    if let Some(lines) = non_empty(table.lines(key, default_locale)) {
        debug!(key, locale = %locale, default_locale, "falling back to default locale");
        return Lookup::Default(lines);
    }

    warn!(key, locale = %locale, default_locale, "no translation for key");
    Lookup::Missing
}

fn non_empty(lines: Option<&[String]>) -> Option<&[String]> {
    lines.filter(|lines| !lines.is_empty())
}

/// In-band notice shown in place of a message nobody translated.
///
/// Rendering is kept apart from lookup: callers match on [`Lookup::Missing`]
/// and format this value only when they need the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingMessage<'a> {
    pub key: &'a str,
}

impl fmt::Display for MissingMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<gray>No Message for key \"<yellow>{}<gray>\"!", self.key)
    }
}
