use std::fmt;

use tracing::warn;

use crate::error::I18nError;
use crate::locale::{normalize_locale, LocaleSource};
use crate::placeholder::{apply_placeholders, Placeholders};
use crate::resolver::{resolve_lines, Lookup, MissingMessage};
use crate::store::TranslationStore;
use crate::table::TranslationTable;

/// A placeholder value.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Int(i) => write!(f, "{i}"),
            ArgValue::Float(v) => {
                let mut s = v.to_string();
                if s.contains('.') {
                    while s.ends_with('0') {
                        s.pop();
                    }
                    if s.ends_with('.') {
                        s.pop();
                    }
                }
                f.write_str(&s)
            }
            ArgValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&String> for ArgValue {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<char> for ArgValue {
    fn from(v: char) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u32> for ArgValue {
    fn from(v: u32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for ArgValue {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for ArgValue {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Formatting options for one resolution, assembled up front and passed
/// whole to [`MessageOptions::apply`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageOptions {
    /// Put a prefix in front of every line.
    pub prefixed: bool,
    /// Used instead of the table's prefix whenever set.
    pub custom_prefix: Option<String>,
    pub placeholders: Placeholders,
}

impl MessageOptions {
    /// Turn raw lines into the final text: join, prefix, substitute.
    pub fn apply(&self, table: &TranslationTable, lines: &[String]) -> String {
        let prefix = self
            .prefixed
            .then(|| self.custom_prefix.as_deref().unwrap_or(table.prefix()));

        let joined = match prefix.map(str::trim_end).filter(|p| !p.is_empty()) {
            Some(prefix) => {
                let prefixed = lines
                    .iter()
                    .map(|line| format!("{prefix} {line}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                prefixed.trim_end().to_string()
            }
            None => lines.join("\n"),
        };

        apply_placeholders(&joined, &self.placeholders)
    }
}

/// Where the lines of a [`ResolvedMessage`] came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageSource {
    /// The requested locale (normalized).
    Requested(String),
    /// The table's default locale.
    DefaultLocale(String),
    /// Nothing matched; the text is the missing-key notice.
    Missing,
}

/// A message key plus the options to render it for one locale.
///
/// ```
/// use lingo_i18n::{Message, TranslationTable};
///
/// let mut table = TranslationTable::new().with_prefix("[Srv]");
/// table.insert("welcome", "en_US", ["Hi {name}!"]);
///
/// let msg = Message::new("welcome", "en_US")
///     .prefixed()
///     .arg("name", "Ada")
///     .resolve(&table);
/// assert_eq!(msg.text(), "[Srv] Hi Ada!");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    key: String,
    locale: String,
    options: MessageOptions,
}

impl Message {
    pub fn new(key: impl Into<String>, audience: impl LocaleSource) -> Self {
        let key = key.into();
        if key.is_empty() {
            warn!("message built with an empty key; it resolves to the missing-key notice");
        }
        Self {
            key,
            locale: audience.locale().to_string(),
            options: MessageOptions::default(),
        }
    }

    /// Prefix every line: the custom prefix if one was given, else the
    /// table's configured prefix.
    pub fn prefixed(mut self) -> Self {
        self.options.prefixed = true;
        self
    }

    /// Turn prefixing off. A custom prefix is remembered for a later
    /// [`Message::prefixed`].
    pub fn unprefixed(mut self) -> Self {
        self.options.prefixed = false;
        self
    }

    /// Use `prefix` instead of the table's prefix; implies [`Message::prefixed`].
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.custom_prefix = Some(prefix.into());
        self.options.prefixed = true;
        self
    }

    /// Set a placeholder; re-adding a name overwrites it.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.options.placeholders.insert(name.into(), value.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn options(&self) -> &MessageOptions {
        &self.options
    }

    /// Resolve against `table`. Never fails: a missing key yields the notice.
    pub fn resolve(&self, table: &TranslationTable) -> ResolvedMessage {
        let lookup = resolve_lines(table, &self.key, &self.locale);

        let (source, text) = match lookup {
            Lookup::Exact(lines) => (
                MessageSource::Requested(normalize_locale(&self.locale)),
                self.options.apply(table, lines),
            ),
            Lookup::Default(lines) => (
                MessageSource::DefaultLocale(table.default_locale().to_string()),
                self.options.apply(table, lines),
            ),
            Lookup::Missing => (
                MessageSource::Missing,
                MissingMessage { key: &self.key }.to_string(),
            ),
        };

        ResolvedMessage {
            key: self.key.clone(),
            source,
            text,
        }
    }

    /// Resolve against the table currently installed in `store`.
    pub fn resolve_in(&self, store: &TranslationStore) -> Result<ResolvedMessage, I18nError> {
        let table = store.get()?;
        Ok(self.resolve(&table))
    }

    /// Resolve against [`TranslationStore::global`].
    pub fn resolve_global(&self) -> Result<ResolvedMessage, I18nError> {
        self.resolve_in(TranslationStore::global())
    }
}

/// Final text of a message, ready for a markup renderer or plain delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedMessage {
    key: String,
    source: MessageSource,
    text: String,
}

impl ResolvedMessage {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn source(&self) -> &MessageSource {
        &self.source
    }

    pub fn is_missing(&self) -> bool {
        self.source == MessageSource::Missing
    }

    /// Lines joined with `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for ResolvedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
