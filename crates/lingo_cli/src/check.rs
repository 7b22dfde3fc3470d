//! `lingo check`: locale coverage of a translation table.

use colored::Colorize;
use lingo_i18n::TranslationTable;

/// Per-locale coverage statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Keys with a non-empty entry in this locale.
    pub present: usize,
    /// Keys this locale lacks; they resolve via the default locale, if at all.
    pub missing: Vec<String>,
    pub coverage_percent: f32,
}

/// Coverage report for a translation table.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub total_keys: usize,
    pub default_locale: String,
    pub locales: Vec<LocaleCoverage>,
    /// Keys with no usable default-locale entry. Requests for these show the
    /// missing-key notice in every locale that lacks them.
    pub without_default: Vec<String>,
}

impl CoverageReport {
    pub fn from_table(table: &TranslationTable) -> Self {
        let keys = table.keys();
        let total = keys.len();
        let has = |key: &str, locale: &str| table.lines(key, locale).is_some_and(|l| !l.is_empty());

        let mut locales: Vec<&str> = table.locales();
        if !locales.contains(&table.default_locale()) {
            locales.push(table.default_locale());
            locales.sort_unstable();
        }

        let locales = locales
            .into_iter()
            .map(|locale| {
                let missing: Vec<String> = keys
                    .iter()
                    .filter(|key| !has(key, locale))
                    .map(|key| key.to_string())
                    .collect();
                let present = total - missing.len();
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    locale: locale.to_string(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        let without_default = keys
            .iter()
            .filter(|key| !has(key, table.default_locale()))
            .map(|key| key.to_string())
            .collect();

        Self {
            total_keys: total,
            default_locale: table.default_locale().to_string(),
            locales,
            without_default,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.without_default.is_empty()
    }

    /// Human-readable summary for the terminal.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{} keys, default locale {}\n",
            self.total_keys,
            self.default_locale.bold()
        );
        for cov in &self.locales {
            let marker = if cov.locale == self.default_locale { "*" } else { " " };
            out.push_str(&format!(
                "{marker} {:<10} {:>4}/{:<4} {:>5.1}%\n",
                cov.locale, cov.present, self.total_keys, cov.coverage_percent
            ));
        }
        for key in &self.without_default {
            out.push_str(&format!(
                "{} `{key}` has no {} entry\n",
                "warning:".bold().yellow(),
                self.default_locale
            ));
        }
        out
    }
}
