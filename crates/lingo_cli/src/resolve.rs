//! `lingo resolve`

use lingo_i18n::{Message, MessageSource, TranslationTable};

use crate::cli::ResolveArgs;
use crate::config::OutputFormat;
use crate::render::render;

/// Assemble the message described by the command line.
pub fn build_message(args: &ResolveArgs, table: &TranslationTable) -> Message {
    let locale = args
        .locale
        .clone()
        .unwrap_or_else(|| table.default_locale().to_string());

    let mut msg = Message::new(args.key.as_str(), locale);
    if args.prefix {
        msg = msg.prefixed();
    }
    if let Some(prefix) = &args.with_prefix {
        msg = msg.with_prefix(prefix.as_str());
    }
    for (name, value) in &args.args {
        msg = msg.arg(name.as_str(), value.as_str());
    }
    msg
}

/// Resolve and render; the returned text goes to stdout.
pub fn run(args: &ResolveArgs, table: &TranslationTable, format: OutputFormat) -> String {
    let resolved = build_message(args, table).resolve(table);
    match resolved.source() {
        MessageSource::Requested(locale) => tracing::debug!(key = %args.key, %locale, "resolved"),
        MessageSource::DefaultLocale(locale) => {
            tracing::info!(key = %args.key, %locale, "resolved via default locale")
        }
        MessageSource::Missing => {}
    }
    render(resolved.text(), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> TranslationTable {
        TranslationTable::parse(
            r#"
defaultLocale: en
prefix: "<gray>[Srv]"
translations:
  welcome:
    en: ["Hi {name}!"]
    de: ["Hallo {name}!"]
"#,
        )
        .unwrap()
    }

    fn args(locale: Option<&str>) -> ResolveArgs {
        ResolveArgs {
            key: "welcome".to_string(),
            locale: locale.map(str::to_string),
            prefix: false,
            with_prefix: None,
            args: vec![("name".to_string(), "Ada".to_string())],
            format: None,
        }
    }

    #[test]
    fn locale_defaults_to_table_default() {
        let t = table();
        assert_eq!(run(&args(None), &t, OutputFormat::Plain), "Hi Ada!");
        assert_eq!(run(&args(Some("DE")), &t, OutputFormat::Plain), "Hallo Ada!");
    }

    #[test]
    fn prefix_flags() {
        let t = table();
        let mut a = args(Some("en"));
        a.prefix = true;
        assert_eq!(run(&a, &t, OutputFormat::Markup), "<gray>[Srv] Hi Ada!");

        a.prefix = false;
        a.with_prefix = Some("»".to_string());
        assert_eq!(run(&a, &t, OutputFormat::Plain), "» Hi Ada!");
    }

    #[test]
    fn missing_key_prints_notice() {
        let t = table();
        let mut a = args(Some("en"));
        a.key = "nope".to_string();
        assert_eq!(
            run(&a, &t, OutputFormat::Plain),
            "No Message for key \"nope\"!"
        );
    }
}
