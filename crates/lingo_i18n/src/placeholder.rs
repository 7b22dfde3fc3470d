use rustc_hash::FxHashMap;

use crate::message::ArgValue;

/// Placeholder name (without braces) -> value.
pub type Placeholders = FxHashMap<String, ArgValue>;

/// Replace every `{name}` token whose name is in `args`.
///
/// Single left-to-right pass: substituted values are copied to the output and
/// never scanned again, so a value containing `{other}` stays literal. Tokens
/// with no matching argument, and stray braces, are kept as-is.
pub fn apply_placeholders(tmpl: &str, args: &Placeholders) -> String {
    if args.is_empty() || !tmpl.contains('{') {
        return tmpl.to_string();
    }

    let mut out = String::with_capacity(tmpl.len() + 8);
    let mut rest = tmpl;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let token = after
            .find('}')
            .and_then(|close| args.get(&after[..close]).map(|v| (close, v)));

        match token {
            Some((close, value)) => {
                out.push_str(&value.to_string());
                rest = &after[close + 1..];
            }
            None => {
                // Not a known token: keep the brace and rescan from the next char,
                // so `{{name}` still substitutes the inner `{name}`.
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
