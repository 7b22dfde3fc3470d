//! Terminal rendering of resolved messages.

use colored::{ColoredString, Colorize};
use lingo_markup::{RichText, Style};

use crate::config::OutputFormat;

/// Render markup text for stdout in the requested format.
pub fn render(text: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Markup => text.to_string(),
        OutputFormat::Plain => lingo_markup::strip(text),
        OutputFormat::Ansi => to_ansi(&lingo_markup::parse(text)),
    }
}

fn styled(text: &str, style: Style) -> ColoredString {
    let mut out = text.normal();
    if let Some(c) = style.color {
        out = out.truecolor(c.r, c.g, c.b);
    }
    if style.bold {
        out = out.bold();
    }
    if style.italic {
        out = out.italic();
    }
    if style.underlined {
        out = out.underline();
    }
    if style.strikethrough {
        out = out.strikethrough();
    }
    out
}

pub fn to_ansi(rich: &RichText) -> String {
    rich.lines
        .iter()
        .map(|line| {
            line.segments()
                .map(|(text, style)| styled(text, style).to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
