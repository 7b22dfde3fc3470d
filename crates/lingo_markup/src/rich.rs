//! Rich text produced from markup
//!
//! A [`RichText`] is a list of lines; each line keeps its plain text plus
//! style spans over byte ranges of that text.
//!
//! # Example
//!
//! ```
//! use lingo_markup::{Color, Style};
//!
//! let rich = lingo_markup::parse("<yellow>Hi</yellow> there\n<bold>Bye");
//! assert_eq!(rich.line_count(), 2);
//! assert_eq!(rich.lines[0].text, "Hi there");
//! assert_eq!(rich.lines[0].spans[0].style, Style::default().with_color(Color::YELLOW));
//! assert_eq!(rich.plain_text(), "Hi there\nBye");
//! ```

use crate::color::Color;

/// Visual attributes of a span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// `None` means the renderer's default color.
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
}

impl Style {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}

/// A styled byte range within a line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSpan {
    /// Start byte index in the line
    pub start: usize,
    /// End byte index in the line (exclusive)
    pub end: usize,
    pub style: Style,
}

impl TextSpan {
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }
}

/// One line of text with its spans (sorted, non-overlapping, covering the
/// whole line).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RichLine {
    pub text: String,
    pub spans: Vec<TextSpan>,
}

impl RichLine {
    /// A line with a single style for all text
    pub fn plain(text: impl Into<String>, style: Style) -> Self {
        let text = text.into();
        let spans = if text.is_empty() {
            Vec::new()
        } else {
            vec![TextSpan::new(0, text.len(), style)]
        };
        Self { text, spans }
    }

    /// Append text, extending the last span when the style matches.
    pub fn push_str(&mut self, s: &str, style: Style) {
        if s.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(s);
        let end = self.text.len();

        match self.spans.last_mut() {
            Some(last) if last.style == style && last.end == start => last.end = end,
            _ => self.spans.push(TextSpan::new(start, end, style)),
        }
    }

    /// Iterate `(text, style)` pieces in order.
    pub fn segments(&self) -> impl Iterator<Item = (&str, Style)> {
        self.spans
            .iter()
            .map(|span| (&self.text[span.start..span.end], span.style))
    }
}

/// Complete rich text, one entry per line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RichText {
    pub lines: Vec<RichLine>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unstyled text, split on `\n`.
    pub fn plain(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| RichLine::plain(line, Style::default()))
            .collect();
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text without any styling, lines joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
