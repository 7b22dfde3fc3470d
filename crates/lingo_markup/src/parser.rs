//! Inline tag parser.
//!
//! Tags look like `<yellow>`, `<#ff8800>`, `<color:gold>`, `<bold>`, and are
//! closed with `</name>` or cleared with `<reset>`. A closing tag pops the
//! innermost matching open tag together with everything opened after it.
//! Anything that is not a recognized tag stays in the text verbatim, and
//! `\<` produces a literal `<`.

use crate::color::Color;
use crate::rich::{RichLine, RichText, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Effect {
    Color(Color),
    Bold,
    Italic,
    Underlined,
    Strikethrough,
}

impl Effect {
    fn apply(self, style: &mut Style) {
        match self {
            Effect::Color(c) => style.color = Some(c),
            Effect::Bold => style.bold = true,
            Effect::Italic => style.italic = true,
            Effect::Underlined => style.underlined = true,
            Effect::Strikethrough => style.strikethrough = true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Tag {
    Open { name: String, effect: Effect },
    Close { name: String },
    Reset,
}

const COLOR_TAG: &str = "color";

/// Canonical name of a tag body, shared by opening and closing forms.
fn canonical(body: &str) -> Option<(String, Option<Effect>)> {
    let body = body.to_ascii_lowercase();

    if let Some((head, arg)) = body.split_once(':') {
        if matches!(head, "color" | "colour" | "c") {
            let effect = if arg.is_empty() {
                None
            } else {
                Some(Effect::Color(Color::parse(arg)?))
            };
            return Some((COLOR_TAG.to_string(), effect));
        }
        return None;
    }

    let effect = match body.as_str() {
        "color" | "colour" | "c" => return Some((COLOR_TAG.to_string(), None)),
        "bold" | "b" => Some(("bold", Effect::Bold)),
        "italic" | "i" | "em" => Some(("italic", Effect::Italic)),
        "underlined" | "u" => Some(("underlined", Effect::Underlined)),
        "strikethrough" | "st" => Some(("strikethrough", Effect::Strikethrough)),
        _ => None,
    };
    if let Some((name, effect)) = effect {
        return Some((name.to_string(), Some(effect)));
    }

    Color::parse(&body).map(|c| (body.clone(), Some(Effect::Color(c))))
}

/// Try to read a tag at the start of `src` (which begins with `<`).
/// Returns the tag and its byte length.
fn read_tag(src: &str) -> Option<(Tag, usize)> {
    let end = src.find('>')?;
    let body = &src[1..end];
    if body.is_empty() || body.chars().any(|c| c == '<' || c.is_whitespace()) {
        return None;
    }

    let tag = if let Some(name) = body.strip_prefix('/') {
        let (name, _) = canonical(name)?;
        Tag::Close { name }
    } else if body.eq_ignore_ascii_case("reset") {
        Tag::Reset
    } else {
        match canonical(body)? {
            (name, Some(effect)) => Tag::Open { name, effect },
            // `<color>` without an argument has nothing to apply.
            (_, None) => return None,
        }
    };
    Some((tag, end + 1))
}

struct Builder {
    text: RichText,
    stack: Vec<(String, Effect)>,
    style: Style,
}

impl Builder {
    fn new() -> Self {
        Self {
            text: RichText {
                lines: vec![RichLine::default()],
            },
            stack: Vec::new(),
            style: Style::default(),
        }
    }

    fn push_str(&mut self, s: &str) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_str(s, self.style);
        }
    }

    fn new_line(&mut self) {
        self.text.lines.push(RichLine::default());
    }

    fn tag(&mut self, tag: Tag) {
        match tag {
            Tag::Open { name, effect } => self.stack.push((name, effect)),
            Tag::Close { name } => {
                // Unmatched closing tags are dropped.
                if let Some(pos) = self.stack.iter().rposition(|(n, _)| *n == name) {
                    self.stack.truncate(pos);
                }
            }
            Tag::Reset => self.stack.clear(),
        }
        self.restyle();
    }

    fn restyle(&mut self) {
        let mut style = Style::default();
        for (_, effect) in &self.stack {
            effect.apply(&mut style);
        }
        self.style = style;
    }
}

/// Parse markup into [`RichText`]. Never fails.
pub fn parse(src: &str) -> RichText {
    let mut out = Builder::new();
    let mut rest = src;

    while let Some(c) = rest.chars().next() {
        match c {
            '\\' if rest[1..].starts_with('<') || rest[1..].starts_with('\\') => {
                out.push_str(&rest[1..2]);
                rest = &rest[2..];
            }
            '\n' => {
                out.new_line();
                rest = &rest[1..];
            }
            '<' => match read_tag(rest) {
                Some((tag, len)) => {
                    out.tag(tag);
                    rest = &rest[len..];
                }
                None => {
                    out.push_str("<");
                    rest = &rest[1..];
                }
            },
            _ => {
                // Copy the run up to the next special character in one go.
                let first = c.len_utf8();
                let run = rest[first..]
                    .find(|ch: char| matches!(ch, '\\' | '\n' | '<'))
                    .map_or(rest.len(), |i| first + i);
                out.push_str(&rest[..run]);
                rest = &rest[run..];
            }
        }
    }

    out.text
}

/// Remove all recognized tags, keeping the text.
pub fn strip(src: &str) -> String {
    parse(src).plain_text()
}
