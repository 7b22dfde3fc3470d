//! Lingo markup
//!
//! Renders the inline tag language used in translation lines:
//! - [`parse`] turns tagged text into [`RichText`] (lines of styled spans)
//! - [`strip`] drops the tags for plain-text delivery
//!
//! Unrecognized tags are not errors; they stay in the text as written.

mod color;
mod parser;
mod rich;

pub use color::Color;
pub use parser::{parse, strip};
pub use rich::{RichLine, RichText, Style, TextSpan};
