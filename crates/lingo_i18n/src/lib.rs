//! Lingo message resolution
//!
//! Turns a message key plus an audience locale into display text:
//! - `TranslationTable`: key -> locale -> lines, loaded from a YAML document
//! - `TranslationStore`: the installed table, swapped atomically on reload
//! - `resolve_lines`: exact locale, then the table's default locale, then a
//!   visible missing-key notice
//! - `Message`: prefix and placeholder options applied on top of the lines
//!
//! The resulting text keeps its inline markup tags untouched; rendering them
//! is left to the caller.

mod error;
mod locale;
mod message;
mod placeholder;
mod resolver;
pub mod source;
mod store;
mod table;

pub use error::{I18nError, LoadError};
pub use locale::{normalize_locale, LocaleSource};
pub use message::{ArgValue, Message, MessageOptions, MessageSource, ResolvedMessage};
pub use placeholder::{apply_placeholders, Placeholders};
pub use resolver::{resolve_lines, Lookup, MissingMessage};
pub use store::TranslationStore;
pub use table::{TranslationTable, DEFAULT_LOCALE};

/// Convenience macro for building a [`Message`] with placeholders.
///
/// Examples:
/// - `msg!("welcome", "en_US")`
/// - `msg!("welcome", player_locale, { name: user_name, count: 3 })`
#[macro_export]
macro_rules! msg {
    ($key:expr, $audience:expr) => {
        $crate::Message::new($key, $audience)
    };
    ($key:expr, $audience:expr, { $($name:ident : $value:expr),* $(,)? }) => {{
        let mut m = $crate::Message::new($key, $audience);
        $(
            m = m.arg(stringify!($name), $value);
        )*
        m
    }};
}
