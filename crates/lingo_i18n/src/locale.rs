/// Normalize a locale identifier into the table's key format.
///
/// - Lower-cases the whole tag.
/// - Converts `_` to `-` (hosts often report `en_US`).
///
/// Any input normalizes; an unknown tag simply matches nothing downstream.
/// No partial matching: `en-us` never falls back to `en`.
pub fn normalize_locale(s: &str) -> String {
    s.to_lowercase().replace('_', "-")
}

/// Anything that carries the locale a message should be resolved for.
///
/// Only the locale tag is ever read; identities may carry whatever else
/// they like.
pub trait LocaleSource {
    fn locale(&self) -> &str;
}

impl LocaleSource for str {
    fn locale(&self) -> &str {
        self
    }
}

impl LocaleSource for String {
    fn locale(&self) -> &str {
        self.as_str()
    }
}

impl<T: LocaleSource + ?Sized> LocaleSource for &T {
    fn locale(&self) -> &str {
        (**self).locale()
    }
}
