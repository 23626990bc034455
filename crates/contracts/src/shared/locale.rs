//! Site locales and locale resolution.
//!
//! The site ships in exactly two languages. Which one is active is decided
//! once per page load from the URL, the persisted preference, the document and
//! the browser, in that order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported site locales.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Id,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unsupported locale `{0}` (expected `en` or `id`)")]
    Unsupported(String),
}

impl Locale {
    /// Returns the locale code used in URLs, storage and `<html lang>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    /// Case-insensitive parse of an exact locale code. Anything else,
    /// including padded values, returns `None`.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("en") {
            Some(Locale::En)
        } else if value.eq_ignore_ascii_case("id") {
            Some(Locale::Id)
        } else {
            None
        }
    }

    /// Maps a browser language tag (`id-ID`, `en-US`, ...) to a site locale.
    /// Indonesian variants become `Id`, everything else falls back to `En`.
    pub fn from_browser_language(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("id") {
            Locale::Id
        } else {
            Locale::En
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| LocaleError::Unsupported(s.to_string()))
    }
}

/// Everything the browser knows that can pin down the active locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleSources<'a> {
    /// Value of the `lang` query parameter, if present.
    pub query_lang: Option<&'a str>,
    /// `location.pathname`.
    pub path: &'a str,
    /// Previously persisted preference.
    pub stored: Option<&'a str>,
    /// `<html lang>` as authored.
    pub document_lang: Option<&'a str>,
    /// `navigator.language`.
    pub browser_lang: Option<&'a str>,
}

/// Value of the first `name` parameter in a `location.search` string.
///
/// Repeated, bracketed or valueless parameters elsewhere in the query do not
/// affect the lookup.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Returns the first locale found in `path` segments, ignoring empty ones.
pub fn locale_from_path(path: &str) -> Option<Locale> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .find_map(Locale::parse)
}

/// Resolves the active locale. First match wins:
/// query parameter, path segment, stored preference, document language,
/// browser language. The last step always produces a value.
pub fn resolve_locale(sources: &LocaleSources<'_>) -> Locale {
    if let Some(locale) = sources.query_lang.and_then(Locale::parse) {
        return locale;
    }
    if let Some(locale) = locale_from_path(sources.path) {
        return locale;
    }
    if let Some(locale) = sources.stored.and_then(Locale::parse) {
        return locale;
    }
    if let Some(locale) = sources.document_lang.and_then(Locale::parse) {
        return locale;
    }
    Locale::from_browser_language(sources.browser_lang.unwrap_or("en"))
}
