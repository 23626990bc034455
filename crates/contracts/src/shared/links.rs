//! Same-site link retargeting.
//!
//! Pages live under `/{locale}/...`. After a partial is injected (or the
//! locale is switched in place) every relative link has to point into the
//! active locale's folder again.

use super::locale::Locale;

fn is_absolute_http(href: &str) -> bool {
    let lower = href.get(..8).unwrap_or(href).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Computes the retargeted value of an `href`.
///
/// Returns `None` when the link must be left as authored: empty links,
/// fragment links, absolute `http(s)://` links and relative links that do not
/// start with a locale folder.
pub fn rewrite_href(href: &str, locale: Locale) -> Option<String> {
    if href.is_empty() || href.starts_with('#') || is_absolute_http(href) {
        return None;
    }
    if href == "/" || href == "./" {
        return Some(format!("{}/index.html", locale));
    }

    let rest = href.strip_prefix('/').unwrap_or(href);
    let tail = rest
        .strip_prefix("en/")
        .or_else(|| rest.strip_prefix("id/"))?;

    let rewritten = format!("{}/{}", locale, tail);
    if rewritten == href {
        None
    } else {
        Some(rewritten)
    }
}

/// Returns the brand/logo target for `locale`.
pub fn home_href(locale: Locale) -> String {
    format!("{}/index.html", locale)
}
