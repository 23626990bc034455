//! Applying a dictionary and a locale to a DOM subtree.

use crate::shared::dom::{query, query_all};
use contracts::shared::i18n::Dictionary;
use contracts::shared::links::{home_href, rewrite_href};
use contracts::shared::locale::Locale;
use web_sys::Element;

/// Replaces the text of every element under `root` tagged with
/// `key_attribute` whose key has a value in `dict`. Returns how many were
/// translated.
pub fn apply_translations(root: &Element, dict: &Dictionary, key_attribute: &str) -> usize {
    let mut translated = 0;
    for node in query_all(root, &format!("[{}]", key_attribute)) {
        let Some(key) = node.get_attribute(key_attribute) else {
            continue;
        };
        if let Some(text) = dict.text(&key) {
            node.set_text_content(Some(&text));
            translated += 1;
        }
    }
    translated
}

/// Points relative links under `root` into the `locale` folder.
pub fn rewrite_links(root: &Element, locale: Locale) {
    for anchor in query_all(root, "a[href]") {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        if let Some(target) = rewrite_href(&href, locale) {
            let _ = anchor.set_attribute("href", &target);
        }
    }
}

/// Points the navbar brand/logo at the locale's home page.
pub fn set_brand_link(root: &Element, selector: &str, locale: Locale) {
    if let Some(brand) = query(root, selector) {
        let _ = brand.set_attribute("href", &home_href(locale));
    }
}
