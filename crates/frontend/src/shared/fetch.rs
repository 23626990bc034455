//! Fetching dictionaries and partials from the static site.

use contracts::shared::config::I18nConfig;
use contracts::shared::i18n::{dictionary_path, Dictionary, PartialRef};
use contracts::shared::locale::Locale;
use gloo_net::http::Request;
use web_sys::RequestCache;

/// Load the translation dictionary for `locale`, bypassing the HTTP cache
pub async fn load_dictionary(config: &I18nConfig, locale: Locale) -> Result<Dictionary, String> {
    let url = dictionary_path(&config.dictionary_path, locale);

    let response = Request::get(&url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Dictionary {} failed: {}", url, response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read dictionary {}: {}", url, e))?;

    let dict = Dictionary::from_json(&body)
        .map_err(|e| format!("Failed to parse dictionary {}: {}", url, e))?;
    if dict.is_empty() {
        log::warn!("Dictionary {} has no entries", url);
    } else {
        log::debug!("Loaded {} entries from {}", dict.len(), url);
    }
    Ok(dict)
}

/// Load the dictionary for `locale`, then the fallback locale's.
///
/// Returns `None` when neither can be loaded; the page then keeps its
/// authored text.
pub async fn load_dictionary_or_fallback(config: &I18nConfig, locale: Locale) -> Option<Dictionary> {
    let err = match load_dictionary(config, locale).await {
        Ok(dict) => return Some(dict),
        Err(err) => err,
    };
    log::error!("Failed to load {} dictionary: {}", locale, err);

    let fallback = config.fallback_locale;
    if fallback == locale {
        return None;
    }
    match load_dictionary(config, fallback).await {
        Ok(dict) => {
            log::warn!("Using {} dictionary instead of {}", fallback, locale);
            Some(dict)
        }
        Err(err) => {
            log::error!("Failed to load fallback {} dictionary: {}", fallback, err);
            None
        }
    }
}

/// Fetch the markup of a partial
pub async fn fetch_partial(partial: &PartialRef) -> Result<String, String> {
    let response = Request::get(&partial.path)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Partial {} failed: {}", partial.path, response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read partial {}: {}", partial.path, e))
}
