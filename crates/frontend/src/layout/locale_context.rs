//! Active locale of the page and the switch action exposed to the navbar.

use super::i18n::{apply_translations, rewrite_links, set_brand_link};
use crate::shared::{dom, fetch, storage};
use contracts::shared::config::SiteConfig;
use contracts::shared::locale::{query_param, resolve_locale, Locale, LocaleSources};
use contracts::shared::locale_switch::{plan_switch, LocaleSwitcher, SwitchPlan};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

/// Reads every locale source the browser offers and resolves the locale.
fn detect_locale(config: &SiteConfig) -> Locale {
    let Some(window) = window() else {
        return Locale::default();
    };
    let location = window.location();

    let search = location.search().unwrap_or_default();
    let query_lang = query_param(&search, &config.i18n.query_param);
    let path = location.pathname().unwrap_or_default();
    let stored = storage::load_locale(&config.i18n.storage_key);
    let document_lang = dom::document_root().and_then(|root| root.get_attribute("lang"));
    let browser_lang = window.navigator().language();

    resolve_locale(&LocaleSources {
        query_lang: query_lang.as_deref(),
        path: &path,
        stored: stored.as_deref(),
        document_lang: document_lang.as_deref(),
        browser_lang: browser_lang.as_deref(),
    })
}

/// Locale context type.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    /// Current locale signal.
    pub locale: RwSignal<Locale>,
    switcher: RwSignal<LocaleSwitcher>,
    config: StoredValue<SiteConfig>,
}

impl LocaleContext {
    /// Resolves the page locale and mirrors it to `<html lang>`.
    pub fn detect(config: SiteConfig) -> Self {
        let locale = detect_locale(&config);
        dom::set_document_lang(locale);
        log::info!("Resolved page locale: {}", locale);

        Self {
            locale: RwSignal::new(locale),
            switcher: RwSignal::new(LocaleSwitcher::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn get_locale(&self) -> Locale {
        self.locale.get_untracked()
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn switch_mark(&self) -> u64 {
        self.switcher.with_untracked(|s| s.mark())
    }

    /// Whether an in-place switch started after `mark` was taken.
    pub fn switched_since(&self, mark: u64) -> bool {
        self.switcher.with_untracked(|s| s.switched_since(mark))
    }

    /// Switch to `requested` (`"en"` / `"id"`, surrounding whitespace
    /// allowed); anything else is ignored.
    ///
    /// Navigates when the URL has to change, otherwise reloads the dictionary
    /// and re-translates the page in place.
    pub fn switch_locale(&self, requested: &str) {
        let locale = match requested.trim().parse::<Locale>() {
            Ok(locale) => locale,
            Err(err) => {
                log::debug!("Ignoring locale switch: {}", err);
                return;
            }
        };

        let config = self.config();
        storage::save_locale(&config.i18n.storage_key, locale);
        dom::set_document_lang(locale);
        self.locale.set(locale);

        let Some(location) = window().map(|w| w.location()) else {
            return;
        };
        let pathname = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();

        match plan_switch(&pathname, &search, &hash, locale) {
            SwitchPlan::Navigate(url) => {
                log::info!("Switching locale to {}: {}", locale, url);
                if let Err(err) = location.assign(&url) {
                    log::error!("Failed to navigate to {}: {:?}", url, err);
                }
            }
            SwitchPlan::InPlace => self.retranslate(locale),
        }
    }

    fn retranslate(&self, locale: Locale) {
        let Some(ticket) = self.switcher.try_update(|s| s.begin(locale)) else {
            return;
        };
        let ctx = *self;

        spawn_local(async move {
            let config = ctx.config();
            let result = fetch::load_dictionary(&config.i18n, locale).await;

            // A newer switch started while this one was loading.
            if ctx.switcher.try_update(|s| s.finish(ticket)).flatten().is_none() {
                log::debug!("Dropping stale {} dictionary", locale);
                return;
            }

            let Some(document) = dom::document() else {
                return;
            };
            match result {
                Ok(dict) => {
                    if let Some(body) = document.body() {
                        let count = apply_translations(&body, &dict, &config.i18n.key_attribute);
                        log::debug!("Re-translated {} elements to {}", count, locale);
                    }
                }
                Err(err) => log::error!("Failed to load {} dictionary: {}", locale, err),
            }
            if let Some(root) = document.document_element() {
                rewrite_links(&root, locale);
                set_brand_link(&root, &config.partials.brand_selector, locale);
            }
        });
    }
}

/// Hook to use the locale context.
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext not found. It is provided by App.")
}
