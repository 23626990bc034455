//! Per-page boot sequence: dictionary, then partials, then the whole page.

use super::i18n::{apply_translations, rewrite_links};
use super::locale_context::{use_locale, LocaleContext};
use super::partials::{find_slots, include_partial};
use crate::shared::{dom, fetch};
use futures_util::future::join_all;
use wasm_bindgen_futures::spawn_local;

/// Starts the boot sequence for the locale provided by `App`.
pub fn start() {
    let ctx = use_locale();
    spawn_local(boot(ctx));
}

async fn boot(ctx: LocaleContext) {
    let config = ctx.config();
    let locale = ctx.get_locale();
    let mark = ctx.switch_mark();

    let dictionary = fetch::load_dictionary_or_fallback(&config.i18n, locale).await;
    let dict = dictionary.as_ref();

    let Some(document) = dom::document() else {
        return;
    };

    // Slots are independent: fetch them together, each one is post-processed
    // as soon as its own markup has arrived.
    let slots = find_slots(&document, &config.partials);
    let results = join_all(slots.into_iter().map(|slot| async move {
        let name = slot.partial.name.clone();
        (name, include_partial(ctx, slot, dict).await)
    }))
    .await;

    for (name, result) in results {
        if let Err(err) = result {
            log::error!("Failed to include partial {}: {}", name, err);
        }
    }

    // An in-place switch during boot has already translated the page.
    if ctx.switched_since(mark) {
        log::debug!("Locale switched during boot, skipping {} pass", locale);
        return;
    }
    if let (Some(body), Some(dict)) = (document.body(), dict) {
        let count = apply_translations(&body, dict, &config.i18n.key_attribute);
        log::info!("Translated {} elements to {}", count, locale);
    }
    if let Some(root) = document.document_element() {
        rewrite_links(&root, locale);
    }
}
