//! HTML partial inclusion (navbar, footer and generic `data-include` slots).

use super::i18n::{apply_translations, rewrite_links, set_brand_link};
use super::locale_context::LocaleContext;
use crate::shared::dom::{self, query_all};
use crate::shared::fetch::fetch_partial;
use contracts::shared::config::PartialsConfig;
use contracts::shared::i18n::{Dictionary, PartialRef};
use web_sys::{Document, Element};

/// An element waiting for a partial.
pub struct Slot {
    pub element: Element,
    pub partial: PartialRef,
}

/// Fixed-id slots first, then every element carrying the include attribute.
pub fn find_slots(document: &Document, config: &PartialsConfig) -> Vec<Slot> {
    let mut slots: Vec<Slot> = config
        .slots
        .iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?;
            Some(Slot {
                element,
                partial: PartialRef::new(id, &config.path),
            })
        })
        .collect();

    let Some(root) = document.document_element() else {
        return slots;
    };
    let selector = format!("[{}]", config.include_attribute);
    for element in query_all(&root, &selector) {
        if config.slots.contains(&element.id()) {
            continue;
        }
        let Some(name) = element
            .get_attribute(&config.include_attribute)
            .filter(|n| !n.trim().is_empty())
        else {
            continue;
        };
        slots.push(Slot {
            partial: PartialRef::new(&name, &config.path),
            element,
        });
    }
    slots
}

/// Fetches a partial into its slot, then translates it and fixes its links.
/// A failed fetch leaves the slot empty.
pub async fn include_partial(
    ctx: LocaleContext,
    slot: Slot,
    dict: Option<&Dictionary>,
) -> Result<(), String> {
    let Slot { element, partial } = slot;

    let html = match fetch_partial(&partial).await {
        Ok(html) => html,
        Err(err) => {
            element.set_inner_html("");
            return Err(err);
        }
    };
    element.set_inner_html(&html);

    let config = ctx.config();
    let locale = ctx.get_locale();
    if let Some(dict) = dict {
        apply_translations(&element, dict, &config.i18n.key_attribute);
    }
    rewrite_links(&element, locale);

    if partial.is_navbar() {
        if let Some(root) = dom::document_root() {
            set_brand_link(&root, &config.partials.brand_selector, locale);
        }
        wire_locale_selectors(ctx, &element, &config.partials.locale_selector);
    }
    log::debug!("Included partial {} from {}", partial.name, partial.path);
    Ok(())
}

fn wire_locale_selectors(ctx: LocaleContext, navbar: &Element, selector: &str) {
    for item in query_all(navbar, selector) {
        let lang = item.get_attribute("data-lang").unwrap_or_default();
        dom::listen(&item, "click", move |event| {
            event.prevent_default();
            ctx.switch_locale(&lang);
        });
    }
}
